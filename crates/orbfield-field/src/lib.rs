//! Particle field rendering for orbfield.
//!
//! Every frame is computed from scratch: the orb layer is a rotating,
//! pulsating point sphere and the dust layer is a looser ring of motes laid
//! out by one of two placement laws. Drawing goes through the [`Surface`]
//! trait so any host with a 2D fill primitive can display it.

mod color;
mod layers;
mod renderer;
mod surface;

pub use color::{Hsla, Rgba, hsl_to_rgb};
pub use layers::{dust, orb};
pub use renderer::FieldRenderer;
pub use surface::{Disc, DiscBuffer, Surface};
