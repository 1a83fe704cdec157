//! Frame rendering: clear, orb layer, then dust layer.

use orbfield_core::{FieldConfig, Geometry};
use rand::Rng;

use crate::color::{Hsla, Rgba};
use crate::layers::{dust, orb};
use crate::surface::Surface;

/// Saturation, lightness and alpha of orb particles.
const ORB_SATURATION: f64 = 1.0;
const ORB_LIGHTNESS: f64 = 0.5;
const ORB_ALPHA: f64 = 0.7;

/// Near-white translucent dust.
const DUST_COLOR: Rgba = Rgba::new(255, 255, 255, 0.5);

/// Draws the orb and dust field for a given time and geometry.
#[derive(Debug, Clone)]
pub struct FieldRenderer {
    config: FieldConfig,
}

impl FieldRenderer {
    pub fn new(config: FieldConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Swap in new tuning; takes effect on the next frame.
    pub fn set_config(&mut self, config: FieldConfig) {
        self.config = config;
    }

    /// Clear the surface and draw one complete frame at `t_ms`.
    pub fn render<S, R>(&self, surface: &mut S, geometry: &Geometry, t_ms: f64, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        surface.clear();

        let center = geometry.center;
        for particle in orb::orb_particles(&self.config, t_ms, center) {
            let color = Hsla::new(particle.hue, ORB_SATURATION, ORB_LIGHTNESS, ORB_ALPHA);
            surface.fill_disc(particle.screen, self.config.particle_radius, color.to_rgba());
        }

        // Dust goes on top so it veils the sphere's silhouette.
        for mote in dust::dust_motes(&self.config, t_ms, center, rng) {
            surface.fill_disc(mote, self.config.dust_radius, DUST_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DiscBuffer;
    use orbfield_core::{Preset, Size};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_render_draws_orb_then_dust() {
        let config = Preset::Classic.field();
        let renderer = FieldRenderer::new(config);
        let geometry = Geometry::window(Size::new(1024, 768));
        let mut surface = DiscBuffer::new();
        let mut rng = StdRng::seed_from_u64(7);

        renderer.render(&mut surface, &geometry, 5000.0, &mut rng);

        let n = config.particle_count as usize;
        let m = config.dust_count as usize;
        let discs = surface.discs();
        assert_eq!(discs.len(), n + m);
        assert!(discs[..n].iter().all(|d| d.radius == config.particle_radius));
        assert!(discs[n..].iter().all(|d| d.color == DUST_COLOR));
        // First orb particle is pure red hue.
        assert_eq!((discs[0].color.r, discs[0].color.g, discs[0].color.b), (255, 0, 0));
        assert_eq!(discs[0].color.a, ORB_ALPHA);
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let renderer = FieldRenderer::new(Preset::Wave.field());
        let geometry = Geometry::window(Size::new(640, 480));
        let mut surface = DiscBuffer::new();
        let mut rng = StdRng::seed_from_u64(0);

        renderer.render(&mut surface, &geometry, 0.0, &mut rng);
        let first = surface.discs().len();
        renderer.render(&mut surface, &geometry, 50.0, &mut rng);
        assert_eq!(surface.discs().len(), first);
    }

    #[test]
    fn test_orb_centered_on_geometry() {
        let renderer = FieldRenderer::new(Preset::Mist.field());
        let geometry = Geometry::window(Size::new(1024, 768));
        let mut surface = DiscBuffer::new();
        let mut rng = StdRng::seed_from_u64(0);

        renderer.render(&mut surface, &geometry, 0.0, &mut rng);
        let pole = surface.discs()[0].center;
        assert!((pole.x - 512.0).abs() < 1e-9);
        assert!((pole.y - 384.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_config_changes_counts() {
        let mut renderer = FieldRenderer::new(Preset::Mist.field());
        renderer.set_config(Preset::Wave.field());
        assert_eq!(renderer.config().particle_count, 1000);
    }
}
