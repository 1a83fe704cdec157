//! Configuration for orbfield.
//!
//! Settings live in a TOML file in the platform config directory. Every
//! key is optional; missing keys take their defaults and `[field]` entries
//! override individual values of the selected preset.

mod loader;
mod paths;
mod schema;
mod template;

pub use loader::{ConfigOrigin, load_default, load_from_path, load_or_create};
pub use paths::{create_default_config, default_config_path, default_log_path};
pub use schema::{AppConfig, FieldOverrides};
pub use template::default_config_toml;
