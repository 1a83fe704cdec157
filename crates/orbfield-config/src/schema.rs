//! Config file schema.

use std::time::Duration;

use orbfield_core::{ConfigError, DustLaw, FieldConfig, Preset};
use serde::Deserialize;

/// Top-level application settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub preset: Preset,
    pub render_interval_ms: u64,
    pub geometry_interval_ms: u64,
    /// Fixed seed for the dust scatter; random when unset.
    pub seed: Option<u64>,
    pub log_filter: String,
    pub field: FieldOverrides,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            render_interval_ms: 50,
            geometry_interval_ms: 100,
            seed: None,
            log_filter: "orbfield=info".into(),
            field: FieldOverrides::default(),
        }
    }
}

impl AppConfig {
    /// The selected preset with `[field]` overrides applied.
    pub fn field(&self) -> FieldConfig {
        self.field.apply(self.preset.field())
    }

    pub fn render_interval(&self) -> Duration {
        Duration::from_millis(self.render_interval_ms)
    }

    pub fn geometry_interval(&self) -> Duration {
        Duration::from_millis(self.geometry_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "render_interval_ms must be positive".into(),
            ));
        }
        if self.geometry_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "geometry_interval_ms must be positive".into(),
            ));
        }
        self.field().validate()
    }
}

/// Optional per-value overrides of a preset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldOverrides {
    pub particle_count: Option<u32>,
    pub orb_radius: Option<f64>,
    pub particle_radius: Option<f64>,
    pub dust_count: Option<u32>,
    pub dust_radius: Option<f64>,
    pub dust_max_distance: Option<f64>,
    pub dust_law: Option<DustLaw>,
    pub band_count: Option<u32>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub wave_drift: Option<f64>,
}

impl FieldOverrides {
    /// Overlay the set values onto `base`.
    pub fn apply(&self, base: FieldConfig) -> FieldConfig {
        FieldConfig {
            particle_count: self.particle_count.unwrap_or(base.particle_count),
            orb_radius: self.orb_radius.unwrap_or(base.orb_radius),
            particle_radius: self.particle_radius.unwrap_or(base.particle_radius),
            dust_count: self.dust_count.unwrap_or(base.dust_count),
            dust_radius: self.dust_radius.unwrap_or(base.dust_radius),
            dust_max_distance: self.dust_max_distance.unwrap_or(base.dust_max_distance),
            dust_law: self.dust_law.unwrap_or(base.dust_law),
            band_count: self.band_count.unwrap_or(base.band_count),
            min_speed: self.min_speed.unwrap_or(base.min_speed),
            max_speed: self.max_speed.unwrap_or(base.max_speed),
            wave_drift: self.wave_drift.unwrap_or(base.wave_drift),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_mist_preset() {
        let config = AppConfig::default();
        assert_eq!(config.field(), Preset::Mist.field());
        assert_eq!(config.render_interval(), Duration::from_millis(50));
        assert_eq!(config.geometry_interval(), Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_apply_on_top_of_preset() {
        let config = AppConfig {
            preset: Preset::Classic,
            field: FieldOverrides {
                dust_law: Some(DustLaw::Wave),
                particle_count: Some(42),
                ..Default::default()
            },
            ..Default::default()
        };
        let field = config.field();
        assert_eq!(field.dust_law, DustLaw::Wave);
        assert_eq!(field.particle_count, 42);
        assert_eq!(field.orb_radius, Preset::Classic.field().orb_radius);
    }

    #[test]
    fn test_zero_interval_is_invalid() {
        let config = AppConfig {
            render_interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }
}
