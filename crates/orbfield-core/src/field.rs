//! Field tuning: particle counts, radii, dust law and speed range.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Placement law for dust motes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DustLaw {
    /// Bands of motes with a random radial scatter and a drifting speed.
    #[default]
    Banded,
    /// Every mote rides one coherent radial wave.
    Wave,
}

impl DustLaw {
    /// Switch to the other law.
    pub fn toggle(&self) -> Self {
        match self {
            DustLaw::Banded => DustLaw::Wave,
            DustLaw::Wave => DustLaw::Banded,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DustLaw::Banded => "banded",
            DustLaw::Wave => "wave",
        }
    }
}

/// Complete parameter set for one animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Number of orb particles (N).
    pub particle_count: u32,
    /// Base orb radius (R) before pulsation.
    pub orb_radius: f64,
    /// Disc radius of each orb particle.
    pub particle_radius: f64,
    /// Number of dust motes (M).
    pub dust_count: u32,
    /// Disc radius of each dust mote.
    pub dust_radius: f64,
    /// Radial spread of the dust (D).
    pub dust_max_distance: f64,
    pub dust_law: DustLaw,
    /// Number of angular bands for the banded law.
    pub band_count: u32,
    /// Lower bound of the banded drift speed, in radians per millisecond.
    pub min_speed: f64,
    /// Upper bound of the banded drift speed, in radians per millisecond.
    pub max_speed: f64,
    /// Angular drift of the wave law, in radians per millisecond.
    pub wave_drift: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Preset::default().field()
    }
}

impl FieldConfig {
    /// Check that every parameter produces a drawable field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::Validation(
                "particle_count must be at least 1".into(),
            ));
        }
        if self.dust_count == 0 {
            return Err(ConfigError::Validation(
                "dust_count must be at least 1".into(),
            ));
        }
        if self.dust_law == DustLaw::Banded && self.band_count == 0 {
            return Err(ConfigError::Validation(
                "band_count must be at least 1 for the banded dust law".into(),
            ));
        }
        for (name, value) in [
            ("orb_radius", self.orb_radius),
            ("particle_radius", self.particle_radius),
            ("dust_radius", self.dust_radius),
            ("dust_max_distance", self.dust_max_distance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("min_speed", self.min_speed),
            ("max_speed", self.max_speed),
            ("wave_drift", self.wave_drift),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Validation(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.min_speed > self.max_speed {
            return Err(ConfigError::Validation(format!(
                "min_speed ({}) exceeds max_speed ({})",
                self.min_speed, self.max_speed
            )));
        }
        Ok(())
    }
}

/// Built-in tunings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Dense sphere inside a thick shimmering mist.
    #[default]
    Mist,
    /// Sparser sphere with a breathing dust ring.
    Wave,
    /// Small sphere, larger particles, light mist.
    Classic,
}

impl Preset {
    /// Cycle to the next preset.
    pub fn next(&self) -> Self {
        match self {
            Preset::Mist => Preset::Wave,
            Preset::Wave => Preset::Classic,
            Preset::Classic => Preset::Mist,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Mist => "mist",
            Preset::Wave => "wave",
            Preset::Classic => "classic",
        }
    }

    /// The field parameters for this preset.
    pub fn field(&self) -> FieldConfig {
        match self {
            Preset::Mist => FieldConfig {
                particle_count: 1500,
                orb_radius: 200.0,
                particle_radius: 1.0,
                dust_count: 5000,
                dust_radius: 0.55,
                dust_max_distance: 150.0,
                dust_law: DustLaw::Banded,
                band_count: 5,
                min_speed: 0.000_000_5,
                max_speed: 0.000_002,
                wave_drift: 0.0001,
            },
            Preset::Wave => FieldConfig {
                particle_count: 1000,
                orb_radius: 200.0,
                particle_radius: 1.5,
                dust_count: 1000,
                dust_radius: 0.6,
                dust_max_distance: 50.0,
                dust_law: DustLaw::Wave,
                band_count: 5,
                min_speed: 0.000_000_5,
                max_speed: 0.000_002,
                wave_drift: 0.0001,
            },
            Preset::Classic => FieldConfig {
                particle_count: 750,
                orb_radius: 180.0,
                particle_radius: 2.0,
                dust_count: 2000,
                dust_radius: 0.5,
                dust_max_distance: 100.0,
                dust_law: DustLaw::Banded,
                band_count: 5,
                min_speed: 0.000_001,
                max_speed: 0.000_004,
                wave_drift: 0.0002,
            },
        }
    }
}
