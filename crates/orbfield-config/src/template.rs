/// Commented default config written on first run.
pub fn default_config_toml() -> &'static str {
    r#"# orbfield configuration

# Built-in tuning: "mist", "wave" or "classic".
preset = "mist"

# Milliseconds between animation frames.
render_interval_ms = 50

# Milliseconds between display/window geometry checks.
geometry_interval_ms = 100

# Seed for the dust scatter. Leave unset for a different mist every run.
# seed = 42

# Log filter directive (RUST_LOG takes precedence).
log_filter = "orbfield=info"

# Per-value overrides of the selected preset.
[field]
# particle_count = 1500
# orb_radius = 200.0
# particle_radius = 1.0
# dust_count = 5000
# dust_radius = 0.55
# dust_max_distance = 150.0
# dust_law = "banded"      # "banded" or "wave"
# band_count = 5
# min_speed = 0.0000005
# max_speed = 0.000002
# wave_drift = 0.0001
"#
}
