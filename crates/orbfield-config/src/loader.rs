//! Reading config files from disk.

use std::fmt;
use std::path::{Path, PathBuf};

use orbfield_core::ConfigError;

use crate::paths::{create_default_config, default_config_path};
use crate::schema::AppConfig;

/// Load and validate config from a specific TOML file.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Where a loaded config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Read from an existing file.
    Loaded(PathBuf),
    /// No file existed; the default template was written here.
    Created(PathBuf),
}

impl ConfigOrigin {
    pub fn path(&self) -> &Path {
        match self {
            Self::Loaded(path) | Self::Created(path) => path,
        }
    }
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded(path) => write!(f, "loaded config from {}", path.display()),
            Self::Created(path) => write!(f, "created default config at {}", path.display()),
        }
    }
}

/// Load config from `path`, writing the commented template first when no
/// file exists there.
pub fn load_or_create(path: &Path) -> Result<(AppConfig, ConfigOrigin), ConfigError> {
    if !path.exists() {
        create_default_config(path)?;
        return Ok((AppConfig::default(), ConfigOrigin::Created(path.to_path_buf())));
    }
    let config = load_from_path(path)?;
    Ok((config, ConfigOrigin::Loaded(path.to_path_buf())))
}

/// Load config from the platform default path.
///
/// Nothing is logged here, the caller reports the returned origin once
/// logging is up.
pub fn load_default() -> Result<(AppConfig, ConfigOrigin), ConfigError> {
    load_or_create(&default_config_path()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::default_config_toml;
    use orbfield_core::{DustLaw, Preset};

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_path(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
preset = "wave"
seed = 7

[field]
dust_count = 300
"#,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.preset, Preset::Wave);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.field().dust_count, 300);
        assert_eq!(config.field().dust_law, DustLaw::Wave);
        assert_eq!(config.render_interval_ms, 50);
        assert_eq!(config.log_filter, "orbfield=info");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "preset = [unterminated").unwrap();
        assert!(matches!(load_from_path(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_preset_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "preset = \"nebula\"").unwrap();
        assert!(matches!(load_from_path(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[field]\nband_count = 0\n").unwrap();
        assert!(matches!(
            load_from_path(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_or_create_reports_origin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orbfield").join("config.toml");

        let (config, origin) = load_or_create(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(origin, ConfigOrigin::Created(path.clone()));
        assert!(path.exists());
        assert!(origin.to_string().starts_with("created default config at "));

        let (config, origin) = load_or_create(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(origin, ConfigOrigin::Loaded(path.clone()));
        assert_eq!(origin.path(), path.as_path());
        assert_eq!(
            origin.to_string(),
            format!("loaded config from {}", path.display())
        );
    }

    #[test]
    fn test_load_or_create_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "preset = \"classic\"\n").unwrap();

        let (config, origin) = load_or_create(&path).unwrap();
        assert_eq!(config.preset, Preset::Classic);
        assert!(matches!(origin, ConfigOrigin::Loaded(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "preset = \"classic\"\n");
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config: AppConfig = toml::from_str(default_config_toml()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_create_default_config_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        create_default_config(&path).unwrap();
        let config = load_from_path(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
