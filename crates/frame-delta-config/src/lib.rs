use frame_delta_engine::wrap::{DEFAULT_PREFIX_OFFSET, DEFAULT_WRAP_WIDTH, WrapOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config file at {config_path}: rewrap width must be at least 1")]
    InvalidWidth { config_path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewrapConfig {
    #[serde(default = "default_offset")]
    pub offset: usize,
    #[serde(default = "default_width")]
    pub width: usize,
}

fn default_offset() -> usize {
    DEFAULT_PREFIX_OFFSET
}

fn default_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

impl Default for RewrapConfig {
    fn default() -> Self {
        Self {
            offset: default_offset(),
            width: default_width(),
        }
    }
}

impl From<&RewrapConfig> for WrapOptions {
    fn from(config: &RewrapConfig) -> Self {
        WrapOptions {
            offset: config.offset,
            width: config.width,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory that relative frame and patch paths are resolved against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames_path: Option<PathBuf>,
    #[serde(default)]
    pub rewrap: RewrapConfig,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        if config.rewrap.width == 0 {
            return Err(ConfigError::InvalidWidth {
                config_path: config_path.to_path_buf(),
            });
        }

        // Expand shell variables and tilde in the loaded frames path
        config.frames_path = config
            .frames_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/frame-delta");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn wrap_options(&self) -> WrapOptions {
        WrapOptions::from(&self.rewrap)
    }

    /// Resolve `path` against `frames_path` when it is relative
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.frames_path {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/frame-delta/config.toml"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.frames_path, None);
        assert_eq!(config.wrap_options(), WrapOptions::default());
    }

    #[test]
    fn test_partial_rewrap_table_keeps_other_default() {
        let config: Config = toml::from_str("[rewrap]\nwidth = 64\n").unwrap();

        assert_eq!(config.rewrap.offset, DEFAULT_PREFIX_OFFSET);
        assert_eq!(config.rewrap.width, 64);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            frames_path: Some(PathBuf::from("/tmp/frames")),
            rewrap: RewrapConfig {
                offset: 22,
                width: 60,
            },
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/frames");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/frames"));
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "frames_path = \"$FRAME_DELTA_ROOT/anim\"\n").unwrap();

        unsafe {
            env::set_var("FRAME_DELTA_ROOT", "/custom/frames");
        }

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.frames_path, Some(PathBuf::from("/custom/frames/anim")));

        unsafe {
            env::remove_var("FRAME_DELTA_ROOT");
        }
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_rejects_zero_width() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[rewrap]\nwidth = 0\n").unwrap();

        let result = Config::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::InvalidWidth { .. })));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[rewrap]\nwidth = \"wide\"\n").unwrap();

        let result = Config::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            frames_path: Some(PathBuf::from("/tmp/test-frames")),
            rewrap: RewrapConfig::default(),
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_resolve_relative_and_absolute_paths() {
        let config = Config {
            frames_path: Some(PathBuf::from("/data/frames")),
            rewrap: RewrapConfig::default(),
        };

        assert_eq!(
            config.resolve(Path::new("anim.json")),
            PathBuf::from("/data/frames/anim.json")
        );
        assert_eq!(
            config.resolve(Path::new("/abs/anim.json")),
            PathBuf::from("/abs/anim.json")
        );
        assert_eq!(
            Config::default().resolve(Path::new("anim.json")),
            PathBuf::from("anim.json")
        );
    }
}
