use crate::errors::{SettingsError, UnknownEncodingError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Encoding requested for a message.
///
/// `Auto` picks GSM 7-bit when every character is in the GSM alphabet and
/// UCS-2 otherwise. It is resolved once per message, before encoding.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum EncodingMode {
    #[default]
    Auto,
    #[serde(alias = "gsm")]
    Gsm7,
    #[serde(alias = "utf16")]
    Ucs2,
}

impl EncodingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingMode::Auto => "auto",
            EncodingMode::Gsm7 => "gsm7",
            EncodingMode::Ucs2 => "ucs2",
        }
    }
}

impl FromStr for EncodingMode {
    type Err = UnknownEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(EncodingMode::Auto),
            "gsm7" | "gsm" => Ok(EncodingMode::Gsm7),
            "ucs2" | "utf16" => Ok(EncodingMode::Ucs2),
            _ => Err(UnknownEncodingError::new(s)),
        }
    }
}

impl std::fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the CLI renders reports.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Effective settings after all configuration layers are applied.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct Settings {
    /// Encoding used when none is given on the command line
    pub default_encoding: EncodingMode,
    /// Print each character's bytes in split reports
    pub show_bytes: bool,
    /// Report format
    pub output: OutputFormat,
}

/// One settings layer as written in TOML. Absent keys leave the value from
/// earlier layers untouched.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SettingsLayer {
    #[serde(default)]
    pub default_encoding: Option<EncodingMode>,
    #[serde(default)]
    pub show_bytes: Option<bool>,
    #[serde(default)]
    pub output: Option<OutputFormat>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    settings: SettingsLayer,
}

impl Settings {
    /// Applies a layer on top of these settings.
    pub fn apply(&mut self, layer: &SettingsLayer) {
        if let Some(encoding) = layer.default_encoding {
            self.default_encoding = encoding;
        }
        if let Some(show_bytes) = layer.show_bytes {
            self.show_bytes = show_bytes;
        }
        if let Some(output) = layer.output {
            self.output = output;
        }
    }
}

/// Settings together with the files they were read from.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub settings: Settings,
    /// Layers applied, in order; `built-in` is always first
    pub sources: Vec<String>,
}

impl Config {
    /// Parses one settings layer from TOML content.
    pub fn from_toml(content: &str) -> Result<SettingsLayer, toml::de::Error> {
        let file: SettingsFile = toml::from_str(content)?;
        Ok(file.settings)
    }

    /// Loads the built-in settings bundled with the library.
    pub fn load_default() -> Result<Self, SettingsError> {
        let content = include_str!("../../sms-split.toml");
        let layer = Self::from_toml(content)
            .map_err(|source| SettingsError::Parse { path: None, source })?;

        let mut settings = Settings::default();
        settings.apply(&layer);

        Ok(Config {
            settings,
            sources: vec!["built-in".to_string()],
        })
    }

    /// Loads one settings layer from a file.
    pub fn load_from_file(path: &Path) -> Result<SettingsLayer, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| SettingsError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    /// Standard override locations, lowest priority first.
    pub fn override_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("sms-split").join("sms-split.toml"));
        }
        paths.push(PathBuf::from("sms-split.toml"));
        paths
    }

    /// Loads settings with overrides from standard locations.
    ///
    /// Layers, later ones winning key by key:
    /// 1. Built-in settings (from library)
    /// 2. `~/.config/sms-split/sms-split.toml` (user overrides)
    /// 3. `./sms-split.toml` (project-local overrides)
    /// 4. `explicit`, if given
    ///
    /// Broken optional layers are skipped with a warning; a broken explicit
    /// file is an error.
    pub fn load_with_overrides(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        let mut config = Self::load_default()?;

        for path in Self::override_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(layer) => config.merge(&layer, &path),
                Err(e) => {
                    log::warn!("ignoring settings from {:?}: {}", path, e);
                }
            }
        }

        if let Some(path) = explicit {
            let layer = Self::load_from_file(path)?;
            config.merge(&layer, path);
        }

        Ok(config)
    }

    /// Applies a layer and records where it came from.
    pub fn merge(&mut self, layer: &SettingsLayer, source: &Path) {
        log::debug!("applying settings from {:?}", source);
        self.settings.apply(layer);
        self.sources.push(source.display().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = Config::load_default().unwrap();
        assert_eq!(config.settings.default_encoding, EncodingMode::Auto);
        assert!(!config.settings.show_bytes);
        assert_eq!(config.settings.output, OutputFormat::Text);
        assert_eq!(config.sources, vec!["built-in"]);
    }

    #[test]
    fn test_load_from_toml_string() {
        let toml_content = r#"
[settings]
default_encoding = "ucs2"
show_bytes = true
"#;
        let layer = Config::from_toml(toml_content).unwrap();
        assert_eq!(layer.default_encoding, Some(EncodingMode::Ucs2));
        assert_eq!(layer.show_bytes, Some(true));
        assert_eq!(layer.output, None);
    }

    #[test]
    fn test_encoding_aliases() {
        let layer = Config::from_toml("[settings]\ndefault_encoding = \"gsm\"").unwrap();
        assert_eq!(layer.default_encoding, Some(EncodingMode::Gsm7));

        let layer = Config::from_toml("[settings]\ndefault_encoding = \"utf16\"").unwrap();
        assert_eq!(layer.default_encoding, Some(EncodingMode::Ucs2));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml("[settings]\nsegment_size = 70").is_err());
        assert!(Config::from_toml("[settings]\ndefault_encoding = \"latin1\"").is_err());
    }

    #[test]
    fn test_empty_file_is_empty_layer() {
        assert_eq!(Config::from_toml("").unwrap(), SettingsLayer::default());
    }

    #[test]
    fn test_merge_overrides_key_by_key() {
        let mut config = Config::load_default().unwrap();

        let first = SettingsLayer {
            default_encoding: Some(EncodingMode::Gsm7),
            show_bytes: Some(true),
            output: None,
        };
        let second = SettingsLayer {
            default_encoding: None,
            show_bytes: Some(false),
            output: Some(OutputFormat::Json),
        };

        config.merge(&first, Path::new("user.toml"));
        config.merge(&second, Path::new("local.toml"));

        assert_eq!(config.settings.default_encoding, EncodingMode::Gsm7);
        assert!(!config.settings.show_bytes);
        assert_eq!(config.settings.output, OutputFormat::Json);
        assert_eq!(config.sources, vec!["built-in", "user.toml", "local.toml"]);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = Config::load_from_file(Path::new("/nonexistent/sms-split.toml"));
        assert!(matches!(result, Err(SettingsError::Io { .. })));
    }

    #[test]
    fn test_encoding_mode_from_str() {
        assert_eq!("auto".parse::<EncodingMode>().unwrap(), EncodingMode::Auto);
        assert_eq!("GSM".parse::<EncodingMode>().unwrap(), EncodingMode::Gsm7);
        assert_eq!("utf16".parse::<EncodingMode>().unwrap(), EncodingMode::Ucs2);

        let err = "gsm8".parse::<EncodingMode>().unwrap_err();
        assert_eq!(err.suggestion, Some("gsm7".to_string()));
    }
}
