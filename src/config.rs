use directories::ProjectDirs;
use palette::Srgb;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DeserializeFromStr, SerializeDisplay, serde_as};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An sRGB color written as `#rrggbb`, `rrggbb`, `#rgb` or `0xrrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, SerializeDisplay)]
pub struct HexColor(pub Srgb<u8>);

impl FromStr for HexColor {
    type Err = palette::rgb::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        Ok(Self(hex.parse()?))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.0.into_components();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[serde_as]
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct PaletteConfig {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub low: Option<HexColor>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub medium: Option<HexColor>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub high: Option<HexColor>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "WindowConfig::default_size")]
    pub width: i32,
    #[serde(default = "WindowConfig::default_size")]
    pub height: i32,
}

impl WindowConfig {
    fn default_size() -> i32 {
        300
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: Self::default_size(),
            height: Self::default_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "speeddial", "speed-dial")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(environment())
        .build()?;

    Ok(s.try_deserialize()?)
}

/// `SPEED_DIAL_PALETTE__LOW=#00ff00` sets `palette.low`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("SPEED_DIAL")
        .prefix_separator("_")
        .separator("__")
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => {
            log::info!("Configuration loaded");
            c
        }
        Err(e) => {
            log::warn!("Falling back to default configuration: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_formats() {
        let green = HexColor(Srgb::new(0x00, 0xff, 0x00));
        let cases = vec!["#00ff00", "00FF00", "0x00FF00", "#0f0", "  #00ff00 "];

        for s in cases {
            assert_eq!(s.parse::<HexColor>().unwrap(), green, "input {:?}", s);
        }
        assert!("purple".parse::<HexColor>().is_err());
        assert_eq!(green.to_string(), "#00ff00");
    }

    #[test]
    fn test_palette_invalid_entries_become_unset() {
        let json = r##"{ "low": "#00ff00", "medium": "not-a-color" }"##;
        let palette: PaletteConfig = serde_json::from_str(json).unwrap();

        assert_eq!(palette.low, Some(HexColor(Srgb::new(0, 255, 0))));
        assert_eq!(palette.medium, None);
        assert_eq!(palette.high, None);
    }

    #[test]
    fn test_config_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.window.width, 300);
        assert_eq!(config.window.height, 300);
        assert!(config.labels.is_empty());
    }

    #[test]
    fn test_bundled_default_config_parses() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(config.palette.low.is_some());
        assert_eq!(config.labels.get("fan_off").map(String::as_str), Some("off"));
    }

    #[test]
    fn test_environment_overlay() {
        let vars = config::Map::from([
            ("SPEED_DIAL_PALETTE__LOW".to_string(), "#00ff00".to_string()),
            ("SPEED_DIAL_LABELS__FAN_HIGH".to_string(), "max".to_string()),
            ("OTHER_PALETTE__HIGH".to_string(), "#ff0000".to_string()),
        ]);
        let config: Config = config::Config::builder()
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.palette.low, Some(HexColor(Srgb::new(0, 255, 0))));
        assert_eq!(config.palette.high, None);
        assert_eq!(config.labels.get("fan_high").map(String::as_str), Some("max"));
    }
}
