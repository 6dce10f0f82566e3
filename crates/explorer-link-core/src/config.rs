use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::link::{encode, DEFAULT_ROTATION, DEFAULT_SCALE};

/// Global configuration loaded from `~/.config/explorer-link/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Scale used when a link is not seeded from a map view.
    pub default_scale: f64,
    /// Rotation in degrees used when a link is not seeded from a map view.
    pub default_rotation: f64,
    /// Charset for query values; anything other than UTF-8 selects the native encoder.
    #[serde(default = "default_charset")]
    pub charset: String,
}

fn default_charset() -> String {
    encode::UTF8.to_string()
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            default_scale: DEFAULT_SCALE,
            default_rotation: DEFAULT_ROTATION,
            charset: default_charset(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("explorer-link")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkConfig::default();
        write_to_path(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Result<LinkConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LinkConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

pub fn write_to_path(path: &Path, cfg: &LinkConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = LinkConfig::default();
        assert_eq!(cfg.default_scale, 200000.0);
        assert_eq!(cfg.default_rotation, 0.0);
        assert_eq!(cfg.charset, "UTF-8");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = LinkConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: LinkConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            default_scale = 50000.0
            default_rotation = 90.0
        "#;
        let cfg: LinkConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_scale, 50000.0);
        assert_eq!(cfg.default_rotation, 90.0);
        assert_eq!(cfg.charset, "UTF-8");
    }

    #[test]
    fn config_file_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = LinkConfig {
            default_scale: 1000.0,
            default_rotation: 12.5,
            charset: "ISO-8859-1".into(),
        };
        write_to_path(&path, &cfg).unwrap();
        assert_eq!(load_from_path(&path).unwrap(), cfg);
    }

    #[test]
    fn config_load_reports_path_on_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_scale = \"big\"").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("config.toml"));
    }
}
