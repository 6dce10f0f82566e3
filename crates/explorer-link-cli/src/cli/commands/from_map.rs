//! `explorer-link from-map <path>` – build a link from a saved map view state.

use anyhow::{Context, Result};
use explorer_link_core::config::LinkConfig;
use explorer_link_core::{MapViewState, UriLinkBuilder};
use std::fs;
use std::path::Path;

use super::link::render;
use crate::cli::OutputKind;

pub fn run_from_map(cfg: &LinkConfig, path: &Path, output: OutputKind) -> Result<()> {
    let state = load_map_view(path)?;
    let mut builder = UriLinkBuilder::from_map_view(&state)
        .with_context(|| format!("map view in {}", path.display()))?;
    builder.charset(cfg.charset.as_str());
    println!("{}", render(&builder, output)?);
    Ok(())
}

/// Reads TOML when the extension is `.toml`, JSON otherwise.
pub(super) fn load_map_view(path: &Path) -> Result<MapViewState> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let is_toml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
    let state = if is_toml {
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?
    } else {
        serde_json::from_str(&data).with_context(|| format!("parse {}", path.display()))?
    };
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_json_map_view() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.json");
        fs::write(
            &path,
            r#"{"item_id": "abc", "rotation": 12.0, "scale": 5000.0,
                "center": {"x": -117.1611, "y": 34.0556}}"#,
        )
        .unwrap();
        let state = load_map_view(&path).unwrap();
        let uri = UriLinkBuilder::from_map_view(&state)
            .unwrap()
            .build_uri()
            .unwrap();
        assert_eq!(
            uri.as_str(),
            "arcgis-explorer:///?itemID=abc&center=34.0556,-117.1611&rotation=12.0&scale=5000.0"
        );
    }

    #[test]
    fn load_toml_map_view() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.toml");
        fs::write(
            &path,
            "item_id = \"abc\"\nscale = 5000.0\n[center]\nx = 0.0\ny = 0.0\nspatial_reference = { wkid = 102100 }\n",
        )
        .unwrap();
        let state = load_map_view(&path).unwrap();
        assert!(state.center.spatial_reference.is_web_mercator());
        assert_eq!(state.item_id.as_deref(), Some("abc"));
    }

    #[test]
    fn unassociated_map_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.json");
        fs::write(&path, r#"{"scale": 5000.0, "center": {"x": 0.0, "y": 0.0}}"#).unwrap();
        let err = run_from_map(&LinkConfig::default(), &path, OutputKind::Uri).unwrap_err();
        assert!(format!("{:#}", err).contains("missing portal item"));
    }

    #[test]
    fn malformed_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();
        let err = load_map_view(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));
    }
}
