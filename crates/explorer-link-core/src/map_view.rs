//! Map view state the builder can be seeded from.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Read-only view of a hosting map view at the moment of sharing.
pub trait MapViewSnapshot {
    /// Map rotation in degrees.
    fn rotation(&self) -> f64;
    /// Current map scale denominator.
    fn scale(&self) -> f64;
    /// Center of the visible area, in the map's own spatial reference.
    fn visible_center(&self) -> Point;
    /// Portal item the map was loaded from; `None` for unsaved maps.
    fn item_id(&self) -> Option<&str>;
}

/// Plain record of a map view, e.g. loaded from a JSON or TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapViewState {
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub rotation: f64,
    pub scale: f64,
    pub center: Point,
}

impl MapViewSnapshot for MapViewState {
    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn visible_center(&self) -> Point {
        self.center
    }

    fn item_id(&self) -> Option<&str> {
        self.item_id.as_deref()
    }
}
