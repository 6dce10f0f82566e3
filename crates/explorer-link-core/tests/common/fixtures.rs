//! Map view and projector doubles for integration tests.

use explorer_link_core::{ConfigurationError, MapViewSnapshot, Point, Projector, SpatialReference};

/// Map view with a fixed state.
#[derive(Debug, Clone)]
pub struct FakeMapView {
    pub item_id: Option<String>,
    pub rotation: f64,
    pub scale: f64,
    pub center: Point,
}

impl MapViewSnapshot for FakeMapView {
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

/// Projector that answers every request with the same WGS84 point.
#[derive(Debug, Clone, Copy)]
pub struct FixedProjector {
    pub longitude: f64,
    pub latitude: f64,
}

impl Projector for FixedProjector {
    fn project(&self, _point: &Point, target: SpatialReference) -> Result<Point, ConfigurationError> {
        Ok(Point::new(self.longitude, self.latitude, target))
    }
}
