//! Points, spatial references, and reprojection into WGS84.
//!
//! Deep links always carry geographic (longitude/latitude) coordinates. Map
//! views usually report their center in Web Mercator, so points pass through a
//! [`Projector`] before the builder stores them.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::error::ConfigurationError;

/// Sphere radius used by Web Mercator, in meters.
const EARTH_RADIUS: f64 = 6_378_137.0;
/// Latitude at which Web Mercator becomes a square world.
const MAX_LATITUDE: f64 = 85.051_128_779_806_59;
const DEG: f64 = 180.0 / PI;

/// Spatial reference identified by its well-known id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpatialReference {
    pub wkid: u32,
}

impl SpatialReference {
    /// Geographic longitude/latitude on the WGS84 datum.
    pub const WGS84: SpatialReference = SpatialReference { wkid: 4326 };
    /// Spherical Web Mercator.
    pub const WEB_MERCATOR: SpatialReference = SpatialReference { wkid: 3857 };

    pub fn new(wkid: u32) -> Self {
        Self { wkid }
    }

    /// Well-known id with legacy Web Mercator aliases (102100, 102113) folded into 3857.
    pub fn canonical_wkid(&self) -> u32 {
        match self.wkid {
            102100 | 102113 | 900913 => Self::WEB_MERCATOR.wkid,
            wkid => wkid,
        }
    }

    pub fn is_wgs84(&self) -> bool {
        self.canonical_wkid() == Self::WGS84.wkid
    }

    pub fn is_web_mercator(&self) -> bool {
        self.canonical_wkid() == Self::WEB_MERCATOR.wkid
    }
}

impl Default for SpatialReference {
    fn default() -> Self {
        Self::WGS84
    }
}

impl PartialEq for SpatialReference {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_wkid() == other.canonical_wkid()
    }
}

impl Eq for SpatialReference {}

impl fmt::Display for SpatialReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wkid {}", self.wkid)
    }
}

/// A georeferenced point. For WGS84, `x` is longitude and `y` is latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub spatial_reference: SpatialReference,
}

impl Point {
    pub fn new(x: f64, y: f64, spatial_reference: SpatialReference) -> Self {
        Self {
            x,
            y,
            spatial_reference,
        }
    }

    pub fn wgs84(longitude: f64, latitude: f64) -> Self {
        Self::new(longitude, latitude, SpatialReference::WGS84)
    }

    pub fn web_mercator(x: f64, y: f64) -> Self {
        Self::new(x, y, SpatialReference::WEB_MERCATOR)
    }
}

/// Reprojects points between spatial references.
///
/// The builder only ever asks for WGS84 output; implementations backed by a
/// full geometry engine can support any source reference they know about.
pub trait Projector: fmt::Debug {
    fn project(&self, point: &Point, target: SpatialReference) -> Result<Point, ConfigurationError>;
}

/// Built-in projector for WGS84 and spherical Web Mercator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphericalMercator;

impl SphericalMercator {
    fn to_wgs84(x: f64, y: f64) -> (f64, f64) {
        let longitude = x / EARTH_RADIUS * DEG;
        let latitude = (2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0) * DEG;
        (longitude, latitude)
    }

    fn to_web_mercator(longitude: f64, latitude: f64) -> (f64, f64) {
        let latitude = latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        let x = EARTH_RADIUS * longitude / DEG;
        let y = EARTH_RADIUS * (PI / 4.0 + latitude / DEG / 2.0).tan().ln();
        (x, y)
    }
}

impl Projector for SphericalMercator {
    fn project(&self, point: &Point, target: SpatialReference) -> Result<Point, ConfigurationError> {
        let source = point.spatial_reference;
        if source == target {
            return Ok(Point::new(point.x, point.y, target));
        }

        let (x, y) = if source.is_web_mercator() && target.is_wgs84() {
            Self::to_wgs84(point.x, point.y)
        } else if source.is_wgs84() && target.is_web_mercator() {
            Self::to_web_mercator(point.x, point.y)
        } else {
            let wkid = if source.is_wgs84() || source.is_web_mercator() {
                target.wkid
            } else {
                source.wkid
            };
            return Err(ConfigurationError::UnsupportedSpatialReference { wkid });
        };

        tracing::trace!(from = %source, to = %target, x, y, "projected point");
        Ok(Point::new(x, y, target))
    }
}
