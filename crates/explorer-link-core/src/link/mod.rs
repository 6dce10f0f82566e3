//! Deep-link assembly for the `arcgis-explorer` scheme.
//!
//! A link carries a portal item id, a center, a rotation, and a scale:
//!
//! ```text
//! arcgis-explorer:///?itemID=<id>&center=<lat>,<lon>&rotation=<deg>&scale=<denominator>
//! ```
//!
//! The center is either a WGS84 coordinate, written latitude first, or free
//! text that the receiving application geocodes.

pub mod encode;
mod intent;

pub use intent::{
    Intent, IntentAction, EXTRA_SUBJECT, EXTRA_TEXT, SHARE_MIME_TYPE, SHARE_SUBJECT,
};

use serde::Serialize;
use url::Url;

use crate::config::LinkConfig;
use crate::error::ConfigurationError;
use crate::geometry::{Point, Projector, SpatialReference, SphericalMercator};
use crate::map_view::MapViewSnapshot;

pub const EXPLORER_SCHEME: &str = "arcgis-explorer";

pub const DEFAULT_SCALE: f64 = 200000.0;
pub const DEFAULT_ROTATION: f64 = 0.0;

const ITEM_ID_PARAM: &str = "itemID";
const CENTER_PARAM: &str = "center";
const ROTATION_PARAM: &str = "rotation";
const SCALE_PARAM: &str = "scale";

/// Where the linked map should be centered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Center {
    Coordinate { longitude: f64, latitude: f64 },
    Address(String),
}

impl Center {
    fn query_value(&self, charset: &str) -> String {
        match self {
            Center::Coordinate {
                longitude,
                latitude,
            } => format!("{},{}", format_double(*latitude), format_double(*longitude)),
            Center::Address(address) => encode::encode(address, charset),
        }
    }
}

impl Default for Center {
    fn default() -> Self {
        Center::Coordinate {
            longitude: 0.0,
            latitude: 0.0,
        }
    }
}

/// Float to string that always keeps a fractional part or exponent (`0.0`, `200000.0`).
fn format_double(value: f64) -> String {
    format!("{:?}", value)
}

/// Accumulates link parameters and serializes them into an explorer URI.
///
/// Setters chain on `&mut Self`; the `build_*` calls leave the builder intact.
#[derive(Debug)]
pub struct UriLinkBuilder {
    item_id: String,
    center: Center,
    scale: f64,
    rotation: f64,
    charset: String,
    projector: Box<dyn Projector>,
}

impl UriLinkBuilder {
    /// Start a link for `item_id`, which must not be empty.
    pub fn new(item_id: impl Into<String>) -> Result<Self, ConfigurationError> {
        let item_id = item_id.into();
        if item_id.is_empty() {
            return Err(ConfigurationError::MissingPortalItem);
        }
        Ok(Self::empty(item_id, Box::new(SphericalMercator)))
    }

    /// Seed a link from the current state of a map view.
    ///
    /// Fails if the map has no portal item, since an unsaved map cannot be opened elsewhere.
    pub fn from_map_view<M: MapViewSnapshot + ?Sized>(
        map_view: &M,
    ) -> Result<Self, ConfigurationError> {
        Self::from_map_view_with(map_view, Box::new(SphericalMercator))
    }

    /// Like [`from_map_view`](Self::from_map_view), reprojecting with `projector`.
    pub fn from_map_view_with<M: MapViewSnapshot + ?Sized>(
        map_view: &M,
        projector: Box<dyn Projector>,
    ) -> Result<Self, ConfigurationError> {
        let item_id = match map_view.item_id() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => return Err(ConfigurationError::MissingPortalItem),
        };

        let mut builder = Self::empty(item_id, projector);
        builder.rotation = map_view.rotation();
        builder.scale = map_view.scale();
        builder.center_geo_point(&map_view.visible_center())?;
        Ok(builder)
    }

    fn empty(item_id: String, projector: Box<dyn Projector>) -> Self {
        Self {
            item_id,
            center: Center::default(),
            scale: DEFAULT_SCALE,
            rotation: DEFAULT_ROTATION,
            charset: encode::UTF8.to_string(),
            projector,
        }
    }

    /// Apply configured defaults for scale, rotation, and charset.
    pub fn apply_config(&mut self, cfg: &LinkConfig) -> &mut Self {
        self.scale = cfg.default_scale;
        self.rotation = cfg.default_rotation;
        self.charset = cfg.charset.clone();
        self
    }

    pub fn item_id(&mut self, item_id: impl Into<String>) -> &mut Self {
        self.item_id = item_id.into();
        self
    }

    pub fn scale(&mut self, scale: f64) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn rotation(&mut self, rotation: f64) -> &mut Self {
        self.rotation = rotation;
        self
    }

    pub fn charset(&mut self, charset: impl Into<String>) -> &mut Self {
        self.charset = charset.into();
        self
    }

    pub fn projector(&mut self, projector: Box<dyn Projector>) -> &mut Self {
        self.projector = projector;
        self
    }

    /// Center on free text, replacing any coordinate center.
    pub fn center_address(&mut self, address: impl Into<String>) -> &mut Self {
        self.center = Center::Address(address.into());
        self
    }

    /// Center on a WGS84 coordinate: `x` is longitude, `y` is latitude.
    pub fn center_point(&mut self, x: f64, y: f64) -> &mut Self {
        self.center = Center::Coordinate {
            longitude: x,
            latitude: y,
        };
        self
    }

    /// Center on a georeferenced point, reprojecting it to WGS84 first if needed.
    ///
    /// On error the current center is left unchanged.
    pub fn center_geo_point(&mut self, point: &Point) -> Result<&mut Self, ConfigurationError> {
        let wgs84 = if point.spatial_reference.is_wgs84() {
            *point
        } else {
            self.projector.project(point, SpatialReference::WGS84)?
        };
        Ok(self.center_point(wgs84.x, wgs84.y))
    }

    pub fn center(&self) -> &Center {
        &self.center
    }

    /// Serialize the link. Fails if no portal item id is set.
    pub fn build_uri(&self) -> Result<Url, ConfigurationError> {
        if self.item_id.is_empty() {
            return Err(ConfigurationError::MissingPortalItem);
        }

        let params = [
            (ITEM_ID_PARAM, encode::encode(&self.item_id, &self.charset)),
            (CENTER_PARAM, self.center.query_value(&self.charset)),
            (ROTATION_PARAM, format_double(self.rotation)),
            (SCALE_PARAM, format_double(self.scale)),
        ];
        let query = params
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        let uri = Url::parse(&format!("{EXPLORER_SCHEME}:///?{query}"))?;
        tracing::debug!(%uri, "built explorer link");
        Ok(uri)
    }

    /// Intent that opens the link directly.
    pub fn build_view_intent(&self) -> Result<Intent, ConfigurationError> {
        Ok(Intent::view(self.build_uri()?))
    }

    /// Intent that shares the link as plain text.
    pub fn build_share_intent(&self) -> Result<Intent, ConfigurationError> {
        let uri = self.build_uri()?;
        Ok(Intent::share_text(SHARE_SUBJECT, uri.to_string()))
    }
}
