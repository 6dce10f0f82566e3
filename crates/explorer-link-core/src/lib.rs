pub mod config;
pub mod logging;

pub mod error;
pub mod geometry;
pub mod link;
pub mod map_view;

pub use error::ConfigurationError;
pub use geometry::{Point, Projector, SpatialReference, SphericalMercator};
pub use link::{Center, Intent, IntentAction, UriLinkBuilder};
pub use map_view::{MapViewSnapshot, MapViewState};
