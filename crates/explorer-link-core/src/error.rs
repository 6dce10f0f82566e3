//! Errors raised while configuring or finalizing a deep link.

use thiserror::Error;

/// Raised synchronously by the builder; a failed call produces no partial URI.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The link has no portal item id (unsaved or unassociated map).
    #[error("missing portal item")]
    MissingPortalItem,
    /// The projector cannot convert points in this spatial reference.
    #[error("unsupported spatial reference: wkid {wkid}")]
    UnsupportedSpatialReference { wkid: u32 },
    /// The assembled URI was rejected by the URL parser.
    #[error("invalid uri: {0}")]
    InvalidUri(#[from] url::ParseError),
}
