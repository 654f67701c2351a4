//! Errors raised while setting up the map view.

use galileo::error::GalileoError;
use thiserror::Error;

/// Error raised while putting the map view together.
#[derive(Debug, Error)]
pub enum MapViewError {
    /// The URL template uses a placeholder that is not one of `{s}`, `{z}`, `{x}`, `{y}`.
    #[error("unknown placeholder `{{{0}}}` in tile url template")]
    UnknownPlaceholder(String),
    /// The URL template lacks one of the tile index placeholders.
    #[error("tile url template has no `{{{0}}}` placeholder")]
    MissingPlaceholder(char),
    /// A `{` in the URL template is never closed.
    #[error("unclosed placeholder at byte {0} of tile url template")]
    UnclosedPlaceholder(usize),
    /// The template uses `{s}` but no subdomains were given.
    #[error("tile url template uses `{{s}}` but no subdomains are configured")]
    NoSubdomains,
    /// Initial zoom is outside of the range the tile source serves.
    #[error("zoom level {zoom} is above the tile source maximum of {max}")]
    ZoomOutOfRange {
        /// Requested zoom.
        zoom: u32,
        /// Highest zoom served by the tile source.
        max: u32,
    },
    /// Galileo refused to create the tile layer.
    #[error("failed to create tile layer: {0}")]
    Layer(#[from] GalileoError),
}
