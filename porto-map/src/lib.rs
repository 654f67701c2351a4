//! Interactive OpenStreetMap view of Porto.
//!
//! The crate describes a single full-page map view: where it is centered, how far it is
//! zoomed in, and which raster tiles it shows. [`MapView::build_map`] turns the description
//! into a [`galileo::Map`], which does the actual tile loading and rendering.

pub mod attribution;
pub mod coordinate;
mod error;
pub mod tile_source;
pub mod view;
pub mod viewport;

pub use attribution::Attribution;
pub use coordinate::Coordinate;
pub use error::MapViewError;
pub use tile_source::{TileSourceDescriptor, UrlTemplate};
pub use view::MapView;
pub use viewport::{Length, ViewportSize};
