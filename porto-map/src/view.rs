//! The map view: a full-page map of Porto with the OpenStreetMap tile layer.

use galileo::{Map, MapBuilder};

use crate::coordinate::{Coordinate, PORTO};
use crate::error::MapViewError;
use crate::tile_source::TileSourceDescriptor;
use crate::viewport::ViewportSize;

/// Position the map opens at.
pub const INITIAL_CENTER: Coordinate = PORTO;

/// Zoom level the map opens at.
pub const INITIAL_ZOOM: u32 = 13;

/// Declarative description of the map view.
///
/// The view only carries configuration. Everything that happens at runtime (tile loading,
/// panning, zooming) is handled by the [`Map`] returned from [`MapView::build_map`].
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    center: Coordinate,
    zoom: u32,
    viewport: ViewportSize,
    tile_layer: TileSourceDescriptor,
}

impl MapView {
    /// Creates the view with its fixed center, zoom and tile layer.
    pub fn new() -> Result<Self, MapViewError> {
        let tile_layer = TileSourceDescriptor::openstreetmap()?;
        if INITIAL_ZOOM > tile_layer.max_zoom() {
            return Err(MapViewError::ZoomOutOfRange {
                zoom: INITIAL_ZOOM,
                max: tile_layer.max_zoom(),
            });
        }

        Ok(Self {
            center: INITIAL_CENTER,
            zoom: INITIAL_ZOOM,
            viewport: ViewportSize::FULL_PAGE,
            tile_layer,
        })
    }

    /// Initial center of the map.
    pub fn center(&self) -> Coordinate {
        self.center
    }

    /// Initial zoom level.
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Declared size of the map container.
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Tile layers of the view. There is always exactly one.
    pub fn tile_layers(&self) -> &[TileSourceDescriptor] {
        std::slice::from_ref(&self.tile_layer)
    }

    /// Builds the Galileo map positioned at the initial center and zoom.
    pub fn build_map(&self) -> Result<Map, MapViewError> {
        let (lat, lon) = self.center.as_latlon();
        log::info!("Creating map at {lat}, {lon} with zoom {}", self.zoom);

        let layer = self.tile_layer.build_layer()?;
        Ok(MapBuilder::default()
            .with_latlon(lat, lon)
            .with_z_level(self.zoom)
            .with_layer(layer)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::viewport::Length;

    #[test]
    fn opens_over_porto_at_zoom_13() {
        let view = MapView::new().unwrap();
        assert_abs_diff_eq!(view.center().lat, 41.14793150306301);
        assert_abs_diff_eq!(view.center().lon, -8.60465496868542);
        assert_eq!(view.zoom(), 13);
    }

    #[test]
    fn fills_the_page() {
        let view = MapView::new().unwrap();
        assert_eq!(view.viewport().width, Length::Percent(100.0));
        assert_eq!(view.viewport().height, Length::ViewportHeight(100.0));
    }

    #[test]
    fn initial_zoom_is_served_by_tile_layer() {
        let view = MapView::new().unwrap();
        assert!(view.zoom() <= view.tile_layers()[0].max_zoom());
    }
}
