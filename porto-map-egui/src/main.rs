//! Shows the map of Porto in a native window.

use porto_map::MapView;

fn main() -> anyhow::Result<()> {
    porto_map_egui::run(MapView::new()?)
}
