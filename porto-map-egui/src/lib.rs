//! Egui host window for the Porto map view.
//!
//! The map and its attribution are drawn by the `galileo-egui` widget. This crate sizes the
//! widget according to the view's declared viewport.

use egui::{CentralPanel, Context, Frame};
use galileo_egui::{EguiMap, EguiMapState, InitBuilder};
use porto_map::{MapView, ViewportSize};

/// Application showing one map view.
pub struct MapViewApp {
    map: EguiMapState,
    viewport: ViewportSize,
}

impl MapViewApp {
    /// Creates the app around an already initialised map state.
    pub fn new(map: EguiMapState, view: &MapView) -> Self {
        Self {
            map,
            viewport: view.viewport(),
        }
    }
}

impl eframe::App for MapViewApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().frame(Frame::NONE).show(ctx, |ui| {
            let available = ui.available_size();
            let (width, height) = self
                .viewport
                .resolve((available.x, available.y), ctx.screen_rect().height());

            ui.allocate_ui(egui::vec2(width, height), |ui| {
                EguiMap::new(&mut self.map).show_ui(ui);
            });
        });
    }
}

/// Opens a native window showing the given view and blocks until it is closed.
pub fn run(view: MapView) -> anyhow::Result<()> {
    let map = view.build_map()?;
    log::info!("Opening map window");

    InitBuilder::new(map)
        .with_app_builder(move |map_state| {
            Box::new(MapViewApp::new(map_state, &view)) as Box<dyn eframe::App>
        })
        .init()
        .map_err(|err| anyhow::anyhow!("failed to run map window: {err}"))
}
