use approx::assert_abs_diff_eq;
use galileo::galileo_types::geo::GeoPoint;
use porto_map::{Length, MapView};

#[test]
fn view_is_created_without_inputs() {
    let view = MapView::new().expect("view must be created without any configuration");

    let (w, h) = view.viewport().resolve((1280.0, 640.0), 720.0);
    assert_abs_diff_eq!(w, 1280.0);
    assert_abs_diff_eq!(h, 720.0);
    assert_eq!(view.viewport().width, Length::Percent(100.0));
    assert_eq!(view.viewport().height, Length::ViewportHeight(100.0));

    let (lat, lon) = view.center().as_latlon();
    assert_abs_diff_eq!(lat, 41.14793150306301);
    assert_abs_diff_eq!(lon, -8.60465496868542);
    assert_eq!(view.zoom(), 13);
}

#[test]
fn view_has_a_single_openstreetmap_layer() {
    let view = MapView::new().unwrap();
    let layers = view.tile_layers();
    assert_eq!(layers.len(), 1);

    let layer = &layers[0];
    assert_eq!(
        layer.url_template().as_str(),
        "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
    );
    assert!(layer.attribution().text().contains("OpenStreetMap"));
    insta::assert_snapshot!(
        layer.attribution().to_html(),
        @r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#
    );
}

#[test]
fn tile_urls_around_porto() {
    let view = MapView::new().unwrap();
    let template = view.tile_layers()[0].url_template();

    // Tile containing the initial center at zoom 13.
    assert_eq!(
        template.expand(13, 3900, 3067),
        "https://b.tile.openstreetmap.org/13/3900/3067.png"
    );
    assert_eq!(
        template.expand(13, 3901, 3067),
        "https://c.tile.openstreetmap.org/13/3901/3067.png"
    );
}

#[test]
fn built_map_opens_over_porto_with_one_attributed_layer() {
    let view = MapView::new().unwrap();
    let map = view.build_map().unwrap();

    assert_eq!(map.layers().len(), 1);

    let position = map.view().position().expect("map has no position");
    assert_abs_diff_eq!(position.lat(), 41.14793150306301, epsilon = 1e-6);
    assert_abs_diff_eq!(position.lon(), -8.60465496868542, epsilon = 1e-6);

    let attributions: Vec<String> = map
        .layers()
        .iter()
        .filter_map(|layer| layer.attribution())
        .map(|attribution| format!("{attribution:?}"))
        .collect();
    assert_eq!(attributions.len(), 1);
    assert!(attributions[0].contains("OpenStreetMap"));
}
