//! Raster tile source description and its conversion into a Galileo layer.
//!
//! A tile source is a [`UrlTemplate`] in the usual slippy map notation
//! (`https://{s}.example.org/{z}/{x}/{y}.png`) together with the [`Attribution`] the
//! provider requires. Fetching, decoding and drawing the tiles is done by Galileo.

use std::fmt;

use galileo::layer::raster_tile_layer::{RasterTileLayer, RasterTileLayerBuilder};
use galileo::tile_schema::TileIndex;

use crate::attribution::Attribution;
use crate::error::MapViewError;

/// OpenStreetMap standard tile layer.
pub const OSM_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Subdomains substituted for `{s}` when none are given explicitly.
pub const DEFAULT_SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

/// Highest zoom level served by OpenStreetMap tile servers.
pub const OSM_MAX_ZOOM: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Subdomain,
    Z,
    X,
    Y,
}

/// Parsed tile URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    source: String,
    segments: Vec<Segment>,
    subdomains: Vec<String>,
}

impl UrlTemplate {
    /// Parses a template using [`DEFAULT_SUBDOMAINS`] for `{s}`.
    pub fn parse(template: &str) -> Result<Self, MapViewError> {
        Self::with_subdomains(template, DEFAULT_SUBDOMAINS)
    }

    /// Parses a template with a custom set of subdomains for `{s}`.
    pub fn with_subdomains(
        template: &str,
        subdomains: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, MapViewError> {
        let subdomains: Vec<String> = subdomains.into_iter().map(Into::into).collect();
        let mut segments = vec![];
        let mut literal = String::new();
        let mut rest = template;
        let mut offset = 0;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or(MapViewError::UnclosedPlaceholder(offset + open))?;

            let segment = match &after[..close] {
                "s" => Segment::Subdomain,
                "z" => Segment::Z,
                "x" => Segment::X,
                "y" => Segment::Y,
                other => return Err(MapViewError::UnknownPlaceholder(other.to_string())),
            };

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(segment);

            let consumed = open + close + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        for (segment, name) in [(Segment::Z, 'z'), (Segment::X, 'x'), (Segment::Y, 'y')] {
            if !segments.contains(&segment) {
                return Err(MapViewError::MissingPlaceholder(name));
            }
        }

        if segments.contains(&Segment::Subdomain) && subdomains.is_empty() {
            return Err(MapViewError::NoSubdomains);
        }

        Ok(Self {
            source: template.to_string(),
            segments,
            subdomains,
        })
    }

    /// Template string as it was given.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Subdomains used for `{s}`.
    pub fn subdomains(&self) -> &[String] {
        &self.subdomains
    }

    /// Builds the URL of the tile at the given index.
    ///
    /// Neighbouring tiles are spread over the subdomains by `|x + y| mod n`.
    pub fn expand(&self, z: u32, x: i32, y: i32) -> String {
        let mut url = String::with_capacity(self.source.len() + 16);
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => url.push_str(s),
                Segment::Subdomain => url.push_str(self.subdomain(x, y)),
                Segment::Z => url.push_str(&z.to_string()),
                Segment::X => url.push_str(&x.to_string()),
                Segment::Y => url.push_str(&y.to_string()),
            }
        }

        url
    }

    fn subdomain(&self, x: i32, y: i32) -> &str {
        let sum = (i64::from(x) + i64::from(y)).unsigned_abs();
        let index = (sum % self.subdomains.len() as u64) as usize;
        &self.subdomains[index]
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Raster tile source: where tiles come from and who must be credited for them.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSourceDescriptor {
    template: UrlTemplate,
    attribution: Attribution,
    max_zoom: u32,
}

impl TileSourceDescriptor {
    /// Creates a new tile source.
    pub fn new(template: UrlTemplate, attribution: Attribution, max_zoom: u32) -> Self {
        Self {
            template,
            attribution,
            max_zoom,
        }
    }

    /// OpenStreetMap standard tile layer with its copyright notice.
    pub fn openstreetmap() -> Result<Self, MapViewError> {
        Ok(Self::new(
            UrlTemplate::parse(OSM_URL_TEMPLATE)?,
            Attribution::new("© OpenStreetMap contributors")
                .with_link("OpenStreetMap", "https://www.openstreetmap.org/copyright"),
            OSM_MAX_ZOOM,
        ))
    }

    /// URL template of the tiles.
    pub fn url_template(&self) -> &UrlTemplate {
        &self.template
    }

    /// Attribution required by the provider.
    pub fn attribution(&self) -> &Attribution {
        &self.attribution
    }

    /// Highest zoom level the source serves.
    pub fn max_zoom(&self) -> u32 {
        self.max_zoom
    }

    /// Creates a Galileo raster layer loading tiles from this source.
    ///
    /// The attribution is handed to the layer, so the map widget shows it over the map.
    pub fn build_layer(&self) -> Result<RasterTileLayer, MapViewError> {
        let template = self.template.clone();
        log::debug!("Creating raster tile layer for {template}");

        let layer = RasterTileLayerBuilder::new_rest(move |index: &TileIndex| {
            template.expand(index.z, index.x, index.y)
        })
        .with_attribution(
            self.attribution.text().to_string(),
            self.attribution.url().unwrap_or_default().to_string(),
        )
        .build()?;

        Ok(layer)
    }
}
