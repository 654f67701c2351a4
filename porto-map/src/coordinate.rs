//! Geographic coordinate of the map center.

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns the coordinate as a `(lat, lon)` tuple.
    pub const fn as_latlon(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

/// Downtown Porto, next to Avenida dos Aliados.
pub const PORTO: Coordinate = Coordinate::new(41.14793150306301, -8.60465496868542);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn porto_is_in_northern_portugal() {
        let (lat, lon) = PORTO.as_latlon();
        assert!((41.0..41.3).contains(&lat));
        assert!((-8.7..-8.5).contains(&lon));
        assert_abs_diff_eq!(lat, 41.14793150306301);
        assert_abs_diff_eq!(lon, -8.60465496868542);
    }
}
