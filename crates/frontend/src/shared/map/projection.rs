//! Equirectangular projection of geographic bounds onto an SVG viewport.
//! North is up; longitudes are scaled by the cosine of the centre latitude.

use contracts::shared::geo::{Bounds, LatLng};

/// Smallest span in degrees a viewport is fitted to. Keeps a single point
/// (zero-size bounds) from producing an infinite scale.
const MIN_SPAN_DEG: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    center: LatLng,
    lng_factor: f64,
    scale: f64,
    width: f64,
    height: f64,
}

impl Projection {
    /// Fits `bounds` inside a `width` x `height` viewport with `padding`
    /// pixels on every side, preserving the aspect ratio.
    pub fn fit(bounds: &Bounds, width: f64, height: f64, padding: f64) -> Self {
        let center = bounds.center();
        let lng_factor = center.lat.to_radians().cos().max(0.01);
        let lng_span = ((bounds.north_east.lng - bounds.south_west.lng) * lng_factor).max(MIN_SPAN_DEG);
        let lat_span = (bounds.north_east.lat - bounds.south_west.lat).max(MIN_SPAN_DEG);
        let inner_w = (width - 2.0 * padding).max(1.0);
        let inner_h = (height - 2.0 * padding).max(1.0);

        Self {
            center,
            lng_factor,
            scale: (inner_w / lng_span).min(inner_h / lat_span),
            width,
            height,
        }
    }

    pub fn project(&self, point: LatLng) -> (f64, f64) {
        let x = self.width / 2.0 + (point.lng - self.center.lng) * self.lng_factor * self.scale;
        let y = self.height / 2.0 - (point.lat - self.center.lat) * self.scale;
        (x, y)
    }

    /// SVG path data for one closed ring. Empty for an empty ring.
    pub fn ring_path(&self, ring: &[LatLng]) -> String {
        let mut path = String::new();
        for (i, point) in ring.iter().enumerate() {
            let (x, y) = self.project(*point);
            let cmd = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                path.push(' ');
            }
            path.push_str(&format!("{}{:.1} {:.1}", cmd, x, y));
        }
        if !path.is_empty() {
            path.push_str(" Z");
        }
        path
    }

    /// Path data of a polygon: outer ring then holes, drawn with `evenodd`.
    pub fn polygon_path(&self, rings: &[Vec<LatLng>]) -> String {
        rings
            .iter()
            .map(|ring| self.ring_path(ring))
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ll(lat: f64, lng: f64) -> LatLng {
        LatLng { lat, lng }
    }

    fn square() -> Bounds {
        Bounds {
            south_west: ll(-1.0, -1.0),
            north_east: ll(1.0, 1.0),
        }
    }

    #[test]
    fn test_center_maps_to_viewport_center() {
        let p = Projection::fit(&square(), 400.0, 300.0, 10.0);
        let (x, y) = p.project(ll(0.0, 0.0));
        assert!((x - 200.0).abs() < 1e-9);
        assert!((y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_north_is_up() {
        let p = Projection::fit(&square(), 400.0, 300.0, 10.0);
        let (_, y_north) = p.project(ll(1.0, 0.0));
        let (_, y_south) = p.project(ll(-1.0, 0.0));
        assert!(y_north < y_south);
        assert!(y_north >= 10.0 - 1e-9);
        assert!(y_south <= 290.0 + 1e-9);
    }

    #[test]
    fn test_single_point_is_finite() {
        let p = Projection::fit(&Bounds::from_point(ll(4.3, 15.3)), 400.0, 300.0, 10.0);
        let (x, y) = p.project(ll(4.3, 15.3));
        assert!(x.is_finite() && y.is_finite());
        assert!((x - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_ring_path() {
        let p = Projection::fit(&square(), 200.0, 200.0, 0.0);
        let path = p.ring_path(&[ll(1.0, -1.0), ll(1.0, 1.0), ll(-1.0, 1.0)]);
        assert!(path.starts_with("M"));
        assert_eq!(path.matches('L').count(), 2);
        assert!(path.ends_with(" Z"));
        assert_eq!(p.ring_path(&[]), "");
        assert_eq!(p.polygon_path(&[vec![], vec![]]), "");
    }
}
