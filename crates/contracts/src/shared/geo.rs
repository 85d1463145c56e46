//! Geographic bounds and GeoJSON geometry helpers for the org unit maps.

use anyhow::{anyhow, bail, Context};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Validated coordinate: both values finite and inside the WGS84 ranges.
    pub fn new(lat: f64, lng: f64) -> anyhow::Result<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            bail!("non-finite coordinate ({lat}, {lng})");
        }
        if !(-90.0..=90.0).contains(&lat) {
            bail!("latitude {lat} out of range");
        }
        if !(-180.0..=180.0).contains(&lng) {
            bail!("longitude {lng} out of range");
        }
        Ok(Self { lat, lng })
    }
}

/// Axis-aligned box given by its south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    pub fn from_point(point: LatLng) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    pub fn extend_point(&self, point: LatLng) -> Self {
        Self {
            south_west: LatLng {
                lat: self.south_west.lat.min(point.lat),
                lng: self.south_west.lng.min(point.lng),
            },
            north_east: LatLng {
                lat: self.north_east.lat.max(point.lat),
                lng: self.north_east.lng.max(point.lng),
            },
        }
    }

    pub fn extend(&self, other: &Bounds) -> Self {
        self.extend_point(other.south_west).extend_point(other.north_east)
    }

    pub fn center(&self) -> LatLng {
        LatLng {
            lat: (self.south_west.lat + self.north_east.lat) / 2.0,
            lng: (self.south_west.lng + self.north_east.lng) / 2.0,
        }
    }

    /// Bounds of a list of points, `None` when the list is empty.
    pub fn from_points(points: impl IntoIterator<Item = LatLng>) -> Option<Self> {
        points.into_iter().fold(None, |acc: Option<Bounds>, point| {
            Some(match acc {
                Some(bounds) => bounds.extend_point(point),
                None => Bounds::from_point(point),
            })
        })
    }
}

/// Union of two optional boxes.
pub fn merge_bounds(a: Option<Bounds>, b: Option<Bounds>) -> Option<Bounds> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.extend(&b)),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

/// Folds any number of optional boxes with [`merge_bounds`].
pub fn merge_all_bounds(items: impl IntoIterator<Item = Option<Bounds>>) -> Option<Bounds> {
    items.into_iter().fold(None, merge_bounds)
}

// ============================================================================
// GeoJSON
// ============================================================================

/// Polygons (as rings of points) and points extracted from a GeoJSON value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shapes {
    pub polygons: Vec<Vec<Vec<LatLng>>>,
    pub points: Vec<LatLng>,
}

impl Shapes {
    pub fn bounds(&self) -> Option<Bounds> {
        let ring_points = self
            .polygons
            .iter()
            .flatten()
            .flatten()
            .copied();
        Bounds::from_points(ring_points.chain(self.points.iter().copied()))
    }
}

/// Parses a GeoJSON geometry, feature, or feature collection.
pub fn parse_shapes(geo_json: &Value) -> anyhow::Result<Shapes> {
    let mut shapes = Shapes::default();
    collect_shapes(geo_json, &mut shapes)?;
    Ok(shapes)
}

fn collect_shapes(value: &Value, shapes: &mut Shapes) -> anyhow::Result<()> {
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("GeoJSON object without a type"))?;

    match kind {
        "FeatureCollection" => {
            let features = value
                .get("features")
                .and_then(Value::as_array)
                .context("FeatureCollection without features")?;
            for feature in features {
                collect_shapes(feature, shapes)?;
            }
        }
        "Feature" => match value.get("geometry") {
            Some(Value::Null) | None => {}
            Some(geometry) => collect_shapes(geometry, shapes)?,
        },
        "GeometryCollection" => {
            let geometries = value
                .get("geometries")
                .and_then(Value::as_array)
                .context("GeometryCollection without geometries")?;
            for geometry in geometries {
                collect_shapes(geometry, shapes)?;
            }
        }
        "Point" => shapes.points.push(position(coordinates(value)?)?),
        "MultiPoint" => {
            for pos in as_array(coordinates(value)?)? {
                shapes.points.push(position(pos)?);
            }
        }
        "Polygon" => shapes.polygons.push(polygon(coordinates(value)?)?),
        "MultiPolygon" => {
            for poly in as_array(coordinates(value)?)? {
                shapes.polygons.push(polygon(poly)?);
            }
        }
        other => bail!("unsupported GeoJSON type {other}"),
    }
    Ok(())
}

fn coordinates(value: &Value) -> anyhow::Result<&Value> {
    value.get("coordinates").context("geometry without coordinates")
}

fn as_array(value: &Value) -> anyhow::Result<&Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| anyhow!("expected an array, got {value}"))
}

fn polygon(value: &Value) -> anyhow::Result<Vec<Vec<LatLng>>> {
    as_array(value)?
        .iter()
        .map(|ring| -> anyhow::Result<Vec<LatLng>> { as_array(ring)?.iter().map(position).collect() })
        .collect()
}

/// GeoJSON positions are `[lng, lat(, alt)]`.
fn position(value: &Value) -> anyhow::Result<LatLng> {
    let pos = as_array(value)?;
    if pos.len() < 2 {
        bail!("position needs at least two values");
    }
    let lng = pos[0].as_f64().context("longitude is not a number")?;
    let lat = pos[1].as_f64().context("latitude is not a number")?;
    LatLng::new(lat, lng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bounds(s: f64, w: f64, n: f64, e: f64) -> Bounds {
        Bounds {
            south_west: LatLng { lat: s, lng: w },
            north_east: LatLng { lat: n, lng: e },
        }
    }

    #[test]
    fn test_merge_bounds_absent_arguments() {
        let b = bounds(1.0, 2.0, 3.0, 4.0);
        assert_eq!(merge_bounds(None, None), None);
        assert_eq!(merge_bounds(Some(b), None), Some(b));
        assert_eq!(merge_bounds(None, Some(b)), Some(b));
    }

    #[test]
    fn test_merge_bounds_union() {
        let a = bounds(0.0, 0.0, 1.0, 1.0);
        let b = bounds(-2.0, 0.5, 0.5, 3.0);
        let expected = bounds(-2.0, 0.0, 1.0, 3.0);
        assert_eq!(merge_bounds(Some(a), Some(b)), Some(expected));
        assert_eq!(merge_bounds(Some(b), Some(a)), Some(expected));
    }

    #[test]
    fn test_merge_all_bounds() {
        let merged = merge_all_bounds(vec![
            None,
            Some(bounds(0.0, 0.0, 1.0, 1.0)),
            None,
            Some(bounds(5.0, 5.0, 6.0, 6.0)),
        ]);
        assert_eq!(merged, Some(bounds(0.0, 0.0, 6.0, 6.0)));
        assert_eq!(merge_all_bounds(Vec::new()), None);
    }

    #[test]
    fn test_latlng_validation() {
        assert!(LatLng::new(4.5, -73.2).is_ok());
        assert!(LatLng::new(91.0, 0.0).is_err());
        assert!(LatLng::new(0.0, 181.0).is_err());
        assert!(LatLng::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_polygon_bounds() {
        let geo = json!({
            "type": "Polygon",
            "coordinates": [[[10.0, 1.0], [12.0, 1.0], [12.0, 3.0], [10.0, 1.0]]]
        });
        let shapes = parse_shapes(&geo).unwrap();
        assert_eq!(shapes.polygons.len(), 1);
        assert_eq!(shapes.bounds(), Some(bounds(1.0, 10.0, 3.0, 12.0)));
    }

    #[test]
    fn test_feature_collection_with_multipolygon() {
        let geo = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                        [[[5.0, 5.0], [6.0, 5.0], [6.0, 7.0], [5.0, 5.0]]]
                    ]
                }
            }]
        });
        let shapes = parse_shapes(&geo).unwrap();
        assert_eq!(shapes.polygons.len(), 2);
        assert_eq!(shapes.bounds(), Some(bounds(0.0, 0.0, 7.0, 6.0)));
    }

    #[test]
    fn test_malformed_geometry_is_an_error() {
        assert!(parse_shapes(&json!({"coordinates": []})).is_err());
        assert!(parse_shapes(&json!({"type": "Polygon", "coordinates": [[["a", 1.0]]]})).is_err());
        assert!(parse_shapes(&json!({"type": "Polygon", "coordinates": 3})).is_err());
        assert!(parse_shapes(&json!({"type": "Circle", "coordinates": []})).is_err());
    }
}
