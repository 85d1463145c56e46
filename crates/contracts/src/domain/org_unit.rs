use crate::shared::geo::{parse_shapes, Bounds, LatLng, Shapes};
use crate::shared::legend::MapEntity;
use crate::shared::selection::Selectable;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrgUnitId(pub i64);

impl OrgUnitId {
    pub fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(OrgUnitId)
            .map_err(|e| format!("Invalid org unit id {:?}: {}", s, e))
    }
}

impl std::fmt::Display for OrgUnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Org unit
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    #[default]
    New,
    Valid,
    Rejected,
}

impl ValidationStatus {
    pub const ALL: [ValidationStatus; 3] = [
        ValidationStatus::New,
        ValidationStatus::Valid,
        ValidationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::New => "NEW",
            ValidationStatus::Valid => "VALID",
            ValidationStatus::Rejected => "REJECTED",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }

    /// Badge variant used in list cells.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            ValidationStatus::New => "warning",
            ValidationStatus::Valid => "success",
            ValidationStatus::Rejected => "error",
        }
    }
}

/// Geographic or administrative entity (health facility, district, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgUnit {
    pub id: OrgUnitId,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub org_unit_type_id: Option<i64>,
    #[serde(default)]
    pub org_unit_type_name: Option<String>,
    #[serde(default)]
    pub parent_id: Option<OrgUnitId>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub validation_status: ValidationStatus,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub source_ref: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub geo_json: Option<Value>,
    /// Unix timestamps in seconds, as sent by the API.
    #[serde(default)]
    pub created_at: Option<f64>,
    #[serde(default)]
    pub updated_at: Option<f64>,
}

impl OrgUnit {
    /// Point location when both coordinates are present and valid.
    pub fn location(&self) -> anyhow::Result<Option<LatLng>> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => LatLng::new(lat, lng).map(Some),
            _ => Ok(None),
        }
    }

    /// Shapes from `geo_json`, empty when the org unit has none.
    pub fn shapes(&self) -> anyhow::Result<Shapes> {
        match &self.geo_json {
            Some(Value::Null) | None => Ok(Shapes::default()),
            Some(geo_json) => parse_shapes(geo_json),
        }
    }

    fn try_bounds(&self) -> anyhow::Result<Option<Bounds>> {
        let shapes = self.shapes()?;
        if !shapes.polygons.is_empty() {
            return Ok(shapes.bounds());
        }
        Ok(self.location()?.map(Bounds::from_point))
    }

    pub fn type_label(&self) -> String {
        self.org_unit_type_name.clone().unwrap_or_else(|| "—".to_string())
    }
}

/// Bounds from the polygon geometry if any, else from the point location.
/// Malformed geometry is logged and contributes nothing.
pub fn org_unit_bounds(org_unit: &OrgUnit) -> Option<Bounds> {
    match org_unit.try_bounds() {
        Ok(bounds) => bounds,
        Err(e) => {
            log::warn!("Org unit {} has invalid geometry: {:#}", org_unit.id, e);
            None
        }
    }
}

impl Selectable for OrgUnit {
    type Key = OrgUnitId;

    fn selection_key(&self) -> OrgUnitId {
        self.id
    }
}

impl MapEntity for OrgUnit {
    fn legend_value(&self) -> String {
        self.org_unit_type_id
            .map(|id| id.to_string())
            .unwrap_or_default()
    }

    fn map_bounds(&self) -> Option<Bounds> {
        org_unit_bounds(self)
    }
}

// ============================================================================
// Org unit type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgUnitType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub depth: Option<i32>,
}

/// Child types present in `children`, ordered by depth then name, as
/// `(legend value, label)` pairs.
pub fn child_legend_types(types: &[OrgUnitType], children: &[OrgUnit]) -> Vec<(String, String)> {
    let mut present: Vec<&OrgUnitType> = types
        .iter()
        .filter(|t| children.iter().any(|c| c.org_unit_type_id == Some(t.id)))
        .collect();
    present.sort_by(|a, b| a.depth.cmp(&b.depth).then_with(|| a.name.cmp(&b.name)));
    present
        .into_iter()
        .map(|t| (t.id.to_string(), t.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn org_unit(id: i64) -> OrgUnit {
        OrgUnit {
            id: OrgUnitId(id),
            name: format!("Org unit {id}"),
            short_name: None,
            org_unit_type_id: Some(5),
            org_unit_type_name: Some("Health facility".to_string()),
            parent_id: None,
            parent_name: None,
            validation_status: ValidationStatus::Valid,
            source: None,
            source_ref: None,
            latitude: None,
            longitude: None,
            altitude: None,
            geo_json: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_bounds_from_point() {
        let mut ou = org_unit(1);
        ou.latitude = Some(-4.3);
        ou.longitude = Some(15.3);
        let bounds = org_unit_bounds(&ou).unwrap();
        assert_eq!(bounds.south_west, LatLng { lat: -4.3, lng: 15.3 });
        assert_eq!(bounds.north_east, bounds.south_west);
    }

    #[test]
    fn test_polygon_wins_over_point() {
        let mut ou = org_unit(1);
        ou.latitude = Some(50.0);
        ou.longitude = Some(50.0);
        ou.geo_json = Some(json!({
            "type": "MultiPolygon",
            "coordinates": [[[[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 1.0]]]]
        }));
        let bounds = org_unit_bounds(&ou).unwrap();
        assert_eq!(bounds.north_east, LatLng { lat: 2.0, lng: 2.0 });
    }

    #[test]
    fn test_no_geometry_gives_none() {
        assert_eq!(org_unit_bounds(&org_unit(1)), None);

        let mut only_lat = org_unit(2);
        only_lat.latitude = Some(1.0);
        assert_eq!(org_unit_bounds(&only_lat), None);
    }

    #[test]
    fn test_out_of_range_latitude_gives_none() {
        let mut ou = org_unit(1);
        ou.latitude = Some(91.0);
        ou.longitude = Some(10.0);
        assert_eq!(org_unit_bounds(&ou), None);

        ou.latitude = Some(f64::NAN);
        assert_eq!(org_unit_bounds(&ou), None);
    }

    #[test]
    fn test_malformed_geo_json_gives_none() {
        let mut ou = org_unit(1);
        ou.geo_json = Some(json!({"type": "Polygon", "coordinates": "oops"}));
        assert_eq!(org_unit_bounds(&ou), None);
    }

    #[test]
    fn test_decode_api_payload() {
        let json = r#"{
            "id": 12,
            "name": "Clinique Ngaliema",
            "org_unit_type_id": 5,
            "org_unit_type_name": "Health facility",
            "parent_id": 3,
            "validation_status": "VALID",
            "latitude": -4.32,
            "longitude": 15.27,
            "created_at": 1690000000.5
        }"#;
        let ou: OrgUnit = serde_json::from_str(json).unwrap();
        assert_eq!(ou.id, OrgUnitId(12));
        assert_eq!(ou.parent_id, Some(OrgUnitId(3)));
        assert_eq!(ou.validation_status, ValidationStatus::Valid);
        assert_eq!(ou.legend_value(), "5");
        assert!(ou.map_bounds().is_some());
    }

    #[test]
    fn test_child_legend_types() {
        let types = vec![
            OrgUnitType { id: 7, name: "Village".to_string(), short_name: None, depth: Some(4) },
            OrgUnitType { id: 5, name: "Health facility".to_string(), short_name: None, depth: Some(3) },
            OrgUnitType { id: 9, name: "Province".to_string(), short_name: None, depth: Some(1) },
        ];
        let mut village = org_unit(2);
        village.org_unit_type_id = Some(7);
        let children = vec![org_unit(1), village];

        assert_eq!(
            child_legend_types(&types, &children),
            vec![
                ("5".to_string(), "Health facility".to_string()),
                ("7".to_string(), "Village".to_string()),
            ]
        );
    }

    #[test]
    fn test_validation_status_parse() {
        assert_eq!(ValidationStatus::parse("REJECTED"), Some(ValidationStatus::Rejected));
        assert_eq!(ValidationStatus::parse("rejected"), None);
    }
}
