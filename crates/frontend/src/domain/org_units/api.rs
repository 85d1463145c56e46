//! Org unit endpoints.

use crate::shared::api_utils::{build_query, fetch_json};
use contracts::domain::org_unit::{OrgUnit, OrgUnitId, OrgUnitType};
use contracts::shared::paginated::Paginated;
use contracts::shared::table_params::TableParams;

/// Upper bound on the children drawn on the map of one org unit.
pub const MAP_CHILDREN_LIMIT: usize = 1000;

/// Filters of the org unit list, as written in the URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrgUnitFilters {
    pub search: String,
    /// `NEW`, `VALID`, `REJECTED` or empty for any
    pub validation_status: String,
}

impl OrgUnitFilters {
    pub fn active_count(&self) -> usize {
        [&self.search, &self.validation_status]
            .iter()
            .filter(|v| !v.is_empty())
            .count()
    }
}

fn list_query(params: &TableParams, extra: &[(&'static str, String)]) -> String {
    let mut pairs = params.to_api_query();
    pairs.extend(extra.iter().cloned());
    build_query(&pairs)
}

pub async fn fetch_org_units(
    params: &TableParams,
    filters: &OrgUnitFilters,
) -> Result<Paginated<OrgUnit>, String> {
    let query = list_query(
        params,
        &[
            ("search", filters.search.clone()),
            ("validation_status", filters.validation_status.clone()),
        ],
    );
    fetch_json(&format!("/api/orgunits/{}", query)).await
}

pub async fn fetch_org_unit(id: OrgUnitId) -> Result<OrgUnit, String> {
    fetch_json(&format!("/api/orgunits/{}/", id)).await
}

/// One page of the direct children of `parent`.
pub async fn fetch_children(
    parent: OrgUnitId,
    params: &TableParams,
) -> Result<Paginated<OrgUnit>, String> {
    let query = list_query(params, &[("parent_id", parent.to_string())]);
    fetch_json(&format!("/api/orgunits/{}", query)).await
}

/// Direct children of `parent` with their geometry, for the map.
pub async fn fetch_map_children(parent: OrgUnitId) -> Result<Vec<OrgUnit>, String> {
    let query = build_query(&[
        ("parent_id", parent.to_string()),
        ("limit", MAP_CHILDREN_LIMIT.to_string()),
        ("with_shapes", "true".to_string()),
    ]);
    let page: Paginated<OrgUnit> = fetch_json(&format!("/api/orgunits/{}", query)).await?;
    if page.count > page.results.len() {
        log::warn!(
            "Map of org unit {} shows {} of {} children",
            parent,
            page.results.len(),
            page.count
        );
    }
    Ok(page.results)
}

pub async fn fetch_org_unit_types() -> Result<Vec<OrgUnitType>, String> {
    let page: Paginated<OrgUnitType> = fetch_json("/api/orgunittypes/").await?;
    Ok(page.results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_skips_empty_filters() {
        let params = TableParams {
            page: 2,
            page_size: 50,
            order: "-name".to_string(),
        };
        let query = list_query(
            &params,
            &[("search", "Kin".to_string()), ("validation_status", String::new())],
        );
        assert_eq!(query, "?page=2&limit=50&order=-name&search=Kin");
    }

    #[test]
    fn test_active_filters_count() {
        let mut filters = OrgUnitFilters::default();
        assert_eq!(filters.active_count(), 0);
        filters.validation_status = "VALID".to_string();
        assert_eq!(filters.active_count(), 1);
    }
}
