//! Tab keys and titles. Detail tabs carry the record id in their key
//! (`org_unit_detail_42`) so that a reload can reopen them from `?active=`.

use contracts::domain::org_unit::OrgUnitId;

pub const ORG_UNITS_KEY: &str = "org_units";
pub const PROJECTS_KEY: &str = "projects";
pub const ORG_UNIT_DETAIL_PREFIX: &str = "org_unit_detail_";

pub const ORG_UNIT_ENTITY_LABEL: &str = "Org unit";

/// Readable title for a tab key. Unknown keys fall back to the key itself.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        ORG_UNITS_KEY => "Org units",
        PROJECTS_KEY => "Projects",
        k if k.starts_with(ORG_UNIT_DETAIL_PREFIX) => ORG_UNIT_ENTITY_LABEL,
        _ => key,
    }
}

/// Title of a detail tab: `"<entity> · <identifier>"`.
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

pub fn org_unit_detail_key(id: OrgUnitId) -> String {
    format!("{}{}", ORG_UNIT_DETAIL_PREFIX, id)
}

/// Id of an org unit detail key, `None` for other keys or a malformed id.
pub fn parse_org_unit_detail_key(key: &str) -> Option<OrgUnitId> {
    key.strip_prefix(ORG_UNIT_DETAIL_PREFIX)
        .and_then(|raw| OrgUnitId::from_string(raw).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_key_roundtrip() {
        let key = org_unit_detail_key(OrgUnitId(1234));
        assert_eq!(key, "org_unit_detail_1234");
        assert_eq!(parse_org_unit_detail_key(&key), Some(OrgUnitId(1234)));
        assert_eq!(parse_org_unit_detail_key("org_unit_detail_abc"), None);
        assert_eq!(parse_org_unit_detail_key(ORG_UNITS_KEY), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key(ORG_UNITS_KEY), "Org units");
        assert_eq!(tab_label_for_key("org_unit_detail_7"), ORG_UNIT_ENTITY_LABEL);
        assert_eq!(tab_label_for_key("something_else"), "something_else");
        assert_eq!(detail_tab_label("Org unit", "Kinshasa"), "Org unit · Kinshasa");
    }
}
