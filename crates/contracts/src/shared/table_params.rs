//! Pagination and sort parameters shared by every list table.
//!
//! The URL is the source of truth for table state. Each table reads and writes
//! three keys (`page`, `pageSize`, `order`), optionally namespaced by a prefix
//! so several tables can live on one page:
//!
//! ```text
//! ?page=2&pageSize=20&order=-name          (no prefix)
//! ?childrenPage=1&childrenOrder=name,-id   (prefix = "children")
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const PAGE_KEY: &str = "page";
pub const PAGE_SIZE_KEY: &str = "pageSize";
pub const ORDER_KEY: &str = "order";

// ============================================================================
// Sort columns
// ============================================================================

/// One entry of the sort list: a field id and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortColumn {
    pub id: String,
    pub desc: bool,
}

impl SortColumn {
    pub fn asc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: false,
        }
    }

    pub fn desc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: true,
        }
    }
}

/// Joins the sort list into `id` / `-id` tokens separated by commas.
pub fn encode_sort(sort_list: &[SortColumn]) -> String {
    sort_list
        .iter()
        .map(|column| {
            if column.desc {
                format!("-{}", column.id)
            } else {
                column.id.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Inverse of [`encode_sort`]. Empty tokens are skipped.
pub fn decode_sort(order: &str) -> Vec<SortColumn> {
    order
        .split(',')
        .filter(|token| !token.is_empty())
        .map(|token| match token.strip_prefix('-') {
            Some(id) => SortColumn::desc(id),
            None => SortColumn::asc(token),
        })
        .collect()
}

/// Sort state after a click on `column_id` in a single-column sort policy:
/// ascending, then descending, then unsorted.
pub fn next_sort(current: &[SortColumn], column_id: &str) -> Vec<SortColumn> {
    match current.first() {
        Some(column) if column.id == column_id && !column.desc => vec![SortColumn::desc(column_id)],
        Some(column) if column.id == column_id => Vec::new(),
        _ => vec![SortColumn::asc(column_id)],
    }
}

/// Namespaces a query key: `("children", "page")` gives `childrenPage`.
pub fn namespaced_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        return key.to_string();
    }
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => format!("{}{}{}", prefix, first.to_uppercase(), chars.as_str()),
        None => prefix.to_string(),
    }
}

// ============================================================================
// Table params
// ============================================================================

/// Server-driven pagination state of one table. `page` is 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableParams {
    pub page: usize,
    pub page_size: usize,
    pub order: String,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            order: String::new(),
        }
    }
}

impl TableParams {
    pub fn new(page_size: usize, order: impl Into<String>) -> Self {
        Self {
            page: 1,
            page_size,
            order: order.into(),
        }
    }

    /// Reads the namespaced keys from a flat query map. Missing or unparsable
    /// values fall back to `defaults`.
    pub fn from_query(query: &BTreeMap<String, String>, prefix: &str, defaults: &TableParams) -> Self {
        let read_number = |key: &str| {
            query
                .get(&namespaced_key(prefix, key))
                .and_then(|raw| raw.trim().parse::<usize>().ok())
        };

        let page = read_number(PAGE_KEY).unwrap_or(defaults.page).max(1);
        let page_size = read_number(PAGE_SIZE_KEY)
            .filter(|size| *size > 0)
            .unwrap_or(defaults.page_size);
        let order = query
            .get(&namespaced_key(prefix, ORDER_KEY))
            .cloned()
            .unwrap_or_else(|| defaults.order.clone());

        Self {
            page,
            page_size,
            order,
        }
    }

    /// Namespaced key/value pairs to merge back into the URL.
    pub fn to_query(&self, prefix: &str) -> Vec<(String, String)> {
        vec![
            (namespaced_key(prefix, PAGE_KEY), self.page.to_string()),
            (namespaced_key(prefix, PAGE_SIZE_KEY), self.page_size.to_string()),
            (namespaced_key(prefix, ORDER_KEY), self.order.clone()),
        ]
    }

    /// Writes this table's keys into `query`. An empty order is kept as an
    /// explicit empty value so that it overrides the default order.
    pub fn merge_into(&self, query: &mut BTreeMap<String, String>, prefix: &str) {
        query.extend(self.to_query(prefix));
    }

    /// Query pairs understood by the list endpoints.
    pub fn to_api_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.page_size.to_string()),
        ];
        if !self.order.is_empty() {
            pairs.push(("order", self.order.clone()));
        }
        pairs
    }

    pub fn sort_list(&self) -> Vec<SortColumn> {
        decode_sort(&self.order)
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Changing the page size always returns to the first page so the table
    /// never lands past the last page.
    pub fn with_page_size(&self, page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            order: self.order.clone(),
        }
    }

    /// Applies a header click. Sorting keeps the current page.
    pub fn with_sort_toggled(&self, column_id: &str) -> Self {
        Self {
            order: encode_sort(&next_sort(&self.sort_list(), column_id)),
            ..self.clone()
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_encode_sort() {
        let list = vec![SortColumn::asc("name"), SortColumn::desc("updated_at")];
        assert_eq!(encode_sort(&list), "name,-updated_at");
        assert_eq!(encode_sort(&[]), "");
    }

    #[test]
    fn test_decode_sort() {
        assert_eq!(
            decode_sort("-id,name"),
            vec![SortColumn::desc("id"), SortColumn::asc("name")]
        );
        assert!(decode_sort("").is_empty());
        assert_eq!(decode_sort("name,,"), vec![SortColumn::asc("name")]);
    }

    #[test]
    fn test_sort_round_trip() {
        let lists = vec![
            vec![],
            vec![SortColumn::asc("name")],
            vec![
                SortColumn::desc("org_unit_type__name"),
                SortColumn::asc("name"),
                SortColumn::desc("id"),
            ],
        ];
        for list in lists {
            assert_eq!(decode_sort(&encode_sort(&list)), list);
        }
    }

    #[test]
    fn test_namespaced_key() {
        assert_eq!(namespaced_key("", "pageSize"), "pageSize");
        assert_eq!(namespaced_key("children", "page"), "childrenPage");
        assert_eq!(namespaced_key("children", "pageSize"), "childrenPageSize");

        let key = namespaced_key("links", "order");
        assert!(key.starts_with("links"));
        assert!(key.ends_with("Order"));
    }

    #[test]
    fn test_next_sort_cycles_single_column() {
        let asc = next_sort(&[], "name");
        assert_eq!(asc, vec![SortColumn::asc("name")]);

        let desc = next_sort(&asc, "name");
        assert_eq!(desc, vec![SortColumn::desc("name")]);

        assert!(next_sort(&desc, "name").is_empty());

        // Another column replaces the current sort.
        assert_eq!(next_sort(&desc, "id"), vec![SortColumn::asc("id")]);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let params = TableParams {
            page: 3,
            page_size: 10,
            order: "-name".to_string(),
        };
        let changed = params.with_page_size(20);
        assert_eq!(changed.page, 1);
        assert_eq!(changed.page_size, 20);
        assert_eq!(changed.order, "-name");
    }

    #[test]
    fn test_from_query_with_prefix() {
        let defaults = TableParams::new(10, "name");
        let q = query(&[
            ("page", "4"),
            ("childrenPage", "2"),
            ("childrenPageSize", "50"),
            ("childrenOrder", "-id"),
        ]);

        let children = TableParams::from_query(&q, "children", &defaults);
        assert_eq!(children.page, 2);
        assert_eq!(children.page_size, 50);
        assert_eq!(children.order, "-id");

        let main = TableParams::from_query(&q, "", &defaults);
        assert_eq!(main.page, 4);
        assert_eq!(main.page_size, 10);
        assert_eq!(main.order, "name");
    }

    #[test]
    fn test_from_query_invalid_values_fall_back() {
        let defaults = TableParams::new(20, "");
        let q = query(&[("page", "0"), ("pageSize", "abc")]);
        let params = TableParams::from_query(&q, "", &defaults);
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 20);
    }

    #[test]
    fn test_merge_into_keeps_cleared_order() {
        let mut q = query(&[("order", "name"), ("search", "clinic")]);
        TableParams::new(20, "").merge_into(&mut q, "");
        assert_eq!(q.get("page").map(String::as_str), Some("1"));
        assert_eq!(q.get("pageSize").map(String::as_str), Some("20"));
        assert_eq!(q.get("order").map(String::as_str), Some(""));
        assert_eq!(q.get("search").map(String::as_str), Some("clinic"));

        let defaults = TableParams::new(20, "name");
        assert_eq!(TableParams::from_query(&q, "", &defaults).order, "");
    }

    #[test]
    fn test_to_api_query() {
        let params = TableParams {
            page: 2,
            page_size: 50,
            order: "-name".to_string(),
        };
        assert_eq!(
            params.to_api_query(),
            vec![
                ("page", "2".to_string()),
                ("limit", "50".to_string()),
                ("order", "-name".to_string()),
            ]
        );
        assert_eq!(TableParams::default().to_api_query().len(), 2);
    }

    #[test]
    fn test_sort_round_trip_keeps_spaces() {
        let sort = vec![SortColumn::desc(" name"), SortColumn::asc("org unit ")];
        let encoded = encode_sort(&sort);
        assert_eq!(encoded, "- name,org unit ");
        assert_eq!(decode_sort(&encoded), sort);
    }
}
