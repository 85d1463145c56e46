use serde::{Deserialize, Serialize};

/// Paginated list payload. The API names the items array after the resource
/// (`orgunits`, `projects`, ...), all of which land in `results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(alias = "orgunits", alias = "projects", alias = "orgunittypes")]
    pub results: Vec<T>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub pages: usize,
    #[serde(default = "first_page")]
    pub page: usize,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_previous: bool,
}

fn first_page() -> usize {
    1
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
            pages: 0,
            page: 1,
            limit: 0,
            has_next: false,
            has_previous: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_decode_resource_named_items() {
        let json = r#"{
            "orgunits": [{"id": 1}, {"id": 2}],
            "count": 42,
            "pages": 21,
            "page": 3,
            "limit": 2,
            "has_next": true,
            "has_previous": true
        }"#;
        let page: Paginated<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(page.results, vec![Item { id: 1 }, Item { id: 2 }]);
        assert_eq!(page.count, 42);
        assert_eq!(page.pages, 21);
        assert_eq!(page.page, 3);
        assert!(page.has_next);
    }

    #[test]
    fn test_missing_counters_default() {
        let page: Paginated<Item> = serde_json::from_str(r#"{"projects": []}"#).unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.count, 0);
    }
}
