//! Table and filter state stored in the URL query string.
//!
//! ```ignore
//! let (params, set_params) = use_table_params("children", TableParams::new(10, "name"));
//! // params.get() reads childrenPage / childrenPageSize / childrenOrder
//! // set_params.run(p) writes them back to the URL
//! ```

use crate::layout::global_context::use_global_context;
use contracts::shared::table_params::{namespaced_key, TableParams, ORDER_KEY, PAGE_KEY, PAGE_SIZE_KEY};
use leptos::prelude::*;

/// Reactive params of one table. The keys are removed from the URL when the
/// owning component is disposed (its tab is closed).
pub fn use_table_params(
    prefix: impl Into<String>,
    defaults: TableParams,
) -> (Signal<TableParams>, Callback<TableParams>) {
    let ctx = use_global_context();
    let prefix = StoredValue::new(prefix.into());
    let defaults = StoredValue::new(defaults);

    // Memoized so that writes to other keys of the URL do not refetch.
    let params = Memo::new(move |_| {
        ctx.query.with(|q| {
            TableParams::from_query(q, &prefix.get_value(), &defaults.get_value())
        })
    });

    let set_params = Callback::new(move |next: TableParams| {
        ctx.update_query(|q| next.merge_into(q, &prefix.get_value()));
    });

    let keys = table_keys(&prefix.get_value());
    on_cleanup(move || {
        ctx.remove_query_keys(&keys);
    });

    (params.into(), set_params)
}

/// A free-form filter key (`search`, `validationStatus`, ...) namespaced like
/// the table keys. Writing a filter sends the table back to its first page.
pub fn use_query_filter(prefix: &str, key: &str) -> (Signal<String>, Callback<String>) {
    let ctx = use_global_context();
    let full_key = namespaced_key(prefix, key);
    let page_key = namespaced_key(prefix, PAGE_KEY);

    let value = {
        let full_key = full_key.clone();
        Memo::new(move |_| ctx.query_value(&full_key).unwrap_or_default())
    };

    let set_value = {
        let full_key = full_key.clone();
        Callback::new(move |next: String| {
            ctx.update_query(|q| {
                if next.is_empty() {
                    q.remove(&full_key);
                } else {
                    q.insert(full_key.clone(), next);
                }
                q.insert(page_key.clone(), "1".to_string());
            });
        })
    };

    on_cleanup(move || {
        ctx.remove_query_keys(&[full_key]);
    });

    (value.into(), set_value)
}

fn table_keys(prefix: &str) -> Vec<String> {
    [PAGE_KEY, PAGE_SIZE_KEY, ORDER_KEY]
        .iter()
        .map(|key| namespaced_key(prefix, key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::global_context::AppGlobalContext;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn with_context<R>(f: impl FnOnce(AppGlobalContext) -> R) -> R {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            provide_context(ctx);
            f(ctx)
        })
    }

    fn query_entry(ctx: &AppGlobalContext, key: &str) -> Option<String> {
        ctx.query.with_untracked(|q| q.get(key).cloned())
    }

    #[test]
    fn test_table_params_read_and_write_prefixed_keys() {
        with_context(|ctx| {
            ctx.update_query(|q| {
                q.insert("childrenPage".to_string(), "3".to_string());
            });
            let (params, set_params) = use_table_params("children", TableParams::new(10, "name"));
            assert_eq!(params.get_untracked().page, 3);
            assert_eq!(params.get_untracked().page_size, 10);

            set_params.run(params.get_untracked().with_page_size(50));
            assert_eq!(query_entry(&ctx, "childrenPage").as_deref(), Some("1"));
            assert_eq!(query_entry(&ctx, "childrenPageSize").as_deref(), Some("50"));
            assert_eq!(params.get_untracked(), TableParams {
                page: 1,
                page_size: 50,
                order: "name".to_string(),
            });
        });
    }

    #[test]
    fn test_table_params_ignore_unrelated_keys() {
        with_context(|ctx| {
            let (params, _) = use_table_params("", TableParams::new(20, "name"));
            let runs = Arc::new(AtomicUsize::new(0));
            let watcher = {
                let runs = Arc::clone(&runs);
                Memo::new(move |_| {
                    runs.fetch_add(1, Ordering::SeqCst);
                    params.get()
                })
            };
            assert_eq!(watcher.get_untracked().page, 1);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            ctx.update_query(|q| {
                q.insert("children42Page".to_string(), "3".to_string());
            });
            assert_eq!(watcher.get_untracked().page, 1);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            ctx.update_query(|q| {
                q.insert("page".to_string(), "2".to_string());
            });
            assert_eq!(watcher.get_untracked().page, 2);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_filter_write_resets_page() {
        with_context(|ctx| {
            let (params, set_params) = use_table_params("", TableParams::new(20, "name"));
            let (search, set_search) = use_query_filter("", "search");
            set_params.run(params.get_untracked().with_page(4));
            assert_eq!(params.get_untracked().page, 4);

            set_search.run("kinshasa".to_string());
            assert_eq!(search.get_untracked(), "kinshasa");
            assert_eq!(params.get_untracked().page, 1);

            set_search.run(String::new());
            assert_eq!(query_entry(&ctx, "search"), None);
        });
    }

    #[test]
    fn test_keys_removed_on_cleanup() {
        with_context(|ctx| {
            ctx.update_query(|q| {
                q.insert("page".to_string(), "2".to_string());
            });
            let child = Owner::current()
                .map(|owner| owner.child())
                .unwrap_or_else(Owner::new);
            child.with(|| {
                let (params, set_params) =
                    use_table_params("children7", TableParams::new(10, "name"));
                set_params.run(params.get_untracked().with_page(2));
                let (_, set_search) = use_query_filter("children7", "search");
                set_search.run("abc".to_string());
            });
            assert_eq!(query_entry(&ctx, "children7Page").as_deref(), Some("1"));
            assert_eq!(query_entry(&ctx, "children7Search").as_deref(), Some("abc"));

            child.cleanup();
            assert_eq!(query_entry(&ctx, "children7Page"), None);
            assert_eq!(query_entry(&ctx, "children7Search"), None);
            assert_eq!(query_entry(&ctx, "children7PageSize"), None);
            assert_eq!(query_entry(&ctx, "page").as_deref(), Some("2"));
        });
    }
}
