use contracts::shared::locale::Locale;
use leptos::prelude::*;
use std::collections::BTreeMap;
use web_sys::window;

/// Query key holding the active tab. Every other key belongs to a table or a
/// page filter.
pub const ACTIVE_TAB_KEY: &str = "active";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    /// Mirror of the URL query string. Tables and filters read and write it;
    /// an effect writes it back to the address bar.
    pub query: RwSignal<BTreeMap<String, String>>,
    pub locale: RwSignal<Locale>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            query: RwSignal::new(BTreeMap::new()),
            locale: RwSignal::new(Locale::default()),
        }
    }

    /// Seeds the store from `location.search`, reopens the tab named by
    /// `active`, then keeps the URL in sync with the store.
    pub fn init_router_integration(&self) {
        let search = current_search();
        let (params, active_key) = parse_search(&search);
        self.query.set(params);
        if let Some(active_key) = active_key {
            let title = crate::layout::tabs::tab_label_for_key(&active_key).to_string();
            self.open_tab(&active_key, &title);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = this
                .query
                .with(|params| this.active.with(|active| build_search(params, active.as_deref())));
            if current_search() == new_url {
                return;
            }
            let Some(history) = window().and_then(|w| w.history().ok()) else {
                return;
            };
            if let Err(e) =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
            {
                log::warn!("replaceState failed: {:?}", e);
            }
        });
    }

    pub fn query_value(&self, key: &str) -> Option<String> {
        self.query.with(|q| q.get(key).cloned())
    }

    pub fn update_query(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) {
        self.query.update(f);
    }

    pub fn remove_query_keys(&self, keys: &[String]) {
        self.query.update(|q| {
            for key in keys {
                q.remove(key);
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Splits `?a=1&active=x` into the table/filter keys and the active tab.
fn parse_search(search: &str) -> (BTreeMap<String, String>, Option<String>) {
    let mut params: BTreeMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    let active = params.remove(ACTIVE_TAB_KEY);
    (params, active)
}

/// The `location.search` value for the store; `"?"` when empty.
fn build_search(params: &BTreeMap<String, String>, active: Option<&str>) -> String {
    let mut all = params.clone();
    if let Some(active) = active {
        all.insert(ACTIVE_TAB_KEY.to_string(), active.to_string());
    }
    let query_string = serde_qs::to_string(&all).unwrap_or_default();
    format!("?{}", query_string)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

pub fn use_global_context() -> AppGlobalContext {
    leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
