//! Root layout: shell with the sidebar and one page per opened tab.

use crate::layout::global_context::{use_global_context, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::tab_labels::ORG_UNITS_KEY;
use crate::layout::tabs::{tab_label_for_key, TabPage};
use crate::layout::Shell;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let tabs_store = use_global_context();

    tabs_store.init_router_integration();

    // Landing page when the URL names no tab.
    if tabs_store.active.get_untracked().is_none() {
        tabs_store.open_tab(ORG_UNITS_KEY, tab_label_for_key(ORG_UNITS_KEY));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            log!("Mounting tab page '{}'", tab.key);
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }.into_any()
            }
        />
    }
}
