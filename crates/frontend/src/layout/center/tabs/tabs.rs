use super::tab::Tab as TabComponent;
use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Strip of the open tabs, keyed so that a retitled tab keeps its node.
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = use_global_context();

    view! {
        <div class="tabs-bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabComponent tab=tab /> }
            />
        </div>
    }
}
