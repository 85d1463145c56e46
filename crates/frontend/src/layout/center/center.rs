use super::tabs::TabBar;
use leptos::prelude::*;

/// Content zone: the strip of open tabs above the tab pages.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <TabBar />
            {children()}
        </div>
    }
}
