//! Tab content registry: the single mapping from a tab key to its view.

use super::tab_labels::{parse_org_unit_detail_key, ORG_UNITS_KEY, PROJECTS_KEY, ORG_UNIT_DETAIL_PREFIX};
use crate::domain::org_units::ui::{OrgUnitDetail, OrgUnitList};
use crate::domain::projects::ui::ProjectList;
use crate::layout::global_context::AppGlobalContext;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content of the tab `key`; unknown keys get a placeholder.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        ORG_UNITS_KEY => view! { <OrgUnitList /> }.into_any(),
        PROJECTS_KEY => view! { <ProjectList /> }.into_any(),

        k if k.starts_with(ORG_UNIT_DETAIL_PREFIX) => match parse_org_unit_detail_key(k) {
            Some(id) => {
                log!("Creating OrgUnitDetail for {}", id);
                view! {
                    <OrgUnitDetail
                        id=id
                        on_close=Callback::new(move |_| {
                            tabs_store.close_tab(&key_for_close);
                        })
                    />
                }
                .into_any()
            }
            None => {
                log!("Bad org unit tab key: {}", k);
                view! { <div class="placeholder">"Bad org unit tab key"</div> }.into_any()
            }
        },

        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}
