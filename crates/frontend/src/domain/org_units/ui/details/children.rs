use crate::domain::org_units::api;
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_labels::org_unit_detail_key;
use crate::shared::api_utils::RequestSequence;
use crate::shared::components::table::{Column, DataTable};
use crate::shared::components::ui::ValidationBadge;
use crate::shared::config::use_config;
use crate::shared::query_params::use_table_params;
use contracts::domain::org_unit::{OrgUnit, OrgUnitId};
use contracts::shared::paginated::Paginated;
use contracts::shared::table_params::TableParams;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

const CHILDREN_PAGE_SIZE: usize = 10;

/// URL prefix of the children table of `parent`, so that several detail tabs
/// can share the address bar.
pub fn children_params_prefix(parent: OrgUnitId) -> String {
    format!("children{}", parent)
}

fn columns() -> Vec<Column<OrgUnit>> {
    vec![
        Column::new("name", "Name", |ou: &OrgUnit| ou.name.clone()).min_width(200.0),
        Column::new("org_unit_type__name", "Type", |ou: &OrgUnit| ou.type_label()),
        Column::new("validation_status", "Status", |ou: &OrgUnit| {
            ou.validation_status.as_str().to_string()
        })
        .cell(|ou: &OrgUnit| view! { <ValidationBadge status=ou.validation_status /> }.into_any()),
        Column::new("source", "Source", |ou: &OrgUnit| ou.source.clone().unwrap_or_default())
            .not_sortable(),
    ]
}

/// Paginated table of the direct children of an org unit.
#[component]
pub fn OrgUnitChildren(parent: OrgUnitId) -> impl IntoView {
    let ctx = use_global_context();
    let config = use_config();
    let page = RwSignal::new(Paginated::<OrgUnit>::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let requests = RequestSequence::new();

    let (params, set_params) = use_table_params(
        children_params_prefix(parent),
        TableParams::new(CHILDREN_PAGE_SIZE, "name"),
    );

    Effect::new(move |_| {
        let params = params.get();
        let seq = requests.next();
        let requests = requests.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::fetch_children(parent, &params).await;
            if !requests.is_latest(seq) {
                log!("Dropping stale children response #{} of {}", seq, parent);
                return;
            }
            match result {
                Ok(next) => page.set(next),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let open_child = Callback::new(move |ou: OrgUnit| {
        ctx.open_tab(&org_unit_detail_key(ou.id), &ou.name);
    });

    view! {
        <div class="org-unit-children">
            <h2 class="section__title">"Children"</h2>
            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}
            <DataTable
                table_id=format!("org-unit-{}-children-table", parent)
                columns=columns()
                data=Signal::derive(move || page.with(|p| p.results.clone()))
                count=Signal::derive(move || page.with(|p| p.count))
                pages=Signal::derive(move || page.with(|p| p.pages))
                params=params
                on_change=set_params
                loading=loading
                page_size_options=config.tables.page_size_options.clone()
                on_row_click=open_child
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table_params::namespaced_key;

    #[test]
    fn test_children_prefix_namespaces_keys() {
        let prefix = children_params_prefix(OrgUnitId(42));
        assert_eq!(namespaced_key(&prefix, "page"), "children42Page");
        assert_eq!(namespaced_key(&prefix, "pageSize"), "children42PageSize");
    }
}
