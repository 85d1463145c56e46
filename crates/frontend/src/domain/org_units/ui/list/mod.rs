pub mod state;

use self::state::create_state;
use crate::domain::org_units::api::{self, OrgUnitFilters};
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_labels::org_unit_detail_key;
use crate::shared::api_utils::RequestSequence;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::table::{Column, DataTable};
use crate::shared::components::ui::{Badge, ValidationBadge};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_params::{use_query_filter, use_table_params};
use contracts::domain::org_unit::{OrgUnit, ValidationStatus};
use contracts::shared::selection::SelectionState;
use contracts::shared::table_params::TableParams;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TABLE_ID: &str = "org-units-table";
const SEARCH_KEY: &str = "search";
const VALIDATION_STATUS_KEY: &str = "validationStatus";

fn columns() -> Vec<Column<OrgUnit>> {
    vec![
        Column::new("id", "Id", |ou: &OrgUnit| ou.id.to_string())
            .min_width(70.0)
            .align_right(),
        Column::new("name", "Name", |ou: &OrgUnit| ou.name.clone()).min_width(220.0),
        Column::new("org_unit_type__name", "Type", |ou: &OrgUnit| ou.type_label()),
        Column::new("parent__name", "Parent", |ou: &OrgUnit| {
            ou.parent_name.clone().unwrap_or_default()
        }),
        Column::new("validation_status", "Status", |ou: &OrgUnit| {
            ou.validation_status.as_str().to_string()
        })
        .cell(|ou: &OrgUnit| view! { <ValidationBadge status=ou.validation_status /> }.into_any())
        .min_width(110.0),
        Column::new("source", "Source", |ou: &OrgUnit| ou.source.clone().unwrap_or_default()),
        Column::new("updated_at", "Updated", |ou: &OrgUnit| format_timestamp(ou.updated_at))
            .min_width(140.0),
    ]
}

#[component]
pub fn OrgUnitList() -> impl IntoView {
    let ctx = use_global_context();
    let config = use_config();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let is_filter_expanded = RwSignal::new(false);
    let reload = RwSignal::new(0u32);
    let selection = RwSignal::new(SelectionState::<OrgUnit>::default());
    let requests = RequestSequence::new();

    let (params, set_params) = use_table_params(
        "",
        TableParams::new(config.tables.default_page_size, "name"),
    );
    let (search, set_search) = use_query_filter("", SEARCH_KEY);
    let (validation_status, set_validation_status) =
        use_query_filter("", VALIDATION_STATUS_KEY);

    let filters = Memo::new(move |_| OrgUnitFilters {
        search: search.get(),
        validation_status: validation_status.get(),
    });

    // A selection only makes sense for the result set it was made on.
    Effect::new(move |_| {
        filters.track();
        selection.set(SelectionState::default());
    });

    Effect::new(move |_| {
        reload.track();
        let params = params.get();
        let filters = filters.get();
        let seq = requests.next();
        let requests = requests.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            log!("Loading org units #{}: {:?} {:?}", seq, params, filters);
            let result = api::fetch_org_units(&params, &filters).await;
            if !requests.is_latest(seq) {
                log!("Dropping stale org units response #{}", seq);
                return;
            }
            match result {
                Ok(page) => state.update(|s| s.apply(page)),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let open_detail = Callback::new(move |ou: OrgUnit| {
        ctx.open_tab(&org_unit_detail_key(ou.id), &ou.name);
    });

    let active_filters_count = Signal::derive(move || filters.with(|f| f.active_count()));

    view! {
        <PageFrame page_id="org_units--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Org units"</h1>
                    <Badge variant="primary".to_string()>
                        {move || state.with(|s| s.total_count.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| reload.update(|n| *n += 1)
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=active_filters_count
                    filter_tags=move || view! {
                        {move || {
                            let value = search.get();
                            (!value.is_empty()).then(|| view! {
                                <FilterTag
                                    label=format!("Search: {}", value)
                                    on_remove=Callback::new(move |_| set_search.run(String::new()))
                                />
                            })
                        }}
                        {move || {
                            let value = validation_status.get();
                            (!value.is_empty()).then(|| view! {
                                <FilterTag
                                    label=format!("Status: {}", value)
                                    on_remove=Callback::new(move |_| set_validation_status.run(String::new()))
                                />
                            })
                        }}
                    }
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 320px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Search"</Label>
                                <SearchInput
                                    value=search
                                    on_change=set_search
                                    placeholder="Name, id, source ref..."
                                />
                            </Flex>
                        </div>
                        <div style="min-width: 160px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Validation status"</Label>
                                <select
                                    class="form__select"
                                    prop:value=move || validation_status.get()
                                    on:change=move |ev| set_validation_status.run(event_target_value(&ev))
                                >
                                    <option value="">"All"</option>
                                    {ValidationStatus::ALL
                                        .into_iter()
                                        .map(|status| view! {
                                            <option value=status.as_str()>{status.as_str()}</option>
                                        })
                                        .collect_view()}
                                </select>
                            </Flex>
                        </div>
                    </Flex>
                </FilterPanel>

                {move || error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <DataTable
                    table_id=TABLE_ID
                    columns=columns()
                    data=Signal::derive(move || state.with(|s| s.items.clone()))
                    count=Signal::derive(move || state.with(|s| s.total_count))
                    pages=Signal::derive(move || state.with(|s| s.total_pages))
                    params=params
                    on_change=set_params
                    loading=loading
                    selection=selection
                    page_size_options=config.tables.page_size_options.clone()
                    on_row_click=open_detail
                />
            </div>
        </PageFrame>
    }
}
