use crate::domain::projects::api;
use crate::shared::api_utils::RequestSequence;
use crate::shared::components::table::{Column, DataTable};
use crate::shared::components::ui::Badge;
use crate::shared::config::use_config;
use crate::shared::date_utils::format_timestamp;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_params::use_table_params;
use contracts::domain::project::Project;
use contracts::shared::paginated::Paginated;
use contracts::shared::table_params::TableParams;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TABLE_ID: &str = "projects-table";
const PARAMS_PREFIX: &str = "projects";

fn auth_label(needs_authentication: bool) -> &'static str {
    if needs_authentication {
        "Required"
    } else {
        "None"
    }
}

fn columns() -> Vec<Column<Project>> {
    vec![
        Column::new("name", "Name", |p: &Project| p.name.clone()).min_width(220.0),
        Column::new("app_id", "App id", |p: &Project| p.app_id.clone().unwrap_or_default()),
        Column::new("needs_authentication", "Authentication", |p: &Project| {
            auth_label(p.needs_authentication).to_string()
        })
        .cell(|p: &Project| {
            let variant = if p.needs_authentication { "warning" } else { "neutral" };
            let label = auth_label(p.needs_authentication);
            view! { <Badge variant=variant.to_string()>{label}</Badge> }
                .into_any()
        })
        .fixed_width(),
        Column::new("created_at", "Created", |p: &Project| format_timestamp(p.created_at))
            .min_width(140.0),
        Column::new("updated_at", "Updated", |p: &Project| format_timestamp(p.updated_at))
            .min_width(140.0),
    ]
}

#[component]
pub fn ProjectList() -> impl IntoView {
    let config = use_config();
    let page = RwSignal::new(Paginated::<Project>::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let requests = RequestSequence::new();

    let (params, set_params) = use_table_params(
        PARAMS_PREFIX,
        TableParams::new(config.tables.default_page_size, "name"),
    );

    Effect::new(move |_| {
        let params = params.get();
        let seq = requests.next();
        let requests = requests.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            log!("Loading projects #{}: {:?}", seq, params);
            let result = api::fetch_projects(&params).await;
            if !requests.is_latest(seq) {
                return;
            }
            match result {
                Ok(next) => page.set(next),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <PageFrame page_id="projects--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Projects"</h1>
                    <Badge variant="primary".to_string()>
                        {move || page.with(|p| p.count.to_string())}
                    </Badge>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <DataTable
                    table_id=TABLE_ID
                    columns=columns()
                    data=Signal::derive(move || page.with(|p| p.results.clone()))
                    count=Signal::derive(move || page.with(|p| p.count))
                    pages=Signal::derive(move || page.with(|p| p.pages))
                    params=params
                    on_change=set_params
                    loading=loading
                    page_size_options=config.tables.page_size_options.clone()
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_label() {
        assert_eq!(auth_label(true), "Required");
        assert_eq!(auth_label(false), "None");
    }
}
