use crate::shared::api_utils::{build_query, fetch_json};
use contracts::domain::project::Project;
use contracts::shared::paginated::Paginated;
use contracts::shared::table_params::TableParams;

pub async fn fetch_projects(params: &TableParams) -> Result<Paginated<Project>, String> {
    let query = build_query(&params.to_api_query());
    fetch_json(&format!("/api/projects/{}", query)).await
}
