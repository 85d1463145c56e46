use contracts::domain::org_unit::OrgUnit;
use contracts::shared::paginated::Paginated;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct OrgUnitListState {
    pub items: Vec<OrgUnit>,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl OrgUnitListState {
    pub fn apply(&mut self, page: Paginated<OrgUnit>) {
        self.items = page.results;
        self.total_count = page.count;
        self.total_pages = page.pages;
        self.is_loaded = true;
    }
}

// Scoped to the list component, disposed with its tab
pub fn create_state() -> RwSignal<OrgUnitListState> {
    RwSignal::new(OrgUnitListState::default())
}
