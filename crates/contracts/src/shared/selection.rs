//! Multi-row selection across a server-paginated table.
//!
//! Only the current page is ever loaded, so "select all" cannot list every
//! row. It is stored as an exclusion list instead:
//!
//! - `select_all == false`: `selected_items` holds the selection,
//!   `unselected_items` is empty.
//! - `select_all == true`: every row is selected except `unselected_items`,
//!   `selected_items` is empty.

use serde::{Deserialize, Serialize};

/// Rows that can be selected expose a stable key used for membership tests.
pub trait Selectable {
    type Key: PartialEq;

    fn selection_key(&self) -> Self::Key;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState<T> {
    pub selected_items: Vec<T>,
    pub unselected_items: Vec<T>,
    pub select_all: bool,
    pub select_count: usize,
}

impl<T> Default for SelectionState<T> {
    fn default() -> Self {
        Self {
            selected_items: Vec::new(),
            unselected_items: Vec::new(),
            select_all: false,
            select_count: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    Select,
    Unselect,
    SelectAll,
    Reset,
}

impl SelectionAction {
    /// Maps the action names used by table callbacks. Unknown names give `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "select" => Some(Self::Select),
            "unselect" => Some(Self::Unselect),
            "selectAll" => Some(Self::SelectAll),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

/// Header checkbox state for the rows of the visible page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Applies one transition and returns the new state.
pub fn reduce_selection<T: Clone>(
    state: &SelectionState<T>,
    action: SelectionAction,
    items: &[T],
    total_count: usize,
) -> SelectionState<T> {
    match action {
        SelectionAction::Select => SelectionState {
            selected_items: items.to_vec(),
            select_count: items.len(),
            ..state.clone()
        },
        SelectionAction::Unselect => SelectionState {
            unselected_items: items.to_vec(),
            select_count: total_count.saturating_sub(items.len()),
            ..state.clone()
        },
        SelectionAction::SelectAll => SelectionState {
            selected_items: Vec::new(),
            unselected_items: Vec::new(),
            select_all: true,
            select_count: total_count,
        },
        SelectionAction::Reset => SelectionState::default(),
    }
}

/// String-dispatched variant of [`reduce_selection`]; unknown actions leave the
/// state untouched.
pub fn reduce_selection_named<T: Clone>(
    state: &SelectionState<T>,
    action: &str,
    items: &[T],
    total_count: usize,
) -> SelectionState<T> {
    match SelectionAction::parse(action) {
        Some(action) => reduce_selection(state, action, items, total_count),
        None => state.clone(),
    }
}

fn contains<T: Selectable>(items: &[T], key: &T::Key) -> bool {
    items.iter().any(|item| item.selection_key() == *key)
}

impl<T: Selectable + Clone> SelectionState<T> {
    pub fn is_selected(&self, item: &T) -> bool {
        let key = item.selection_key();
        if self.select_all {
            !contains(&self.unselected_items, &key)
        } else {
            contains(&self.selected_items, &key)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.select_count == 0
    }

    /// Row checkbox handler.
    pub fn toggle_item(&self, item: &T, checked: bool, total_count: usize) -> Self {
        let key = item.selection_key();
        if self.select_all {
            let mut unselected: Vec<T> = self
                .unselected_items
                .iter()
                .filter(|existing| existing.selection_key() != key)
                .cloned()
                .collect();
            if !checked {
                unselected.push(item.clone());
            }
            reduce_selection(self, SelectionAction::Unselect, &unselected, total_count)
        } else {
            let mut selected: Vec<T> = self
                .selected_items
                .iter()
                .filter(|existing| existing.selection_key() != key)
                .cloned()
                .collect();
            if checked {
                selected.push(item.clone());
            }
            reduce_selection(self, SelectionAction::Select, &selected, total_count)
        }
    }

    /// Header checkbox handler: checks or unchecks every row of the page.
    pub fn toggle_page(&self, page_items: &[T], checked: bool, total_count: usize) -> Self {
        page_items
            .iter()
            .fold(self.clone(), |state, item| state.toggle_item(item, checked, total_count))
    }

    pub fn page_check_state(&self, page_items: &[T]) -> CheckboxState {
        if page_items.is_empty() {
            return CheckboxState::Unchecked;
        }
        let selected = page_items.iter().filter(|item| self.is_selected(item)).count();
        if selected == 0 {
            CheckboxState::Unchecked
        } else if selected == page_items.len() {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: String,
    }

    impl Selectable for Row {
        type Key = i64;

        fn selection_key(&self) -> i64 {
            self.id
        }
    }

    fn rows(n: i64) -> Vec<Row> {
        (1..=n)
            .map(|id| Row {
                id,
                name: format!("Row {id}"),
            })
            .collect()
    }

    #[test]
    fn test_select_replaces_items() {
        let items = rows(3);
        let state = reduce_selection(&SelectionState::default(), SelectionAction::Select, &items[..2], 3);
        assert_eq!(state.select_count, 2);
        assert!(state.is_selected(&items[0]));
        assert!(state.is_selected(&items[1]));
        assert!(!state.is_selected(&items[2]));
        assert!(state.unselected_items.is_empty());
    }

    #[test]
    fn test_select_all_then_unselect_one() {
        let items = rows(10);
        let state = reduce_selection(&SelectionState::default(), SelectionAction::SelectAll, &[], 10);
        assert_eq!(state.select_count, 10);
        assert!(state.selected_items.is_empty());

        let state = reduce_selection(&state, SelectionAction::Unselect, &items[3..4], 10);
        assert_eq!(state.select_count, 9);
        assert!(!state.is_selected(&items[3]));
        for (i, item) in items.iter().enumerate() {
            if i != 3 {
                assert!(state.is_selected(item));
            }
        }
    }

    #[test]
    fn test_reset_returns_initial_state() {
        let items = rows(5);
        let state = reduce_selection(&SelectionState::default(), SelectionAction::SelectAll, &[], 5);
        let state = reduce_selection(&state, SelectionAction::Unselect, &items[..2], 5);
        let state = reduce_selection(&state, SelectionAction::Reset, &[], 5);
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn test_unknown_action_is_noop() {
        let items = rows(2);
        let state = reduce_selection(&SelectionState::default(), SelectionAction::Select, &items, 2);
        let same = reduce_selection_named(&state, "invert", &[], 2);
        assert_eq!(same, state);

        let reset = reduce_selection_named(&state, "reset", &[], 2);
        assert_eq!(reset, SelectionState::default());
    }

    #[test]
    fn test_membership_uses_key_not_structure() {
        let state = reduce_selection(
            &SelectionState::default(),
            SelectionAction::Select,
            &[Row {
                id: 7,
                name: "Old name".to_string(),
            }],
            1,
        );
        // Same row refetched with a different name is still selected.
        assert!(state.is_selected(&Row {
            id: 7,
            name: "New name".to_string(),
        }));
    }

    #[test]
    fn test_toggle_item_without_select_all() {
        let items = rows(4);
        let state = SelectionState::default()
            .toggle_item(&items[0], true, 4)
            .toggle_item(&items[1], true, 4)
            .toggle_item(&items[0], false, 4);
        assert_eq!(state.select_count, 1);
        assert!(state.is_selected(&items[1]));
        assert!(!state.is_selected(&items[0]));
    }

    #[test]
    fn test_toggle_item_under_select_all() {
        let items = rows(4);
        let state = reduce_selection(&SelectionState::default(), SelectionAction::SelectAll, &[], 40)
            .toggle_item(&items[2], false, 40);
        assert_eq!(state.select_count, 39);

        let state = state.toggle_item(&items[2], true, 40);
        assert_eq!(state.select_count, 40);
        assert!(state.unselected_items.is_empty());
        assert!(state.select_all);
    }

    #[test]
    fn test_page_check_state() {
        let items = rows(3);
        let state = SelectionState::default();
        assert_eq!(state.page_check_state(&items), CheckboxState::Unchecked);
        assert_eq!(state.page_check_state(&[]), CheckboxState::Unchecked);

        let state = state.toggle_item(&items[0], true, 3);
        assert_eq!(state.page_check_state(&items), CheckboxState::Indeterminate);

        let state = state.toggle_page(&items, true, 3);
        assert_eq!(state.page_check_state(&items), CheckboxState::Checked);
        assert_eq!(state.select_count, 3);

        let state = state.toggle_page(&items, false, 3);
        assert!(state.is_empty());
    }
}
