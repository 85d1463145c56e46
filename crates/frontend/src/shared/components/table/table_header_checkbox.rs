//! Header checkbox selecting or clearing the rows of the visible page.
//!
//! Shows three states (unchecked, checked, indeterminate) computed from the
//! selection state, so rows excluded under "select all" show as unchecked.

use contracts::shared::selection::{CheckboxState, Selectable, SelectionState};
use leptos::prelude::event_target_checked;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableHeaderCheckbox<T>(
    /// Rows of the current page
    #[prop(into)]
    items: Signal<Vec<T>>,

    #[prop(into)]
    selection: Signal<SelectionState<T>>,

    /// `true` = check every row of the page, `false` = uncheck them
    on_change: Callback<bool>,
) -> impl IntoView
where
    T: Selectable + Clone + Send + Sync + 'static,
{
    let checkbox_state =
        Signal::derive(move || selection.with(|s| items.with(|rows| s.page_check_state(rows))));

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // `indeterminate` is a DOM property only, not an attribute
    Effect::new(move |_| {
        let state = checkbox_state.get();
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(matches!(state, CheckboxState::Indeterminate));
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
