//! Sortable table header cell.
//!
//! A click cycles the column through ascending, descending and unsorted; the
//! parent applies the change with `TableParams::with_sort_toggled`.

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use crate::shared::table_utils::{clear_resize_flag, was_just_resizing};
use contracts::shared::table_params::SortColumn;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Field id sent in `order`
    #[prop(into)]
    sort_field: String,

    /// Current sort list decoded from the URL
    #[prop(into)]
    sort: Signal<Vec<SortColumn>>,

    /// Called with `sort_field` on click
    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    #[prop(optional, default = "left")]
    align: &'static str,

    #[prop(optional, default = true)]
    resizable: bool,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    let handle_click = move |_| {
        // A mouseup that ends a resize must not also sort
        if was_just_resizing() {
            clear_resize_flag();
            return;
        }
        on_sort.run(sort_field_for_click.clone());
    };

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell
            resizable=false
            min_width=min_width
            class=if resizable { "resizable" } else { "" }
        >
            <div class="table__sortable-header" style=header_style on:click=handle_click>
                {label}
                <span class=move || sort.with(|s| get_sort_class(s, &sort_field_for_class))>
                    {move || sort.with(|s| get_sort_indicator(s, &sort_field_for_indicator))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
