//! Generic server-paginated table.
//!
//! The table is presentational: it receives the rows of the current page, the
//! total `count` and `pages`, and the current [`TableParams`]. Every page,
//! page-size and sort interaction is reported through `on_change`; the parent
//! writes it to the URL and refetches.
//!
//! ```ignore
//! let (params, set_params) = use_table_params("", TableParams::new(20, "name"));
//! view! {
//!     <DataTable
//!         table_id="org-units-table"
//!         columns=columns
//!         data=Signal::derive(move || state.get().items)
//!         count=Signal::derive(move || state.get().count)
//!         pages=Signal::derive(move || state.get().pages)
//!         params=params
//!         on_change=set_params
//!         selection=selection
//!     />
//! }
//! ```

use super::column::{row_fingerprint, Column};
use super::row_count::RowCount;
use super::sortable_header_cell::SortableHeaderCell;
use super::table_cell_checkbox::TableCellCheckbox;
use super::table_header_checkbox::TableHeaderCheckbox;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::table_utils::init_column_resize;
use contracts::shared::selection::{reduce_selection, Selectable, SelectionAction, SelectionState};
use contracts::shared::table_params::{SortColumn, TableParams};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::hash::Hash;
use thaw::*;

#[component]
pub fn DataTable<T>(
    /// DOM id, also the localStorage key prefix for column widths
    #[prop(into)]
    table_id: String,

    columns: Vec<Column<T>>,

    /// Rows of the current page only
    #[prop(into)]
    data: Signal<Vec<T>>,

    /// Total rows across all pages
    #[prop(into)]
    count: Signal<usize>,

    #[prop(into)]
    pages: Signal<usize>,

    #[prop(into)]
    params: Signal<TableParams>,

    on_change: Callback<TableParams>,

    #[prop(optional, into)]
    loading: MaybeProp<bool>,

    /// Enables the checkbox column and the selection toolbar
    #[prop(optional)]
    selection: Option<RwSignal<SelectionState<T>>>,

    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,

    #[prop(optional)]
    on_row_click: Option<Callback<T>>,
) -> impl IntoView
where
    T: Selectable + Clone + Send + Sync + 'static,
    T::Key: Hash + Eq + Clone + Send + Sync + 'static,
{
    let columns = StoredValue::new(columns);
    let has_selection = selection.is_some();
    let page_size_options = page_size_options.unwrap_or_else(|| vec![10, 20, 50, 100]);
    let is_loading = move || loading.get().unwrap_or(false);

    let resize_initialized = StoredValue::new(false);
    let resize_table_id = StoredValue::new(table_id.clone());
    Effect::new(move |_| {
        if !resize_initialized.get_value() {
            resize_initialized.set_value(true);
            let table_id = resize_table_id.get_value();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(100).await;
                init_column_resize(&table_id, &format!("{}_column_widths", table_id));
            });
        }
    });

    // ---- params ----
    let sort = Signal::derive(move || params.with(|p| p.sort_list()));
    let on_sort = Callback::new(move |field: String| {
        on_change.run(params.get_untracked().with_sort_toggled(&field));
    });
    let on_page_change = Callback::new(move |page: usize| {
        on_change.run(params.get_untracked().with_page(page));
    });
    let on_page_size_change = Callback::new(move |size: usize| {
        on_change.run(params.get_untracked().with_page_size(size));
    });

    // ---- selection ----
    let selection_state =
        Signal::derive(move || selection.map(|s| s.get()).unwrap_or_default());
    let selected_count =
        Signal::derive(move || selection.map(|s| s.with(|s| s.select_count)).unwrap_or(0));

    let dispatch = move |action: SelectionAction| {
        if let Some(selection) = selection {
            let total = count.get_untracked();
            selection.update(|s| *s = reduce_selection(s, action, &[], total));
        }
    };

    let toggle_page = Callback::new(move |checked: bool| {
        if let Some(selection) = selection {
            let rows = data.get_untracked();
            let total = count.get_untracked();
            selection.update(|s| *s = s.toggle_page(&rows, checked, total));
        }
    });

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <RowCount count=count selected=selected_count />
                {has_selection.then(|| view! {
                    <div class="data-table__selection-actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| dispatch(SelectionAction::SelectAll)
                            disabled=Signal::derive(move || count.get() == 0)
                        >
                            "Select all"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| dispatch(SelectionAction::Reset)
                            disabled=Signal::derive(move || selection_state.with(|s| s.is_empty()))
                        >
                            "Unselect all"
                        </Button>
                    </div>
                })}
                <PaginationControls
                    current_page=Signal::derive(move || params.with(|p| p.page))
                    total_pages=pages
                    page_size=Signal::derive(move || params.with(|p| p.page_size))
                    on_page_change=on_page_change
                    on_page_size_change=on_page_size_change
                    page_size_options=page_size_options
                />
            </div>

            <div class="table-wrapper" class:table-wrapper--loading=is_loading>
                <Table attr:id=table_id attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {has_selection.then(|| view! {
                                <TableHeaderCheckbox
                                    items=data
                                    selection=selection_state
                                    on_change=toggle_page
                                />
                            })}
                            {columns
                                .get_value()
                                .into_iter()
                                .map(|column| header_cell(column, sort, on_sort))
                                .collect_view()}
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=move || data.get()
                            key=move |row| {
                                (row.selection_key(), columns.with_value(|c| row_fingerprint(c, row)))
                            }
                            children=move |row: T| {
                                let row_for_check = row.clone();
                                let checked = Signal::derive(move || {
                                    selection_state.with(|s| s.is_selected(&row_for_check))
                                });

                                let row_for_toggle = row.clone();
                                let on_check = Callback::new(move |checked: bool| {
                                    if let Some(selection) = selection {
                                        let total = count.get_untracked();
                                        selection.update(|s| {
                                            *s = s.toggle_item(&row_for_toggle, checked, total)
                                        });
                                    }
                                });

                                let row_for_click = row.clone();
                                let cells = columns
                                    .get_value()
                                    .into_iter()
                                    .map(|column| {
                                        let content = column.render(&row);
                                        let style = if column.align == "right" {
                                            "justify-content: flex-end;"
                                        } else {
                                            ""
                                        };
                                        view! {
                                            <TableCell>
                                                <TableCellLayout truncate=true attr:style=style>
                                                    {content}
                                                </TableCellLayout>
                                            </TableCell>
                                        }
                                    })
                                    .collect_view();

                                view! {
                                    <TableRow on:click=move |_| {
                                        if let Some(on_row_click) = on_row_click {
                                            on_row_click.run(row_for_click.clone());
                                        }
                                    }>
                                        {has_selection.then(|| view! {
                                            <TableCellCheckbox checked=checked on_change=on_check />
                                        })}
                                        {cells}
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <Show when=move || data.with(|d| d.is_empty()) && !is_loading()>
                    <div class="table__empty">"No results"</div>
                </Show>
                <Show when=is_loading>
                    <div class="table__loading">"Loading..."</div>
                </Show>
            </div>
        </div>
    }
}

fn header_cell<T: 'static>(
    column: Column<T>,
    sort: Signal<Vec<SortColumn>>,
    on_sort: Callback<String>,
) -> AnyView {
    let resize_class = if column.resizable { "resizable" } else { "" };
    if column.sortable {
        view! {
            <SortableHeaderCell
                label=column.header
                sort_field=column.id
                sort=sort
                on_sort=on_sort
                min_width=column.min_width
                align=column.align
                resizable=column.resizable
            />
        }
        .into_any()
    } else {
        view! {
            <TableHeaderCell resizable=false min_width=column.min_width class=resize_class>
                {column.header}
            </TableHeaderCell>
        }
        .into_any()
    }
}
