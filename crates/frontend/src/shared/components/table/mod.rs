pub mod column;
pub mod data_table;
pub mod row_count;
pub mod sortable_header_cell;
pub mod table_cell_checkbox;
pub mod table_header_checkbox;

pub use column::Column;
pub use data_table::DataTable;
pub use row_count::RowCount;
pub use sortable_header_cell::SortableHeaderCell;
pub use table_cell_checkbox::TableCellCheckbox;
pub use table_header_checkbox::TableHeaderCheckbox;
