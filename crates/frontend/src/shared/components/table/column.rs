//! Column descriptors for [`DataTable`](super::DataTable).
//!
//! ```ignore
//! let columns = vec![
//!     Column::new("name", "Name", |ou: &OrgUnit| ou.name.clone()).min_width(220.0),
//!     Column::new("org_unit_type__name", "Type", |ou: &OrgUnit| ou.type_label()),
//!     Column::new("id", "Actions", |_| String::new())
//!         .not_sortable()
//!         .cell(|ou: &OrgUnit| view! { <a href="#">"Open"</a> }.into_any()),
//! ];
//! ```

use leptos::prelude::*;
use std::sync::Arc;

pub type Accessor<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

pub struct Column<T> {
    /// Field id, also used as the `order` token when sorting.
    pub id: &'static str,
    pub header: String,
    pub accessor: Accessor<T>,
    pub cell: Option<CellRenderer<T>>,
    pub sortable: bool,
    pub resizable: bool,
    pub min_width: f64,
    pub align: &'static str,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            header: self.header.clone(),
            accessor: Arc::clone(&self.accessor),
            cell: self.cell.clone(),
            sortable: self.sortable,
            resizable: self.resizable,
            min_width: self.min_width,
            align: self.align,
        }
    }
}

impl<T> Column<T> {
    /// Sortable, resizable column rendering the accessor's text.
    pub fn new(
        id: &'static str,
        header: impl Into<String>,
        accessor: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            header: header.into(),
            accessor: Arc::new(accessor),
            cell: None,
            sortable: true,
            resizable: true,
            min_width: 100.0,
            align: "left",
        }
    }

    pub fn cell(mut self, renderer: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
        self.cell = Some(Arc::new(renderer));
        self
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn fixed_width(mut self) -> Self {
        self.resizable = false;
        self
    }

    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = width;
        self
    }

    pub fn align_right(mut self) -> Self {
        self.align = "right";
        self
    }

    /// Cell content: the custom renderer if any, else the accessor text.
    pub fn render(&self, row: &T) -> AnyView {
        match &self.cell {
            Some(renderer) => renderer(row),
            None => {
                let text = (self.accessor)(row);
                view! { <span>{text}</span> }.into_any()
            }
        }
    }
}

/// Accessor texts of one row. Rows whose id is unchanged but whose
/// fingerprint differs are rendered again.
pub fn row_fingerprint<T>(columns: &[Column<T>], row: &T) -> String {
    columns
        .iter()
        .map(|column| (column.accessor)(row))
        .collect::<Vec<_>>()
        .join("\u{1f}")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
    }

    struct StatusRow {
        id: i64,
        status: &'static str,
    }

    #[test]
    fn test_row_fingerprint_follows_content() {
        let columns = vec![
            Column::new("id", "Id", |r: &StatusRow| r.id.to_string()),
            Column::new("status", "Status", |r: &StatusRow| r.status.to_string())
                .cell(|r: &StatusRow| view! { <b>{r.status}</b> }.into_any()),
        ];
        let before = row_fingerprint(&columns, &StatusRow { id: 7, status: "NEW" });
        let after = row_fingerprint(&columns, &StatusRow { id: 7, status: "VALID" });
        assert_ne!(before, after);
        assert_eq!(before, row_fingerprint(&columns, &StatusRow { id: 7, status: "NEW" }));
    }

    #[test]
    fn test_builder_flags() {
        let column = Column::new("name", "Name", |r: &Row| r.name.to_string())
            .not_sortable()
            .fixed_width()
            .min_width(240.0)
            .align_right();
        assert!(!column.sortable);
        assert!(!column.resizable);
        assert_eq!(column.min_width, 240.0);
        assert_eq!(column.align, "right");
        assert!(column.cell.is_none());
        assert_eq!((column.accessor)(&Row { name: "Bukavu" }), "Bukavu");
    }
}
