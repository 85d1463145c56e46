use leptos::prelude::*;

/// "42 results" plus, when rows are selected, "3 selected".
pub fn row_count_label(count: usize, selected: usize) -> String {
    let results = if count == 1 {
        "1 result".to_string()
    } else {
        format!("{} results", count)
    };
    if selected > 0 {
        format!("{} · {} selected", results, selected)
    } else {
        results
    }
}

#[component]
pub fn RowCount(
    #[prop(into)]
    count: Signal<usize>,
    /// Selected rows; 0 hides the selection part
    #[prop(into)]
    selected: Signal<usize>,
) -> impl IntoView {
    view! {
        <span class="table__row-count">
            {move || row_count_label(count.get(), selected.get())}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count_label() {
        assert_eq!(row_count_label(0, 0), "0 results");
        assert_eq!(row_count_label(1, 0), "1 result");
        assert_eq!(row_count_label(42, 3), "42 results · 3 selected");
    }
}
