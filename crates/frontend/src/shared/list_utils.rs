//! Shared list helpers: sort indicators and the debounced search box.
use contracts::shared::table_params::SortColumn;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Minimum search length sent to the API.
pub const MIN_SEARCH_LEN: usize = 2;

/// Sort indicator for a header: ▲ ascending, ▼ descending, ⇅ unsorted.
pub fn get_sort_indicator(sort: &[SortColumn], field: &str) -> &'static str {
    match sort.iter().find(|column| column.id == field) {
        Some(column) if column.desc => " ▼",
        Some(_) => " ▲",
        None => " ⇅",
    }
}

pub fn get_sort_class(sort: &[SortColumn], field: &str) -> &'static str {
    if sort.iter().any(|column| column.id == field) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Search box with a 300 ms debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current filter value (from the URL)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    // external changes (filter chip removed, URL edited)
    Effect::new(move |_| {
        let external = value.get();
        if input_value.get_untracked().trim() != external {
            set_input_value.set(external);
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let trimmed = new_value.trim();
            if trimmed.is_empty() || trimmed.chars().count() >= MIN_SEARCH_LEN {
                on_change.run(trimmed.to_string());
            }
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
        closure.forget();
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let sort = vec![SortColumn::desc("name")];
        assert_eq!(get_sort_indicator(&sort, "name"), " ▼");
        assert_eq!(get_sort_indicator(&[SortColumn::asc("name")], "name"), " ▲");
        assert_eq!(get_sort_indicator(&sort, "id"), " ⇅");
    }

    #[test]
    fn test_sort_class() {
        let sort = vec![SortColumn::asc("id")];
        assert!(get_sort_class(&sort, "id").ends_with("--active"));
        assert_eq!(get_sort_class(&sort, "name"), "table__sort-indicator");
    }
}
