use contracts::shared::legend::LegendOption;
use leptos::prelude::*;

/// One checkbox per map layer, with its colour swatch.
#[component]
pub fn MapLegend(
    #[prop(into)] options: Signal<Vec<LegendOption>>,
    /// Called with the legend value of the toggled layer
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="map-legend">
            <For
                each=move || options.get()
                key=|option| (option.value.clone(), option.active)
                children=move |option: LegendOption| {
                    let value = option.value.clone();
                    view! {
                        <label class="map-legend__item">
                            <input
                                type="checkbox"
                                class="table__checkbox"
                                prop:checked=option.active
                                on:change=move |_| on_toggle.run(value.clone())
                            />
                            <span
                                class="map-legend__swatch"
                                style=format!("background-color: {};", option.color)
                            ></span>
                            <span class="map-legend__label">{option.label}</span>
                        </label>
                    }
                }
            />
        </div>
    }
}
