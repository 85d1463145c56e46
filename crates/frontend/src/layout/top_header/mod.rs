//! Application top bar: sidebar toggle, title and language switch.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::locale::switch_locale;
use contracts::shared::locale::Locale;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let is_sidebar_visible = move || ctx.left_open.get();

    let on_locale_change = move |ev| {
        let code = event_target_value(&ev);
        if let Err(e) = switch_locale(&ctx, &code) {
            log::warn!("{}", e);
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Iaso"</span>
            </div>

            <div class="top-header__actions">
                <label class="top-header__locale" title="Language">
                    {icon("globe")}
                    <select
                        class="top-header__locale-select"
                        prop:value=move || ctx.locale.get().code()
                        on:change=on_locale_change
                    >
                        {Locale::ALL
                            .into_iter()
                            .map(|locale| view! {
                                <option value=locale.code()>{locale.label()}</option>
                            })
                            .collect_view()}
                    </select>
                </label>
            </div>
        </div>
    }
}
