use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::load_config;
use crate::shared::locale::read_locale_cookie;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    if let Some(locale) = read_locale_cookie() {
        ctx.locale.set(locale);
    }
    provide_context(ctx);

    // Components fall back to the embedded defaults through use_config.
    match load_config() {
        Ok(config) => provide_context(config),
        Err(e) => log::error!("{}", e),
    }

    view! {
        <AppShell />
    }
}
