//! Locale switching. The chosen language is kept in the cookie the API reads.

use crate::layout::global_context::AppGlobalContext;
use contracts::shared::locale::{Locale, LocaleError, LOCALE_COOKIE};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Locale stored in the cookie, if any and valid.
pub fn read_locale_cookie() -> Option<Locale> {
    let cookies = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())?;
    locale_from_cookie_header(&cookies)
}

fn locale_from_cookie_header(cookies: &str) -> Option<Locale> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == LOCALE_COOKIE)
        .and_then(|(_, value)| value.parse().ok())
}

fn write_locale_cookie(locale: Locale) {
    let Some(document) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
    else {
        return;
    };
    let cookie = format!("{}={}; path=/; max-age=31536000", LOCALE_COOKIE, locale.code());
    if let Err(e) = document.set_cookie(&cookie) {
        log::warn!("Failed to write locale cookie: {:?}", e);
    }
}

/// Switches the application language. Invalid codes are rejected before any
/// side effect.
pub fn switch_locale(ctx: &AppGlobalContext, code: &str) -> Result<Locale, LocaleError> {
    let locale: Locale = code.parse()?;
    write_locale_cookie(locale);
    ctx.locale.set(locale);
    log::info!("Locale switched to {}", locale);
    Ok(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_cookie_header() {
        assert_eq!(
            locale_from_cookie_header("csrftoken=abc; django_language=fr"),
            Some(Locale::Fr)
        );
        assert_eq!(locale_from_cookie_header("django_language=xx"), None);
        assert_eq!(locale_from_cookie_header(""), None);
    }

    #[test]
    fn test_switch_locale_rejects_unknown_code() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            assert!(switch_locale(&ctx, "xx").is_err());
            assert_eq!(ctx.locale.get_untracked(), Locale::default());
        });
    }
}
