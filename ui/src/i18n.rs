//! Internationalization (i18n) support for `friday-meter-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/friday-meter-ui.ftl   (fallback/reference)
//!   es-ES/friday-meter-ui.ftl   (additional locale)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! crate::i18n::init(); // idempotent
//! let caption = t!("gauge-caption-average");
//! ```
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
//!
//! NOTE: The hyphenated filename `friday-meter-ui.ftl` is canonical across all locales.
use std::sync::Once;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use time::Weekday;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("modal-title")
///     t!(<key>, name = value)  // with Fluent arguments
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

const FALLBACK: &str = "en-US";

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "friday-meter-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!("failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Tag of the language the loader currently resolves to first (`"en-US"` when unknown).
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| FALLBACK.to_string())
}

/// Current language code for a component, subscribing it to the launcher's
/// `Signal<String>` when one is in context.
///
/// Components whose text comes from `t!` call this so a runtime switch
/// re-renders them; Dioxus never re-runs a prop-less child on its own.
pub fn use_language() -> String {
    match try_use_context::<Signal<String>>() {
        Some(code) => code(),
        None => current_language(),
    }
}

/// Localized long weekday name ("Friday", "viernes", ...).
pub fn weekday_name(weekday: Weekday) -> String {
    match weekday {
        Weekday::Sunday => crate::t!("weekday-sunday"),
        Weekday::Monday => crate::t!("weekday-monday"),
        Weekday::Tuesday => crate::t!("weekday-tuesday"),
        Weekday::Wednesday => crate::t!("weekday-wednesday"),
        Weekday::Thursday => crate::t!("weekday-thursday"),
        Weekday::Friday => crate::t!("weekday-friday"),
        Weekday::Saturday => crate::t!("weekday-saturday"),
    }
}

#[cfg(all(target_arch = "wasm32", not(test)))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(all(not(target_arch = "wasm32"), not(test)))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

// Unit tests assert on fallback strings whatever the host locale is.
#[cfg(test)]
fn requested_languages() -> Vec<LanguageIdentifier> {
    vec![FALLBACK.parse().expect("valid fallback language identifier")]
}
