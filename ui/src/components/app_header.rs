use crate::core::platform::Platform;
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;

// Header stylesheet (inlined as well in release native builds)
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// Page header: brand, tagline, the info button and the locale switcher.
///
/// If the launcher provided a global `Signal<String>` language code through
/// context, switching language here updates it so keyed subtrees re-render.
#[component]
pub fn AppHeader(on_info: EventHandler<()>) -> Element {
    i18n::init();

    // Seeded from the loader so an OS-selected locale shows up in the select.
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let selected = match lang_code_ctx {
        Some(code) => code(),
        None => current_lang(),
    };

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!("could not switch language to {val}: {err}"),
        }
    };

    let tagline = t!("tagline");
    let platform_class = Platform::current().css_class();

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header {
            id: "app-header",
            class: "app-header {platform_class}",
            div { class: "app-header__inner",
                div { class: "app-header__brand",
                    span { class: "app-header__brand-mark", {t!("brand-name")} }
                    span { class: "app-header__tagline", "{tagline}" }
                }

                div { class: "app-header__actions",
                    if show_switcher {
                        div { class: "app-header__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{selected}",
                                oninput: on_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", selected: c == selected, "{c}" }
                                    }
                                })}
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "app-header__info",
                        title: t!("header-info-button"),
                        aria_label: t!("header-info-button"),
                        onclick: move |_| on_info.call(()),
                        "ⓘ"
                    }
                }
            }
        }
    }
}
