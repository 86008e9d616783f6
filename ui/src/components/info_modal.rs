use dioxus::prelude::*;

use crate::t;

/// "What is this?" dialog. Stateless: visibility and closing belong to the parent.
#[component]
pub fn InfoModal(is_open: bool, on_close: EventHandler<()>) -> Element {
    let _lang = crate::i18n::use_language();
    if !is_open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "info-modal__backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "info-modal",
                role: "dialog",
                // Clicks inside the card must not reach the backdrop.
                onclick: move |evt| evt.stop_propagation(),
                button {
                    r#type: "button",
                    class: "info-modal__close",
                    aria_label: t!("modal-close"),
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                div { class: "info-modal__body",
                    h2 { class: "info-modal__title", {t!("modal-title")} }
                    p { {t!("modal-intro")} }
                    p { {t!("modal-method")} }
                }
            }
        }
    }
}
