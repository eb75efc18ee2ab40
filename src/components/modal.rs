use crate::prelude::*;

use crate::components::svg::{Close, DrawSvg};

#[component]
pub fn InfoModal(mut is_open: Signal<bool>, title: &'static str, children: Element) -> Element {
    rsx! {
        div {
            class: "modal",
            class: if is_open() { "modal-open" },
            role: "dialog",
            onclick: move |_| *is_open.write() = false,
            div {
                class: "modal-box max-w-xl",
                onclick: move |event| event.stop_propagation(),
                div { class: "flex flex-row justify-between gap-4 mb-4",
                    h2 { class: "text-2xl font-bold", {title} }
                    button {
                        class: "btn btn-circle btn-outline btn-primary btn-sm",
                        onclick: move |_| *is_open.write() = false,
                        DrawSvg::<Close> {}
                    }
                }
                {children}
            }
        }
    }
}
