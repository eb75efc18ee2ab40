use crate::prelude::*;

use crate::{
    components::svg::{ArrowLeft, DrawSvg, SvgSize::Custom},
    utils::CCStr,
};

/// Hover text rendered by the daisyUI tooltip, wrapping `children`
#[component]
pub fn Tooltip(text: CCStr, children: Element) -> Element {
    rsx! {
        div {
            class: "tooltip tooltip-right before:text-xs before:max-w-xs hover:before:delay-300",
            "data-tip": "{text}",
            {children}
        }
    }
}

#[component]
pub fn BackButton(route: crate::Route) -> Element {
    let click_back = move |_| {
        navigator().push(route.clone());
    };

    rsx! {
        div { class: "h-full content-center",
            button {
                class: "btn btn-outline btn-primary btn-lg",
                onclick: click_back,
                DrawSvg::<ArrowLeft> { size: Custom("h-full") }
                "Back"
            }
        }
    }
}
