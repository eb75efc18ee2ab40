use crate::prelude::*;

use crate::utils::CCStr;

/// Text field whose error line is only revealed once the parent decides
/// errors should be shown (`show_errors`) and the value is flagged `invalid`.
#[component]
pub fn TextInput(
    value: String,
    placeholder: Option<CCStr>,
    #[props(default = false)] required: bool,
    #[props(default = false)] invalid: bool,
    invalid_message: Option<CCStr>,
    #[props(default = false)] show_errors: bool,
    on_change: EventHandler<String>,
) -> Element {
    let error_display = (show_errors && invalid).then(|| invalid_message.unwrap_or_default());

    rsx! {
        fieldset { class: "fieldset w-full",
            input {
                r#type: "text",
                class: "input w-full",
                class: if error_display.is_some() { "input-error" },
                required,
                placeholder: placeholder.as_deref().unwrap_or_default(),
                value: "{value}",
                oninput: move |evt| on_change.call(evt.value()),
            }
            div {
                class: "fieldset-label text-error",
                class: if error_display.is_none() { "invisible" },
                if let Some(e) = error_display.as_ref() {
                    "{e}"
                } else {
                    "ph"
                }
            }
        }
    }
}

#[component]
pub fn ToggleSwitch(
    enabled: bool,
    on_click: EventHandler<()>,
    enabled_text: CCStr,
    not_enabled_text: CCStr,
) -> Element {
    rsx! {
        label { class: "label cursor-pointer gap-2",
            input {
                r#type: "checkbox",
                class: "toggle toggle-primary",
                checked: enabled,
                onclick: move |_| on_click.call(()),
            }
            span { class: "toggle-text",
                if enabled {
                    "{enabled_text}"
                } else {
                    "{not_enabled_text}"
                }
            }
        }
    }
}
