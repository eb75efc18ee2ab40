//! Wallet creation / restoration form.
//!
//! The form owns no state: every value and flag comes from the parent
//! controller through [`CreateWalletFormProps`], and every user action is
//! turned into a [`FormInteraction`] handed back to the matching callback.

use crate::prelude::*;

use crate::{
    components::{
        inputs::{TextInput, ToggleSwitch},
        misc::Tooltip,
        svg::{DrawSvg, Restore, SvgSize::Size10, WalletPlus},
    },
    messages::{self, Message},
    utils::CCStr,
};

/// One user action on the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormInteraction {
    CreateWallet,
    HideForm,
    ChangeName(String),
    ChangePubKey(String),
    ToggleWatchOnly,
    ToggleTrezor,
    TogglePrivacy,
    ShowTrezorConfig,
}

/// The callbacks of [`CreateWalletFormProps`], grouped so they can be copied
/// into event closures
#[derive(Clone, Copy, PartialEq)]
pub struct FormCallbacks {
    pub create_wallet: EventHandler<()>,
    pub hide_create_wallet_form: EventHandler<()>,
    pub on_change_create_wallet_name: EventHandler<String>,
    pub on_change_create_wallet_master_pub_key: EventHandler<String>,
    pub toggle_watch_only: EventHandler<()>,
    pub toggle_trezor: EventHandler<()>,
    pub toggle_is_privacy: EventHandler<()>,
    pub on_show_trezor_config: EventHandler<()>,
}
impl FormCallbacks {
    /// Calls exactly one callback: the one owning `interaction`
    pub fn dispatch(&self, interaction: FormInteraction) {
        log::debug!("CreateWalletForm - {interaction:?}");
        match interaction {
            FormInteraction::CreateWallet => self.create_wallet.call(()),
            FormInteraction::HideForm => self.hide_create_wallet_form.call(()),
            FormInteraction::ChangeName(name) => self.on_change_create_wallet_name.call(name),
            FormInteraction::ChangePubKey(key) => {
                self.on_change_create_wallet_master_pub_key.call(key)
            }
            FormInteraction::ToggleWatchOnly => self.toggle_watch_only.call(()),
            FormInteraction::ToggleTrezor => self.toggle_trezor.call(()),
            FormInteraction::TogglePrivacy => self.toggle_is_privacy.call(()),
            FormInteraction::ShowTrezorConfig => self.on_show_trezor_config.call(()),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CreateWalletFormProps {
    pub is_create_new_wallet: bool,
    pub new_wallet_name: String,
    #[props(default)]
    pub wallet_name_error: bool,
    #[props(default)]
    pub has_failed_attempt_name: bool,
    #[props(default)]
    pub is_watching_only: bool,
    #[props(default)]
    pub wallet_master_pub_key: String,
    #[props(default)]
    pub master_pub_key_error: bool,
    #[props(default)]
    pub has_failed_attempt_pub_key: bool,
    #[props(default)]
    pub is_trezor: bool,
    #[props(default)]
    pub is_privacy: bool,
    #[props(default)]
    pub creating_wallet: bool,

    pub create_wallet: EventHandler<()>,
    pub hide_create_wallet_form: EventHandler<()>,
    pub on_change_create_wallet_name: EventHandler<String>,
    pub on_change_create_wallet_master_pub_key: EventHandler<String>,
    pub toggle_watch_only: EventHandler<()>,
    pub toggle_trezor: EventHandler<()>,
    pub toggle_is_privacy: EventHandler<()>,
    pub on_show_trezor_config: EventHandler<()>,
}
impl CreateWalletFormProps {
    pub fn callbacks(&self) -> FormCallbacks {
        FormCallbacks {
            create_wallet: self.create_wallet,
            hide_create_wallet_form: self.hide_create_wallet_form,
            on_change_create_wallet_name: self.on_change_create_wallet_name,
            on_change_create_wallet_master_pub_key: self.on_change_create_wallet_master_pub_key,
            toggle_watch_only: self.toggle_watch_only,
            toggle_trezor: self.toggle_trezor,
            toggle_is_privacy: self.toggle_is_privacy,
            on_show_trezor_config: self.on_show_trezor_config,
        }
    }

    fn is_restore_wallet(&self) -> bool {
        !self.is_create_new_wallet
    }
}

pub fn submit_label(creating_wallet: bool) -> Message {
    if creating_wallet {
        messages::CREATING_BUTTON
    } else {
        messages::CREATE_BUTTON
    }
}

/// A toggle row of the advanced options, rebuilt at every render
#[derive(Clone, PartialEq)]
pub struct OptionDescriptor {
    pub label: CCStr,
    pub description: Option<CCStr>,
    pub is_enabled: bool,
    /// What a click on the toggle produces
    pub on_click: FormInteraction,
    pub enabled_text: CCStr,
    pub disabled_text: CCStr,
    pub extra: Option<Element>,
}

/// Watch-only, Trezor and privacy rows, in that order
pub fn advanced_options(props: &CreateWalletFormProps) -> Vec<OptionDescriptor> {
    let callbacks = props.callbacks();
    vec![
        OptionDescriptor {
            label: messages::WATCH_ONLY_LABEL.text().into(),
            description: Some(messages::WATCH_ONLY_TOOLTIP.text().into()),
            is_enabled: props.is_watching_only,
            on_click: FormInteraction::ToggleWatchOnly,
            enabled_text: messages::WATCH_ONLY_ENABLED.text().into(),
            disabled_text: messages::WATCH_ONLY_DISABLED.text().into(),
            extra: None,
        },
        OptionDescriptor {
            label: messages::TREZOR_LABEL.text().into(),
            description: Some(messages::TREZOR_TOOLTIP.text().into()),
            is_enabled: props.is_trezor,
            on_click: FormInteraction::ToggleTrezor,
            enabled_text: messages::TREZOR_ENABLED.text().into(),
            disabled_text: messages::TREZOR_DISABLED.text().into(),
            extra: Some(rsx! {
                span {
                    class: "link link-primary setup-device-link",
                    onclick: move |evt| {
                        // The link sits next to the toggle, never let it reach it
                        evt.stop_propagation();
                        callbacks.dispatch(FormInteraction::ShowTrezorConfig);
                    },
                    {messages::TREZOR_SETUP_LINK.text()}
                }
            }),
        },
        OptionDescriptor {
            label: messages::PRIVACY_LABEL.text().into(),
            description: None,
            is_enabled: props.is_privacy,
            on_click: FormInteraction::TogglePrivacy,
            enabled_text: messages::PRIVACY_LABEL.text().into(),
            disabled_text: messages::WATCH_ONLY_DISABLED.text().into(),
            extra: None,
        },
    ]
}

#[allow(non_snake_case)]
pub fn CreateWalletForm(props: CreateWalletFormProps) -> Element {
    log::debug!("CreateWalletForm Rendered");

    let callbacks = props.callbacks();
    let is_restore_wallet = props.is_restore_wallet();
    let title = if props.is_create_new_wallet {
        messages::NEW_SEED_TAB
    } else {
        messages::RESTORE_TAB
    };
    let submit = submit_label(props.creating_wallet);

    rsx! {
        div { class: "flex flex-col gap-2 max-w-2xl",
            div { class: "new-wallet-title-area flex items-center gap-4 mb-4",
                div {
                    class: "wallet-icon-small",
                    class: if props.is_create_new_wallet { "createnew" } else { "restore" },
                    if props.is_create_new_wallet {
                        DrawSvg::<WalletPlus> { size: Size10 }
                    } else {
                        DrawSvg::<Restore> { size: Size10 }
                    }
                }
                h2 {
                    class: "new-wallet-title text-3xl font-bold",
                    "data-message-id": title.id,
                    {title.text()}
                }
            }
            div { class: "form-row",
                div { class: "form-label",
                    if is_restore_wallet {
                        Tooltip { text: CCStr::from(messages::NAME_TOOLTIP.text()),
                            {messages::WALLET_NAME_LABEL.text()}
                        }
                    } else {
                        {messages::WALLET_NAME_LABEL.text()}
                    }
                }
                div { class: "form-input",
                    TextInput {
                        required: true,
                        invalid: props.wallet_name_error,
                        invalid_message: CCStr::from(messages::DUPE_NAME_ERROR.text()),
                        value: props.new_wallet_name.clone(),
                        on_change: move |name: String| callbacks.dispatch(FormInteraction::ChangeName(name)),
                        placeholder: CCStr::from(messages::NAME_PLACEHOLDER.text()),
                        show_errors: props.has_failed_attempt_name,
                    }
                }
            }
            if is_restore_wallet {
                AdvancedOptions {
                    options: advanced_options(&props),
                    callbacks,
                    is_watching_only: props.is_watching_only,
                    failed_attempt_pub_key: props.has_failed_attempt_pub_key,
                    pub_key: props.wallet_master_pub_key.clone(),
                    pub_key_error: props.master_pub_key_error,
                    invalid_pub_key_message: CCStr::from(messages::MASTER_PUB_KEY_ERROR.text()),
                    pub_key_placeholder: CCStr::from(messages::MASTER_PUB_KEY_PLACEHOLDER.text()),
                }
            }
            div { class: "form-row flex gap-4 mt-4",
                button {
                    class: "btn btn-primary",
                    "data-message-id": submit.id,
                    onclick: move |_| callbacks.dispatch(FormInteraction::CreateWallet),
                    {submit.text()}
                }
                button {
                    class: "btn btn-ghost",
                    "data-message-id": messages::CANCEL_BUTTON.id,
                    onclick: move |_| callbacks.dispatch(FormInteraction::HideForm),
                    {messages::CANCEL_BUTTON.text()}
                }
            }
        }
    }
}

#[component]
pub fn AdvancedOptions(
    options: Vec<OptionDescriptor>,
    callbacks: FormCallbacks,
    is_watching_only: bool,
    pub_key: String,
    failed_attempt_pub_key: bool,
    pub_key_error: bool,
    pub_key_placeholder: CCStr,
    invalid_pub_key_message: CCStr,
) -> Element {
    rsx! {
        div { class: "form-row",
            div { class: "advanced-options-label font-semibold",
                {messages::ADVANCED_OPTIONS.text()}
                ":"
            }
        }
        for (index , option) in options.into_iter().enumerate() {
            OptionRow { key: "{index}", option, callbacks }
        }
        if is_watching_only {
            div { class: "form-row master-pub-key-row",
                div { class: "form-label", {messages::MASTER_PUB_KEY_LABEL.text()} }
                div { class: "form-long-input",
                    TextInput {
                        required: true,
                        value: pub_key,
                        on_change: move |key: String| callbacks.dispatch(FormInteraction::ChangePubKey(key)),
                        placeholder: pub_key_placeholder,
                        show_errors: failed_attempt_pub_key || pub_key_error,
                        invalid: pub_key_error,
                        invalid_message: invalid_pub_key_message,
                    }
                }
            }
        }
    }
}

#[component]
fn OptionRow(option: OptionDescriptor, callbacks: FormCallbacks) -> Element {
    let OptionDescriptor {
        label,
        description,
        is_enabled,
        on_click,
        enabled_text,
        disabled_text,
        extra,
    } = option;

    rsx! {
        div { class: "form-row toggle-row",
            div { class: "form-label",
                if let Some(description) = description {
                    Tooltip { text: description, "{label}" }
                } else {
                    "{label}"
                }
            }
            div { class: "form-input",
                div { class: "wallet-switch flex items-center gap-2",
                    ToggleSwitch {
                        enabled: is_enabled,
                        on_click: move |_: ()| callbacks.dispatch(on_click.clone()),
                        enabled_text,
                        not_enabled_text: disabled_text,
                    }
                    {extra}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{any::Any, cell::RefCell, collections::HashMap, rc::Rc};

    use dioxus::{
        dioxus_core::{ElementId, Event, Mutation},
        html::{
            set_event_converter, PlatformEventData, SerializedFormData,
            SerializedHtmlEventConverter, SerializedMouseData,
        },
    };

    type Recorder = Rc<RefCell<Vec<String>>>;

    #[derive(Clone)]
    struct Harness {
        log: Recorder,
        tweak: fn(&mut CreateWalletFormProps),
        run: fn(CreateWalletFormProps) -> Element,
    }

    fn recording(log: &Recorder, name: &'static str) -> EventHandler<()> {
        let log = log.clone();
        EventHandler::new(move |_: ()| log.borrow_mut().push(name.to_owned()))
    }
    fn recording_text(log: &Recorder, name: &'static str) -> EventHandler<String> {
        let log = log.clone();
        EventHandler::new(move |value: String| log.borrow_mut().push(format!("{name}:{value}")))
    }

    /// Restore mode, everything off
    fn base_props(log: &Recorder) -> CreateWalletFormProps {
        CreateWalletFormProps {
            is_create_new_wallet: false,
            new_wallet_name: String::new(),
            wallet_name_error: false,
            has_failed_attempt_name: false,
            is_watching_only: false,
            wallet_master_pub_key: String::new(),
            master_pub_key_error: false,
            has_failed_attempt_pub_key: false,
            is_trezor: false,
            is_privacy: false,
            creating_wallet: false,
            create_wallet: recording(log, "create_wallet"),
            hide_create_wallet_form: recording(log, "hide_create_wallet_form"),
            on_change_create_wallet_name: recording_text(log, "change_name"),
            on_change_create_wallet_master_pub_key: recording_text(log, "change_pub_key"),
            toggle_watch_only: recording(log, "toggle_watch_only"),
            toggle_trezor: recording(log, "toggle_trezor"),
            toggle_is_privacy: recording(log, "toggle_is_privacy"),
            on_show_trezor_config: recording(log, "on_show_trezor_config"),
        }
    }

    fn harness(Harness { log, tweak, run }: Harness) -> Element {
        let mut props = base_props(&log);
        tweak(&mut props);
        run(props)
    }

    fn run_harness(
        tweak: fn(&mut CreateWalletFormProps),
        run: fn(CreateWalletFormProps) -> Element,
    ) -> (String, Vec<String>) {
        let log = Recorder::default();
        let mut dom = VirtualDom::new_with_props(
            harness,
            Harness {
                log: log.clone(),
                tweak,
                run,
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        let calls = log.borrow().clone();
        (html, calls)
    }

    fn render(tweak: fn(&mut CreateWalletFormProps)) -> String {
        run_harness(tweak, CreateWalletForm).0
    }

    fn dispatched(interaction: fn() -> FormInteraction) -> Vec<String> {
        thread_local! {
            static INTERACTION: RefCell<Option<FormInteraction>> = const { RefCell::new(None) };
        }
        INTERACTION.with(|i| *i.borrow_mut() = Some(interaction()));
        run_harness(
            |_| (),
            |props| {
                if let Some(interaction) = INTERACTION.with(|i| i.borrow_mut().take()) {
                    props.callbacks().dispatch(interaction);
                }
                rsx! {}
            },
        )
        .1
    }

    /// A mounted form whose listeners can be fired like the renderer would
    struct Mounted {
        dom: VirtualDom,
        log: Recorder,
        listeners: Vec<(String, ElementId)>,
    }
    impl Mounted {
        fn new(tweak: fn(&mut CreateWalletFormProps)) -> Self {
            set_event_converter(Box::new(SerializedHtmlEventConverter));
            let log = Recorder::default();
            let mut dom = VirtualDom::new_with_props(
                harness,
                Harness {
                    log: log.clone(),
                    tweak,
                    run: CreateWalletForm,
                },
            );
            let listeners = dom
                .rebuild_to_vec()
                .edits
                .into_iter()
                .filter_map(|edit| match edit {
                    Mutation::NewEventListener { name, id } => Some((name, id)),
                    _ => None,
                })
                .collect();
            Self {
                dom,
                log,
                listeners,
            }
        }

        fn listeners(&self, name: &str) -> Vec<ElementId> {
            self.listeners
                .iter()
                .filter(|(n, _)| n == name)
                .map(|(_, id)| *id)
                .collect()
        }

        fn fire(&self, name: &str, data: Box<dyn Any>, id: ElementId) -> Vec<String> {
            self.log.borrow_mut().clear();
            let data: Rc<dyn Any> = Rc::new(PlatformEventData::new(data));
            self.dom
                .runtime()
                .handle_event(name, Event::new(data, true), id);
            self.log.borrow().clone()
        }

        /// Calls recorded by each click listener, one entry per listener
        fn click_all(&self) -> Vec<Vec<String>> {
            self.listeners("click")
                .into_iter()
                .map(|id| self.fire("click", Box::new(SerializedMouseData::default()), id))
                .collect()
        }

        fn type_in_all(&self, text: &str) -> Vec<Vec<String>> {
            self.listeners("input")
                .into_iter()
                .map(|id| {
                    let data = SerializedFormData::new(text.to_owned(), HashMap::new());
                    self.fire("input", Box::new(data), id)
                })
                .collect()
        }
    }

    fn sorted(mut calls: Vec<Vec<String>>) -> Vec<Vec<String>> {
        calls.sort();
        calls
    }

    #[test]
    fn create_mode_hides_advanced_options() {
        let html = render(|p| {
            p.is_create_new_wallet = true;
            p.is_watching_only = true;
        });
        assert!(html.contains(messages::NEW_SEED_TAB.text()));
        assert!(!html.contains(messages::ADVANCED_OPTIONS.text()));
        assert!(!html.contains("toggle-row"));
        assert!(!html.contains(messages::MASTER_PUB_KEY_LABEL.text()));
        assert!(!html.contains(messages::NAME_TOOLTIP.text()));
    }

    #[test]
    fn restore_mode_shows_three_rows_in_order() {
        let html = render(|_| ());
        assert!(html.contains(messages::RESTORE_TAB.text()));
        assert!(html.contains(messages::NAME_TOOLTIP.text()));
        assert_eq!(html.matches("toggle-row").count(), 3);

        let watch_only = html.find(messages::WATCH_ONLY_LABEL.text()).unwrap();
        let trezor = html.find(messages::TREZOR_LABEL.text()).unwrap();
        let privacy = html.find(messages::PRIVACY_LABEL.text()).unwrap();
        assert!(watch_only < trezor && trezor < privacy);
        assert!(html.contains(messages::TREZOR_SETUP_LINK.text()));
    }

    #[test]
    fn pub_key_field_follows_watch_only() {
        let html = render(|p| p.is_watching_only = false);
        assert!(!html.contains("master-pub-key-row"));

        let html = render(|p| {
            p.is_watching_only = true;
            p.wallet_master_pub_key = "tpubDC5FSnBiZDMmhiuCmWAYsLwgLYrrT9rAqvTySfuCCrgsWz8wxMXUS9Tb9iVMvcRbvFcAHGkMD5Kx8koh4GquNGNTfohfk7pgjhaPCdXpoba".to_owned();
        });
        assert!(html.contains("master-pub-key-row"));
        assert!(html.contains(messages::MASTER_PUB_KEY_LABEL.text()));
        assert!(html.contains("tpubDC5FSnBiZDMm"));
        // No error until the parent flags one
        assert!(!html.contains(messages::MASTER_PUB_KEY_ERROR.text()));
    }

    #[test]
    fn pub_key_error_is_displayed_when_flagged() {
        let html = render(|p| {
            p.is_watching_only = true;
            p.master_pub_key_error = true;
        });
        assert!(html.contains(messages::MASTER_PUB_KEY_ERROR.text()));
        assert!(html.contains("input-error"));
    }

    #[test]
    fn name_error_needs_a_failed_attempt() {
        let html = render(|p| p.wallet_name_error = true);
        assert!(!html.contains(messages::DUPE_NAME_ERROR.text()));

        let html = render(|p| {
            p.wallet_name_error = true;
            p.has_failed_attempt_name = true;
        });
        assert!(html.contains(messages::DUPE_NAME_ERROR.text()));
    }

    #[test]
    fn submit_label_follows_creating_flag() {
        let html = render(|p| p.creating_wallet = true);
        assert!(html.contains("Creating"));
        assert!(!html.contains("Continue"));

        assert!(html.contains(r#"data-message-id="wallet.creating.button""#));

        let html = render(|p| p.creating_wallet = false);
        assert!(html.contains("Continue"));
        assert!(html.contains(r#"data-message-id="wallet.create.button""#));
        assert!(!html.contains("Creating"));
        assert!(html.contains(messages::CANCEL_BUTTON.text()));
    }

    #[test]
    fn typing_a_name_only_forwards_the_value() {
        let form = Mounted::new(|p| p.is_create_new_wallet = true);
        assert_eq!(form.type_in_all("Cold storage"), vec![vec!["change_name:Cold storage"]]);
    }

    #[test]
    fn typing_a_pub_key_only_forwards_the_value() {
        let form = Mounted::new(|p| p.is_watching_only = true);
        assert_eq!(
            sorted(form.type_in_all("tpubD6NzVbkrYhZ4")),
            vec![
                vec!["change_name:tpubD6NzVbkrYhZ4"],
                vec!["change_pub_key:tpubD6NzVbkrYhZ4"],
            ]
        );
    }

    #[test]
    fn setup_link_does_not_toggle_trezor() {
        let form = Mounted::new(|_| ());
        let clicks = form.click_all();
        // Three toggles, the setup link, submit and cancel
        assert_eq!(clicks.len(), 6);
        assert!(clicks.contains(&vec!["on_show_trezor_config".to_owned()]));
        assert_eq!(
            clicks
                .iter()
                .filter(|calls| calls.iter().any(|c| c == "toggle_trezor"))
                .count(),
            1
        );
    }

    #[test]
    fn every_rendered_control_reaches_one_callback() {
        let form = Mounted::new(|_| ());
        assert_eq!(
            sorted(form.click_all()),
            vec![
                vec!["create_wallet"],
                vec!["hide_create_wallet_form"],
                vec!["on_show_trezor_config"],
                vec!["toggle_is_privacy"],
                vec!["toggle_trezor"],
                vec!["toggle_watch_only"],
            ]
        );

        let form = Mounted::new(|p| p.is_create_new_wallet = true);
        assert_eq!(
            sorted(form.click_all()),
            vec![vec!["create_wallet"], vec!["hide_create_wallet_form"]]
        );
    }

    #[test]
    fn each_interaction_reaches_one_callback() {
        let cases: [(fn() -> FormInteraction, &str); 6] = [
            (|| FormInteraction::CreateWallet, "create_wallet"),
            (|| FormInteraction::HideForm, "hide_create_wallet_form"),
            (|| FormInteraction::ToggleWatchOnly, "toggle_watch_only"),
            (|| FormInteraction::ToggleTrezor, "toggle_trezor"),
            (|| FormInteraction::TogglePrivacy, "toggle_is_privacy"),
            (|| FormInteraction::ShowTrezorConfig, "on_show_trezor_config"),
        ];
        for (interaction, expected) in cases {
            assert_eq!(dispatched(interaction), vec![expected]);
        }
    }

    #[test]
    fn option_rows_are_wired_to_their_toggles() {
        run_harness(
            |p| {
                p.is_trezor = true;
                p.is_privacy = true;
            },
            |props| {
                let options = advanced_options(&props);
                assert_eq!(options.len(), 3);
                assert_eq!(
                    options.iter().map(|o| o.is_enabled).collect::<Vec<_>>(),
                    vec![false, true, true]
                );
                assert!(options[0].description.is_some());
                assert!(options[1].extra.is_some());
                assert!(options[2].description.is_none());
                assert_eq!(
                    options.into_iter().map(|o| o.on_click).collect::<Vec<_>>(),
                    vec![
                        FormInteraction::ToggleWatchOnly,
                        FormInteraction::ToggleTrezor,
                        FormInteraction::TogglePrivacy,
                    ]
                );
                rsx! {}
            },
        );
    }
}
