use crate::prelude::*;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    components::{
        create_wallet_form::CreateWalletForm,
        misc::BackButton,
        modal::InfoModal,
        svg::{DrawSvg, OpenInNew},
    },
    utils::{log_error, CCStr},
    validation::{validate_master_pub_key, validate_wallet_name},
    Route,
};

const TREZOR_SETUP_URL: &str = "https://trezor.io/start";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WalletFormMode {
    Create,
    Restore,
}
impl core::fmt::Display for WalletFormMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            WalletFormMode::Create => "create",
            WalletFormMode::Restore => "restore",
        })
    }
}
impl core::str::FromStr for WalletFormMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(WalletFormMode::Create),
            "restore" => Ok(WalletFormMode::Restore),
            other => Err(format!("unknown wallet form mode: {other}")),
        }
    }
}

/// Everything the creation form displays, owned by [`PreCreateWallet`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreCreateWalletState {
    pub mode: WalletFormMode,
    pub name: String,
    pub master_pub_key: String,
    pub is_watching_only: bool,
    pub is_trezor: bool,
    pub is_privacy: bool,
    pub has_failed_attempt_name: bool,
    pub has_failed_attempt_pub_key: bool,
}
impl PreCreateWalletState {
    pub fn new(mode: WalletFormMode) -> Self {
        Self {
            mode,
            name: String::new(),
            master_pub_key: String::new(),
            is_watching_only: false,
            is_trezor: false,
            is_privacy: false,
            has_failed_attempt_name: false,
            has_failed_attempt_pub_key: false,
        }
    }

    fn is_restore(&self) -> bool {
        self.mode == WalletFormMode::Restore
    }

    // A watch-only wallet has no signer, so it cannot be device backed either
    pub fn toggle_watch_only(&mut self) {
        self.is_watching_only = !self.is_watching_only;
        if self.is_watching_only {
            self.is_trezor = false;
        }
    }
    pub fn toggle_trezor(&mut self) {
        self.is_trezor = !self.is_trezor;
        if self.is_trezor {
            self.is_watching_only = false;
        }
    }
    pub fn toggle_privacy(&mut self) {
        self.is_privacy = !self.is_privacy;
    }

    /// An empty name is not flagged: the user has not typed anything yet
    pub fn wallet_name_error(&self, existing: &HashSet<String>) -> bool {
        !self.name.trim().is_empty() && validate_wallet_name(&self.name, existing).is_err()
    }

    pub fn master_pub_key_error(&self, network: Network) -> bool {
        self.is_watching_only
            && !self.master_pub_key.trim().is_empty()
            && validate_master_pub_key(&self.master_pub_key, network).is_err()
    }

    /// Marks the failed fields and returns `None` when the form cannot be submitted yet
    pub fn submit(
        &mut self,
        existing: &HashSet<String>,
        network: Network,
    ) -> Option<CreateWalletRequest> {
        let name_ok = validate_wallet_name(&self.name, existing).is_ok();
        self.has_failed_attempt_name = !name_ok;

        let watch_only = self.is_restore() && self.is_watching_only;
        let pub_key_ok = !watch_only || validate_master_pub_key(&self.master_pub_key, network).is_ok();
        self.has_failed_attempt_pub_key = !pub_key_ok;

        if !(name_ok && pub_key_ok) {
            return None;
        }

        let kind = if watch_only {
            WalletKind::WatchOnly {
                master_pub_key: self.master_pub_key.trim().to_owned(),
            }
        } else if self.is_restore() && self.is_trezor {
            WalletKind::Trezor
        } else {
            WalletKind::Standard
        };
        Some(CreateWalletRequest {
            name: self.name.trim().to_owned(),
            kind,
            privacy: self.is_restore() && self.is_privacy,
            restored: self.is_restore(),
        })
    }
}

#[component]
pub fn PreCreateWalletView(mode: WalletFormMode) -> Element {
    log::debug!("PreCreateWalletView Rendered");

    use_drop(|| log::debug!("PreCreateWalletView Dropped"));

    let subtitle = match mode {
        WalletFormMode::Create => "Set up a brand new wallet.",
        WalletFormMode::Restore => "Bring back a wallet you already own.",
    };

    rsx! {
        super::TitledView {
            title: CCStr::from("Wallet Setup"),
            subtitle: CCStr::from(subtitle),
            left: rsx! {
                BackButton { route: Route::GetStartedView {} }
            },
            div { class: "flex justify-center",
                PreCreateWallet { key: "{mode}", mode }
            }
        }
    }
}

#[component]
fn PreCreateWallet(mode: WalletFormMode) -> Element {
    log::debug!("PreCreateWallet Rendered");

    let wallet_service = state_management::use_wallet_service();

    let mut state = use_signal(|| PreCreateWalletState::new(mode));
    let mut creating_wallet = use_signal(|| false);
    let mut show_trezor_config = use_signal(|| false);

    let existing_names = use_memo(|| {
        state_management::WALLET_NAMES
            .read()
            .iter()
            .flatten()
            .map(|name| name.to_string())
            .collect::<HashSet<_>>()
    });
    let network = use_memo(|| state_management::APPLICATION_CONFIG.read().network);

    let wallet_name_error = use_memo(move || state.read().wallet_name_error(&existing_names.read()));
    let master_pub_key_error = use_memo(move || state.read().master_pub_key_error(network()));

    let create_wallet = move |_: ()| async move {
        if creating_wallet() {
            log::debug!("PreCreateWallet - creation already in progress");
            return;
        }
        let Some(request) = state.write().submit(&existing_names.read(), network()) else {
            log::info!("PreCreateWallet - form is not valid yet");
            return;
        };

        *creating_wallet.write() = true;
        let result = state_management::create_wallet(wallet_service, request).await;
        *creating_wallet.write() = false;

        match result {
            Ok(record) => {
                alert_success(format!("Wallet \"{}\" created", record.name));
                navigator().push(Route::GetStartedView {});
            }
            Err(e) => alert_error(format!("Fail to create the wallet: {e}")),
        }
    };

    let open_setup_page = move |_| {
        if let Err(e) = open::that(TREZOR_SETUP_URL) {
            alert_error(log_error(format!("Could not open {TREZOR_SETUP_URL}: {e}")));
        }
    };

    use_drop(|| log::debug!("PreCreateWallet Dropped"));

    let current = state.read();

    rsx! {
        CreateWalletForm {
            is_create_new_wallet: mode == WalletFormMode::Create,
            new_wallet_name: current.name.clone(),
            wallet_name_error: wallet_name_error(),
            has_failed_attempt_name: current.has_failed_attempt_name,
            is_watching_only: current.is_watching_only,
            wallet_master_pub_key: current.master_pub_key.clone(),
            master_pub_key_error: master_pub_key_error(),
            has_failed_attempt_pub_key: current.has_failed_attempt_pub_key,
            is_trezor: current.is_trezor,
            is_privacy: current.is_privacy,
            creating_wallet: creating_wallet(),
            create_wallet,
            hide_create_wallet_form: move |_: ()| {
                navigator().push(Route::GetStartedView {});
            },
            on_change_create_wallet_name: move |name: String| state.write().name = name,
            on_change_create_wallet_master_pub_key: move |key: String| state.write().master_pub_key = key,
            toggle_watch_only: move |_: ()| state.write().toggle_watch_only(),
            toggle_trezor: move |_: ()| state.write().toggle_trezor(),
            toggle_is_privacy: move |_: ()| state.write().toggle_privacy(),
            on_show_trezor_config: move |_: ()| *show_trezor_config.write() = true,
        }

        InfoModal { is_open: show_trezor_config, title: "Hardware Device Setup",
            div { class: "flex flex-col gap-4 text-base",
                p {
                    "Connect your Trezor and make sure it is initialized with the seed of the
                    wallet you want to restore. The device keeps the private keys: this
                    application only ever sees the public keys it exports."
                }
                ol { class: "list-decimal list-inside",
                    li { "Plug the device and unlock it with its PIN." }
                    li { "Install the latest firmware if the device asks for it." }
                    li { "Enable the Trezor option and press Continue." }
                }
                div { class: "flex justify-end",
                    button { class: "btn btn-primary", onclick: open_setup_page,
                        DrawSvg::<OpenInNew> {}
                        "Open the vendor setup page"
                    }
                }
            }
        }
    }
}
