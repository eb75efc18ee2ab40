use crate::prelude::*;

use crate::{
    components::svg::{DrawSvg, Restore, SvgSize::Size8, Wallet, WalletPlus},
    messages,
    utils::CCStr,
    views::pre_create_wallet::WalletFormMode,
    Route,
};

#[component]
pub fn GetStartedView() -> Element {
    log::debug!("GetStartedView Rendered");

    use_drop(|| log::debug!("GetStartedView Dropped"));

    rsx! {
        super::TitledView {
            title: CCStr::from("Wallets"),
            subtitle: CCStr::from("Open an existing wallet, create a new one or restore one from a backup."),
            div { class: "container mx-auto flex flex-col gap-8",
                div { class: "flex flex-wrap gap-6 justify-center",
                    FormLinkCard { mode: WalletFormMode::Create }
                    FormLinkCard { mode: WalletFormMode::Restore }
                }
                WalletList {}
            }
        }
    }
}

#[component]
fn FormLinkCard(mode: WalletFormMode) -> Element {
    let label = match mode {
        WalletFormMode::Create => messages::NEW_SEED_TAB,
        WalletFormMode::Restore => messages::RESTORE_TAB,
    };
    rsx! {
        div {
            class: "card card-lg w-xs border-2 border-dashed border-base-300 shadow-xl cursor-pointer \
            transition-transform hover:scale-105 hover:border-primary",
            onclick: move |_| {
                navigator().push(Route::PreCreateWalletView { mode });
            },
            div { class: "card-body items-center justify-center",
                div { class: "btn btn-circle btn-primary btn-lg",
                    if mode == WalletFormMode::Create {
                        DrawSvg::<WalletPlus> { size: Size8 }
                    } else {
                        DrawSvg::<Restore> { size: Size8 }
                    }
                }
                div { class: "text-lg font-bold mt-4", {label.text()} }
            }
        }
    }
}

#[component]
fn WalletList() -> Element {
    log::debug!("WalletList Rendered");

    let wallet_service = state_management::use_wallet_service();
    use_hook(move || state_management::refresh_wallet_names(wallet_service));

    let network = state_management::APPLICATION_CONFIG.read().network;

    rsx! {
        div { class: "flex flex-col gap-2",
            h3 { class: "text-xl font-semibold", "Existing wallets ({network})" }
            {match &*state_management::WALLET_NAMES.read() {
                None => rsx! {
                    span { class: "loading loading-spinner loading-md" }
                },
                Some(names) if names.is_empty() => rsx! {
                    div { class: "text-base-content/60", "No wallet yet." }
                },
                Some(names) => rsx! {
                    ul { class: "list bg-base-100 rounded-box shadow-md",
                        for name in names.iter() {
                            li { key: "{name}", class: "list-row items-center",
                                DrawSvg::<Wallet> {}
                                span { class: "font-bold", "{name}" }
                            }
                        }
                    }
                },
            }}
        }
    }
}
