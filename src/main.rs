#![windows_subsystem = "windows"]
mod components;
mod messages;
mod state_management;
mod utils;
mod validation;
mod views;

mod prelude {
    pub use super::components::alerts::{alert_error, alert_success};
    pub use super::state_management::prelude::*;
    pub use dioxus::prelude::*;
}

use serde::{Deserialize, Serialize};

use components::alerts::AlertsContainer;
use prelude::*;

use views::{
    get_started::GetStartedView,
    pre_create_wallet::{PreCreateWalletView, WalletFormMode},
};

#[derive(Clone, Routable, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    GetStartedView {},
    #[route("/wallet/:mode")]
    PreCreateWalletView { mode: WalletFormMode },
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

static TITLE: &'static str = "Wallet Launcher";

#[allow(non_snake_case)]
fn App() -> Element {
    log::debug!("App reload");

    crate::state_management::use_init_services();

    use_drop(|| log::debug!("App Dropped"));

    rsx! {
        document::Title { "{TITLE}" }
        document::Stylesheet { href: asset!("/assets/main.css") }

        div { id: "app", class: "text-base p-4",
            AlertsContainer {}
            Router::<Route> {}
        }
    }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        h1 { "Page not found" }
        p { "We are terribly sorry, but the page you requested doesn't exist." }
        pre { color: "red", "log:\nattemped to navigate to: {route:?}" }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    log::info!("starting app");
    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, WindowBuilder};
        LaunchBuilder::desktop()
            .with_cfg(
                Config::new().with_menu(None).with_window(
                    WindowBuilder::new()
                        .with_title(TITLE)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280, 900))
                        .with_resizable(true),
                ),
            )
            .launch(App)
    }
}
