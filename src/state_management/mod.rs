mod config;
mod helpers;
mod wallet_store;
mod wallets;

pub fn use_init_services() {
    log::debug!("init_services - start");
    let _ = wallets::use_wallet_service();
    log::debug!("init_services - finished");
}

pub use config::Network;

pub mod prelude {
    pub use super::config::Network;
    pub use super::wallet_store::{CreateWalletRequest, WalletKind};

    pub mod state_management {
        pub use super::super::config::APPLICATION_CONFIG;
        pub use super::super::helpers::*;
        pub use super::super::wallets::WALLET_NAMES;
    }
}
