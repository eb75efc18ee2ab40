use dioxus::prelude::*;

use tokio::sync::oneshot;

use crate::utils::log_error;

use super::{
    wallet_store::{CreateWalletRequest, WalletRecord},
    wallets::WalletCommand,
};

pub fn use_wallet_service() -> Coroutine<WalletCommand> {
    use_coroutine_handle()
}

pub fn refresh_wallet_names(wallet_service: Coroutine<WalletCommand>) {
    log::debug!("refresh_wallet_names");
    wallet_service.send(WalletCommand::Refresh);
}

pub async fn create_wallet(
    wallet_service: Coroutine<WalletCommand>,
    request: CreateWalletRequest,
) -> Result<WalletRecord, String> {
    log::debug!("create_wallet - start");
    let (result, rx) = oneshot::channel();
    wallet_service.send(WalletCommand::Create { request, result });
    let result = match rx.await {
        Ok(r) => r.map_err(log_error),
        Err(e) => Err(log_error(format!("wallet_service error: {e}"))),
    };
    log::debug!("create_wallet - finished");
    result
}
