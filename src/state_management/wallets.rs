use dioxus::prelude::*;

use futures_util::stream::StreamExt;
use tokio::sync::oneshot;

use crate::utils::CCStr;

use super::{
    config::{create_config, APPLICATION_CONFIG},
    wallet_store::{CreateWalletRequest, WalletRecord, WalletStore, WalletStoreError},
};

/// Names of the wallets present in the store, `None` until the first listing
pub static WALLET_NAMES: GlobalSignal<Option<Vec<CCStr>>> = Signal::global(|| None);

pub enum WalletCommand {
    /// Re-read the store, picking up wallets added outside the app
    Refresh,
    Create {
        request: CreateWalletRequest,
        result: oneshot::Sender<Result<WalletRecord, WalletStoreError>>,
    },
}
impl core::fmt::Debug for WalletCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Refresh => f.write_str("Refresh"),
            Self::Create { request, .. } => f
                .debug_struct("Create")
                .field("request", request)
                .finish_non_exhaustive(),
        }
    }
}

pub(super) fn use_wallet_service() -> Coroutine<WalletCommand> {
    use_coroutine(move |mut rx: UnboundedReceiver<WalletCommand>| async move {
        log::info!("wallet_service (coroutine) - start");

        let current_config = create_config();
        let store = WalletStore::new(&current_config);
        *APPLICATION_CONFIG.write() = current_config;

        refresh_wallet_names(&store).await;

        while let Some(cmd) = rx.next().await {
            log::debug!("wallet_service (coroutine) - Processing command {cmd:?}...");
            match cmd {
                WalletCommand::Refresh => refresh_wallet_names(&store).await,
                WalletCommand::Create { request, result } => {
                    let s = store.clone();
                    let created = blocking(move || s.create(request)).await;
                    if created.is_ok() {
                        refresh_wallet_names(&store).await;
                    }
                    if result.send(created).is_err() {
                        log::warn!("wallet_service (coroutine) - Create requester is gone");
                    }
                }
            }
            log::debug!("wallet_service (coroutine) - Command processed");
        }
    })
}

async fn refresh_wallet_names(store: &WalletStore) {
    let store = store.clone();
    match blocking(move || store.list_names()).await {
        Ok(names) => {
            *WALLET_NAMES.write() = Some(names.into_iter().map(CCStr::from).collect());
        }
        Err(e) => {
            log::error!("Could not list wallets: {e}");
            *WALLET_NAMES.write() = Some(vec![]);
        }
    }
}

async fn blocking<T: Send + 'static>(
    f: impl FnOnce() -> Result<T, WalletStoreError> + Send + 'static,
) -> Result<T, WalletStoreError> {
    tokio::task::spawn_blocking(f)
        .await
        .unwrap_or_else(|join_error| {
            Err(WalletStoreError::Io {
                path: Default::default(),
                source: std::io::Error::other(join_error),
            })
        })
}
