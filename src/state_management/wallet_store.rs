use std::{
    collections::HashSet,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    utils::timestamp_now,
    validation::{validate_wallet_name, WalletNameError},
};

use super::config::{ApplicationConfig, Network};

const WALLET_FILE: &str = "wallet.json";

#[derive(Error, Debug)]
pub enum WalletStoreError {
    /// Filesystem access failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid wallet name: {0}")]
    InvalidName(WalletNameError),

    #[error("A wallet named \"{0}\" already exists")]
    AlreadyExists(String),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> WalletStoreError + '_ {
    move |source| WalletStoreError::Io {
        path: path.to_owned(),
        source,
    }
}

/// Writes `record` to a file that must not exist yet
fn write_record(path: &Path, record: &WalletRecord) -> Result<(), WalletStoreError> {
    let content = serde_json::to_string_pretty(record)?;
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                WalletStoreError::AlreadyExists(record.name.clone())
            } else {
                io_error(path)(e)
            }
        })?;
    file.write_all(content.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(io_error(path))
}

/// Undoes a failed creation so the name stays available
fn discard_wallet_dir(wallet_dir: &Path, path: &Path, error: &WalletStoreError) {
    if matches!(error, WalletStoreError::AlreadyExists(_)) {
        return;
    }
    log::warn!("Wallet creation in {} failed: {error}", wallet_dir.display());
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            log::warn!("Could not remove {}: {e}", path.display());
        }
    }
    // Only succeeds on an empty directory, anything else is left untouched
    if let Err(e) = fs::remove_dir(wallet_dir) {
        log::warn!("Could not remove {}: {e}", wallet_dir.display());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WalletKind {
    Standard,
    WatchOnly { master_pub_key: String },
    Trezor,
}

/// What the controller asks the store to create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWalletRequest {
    pub name: String,
    pub kind: WalletKind,
    pub privacy: bool,
    pub restored: bool,
}

/// What is written to disk for each wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRecord {
    pub name: String,
    pub network: Network,
    pub kind: WalletKind,
    pub privacy: bool,
    pub restored: bool,
    pub created_at: u64,
}

/// Wallets live in `<datadir>/<network>/wallets/<name>/wallet.json`
#[derive(Debug, Clone)]
pub struct WalletStore {
    root: PathBuf,
    network: Network,
}
impl WalletStore {
    pub fn new(config: &ApplicationConfig) -> Self {
        let mut root = config.datadir.clone();
        root.push(config.network.to_string());
        root.push("wallets");
        Self {
            root,
            network: config.network,
        }
    }

    pub fn list_names(&self) -> Result<Vec<String>, WalletStoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(io_error(&self.root)(e)),
        };
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(io_error(&self.root))?;
            if !entry.path().join(WALLET_FILE).is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(os_name) => log::warn!("Skipping non UTF-8 wallet directory {os_name:?}"),
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn create(&self, request: CreateWalletRequest) -> Result<WalletRecord, WalletStoreError> {
        let existing = self.list_names()?.into_iter().collect::<HashSet<_>>();
        let name = request.name.trim().to_owned();
        match validate_wallet_name(&name, &existing) {
            Ok(()) => (),
            Err(WalletNameError::Duplicate) => return Err(WalletStoreError::AlreadyExists(name)),
            Err(e) => return Err(WalletStoreError::InvalidName(e)),
        }

        let wallet_dir = self.root.join(&name);
        // An empty directory left by an interrupted creation is reused; the
        // record file itself is what claims the name
        fs::create_dir_all(&wallet_dir).map_err(io_error(&wallet_dir))?;

        let record = WalletRecord {
            name,
            network: self.network,
            kind: request.kind,
            privacy: request.privacy,
            restored: request.restored,
            created_at: timestamp_now(),
        };
        let path = wallet_dir.join(WALLET_FILE);
        if let Err(e) = write_record(&path, &record) {
            discard_wallet_dir(&wallet_dir, &path, &e);
            return Err(e);
        }
        log::info!("Wallet {} created in {}", record.name, wallet_dir.display());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> WalletStore {
        WalletStore::new(&ApplicationConfig {
            network: Network::Testnet,
            datadir: dir.path().to_owned(),
        })
    }

    fn request(name: &str, kind: WalletKind) -> CreateWalletRequest {
        CreateWalletRequest {
            name: name.to_owned(),
            kind,
            privacy: false,
            restored: true,
        }
    }

    #[test]
    fn empty_datadir_has_no_wallets() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(store(&dir).list_names().unwrap().is_empty());
    }

    #[test]
    fn create_then_list_and_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = store(&dir);

        store.create(request("zeta", WalletKind::Trezor)).unwrap();
        let record = store
            .create(CreateWalletRequest {
                privacy: true,
                ..request(
                    " alpha ",
                    WalletKind::WatchOnly {
                        master_pub_key: "tpubXYZ".to_owned(),
                    },
                )
            })
            .unwrap();
        assert_eq!(record.name, "alpha");
        assert_eq!(record.network, Network::Testnet);

        assert_eq!(store.list_names().unwrap(), vec!["alpha", "zeta"]);
        let on_disk = fs::read_to_string(dir.path().join("testnet/wallets/alpha/wallet.json")).unwrap();
        assert_eq!(serde_json::from_str::<WalletRecord>(&on_disk).unwrap(), record);
    }

    #[test]
    fn duplicate_and_invalid_names_are_refused() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = store(&dir);
        store.create(request("main", WalletKind::Standard)).unwrap();

        assert!(matches!(
            store.create(request("main", WalletKind::Standard)),
            Err(WalletStoreError::AlreadyExists(name)) if name == "main"
        ));
        assert!(matches!(
            store.create(request("../escape", WalletKind::Standard)),
            Err(WalletStoreError::InvalidName(WalletNameError::InvalidCharacters))
        ));
        assert_eq!(store.list_names().unwrap(), vec!["main"]);
    }

    #[test]
    fn directories_without_record_are_ignored() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = store(&dir);
        fs::create_dir_all(dir.path().join("testnet/wallets/half-done")).unwrap();
        assert!(store.list_names().unwrap().is_empty());
    }

    #[test]
    fn leftover_empty_directory_does_not_lock_the_name() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = store(&dir);
        fs::create_dir_all(dir.path().join("testnet/wallets/main")).unwrap();
        assert!(store.list_names().unwrap().is_empty());

        let record = store.create(request("main", WalletKind::Standard)).unwrap();
        assert_eq!(record.name, "main");
        assert_eq!(store.list_names().unwrap(), vec!["main"]);
    }

    #[test]
    fn existing_record_is_never_overwritten() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = store(&dir);
        let first = store.create(request("main", WalletKind::Trezor)).unwrap();

        let path = dir.path().join("testnet/wallets/main/wallet.json");
        assert!(matches!(
            write_record(&path, &WalletRecord {
                kind: WalletKind::Standard,
                ..first.clone()
            }),
            Err(WalletStoreError::AlreadyExists(name)) if name == "main"
        ));
        let on_disk = fs::read_to_string(&path).unwrap();
        assert_eq!(serde_json::from_str::<WalletRecord>(&on_disk).unwrap(), first);
    }

    #[test]
    fn failed_write_removes_the_wallet_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let wallet_dir = dir.path().join("testnet/wallets/main");
        fs::create_dir_all(&wallet_dir).unwrap();
        let path = wallet_dir.join(WALLET_FILE);
        fs::write(&path, "{").unwrap();

        let error = WalletStoreError::Io {
            path: path.clone(),
            source: std::io::Error::other("disk full"),
        };
        discard_wallet_dir(&wallet_dir, &path, &error);
        assert!(!wallet_dir.exists());

        let record = store(&dir).create(request("main", WalletKind::Standard)).unwrap();
        assert_eq!(record.name, "main");
    }

    #[test]
    fn record_kind_is_tagged() {
        let json = serde_json::to_value(WalletKind::WatchOnly {
            master_pub_key: "xpub1".to_owned(),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "watch_only", "master_pub_key": "xpub1"})
        );
    }
}
