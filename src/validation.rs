//! Checks run by the wallet creation controller before handing a request to the
//! wallet store. The form itself only displays their outcome.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::state_management::Network;

static WALLET_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 _.\-]+$").expect("valid regex"));

/// Names that collide with routes or with the store layout
const RESERVED_NAMES: &[&str] = &["create", "restore", ".", ".."];

/// Device names Windows refuses as a file name, whatever the extension
const WINDOWS_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

fn is_reserved(name: &str) -> bool {
    if RESERVED_NAMES.contains(&name) || name.ends_with('.') {
        return true;
    }
    let stem = name.split('.').next().unwrap_or(name).trim_end();
    WINDOWS_DEVICE_NAMES
        .iter()
        .any(|device| device.eq_ignore_ascii_case(stem))
}

/// Length of a BIP32 serialized extended key, checksum excluded
const EXTENDED_KEY_LEN: usize = 78;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WalletNameError {
    #[error("Name is required")]
    Empty,
    #[error("Only letters, digits, spaces, '.', '_' and '-' are allowed")]
    InvalidCharacters,
    #[error("This name is reserved")]
    Reserved,
    #[error("This name is already in use")]
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MasterPubKeyError {
    #[error("Master public key is required")]
    Empty,
    #[error("Not a valid Base58Check string: {0}")]
    Encoding(String),
    #[error("Unexpected key length: {0} bytes")]
    Length(usize),
    #[error("This key is not an extended public key for {0}")]
    WrongVersion(Network),
}

pub fn validate_wallet_name(name: &str, existing: &HashSet<String>) -> Result<(), WalletNameError> {
    let name = name.trim();
    if name.is_empty() {
        Err(WalletNameError::Empty)
    } else if !WALLET_NAME_REGEX.is_match(name) {
        Err(WalletNameError::InvalidCharacters)
    } else if is_reserved(name) {
        Err(WalletNameError::Reserved)
    } else if existing.contains(name) {
        Err(WalletNameError::Duplicate)
    } else {
        Ok(())
    }
}

pub fn validate_master_pub_key(key: &str, network: Network) -> Result<(), MasterPubKeyError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(MasterPubKeyError::Empty);
    }
    let payload = bs58::decode(key)
        .with_check(None)
        .into_vec()
        .map_err(|e| MasterPubKeyError::Encoding(e.to_string()))?;
    if payload.len() != EXTENDED_KEY_LEN {
        return Err(MasterPubKeyError::Length(payload.len()));
    }
    if payload[..4] != network.xpub_version() {
        return Err(MasterPubKeyError::WrongVersion(network));
    }
    Ok(())
}
