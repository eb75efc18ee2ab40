use std::path::PathBuf;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}
impl Network {
    /// BIP32 version bytes of an extended public key on this network
    pub const fn xpub_version(self) -> [u8; 4] {
        match self {
            Network::Mainnet => [0x04, 0x88, 0xB2, 0x1E],
            Network::Testnet => [0x04, 0x35, 0x87, 0xCF],
        }
    }
}
impl core::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        })
    }
}
impl core::str::FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "bitcoin" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(format!("unknown network: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationConfig {
    pub network: Network,
    pub datadir: PathBuf,
}
impl Default for ApplicationConfig {
    fn default() -> Self {
        let mut datadir: PathBuf = dirs_next::home_dir().unwrap_or_default();
        datadir.push(".wallet-launcher");
        Self {
            network: Network::default(),
            datadir,
        }
    }
}
pub static APPLICATION_CONFIG: GlobalSignal<ApplicationConfig> =
    Signal::global(|| ApplicationConfig::default());

pub(super) fn create_config() -> ApplicationConfig {
    create_config_from(|key| std::env::var(key).ok())
}

fn create_config_from(get_var: impl Fn(&str) -> Option<String>) -> ApplicationConfig {
    let mut default_config = ApplicationConfig::default();

    // Env vars override the defaults one by one
    if let Some(datadir) = get_var("WALLET_LAUNCHER_HOME").filter(|s| !s.is_empty()) {
        default_config.datadir = PathBuf::from(datadir);
    }
    if let Some(network) = get_var("WALLET_LAUNCHER_NETWORK") {
        match network.parse() {
            Ok(network) => default_config.network = network,
            Err(e) => log::warn!("Ignoring WALLET_LAUNCHER_NETWORK: {e}"),
        }
    }
    default_config
}
