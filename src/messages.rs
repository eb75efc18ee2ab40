//! User facing strings of the wallet creation screens.
//!
//! Each string carries a stable identifier so a translation layer can look it
//! up later; until then the default message is what gets displayed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Message {
    pub id: &'static str,
    pub default_message: &'static str,
}
impl Message {
    pub const fn new(id: &'static str, default_message: &'static str) -> Self {
        Self {
            id,
            default_message,
        }
    }

    pub const fn text(self) -> &'static str {
        self.default_message
    }
}
impl core::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.default_message)
    }
}

macro_rules! messages {
    ($($name:ident => $id:literal, $default:literal;)+) => {
        $(pub const $name: Message = Message::new($id, $default);)+

        #[cfg(test)]
        pub(crate) const ALL: &[Message] = &[$($name),+];
    };
}

messages! {
    NEW_SEED_TAB => "getStarted.newSeedTab", "Create a New Wallet";
    RESTORE_TAB => "getStarted.restoreTab", "Restore Existing Wallet";

    WALLET_NAME_LABEL => "createwallet.walletname.label", "Wallet Name";
    NAME_PLACEHOLDER => "createwallet.walletname.placehlder", "Choose a Name";
    NAME_TOOLTIP => "createwallet.walletname.tooltip",
        "The name is used to identify your wallet. Restoring a wallet does not require the name to match the previous wallet name.";
    DUPE_NAME_ERROR => "createwallet.dupeWalletName.error", "Please choose an unused wallet name";

    ADVANCED_OPTIONS => "createwallet.advancedoptions", "Advanced Options";

    WATCH_ONLY_LABEL => "createwallet.walletOnly.label", "Watch only";
    WATCH_ONLY_TOOLTIP => "createwallet.watchonly.tooltip",
        "You'll not be able to spend any funds associated with that wallet. It is used only to view the balance and monitor the wallet's transaction activity";
    WATCH_ONLY_ENABLED => "watchOnly.enabled", "Watch Only";
    WATCH_ONLY_DISABLED => "watchOnly.disabled", "Normal";

    TREZOR_LABEL => "createwallet.isTrezor.label", "Trezor";
    TREZOR_TOOLTIP => "createwallet.trezor.tooltip", "Trezor is a hardware wallet.";
    TREZOR_ENABLED => "createWallet.restore.trezor.enabled", "Enabled";
    TREZOR_DISABLED => "createWallet.restore.trezor.disabled", "Disabled";
    TREZOR_SETUP_LINK => "createWallet.isTrezor.setupLink", "(setup device)";

    PRIVACY_LABEL => "privacy.label", "Privacy";

    MASTER_PUB_KEY_LABEL => "createwallet.walletmasterpubkey.label", "Master Pub Key";
    MASTER_PUB_KEY_PLACEHOLDER => "createwallet.walletpubkey.placeholder", "Master Pub Key";
    MASTER_PUB_KEY_ERROR => "createwallet.walletWatchOnly.error", "Invalid Master Pubkey";

    CREATING_BUTTON => "wallet.creating.button", "Creating";
    CREATE_BUTTON => "wallet.create.button", "Continue";
    CANCEL_BUTTON => "advancedStartup.cancel", "Cancel";
}
