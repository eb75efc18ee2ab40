pub mod alerts;
pub mod create_wallet_form;
pub mod inputs;
pub mod misc;
pub mod modal;
pub mod svg;
