pub mod client;
pub mod interface;

pub use client::GoogleTranslateClient;
pub use interface::{TranslateError, TranslateInterface};
