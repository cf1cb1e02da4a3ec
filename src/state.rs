use std::sync::Arc;

use crate::config::Config;
use crate::translate::{GoogleTranslateClient, TranslateInterface};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Arc<dyn TranslateInterface>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let translator = Arc::new(GoogleTranslateClient::new(&config.translator_config));
        Self { config, translator }
    }
}
