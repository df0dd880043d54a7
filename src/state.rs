// src/state.rs
use std::sync::Arc;

use crate::config::ForwarderConfig;
use crate::services::forwarder::Forwarder;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub forwarder: Forwarder,
}

impl AppState {
    pub fn new(config: ForwarderConfig) -> reqwest::Result<Self> {
        Ok(Self {
            forwarder: Forwarder::new(config)?,
        })
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
