//! Environment-driven configuration for the storefront binary.

use std::env;
use std::path::PathBuf;
use tracing::info;

pub struct Config {
    /// Base URL of the florist backend
    pub api_url: String,
    /// Directory holding the persisted cart/favorites blobs
    pub state_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            api_url: load_or("FLOWER_API_URL", "http://localhost:8000"),
            state_dir: PathBuf::from(load_or("FLOWER_STATE_DIR", ".storefront-state")),
        }
    }
}

fn load_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
