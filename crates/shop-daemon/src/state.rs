//! Shared runtime state for shop-daemon.
//!
//! Handlers receive `State<Arc<AppState>>` from Axum. The store is built once
//! here and injected; nothing lives in statics.

use serde::{Deserialize, Serialize};
use shop_store::Store;

/// Static build metadata included in health responses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuildInfo {
    pub service: &'static str,
    pub version: &'static str,
}

/// Handle shared (behind an `Arc`) across all Axum handlers.
#[derive(Debug)]
pub struct AppState {
    pub build: BuildInfo,
    /// Carts, orders and the order id counter.
    pub store: Store,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(Store::new())
    }

    pub fn with_store(store: Store) -> Self {
        Self {
            build: BuildInfo {
                service: "shop-daemon",
                version: env!("CARGO_PKG_VERSION"),
            },
            store,
        }
    }
}
