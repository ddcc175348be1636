//! shop-schemas
//!
//! Wire types shared by the store and the daemon. Field names are the JSON
//! names; every field defaults to its zero value when absent so a partial
//! payload still decodes.

use serde::{Deserialize, Serialize};

/// Status stamped on every order accepted at checkout.
pub const CONFIRMED_STATUS: &str = "Confirmed";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartItem {
    pub product_id: String,
    /// Not validated: zero and negative quantities are kept as sent.
    pub quantity: i64,
}

/// A checkout record.
///
/// On input `id` and `status` are ignored; the store overwrites both when the
/// order is placed. `total` is echoed verbatim and never recomputed from
/// `items`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub status: String,
}
