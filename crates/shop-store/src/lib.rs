//! shop-store
//!
//! Process-lifetime, in-memory store for carts and placed orders.
//!
//! - One `RwLock` guards the cart map, the order map and the id counter.
//! - Cart reads take the shared side; every mutation takes the exclusive side.
//! - Nothing is evicted or persisted.
//!
//! Quantities and totals are stored exactly as received. Callers that need
//! positive quantities or a total matching the items must check that
//! themselves.

use std::collections::HashMap;

use shop_schemas::{CartItem, Order, CONFIRMED_STATUS};
use tokio::sync::RwLock;
use tracing::debug;

/// First id handed out by a fresh store.
const FIRST_ORDER_ID: u64 = 1;

#[derive(Debug)]
struct Inner {
    carts: HashMap<String, Vec<CartItem>>,
    orders: HashMap<String, Order>,
    next_order_id: u64,
}

/// Shared cart and order store. Wrap in an `Arc` to share across handlers.
#[derive(Debug)]
pub struct Store {
    inner: RwLock<Inner>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                carts: HashMap::new(),
                orders: HashMap::new(),
                next_order_id: FIRST_ORDER_ID,
            }),
        }
    }

    /// Items in `user_id`'s cart, in insertion order. Empty if the user has
    /// never added anything.
    pub async fn cart(&self, user_id: &str) -> Vec<CartItem> {
        let inner = self.inner.read().await;
        inner.carts.get(user_id).cloned().unwrap_or_default()
    }

    /// Append `item` to `user_id`'s cart, creating the cart on first use.
    pub async fn append_item(&self, user_id: &str, item: CartItem) {
        let mut inner = self.inner.write().await;
        let cart = inner.carts.entry(user_id.to_string()).or_default();
        cart.push(item);
        debug!(user_id, cart_len = cart.len(), "cart item appended");
    }

    /// Stamp `draft` with the next id and the confirmed status, store it and
    /// return the stored copy.
    ///
    /// Any id or status already on `draft` is discarded.
    pub async fn place_order(&self, mut draft: Order) -> Order {
        let mut inner = self.inner.write().await;

        draft.id = inner.next_order_id.to_string();
        inner.next_order_id += 1;
        draft.status = CONFIRMED_STATUS.to_string();

        inner.orders.insert(draft.id.clone(), draft.clone());
        debug!(order_id = %draft.id, user_id = %draft.user_id, "order stored");
        draft
    }

    pub async fn order(&self, order_id: &str) -> Option<Order> {
        self.inner.read().await.orders.get(order_id).cloned()
    }

    pub async fn order_count(&self) -> usize {
        self.inner.read().await.orders.len()
    }

    /// Whether a cart exists for `user_id`. [`Store::cart`] returns an empty
    /// list either way.
    pub async fn has_cart(&self, user_id: &str) -> bool {
        self.inner.read().await.carts.contains_key(user_id)
    }
}
