//! Shopping Cart Store
//!
//! Holds the ordered cart lines (insertion order is display order), the
//! drawer-visibility flag, and derived totals. Every mutation is serialized
//! to the durable store under [`CART_STORAGE_KEY`]; storage failures never
//! surface — the in-memory state is authoritative for the session.

use super::models::{CartItem, ItemId};
use crate::storage::{load_json, save_json, KeyValueStore, CART_STORAGE_KEY};
use std::sync::Arc;

pub struct CartStore {
    items: Vec<CartItem>,
    is_open: bool,
    storage: Arc<dyn KeyValueStore>,
}

impl CartStore {
    /// Loads the cart persisted in `storage`; malformed stored data yields
    /// an empty cart without raising.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let items = load_json(storage.as_ref(), CART_STORAGE_KEY);
        Self {
            items,
            is_open: false,
            storage,
        }
    }

    fn persist(&self) {
        save_json(self.storage.as_ref(), CART_STORAGE_KEY, &self.items);
    }

    /// Adds a line. An existing line with the same id has its quantity
    /// incremented instead of a duplicate being appended; display values of
    /// the existing line are kept as-is.
    pub fn add_item(&mut self, item: CartItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += item.quantity;
        } else {
            self.items.push(item);
        }
        self.persist();
    }

    /// Removes the line with the given id; no-op when absent.
    pub fn remove_item(&mut self, id: &ItemId) {
        self.items.retain(|i| &i.id != id);
        self.persist();
    }

    /// Sets a line's quantity, clamped to a floor of 1. This path never
    /// removes a line; removal is always an explicit [`remove_item`].
    ///
    /// [`remove_item`]: CartStore::remove_item
    pub fn update_quantity(&mut self, id: &ItemId, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| &i.id == id) {
            item.quantity = quantity.max(1);
            self.persist();
        }
    }

    /// Empties the cart (called after an order is successfully created).
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line quantities, recomputed on every read.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of price × quantity, recomputed on every read.
    pub fn total_price(&self) -> u64 {
        self.items
            .iter()
            .map(|i| i.price * u64::from(i.quantity))
            .sum()
    }

    /// Order-payload snapshot of the current lines.
    pub fn order_items(&self) -> Vec<crate::api::CreateOrderItem> {
        self.items.iter().map(CartItem::to_order_item).collect()
    }

    // Drawer visibility lives here because the header badge, the drawer and
    // the checkout redirect all observe the same value.

    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}
