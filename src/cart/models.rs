//! Shopping Cart Domain Models

use crate::api::CreateOrderItem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cart line identity. The backend hands out numeric product ids, but
/// direct-buy lines may carry composed string ids, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        ItemId::Number(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::Text(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId::Text(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// Returns the default quantity (1) for cart items
fn default_quantity() -> u32 {
    1
}

/// One line in the cart. Name, price and image are the display values
/// supplied at add time; the store performs no catalog reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: ItemId,

    pub name: String,

    /// Price in whole currency units (₮)
    pub price: u64,

    pub image: String,

    /// Quantity of this line (defaults to 1, never below 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl CartItem {
    /// Snapshot of this line for the order-creation payload.
    pub fn to_order_item(&self) -> CreateOrderItem {
        CreateOrderItem {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            image: Some(self.image.clone()),
            quantity: self.quantity,
        }
    }
}
