//! Checkout Totals
//!
//! Delivery fees are a pure function of the chosen method; the grand total
//! floors at zero so an oversized discount can never produce a negative
//! amount to pay.

use serde::{Deserialize, Serialize};

/// Flat delivery fee for in-city delivery (₮)
pub const CITY_DELIVERY_FEE: u64 = 10_000;
/// Flat fee for the countryside drop-off service (₮)
pub const COUNTRYSIDE_DELIVERY_FEE: u64 = 15_000;

/// Enumerated delivery choice, serialized as `"city"` / `"countryside"`
/// in the order payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    #[default]
    City,
    Countryside,
}

impl DeliveryMethod {
    pub fn fee(self) -> u64 {
        match self {
            DeliveryMethod::City => CITY_DELIVERY_FEE,
            DeliveryMethod::Countryside => COUNTRYSIDE_DELIVERY_FEE,
        }
    }
}

/// `subtotal + delivery fee − discount`, floored at 0.
pub fn grand_total(subtotal: u64, delivery_fee: u64, discount: u64) -> u64 {
    (subtotal + delivery_fee).saturating_sub(discount)
}
