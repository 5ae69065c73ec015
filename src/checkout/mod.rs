//! Checkout / Payment Workflow Module
//!
//! The one stateful multi-step process in the storefront:
//! `Form → Submitting → Payment(pending) → Payment(paid)`. Two hosts share
//! the machine — the full checkout page driven by the cart, and the
//! direct-buy modal for a single product with an optional promo code.
//!
//! - Totals and delivery fees → [`totals`]
//! - QR / bank-link rendering contract → [`qr`]
//! - Order status polling → [`polling`]
//! - The workflows themselves → [`workflow`]

pub mod polling;
pub mod qr;
pub mod totals;
pub mod workflow;

// Re-export commonly used types for convenience
pub use polling::{StatusPoller, POLL_INTERVAL};
pub use qr::{bank_links, payment_qr, PaymentQr};
pub use totals::{grand_total, DeliveryMethod};
pub use workflow::{CheckoutForm, CheckoutPage, CheckoutStep, DirectCheckout};
