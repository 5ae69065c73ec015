//! Shopping Cart Domain Module
//!
//! Single source of truth for the in-progress purchase selection, shared by
//! every page and the slide-over cart drawer:
//! - Domain models (ItemId, CartItem)
//! - The persisted cart store with derived totals

pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use models::{CartItem, ItemId};
pub use store::CartStore;
