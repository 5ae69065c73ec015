//! Backend API Module
//!
//! Typed HTTP client for the florist backend, including:
//! - Content models (slides, banners, occasions, categories, products)
//! - Order and QPay invoice models
//! - The `ApiClient` wrapper translating calls into GET/POST requests

pub mod client;
pub mod models;

// Re-export commonly used types for convenience
pub use client::{ApiClient, ApiError};
pub use models::*;
