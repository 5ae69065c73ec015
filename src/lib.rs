//! Storefront Core Library
//!
//! This library provides the client-side core of the flower storefront:
//! cart and favorites state, a typed API client for the backend, and the
//! checkout/payment workflow with QPay status polling.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod favorites;

// Infrastructure
pub mod api;
pub mod config;
pub mod notify;
pub mod storage;
