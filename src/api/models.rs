//! Backend API Data Models
//!
//! Response and request shapes for the florist backend. Field names match
//! the backend's JSON exactly; optional fields default so partial payloads
//! from older backend builds still deserialize.

use crate::cart::ItemId;
use crate::checkout::DeliveryMethod;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Content Models
// =============================================================================

/// Hero carousel slide shown on the landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSlide {
    pub id: u64,
    pub image: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub button: String,
    /// External link opened by the slide button
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Static promotional banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiBanner {
    pub id: u64,
    pub image: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Occasion tile (birthday, anniversary, ...) linking into the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiOccasion {
    pub id: u64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub subcategories: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Product category; subcategories nest one level deep in practice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCategory {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub subcategories: Vec<ApiCategory>,
}

/// Catalog product as served by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiProduct {
    pub id: u64,
    pub name: String,
    /// Price in whole currency units (₮)
    pub price: u64,
    pub image: String,
    #[serde(default)]
    pub discount: Option<u64>,
    #[serde(default)]
    pub is_pre_order: bool,
    #[serde(default)]
    pub original_price: Option<u64>,
    #[serde(default)]
    pub old_price: Option<u64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub supplier: String,
    /// Free-form key/value detail rows (stem length, wrapping, ...)
    #[serde(default)]
    pub details: Option<HashMap<String, String>>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Query parameters for the paginated product listing
#[derive(Debug, Clone, Default)]
pub struct GetProductsParams {
    pub featured: bool,
    pub preorder: bool,
    /// Category slug
    pub category: Option<String>,
    /// Occasion slug
    pub occasion: Option<String>,
    /// 1-based page number
    pub page: Option<u32>,
    /// Products per page (backend default 12)
    pub page_size: Option<u32>,
}

/// Pagination envelope returned by `GET /api/products/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProductsResponse {
    pub products: Vec<ApiProduct>,
    pub count: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
}

// =============================================================================
// Orders + QPay
// =============================================================================

/// Order lifecycle status. `Paid` is the terminal state for the checkout
/// workflow; anything the backend adds later lands in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn is_paid(self) -> bool {
        self == OrderStatus::Paid
    }
}

/// One cart line as sent in the order-creation payload. Display values
/// (name, price, image) are authoritative at add time; the backend does not
/// reconcile them against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderItem {
    pub id: ItemId,
    pub name: String,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub quantity: u32,
}

/// Body of `POST /api/orders/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    pub delivery_method: DeliveryMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    pub items: Vec<CreateOrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
}

/// Bank/app deep link from the QPay invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QPayUrl {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: String,
    pub link: String,
}

/// QPay invoice embedded in the order-creation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QPayInvoice {
    pub invoice_id: String,
    /// QR text payload, rendered client-side when no raster image is present
    #[serde(default)]
    pub qr_code: String,
    /// Base64 raster QR; either a full `data:` URI or bare base64
    #[serde(default)]
    pub qr_image: String,
    #[serde(default)]
    pub urls: Vec<QPayUrl>,
    #[serde(default)]
    pub invoice_status: String,
}

/// Response of `POST /api/orders/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub order_id: u64,
    /// Human-readable order number shown to the customer
    pub order_number: String,
    pub total: u64,
    pub status: OrderStatus,
    pub qpay: QPayInvoice,
}

/// Line item inside the order detail projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: u64,
    pub product_name: String,
    pub price: u64,
    pub quantity: u32,
    pub line_total: u64,
    #[serde(default)]
    pub product_image: String,
}

/// Full read-only order projection from `GET /api/orders/{id}/`.
/// The client never mutates this; it only re-fetches it to observe
/// status transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiOrderDetail {
    pub id: u64,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_email: String,
    pub delivery_method: String,
    #[serde(default)]
    pub delivery_address: String,
    pub subtotal: u64,
    pub delivery_fee: u64,
    pub total: u64,
    pub status: OrderStatus,
    #[serde(default)]
    pub qpay_invoice_id: String,
    #[serde(default)]
    pub qpay_invoice_status: String,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// =============================================================================
// Promo Codes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percent,
    Fixed,
}

/// Result of `POST /api/promo/validate/`. Held only transiently in the
/// active checkout form, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatePromoResponse {
    pub valid: bool,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub discount_type: Option<DiscountType>,
    #[serde(default)]
    pub discount_value: Option<u64>,
    /// Discount in whole currency units, computed server-side
    #[serde(default)]
    pub discount_amount: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ValidatePromoResponse {
    /// Discount to apply to a total: zero unless the promo is valid.
    pub fn applied_discount(&self) -> u64 {
        if self.valid {
            self.discount_amount.unwrap_or(0)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_response_deserializes_with_partial_qpay() {
        let value = json!({
            "order_id": 42,
            "order_number": "EF-0042",
            "total": 35000,
            "status": "pending",
            "qpay": { "invoice_id": "inv-1" }
        });
        let res: CreateOrderResponse = serde_json::from_value(value).unwrap();
        assert_eq!(res.order_id, 42);
        assert_eq!(res.status, OrderStatus::Pending);
        assert!(res.qpay.qr_code.is_empty());
        assert!(res.qpay.urls.is_empty());
    }

    #[test]
    fn unknown_status_does_not_fail_deserialization() {
        let status: OrderStatus = serde_json::from_value(json!("refunded")).unwrap();
        assert_eq!(status, OrderStatus::Unknown);
        assert!(!status.is_paid());
    }

    #[test]
    fn promo_discount_only_counts_when_valid() {
        let invalid = ValidatePromoResponse {
            valid: false,
            code: None,
            discount_type: None,
            discount_value: None,
            discount_amount: Some(5000),
            error: Some("Промо код буруу байна.".into()),
        };
        assert_eq!(invalid.applied_discount(), 0);

        let valid = ValidatePromoResponse {
            valid: true,
            discount_amount: Some(5000),
            ..invalid
        };
        assert_eq!(valid.applied_discount(), 5000);
    }
}
