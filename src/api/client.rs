//! Backend API Client
//!
//! Thin typed wrapper over `reqwest` translating function calls into
//! GET/POST requests against the florist backend. Non-2xx responses become
//! [`ApiError::Api`]; `{error}` bodies from the backend are surfaced
//! verbatim so the UI can show the backend's own message.

use super::models::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generic user-facing failure message when the backend gives no detail
pub const GENERIC_ERROR_MESSAGE: &str = "Алдаа гарлаа.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the backend `{error}` when present
    #[error("{message}")]
    Api { status: u16, message: String },
}

/// Error body shape used by the backend for rejected requests
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given backend base URL, e.g.
    /// `http://localhost:8000`. A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let res = self.http.get(self.url(path)).query(query).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: format!("API {path}: {}", status.as_u16()),
            });
        }
        Ok(res.json().await?)
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let res = self.http.post(self.url(path)).json(body).send().await?;
        let status = res.status();
        if !status.is_success() {
            let message = res
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| format!("API {path}: {}", status.as_u16()));
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(res.json().await?)
    }

    // =========================================================================
    // Content
    // =========================================================================

    pub async fn hero_slides(&self, active: bool) -> Result<Vec<ApiSlide>, ApiError> {
        #[derive(Deserialize)]
        struct Envelope {
            slides: Vec<ApiSlide>,
        }
        let env: Envelope = self
            .get_json("/api/hero-slides/", &active_query(active))
            .await?;
        Ok(env.slides)
    }

    pub async fn hero_banners(&self, active: bool) -> Result<Vec<ApiBanner>, ApiError> {
        #[derive(Deserialize)]
        struct Envelope {
            banners: Vec<ApiBanner>,
        }
        let env: Envelope = self
            .get_json("/api/hero-banners/", &active_query(active))
            .await?;
        Ok(env.banners)
    }

    pub async fn occasions(&self, active: bool) -> Result<Vec<ApiOccasion>, ApiError> {
        #[derive(Deserialize)]
        struct Envelope {
            occasions: Vec<ApiOccasion>,
        }
        let env: Envelope = self
            .get_json("/api/occasions/", &active_query(active))
            .await?;
        Ok(env.occasions)
    }

    pub async fn categories(&self) -> Result<Vec<ApiCategory>, ApiError> {
        #[derive(Deserialize)]
        struct Envelope {
            categories: Vec<ApiCategory>,
        }
        let env: Envelope = self.get_json("/api/categories/", &[]).await?;
        Ok(env.categories)
    }

    // =========================================================================
    // Products
    // =========================================================================

    pub async fn products(
        &self,
        params: &GetProductsParams,
    ) -> Result<GetProductsResponse, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if params.featured {
            query.push(("featured", "1".into()));
        }
        if params.preorder {
            query.push(("preorder", "1".into()));
        }
        if let Some(category) = &params.category {
            query.push(("category", category.clone()));
        }
        if let Some(occasion) = &params.occasion {
            query.push(("occasion", occasion.clone()));
        }
        if let Some(page) = params.page {
            query.push(("page", page.to_string()));
        }
        if let Some(page_size) = params.page_size {
            query.push(("page_size", page_size.to_string()));
        }
        self.get_json("/api/products/", &query).await
    }

    pub async fn product(&self, id: u64) -> Result<ApiProduct, ApiError> {
        self.get_json(&format!("/api/products/{id}/"), &[]).await
    }

    pub async fn featured_products(&self) -> Result<Vec<ApiProduct>, ApiError> {
        let res = self
            .products(&GetProductsParams {
                featured: true,
                ..Default::default()
            })
            .await?;
        Ok(res.products)
    }

    pub async fn preorder_products(&self) -> Result<Vec<ApiProduct>, ApiError> {
        let res = self
            .products(&GetProductsParams {
                preorder: true,
                page_size: Some(48),
                ..Default::default()
            })
            .await?;
        Ok(res.products)
    }

    // =========================================================================
    // Orders + Promo
    // =========================================================================

    pub async fn create_order(
        &self,
        payload: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, ApiError> {
        self.post_json("/api/orders/", payload).await
    }

    /// Fetches the order detail; used exclusively for status polling.
    pub async fn order(&self, id: u64) -> Result<ApiOrderDetail, ApiError> {
        self.get_json(&format!("/api/orders/{id}/"), &[]).await
    }

    /// Validates a promo code against a pre-discount subtotal. A non-2xx
    /// response is converted into `valid: false` with the backend's error
    /// message rather than an `Err`; only transport failures propagate.
    pub async fn validate_promo(
        &self,
        code: &str,
        subtotal: u64,
    ) -> Result<ValidatePromoResponse, ApiError> {
        #[derive(Serialize)]
        struct PromoRequest<'a> {
            code: &'a str,
            subtotal: u64,
        }
        let res = self
            .http
            .post(self.url("/api/promo/validate/"))
            .json(&PromoRequest {
                code: code.trim(),
                subtotal,
            })
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            let error = res
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
            return Ok(ValidatePromoResponse {
                valid: false,
                code: None,
                discount_type: None,
                discount_value: None,
                discount_amount: None,
                error: Some(error),
            });
        }
        Ok(res.json().await?)
    }
}

fn active_query(active: bool) -> Vec<(&'static str, String)> {
    if active {
        vec![("active", "1".into())]
    } else {
        Vec::new()
    }
}
