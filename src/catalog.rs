//! Catalog Section Fetchers
//!
//! Read-only content loads for the landing and listing pages. A failed
//! fetch never crashes a page: the section logs a warning and renders
//! empty instead.

use crate::api::{
    ApiBanner, ApiCategory, ApiClient, ApiOccasion, ApiProduct, ApiSlide, GetProductsParams,
    GetProductsResponse,
};
use tracing::warn;

pub async fn hero_slides(api: &ApiClient) -> Vec<ApiSlide> {
    match api.hero_slides(true).await {
        Ok(slides) => slides,
        Err(err) => {
            warn!(error = %err, "hero slides fetch failed");
            Vec::new()
        }
    }
}

pub async fn hero_banners(api: &ApiClient) -> Vec<ApiBanner> {
    match api.hero_banners(true).await {
        Ok(banners) => banners,
        Err(err) => {
            warn!(error = %err, "hero banners fetch failed");
            Vec::new()
        }
    }
}

pub async fn occasions(api: &ApiClient) -> Vec<ApiOccasion> {
    match api.occasions(true).await {
        Ok(occasions) => occasions,
        Err(err) => {
            warn!(error = %err, "occasions fetch failed");
            Vec::new()
        }
    }
}

pub async fn categories(api: &ApiClient) -> Vec<ApiCategory> {
    match api.categories().await {
        Ok(categories) => categories,
        Err(err) => {
            warn!(error = %err, "categories fetch failed");
            Vec::new()
        }
    }
}

pub async fn featured_products(api: &ApiClient) -> Vec<ApiProduct> {
    match api.featured_products().await {
        Ok(products) => products,
        Err(err) => {
            warn!(error = %err, "featured products fetch failed");
            Vec::new()
        }
    }
}

pub async fn preorder_products(api: &ApiClient) -> Vec<ApiProduct> {
    match api.preorder_products().await {
        Ok(products) => products,
        Err(err) => {
            warn!(error = %err, "pre-order products fetch failed");
            Vec::new()
        }
    }
}

/// Paginated product listing. Unlike the section fetchers this surfaces the
/// empty envelope so the page can still show pagination state.
pub async fn products_page(api: &ApiClient, params: &GetProductsParams) -> GetProductsResponse {
    match api.products(params).await {
        Ok(page) => page,
        Err(err) => {
            warn!(error = %err, "product listing fetch failed");
            GetProductsResponse {
                products: Vec::new(),
                count: 0,
                total_pages: 0,
                current_page: params.page.unwrap_or(1),
                page_size: params.page_size.unwrap_or(12),
            }
        }
    }
}
