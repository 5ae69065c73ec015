use flower_storefront::api::ApiClient;
use flower_storefront::cart::CartStore;
use flower_storefront::catalog;
use flower_storefront::config::Config;
use flower_storefront::favorites::FavoritesStore;
use flower_storefront::notify::Notifier;
use flower_storefront::storage::{FileStore, KeyValueStore};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Storefront smoke driver: wires the stores and API client the way the UI
/// does and pulls the landing-page content once, logging what it finds.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();
    info!(api_url = %config.api_url, state_dir = %config.state_dir.display(), "starting storefront");

    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.state_dir));
    let (notifier, mut toasts) = Notifier::new();

    let cart = CartStore::load(storage.clone());
    let favorites = FavoritesStore::load(storage, notifier);
    info!(
        cart_items = cart.total_items(),
        cart_total = cart.total_price(),
        favorites = favorites.count(),
        "restored session state"
    );

    let api = ApiClient::new(config.api_url);

    let slides = catalog::hero_slides(&api).await;
    let banners = catalog::hero_banners(&api).await;
    let occasions = catalog::occasions(&api).await;
    let categories = catalog::categories(&api).await;
    let featured = catalog::featured_products(&api).await;
    let preorder = catalog::preorder_products(&api).await;

    info!(
        slides = slides.len(),
        banners = banners.len(),
        occasions = occasions.len(),
        categories = categories.len(),
        featured = featured.len(),
        preorder = preorder.len(),
        "landing content loaded"
    );

    while let Ok(toast) = toasts.try_recv() {
        info!(kind = ?toast.kind, "{}", toast.message);
    }
}
