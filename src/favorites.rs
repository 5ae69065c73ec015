//! Favorites Store
//!
//! Lightweight like-list independent of the cart: a duplicate-free list of
//! product ids, persisted on every change under [`FAVORITES_STORAGE_KEY`].
//! Toggling emits a directional toast so the user sees which way it went.

use crate::notify::Notifier;
use crate::storage::{load_json, save_json, KeyValueStore, FAVORITES_STORAGE_KEY};
use std::sync::Arc;

const ADDED_MESSAGE: &str = "Бүтээгдэхүүнийг хүслийн жагсаалтад нэмлээ";
const REMOVED_MESSAGE: &str = "Бүтээгдэхүүнийг хүслийн жагсаалтаас хаслаа";

pub struct FavoritesStore {
    favorites: Vec<u64>,
    storage: Arc<dyn KeyValueStore>,
    notifier: Notifier,
}

impl FavoritesStore {
    /// Loads persisted favorites; corrupt stored data yields an empty list.
    pub fn load(storage: Arc<dyn KeyValueStore>, notifier: Notifier) -> Self {
        let favorites = load_json(storage.as_ref(), FAVORITES_STORAGE_KEY);
        Self {
            favorites,
            storage,
            notifier,
        }
    }

    /// Adds the id when absent, removes it when present.
    pub fn toggle(&mut self, id: u64) {
        if let Some(pos) = self.favorites.iter().position(|&f| f == id) {
            self.favorites.remove(pos);
            self.notifier.success(REMOVED_MESSAGE);
        } else {
            self.favorites.push(id);
            self.notifier.success(ADDED_MESSAGE);
        }
        save_json(self.storage.as_ref(), FAVORITES_STORAGE_KEY, &self.favorites);
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.favorites.contains(&id)
    }

    pub fn count(&self) -> usize {
        self.favorites.len()
    }

    pub fn ids(&self) -> &[u64] {
        &self.favorites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store() -> (FavoritesStore, tokio::sync::mpsc::UnboundedReceiver<crate::notify::Toast>) {
        let (notifier, rx) = Notifier::new();
        (
            FavoritesStore::load(Arc::new(MemoryStore::new()), notifier),
            rx,
        )
    }

    #[test]
    fn toggle_twice_restores_original_membership() {
        let (mut favorites, _rx) = store();
        assert!(!favorites.is_favorite(5));

        favorites.toggle(5);
        assert!(favorites.is_favorite(5));
        assert_eq!(favorites.count(), 1);

        favorites.toggle(5);
        assert!(!favorites.is_favorite(5));
        assert_eq!(favorites.count(), 0);
    }

    #[test]
    fn no_duplicate_ids() {
        let (mut favorites, _rx) = store();
        favorites.toggle(3);
        favorites.toggle(7);
        favorites.toggle(3);
        favorites.toggle(3);
        assert_eq!(favorites.ids(), &[7, 3]);
    }

    #[test]
    fn toasts_distinguish_direction() {
        let (mut favorites, mut rx) = store();
        favorites.toggle(1);
        favorites.toggle(1);

        assert_eq!(rx.try_recv().unwrap().message, ADDED_MESSAGE);
        assert_eq!(rx.try_recv().unwrap().message, REMOVED_MESSAGE);
    }

    #[test]
    fn favorites_round_trip_through_storage() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let (notifier, _rx) = Notifier::new();

        let mut favorites = FavoritesStore::load(storage.clone(), notifier.clone());
        favorites.toggle(3);
        favorites.toggle(8);

        let reloaded = FavoritesStore::load(storage, notifier);
        assert_eq!(reloaded.ids(), &[3, 8]);
    }

    #[test]
    fn corrupt_storage_yields_empty_list() {
        let storage: Arc<dyn KeyValueStore> =
            Arc::new(MemoryStore::with_entry(FAVORITES_STORAGE_KEY, "not json"));
        let (notifier, _rx) = Notifier::new();
        let favorites = FavoritesStore::load(storage, notifier);
        assert_eq!(favorites.count(), 0);
    }
}
