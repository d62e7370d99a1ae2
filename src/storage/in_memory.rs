//! InMemoryCardStore - BTreeMap-backed card store for testing and development.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::{CardStore, IdAllocator};
use crate::card::Card;
use crate::error::{CardId, StorageError};

/// In-memory card store.
///
/// Clone-friendly via Arc; clones share cards and identity allocation.
#[derive(Clone, Default)]
pub struct InMemoryCardStore {
    cards: Arc<RwLock<BTreeMap<CardId, Card>>>,
    ids: Arc<IdAllocator>,
}

impl InMemoryCardStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn in_range(&self, id: CardId) -> bool {
        id >= 1 && id <= self.ids.current()
    }
}

impl CardStore for InMemoryCardStore {
    fn create_card(&self, mut card: Card) -> Result<CardId, StorageError> {
        let mut cards = self
            .cards
            .write()
            .map_err(|_| StorageError::LockPoisoned("create"))?;

        let id = self.ids.next();
        card.id = id;
        cards.insert(id, card);
        Ok(id)
    }

    fn get_card(&self, id: CardId) -> Result<Card, StorageError> {
        if !self.in_range(id) {
            return Err(StorageError::NotFound { id });
        }

        let cards = self
            .cards
            .read()
            .map_err(|_| StorageError::LockPoisoned("get"))?;

        cards.get(&id).cloned().ok_or(StorageError::NotFound { id })
    }

    fn list_cards(&self) -> Result<Vec<Card>, StorageError> {
        let cards = self
            .cards
            .read()
            .map_err(|_| StorageError::LockPoisoned("list"))?;

        Ok(cards.values().cloned().collect())
    }

    fn update_card(&self, id: CardId, mut card: Card) -> Result<(), StorageError> {
        let mut cards = self
            .cards
            .write()
            .map_err(|_| StorageError::LockPoisoned("update"))?;

        let slot = cards.get_mut(&id).ok_or(StorageError::NotFound { id })?;
        card.id = id;
        *slot = card;
        Ok(())
    }

    fn delete_card(&self, id: CardId) -> Result<(), StorageError> {
        let mut cards = self
            .cards
            .write()
            .map_err(|_| StorageError::LockPoisoned("delete"))?;

        cards
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> Card {
        Card {
            name: name.into(),
            set_code: "tsp".into(),
            collector_number: "1".into(),
            finish: "nonfoil".into(),
            ..Card::default()
        }
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let store = InMemoryCardStore::new();
        assert_eq!(store.create_card(card("a")).unwrap(), 1);
        assert_eq!(store.create_card(card("b")).unwrap(), 2);

        let loaded = store.get_card(2).unwrap();
        assert_eq!(loaded.id, 2);
        assert_eq!(loaded.name, "b");
    }

    #[test]
    fn get_outside_range_is_not_found() {
        let store = InMemoryCardStore::new();
        store.create_card(card("a")).unwrap();

        for id in [0, 2, 99] {
            let err = store.get_card(id).unwrap_err();
            assert_eq!(err, StorageError::NotFound { id });
            assert_eq!(err.code(), "ST001");
        }
    }

    #[test]
    fn get_is_idempotent() {
        let store = InMemoryCardStore::new();
        let id = store.create_card(card("a")).unwrap();
        assert_eq!(store.get_card(id).unwrap(), store.get_card(id).unwrap());
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let store = InMemoryCardStore::new();
        let first = store.create_card(card("a")).unwrap();
        store.delete_card(first).unwrap();

        assert_eq!(store.get_card(first).unwrap_err().code(), "ST001");
        assert_eq!(store.create_card(card("b")).unwrap(), 2);
        assert_eq!(store.delete_card(first).unwrap_err(), StorageError::NotFound { id: first });
    }

    #[test]
    fn update_keeps_identity() {
        let store = InMemoryCardStore::new();
        let id = store.create_card(card("a")).unwrap();

        let mut changed = card("renamed");
        changed.id = 77;
        store.update_card(id, changed).unwrap();

        let loaded = store.get_card(id).unwrap();
        assert_eq!(loaded.id, id);
        assert_eq!(loaded.name, "renamed");
        assert!(store.update_card(5, card("x")).is_err());
    }

    #[test]
    fn list_in_identity_order() {
        let store = InMemoryCardStore::new();
        for name in ["a", "b", "c"] {
            store.create_card(card(name)).unwrap();
        }
        store.delete_card(2).unwrap();

        let names: Vec<_> = store
            .list_cards()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn clone_shares_storage() {
        let store = InMemoryCardStore::new();
        let clone = store.clone();

        let id = store.create_card(card("a")).unwrap();
        assert_eq!(clone.get_card(id).unwrap().name, "a");
        assert_eq!(clone.create_card(card("b")).unwrap(), 2);
    }
}
