//! CardStore - Abstract CRUD storage for canonical cards.

use crate::card::Card;
use crate::error::{CardId, StorageError};

/// Abstract CRUD storage for cards.
///
/// Identities are assigned by the store, never by the caller.
pub trait CardStore {
    /// Store a card under a fresh identity and return that identity.
    fn create_card(&self, card: Card) -> Result<CardId, StorageError>;

    /// Get a card by identity. Fails with `NotFound` if it is not held.
    fn get_card(&self, id: CardId) -> Result<Card, StorageError>;

    /// All held cards, in identity order.
    fn list_cards(&self) -> Result<Vec<Card>, StorageError>;

    /// Replace the card held under `id`, keeping the identity.
    fn update_card(&self, id: CardId, card: Card) -> Result<(), StorageError>;

    /// Remove the card held under `id`.
    fn delete_card(&self, id: CardId) -> Result<(), StorageError>;
}
