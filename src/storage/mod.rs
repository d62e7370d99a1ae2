//! Card storage.
//!
//! [`CardStore`] is the capability contract a storage backend implements.
//! [`InMemoryCardStore`] is the reference backend.
//!
//! ## Example
//!
//! ```
//! use fblthp_archive::{Card, CardStore, InMemoryCardStore};
//!
//! let store = InMemoryCardStore::new();
//! let id = store.create_card(Card { name: "Fblthp".into(), ..Card::default() })?;
//! assert_eq!(store.get_card(id)?.name, "Fblthp");
//! # Ok::<(), fblthp_archive::StorageError>(())
//! ```

mod counter;
mod in_memory;
mod store;

pub use counter::IdAllocator;
pub use in_memory::InMemoryCardStore;
pub use store::CardStore;
