//! Persistent collections over a host key-value store.
//!
//! # Overview
//!
//! Collections that keep their bulk data in a flat, byte-addressed store
//! supplied by the surrounding host, holding only a small serializable handle
//! in memory:
//!
//! - [`LookupMap`]: O(1) point access under a fixed byte prefix.
//! - [`SortedMap`]: a counted, binary-searchable ordered map over two
//!   parallel storage regions.
//! - [`Vector`]: a growable list with ordinal-addressed slots.
//!
//! Every collection derives its storage keys from a caller-chosen prefix;
//! keeping prefixes distinct across collections is the caller's obligation.
//! Execution is single-threaded and run-to-completion: store calls are
//! synchronous, there are no locks, and there are no transactions. A failed
//! call partway through a multi-step mutation leaves whatever partial state
//! the failed step produced.
//!
//! # Example
//!
//! ```
//! use stowage_collections::{MemStore, SortedMap};
//!
//! let mut store = MemStore::new();
//! let mut scores = SortedMap::<u64, String>::new("scores");
//!
//! scores.insert(&mut store, &3, &"bronze".to_string()).unwrap();
//! scores.insert(&mut store, &1, &"gold".to_string()).unwrap();
//! assert_eq!(scores.keys(&store).unwrap(), vec![1, 3]);
//! assert_eq!(scores.min_key(&store).unwrap(), 1);
//! ```

pub mod error;
pub mod key;
pub mod lookup;
pub mod mem;
pub mod sorted;
pub mod store;
pub mod vector;

// Re-export main types and traits
pub use error::Error;
pub use key::Key;
pub use lookup::LookupMap;
pub use mem::MemStore;
pub use sorted::SortedMap;
pub use store::{Store, StoreError};
pub use vector::Vector;
