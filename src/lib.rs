//! # Chainmap
//!
//! A Rust implementation of a hash map built on separate chaining with
//! dynamic resizing.
//!
//! [`ChainedMap`] distributes entries over a power-of-two number of buckets;
//! keys that collide share one bucket's ordered entry list. The bucket array
//! doubles once the load factor climbs above 0.75 and halves once it falls
//! below 0.25 (never below 16 buckets), keeping operations amortized O(1)
//! across arbitrary insert/remove sequences.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::ChainedMap;
//!
//! // Create a new map
//! let mut map = ChainedMap::new();
//!
//! // Insert values; `insert` never overwrites an existing binding
//! assert!(map.insert("apple".to_string(), 1));
//! assert!(map.insert("banana".to_string(), 2));
//! assert!(!map.insert("apple".to_string(), 99));
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//! assert_eq!(map.at("apple"), Ok(&1));
//!
//! // Overwrite explicitly via `set`
//! assert_eq!(map.set("apple".to_string(), 10), Some(1));
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! assert!(map.remove("apple"));
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Construction from parallel sequences
//!
//! Building a map from separate key and value vectors uses assignment
//! semantics: a later duplicate key replaces the earlier value.
//!
//! ```rust
//! use chainmap::{ChainedMap, MapError};
//!
//! # fn main() -> Result<(), MapError> {
//! let map = ChainedMap::from_keys_values(
//!     vec!["a".to_string(), "b".to_string(), "a".to_string()],
//!     vec![1, 2, 3],
//! )?;
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.at("a"), Ok(&3));
//! assert_eq!(map.at("b"), Ok(&2));
//! # Ok(())
//! # }
//! ```
//!
//! ## Iteration
//!
//! Traversal is bucket-major and visits every entry exactly once. The
//! iterator borrows the map, so the compiler rejects structural mutation
//! while one is alive.
//!
//! ```rust
//! use chainmap::ChainedMap;
//!
//! let mut map = ChainedMap::new();
//! map.insert("a".to_string(), 1);
//! map.insert("b".to_string(), 2);
//!
//! let mut total = 0;
//! for (_key, value) in &map {
//!     total += value;
//! }
//! assert_eq!(total, 3);
//! ```

/// Module implementing the separate-chaining hash map and its resizer
mod chained_map;
/// Error kinds for fallible map operations
mod error;
/// Module implementing the borrowed entry iterator
mod iter;
/// Utility extension trait for the map
mod utils;

pub use chained_map::{ChainedMap, MIN_CAPACITY};
pub use error::MapError;
pub use iter::Iter;
pub use utils::MapExtensions;
