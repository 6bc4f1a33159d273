use std::{error::Error, fmt};

/// Errors returned by the fallible operations of
/// [`ChainedMap`](crate::ChainedMap).
///
/// Lookups that treat absence as a normal outcome (`get`, `contains_key`)
/// never produce these; only operations whose contract requires a present
/// key or valid arguments do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// The requested key has no entry in the map.
    KeyNotFound,
    /// The key and value sequences handed to
    /// [`from_keys_values`](crate::ChainedMap::from_keys_values) differ in
    /// length.
    LengthMismatch {
        /// Number of keys provided.
        keys: usize,
        /// Number of values provided.
        values: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyNotFound => write!(f, "key not found in map"),
            Self::LengthMismatch { keys, values } => {
                write!(f, "got {keys} keys but {values} values")
            }
        }
    }
}

impl Error for MapError {}
