//! # lrukv
//!
//! Fixed-capacity in-memory string key/value cache with LRU eviction.
//!
//! ## Architecture
//! - **Hash index**: djb2 buckets with chained collisions (O(1) average lookup)
//! - **Recency list**: doubly-linked list for promotion and eviction (O(1))
//! - **Arena**: every entry is one node linked into both structures by handle
//!
//! ```
//! use lrukv::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.set("a", "1")?;
//! cache.set("b", "2")?;
//! cache.set("c", "3")?; // evicts "a"
//!
//! assert_eq!(cache.get("a"), None);
//! assert_eq!(cache.get("b"), Some("2"));
//! assert_eq!(cache.stats().hits(), 1);
//! # Ok::<(), lrukv::Error>(())
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod entry;
mod error;
mod hash;
mod index;
mod lru;
mod node;
mod recency;
mod stats;

pub use cache::SharedCache;
pub use config::{CacheConfig, CAPACITY_ENV, DEFAULT_CAPACITY};
pub use entry::KeyValueEntry;
pub use error::{Error, Result};
pub use hash::{djb2, index_for};
pub use lru::{Iter, LruCache};
pub use stats::CacheStats;
