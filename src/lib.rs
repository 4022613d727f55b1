//! orderkit: always-sorted and most-recently-used in-memory collections.
//!
//! - [`OrderedCollection`](collection::ordered::OrderedCollection) keeps its
//!   elements sorted on every insert, with optional duplicate rejection and
//!   reverse order.
//! - [`MruCollection`](collection::mru::MruCollection) keeps a bounded set of
//!   distinct items ordered by recency and evicts the least recently used.
//!
//! Ordering and equality are pluggable through the strategies in [`traits`].
//!
//! ```
//! use orderkit::prelude::*;
//!
//! let mut heroes = OrderedCollection::new();
//! heroes.try_extend(["Thor", "Hawkeye", "Ironman"]).unwrap();
//! assert_eq!(heroes.as_slice(), &["Hawkeye", "Ironman", "Thor"]);
//!
//! let mut recent = MruCollection::new(2);
//! recent.extend(["a", "b", "c"]);
//! assert_eq!(recent.as_slice(), &["c", "b"]);
//! ```

pub mod collection;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
