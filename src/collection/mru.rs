//! Bounded most-recently-used collection.
//!
//! Keeps up to `capacity` distinct items ordered by recency: index 0 is the
//! most recently used item, the last index the least recently used. When an
//! insert overflows the capacity, the tail is evicted.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                     MruCollection<T, E> Layout                       │
//! │                                                                      │
//! │   capacity: usize (> 0)     equality: E     triggers: MruTriggers    │
//! │                                                                      │
//! │   items: Vec<T>                                                      │
//! │   ┌──────────┬──────────┬──────────┬──────────┐                      │
//! │   │ [0]      │ [1]      │ [2]      │ [3]      │                      │
//! │   │ December │ November │ October  │ ...      │                      │
//! │   │ MRU      │          │          │ LRU      │                      │
//! │   └──────────┴──────────┴──────────┴──────────┘                      │
//! │        ▲                                  │                          │
//! │        │ insert / promote                 ▼ evict when len > capacity│
//! └──────────────────────────────────────────────────────────────────────┘
//!
//! Insert Flow
//! ───────────
//!
//!   insert(item):
//!     1. Scan for an equivalent item (equality strategy)
//!     2. Found  → remove it, place the new item at [0]
//!        Absent → place at [0]
//!     3. Evict from the tail while len > capacity
//!
//! Access Flow
//! ───────────
//!
//!   peek(i)  → never reorders
//!   get(i)   → moves [i] to [0] only if ON_ACCESS is set
//! ```
//!
//! ## Triggers
//!
//! | Trigger     | Operation           | Default | Gates promotion |
//! |-------------|---------------------|---------|-----------------|
//! | `ON_INSERT` | `insert`            | on      | no, always      |
//! | `ON_SET`    | `set`               | on      | no, always      |
//! | `ON_ACCESS` | `get` / `get_item`  | off     | yes             |
//!
//! `insert` and `set` always move the item to index 0, whether it was new
//! or already present. `ON_INSERT` and `ON_SET` are reported by
//! [`MruCollection::triggers`] but there is no non-promoting write. Only
//! reads are configurable.
//!
//! ## Example Usage
//!
//! ```
//! use orderkit::collection::mru::{MruCollection, MruTriggers};
//!
//! let mut recent = MruCollection::new(3);
//! recent.insert("a.txt");
//! recent.insert("b.txt");
//! recent.insert("c.txt");
//! assert_eq!(recent.most_recent(), Some(&"c.txt"));
//!
//! // Re-inserting moves to the front instead of duplicating
//! recent.insert("a.txt");
//! assert_eq!(recent.as_slice(), &["a.txt", "c.txt", "b.txt"]);
//!
//! // Overflow evicts the least recently used
//! assert_eq!(recent.insert("d.txt"), Some("b.txt"));
//!
//! // Reads only promote when asked to
//! let mut lookups = MruCollection::builder(3)
//!     .triggers(MruTriggers::all())
//!     .initial_data(["x", "y", "z"])
//!     .build();
//! assert_eq!(lookups.get(2), Some(&"x"));
//! assert_eq!(lookups.most_recent(), Some(&"x"));
//! ```
//!
//! ## Thread Safety
//!
//! Not synchronized. Wrap in a lock for shared mutation.

use std::fmt;

use bitflags::bitflags;

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::MruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::MruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{MetricsSnapshotProvider, MruMetricsReadRecorder, MruMetricsRecorder};
use crate::error::{ConfigError, InvariantError};
use crate::traits::{Equivalence, FnEquivalence, NaturalEq, SequenceView};

bitflags! {
    /// Operations that move an existing item to the most-recent position.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MruTriggers: u8 {
        /// `insert` promotes. Always in effect.
        const ON_INSERT = 0b001;
        /// `set` promotes. Always in effect.
        const ON_SET = 0b010;
        /// Indexed or lookup reads through `get` / `get_item` promote.
        const ON_ACCESS = 0b100;
    }
}

impl Default for MruTriggers {
    fn default() -> Self {
        Self::ON_INSERT | Self::ON_SET
    }
}

/// Construction options for an [`MruCollection`].
///
/// # Example
///
/// ```
/// use orderkit::collection::mru::{MruCollection, MruOptions, MruTriggers};
///
/// let opts = MruOptions::default()
///     .with_triggers(MruTriggers::all())
///     .with_initial_data(vec![1, 2, 3]);
/// let c = MruCollection::try_with_options(10, opts).unwrap();
/// assert_eq!(c.as_slice(), &[3, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct MruOptions<T, E = NaturalEq> {
    /// Decides when two items are the same entry.
    pub equality: E,
    /// Items inserted, in order, right after construction.
    pub initial_data: Vec<T>,
    /// Operations that promote an existing item.
    pub triggers: MruTriggers,
}

impl<T, E> MruOptions<T, E> {
    /// Creates options with the given equality and default triggers.
    pub fn new(equality: E) -> Self {
        Self {
            equality,
            initial_data: Vec::new(),
            triggers: MruTriggers::default(),
        }
    }

    /// Replaces the promotion triggers.
    pub fn with_triggers(mut self, triggers: MruTriggers) -> Self {
        self.triggers = triggers;
        self
    }

    /// Replaces the seed items.
    pub fn with_initial_data(mut self, data: Vec<T>) -> Self {
        self.initial_data = data;
        self
    }
}

impl<T> Default for MruOptions<T, NaturalEq> {
    fn default() -> Self {
        Self::new(NaturalEq)
    }
}

/// Builder for [`MruCollection`].
///
/// # Example
///
/// ```
/// use orderkit::collection::mru::{MruCollection, MruTriggers};
///
/// #[derive(Debug)]
/// struct Doc {
///     path: &'static str,
///     rev: u32,
/// }
///
/// let mut docs = MruCollection::builder(2)
///     .equality_fn(|a: &Doc, b: &Doc| a.path == b.path)
///     .triggers(MruTriggers::ON_INSERT)
///     .try_build()
///     .unwrap();
///
/// docs.insert(Doc { path: "/a", rev: 1 });
/// docs.insert(Doc { path: "/a", rev: 2 });
/// assert_eq!(docs.len(), 1);
/// assert_eq!(docs.most_recent().map(|d| d.rev), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct MruCollectionBuilder<T, E = NaturalEq> {
    capacity: usize,
    options: MruOptions<T, E>,
}

impl<T, E> MruCollectionBuilder<T, E> {
    /// Sets the promotion triggers.
    pub fn triggers(mut self, triggers: MruTriggers) -> Self {
        self.options.triggers = triggers;
        self
    }

    /// Seeds the collection; items are inserted in iteration order.
    pub fn initial_data<I>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.options.initial_data = data.into_iter().collect();
        self
    }

    /// Switches to a custom equality strategy.
    pub fn equality<E2>(self, equality: E2) -> MruCollectionBuilder<T, E2> {
        MruCollectionBuilder {
            capacity: self.capacity,
            options: MruOptions {
                equality,
                initial_data: self.options.initial_data,
                triggers: self.options.triggers,
            },
        }
    }

    /// Switches to an ad hoc equality predicate.
    pub fn equality_fn<F>(self, eq: F) -> MruCollectionBuilder<T, FnEquivalence<F>>
    where
        F: Fn(&T, &T) -> bool,
    {
        self.equality(FnEquivalence::new(eq))
    }
}

impl<T, E> MruCollectionBuilder<T, E>
where
    E: Equivalence<T>,
{
    /// Builds the collection.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero. For a non-panicking alternative, use
    /// [`try_build`](Self::try_build).
    pub fn build(self) -> MruCollection<T, E> {
        match self.try_build() {
            Ok(collection) => collection,
            Err(e) => panic!("{}", e),
        }
    }

    /// Builds the collection, returning an error on invalid parameters
    /// instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is zero.
    pub fn try_build(self) -> Result<MruCollection<T, E>, ConfigError> {
        MruCollection::try_with_options(self.capacity, self.options)
    }
}

/// Bounded collection ordered from most to least recently used.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `E`: Equality strategy, [`NaturalEq`] (requires `T: Eq`) by default
pub struct MruCollection<T, E = NaturalEq> {
    items: Vec<T>,
    capacity: usize,
    equality: E,
    triggers: MruTriggers,
    #[cfg(feature = "metrics")]
    metrics: MruMetrics,
}

impl<T> MruCollection<T, NaturalEq> {
    /// Starts a builder with the given capacity and default options.
    pub fn builder(capacity: usize) -> MruCollectionBuilder<T, NaturalEq> {
        MruCollectionBuilder {
            capacity,
            options: MruOptions::default(),
        }
    }
}

impl<T: Eq> MruCollection<T, NaturalEq> {
    /// Creates an empty collection compared through `T`'s [`Eq`].
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. See [`try_new`](Self::try_new).
    ///
    /// # Example
    ///
    /// ```
    /// use orderkit::collection::mru::MruCollection;
    ///
    /// let c: MruCollection<String> = MruCollection::new(12);
    /// assert_eq!(c.capacity(), 12);
    /// assert!(c.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(collection) => collection,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates an empty collection, rejecting a zero capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::try_with_options(capacity, MruOptions::default())
    }
}

impl<T, E> MruCollection<T, E>
where
    E: Equivalence<T>,
{
    /// Creates a collection from explicit options, seeding it with
    /// `options.initial_data` through [`insert`](Self::insert).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_with_options(capacity: usize, options: MruOptions<T, E>) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than zero"));
        }

        let MruOptions {
            equality,
            initial_data,
            triggers,
        } = options;

        let mut collection = Self {
            items: Vec::with_capacity(capacity.min(initial_data.len())),
            capacity,
            equality,
            triggers,
            #[cfg(feature = "metrics")]
            metrics: MruMetrics::default(),
        };
        for item in initial_data {
            collection.insert(item);
        }
        Ok(collection)
    }

    /// Returns the index of the item equivalent to `item`.
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items
            .iter()
            .position(|existing| self.equality.equivalent(item, existing))
    }

    /// Returns `true` if an equivalent item is stored.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Records `item` as used.
    ///
    /// An equivalent stored item is removed and `item` takes index 0, as
    /// does a new item. This happens whatever the triggers are.
    ///
    /// Returns the element that left the collection: either the replaced
    /// equivalent item or the least recently used item evicted to make room.
    ///
    /// # Example
    ///
    /// ```
    /// use orderkit::collection::mru::MruCollection;
    ///
    /// let mut c = MruCollection::new(2);
    /// assert_eq!(c.insert(1), None);
    /// assert_eq!(c.insert(2), None);
    /// assert_eq!(c.insert(1), Some(1));
    /// assert_eq!(c.insert(3), Some(2));
    /// assert_eq!(c.as_slice(), &[3, 1]);
    /// ```
    pub fn insert(&mut self, item: T) -> Option<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();
        self.place(item)
    }

    /// Replace-by-index entry point. The index is ignored: position is
    /// always derived from recency, so this is [`insert`](Self::insert)
    /// counted as a set.
    pub fn set(&mut self, _index: usize, item: T) -> Option<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_set_call();
        self.place(item)
    }

    fn place(&mut self, item: T) -> Option<T> {
        if let Some(index) = self.position(&item) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let old = self.items.remove(index);
            self.items.insert(0, item);
            if index > 0 {
                #[cfg(feature = "metrics")]
                self.metrics.record_promotion();
                tracing::trace!(from = index, "promoted existing item");
            }
            return Some(old);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        self.items.insert(0, item);
        self.evict_excess().pop()
    }

    /// Evicts from the tail until `len <= capacity`, most recent first.
    fn evict_excess(&mut self) -> Vec<T> {
        if self.items.len() <= self.capacity {
            return Vec::new();
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        let evicted = self.items.split_off(self.capacity);

        #[cfg(feature = "metrics")]
        evicted.iter().for_each(|_| self.metrics.record_evicted_entry());

        tracing::trace!(
            evicted = evicted.len(),
            capacity = self.capacity,
            "evicted least recently used items"
        );
        evicted
    }

    /// Reads the item at `index`, moving it to the front if
    /// [`MruTriggers::ON_ACCESS`] is set.
    ///
    /// # Example
    ///
    /// ```
    /// use orderkit::collection::mru::{MruCollection, MruTriggers};
    ///
    /// let mut plain = MruCollection::builder(3).initial_data([1, 2, 3]).build();
    /// assert_eq!(plain.get(2), Some(&1));
    /// assert_eq!(plain.most_recent(), Some(&3));
    ///
    /// let mut eager = MruCollection::builder(3)
    ///     .initial_data([1, 2, 3])
    ///     .triggers(MruTriggers::ON_ACCESS)
    ///     .build();
    /// assert_eq!(eager.get(2), Some(&1));
    /// assert_eq!(eager.most_recent(), Some(&1));
    /// ```
    pub fn get(&mut self, index: usize) -> Option<&T> {
        if index >= self.items.len() {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        if index > 0 && self.triggers.contains(MruTriggers::ON_ACCESS) {
            #[cfg(feature = "metrics")]
            self.metrics.record_promotion();
            tracing::trace!(from = index, "promoted accessed item");
            let item = self.items.remove(index);
            self.items.insert(0, item);
            return self.items.first();
        }
        self.items.get(index)
    }

    /// Looks up the item equivalent to `item`, moving it to the front if
    /// [`MruTriggers::ON_ACCESS`] is set.
    pub fn get_item(&mut self, item: &T) -> Option<&T> {
        match self.position(item) {
            Some(index) => self.get(index),
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                None
            },
        }
    }

    /// Removes the item equivalent to `item` and returns it.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let index = self.position(item)?;
        self.remove_at(index)
    }

    /// Changes the capacity, evicting from the tail if it shrank.
    ///
    /// Returns the evicted items, most recent first. Growing the capacity
    /// never brings anything back.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero; nothing changes.
    ///
    /// # Example
    ///
    /// ```
    /// use orderkit::collection::mru::MruCollection;
    ///
    /// let mut c = MruCollection::builder(5).initial_data(1..=5).build();
    /// assert_eq!(c.set_capacity(3).unwrap(), vec![2, 1]);
    /// assert_eq!(c.as_slice(), &[5, 4, 3]);
    ///
    /// assert!(c.set_capacity(10).unwrap().is_empty());
    /// assert_eq!(c.len(), 3);
    /// assert!(c.set_capacity(0).is_err());
    /// ```
    pub fn set_capacity(&mut self, capacity: usize) -> Result<Vec<T>, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than zero"));
        }
        tracing::debug!(from = self.capacity, to = capacity, "mru capacity changed");
        self.capacity = capacity;
        Ok(self.evict_excess())
    }

    /// Validates the capacity bound and uniqueness of stored items.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.capacity == 0 {
            return Err(InvariantError::new("capacity is zero"));
        }
        if self.items.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.items.len(),
                self.capacity
            )));
        }
        for (i, a) in self.items.iter().enumerate() {
            if let Some(offset) = self.items[i + 1..]
                .iter()
                .position(|b| self.equality.equivalent(a, b))
            {
                return Err(InvariantError::new(format!(
                    "items at {} and {} are equivalent",
                    i,
                    i + 1 + offset
                )));
            }
        }
        Ok(())
    }
}

impl<T, E> MruCollection<T, E> {
    /// Reads the item at `index` without changing its position.
    pub fn peek(&self, index: usize) -> Option<&T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();
        let found = self.items.get(index);
        #[cfg(feature = "metrics")]
        found.inspect(|_| self.metrics.record_peek_found());
        found
    }

    /// Returns the most recently used item.
    #[inline]
    pub fn most_recent(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the least recently used item, next in line for eviction.
    #[inline]
    pub fn least_recent(&self) -> Option<&T> {
        self.items.last()
    }

    /// Removes and returns the least recently used item.
    #[inline]
    pub fn pop_least_recent(&mut self) -> Option<T> {
        let item = self.items.pop()?;
        #[cfg(feature = "metrics")]
        self.metrics.record_remove();
        Some(item)
    }

    /// Removes and returns the item at `index`, if any.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_remove();
        Some(self.items.remove(index))
    }

    /// Returns the number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the maximum number of items.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the promotion triggers.
    #[inline]
    pub fn triggers(&self) -> MruTriggers {
        self.triggers
    }

    /// Returns the equality strategy.
    #[inline]
    pub fn equality(&self) -> &E {
        &self.equality
    }

    /// Iterates from most to least recently used, without promoting.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the items from most to least recently used.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Removes all items.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        self.items.clear();
    }

    /// Consumes the collection, returning items most recent first.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T, E> SequenceView<T> for MruCollection<T, E> {
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn peek(&self, index: usize) -> Option<&T> {
        MruCollection::peek(self, index)
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T, E> Extend<T> for MruCollection<T, E>
where
    E: Equivalence<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T, E> IntoIterator for &'a MruCollection<T, E> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Clone, E: Clone> Clone for MruCollection<T, E> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            capacity: self.capacity,
            equality: self.equality.clone(),
            triggers: self.triggers,
            #[cfg(feature = "metrics")]
            metrics: self.metrics.clone(),
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for MruCollection<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MruCollection")
            .field("capacity", &self.capacity)
            .field("triggers", &self.triggers)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "metrics")]
impl<T, E> MruCollection<T, E> {
    /// Returns a snapshot of collection metrics.
    pub fn metrics_snapshot(&self) -> MruMetricsSnapshot {
        MruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            set_calls: self.metrics.set_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            promotions: self.metrics.promotions,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            clears: self.metrics.clears,
            removals: self.metrics.removals,
            peek_calls: self.metrics.peek_calls.get(),
            peek_found: self.metrics.peek_found.get(),
            len: self.items.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<T, E> MetricsSnapshotProvider<MruMetricsSnapshot> for MruCollection<T, E> {
    fn snapshot(&self) -> MruMetricsSnapshot {
        self.metrics_snapshot()
    }
}
