//! Always-sorted collection.
//!
//! Keeps its elements in comparer order after every mutation. Elements are
//! stored contiguously, so index reads are O(1) and inserts shift the tail.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                    OrderedCollection<T, C> Layout                    │
//! │                                                                      │
//! │   comparer: C               options: OrderedOptions                  │
//! │   (NaturalOrder,            allow_duplicates / reverse_order /       │
//! │    FnComparer, ...)         linear_search_threshold                  │
//! │                                                                      │
//! │   items: Vec<T>                                                      │
//! │   ┌────────┬────────┬────────┬────────┬────────┐                     │
//! │   │ [0]    │ [1]    │ [2]    │ [3]    │ [4]    │  sorted, ascending  │
//! │   │ Hawkeye│ Ironman│ Spider │ Thor   │ Wasp   │  unless reversed    │
//! │   └────────┴────────┴────────┴────────┴────────┘                     │
//! └──────────────────────────────────────────────────────────────────────┘
//!
//! Insertion Index Search
//! ──────────────────────
//!
//!   len == 0                   → 0
//!   len <= threshold (10)      → linear scan, left to right
//!   len >  threshold           → binary search (lower bound)
//!
//!   Both paths return the first position whose element does not sort
//!   before the item. If that element compares equal:
//!     allow_duplicates  → insert in front of the run of equals
//!     otherwise         → rejected (DuplicateError)
//! ```
//!
//! ## Operations
//!
//! | Operation          | Time       | Notes                                   |
//! |--------------------|------------|-----------------------------------------|
//! | `insert`           | O(n)       | O(log n) search + shift                 |
//! | `set`              | O(n)       | Remove + insert, restored on rejection  |
//! | `insertion_index`  | O(log n)*  | *Linear below the threshold             |
//! | `index_of`         | O(log n)*  | First equal element                     |
//! | `get` / `[i]`      | O(1)       |                                         |
//! | `remove_at`        | O(n)       | Shift                                   |
//!
//! ## Example Usage
//!
//! ```
//! use orderkit::collection::ordered::{OrderedCollection, OrderedOptions};
//!
//! let mut heroes = OrderedCollection::new();
//! heroes.insert("Spiderman").unwrap();
//! heroes.insert("Ironman").unwrap();
//! heroes.insert("Thor").unwrap();
//! heroes.insert("Hawkeye").unwrap();
//! assert_eq!(heroes.as_slice(), &["Hawkeye", "Ironman", "Spiderman", "Thor"]);
//!
//! // Duplicates are rejected and the collection is unchanged
//! assert!(heroes.insert("Thor").is_err());
//! assert_eq!(heroes.len(), 4);
//!
//! // Descending order with duplicates
//! let mut scores = OrderedCollection::with_options(OrderedOptions::new(true, true));
//! for s in [3, 9, 3, 1] {
//!     scores.insert(s).unwrap();
//! }
//! assert_eq!(scores.as_slice(), &[9, 3, 3, 1]);
//! ```
//!
//! ## Thread Safety
//!
//! Not synchronized. Wrap in a lock for shared mutation.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::OrderedMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::OrderedMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    MetricsSnapshotProvider, OrderedMetricsReadRecorder, OrderedMetricsRecorder,
};
use crate::error::{DuplicateError, InvariantError, RejectedOp};
use crate::traits::{Comparer, FnComparer, NaturalOrder, SequenceView};

/// Collection size up to which the insertion index is found by linear scan.
pub const DEFAULT_LINEAR_SEARCH_THRESHOLD: usize = 10;

/// Options controlling how an [`OrderedCollection`] orders and admits items.
///
/// # Example
///
/// ```
/// use orderkit::collection::ordered::OrderedOptions;
///
/// let opts = OrderedOptions::new(true, false).with_linear_search_threshold(32);
/// assert!(opts.allow_duplicates);
/// assert!(!opts.reverse_order);
/// assert_eq!(opts.linear_search_threshold, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedOptions {
    /// Admit items that compare equal to a stored element.
    pub allow_duplicates: bool,
    /// Keep the collection in descending comparer order.
    pub reverse_order: bool,
    /// Largest length at which the linear search path is used.
    pub linear_search_threshold: usize,
}

impl OrderedOptions {
    /// Creates options with the default search threshold.
    #[inline]
    pub const fn new(allow_duplicates: bool, reverse_order: bool) -> Self {
        Self {
            allow_duplicates,
            reverse_order,
            linear_search_threshold: DEFAULT_LINEAR_SEARCH_THRESHOLD,
        }
    }

    /// Sets the linear/binary search crossover.
    ///
    /// Only affects speed; the resulting order is identical for any value.
    #[inline]
    pub const fn with_linear_search_threshold(mut self, threshold: usize) -> Self {
        self.linear_search_threshold = threshold;
        self
    }
}

impl Default for OrderedOptions {
    fn default() -> Self {
        Self::new(false, false)
    }
}

/// Outcome of the insertion index search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// No equal element; insert here.
    Vacant(usize),
    /// An equal element sits here (first of its run).
    Occupied(usize),
}

/// Collection that keeps its items sorted at all times.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `C`: Ordering strategy, [`NaturalOrder`] (requires `T: Ord`) by default
///
/// # Example
///
/// ```
/// use orderkit::collection::ordered::{OrderedCollection, OrderedOptions};
/// use orderkit::traits::CaseInsensitive;
///
/// let mut names = OrderedCollection::with_comparer(CaseInsensitive, OrderedOptions::default());
/// names.insert("hulk").unwrap();
/// names.insert("Ant-Man").unwrap();
/// assert!(names.insert("HULK").is_err());
/// assert_eq!(names.as_slice(), &["Ant-Man", "hulk"]);
/// ```
pub struct OrderedCollection<T, C = NaturalOrder> {
    items: Vec<T>,
    comparer: C,
    options: OrderedOptions,
    #[cfg(feature = "metrics")]
    metrics: OrderedMetrics,
}

impl<T: Ord> OrderedCollection<T, NaturalOrder> {
    /// Creates an empty ascending collection without duplicates, ordered by
    /// `T`'s own [`Ord`] implementation.
    ///
    /// # Example
    ///
    /// ```
    /// use orderkit::collection::ordered::OrderedCollection;
    ///
    /// let c: OrderedCollection<String> = OrderedCollection::new();
    /// assert!(c.is_empty());
    /// assert!(!c.allow_duplicates());
    /// assert!(!c.reverse_order());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_options(OrderedOptions::default())
    }

    /// Creates an empty collection ordered by `T`'s [`Ord`] implementation.
    #[inline]
    pub fn with_options(options: OrderedOptions) -> Self {
        Self::with_comparer(NaturalOrder, options)
    }
}

impl<T: Ord> Default for OrderedCollection<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> OrderedCollection<T, FnComparer<F>>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty collection ordered by an ad hoc comparison function.
    ///
    /// # Example
    ///
    /// ```
    /// use orderkit::collection::ordered::{OrderedCollection, OrderedOptions};
    ///
    /// let mut by_len = OrderedCollection::with_comparison(
    ///     |a: &&str, b: &&str| a.len().cmp(&b.len()),
    ///     OrderedOptions::default(),
    /// );
    /// by_len.insert("Vision").unwrap();
    /// by_len.insert("Thor").unwrap();
    /// assert_eq!(by_len.first(), Some(&"Thor"));
    /// ```
    #[inline]
    pub fn with_comparison(compare: F, options: OrderedOptions) -> Self {
        Self::with_comparer(FnComparer::new(compare), options)
    }
}

impl<T, C> OrderedCollection<T, C>
where
    C: Comparer<T>,
{
    /// Creates an empty collection ordered by `comparer`.
    #[inline]
    pub fn with_comparer(comparer: C, options: OrderedOptions) -> Self {
        Self {
            items: Vec::new(),
            comparer,
            options,
            #[cfg(feature = "metrics")]
            metrics: OrderedMetrics::default(),
        }
    }

    /// Returns `true` if equal items may be stored side by side.
    #[inline]
    pub fn allow_duplicates(&self) -> bool {
        self.options.allow_duplicates
    }

    /// Returns `true` if the collection is kept in descending order.
    #[inline]
    pub fn reverse_order(&self) -> bool {
        self.options.reverse_order
    }

    /// Returns the configured options.
    #[inline]
    pub fn options(&self) -> &OrderedOptions {
        &self.options
    }

    /// Returns the ordering strategy.
    #[inline]
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Compares through the comparer, honoring `reverse_order`.
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let ord = self.comparer.compare(a, b);
        if self.options.reverse_order {
            ord.reverse()
        } else {
            ord
        }
    }

    fn locate(&self, item: &T) -> Slot {
        if self.items.is_empty() {
            return Slot::Vacant(0);
        }
        if self.items.len() <= self.options.linear_search_threshold {
            #[cfg(feature = "metrics")]
            self.metrics.record_linear_search();
            self.locate_linear(item)
        } else {
            #[cfg(feature = "metrics")]
            self.metrics.record_binary_search();
            self.locate_binary(item)
        }
    }

    // Left-to-right scan for the first element that does not sort before
    // `item`.
    fn locate_linear(&self, item: &T) -> Slot {
        for (i, existing) in self.items.iter().enumerate() {
            match self.compare(existing, item) {
                Ordering::Less => {},
                Ordering::Equal => return Slot::Occupied(i),
                Ordering::Greater => return Slot::Vacant(i),
            }
        }
        Slot::Vacant(self.items.len())
    }

    // Lower-bound bisection over [lo, hi). Must land on the same index as
    // `locate_linear` for every input, including runs of equal elements.
    fn locate_binary(&self, item: &T) -> Slot {
        let mut lo = 0;
        let mut hi = self.items.len();
        let mut found = false;

        while lo < hi {
            let pivot = lo + (hi - lo) / 2;
            match self.compare(item, &self.items[pivot]) {
                Ordering::Less => hi = pivot,
                Ordering::Equal => {
                    // Without duplicates there is exactly one equal element.
                    if !self.options.allow_duplicates {
                        return Slot::Occupied(pivot);
                    }
                    found = true;
                    hi = pivot;
                },
                Ordering::Greater => lo = pivot + 1,
            }
        }

        if found {
            Slot::Occupied(lo)
        } else {
            Slot::Vacant(lo)
        }
    }

    /// Returns the index at which `item` would be inserted, or `None` if it
    /// would be rejected as a duplicate.
    ///
    /// # Example
    ///
    /// ```
    /// use orderkit::collection::ordered::OrderedCollection;
    ///
    /// let mut c = OrderedCollection::new();
    /// c.insert(10).unwrap();
    /// c.insert(30).unwrap();
    ///
    /// assert_eq!(c.insertion_index(&20), Some(1));
    /// assert_eq!(c.insertion_index(&40), Some(2));
    /// assert_eq!(c.insertion_index(&30), None);
    /// ```
    pub fn insertion_index(&self, item: &T) -> Option<usize> {
        match self.locate(item) {
            Slot::Vacant(index) => Some(index),
            Slot::Occupied(index) if self.options.allow_duplicates => Some(index),
            Slot::Occupied(_) => None,
        }
    }

    /// Inserts `item` at its sorted position and returns that position.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateError`] carrying `item` if duplicates are not
    /// allowed and an equal element is already stored. The collection is
    /// unchanged in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use orderkit::collection::ordered::OrderedCollection;
    ///
    /// let mut c = OrderedCollection::new();
    /// assert_eq!(c.insert("b").unwrap(), 0);
    /// assert_eq!(c.insert("a").unwrap(), 0);
    /// assert_eq!(c.insert("c").unwrap(), 2);
    /// assert_eq!(c.insert("a").unwrap_err().into_inner(), "a");
    /// ```
    pub fn insert(&mut self, item: T) -> Result<usize, DuplicateError<T>> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        match self.insertion_index(&item) {
            Some(index) => {
                self.items.insert(index, item);
                Ok(index)
            },
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_insert_rejected();
                tracing::debug!(len = self.items.len(), "rejected duplicate insert");
                Err(DuplicateError::new(item, RejectedOp::Insert))
            },
        }
    }

    /// Replaces the element at `index` with `item`, returning the old element.
    ///
    /// The new item lands wherever sort order puts it, which need not be
    /// `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateError`] carrying `item` if it collides with another
    /// stored element and duplicates are not allowed. The replaced element is
    /// put back where it was, so a rejected `set` leaves the collection
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use orderkit::collection::ordered::OrderedCollection;
    ///
    /// let mut c = OrderedCollection::new();
    /// for n in [10, 20, 30] {
    ///     c.insert(n).unwrap();
    /// }
    ///
    /// assert_eq!(c.set(0, 25).unwrap(), 10);
    /// assert_eq!(c.as_slice(), &[20, 25, 30]);
    ///
    /// assert!(c.set(0, 30).is_err());
    /// assert_eq!(c.as_slice(), &[20, 25, 30]);
    /// ```
    pub fn set(&mut self, index: usize, item: T) -> Result<T, DuplicateError<T>> {
        #[cfg(feature = "metrics")]
        self.metrics.record_set_call();

        let removed = self.items.remove(index);
        match self.insertion_index(&item) {
            Some(target) => {
                self.items.insert(target, item);
                Ok(removed)
            },
            None => {
                self.items.insert(index, removed);
                #[cfg(feature = "metrics")]
                self.metrics.record_set_rejected();
                tracing::debug!(index, len = self.items.len(), "rejected duplicate set");
                Err(DuplicateError::new(item, RejectedOp::Set))
            },
        }
    }

    /// Inserts every item from `iter` in order, stopping at the first
    /// rejected duplicate.
    ///
    /// Items inserted before the rejection stay in the collection.
    ///
    /// # Example
    ///
    /// ```
    /// use orderkit::collection::ordered::OrderedCollection;
    ///
    /// let mut c = OrderedCollection::new();
    /// c.try_extend(["Flash", "Batman", "Aquaman"]).unwrap();
    /// assert_eq!(c.as_slice(), &["Aquaman", "Batman", "Flash"]);
    ///
    /// let err = c.try_extend(["Superman", "Batman", "Zatanna"]).unwrap_err();
    /// assert_eq!(err.into_inner(), "Batman");
    /// assert!(c.contains(&"Superman"));
    /// assert!(!c.contains(&"Zatanna"));
    /// ```
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), DuplicateError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            self.insert(item)?;
        }
        Ok(())
    }

    /// Returns the index of the first element equal to `item`.
    ///
    /// # Example
    ///
    /// ```
    /// use orderkit::collection::ordered::OrderedCollection;
    ///
    /// let mut c = OrderedCollection::new();
    /// c.try_extend([5, 1, 3]).unwrap();
    /// assert_eq!(c.index_of(&3), Some(1));
    /// assert_eq!(c.index_of(&4), None);
    /// ```
    pub fn index_of(&self, item: &T) -> Option<usize> {
        match self.locate(item) {
            Slot::Occupied(index) => Some(index),
            Slot::Vacant(_) => None,
        }
    }

    /// Returns `true` if an element equal to `item` is stored.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item` and returns it.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let index = self.index_of(item)?;
        self.remove_at(index)
    }

    /// Removes and returns the element at `index`, if any.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_remove();
        Some(self.items.remove(index))
    }

    /// Validates the ordering and duplicate invariants.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] naming the first adjacent pair that is out
    /// of order, or that compares equal while duplicates are disallowed.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        for (i, pair) in self.items.windows(2).enumerate() {
            match self.compare(&pair[0], &pair[1]) {
                Ordering::Greater => {
                    return Err(InvariantError::new(format!(
                        "elements out of order at index {}",
                        i + 1
                    )));
                },
                Ordering::Equal if !self.options.allow_duplicates => {
                    return Err(InvariantError::new(format!(
                        "duplicate element at index {}",
                        i + 1
                    )));
                },
                _ => {},
            }
        }
        Ok(())
    }
}

impl<T, C> OrderedCollection<T, C> {
    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the first element in collection order.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the last element in collection order.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Iterates in collection order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the sorted elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        self.items.clear();
    }

    /// Consumes the collection, returning the sorted elements.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T, C> SequenceView<T> for OrderedCollection<T, C> {
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn peek(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T, C> Index<usize> for OrderedCollection<T, C> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedCollection<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, C> IntoIterator for OrderedCollection<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Clone, C: Clone> Clone for OrderedCollection<T, C> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            comparer: self.comparer.clone(),
            options: self.options,
            #[cfg(feature = "metrics")]
            metrics: self.metrics.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedCollection<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedCollection")
            .field("items", &self.items)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "metrics")]
impl<T, C> OrderedCollection<T, C> {
    /// Returns a snapshot of collection metrics.
    pub fn metrics_snapshot(&self) -> OrderedMetricsSnapshot {
        OrderedMetricsSnapshot {
            insert_calls: self.metrics.insert_calls,
            insert_rejected: self.metrics.insert_rejected,
            set_calls: self.metrics.set_calls,
            set_rejected: self.metrics.set_rejected,
            removals: self.metrics.removals,
            clears: self.metrics.clears,
            linear_searches: self.metrics.linear_searches.get(),
            binary_searches: self.metrics.binary_searches.get(),
            len: self.items.len(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<T, C> MetricsSnapshotProvider<OrderedMetricsSnapshot> for OrderedCollection<T, C> {
    fn snapshot(&self) -> OrderedMetricsSnapshot {
        self.metrics_snapshot()
    }
}
