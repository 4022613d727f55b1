//! # Ordering Strategies and Sequence Views
//!
//! The collections in this crate never hard-code how elements are compared.
//! Ordering and equality are pluggable strategy values stored in each
//! collection, with zero-sized defaults for types that carry their own
//! `Ord` / `Eq` implementation.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────┐        ┌───────────────────────────────┐
//!   │        Comparer<T>            │        │        Equivalence<T>         │
//!   │  compare(&T, &T) → Ordering   │        │  equivalent(&T, &T) → bool    │
//!   └──────────────┬────────────────┘        └──────────────┬────────────────┘
//!                  │                                        │
//!      ┌───────────┼───────────────┐              ┌─────────┴──────────┐
//!      ▼           ▼               ▼              ▼                    ▼
//!  NaturalOrder  FnComparer<F>  CaseInsensitive  NaturalEq       FnEquivalence<F>
//!  (T: Ord)      (closure)      (AsRef<str>)     (T: Eq)         (closure)
//!
//!   Consumers:
//!     OrderedCollection<T, C: Comparer<T>>   MruCollection<T, E: Equivalence<T>>
//!                    └──────────── SequenceView<T> ────────────┘
//! ```
//!
//! ## Capability Checks
//!
//! A type without a natural order cannot reach `OrderedCollection::new()`:
//! the constructor only exists for `T: Ord`. Such types go through
//! `with_comparer` / `with_comparison` instead. The same holds for
//! `MruCollection::new()` and `T: Eq`.
//!
//! ## Example Usage
//!
//! ```
//! use std::cmp::Ordering;
//! use orderkit::traits::{CaseInsensitive, Comparer, Equivalence, FnEquivalence, NaturalOrder};
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(CaseInsensitive.compare(&"thor", &"THOR"), Ordering::Equal);
//!
//! let same_len = FnEquivalence::new(|a: &&str, b: &&str| a.len() == b.len());
//! assert!(same_len.equivalent(&"abc", &"xyz"));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// Total-order strategy used by ordered collections.
///
/// Implementations must be consistent: `compare(a, b)` and `compare(b, a)`
/// are opposite, and equality is transitive. Sortedness of a collection is
/// only as good as its comparer.
pub trait Comparer<T: ?Sized> {
    /// Compares two elements.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Equivalence strategy used by MRU collections for de-duplication.
pub trait Equivalence<T: ?Sized> {
    /// Returns `true` if `a` and `b` denote the same entry.
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

/// Read-only view shared by every collection in this crate.
///
/// None of these methods change element order, whatever the collection's
/// promotion rules.
///
/// # Example
///
/// ```
/// use orderkit::collection::ordered::OrderedCollection;
/// use orderkit::traits::SequenceView;
///
/// fn head<T, S: SequenceView<T>>(seq: &S) -> Option<&T> {
///     seq.peek(0)
/// }
///
/// let mut c = OrderedCollection::new();
/// c.insert(3).unwrap();
/// c.insert(1).unwrap();
/// assert_eq!(head(&c), Some(&1));
/// ```
pub trait SequenceView<T> {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index` without side effects.
    fn peek(&self, index: usize) -> Option<&T>;

    /// Returns all elements in their current order.
    fn as_slice(&self) -> &[T];
}

// ---------------------------------------------------------------------------
// Comparers
// ---------------------------------------------------------------------------

/// Compares through the element type's own [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparer<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Adapts a two-argument comparison function into a [`Comparer`].
#[derive(Clone, Copy)]
pub struct FnComparer<F>(F);

impl<F> FnComparer<F> {
    /// Wraps `compare` as a comparer.
    #[inline]
    pub fn new(compare: F) -> Self {
        Self(compare)
    }
}

impl<T: ?Sized, F> Comparer<T> for FnComparer<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnComparer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnComparer(..)")
    }
}

/// Orders strings by their Unicode lowercase form, without allocating.
///
/// `"thor"`, `"Thor"` and `"THOR"` compare equal, so an ordered collection
/// that disallows duplicates accepts only one of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

impl<T: AsRef<str> + ?Sized> Comparer<T> for CaseInsensitive {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let a = a.as_ref().chars().flat_map(char::to_lowercase);
        let b = b.as_ref().chars().flat_map(char::to_lowercase);
        a.cmp(b)
    }
}

// ---------------------------------------------------------------------------
// Equivalences
// ---------------------------------------------------------------------------

/// Compares through the element type's own [`Eq`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalEq;

impl<T: Eq + ?Sized> Equivalence<T> for NaturalEq {
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Adapts a two-argument predicate into an [`Equivalence`].
#[derive(Clone, Copy)]
pub struct FnEquivalence<F>(F);

impl<F> FnEquivalence<F> {
    /// Wraps `eq` as an equivalence.
    #[inline]
    pub fn new(eq: F) -> Self {
        Self(eq)
    }
}

impl<T: ?Sized, F> Equivalence<T> for FnEquivalence<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnEquivalence<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnEquivalence(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order_matches_ord() {
        assert_eq!(NaturalOrder.compare(&"a", &"b"), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&5, &5), Ordering::Equal);
        assert_eq!(NaturalOrder.compare(&9u8, &1u8), Ordering::Greater);
    }

    #[test]
    fn fn_comparer_delegates() {
        let by_len = FnComparer::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
        assert_eq!(by_len.compare(&"xx", &"y"), Ordering::Greater);
        assert_eq!(by_len.compare(&"ab", &"cd"), Ordering::Equal);
    }

    #[test]
    fn case_insensitive_ignores_case() {
        assert_eq!(CaseInsensitive.compare(&"Hulk", &"hULK"), Ordering::Equal);
        assert_eq!(CaseInsensitive.compare(&"ant-man", &"Black Panther"), Ordering::Less);
        assert_eq!(
            CaseInsensitive.compare(&String::from("Wasp"), &String::from("vision")),
            Ordering::Greater
        );
    }

    #[test]
    fn case_insensitive_prefix_sorts_first() {
        assert_eq!(CaseInsensitive.compare(&"Hawk", &"hawkeye"), Ordering::Less);
    }

    #[test]
    fn natural_eq_matches_eq() {
        assert!(NaturalEq.equivalent(&"June", &"June"));
        assert!(!NaturalEq.equivalent(&"June", &"July"));
    }

    #[test]
    fn fn_equivalence_delegates() {
        let mod10 = FnEquivalence::new(|a: &u32, b: &u32| a % 10 == b % 10);
        assert!(mod10.equivalent(&3, &13));
        assert!(!mod10.equivalent(&3, &14));
    }

    #[test]
    fn debug_for_closure_wrappers() {
        let c = FnComparer::new(|a: &i32, b: &i32| a.cmp(b));
        let e = FnEquivalence::new(|a: &i32, b: &i32| a == b);
        assert_eq!(format!("{:?}", c), "FnComparer(..)");
        assert_eq!(format!("{:?}", e), "FnEquivalence(..)");
    }
}
