//! Error types for the orderkit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when collection parameters are invalid
//!   (e.g. zero capacity for an MRU collection).
//! - [`DuplicateError`]: Returned when an ordered collection that disallows
//!   duplicates is handed an item that compares equal to a stored one. The
//!   rejected item travels back to the caller inside the error.
//! - [`InvariantError`]: Returned by `check_invariants` when an internal
//!   ordering or capacity invariant does not hold.
//!
//! ## Example Usage
//!
//! ```
//! use orderkit::collection::mru::MruCollection;
//! use orderkit::collection::ordered::OrderedCollection;
//! use orderkit::error::ConfigError;
//!
//! // Zero capacity is caught without panicking
//! let bad: Result<MruCollection<u32>, ConfigError> = MruCollection::try_new(0);
//! assert!(bad.is_err());
//!
//! // Duplicate inserts hand the item back
//! let mut heroes = OrderedCollection::new();
//! heroes.insert("Thor").unwrap();
//! let err = heroes.insert("Thor").unwrap_err();
//! assert_eq!(err.into_inner(), "Thor");
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal collection invariants are violated.
///
/// Produced by `check_invariants` methods (e.g.
/// [`OrderedCollection::check_invariants`](crate::collection::ordered::OrderedCollection::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when collection configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`MruCollection::try_new`](crate::collection::mru::MruCollection::try_new),
/// [`MruCollectionBuilder::try_build`](crate::collection::mru::MruCollectionBuilder::try_build)
/// and [`MruCollection::set_capacity`](crate::collection::mru::MruCollection::set_capacity).
///
/// # Example
///
/// ```
/// use orderkit::collection::mru::MruCollection;
///
/// let err = MruCollection::<u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// DuplicateError
// ---------------------------------------------------------------------------

/// Which operation an ordered collection rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectedOp {
    /// A new item was turned away by `insert`.
    Insert,
    /// The replacement passed to `set` was turned away.
    Set,
}

/// Error returned when an item compares equal to an element already stored
/// in an ordered collection that does not allow duplicates.
///
/// The collection is left exactly as it was before the call, and the
/// rejected item is returned through [`into_inner`](Self::into_inner).
#[derive(Clone, PartialEq, Eq)]
pub struct DuplicateError<T> {
    item: T,
    op: RejectedOp,
}

impl<T> DuplicateError<T> {
    #[inline]
    pub(crate) fn new(item: T, op: RejectedOp) -> Self {
        Self { item, op }
    }

    /// Returns the operation that was rejected.
    #[inline]
    pub fn op(&self) -> RejectedOp {
        self.op
    }

    /// Borrows the rejected item.
    #[inline]
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Consumes the error and returns the rejected item.
    #[inline]
    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> fmt::Debug for DuplicateError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DuplicateError")
            .field("op", &self.op)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for DuplicateError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            RejectedOp::Insert => f.write_str("attempted to insert a duplicate value"),
            RejectedOp::Set => f.write_str("attempted to set a duplicate value"),
        }
    }
}

impl<T> std::error::Error for DuplicateError<T> {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("elements out of order at index 3");
        assert_eq!(err.to_string(), "elements out of order at index 3");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be greater than zero");
        assert_eq!(err.to_string(), "capacity must be greater than zero");
    }

    #[test]
    fn config_debug_includes_message() {
        let err = ConfigError::new("bad capacity");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("bad capacity"));
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }

    // -- DuplicateError ---------------------------------------------------

    #[test]
    fn duplicate_returns_item() {
        let err = DuplicateError::new(String::from("Thor"), RejectedOp::Insert);
        assert_eq!(err.item(), "Thor");
        assert_eq!(err.op(), RejectedOp::Insert);
        assert_eq!(err.into_inner(), "Thor");
    }

    #[test]
    fn duplicate_display_names_operation() {
        let insert = DuplicateError::new(1, RejectedOp::Insert);
        let set = DuplicateError::new(1, RejectedOp::Set);
        assert!(insert.to_string().contains("insert"));
        assert!(set.to_string().contains("set"));
    }

    #[test]
    fn duplicate_debug_does_not_require_debug_item() {
        struct Opaque;
        let err = DuplicateError::new(Opaque, RejectedOp::Set);
        assert!(format!("{:?}", err).contains("Set"));
    }

    #[test]
    fn duplicate_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<DuplicateError<String>>();
    }
}
