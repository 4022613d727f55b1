pub use crate::collection::mru::{MruCollection, MruCollectionBuilder, MruOptions, MruTriggers};
pub use crate::collection::ordered::{OrderedCollection, OrderedOptions};
pub use crate::error::{ConfigError, DuplicateError, InvariantError, RejectedOp};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::{MruMetricsSnapshot, OrderedMetricsSnapshot};
pub use crate::traits::{
    CaseInsensitive, Comparer, Equivalence, FnComparer, FnEquivalence, NaturalEq, NaturalOrder,
    SequenceView,
};
