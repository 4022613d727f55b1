//! Collection implementations.
//!
//! | Collection          | Order                  | Bounded | De-duplication        |
//! |---------------------|------------------------|---------|-----------------------|
//! | `OrderedCollection` | comparer (asc or desc) | no      | optional, by comparer |
//! | `MruCollection`     | most recent first      | yes     | always, by equality   |

pub mod mru;
pub mod ordered;
