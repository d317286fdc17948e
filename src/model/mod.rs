//! Domain model types (pure).
//!
//! All types in this module are pure data, free of UI and I/O concerns.

pub mod criteria;
pub mod error;
pub mod page;
pub mod sort;

// Re-export for convenience
pub use criteria::SearchCriteria;
pub use error::{FetchError, PagerError};
pub use page::PageResult;
pub use sort::{SortCriterion, SortDirection, SortHint};
