//! Error types for the paging engine.
//!
//! A small taxonomy built with `thiserror`, composing via `?` and `From`.
//! Two families exist:
//!
//! - [`PagerError`] - failures of the orchestration layer itself. These are
//!   wiring bugs (double initialization, page number zero) or a broken
//!   collaborator, and are fatal to the current interaction: the hosting
//!   event loop is expected to log and abandon it. Nothing here is retried.
//! - [`FetchError`] - failures crossing the data-access boundary, raised by
//!   the page source and wrapped into [`PagerError::Fetch`].
//!
//! Recognized-but-ignorable conditions are deliberately *not* errors: an
//! unrecognized sort direction token is a silent no-op, and an empty page
//! with a previous page available triggers the self-correcting retreat path.

use thiserror::Error;

/// Failures of the paging orchestration layer.
///
/// All variants are synchronous and surface to the immediate caller; there
/// is no automatic retry anywhere in the engine.
#[derive(Debug, Error)]
pub enum PagerError {
    /// `initialize` was called on an already-initialized orchestrator.
    ///
    /// The orchestrator owns its paging control, render target and page
    /// source by value, so the classic missing-collaborator wiring bugs are
    /// unrepresentable; calling `initialize` twice is the one wiring mistake
    /// left to catch at runtime.
    #[error("Orchestrator already initialized")]
    AlreadyInitialized,

    /// A page number outside the valid range was requested.
    ///
    /// Page numbers are 1-based; zero indicates a bug in the caller's index
    /// conversion, not a runtime condition to recover from. Pages beyond the
    /// end of the data are *not* rejected here - the page source decides
    /// what an out-of-data page looks like.
    #[error("Invalid page number {page}: pages are numbered from 1")]
    InvalidPage {
        /// The rejected page number.
        page: u32,
    },

    /// The page source broke its contract.
    ///
    /// A failing fetch means the data layer is broken, not that there is no
    /// data, so the orchestrator never substitutes an empty result for it.
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The self-correcting retreat loop hit its configured cap.
    ///
    /// Retreating re-fetches page `n - 1` when page `n` comes back empty
    /// with a previous page available. Page numbers strictly decrease toward
    /// 1, so this fires only when a broken data layer keeps reporting empty
    /// pages with `previous_page_available` set.
    #[error("Gave up after {attempts} empty-page retreats")]
    RetreatExhausted {
        /// Number of retreat re-fetches performed before giving up.
        attempts: u32,
    },
}

/// Failures raised by a page source at the data-access boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The underlying query failed.
    #[error("Page source failed for page {page}: {reason}")]
    SourceFailure {
        /// The 1-based page the failing fetch targeted.
        page: u32,
        /// Description from the underlying data layer.
        reason: String,
    },

    /// The page source produced no result at all.
    ///
    /// Adapters over layers that can hand back an absent result (an optional
    /// return, a nullable FFI value) report it through this variant rather
    /// than inventing an empty page.
    #[error("Page source produced no result for page {page}")]
    MissingResult {
        /// The 1-based page the fetch targeted.
        page: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_page_display_names_the_page() {
        let err = PagerError::InvalidPage { page: 0 };
        assert!(err.to_string().contains("Invalid page number 0"));
    }

    #[test]
    fn fetch_error_converts_to_pager_error() {
        let fetch = FetchError::SourceFailure {
            page: 3,
            reason: "connection reset".to_string(),
        };
        let err: PagerError = fetch.into();
        let msg = err.to_string();
        assert!(msg.contains("Fetch failed"));
        assert!(msg.contains("page 3"));
        assert!(msg.contains("connection reset"));
    }

    #[test]
    fn missing_result_display() {
        let err = FetchError::MissingResult { page: 7 };
        assert!(err.to_string().contains("no result for page 7"));
    }

    #[test]
    fn retreat_exhausted_display_counts_attempts() {
        let err = PagerError::RetreatExhausted { attempts: 32 };
        assert!(err.to_string().contains("32"));
    }
}
