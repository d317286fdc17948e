//! Paging state machine (pure).
//!
//! The engine and its capability traits. Everything here is testable with
//! stub collaborators, without a terminal.

pub mod orchestrator;
pub mod sort_cycle;

// Re-export for convenience
pub use orchestrator::{
    EventFlow, PageSource, PagerPhase, PagingControl, PagingOrchestrator, RenderTarget,
};
