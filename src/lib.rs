//! gridpager
//!
//! Pagination and sort orchestration for table-shaped TUI views.
//!
//! The engine ([`state::PagingOrchestrator`]) connects a paging control, a
//! results view and a page source into one page-navigation workflow: it
//! turns paging and header-sort events into fetches, classifies every fetch
//! result into a render or a clear, tracks the single active sort criterion,
//! and retreats one page when a fetched page turns out to be stale. The
//! pure core lives in [`model`] and [`state`]; the ratatui/crossterm demo
//! shell lives in [`view`] and [`source`].

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
