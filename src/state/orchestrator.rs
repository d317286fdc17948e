//! The paging orchestration engine.
//!
//! [`PagingOrchestrator`] owns one paging control, one render target and one
//! page source, and turns inbound paging/sort events into fetches and fetch
//! results into render/clear dispatches. It is single-threaded by design:
//! every operation runs to completion on the caller's thread, so at most one
//! fetch is ever in flight per instance.
//!
//! The engine is generic over a small capability set ([`PagingControl`],
//! [`RenderTarget`], [`PageSource`]) supplied by the concrete view binding,
//! not over a widget type. The ratatui bindings in [`crate::view`] are one
//! such binding; test stubs are another.

use crate::config::PagerConfig;
use crate::model::{FetchError, PageResult, PagerError, SearchCriteria, SortCriterion, SortHint};
use crate::state::sort_cycle;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// The sole data-access boundary: one page of records per call.
pub trait PageSource<R> {
    /// Execute the query described by `criteria` and return its page.
    ///
    /// An `Err` means the data layer is broken and is fatal to the current
    /// interaction; "no matching records" is expressed as an `Ok` result
    /// with `total_records == 0`, never as an error.
    fn fetch_page(&mut self, criteria: &SearchCriteria) -> Result<PageResult<R>, FetchError>;
}

// Closures work as page sources directly; handy for tests and small demos.
impl<R, F> PageSource<R> for F
where
    F: FnMut(&SearchCriteria) -> Result<PageResult<R>, FetchError>,
{
    fn fetch_page(&mut self, criteria: &SearchCriteria) -> Result<PageResult<R>, FetchError> {
        self(criteria)
    }
}

/// The paging UI element: current page, page size, total size.
pub trait PagingControl {
    /// Set the capacity of one page.
    fn set_page_size(&mut self, page_size: u32);

    /// Set the 0-based index of the active page.
    fn set_active_index(&mut self, index: usize);

    /// Set the total record count across all pages.
    fn set_total_size(&mut self, total: u64);

    /// The 0-based index of the currently active page.
    fn active_index(&self) -> usize;
}

/// The list-shaped view surface that displays one page of records.
pub trait RenderTarget<R> {
    /// Remove every existing row unconditionally.
    ///
    /// Called before installing new state so a re-applied model never leaves
    /// duplicate or stale rows behind.
    fn clear_rows(&mut self);

    /// Install `rows` as the view's backing model.
    fn set_rows(&mut self, rows: Vec<R>);

    /// Show the configured no-results message instead of rows.
    fn show_empty(&mut self, message: &str);

    /// Map a 0-based column position to the domain field it sorts by.
    ///
    /// `None` means the column is not sort-enabled; interactions on it are
    /// ignored. The default binding enables no columns.
    fn sort_field(&self, column: usize) -> Option<String> {
        let _ = column;
        None
    }
}

/// Where the engine currently stands, for status display and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerPhase {
    /// No fetch dispatched yet, nothing shown.
    Idle,
    /// A non-empty page is rendered.
    Loaded,
    /// The no-results state is shown.
    Empty,
}

/// What became of an inbound sort event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    /// The event was recognized and a re-fetch was performed.
    Handled,
    /// The event was ignored; the caller must not propagate it further.
    Suppressed,
}

/// Pagination and sort orchestration over one view binding.
///
/// Owns the paging control `P`, the render target `V`, the page source `S`,
/// and the single active sort slot. See the module docs for the event flow.
#[derive(Debug)]
pub struct PagingOrchestrator<R, P, V, S>
where
    P: PagingControl,
    V: RenderTarget<R>,
    S: PageSource<R>,
{
    paging: P,
    view: V,
    source: S,
    config: PagerConfig,
    active_sort: Option<SortCriterion>,
    phase: PagerPhase,
    initialized: bool,
    _rows: PhantomData<fn() -> R>,
}

impl<R, P, V, S> PagingOrchestrator<R, P, V, S>
where
    P: PagingControl,
    V: RenderTarget<R>,
    S: PageSource<R>,
{
    /// Bind the engine to its collaborators.
    ///
    /// Nothing is fetched until [`initialize`](Self::initialize) runs.
    pub fn new(paging: P, view: V, source: S, config: PagerConfig) -> Self {
        Self {
            paging,
            view,
            source,
            config,
            active_sort: None,
            phase: PagerPhase::Idle,
            initialized: false,
            _rows: PhantomData,
        }
    }

    /// One-time setup; unless configured lazy, eagerly fetches page 1.
    ///
    /// # Errors
    ///
    /// [`PagerError::AlreadyInitialized`] on a second call; any error the
    /// eager first fetch raises.
    pub fn initialize(&mut self) -> Result<(), PagerError> {
        if self.initialized {
            return Err(PagerError::AlreadyInitialized);
        }
        self.initialized = true;

        if !self.config.lazy_load {
            // always load the first page of data
            self.fetch(None)?;
        }
        Ok(())
    }

    /// Fetch the given 1-based page with default criteria.
    ///
    /// Pages beyond the end of the data are not rejected here; the page
    /// source decides what they yield.
    ///
    /// # Errors
    ///
    /// [`PagerError::InvalidPage`] for page 0, plus anything
    /// [`fetch`](Self::fetch) raises.
    pub fn request_page(&mut self, page: u32) -> Result<(), PagerError> {
        if page == 0 {
            return Err(PagerError::InvalidPage { page });
        }
        self.fetch(Some(SearchCriteria::for_page(page)))
    }

    /// Core fetch routine: build criteria, query the source, dispatch.
    ///
    /// Absent criteria default to page 1. The active sort criterion, if any,
    /// is attached twice: as a structured sort directive and as a flat
    /// search term (`term_key` → `term_value`), so the query layer may
    /// consume ordering in either shape.
    ///
    /// Dispatch: a result with `total_records == 0` clears the view; any
    /// other result renders it, unless the page came back empty with a
    /// previous page available, in which case the engine retreats one page
    /// and re-fetches (see [`PagerError::RetreatExhausted`] for the bound).
    pub fn fetch(&mut self, criteria: Option<SearchCriteria>) -> Result<(), PagerError> {
        let mut criteria = criteria.unwrap_or_default();
        debug!(page = criteria.page_number(), "Dispatching fetch");

        if let Some(sort) = &self.active_sort {
            if criteria.add_sort(sort.clone()) {
                let name = sort.term_key();
                let value = sort.term_value();
                debug!(term = %name, value = %value, "Sort parameter attached");
                criteria.add_search_term(name, value);
            }
        }

        let mut retreats = 0u32;
        loop {
            let result = self.source.fetch_page(&criteria)?;

            if result.total_records() == 0 {
                self.dispatch_clear(&result);
                return Ok(());
            }

            // Render dispatch: paging geometry first, rows second.
            self.paging.set_page_size(result.page_size());
            self.paging
                .set_active_index(result.current_page().saturating_sub(1) as usize);
            self.paging.set_total_size(result.total_records());

            let stale = result.records().is_empty()
                && result.previous_page_available()
                && result.current_page() > 1;
            if stale {
                if retreats >= self.config.max_retreats {
                    return Err(PagerError::RetreatExhausted { attempts: retreats });
                }
                retreats += 1;
                let target = result.current_page() - 1;
                warn!(
                    from = result.current_page(),
                    to = target,
                    "Fetched page is empty but a previous page exists; retreating"
                );
                criteria.set_page_number(target);
                continue;
            }

            self.view.clear_rows();
            self.view.set_rows(result.into_records());
            self.phase = PagerPhase::Loaded;
            return Ok(());
        }
    }

    fn dispatch_clear(&mut self, result: &PageResult<R>) {
        self.paging.set_page_size(result.page_size());
        self.paging.set_total_size(result.total_records());
        self.view.clear_rows();
        self.view.show_empty(&self.config.empty_message);
        self.phase = PagerPhase::Empty;
    }

    /// React to a "page changed" notification from the paging control.
    ///
    /// The control reports a 0-based active index; the matching 1-based
    /// page is fetched.
    pub fn handle_paging_event(&mut self, active_index: usize) -> Result<(), PagerError> {
        let page = u32::try_from(active_index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .unwrap_or(u32::MAX);
        self.fetch(Some(SearchCriteria::for_page(page)))
    }

    /// React to a header-sort interaction.
    ///
    /// `token` is the direction the column currently shows (`natural`,
    /// `ascending` or `descending`). Unrecognized tokens and columns with no
    /// sort binding are ignored and the event is suppressed; a recognized
    /// interaction replaces the active sort slot and re-fetches the page
    /// the paging control currently displays, under the new ordering.
    pub fn handle_sort_event(&mut self, column: usize, token: &str) -> Result<EventFlow, PagerError> {
        let Some(hint) = SortHint::parse(token) else {
            debug!(token, "Undefined sort direction");
            return Ok(EventFlow::Suppressed);
        };
        let Some(field) = self.view.sort_field(column) else {
            debug!(column, "Column has no sort binding");
            return Ok(EventFlow::Suppressed);
        };

        let criterion = sort_cycle::resolve(hint, field);
        debug!(sort = %criterion, "Active sort replaced");
        self.active_sort = Some(criterion);

        self.handle_paging_event(self.paging.active_index())?;
        Ok(EventFlow::Handled)
    }

    /// The single active sort criterion, if any interaction set one.
    pub fn active_sort(&self) -> Option<&SortCriterion> {
        self.active_sort.as_ref()
    }

    /// Where the engine currently stands.
    pub fn phase(&self) -> PagerPhase {
        self.phase
    }

    /// Shared access to the paging control.
    pub fn paging(&self) -> &P {
        &self.paging
    }

    /// Shared access to the render target.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the render target (selection state and the like).
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Mutable access to the page source (backing-data maintenance).
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
