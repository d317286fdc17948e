//! Page sources: concrete data layers behind the fetch boundary.

pub mod demo;

use crate::model::{FetchError, PageResult, SearchCriteria};
use crate::state::PageSource;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

/// Row comparator registered for one sortable field.
pub type Comparator<R> = Box<dyn Fn(&R, &R) -> Ordering>;

/// In-memory page source over a vector of rows.
///
/// Pages and sorts a backing vector on every fetch. Sorting honors the
/// structured sort criteria; a criterion naming a field with no registered
/// comparator is skipped. A requested page past the end of the data comes
/// back with no records, a non-zero total and `previous_page_available`
/// set, which is the same shape a concurrent deletion produces and routes
/// the engine through its retreat path.
pub struct VecSource<R> {
    rows: Vec<R>,
    page_size: u32,
    comparators: BTreeMap<String, Comparator<R>>,
}

impl<R> VecSource<R> {
    /// A source over `rows`, serving `page_size` records per page.
    ///
    /// A `page_size` of zero is bumped to one.
    pub fn new(rows: Vec<R>, page_size: u32) -> Self {
        Self {
            rows,
            page_size: page_size.max(1),
            comparators: BTreeMap::new(),
        }
    }

    /// Register the comparator backing sort criteria on `field`.
    pub fn register_comparator(
        &mut self,
        field: impl Into<String>,
        comparator: impl Fn(&R, &R) -> Ordering + 'static,
    ) {
        self.comparators.insert(field.into(), Box::new(comparator));
    }

    /// Number of rows currently backing the source.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the source holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop up to `count` rows from the tail of the backing vector.
    ///
    /// Simulates records being deleted underneath the view between fetches;
    /// a page that was valid a moment ago may come back empty afterwards.
    pub fn delete_last(&mut self, count: usize) {
        let keep = self.rows.len().saturating_sub(count);
        self.rows.truncate(keep);
    }
}

impl<R: Clone> PageSource<R> for VecSource<R> {
    fn fetch_page(&mut self, criteria: &SearchCriteria) -> Result<PageResult<R>, FetchError> {
        let mut rows = self.rows.clone();

        for sort in criteria.sorts() {
            match self.comparators.get(sort.field()) {
                Some(comparator) => {
                    let descending =
                        sort.direction() == crate::model::SortDirection::Desc;
                    rows.sort_by(|a, b| {
                        let ord = comparator(a, b);
                        if descending { ord.reverse() } else { ord }
                    });
                }
                None => {
                    debug!(field = sort.field(), "No comparator for sort field");
                }
            }
        }

        let page = criteria.page_number().max(1);
        let start = (page as usize - 1).saturating_mul(self.page_size as usize);
        let records: Vec<R> = rows
            .into_iter()
            .skip(start)
            .take(self.page_size as usize)
            .collect();

        Ok(PageResult::new(
            self.page_size,
            page,
            self.rows.len() as u64,
            records,
            page > 1,
        ))
    }
}
