//! One page of fetched records (pure).

/// The envelope a page source returns for one fetch: the records of the
/// current page plus the paging geometry needed to update the paging
/// control.
///
/// Produced once per fetch, consumed synchronously, never mutated.
///
/// `total_records` is unsigned; a value of zero means "no results" and
/// routes the dispatch to the clear path rather than the render path. An
/// empty `records` list with a non-zero total signals a stale page (rows
/// were removed after the total was computed), which the orchestrator
/// handles by retreating one page when [`previous_page_available`] allows
/// it.
///
/// [`previous_page_available`]: Self::previous_page_available
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<R> {
    page_size: u32,
    current_page: u32,
    total_records: u64,
    records: Vec<R>,
    previous_page_available: bool,
}

impl<R> PageResult<R> {
    /// Assemble a page result.
    ///
    /// # Arguments
    ///
    /// * `page_size` - Capacity of one page (not the length of `records`)
    /// * `current_page` - 1-based page number this result is for
    /// * `total_records` - Total records across all pages
    /// * `records` - The rows of this page, at most `page_size` of them
    /// * `previous_page_available` - Whether a page before this one exists;
    ///   the data layer must report `false` for page 1
    pub fn new(
        page_size: u32,
        current_page: u32,
        total_records: u64,
        records: Vec<R>,
        previous_page_available: bool,
    ) -> Self {
        Self {
            page_size,
            current_page,
            total_records,
            records,
            previous_page_available,
        }
    }

    /// A result for a data set with no records at all.
    pub fn empty(page_size: u32, current_page: u32) -> Self {
        Self::new(page_size, current_page, 0, Vec::new(), false)
    }

    /// Capacity of one page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// 1-based page number this result is for.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Total records across all pages.
    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// The rows of this page.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Consume the result, yielding the rows.
    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    /// Whether a page before this one exists.
    pub fn previous_page_available(&self) -> bool {
        self.previous_page_available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_has_no_records_and_no_previous() {
        let result: PageResult<u32> = PageResult::empty(10, 1);
        assert_eq!(result.total_records(), 0);
        assert!(result.records().is_empty());
        assert!(!result.previous_page_available());
    }

    #[test]
    fn into_records_yields_rows_in_order() {
        let result = PageResult::new(3, 2, 5, vec!["d", "e"], true);
        assert_eq!(result.into_records(), vec!["d", "e"]);
    }
}
