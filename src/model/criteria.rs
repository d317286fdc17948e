//! Search criteria assembled for one fetch (pure).
//!
//! Built fresh by the orchestrator for every fetch and handed to the page
//! source by reference; never retained across fetches.

use crate::model::sort::SortCriterion;
use std::collections::BTreeMap;

/// One fetch request: a 1-based page number, free-form search terms, and the
/// sort criteria attached for this request.
///
/// Sort criteria carry set semantics: [`add_sort`](Self::add_sort) refuses a
/// criterion whose field already has one attached. The orchestrator mirrors
/// every accepted criterion into the flat search terms as well
/// (`term_key` → `term_value`), so the query layer may consume ordering
/// either as structured criteria or as plain named parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    page_number: u32,
    search_terms: BTreeMap<String, String>,
    sorts: Vec<SortCriterion>,
}

impl SearchCriteria {
    /// Criteria for the given 1-based page, with no terms and no sorts.
    pub fn for_page(page_number: u32) -> Self {
        Self {
            page_number,
            search_terms: BTreeMap::new(),
            sorts: Vec::new(),
        }
    }

    /// The 1-based page number to fetch.
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Replace the page number.
    pub fn set_page_number(&mut self, page_number: u32) {
        self.page_number = page_number;
    }

    /// Attach a sort criterion; returns `false` if its field already has one.
    pub fn add_sort(&mut self, sort: SortCriterion) -> bool {
        if self.sorts.iter().any(|s| s == &sort) {
            return false;
        }
        self.sorts.push(sort);
        true
    }

    /// Insert (or overwrite) a named search term.
    pub fn add_search_term(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.search_terms.insert(name.into(), value.into());
    }

    /// The attached sort criteria, in attachment order.
    pub fn sorts(&self) -> &[SortCriterion] {
        &self.sorts
    }

    /// The named search terms, ordered by name.
    pub fn search_terms(&self) -> &BTreeMap<String, String> {
        &self.search_terms
    }

    /// Look up one search term by name.
    pub fn search_term(&self, name: &str) -> Option<&str> {
        self.search_terms.get(name).map(String::as_str)
    }
}

impl Default for SearchCriteria {
    /// Default criteria target page 1.
    fn default() -> Self {
        Self::for_page(1)
    }
}
