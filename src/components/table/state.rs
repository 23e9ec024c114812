//! TableState - Search, Filter, Sort and Page State of One Table

use serde::Serialize;

use crate::constants::STATUS_FILTER_ALL;
use crate::domain::record::Record;

/// Active server-side ordering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: String,
    pub descending: bool,
}

/// One rendered page plus its pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub records: Vec<Record>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl Page {
    /// Page shown before any data has loaded
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            page: 1,
            total_pages: 0,
            total_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Per-table state.
///
/// Invariants: `filtered` indexes into `records` in ascending order, and
/// `1 <= current_page <= max(1, total_pages())`.
#[derive(Debug, Clone)]
pub struct TableState {
    search_term: String,
    status_filter: String,
    sort: Option<SortState>,
    current_page: usize,
    page_size: usize,
    records: Vec<Record>,
    filtered: Vec<usize>,
}

impl TableState {
    /// Create an empty state; `page_size` must be positive
    pub fn new(page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        Self {
            search_term: String::new(),
            status_filter: STATUS_FILTER_ALL.to_string(),
            sort: None,
            current_page: 1,
            page_size: page_size.max(1),
            records: Vec::new(),
            filtered: Vec::new(),
        }
    }

    // ==================== Getters ====================

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn status_filter(&self) -> &str {
        &self.status_filter
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of records that pass the filters
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Records that pass the filters, in source order
    pub fn filtered_records(&self) -> impl Iterator<Item = &Record> {
        self.filtered.iter().map(|&i| &self.records[i])
    }

    /// `ceil(filtered / page_size)`; zero when nothing matches
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    // ==================== Mutations ====================

    /// Replace the raw record set, keeping filters and clamping the page
    pub fn replace_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.refilter();
        self.clamp_page();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
        self.refilter();
    }

    pub fn set_status_filter(&mut self, value: impl Into<String>) {
        self.status_filter = value.into();
        self.current_page = 1;
        self.refilter();
    }

    /// Same column flips direction; a new column starts ascending
    pub fn toggle_sort(&mut self, column: &str) -> &SortState {
        let next = match self.sort.take() {
            Some(current) if current.column == column => SortState {
                column: current.column,
                descending: !current.descending,
            },
            _ => SortState {
                column: column.to_string(),
                descending: false,
            },
        };
        self.sort.insert(next)
    }

    /// Move to page `n`; rejected (false) outside `1..=total_pages`
    pub fn go_to_page(&mut self, n: usize) -> bool {
        if n < 1 || n > self.total_pages() {
            return false;
        }
        self.current_page = n;
        true
    }

    // ==================== Derived view ====================

    /// Records of the current page
    pub fn page(&self) -> Page {
        let start = (self.current_page - 1) * self.page_size;
        let records = self
            .filtered
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&i| self.records[i].clone())
            .collect();

        Page {
            records,
            page: self.current_page,
            total_pages: self.total_pages(),
            total_count: self.filtered.len(),
        }
    }

    fn refilter(&mut self) {
        self.filtered = filter_indices(&self.records, &self.search_term, &self.status_filter);
    }

    fn clamp_page(&mut self) {
        let last = self.total_pages().max(1);
        self.current_page = self.current_page.clamp(1, last);
    }
}

/// Indexes of the records passing the search term and status filter.
///
/// Search: case-insensitive substring of any field's text. Status: exact
/// case-insensitive match on `status`; empty or `all` disables it.
pub fn filter_indices(records: &[Record], search_term: &str, status_filter: &str) -> Vec<usize> {
    let needle = search_term.to_lowercase();
    let status = status_filter.to_lowercase();
    let status = (!status.is_empty() && status != STATUS_FILTER_ALL).then_some(status);

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.matches_search(&needle))
        .filter(|(_, record)| status.as_deref().is_none_or(|s| record.matches_status(s)))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printers(count: usize) -> Vec<Record> {
        (1..=count)
            .map(|i| {
                Record::new()
                    .with("id", i as i64)
                    .with("name", format!("Printer {i:02}"))
                    .with("status", if i % 2 == 0 { "printing" } else { "idle" })
            })
            .collect()
    }

    fn loaded(count: usize, page_size: usize) -> TableState {
        let mut state = TableState::new(page_size);
        state.replace_records(printers(count));
        state
    }

    #[test]
    fn twenty_five_records_make_three_pages() {
        let mut state = loaded(25, 10);
        let first = state.page();
        assert_eq!(first.records.len(), 10);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_count, 25);

        assert!(state.go_to_page(3));
        assert_eq!(state.page().records.len(), 5);

        assert!(!state.go_to_page(4));
        assert_eq!(state.current_page(), 3);
        assert!(!state.go_to_page(0));
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn status_filter_is_case_insensitive_equality() {
        let mut state = TableState::new(10);
        state.replace_records(vec![
            Record::new().with("status", "Idle"),
            Record::new().with("status", "Printing"),
            Record::new().with("status", "printing"),
        ]);
        state.set_status_filter("printing");
        assert_eq!(state.filtered_count(), 2);

        state.set_status_filter("ALL");
        assert_eq!(state.filtered_count(), 3);

        state.set_status_filter(" printing ");
        assert_eq!(state.filtered_count(), 0);
    }

    #[test]
    fn records_without_status_never_match_a_status_filter() {
        let mut state = TableState::new(10);
        state.replace_records(vec![
            Record::new().with("name", "no status"),
            Record::new().with("status", "idle"),
        ]);
        state.set_status_filter("idle");
        assert_eq!(state.filtered_count(), 1);
    }

    #[test]
    fn empty_search_restores_status_filtered_set() {
        let mut state = loaded(12, 10);
        state.set_status_filter("idle");
        let idle = state.filtered_count();

        state.set_search_term("Printer 03");
        assert_eq!(state.filtered_count(), 1);

        state.set_search_term("");
        assert_eq!(state.filtered_count(), idle);
    }

    #[test]
    fn search_matches_exactly_the_expected_subset() {
        let records = printers(30);
        let expected: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| {
                r.values()
                    .any(|v| crate::domain::record::value_text(v).to_lowercase().contains("1"))
            })
            .map(|(i, _)| i)
            .collect();

        assert_eq!(filter_indices(&records, "1", "all"), expected);
    }

    #[test]
    fn filter_changes_reset_page() {
        let mut state = loaded(25, 10);
        assert!(state.go_to_page(2));
        state.set_search_term("printer");
        assert_eq!(state.current_page(), 1);

        assert!(state.go_to_page(2));
        state.set_status_filter("idle");
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn shrinking_reload_clamps_page() {
        let mut state = loaded(25, 10);
        assert!(state.go_to_page(3));
        state.replace_records(printers(4));
        assert_eq!(state.current_page(), 1);

        state.replace_records(Vec::new());
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 0);
        assert!(state.page().is_empty());
    }

    #[test]
    fn filtered_records_preserve_source_order() {
        let mut state = loaded(10, 3);
        state.set_status_filter("printing");
        let ids: Vec<i64> = state
            .filtered_records()
            .filter_map(|r| r.i64_field("id"))
            .collect();
        assert_eq!(ids, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn sort_toggles_per_column() {
        let mut state = TableState::new(10);
        assert!(!state.toggle_sort("name").descending);
        assert!(state.toggle_sort("name").descending);
        assert!(!state.toggle_sort("name").descending);

        let other = state.toggle_sort("status").clone();
        assert_eq!(other.column, "status");
        assert!(!other.descending);
    }

    #[test]
    fn page_is_idempotent() {
        let state = loaded(15, 10);
        assert_eq!(state.page(), state.page());
    }

    #[test]
    fn fresh_state_returns_empty_page() {
        let state = TableState::new(10);
        assert_eq!(state.page(), Page::empty());
    }
}
