//! Pagination
//!
//! Page navigation state derived from a table page.

use super::state::Page;
use crate::i18n::{Locale, t_args};

/// Prev/next availability and the "Page X of Y" caption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl PaginationInfo {
    /// Create pagination info
    pub fn new(current_page: usize, total_pages: usize, total_items: usize) -> Self {
        Self {
            current_page,
            total_pages,
            total_items,
        }
    }

    pub fn can_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Caption; an empty table still reads "Page 1 of 1"
    pub fn label(&self, locale: Locale) -> String {
        t_args(
            locale,
            "table-page-info",
            &[("page", &self.current_page), ("total", &self.total_pages.max(1))],
        )
    }

    /// Item count caption
    pub fn items_label(&self, locale: Locale) -> String {
        t_args(locale, "table-total", &[("count", &self.total_items)])
    }
}

impl From<&Page> for PaginationInfo {
    fn from(page: &Page) -> Self {
        Self::new(page.page, page.total_pages, page.total_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_page_can_go_both_ways() {
        let info = PaginationInfo::new(2, 3, 25);
        assert!(info.can_prev());
        assert!(info.can_next());
        assert_eq!(info.label(Locale::EnUS), "Page 2 of 3");
        assert_eq!(info.items_label(Locale::EnUS), "25 records");
    }

    #[test]
    fn edges_disable_buttons() {
        let first = PaginationInfo::new(1, 3, 25);
        assert!(!first.can_prev());
        let last = PaginationInfo::new(3, 3, 25);
        assert!(!last.can_next());
    }

    #[test]
    fn empty_table_reads_page_one_of_one() {
        let info = PaginationInfo::from(&Page::empty());
        assert!(!info.can_prev());
        assert!(!info.can_next());
        assert_eq!(info.label(Locale::EnUS), "Page 1 of 1");
        assert_eq!(info.label(Locale::RuRU), "Страница 1 из 1");
    }
}
