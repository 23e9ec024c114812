//! Table Page
//!
//! Text rendering of a table page for the terminal front-end.

use std::io::Write;

use parking_lot::Mutex;

use crate::components::table::{Column, Page, PaginationInfo, Renderer, SortState};
use crate::domain::record::Record;
use crate::i18n::{Locale, t};
use crate::utils::format::fit;

const COLUMN_GAP: &str = "  ";

/// Render a page as an aligned text table with a pagination footer
pub fn format_table(
    columns: &[Column<Record>],
    page: &Page,
    sort: Option<&SortState>,
    locale: Locale,
) -> String {
    let headers: Vec<String> = columns
        .iter()
        .map(|col| match sort {
            Some(s) if col.sortable && s.column == col.id => {
                format!("{} {}", col.label, if s.descending { '▼' } else { '▲' })
            }
            _ => col.label.clone(),
        })
        .collect();

    let rows: Vec<Vec<String>> = page
        .records
        .iter()
        .map(|record| columns.iter().map(|col| col.render_cell(record)).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let content = rows
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(headers[i].chars().count()))
                .max()
                .unwrap_or(0);
            col.width.resolve(content)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| fit(cell, width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(&headers));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&line(&rule));
    out.push('\n');

    if rows.is_empty() {
        out.push_str(t(locale, "table-no-data"));
        out.push('\n');
    }
    for row in &rows {
        out.push_str(&line(row));
        out.push('\n');
    }

    let info = PaginationInfo::from(page);
    out.push_str(&format!(
        "{} · {}\n",
        info.label(locale),
        info.items_label(locale)
    ));
    out
}

/// Renderer writing each page to a terminal stream
pub struct TerminalRenderer {
    columns: Vec<Column<Record>>,
    locale: Locale,
    sort: Option<SortState>,
    clear_screen: bool,
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalRenderer {
    /// Render to stdout
    pub fn stdout(columns: Vec<Column<Record>>, locale: Locale) -> Self {
        Self::new(columns, locale, Box::new(std::io::stdout()))
    }

    pub fn new(columns: Vec<Column<Record>>, locale: Locale, out: Box<dyn Write + Send>) -> Self {
        Self {
            columns,
            locale,
            sort: None,
            clear_screen: false,
            out: Mutex::new(out),
        }
    }

    /// Mark the sorted column in the header
    pub fn with_sort(mut self, sort: Option<SortState>) -> Self {
        self.sort = sort;
        self
    }

    /// Clear the terminal before each page (watch mode)
    pub fn clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }
}

impl Renderer for TerminalRenderer {
    fn render(&self, page: &Page) {
        let text = format_table(&self.columns, page, self.sort.as_ref(), self.locale);
        let mut out = self.out.lock();
        let result = if self.clear_screen {
            write!(out, "\x1b[2J\x1b[H{text}")
        } else {
            write!(out, "{text}")
        };
        if let Err(err) = result.and_then(|_| out.flush()) {
            tracing::warn!(error = %err, "Failed to write table page");
        }
    }
}

/// Renderer that keeps the most recent page
#[derive(Debug, Default)]
pub struct PageSnapshot {
    last: Mutex<Option<Page>>,
    renders: Mutex<usize>,
}

impl PageSnapshot {
    pub fn last(&self) -> Option<Page> {
        self.last.lock().clone()
    }

    pub fn render_count(&self) -> usize {
        *self.renders.lock()
    }
}

impl Renderer for PageSnapshot {
    fn render(&self, page: &Page) {
        *self.last.lock() = Some(page.clone());
        *self.renders.lock() += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::features::tables::columns::model_columns;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn models_page() -> Page {
        Page {
            records: vec![
                Record::new().with("id", 1).with("name", "Benchy").with("printing_time", 1.5),
                Record::new().with("id", 2).with("printing_time", 12.0),
            ],
            page: 1,
            total_pages: 2,
            total_count: 12,
        }
    }

    #[test]
    fn table_aligns_columns_and_adds_footer() {
        let text = format_table(&model_columns(Locale::EnUS), &models_page(), None, Locale::EnUS);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ID  Name           Printing Time");
        assert_eq!(lines[1], "--  -------------  -------------");
        assert_eq!(lines[2], "1   Benchy         1.5 hrs");
        assert_eq!(lines[3], "2   Unnamed Model  12.0 hrs");
        assert_eq!(lines[4], "Page 1 of 2 · 12 records");
    }

    #[test]
    fn sorted_column_gets_indicator() {
        let sort = SortState {
            column: "name".to_string(),
            descending: true,
        };
        let columns = model_columns(Locale::EnUS);
        let text = format_table(&columns, &models_page(), Some(&sort), Locale::EnUS);
        assert!(text.lines().next().is_some_and(|header| header.contains("Name ▼")));
    }

    #[test]
    fn empty_page_says_no_data() {
        let text = format_table(&model_columns(Locale::EnUS), &Page::empty(), None, Locale::EnUS);
        assert!(text.contains("No data"));
        assert!(text.contains("Page 1 of 1 · 0 records"));
    }

    #[test]
    fn terminal_renderer_writes_each_page() {
        let buffer = SharedBuffer::default();
        let columns = model_columns(Locale::EnUS);
        let renderer = TerminalRenderer::new(columns, Locale::EnUS, Box::new(buffer.clone()));

        renderer.render(&models_page());
        renderer.render(&Page::empty());

        let written = String::from_utf8(buffer.0.lock().clone()).expect("utf8");
        assert_eq!(written.matches("Printing Time").count(), 2);
    }

    #[test]
    fn watch_mode_clears_and_marks_sort() {
        let buffer = SharedBuffer::default();
        let sort = SortState {
            column: "printing_time".to_string(),
            descending: false,
        };
        let columns = model_columns(Locale::EnUS);
        let renderer = TerminalRenderer::new(columns, Locale::EnUS, Box::new(buffer.clone()))
            .with_sort(Some(sort))
            .clear_screen(true);

        renderer.render(&models_page());

        let written = String::from_utf8(buffer.0.lock().clone()).expect("utf8");
        assert!(written.starts_with("\x1b[2J\x1b[H"));
        assert!(written.contains("Printing Time ▲"));
    }

    #[test]
    fn snapshot_keeps_latest_page() {
        let snapshot = PageSnapshot::default();
        snapshot.render(&models_page());
        snapshot.render(&Page::empty());
        assert_eq!(snapshot.last(), Some(Page::empty()));
        assert_eq!(snapshot.render_count(), 2);
    }
}
