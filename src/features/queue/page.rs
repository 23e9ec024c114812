//! Queue Page
//!
//! Text rendering of the per-printer queue board.

use crate::domain::queue::PrinterQueue;
use crate::i18n::{Locale, t, t_args};

/// Render printers and their queued model runs
pub fn format_board(queues: &[PrinterQueue], locale: Locale) -> String {
    if queues.is_empty() {
        return format!("{}\n", t(locale, "table-no-data"));
    }

    let mut out = String::new();
    for queue in queues {
        out.push_str(&format!(
            "{} ({})\n",
            queue.printer_name,
            t_args(locale, "queue-items", &[("count", &queue.items.len())])
        ));

        if queue.items.is_empty() {
            out.push_str(&format!("  {}\n", t(locale, "queue-empty")));
            continue;
        }

        for item in &queue.items {
            out.push_str(&format!(
                "  {}  {}: {}  {}: {}\n",
                item.model_name,
                t(locale, "queue-quantity"),
                item.quantity,
                t(locale, "queue-priority"),
                item.priority_label()
            ));
        }
    }
    out
}
