//! Tasks Page
//!
//! Result cards of a task distribution.

use crate::domain::task::AssignedTask;
use crate::i18n::{Locale, t};

/// One card per printer that received parts
pub fn format_assignments(tasks: &[AssignedTask], locale: Locale) -> String {
    if tasks.is_empty() {
        return format!("{}\n", t(locale, "table-no-data"));
    }

    tasks
        .iter()
        .map(|task| {
            format!(
                "{}: {}\n{}: {}\n[{}]\n",
                t(locale, "distribution-printer"),
                task.printer_name,
                t(locale, "distribution-parts"),
                task.parts_assigned,
                t(locale, "distribution-queued"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_are_separated_by_blank_lines() {
        let tasks = vec![
            AssignedTask {
                printer_name: "P1".to_string(),
                parts_assigned: 6,
            },
            AssignedTask {
                printer_name: "P2".to_string(),
                parts_assigned: 4,
            },
        ];
        assert_eq!(
            format_assignments(&tasks, Locale::EnUS),
            "Printer: P1\nParts Assigned: 6\n[Queued]\n\nPrinter: P2\nParts Assigned: 4\n[Queued]\n"
        );
    }

    #[test]
    fn russian_labels() {
        let tasks = vec![AssignedTask {
            printer_name: "P1".to_string(),
            parts_assigned: 1,
        }];
        assert!(format_assignments(&tasks, Locale::RuRU).starts_with("Принтер: P1"));
    }
}
