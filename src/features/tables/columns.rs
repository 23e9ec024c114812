//! Column Sets
//!
//! Cell formatting for the printers, models and print-job tables.

use crate::components::table::Column;
use crate::domain::record::Record;
use crate::domain::resource::ResourceKind;
use crate::i18n::{Locale, t};
use crate::utils::format::{duration_hours, format_hours, format_timestamp};

/// Columns shown for a resource
pub fn columns_for(kind: ResourceKind, locale: Locale) -> Vec<Column<Record>> {
    match kind {
        ResourceKind::Printers => printer_columns(locale),
        ResourceKind::Models => model_columns(locale),
        ResourceKind::Printings => printing_columns(locale),
    }
}

fn id_column(locale: Locale) -> Column<Record> {
    Column::new("id", t(locale, "col-id"), |r: &Record| r.field_text("id"))
        .sortable()
        .flex_width(Some(2), Some(8))
}

pub fn printer_columns(locale: Locale) -> Vec<Column<Record>> {
    let hrs = t(locale, "hours-suffix");
    vec![
        id_column(locale),
        Column::new("name", t(locale, "col-name"), |r: &Record| r.field_text("name"))
            .sortable()
            .flex_width(Some(8), Some(28)),
        Column::new("status", t(locale, "col-status"), move |r: &Record| {
            printer_status_label(r.status(), locale)
        })
        .sortable()
        .flex_width(Some(6), Some(24)),
        Column::new("total_print_time", t(locale, "col-print-time"), move |r: &Record| {
            format_hours(r.f64_field("total_print_time").unwrap_or(0.0), 2, hrs)
        })
        .sortable(),
        Column::new("total_downtime", t(locale, "col-downtime"), move |r: &Record| {
            format_hours(r.f64_field("total_downtime").unwrap_or(0.0), 2, hrs)
        })
        .sortable(),
    ]
}

pub fn model_columns(locale: Locale) -> Vec<Column<Record>> {
    let hrs = t(locale, "hours-suffix");
    vec![
        id_column(locale),
        Column::new("name", t(locale, "col-name"), move |r: &Record| {
            r.str_field("name")
                .filter(|name| !name.is_empty())
                .unwrap_or(t(locale, "unnamed-model"))
                .to_string()
        })
        .sortable()
        .flex_width(Some(8), Some(32)),
        Column::new("printing_time", t(locale, "col-printing-time"), move |r: &Record| {
            format_hours(r.f64_field("printing_time").unwrap_or(0.0), 1, hrs)
        })
        .sortable(),
    ]
}

pub fn printing_columns(locale: Locale) -> Vec<Column<Record>> {
    vec![
        id_column(locale),
        Column::new("printer_name", t(locale, "col-printer"), move |r: &Record| {
            text_or(r, "printer_name", t(locale, "unknown-printer"))
        })
        .flex_width(Some(8), Some(24)),
        Column::new("model_name", t(locale, "col-model"), move |r: &Record| {
            text_or(r, "model_name", t(locale, "unknown-model"))
        })
        .flex_width(Some(8), Some(24)),
        Column::new("start_time", t(locale, "col-start"), |r: &Record| {
            r.str_field("start_time").map(format_timestamp).unwrap_or_default()
        })
        .sortable(),
        Column::new("real_time_stop", t(locale, "col-stop"), move |r: &Record| {
            r.str_field("real_time_stop")
                .map(format_timestamp)
                .unwrap_or_else(|| t(locale, "in-progress").to_string())
        }),
        Column::new("duration", t(locale, "col-duration"), move |r: &Record| {
            printing_duration(r, locale)
        }),
        Column::new("status", t(locale, "col-status"), move |r: &Record| {
            printing_status_label(r.status(), locale)
        })
        .sortable(),
    ]
}

/// Printer status as shown in the table; `waiting` needs confirmation
pub fn printer_status_label(status: Option<&str>, locale: Locale) -> String {
    match status {
        Some("waiting") => t(locale, "printer-status-waiting").to_string(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Print-job status as shown in the history table
pub fn printing_status_label(status: Option<&str>, locale: Locale) -> String {
    match status {
        Some("completed") => t(locale, "printing-status-completed").to_string(),
        Some("aborted") => t(locale, "printing-status-aborted").to_string(),
        Some("printing") => t(locale, "printing-status-printing").to_string(),
        Some(other) if !other.is_empty() => other.to_string(),
        _ => t(locale, "status-unknown").to_string(),
    }
}

/// Wall-clock duration of a finished job, `N/A` while running
fn printing_duration(record: &Record, locale: Locale) -> String {
    let hours = record
        .str_field("start_time")
        .zip(record.str_field("real_time_stop"))
        .and_then(|(start, stop)| duration_hours(start, stop));
    match hours {
        Some(hours) => format_hours(hours, 1, t(locale, "hours-suffix")),
        None => t(locale, "not-available").to_string(),
    }
}

fn text_or(record: &Record, field: &str, fallback: &str) -> String {
    record
        .str_field(field)
        .filter(|value| !value.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
