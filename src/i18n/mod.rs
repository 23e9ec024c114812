//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en")]
    EnUS,
    /// Russian
    #[serde(rename = "ru")]
    RuRU,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::RuRU => "Русский",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::RuRU => "ru",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en_us" => Ok(Locale::EnUS),
            "ru" | "ru-ru" | "ru_ru" => Ok(Locale::RuRU),
            other => Err(Error::config(format!("Unsupported locale: {other}"))),
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> =
    OnceLock::new();

/// Initialize translations (key -> (en, ru))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // Table columns
    map.insert("col-id", ("ID", "ID"));
    map.insert("col-name", ("Name", "Название"));
    map.insert("col-status", ("Status", "Статус"));
    map.insert("col-print-time", ("Print Time", "Время печати"));
    map.insert("col-downtime", ("Downtime", "Простой"));
    map.insert("col-printing-time", ("Printing Time", "Время печати"));
    map.insert("col-printer", ("Printer", "Принтер"));
    map.insert("col-model", ("Model", "Модель"));
    map.insert("col-start", ("Start", "Начало"));
    map.insert("col-stop", ("Stop", "Окончание"));
    map.insert("col-duration", ("Duration", "Длительность"));

    // Status labels
    map.insert("printer-status-waiting", ("Waiting Confirmation", "Ожидает подтверждения"));
    map.insert("printing-status-completed", ("Completed", "Завершено"));
    map.insert("printing-status-aborted", ("Aborted", "Прервано"));
    map.insert("printing-status-printing", ("In Progress", "В процессе"));
    map.insert("status-unknown", ("Unknown", "Неизвестно"));

    // Cell fallbacks
    map.insert("unknown-printer", ("Unknown Printer", "Неизвестный принтер"));
    map.insert("unknown-model", ("Unknown Model", "Неизвестная модель"));
    map.insert("unnamed-model", ("Unnamed Model", "Модель без названия"));
    map.insert("in-progress", ("In progress", "В процессе"));
    map.insert("not-available", ("N/A", "Н/Д"));
    map.insert("hours-suffix", ("hrs", "ч"));

    // Table
    map.insert("table-no-data", ("No data", "Нет данных"));
    map.insert("table-page-info", ("Page {page} of {total}", "Страница {page} из {total}"));
    map.insert("table-total", ("{count} records", "Записей: {count}"));

    // Queue board
    map.insert("queue-items", ("{count} items", "{count} шт."));
    map.insert("queue-quantity", ("Quantity", "Количество"));
    map.insert("queue-priority", ("Priority", "Приоритет"));
    map.insert("queue-empty", ("Queue is empty", "Очередь пуста"));

    // Task distribution
    map.insert("distribution-printer", ("Printer", "Принтер"));
    map.insert("distribution-parts", ("Parts Assigned", "Назначено деталей"));
    map.insert("distribution-queued", ("Queued", "В очереди"));

    // Notifications
    map.insert("error-load-data", ("Failed to load data", "Не удалось загрузить данные"));
    map.insert(
        "error-load-queue",
        ("Failed to load printers or queues", "Не удалось загрузить принтеры или очереди"),
    );
    map.insert(
        "success-queue-added",
        ("Successfully added to queue", "Успешно добавлено в очередь"),
    );
    map.insert("error-queue-add", ("Failed to add to queue", "Не удалось добавить в очередь"));
    map.insert(
        "success-distributed",
        ("Tasks distributed to {count} printers", "Задания распределены на принтеров: {count}"),
    );
    map.insert(
        "error-distribute",
        ("Failed to distribute tasks", "Не удалось распределить задания"),
    );

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key; unknown keys translate to themselves
pub fn t<'a>(locale: Locale, key: &'a str) -> &'a str {
    if let Some(&(en, ru)) = translations().get(key) {
        match locale {
            Locale::EnUS => en,
            Locale::RuRU => ru,
        }
    } else {
        key
    }
}

/// Translate a key and substitute `{name}` placeholders
pub fn t_args(locale: Locale, key: &str, args: &[(&str, &dyn fmt::Display)]) -> String {
    args.iter()
        .fold(t(locale, key).to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), &value.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_keys() {
        assert_eq!(t(Locale::EnUS, "col-name"), "Name");
        assert_eq!(t(Locale::RuRU, "col-name"), "Название");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUS, "no-such-key"), "no-such-key");
    }

    #[test]
    fn placeholders_are_substituted() {
        let text = t_args(Locale::EnUS, "table-page-info", &[("page", &2), ("total", &5)]);
        assert_eq!(text, "Page 2 of 5");
    }

    #[test]
    fn locale_parses_common_spellings() {
        assert_eq!("RU".parse::<Locale>().expect("ru"), Locale::RuRU);
        assert_eq!("en-US".parse::<Locale>().expect("en"), Locale::EnUS);
        assert!("de".parse::<Locale>().is_err());
    }
}
