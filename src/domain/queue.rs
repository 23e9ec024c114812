//! Queue - Print Queue Items and Priorities

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Priority code → label mapping used by the queue board
pub const PRIORITY_LABELS: [(i64, &str); 3] = [(0, "Normal"), (1, "High"), (2, "Urgent")];

/// Queue priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Priority {
    #[default]
    Normal,
    High,
    Urgent,
}

impl Priority {
    /// Map a wire code to a priority
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Priority::Normal),
            1 => Some(Priority::High),
            2 => Some(Priority::Urgent),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Priority::Normal => 0,
            Priority::High => 1,
            Priority::Urgent => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        priority_label(self.code())
    }
}

/// Label for a wire priority code; `Unknown` for codes outside the table
pub fn priority_label(code: i64) -> &'static str {
    PRIORITY_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or("Unknown")
}

/// One entry in a printer's queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub model_name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub priority: i64,
}

impl QueueItem {
    pub fn priority_label(&self) -> &'static str {
        priority_label(self.priority)
    }
}

/// A printer together with its queued work
#[derive(Debug, Clone, PartialEq)]
pub struct PrinterQueue {
    pub printer_id: i64,
    pub printer_name: String,
    pub items: Vec<QueueItem>,
}

/// Body of `POST /queue/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueRequest {
    pub printer_id: i64,
    pub model_id: i64,
    pub quantity: i64,
    pub priority: i64,
}

/// Raw "add to queue" form input
#[derive(Debug, Clone, Default)]
pub struct QueueForm {
    pub printer_id: String,
    pub model_id: String,
    pub quantity: String,
    pub priority: String,
}

impl QueueForm {
    /// Validate the form and build the request body
    pub fn validate(&self) -> Result<QueueRequest> {
        let printer_id = parse_integer("printer", &self.printer_id)?;
        let model_id = parse_integer("model", &self.model_id)?;
        let quantity = parse_integer("quantity", &self.quantity)?;
        if quantity < 1 {
            return Err(Error::validation("quantity", "must be at least 1"));
        }

        let priority = if self.priority.trim().is_empty() {
            Priority::default().code()
        } else {
            parse_integer("priority", &self.priority)?
        };
        if Priority::from_code(priority).is_none() {
            return Err(Error::validation(
                "priority",
                format!("unknown priority code {priority}"),
            ));
        }

        Ok(QueueRequest {
            printer_id,
            model_id,
            quantity,
            priority,
        })
    }
}

/// Parse a whole number form field
pub(crate) fn parse_integer(field: &str, raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(field, "is required"));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| Error::validation(field, format!("'{trimmed}' is not a whole number")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(printer: &str, model: &str, quantity: &str, priority: &str) -> QueueForm {
        QueueForm {
            printer_id: printer.to_string(),
            model_id: model.to_string(),
            quantity: quantity.to_string(),
            priority: priority.to_string(),
        }
    }

    #[test]
    fn priority_labels_cover_known_codes() {
        assert_eq!(priority_label(0), "Normal");
        assert_eq!(priority_label(1), "High");
        assert_eq!(priority_label(2), "Urgent");
        assert_eq!(priority_label(7), "Unknown");
        assert_eq!(Priority::Urgent.label(), "Urgent");
    }

    #[test]
    fn valid_form_builds_request() {
        let request = form("3", "11", "4", "1").validate().expect("valid");
        assert_eq!(
            request,
            QueueRequest {
                printer_id: 3,
                model_id: 11,
                quantity: 4,
                priority: 1,
            }
        );
    }

    #[test]
    fn missing_priority_defaults_to_normal() {
        let request = form("3", "11", "4", "").validate().expect("valid");
        assert_eq!(request.priority, 0);
    }

    #[test]
    fn non_numeric_quantity_is_validation_error() {
        let err = form("3", "11", "lots", "0").validate().expect_err("invalid");
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "quantity"));
    }

    #[test]
    fn unknown_priority_is_rejected() {
        let err = form("3", "11", "1", "9").validate().expect_err("invalid");
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "priority"));
    }

    #[test]
    fn queue_item_tolerates_missing_fields() {
        let item: QueueItem =
            serde_json::from_str(r#"{"model_name":"Benchy","quantity":2}"#).expect("item");
        assert_eq!(item.priority_label(), "Normal");
        assert_eq!(item.id, None);
    }
}
