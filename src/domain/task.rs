//! Task - Task Distribution Requests and Results

use serde::{Deserialize, Serialize};

use crate::domain::queue::parse_integer;
use crate::error::{Error, Result};

/// Body of `POST /tasks/distribute/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    pub material: String,
    pub accuracy: f64,
    pub quantity: i64,
}

/// Raw distribution form input
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub material: String,
    pub accuracy: String,
    pub quantity: String,
}

impl TaskForm {
    /// Validate the form and build the request body
    pub fn validate(&self) -> Result<TaskRequest> {
        let material = self.material.trim();
        if material.is_empty() {
            return Err(Error::validation("material", "is required"));
        }

        let accuracy_raw = self.accuracy.trim();
        let accuracy = accuracy_raw
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0)
            .ok_or_else(|| {
                Error::validation(
                    "accuracy",
                    format!("'{accuracy_raw}' is not a positive number"),
                )
            })?;

        let quantity = parse_integer("quantity", &self.quantity)?;
        if quantity < 1 {
            return Err(Error::validation("quantity", "must be at least 1"));
        }

        Ok(TaskRequest {
            material: material.to_string(),
            accuracy,
            quantity,
        })
    }
}

/// Parts assigned to one printer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedTask {
    #[serde(default)]
    pub printer_name: String,
    #[serde(default)]
    pub parts_assigned: i64,
}

/// Response of `POST /tasks/distribute/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tasks: Vec<AssignedTask>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl DistributionResponse {
    /// Accepted assignments, or the backend's refusal
    pub fn into_tasks(self) -> Result<Vec<AssignedTask>> {
        if self.status == "success" {
            Ok(self.tasks)
        } else {
            Err(Error::Distribution {
                detail: self
                    .detail
                    .unwrap_or_else(|| "Failed to distribute tasks".to_string()),
            })
        }
    }
}
