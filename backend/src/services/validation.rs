//! Field-level validation for the work order intake form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::api::{Client, NewWorkOrder};

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

/// Field name (as submitted, camelCase) → messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("Validation failed for {} field(s)", .fields.len())]
pub struct ValidationErrors {
    pub fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// `HH:MM`, 24-hour clock.
pub fn is_valid_time(value: &str) -> bool {
    let Some((hours, minutes)) = value.split_once(':') else {
        return false;
    };
    if hours.len() != 2 || minutes.len() != 2 {
        return false;
    }
    match (hours.parse::<u32>(), minutes.parse::<u32>()) {
        (Ok(h), Ok(m)) => h < 24 && m < 60,
        _ => false,
    }
}

/// Validate a submitted work order against the known clients.
pub fn validate_new_work_order(
    form: &NewWorkOrder,
    clients: &[Client],
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let title = form.title.trim();
    if title.is_empty() {
        errors.add("title", "Title is required");
    } else if title.chars().count() > MAX_TITLE_LEN {
        errors.add(
            "title",
            format!("Title must be at most {} characters", MAX_TITLE_LEN),
        );
    }

    if form.category.trim().is_empty() {
        errors.add("category", "Category is required");
    }

    if let Some(time) = form.scheduled_time.as_deref() {
        if !is_valid_time(time) {
            errors.add("scheduledTime", "Time must be in HH:MM format");
        }
        if form.scheduled_date.is_none() {
            errors.add("scheduledTime", "A scheduled time requires a scheduled date");
        }
    }

    if let Some(duration) = form.estimated_duration {
        if duration == 0 || duration > MAX_DURATION_MINUTES {
            errors.add(
                "estimatedDuration",
                format!(
                    "Estimated duration must be between 1 and {} minutes",
                    MAX_DURATION_MINUTES
                ),
            );
        }
    }

    if let Some(client_id) = form.client_id {
        if !clients.iter().any(|c| c.id == client_id) {
            errors.add("clientId", format!("Client {} does not exist", client_id));
        }
    }

    errors.into_result()
}
