//! Field rules for proposed task values.
//!
//! Checks only the fields present in a [`FieldUpdates`]; absent fields and
//! unknown keys pass. Every rule is evaluated independently of key order.
//!
//! | field      | rule                                    |
//! |------------|-----------------------------------------|
//! | `name`     | non-empty                               |
//! | `category` | non-empty                               |
//! | `priority` | exactly `Low`, `Medium` or `High`       |
//! | `status`   | exactly `Pending` or `Completed`        |

use super::error::ValidationError;
use super::task::{FieldUpdates, Priority, Status};

/// Returns the first broken rule, checking name, category, priority, then status.
pub fn check(fields: &FieldUpdates) -> Result<(), ValidationError> {
    if fields.get("name").is_some_and(str::is_empty) {
        return Err(ValidationError::EmptyName);
    }
    if fields.get("category").is_some_and(str::is_empty) {
        return Err(ValidationError::EmptyCategory);
    }
    if let Some(priority) = fields.get("priority") {
        priority.parse::<Priority>()?;
    }
    if let Some(status) = fields.get("status") {
        status.parse::<Status>()?;
    }
    Ok(())
}

pub fn is_valid(fields: &FieldUpdates) -> bool {
    check(fields).is_ok()
}
