use serde::Serialize;

use crate::types::DbId;

/// A single field that failed a validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// The input could not be decoded into the expected shape.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The input decoded, but one or more fields broke a rule.
    #[error("Validation failed: {}", describe_violations(.0))]
    InvalidFields(Vec<FieldViolation>),
}

fn describe_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.rule))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let rule = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    FieldViolation::new(field.to_string(), rule)
                })
            })
            .collect();
        // HashMap iteration order is unstable; keep messages deterministic.
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        CoreError::InvalidFields(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fields_message_lists_every_violation() {
        let err = CoreError::InvalidFields(vec![
            FieldViolation::new("name", "must not be blank"),
            FieldViolation::new("price", "must be greater than 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: name: must not be blank; price: must be greater than 0"
        );
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Item",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Item with id 7");
    }
}
