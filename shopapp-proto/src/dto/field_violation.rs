use serde::Serialize;
use validator::ValidationErrors;

/// A single failed constraint on a request field.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl ToString, message: impl ToString) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Flattens validator output, ordered by field name. Errors without a
    /// message fall back to their code.
    pub fn from_errors(errors: &ValidationErrors) -> Vec<Self> {
        let mut violations: Vec<Self> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    let message = match &e.message {
                        Some(message) => message.to_string(),
                        None => e.code.to_string(),
                    };
                    Self::new(&field, message)
                })
            })
            .collect();
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        violations
    }

    pub fn messages(violations: &[Self]) -> Vec<String> {
        violations.iter().map(|v| v.message.clone()).collect()
    }
}

/// Explicit validation entry point invoked by handlers before any other logic.
pub trait ValidateDto {
    fn violations(&self) -> Vec<FieldViolation>;

    fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }
}
