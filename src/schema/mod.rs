//! # Schema
//!
//! Field constraints checked before an input is sent anywhere. Inputs derive
//! [`serde_valid::Validate`] and [`check`] turns every failing field into a [`FieldIssue`] so the
//! caller can show them all at once instead of one per submission.

use std::fmt;
use serde_json::Value;
use serde_valid::Validate;

/// A single failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// The field name, as it appears on the wire.
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// An input failed its schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed: {}", display_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Creates a [`ValidationError`] for a single field.
    pub fn field<S: Into<String>>(field: &str, message: S) -> Self {
        Self {
            issues: vec![FieldIssue {
                field: field.to_string(),
                message: message.into(),
            }],
        }
    }
    
    /// Checks if `field` is among the failing fields.
    pub fn has_issue(&self, field: &str) -> bool {
        self.issue(field).is_some()
    }
    
    /// The first issue recorded for `field`, if any.
    pub fn issue(&self, field: &str) -> Option<&FieldIssue> {
        self.issues.iter().find(|issue| issue.field == field)
    }
}

impl From<serde_valid::validation::Errors> for ValidationError {
    fn from(errors: serde_valid::validation::Errors) -> Self {
        let mut issues = Vec::new();
        
        if let Ok(value) = serde_json::to_value(&errors) {
            collect_issues("", &value, &mut issues);
        }
        
        if issues.is_empty() {
            // errors that could not be attributed to a field
            issues.push(FieldIssue {
                field: String::new(),
                message: errors.to_string(),
            });
        }
        
        Self {
            issues,
        }
    }
}

/// Validates `input`, collecting every failing field.
pub fn check<T>(input: &T) -> Result<(), ValidationError>
where
    T: Validate,
{
    input.validate().map_err(ValidationError::from)
}

/// Converts a value already checked against its range into the wire type.
pub fn narrow<N>(field: &str, value: Option<i64>) -> Result<Option<N>, ValidationError>
where
    N: TryFrom<i64>,
{
    value
        .map(|value| N::try_from(value)
            .map_err(|_| ValidationError::field(field, format!("{} is out of range", value))))
        .transpose()
}

fn display_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Walks serialized validation errors. Each level holds its own `errors` and nests fields
/// under `properties`.
fn collect_issues(field: &str, value: &Value, issues: &mut Vec<FieldIssue>) {
    if let Some(messages) = value.get("errors").and_then(Value::as_array) {
        for message in messages {
            let message = match message {
                Value::String(message) => message.clone(),
                other => other.to_string(),
            };
            
            issues.push(FieldIssue {
                field: field.to_string(),
                message,
            });
        }
    }
    
    if let Some(properties) = value.get("properties").and_then(Value::as_object) {
        for (name, nested) in properties {
            collect_issues(&camel_case(name), nested, issues);
        }
    }
}

/// Field names go out camelCase on the wire.
fn camel_case(name: &str) -> String {
    let mut output = String::with_capacity(name.len());
    let mut upper = false;
    
    for c in name.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            output.extend(c.to_uppercase());
            upper = false;
        } else {
            output.push(c);
        }
    }
    
    output
}
