//! Common extractors for API handlers.
//!
//! This module provides reusable types for request validation and parameter
//! extraction: UUID parsing for path segments and the model state that
//! accumulates field errors for a request body.

use std::collections::BTreeMap;
use std::fmt;

use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// Validated UUID helper
///
/// Use this to parse and validate UUIDs from string parameters.
///
/// # Example
/// ```ignore
/// let uuid = ValidatedUuid::parse(&id_string)?;
/// ```
pub struct ValidatedUuid;

impl ValidatedUuid {
    /// Parse a string into a UUID, returning an ApiError on failure
    pub fn parse(s: &str) -> Result<Uuid, ApiError> {
        Uuid::parse_str(s)
            .map_err(|_| ApiError::validation_field("id", format!("Invalid UUID: {}", s)))
    }
}

/// Field errors collected for a request body before it reaches a controller.
///
/// Built from a `validator` run or by hand with [`ModelState::add_error`].
/// Fields are kept in name order so error details render deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelState {
    errors: BTreeMap<String, Vec<String>>,
}

impl ModelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the derived validation rules of `value` and collect their errors.
    pub fn from_validation<T: Validate>(value: &T) -> Self {
        match value.validate() {
            Ok(()) => Self::new(),
            Err(errors) => Self::from(errors),
        }
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    pub fn first_field(&self) -> Option<&str> {
        self.errors.keys().next().map(String::as_str)
    }
}

impl From<ValidationErrors> for ModelState {
    fn from(errors: ValidationErrors) -> Self {
        let mut state = ModelState::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                state.add_error(field.to_string(), message);
            }
        }
        state
    }
}

impl fmt::Display for ModelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, messages.join(", "))?;
        }
        Ok(())
    }
}
