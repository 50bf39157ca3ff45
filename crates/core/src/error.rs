//! Error types for citegen.

use std::fmt;

use citegen_sheet::SheetError;
use thiserror::Error;

use crate::record::RecordKind;
use crate::standard::Standard;

/// Result type for citegen operations.
pub type CiteResult<T> = Result<T, CiteError>;

/// Where a record came from, when it was read from a workbook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Location {
    /// Built directly, not read from a sheet.
    #[default]
    Unknown,
    /// A 1-based spreadsheet row on a named sheet.
    Row { sheet: String, row: usize },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Unknown => Ok(()),
            Location::Row { sheet, row } => write!(f, " (sheet '{sheet}', row {row})"),
        }
    }
}

/// Errors that can occur in citegen.
#[derive(Debug, Error)]
pub enum CiteError {
    /// A required field is missing or a positive-integer field is not one.
    #[error("Invalid {kind} record{location}: field `{field}` {reason}")]
    Validation {
        kind: RecordKind,
        field: String,
        reason: String,
        location: Location,
    },

    /// A sheet the selected standard needs is absent from the workbook.
    #[error("Source error: required sheet '{sheet}' is missing from the workbook")]
    Source { sheet: String },

    /// No formatter is registered for the record variant under the standard.
    #[error("Dispatch error: no {standard} formatter is registered for {kind} records")]
    Dispatch { standard: Standard, kind: RecordKind },

    /// The workbook itself could not be opened or parsed.
    #[error("Workbook error: {0}")]
    Workbook(#[from] SheetError),
}

impl CiteError {
    /// Create a validation error without a location.
    pub fn validation(
        kind: RecordKind,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            kind,
            field: field.into(),
            reason: reason.into(),
            location: Location::Unknown,
        }
    }

    /// Attach a sheet/row location to a validation error.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn at_row(self, sheet: &str, row: usize) -> Self {
        match self {
            Self::Validation {
                kind, field, reason, ..
            } => Self::Validation {
                kind,
                field,
                reason,
                location: Location::Row {
                    sheet: sheet.to_string(),
                    row,
                },
            },
            other => other,
        }
    }

    /// Build a validation error from the first violation reported by `validator`.
    pub(crate) fn from_violations(kind: RecordKind, errors: &validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let Some((field, violations)) = fields.into_iter().next() else {
            return Self::validation(kind, "<record>", "is invalid");
        };

        let reason = match violations.first().map(|v| &*v.code) {
            Some("length") => "must not be empty".to_string(),
            Some("range") => "must be a positive integer".to_string(),
            Some(code) => format!("failed `{code}` validation"),
            None => "is invalid".to_string(),
        };

        Self::validation(kind, field.to_string(), reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_with_location() {
        let err = CiteError::validation(RecordKind::Book, "year", "must be a positive integer")
            .at_row("Книга", 3);

        assert_eq!(
            err.to_string(),
            "Invalid book record (sheet 'Книга', row 3): field `year` must be a positive integer"
        );
    }

    #[test]
    fn test_at_row_keeps_other_errors() {
        let err = CiteError::Source {
            sheet: "Книга".to_string(),
        }
        .at_row("Книга", 2);

        assert!(matches!(err, CiteError::Source { sheet } if sheet == "Книга"));
    }

    #[test]
    fn test_dispatch_message() {
        let err = CiteError::Dispatch {
            standard: Standard::Apa,
            kind: RecordKind::NewsArticle,
        };
        assert_eq!(
            err.to_string(),
            "Dispatch error: no APA formatter is registered for news article records"
        );
    }
}
