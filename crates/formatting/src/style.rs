use citegen_core::{CiteError, CiteResult, Record, RecordKind, Standard};

/// Renders one record variant under one citation standard.
///
/// Implementors borrow a single record and render it through a fixed
/// template. `format` is pure: the same record always yields the same text.
pub trait StyleFormatter {
    /// The record variant this formatter accepts.
    type Record;

    fn record(&self) -> &Self::Record;

    fn format(&self) -> String;
}

/// A citation standard's formatter table.
///
/// `render` matches exhaustively on [`Record`], so adding a record variant
/// forces every style to decide how to handle it.
pub trait CitationStyle: Sync {
    fn standard(&self) -> Standard;

    /// Whether a formatter is registered for `kind`.
    fn supports(&self, kind: RecordKind) -> bool;

    /// Render a record, or fail with [`CiteError::Dispatch`] when the
    /// variant has no formatter under this standard.
    fn render(&self, record: &Record) -> CiteResult<String>;
}

/// The error a style returns for a variant it does not cover.
pub(crate) fn unsupported(standard: Standard, record: &Record) -> CiteError {
    CiteError::Dispatch {
        standard,
        kind: record.kind(),
    }
}
