use std::fmt;

use citegen_core::{CiteResult, Record, Standard};
use tracing::info;

use crate::style::CitationStyle;
use crate::style_for;

/// A record paired with its rendered citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedItem {
    record: Record,
    rendered: String,
}

impl FormattedItem {
    #[must_use]
    pub fn record(&self) -> &Record {
        &self.record
    }

    #[must_use]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    #[must_use]
    pub fn into_rendered(self) -> String {
        self.rendered
    }
}

impl fmt::Display for FormattedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Formats a mixed list of records under one citation standard.
#[derive(Clone, Copy)]
pub struct CitationFormatter<'s> {
    style: &'s dyn CitationStyle,
}

impl<'s> CitationFormatter<'s> {
    #[must_use]
    pub fn new(style: &'s dyn CitationStyle) -> Self {
        Self { style }
    }

    #[must_use]
    pub fn standard(&self) -> Standard {
        self.style.standard()
    }

    /// Render every record and sort the results by rendered text.
    ///
    /// The sort is stable and compares code points, so records that render
    /// identically keep their input order. A record the style has no
    /// formatter for aborts the whole call.
    pub fn format<I>(&self, records: I) -> CiteResult<Vec<FormattedItem>>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut items = records
            .into_iter()
            .map(|record| {
                let rendered = self.style.render(&record)?;
                Ok(FormattedItem { record, rendered })
            })
            .collect::<CiteResult<Vec<_>>>()?;

        items.sort_by(|a, b| a.rendered.cmp(&b.rendered));

        info!(count = items.len(), standard = %self.standard(), "Formatted citations");
        Ok(items)
    }
}

impl CitationFormatter<'static> {
    /// Formatter backed by the built-in style for `standard`.
    #[must_use]
    pub fn for_standard(standard: Standard) -> Self {
        Self::new(style_for(standard))
    }
}

impl fmt::Debug for CitationFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CitationFormatter")
            .field("standard", &self.standard())
            .finish()
    }
}
