//! Citation standards and the record kinds each one reads.

use std::fmt;

use crate::record::RecordKind;

/// A citation standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Standard {
    /// GOST R 7.0.5-2008.
    Gost,
    /// APA, 7th edition.
    Apa,
}

impl Standard {
    /// Every supported standard.
    pub const ALL: [Standard; 2] = [Standard::Gost, Standard::Apa];

    /// Record kinds read from a workbook under this standard, in reading order.
    #[must_use]
    pub fn record_kinds(self) -> &'static [RecordKind] {
        match self {
            Standard::Gost => &RecordKind::ALL,
            Standard::Apa => &[RecordKind::Book, RecordKind::InternetResource],
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Standard::Gost => write!(f, "GOST"),
            Standard::Apa => write!(f, "APA"),
        }
    }
}
