//! Citation style per APA, 7th edition.
//!
//! Only books and internet resources have templates. City and page count of
//! a book are not part of an APA reference, and source workbooks carry no
//! publication date for web pages, hence the `(n. d.)` marker.

use citegen_core::{BookRecord, CiteResult, InternetResourceRecord, Record, RecordKind, Standard};
use tracing::debug;

use crate::style::{unsupported, CitationStyle, StyleFormatter};

/// Book: `$authors ($year). $title. $edition$publisher.`
#[derive(Debug, Clone, Copy)]
pub struct ApaBook<'a> {
    data: &'a BookRecord,
}

impl<'a> ApaBook<'a> {
    #[must_use]
    pub fn new(data: &'a BookRecord) -> Self {
        Self { data }
    }

    /// `"(<edition> ed.). "`, or nothing for a single-edition book.
    fn edition(&self) -> String {
        self.data
            .edition()
            .map(|edition| format!("({edition} ed.). "))
            .unwrap_or_default()
    }
}

impl StyleFormatter for ApaBook<'_> {
    type Record = BookRecord;

    fn record(&self) -> &BookRecord {
        self.data
    }

    fn format(&self) -> String {
        let d = self.data;
        debug!(title = %d.title(), "Formatting APA book");
        format!(
            "{} ({}). {}. {}{}.",
            d.authors(),
            d.year(),
            d.title(),
            self.edition(),
            d.publisher()
        )
    }
}

/// Internet resource: `$article. (n. d.). $website. $link`
///
/// APA references carry no retrieval date, so `access_date` is never rendered.
#[derive(Debug, Clone, Copy)]
pub struct ApaInternetResource<'a> {
    data: &'a InternetResourceRecord,
}

impl<'a> ApaInternetResource<'a> {
    #[must_use]
    pub fn new(data: &'a InternetResourceRecord) -> Self {
        Self { data }
    }
}

impl StyleFormatter for ApaInternetResource<'_> {
    type Record = InternetResourceRecord;

    fn record(&self) -> &InternetResourceRecord {
        self.data
    }

    fn format(&self) -> String {
        let d = self.data;
        debug!(article = %d.article(), "Formatting APA internet resource");
        format!("{}. (n. d.). {}. {}", d.article(), d.website(), d.link())
    }
}

/// APA covers books and internet resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct Apa;

impl CitationStyle for Apa {
    fn standard(&self) -> Standard {
        Standard::Apa
    }

    fn supports(&self, kind: RecordKind) -> bool {
        matches!(kind, RecordKind::Book | RecordKind::InternetResource)
    }

    fn render(&self, record: &Record) -> CiteResult<String> {
        match record {
            Record::Book(r) => Ok(ApaBook::new(r).format()),
            Record::InternetResource(r) => Ok(ApaInternetResource::new(r).format()),
            Record::ArticlesCollection(_) | Record::MagazineArticle(_) | Record::NewsArticle(_) => {
                Err(unsupported(self.standard(), record))
            }
        }
    }
}
