//! Citation style per GOST R 7.0.5-2008.

use citegen_core::{
    ArticlesCollectionRecord, BookRecord, CiteResult, InternetResourceRecord,
    MagazineArticleRecord, NewsArticleRecord, Record, RecordKind, Standard,
};
use tracing::debug;

use crate::style::{CitationStyle, StyleFormatter};

/// Book: `$authors $title. – $edition$city: $publisher, $year. – $pages с.`
#[derive(Debug, Clone, Copy)]
pub struct GostBook<'a> {
    data: &'a BookRecord,
}

impl<'a> GostBook<'a> {
    #[must_use]
    pub fn new(data: &'a BookRecord) -> Self {
        Self { data }
    }

    /// `"<edition> изд. – "`, or nothing for a single-edition book.
    fn edition(&self) -> String {
        self.data
            .edition()
            .map(|edition| format!("{edition} изд. – "))
            .unwrap_or_default()
    }
}

impl StyleFormatter for GostBook<'_> {
    type Record = BookRecord;

    fn record(&self) -> &BookRecord {
        self.data
    }

    fn format(&self) -> String {
        let d = self.data;
        debug!(title = %d.title(), "Formatting GOST book");
        format!(
            "{} {}. – {}{}: {}, {}. – {} с.",
            d.authors(),
            d.title(),
            self.edition(),
            d.city(),
            d.publisher(),
            d.year(),
            d.pages()
        )
    }
}

/// Internet resource: `$article // $website URL: $link (дата обращения: $access_date).`
#[derive(Debug, Clone, Copy)]
pub struct GostInternetResource<'a> {
    data: &'a InternetResourceRecord,
}

impl<'a> GostInternetResource<'a> {
    #[must_use]
    pub fn new(data: &'a InternetResourceRecord) -> Self {
        Self { data }
    }
}

impl StyleFormatter for GostInternetResource<'_> {
    type Record = InternetResourceRecord;

    fn record(&self) -> &InternetResourceRecord {
        self.data
    }

    fn format(&self) -> String {
        let d = self.data;
        debug!(article = %d.article(), "Formatting GOST internet resource");
        format!(
            "{} // {} URL: {} (дата обращения: {}).",
            d.article(), d.website(), d.link(), d.access_date()
        )
    }
}

/// Article from a collection:
/// `$authors $article_title // $collection_title. – $city: $publisher, $year. – С. $pages.`
#[derive(Debug, Clone, Copy)]
pub struct GostCollectionArticle<'a> {
    data: &'a ArticlesCollectionRecord,
}

impl<'a> GostCollectionArticle<'a> {
    #[must_use]
    pub fn new(data: &'a ArticlesCollectionRecord) -> Self {
        Self { data }
    }
}

impl StyleFormatter for GostCollectionArticle<'_> {
    type Record = ArticlesCollectionRecord;

    fn record(&self) -> &ArticlesCollectionRecord {
        self.data
    }

    fn format(&self) -> String {
        let d = self.data;
        debug!(title = %d.article_title(), "Formatting GOST collection article");
        format!(
            "{} {} // {}. – {}: {}, {}. – С. {}.",
            d.authors(),
            d.article_title(),
            d.collection_title(),
            d.city(),
            d.publisher(),
            d.year(),
            d.pages()
        )
    }
}

/// Magazine article:
/// `$authors $article_name // $magazine_name. – $pub_year. – № $magazine_num. – С. $pages.`
#[derive(Debug, Clone, Copy)]
pub struct GostMagazineArticle<'a> {
    data: &'a MagazineArticleRecord,
}

impl<'a> GostMagazineArticle<'a> {
    #[must_use]
    pub fn new(data: &'a MagazineArticleRecord) -> Self {
        Self { data }
    }
}

impl StyleFormatter for GostMagazineArticle<'_> {
    type Record = MagazineArticleRecord;

    fn record(&self) -> &MagazineArticleRecord {
        self.data
    }

    fn format(&self) -> String {
        let d = self.data;
        debug!(title = %d.article_name(), "Formatting GOST magazine article");
        format!(
            "{} {} // {}. – {}. – № {}. – С. {}.",
            d.authors(),
            d.article_name(),
            d.magazine_name(),
            d.pub_year(),
            d.magazine_num(),
            d.pages()
        )
    }
}

/// Newspaper article:
/// `$authors $article_name // $news_name. – $edition_year. – № $article_num. – $news_pub_date.`
#[derive(Debug, Clone, Copy)]
pub struct GostNewsArticle<'a> {
    data: &'a NewsArticleRecord,
}

impl<'a> GostNewsArticle<'a> {
    #[must_use]
    pub fn new(data: &'a NewsArticleRecord) -> Self {
        Self { data }
    }
}

impl StyleFormatter for GostNewsArticle<'_> {
    type Record = NewsArticleRecord;

    fn record(&self) -> &NewsArticleRecord {
        self.data
    }

    fn format(&self) -> String {
        let d = self.data;
        debug!(title = %d.article_name(), "Formatting GOST news article");
        format!(
            "{} {} // {}. – {}. – № {}. – {}.",
            d.authors(),
            d.article_name(),
            d.news_name(),
            d.edition_year(),
            d.article_num(),
            d.news_pub_date()
        )
    }
}

/// GOST covers every record variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gost;

impl CitationStyle for Gost {
    fn standard(&self) -> Standard {
        Standard::Gost
    }

    fn supports(&self, _kind: RecordKind) -> bool {
        true
    }

    fn render(&self, record: &Record) -> CiteResult<String> {
        let rendered = match record {
            Record::Book(r) => GostBook::new(r).format(),
            Record::InternetResource(r) => GostInternetResource::new(r).format(),
            Record::ArticlesCollection(r) => GostCollectionArticle::new(r).format(),
            Record::MagazineArticle(r) => GostMagazineArticle::new(r).format(),
            Record::NewsArticle(r) => GostNewsArticle::new(r).format(),
        };
        Ok(rendered)
    }
}
