//! Bibliographic record types.
//!
//! Records are value objects that can only be built through their `new`
//! constructors, which check every field: required text must be non-empty
//! and counts/years must be positive. Fields are private and exposed through
//! getters, so a record never changes after construction.

use std::fmt;

use validator::Validate;

use crate::error::{CiteError, CiteResult};

/// The variant of a bibliographic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    Book,
    InternetResource,
    ArticlesCollection,
    MagazineArticle,
    NewsArticle,
}

impl RecordKind {
    /// Every variant, in the order a GOST workbook is read.
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Book,
        RecordKind::InternetResource,
        RecordKind::ArticlesCollection,
        RecordKind::MagazineArticle,
        RecordKind::NewsArticle,
    ];
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Book => "book",
            RecordKind::InternetResource => "internet resource",
            RecordKind::ArticlesCollection => "articles collection",
            RecordKind::MagazineArticle => "magazine article",
            RecordKind::NewsArticle => "news article",
        };
        f.write_str(name)
    }
}

fn checked<T: Validate>(kind: RecordKind, record: T) -> CiteResult<T> {
    record
        .validate()
        .map_err(|errors| CiteError::from_violations(kind, &errors))?;
    Ok(record)
}

/// A book.
///
/// ```
/// use citegen_core::BookRecord;
///
/// let book = BookRecord::new(
///     "Иванов И.М., Петров С.Н.",
///     "Наука как искусство",
///     Some("3-е".to_string()),
///     "СПб.",
///     "Просвещение",
///     2020,
///     999,
/// )
/// .unwrap();
/// assert_eq!(book.year(), 2020);
///
/// assert!(BookRecord::new("Иванов И.М.", "Алгебра", None, "М.", "Наука", 0, 10).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct BookRecord {
    #[validate(length(min = 1))]
    authors: String,
    #[validate(length(min = 1))]
    title: String,
    /// Absent when the book has a single edition; never `Some("")`.
    #[validate(length(min = 1))]
    edition: Option<String>,
    #[validate(length(min = 1))]
    city: String,
    #[validate(length(min = 1))]
    publisher: String,
    #[validate(range(min = 1))]
    year: i64,
    #[validate(range(min = 1))]
    pages: i64,
}

impl BookRecord {
    pub fn new(
        authors: impl Into<String>,
        title: impl Into<String>,
        edition: Option<String>,
        city: impl Into<String>,
        publisher: impl Into<String>,
        year: i64,
        pages: i64,
    ) -> CiteResult<Self> {
        checked(
            RecordKind::Book,
            Self {
                authors: authors.into(),
                title: title.into(),
                edition,
                city: city.into(),
                publisher: publisher.into(),
                year,
                pages,
            },
        )
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn edition(&self) -> Option<&str> {
        self.edition.as_deref()
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn pages(&self) -> i64 {
        self.pages
    }
}

/// A web page.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct InternetResourceRecord {
    #[validate(length(min = 1))]
    article: String,
    #[validate(length(min = 1))]
    website: String,
    #[validate(length(min = 1))]
    link: String,
    #[validate(length(min = 1))]
    access_date: String,
}

impl InternetResourceRecord {
    pub fn new(
        article: impl Into<String>,
        website: impl Into<String>,
        link: impl Into<String>,
        access_date: impl Into<String>,
    ) -> CiteResult<Self> {
        checked(
            RecordKind::InternetResource,
            Self {
                article: article.into(),
                website: website.into(),
                link: link.into(),
                access_date: access_date.into(),
            },
        )
    }

    pub fn article(&self) -> &str {
        &self.article
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// Free-form, usually `DD.MM.YYYY`.
    pub fn access_date(&self) -> &str {
        &self.access_date
    }
}

/// An article published in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ArticlesCollectionRecord {
    #[validate(length(min = 1))]
    authors: String,
    #[validate(length(min = 1))]
    article_title: String,
    #[validate(length(min = 1))]
    collection_title: String,
    #[validate(length(min = 1))]
    city: String,
    #[validate(length(min = 1))]
    publisher: String,
    #[validate(range(min = 1))]
    year: i64,
    #[validate(length(min = 1))]
    pages: String,
}

impl ArticlesCollectionRecord {
    pub fn new(
        authors: impl Into<String>,
        article_title: impl Into<String>,
        collection_title: impl Into<String>,
        city: impl Into<String>,
        publisher: impl Into<String>,
        year: i64,
        pages: impl Into<String>,
    ) -> CiteResult<Self> {
        checked(
            RecordKind::ArticlesCollection,
            Self {
                authors: authors.into(),
                article_title: article_title.into(),
                collection_title: collection_title.into(),
                city: city.into(),
                publisher: publisher.into(),
                year,
                pages: pages.into(),
            },
        )
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn article_title(&self) -> &str {
        &self.article_title
    }

    pub fn collection_title(&self) -> &str {
        &self.collection_title
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    /// Page range, e.g. `25-30`.
    pub fn pages(&self) -> &str {
        &self.pages
    }
}

/// An article from a magazine issue.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct MagazineArticleRecord {
    #[validate(length(min = 1))]
    authors: String,
    #[validate(length(min = 1))]
    article_name: String,
    #[validate(length(min = 1))]
    magazine_name: String,
    #[validate(range(min = 1))]
    pub_year: i64,
    #[validate(range(min = 1))]
    magazine_num: i64,
    #[validate(length(min = 1))]
    pages: String,
}

impl MagazineArticleRecord {
    pub fn new(
        authors: impl Into<String>,
        article_name: impl Into<String>,
        magazine_name: impl Into<String>,
        pub_year: i64,
        magazine_num: i64,
        pages: impl Into<String>,
    ) -> CiteResult<Self> {
        checked(
            RecordKind::MagazineArticle,
            Self {
                authors: authors.into(),
                article_name: article_name.into(),
                magazine_name: magazine_name.into(),
                pub_year,
                magazine_num,
                pages: pages.into(),
            },
        )
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn article_name(&self) -> &str {
        &self.article_name
    }

    pub fn magazine_name(&self) -> &str {
        &self.magazine_name
    }

    pub fn pub_year(&self) -> i64 {
        self.pub_year
    }

    pub fn magazine_num(&self) -> i64 {
        self.magazine_num
    }

    pub fn pages(&self) -> &str {
        &self.pages
    }
}

/// An article from a newspaper issue.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewsArticleRecord {
    #[validate(length(min = 1))]
    authors: String,
    #[validate(length(min = 1))]
    article_name: String,
    #[validate(length(min = 1))]
    news_name: String,
    #[validate(range(min = 1))]
    edition_year: i64,
    #[validate(length(min = 1))]
    news_pub_date: String,
    #[validate(range(min = 1))]
    article_num: i64,
}

impl NewsArticleRecord {
    pub fn new(
        authors: impl Into<String>,
        article_name: impl Into<String>,
        news_name: impl Into<String>,
        edition_year: i64,
        news_pub_date: impl Into<String>,
        article_num: i64,
    ) -> CiteResult<Self> {
        checked(
            RecordKind::NewsArticle,
            Self {
                authors: authors.into(),
                article_name: article_name.into(),
                news_name: news_name.into(),
                edition_year,
                news_pub_date: news_pub_date.into(),
                article_num,
            },
        )
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn article_name(&self) -> &str {
        &self.article_name
    }

    pub fn news_name(&self) -> &str {
        &self.news_name
    }

    pub fn edition_year(&self) -> i64 {
        self.edition_year
    }

    /// Day and month of the issue, e.g. `01.10`.
    pub fn news_pub_date(&self) -> &str {
        &self.news_pub_date
    }

    pub fn article_num(&self) -> i64 {
        self.article_num
    }
}

/// Any bibliographic record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Book(BookRecord),
    InternetResource(InternetResourceRecord),
    ArticlesCollection(ArticlesCollectionRecord),
    MagazineArticle(MagazineArticleRecord),
    NewsArticle(NewsArticleRecord),
}

impl Record {
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Book(_) => RecordKind::Book,
            Record::InternetResource(_) => RecordKind::InternetResource,
            Record::ArticlesCollection(_) => RecordKind::ArticlesCollection,
            Record::MagazineArticle(_) => RecordKind::MagazineArticle,
            Record::NewsArticle(_) => RecordKind::NewsArticle,
        }
    }

    /// The work's own title, used in diagnostics.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Record::Book(r) => r.title(),
            Record::InternetResource(r) => r.article(),
            Record::ArticlesCollection(r) => r.article_title(),
            Record::MagazineArticle(r) => r.article_name(),
            Record::NewsArticle(r) => r.article_name(),
        }
    }
}

impl From<BookRecord> for Record {
    fn from(r: BookRecord) -> Self {
        Record::Book(r)
    }
}

impl From<InternetResourceRecord> for Record {
    fn from(r: InternetResourceRecord) -> Self {
        Record::InternetResource(r)
    }
}

impl From<ArticlesCollectionRecord> for Record {
    fn from(r: ArticlesCollectionRecord) -> Self {
        Record::ArticlesCollection(r)
    }
}

impl From<MagazineArticleRecord> for Record {
    fn from(r: MagazineArticleRecord) -> Self {
        Record::MagazineArticle(r)
    }
}

impl From<NewsArticleRecord> for Record {
    fn from(r: NewsArticleRecord) -> Self {
        Record::NewsArticle(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTHORS: &str = "Иванов И.М., Петров С.Н.";
    const TITLE: &str = "Наука как искусство";

    fn book_with(edition: Option<&str>, year: i64, pages: i64) -> CiteResult<BookRecord> {
        BookRecord::new(
            AUTHORS,
            TITLE,
            edition.map(str::to_string),
            "СПб.",
            "Просвещение",
            year,
            pages,
        )
    }

    fn field_of(err: CiteError) -> String {
        match err {
            CiteError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_book() {
        let book = book_with(Some("3-е"), 2020, 999).unwrap();
        assert_eq!(book.authors(), AUTHORS);
        assert_eq!(book.edition(), Some("3-е"));
        assert_eq!(book.year(), 2020);
        assert_eq!(book.pages(), 999);

        assert_eq!(book_with(None, 2020, 999).unwrap().edition(), None);
    }

    #[test]
    fn test_zero_year_fails_construction() {
        let err = book_with(Some("3-е"), 0, 999).unwrap_err();
        assert!(matches!(
            err,
            CiteError::Validation { kind: RecordKind::Book, ref field, .. } if field == "year"
        ));
    }

    #[test]
    fn test_negative_pages_fail_construction() {
        let err = book_with(None, 2020, -3).unwrap_err();
        assert!(err.to_string().contains("must be a positive integer"));
    }

    #[test]
    fn test_empty_text_fails_construction() {
        let err = BookRecord::new(AUTHORS, "", None, "СПб.", "Просвещение", 2020, 999).unwrap_err();
        assert_eq!(field_of(err), "title");

        let err = book_with(Some(""), 2020, 999).unwrap_err();
        assert_eq!(field_of(err), "edition");

        let err = InternetResourceRecord::new(TITLE, "Ведомости", "", "01.01.2021").unwrap_err();
        assert_eq!(field_of(err), "link");
    }

    #[test]
    fn test_news_article_constraints() {
        let err = NewsArticleRecord::new(AUTHORS, TITLE, "Южный Урал", 1980, "01.10", 0)
            .unwrap_err();
        assert!(matches!(
            err,
            CiteError::Validation { kind: RecordKind::NewsArticle, ref field, .. } if field == "article_num"
        ));
    }

    #[test]
    fn test_article_constraints() {
        let err = MagazineArticleRecord::new(AUTHORS, TITLE, "Образование и наука", 2020, 0, "25-30")
            .unwrap_err();
        assert_eq!(field_of(err), "magazine_num");

        let err =
            ArticlesCollectionRecord::new(AUTHORS, TITLE, "Сборник", "СПб.", "АСТ", 2020, "")
                .unwrap_err();
        assert_eq!(field_of(err), "pages");
    }

    #[test]
    fn test_record_kind_and_title() {
        let record = Record::from(book_with(None, 2020, 999).unwrap());
        assert_eq!(record.kind(), RecordKind::Book);
        assert_eq!(record.title(), TITLE);
        assert_eq!(RecordKind::MagazineArticle.to_string(), "magazine article");
    }
}
