mod common;

use citegen_core::{CiteError, Record, RecordKind, Standard};
use citegen_formatting::{Apa, ApaBook, ApaInternetResource, CitationStyle, StyleFormatter};
use common::*;

#[test]
fn test_book() {
    let record = book();
    assert_eq!(
        ApaBook::new(&record).format(),
        "Иванов И.М., Петров С.Н. (2020). Наука как искусство. (3-е ed.). Просвещение."
    );
}

#[test]
fn test_book_without_edition() {
    let record = book_with(None, "СПб.", 999);
    assert_eq!(
        ApaBook::new(&record).format(),
        "Иванов И.М., Петров С.Н. (2020). Наука как искусство. Просвещение."
    );
}

#[test]
fn test_book_ignores_city_and_pages() {
    let record = book();
    let other = book_with(Some("3-е"), "М.", 12);
    assert_eq!(ApaBook::new(&record).format(), ApaBook::new(&other).format());
}

#[test]
fn test_internet_resource() {
    let record = internet_resource();
    assert_eq!(
        ApaInternetResource::new(&record).format(),
        "Наука как искусство. (n. d.). Ведомости. https://www.vedomosti.ru"
    );
}

#[test]
fn test_internet_resource_omits_access_date() {
    let record = internet_resource();
    assert!(!ApaInternetResource::new(&record)
        .format()
        .contains(record.access_date()));
}

#[test]
fn test_style_supports() {
    assert_eq!(Apa.standard(), Standard::Apa);
    assert!(Apa.supports(RecordKind::Book));
    assert!(Apa.supports(RecordKind::InternetResource));
    assert!(!Apa.supports(RecordKind::ArticlesCollection));
    assert!(!Apa.supports(RecordKind::MagazineArticle));
    assert!(!Apa.supports(RecordKind::NewsArticle));
}

#[test]
fn test_unsupported_kinds_fail_with_dispatch_error() {
    let records = [
        Record::from(collection_article()),
        Record::from(magazine_article()),
        Record::from(news_article()),
    ];
    for record in &records {
        match Apa.render(record) {
            Err(CiteError::Dispatch { standard, kind }) => {
                assert_eq!(standard, Standard::Apa);
                assert_eq!(kind, record.kind());
            }
            other => panic!("expected dispatch error, got {other:?}"),
        }
    }
}
