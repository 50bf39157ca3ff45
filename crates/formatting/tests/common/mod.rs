#![allow(dead_code)]

use citegen_core::{
    ArticlesCollectionRecord, BookRecord, InternetResourceRecord, MagazineArticleRecord,
    NewsArticleRecord,
};

pub const AUTHORS: &str = "Иванов И.М., Петров С.Н.";
pub const TITLE: &str = "Наука как искусство";

pub fn book() -> BookRecord {
    book_with(Some("3-е"), "СПб.", 999)
}

pub fn book_with(edition: Option<&str>, city: &str, pages: i64) -> BookRecord {
    BookRecord::new(
        AUTHORS,
        TITLE,
        edition.map(str::to_string),
        city,
        "Просвещение",
        2020,
        pages,
    )
    .unwrap()
}

pub fn internet_resource() -> InternetResourceRecord {
    InternetResourceRecord::new(TITLE, "Ведомости", "https://www.vedomosti.ru", "01.01.2021")
        .unwrap()
}

pub fn collection_article() -> ArticlesCollectionRecord {
    ArticlesCollectionRecord::new(
        AUTHORS,
        TITLE,
        "Сборник научных трудов",
        "СПб.",
        "АСТ",
        2020,
        "25-30",
    )
    .unwrap()
}

pub fn magazine_article() -> MagazineArticleRecord {
    MagazineArticleRecord::new(AUTHORS, TITLE, "Образование и наука", 2020, 10, "25-30").unwrap()
}

pub fn news_article() -> NewsArticleRecord {
    NewsArticleRecord::new(AUTHORS, TITLE, "Южный Урал", 1980, "01.10", 5).unwrap()
}
