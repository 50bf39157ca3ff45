//! # citegen-reader
//!
//! Reads bibliographic records out of a source workbook.
//!
//! Each record variant lives on its own sheet ("Книга", "Интернет-ресурс",
//! "Статья из сборника", "Статья из журнала", "Статья из газеты"). Row 1 holds
//! headers; every following non-blank row becomes one validated [`Record`].
//! A [`SourcesReader`] reads the variants its citation standard supports:
//! all five for GOST, books and internet resources for APA.
//!
//! [`Record`]: citegen_core::Record

mod columns;
mod readers;
mod sources;

pub use columns::{CoercedRow, Coercion, Column, FieldValue};
pub use readers::{
    reader_for, ArticlesCollectionReader, BookReader, InternetResourceReader,
    MagazineArticleReader, NewsArticleReader, RecordReader, HEADER_ROWS,
};
pub use sources::{template_book, write_template, SourcesReader};
