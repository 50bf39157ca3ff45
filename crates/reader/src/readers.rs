use citegen_core::{
    ArticlesCollectionRecord, BookRecord, CiteError, CiteResult, InternetResourceRecord,
    MagazineArticleRecord, NewsArticleRecord, Record, RecordKind,
};
use citegen_sheet::{Book, CellValue, SheetError};
use tracing::{debug, info};

use crate::columns::{CoercedRow, Column, Coercion};

/// Number of header rows at the top of every source sheet.
pub const HEADER_ROWS: usize = 1;

/// Reads one record variant from its sheet.
pub trait RecordReader: Sync {
    fn kind(&self) -> RecordKind;

    /// Name of the sheet holding this variant.
    fn sheet(&self) -> &'static str;

    /// Column map of the sheet, in column order.
    fn columns(&self) -> &'static [Column];

    /// Build a validated record from a coerced row.
    fn build(&self, row: CoercedRow) -> CiteResult<Record>;

    /// Read every data row of the sheet.
    ///
    /// Rows whose cells are all blank are skipped.
    fn read(&self, book: &Book) -> CiteResult<Vec<Record>> {
        let sheet = book.get_sheet(self.sheet()).map_err(|err| match err {
            SheetError::SheetNotFound { name } => CiteError::Source { sheet: name },
            other => CiteError::Workbook(other),
        })?;

        info!(sheet = self.sheet(), "Reading {} records", self.kind());

        let mut records = Vec::new();
        for (row_number, row) in sheet.data_rows(HEADER_ROWS) {
            if row.iter().all(CellValue::is_blank) {
                continue;
            }
            let record = CoercedRow::coerce(self.kind(), self.columns(), row)
                .and_then(|fields| self.build(fields))
                .map_err(|err| err.at_row(self.sheet(), row_number))?;
            debug!(row = row_number, title = record.title(), "Read record");
            records.push(record);
        }

        Ok(records)
    }
}

/// Reader for books.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookReader;

impl RecordReader for BookReader {
    fn kind(&self) -> RecordKind {
        RecordKind::Book
    }

    fn sheet(&self) -> &'static str {
        "Книга"
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new(0, "authors", "Авторы", Coercion::Text),
            Column::new(1, "title", "Название", Coercion::Text),
            Column::new(2, "edition", "Издание", Coercion::OptionalText),
            Column::new(3, "city", "Город", Coercion::Text),
            Column::new(4, "publisher", "Издательство", Coercion::Text),
            Column::new(5, "year", "Год издания", Coercion::Integer),
            Column::new(6, "pages", "Количество страниц", Coercion::Integer),
        ];
        COLUMNS
    }

    fn build(&self, mut row: CoercedRow) -> CiteResult<Record> {
        BookRecord::new(
            row.text("authors"),
            row.text("title"),
            row.optional_text("edition"),
            row.text("city"),
            row.text("publisher"),
            row.integer("year")?,
            row.integer("pages")?,
        )
        .map(Record::from)
    }
}

/// Reader for internet resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct InternetResourceReader;

impl RecordReader for InternetResourceReader {
    fn kind(&self) -> RecordKind {
        RecordKind::InternetResource
    }

    fn sheet(&self) -> &'static str {
        "Интернет-ресурс"
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new(0, "article", "Название статьи", Coercion::Text),
            Column::new(1, "website", "Сайт", Coercion::Text),
            Column::new(2, "link", "Ссылка", Coercion::Text),
            Column::new(3, "access_date", "Дата обращения", Coercion::Date),
        ];
        COLUMNS
    }

    fn build(&self, mut row: CoercedRow) -> CiteResult<Record> {
        InternetResourceRecord::new(
            row.text("article"),
            row.text("website"),
            row.text("link"),
            row.text("access_date"),
        )
        .map(Record::from)
    }
}

/// Reader for articles from collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticlesCollectionReader;

impl RecordReader for ArticlesCollectionReader {
    fn kind(&self) -> RecordKind {
        RecordKind::ArticlesCollection
    }

    fn sheet(&self) -> &'static str {
        "Статья из сборника"
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new(0, "authors", "Авторы", Coercion::Text),
            Column::new(1, "article_title", "Название статьи", Coercion::Text),
            Column::new(2, "collection_title", "Название сборника", Coercion::Text),
            Column::new(3, "city", "Город", Coercion::Text),
            Column::new(4, "publisher", "Издательство", Coercion::Text),
            Column::new(5, "year", "Год издания", Coercion::Integer),
            Column::new(6, "pages", "Страницы", Coercion::Text),
        ];
        COLUMNS
    }

    fn build(&self, mut row: CoercedRow) -> CiteResult<Record> {
        ArticlesCollectionRecord::new(
            row.text("authors"),
            row.text("article_title"),
            row.text("collection_title"),
            row.text("city"),
            row.text("publisher"),
            row.integer("year")?,
            row.text("pages"),
        )
        .map(Record::from)
    }
}

/// Reader for magazine articles.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagazineArticleReader;

impl RecordReader for MagazineArticleReader {
    fn kind(&self) -> RecordKind {
        RecordKind::MagazineArticle
    }

    fn sheet(&self) -> &'static str {
        "Статья из журнала"
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new(0, "authors", "Авторы", Coercion::Text),
            Column::new(1, "article_name", "Название статьи", Coercion::Text),
            Column::new(2, "magazine_name", "Название журнала", Coercion::Text),
            Column::new(3, "pub_year", "Год издания", Coercion::Integer),
            Column::new(4, "magazine_num", "Номер журнала", Coercion::Integer),
            Column::new(5, "pages", "Страницы", Coercion::Text),
        ];
        COLUMNS
    }

    fn build(&self, mut row: CoercedRow) -> CiteResult<Record> {
        MagazineArticleRecord::new(
            row.text("authors"),
            row.text("article_name"),
            row.text("magazine_name"),
            row.integer("pub_year")?,
            row.integer("magazine_num")?,
            row.text("pages"),
        )
        .map(Record::from)
    }
}

/// Reader for newspaper articles.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewsArticleReader;

impl RecordReader for NewsArticleReader {
    fn kind(&self) -> RecordKind {
        RecordKind::NewsArticle
    }

    fn sheet(&self) -> &'static str {
        "Статья из газеты"
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new(0, "authors", "Авторы", Coercion::Text),
            Column::new(1, "article_name", "Название статьи", Coercion::Text),
            Column::new(2, "news_name", "Название газеты", Coercion::Text),
            Column::new(3, "edition_year", "Год издания", Coercion::Integer),
            Column::new(4, "news_pub_date", "Дата публикации", Coercion::Text),
            Column::new(5, "article_num", "Номер статьи", Coercion::Integer),
        ];
        COLUMNS
    }

    fn build(&self, mut row: CoercedRow) -> CiteResult<Record> {
        NewsArticleRecord::new(
            row.text("authors"),
            row.text("article_name"),
            row.text("news_name"),
            row.integer("edition_year")?,
            row.text("news_pub_date"),
            row.integer("article_num")?,
        )
        .map(Record::from)
    }
}

/// The reader for a record variant.
#[must_use]
pub fn reader_for(kind: RecordKind) -> &'static dyn RecordReader {
    match kind {
        RecordKind::Book => &BookReader,
        RecordKind::InternetResource => &InternetResourceReader,
        RecordKind::ArticlesCollection => &ArticlesCollectionReader,
        RecordKind::MagazineArticle => &MagazineArticleReader,
        RecordKind::NewsArticle => &NewsArticleReader,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_for_matches_kind() {
        for kind in RecordKind::ALL {
            assert_eq!(reader_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_column_indices_are_sequential() {
        for kind in RecordKind::ALL {
            let columns = reader_for(kind).columns();
            for (idx, column) in columns.iter().enumerate() {
                assert_eq!(column.index, idx, "{kind} column {}", column.field);
            }
        }
    }
}
