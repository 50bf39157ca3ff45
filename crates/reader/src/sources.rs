use std::path::Path;

use citegen_core::{CiteError, CiteResult, Record, Standard};
use citegen_sheet::{Book, Sheet};
use tracing::info;

use crate::readers::{reader_for, RecordReader};

/// Reads every record a citation standard needs from a source workbook.
#[derive(Debug, Clone)]
pub struct SourcesReader {
    standard: Standard,
    book: Book,
}

impl SourcesReader {
    /// Load the workbook at `path`.
    pub fn open<P: AsRef<Path>>(path: P, standard: Standard) -> CiteResult<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), %standard, "Loading workbook");
        let book = Book::from_xlsx(path)?;
        Ok(Self::from_book(book, standard))
    }

    /// Wrap an already loaded workbook.
    #[must_use]
    pub fn from_book(book: Book, standard: Standard) -> Self {
        Self { standard, book }
    }

    #[must_use]
    pub fn standard(&self) -> Standard {
        self.standard
    }

    #[must_use]
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Readers registered for the standard, in reading order.
    pub fn readers(&self) -> impl Iterator<Item = &'static dyn RecordReader> {
        readers(self.standard)
    }

    /// Read all records: reader order first, then row order within a sheet.
    ///
    /// Every required sheet is checked before any row is read.
    pub fn read(&self) -> CiteResult<Vec<Record>> {
        if let Some(missing) = self.readers().find(|r| !self.book.has_sheet(r.sheet())) {
            return Err(CiteError::Source {
                sheet: missing.sheet().to_string(),
            });
        }

        let mut records = Vec::new();
        for reader in self.readers() {
            records.extend(reader.read(&self.book)?);
        }

        info!(count = records.len(), standard = %self.standard, "Read source records");
        Ok(records)
    }
}

fn readers(standard: Standard) -> impl Iterator<Item = &'static dyn RecordReader> {
    standard.record_kinds().iter().map(|kind| reader_for(*kind))
}

/// An empty source workbook for `standard`: one sheet per reader with its header row.
pub fn template_book(standard: Standard) -> CiteResult<Book> {
    let mut book = Book::with_name("template");
    for reader in readers(standard) {
        let mut sheet = Sheet::with_name(reader.sheet());
        sheet.row_append(reader.columns().iter().map(|c| c.header).collect::<Vec<_>>());
        book.add_sheet(reader.sheet(), sheet)?;
    }
    Ok(book)
}

/// Write an empty source workbook for `standard` to `path`.
pub fn write_template<P: AsRef<Path>>(path: P, standard: Standard) -> CiteResult<()> {
    let path = path.as_ref();
    info!(path = %path.display(), %standard, "Writing template workbook");
    template_book(standard)?.save_as_xlsx(path)?;
    Ok(())
}
