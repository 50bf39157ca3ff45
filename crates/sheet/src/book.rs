use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// A workbook: named sheets in workbook order.
///
/// Sheet names are unique; adding a sheet renames it to its key.
#[derive(Debug, Clone)]
pub struct Book {
    name: String,
    sheets: IndexMap<String, Sheet>,
}

impl Book {
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Book1")
    }

    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Book {
            name: name.to_string(),
            sheets: IndexMap::new(),
        }
    }

    /// Book name; the file stem when loaded from disk.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sheet names in workbook order.
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    /// Look up a sheet, failing with [`SheetError::SheetNotFound`].
    pub fn get_sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .get(name)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: name.to_string(),
            })
    }

    /// Append a sheet under `name`, which must not be taken yet.
    pub fn add_sheet(&mut self, name: &str, mut sheet: Sheet) -> Result<()> {
        match self.sheets.entry(name.to_string()) {
            Entry::Occupied(_) => Err(SheetError::SheetAlreadyExists {
                name: name.to_string(),
            }),
            Entry::Vacant(slot) => {
                sheet.set_name(name);
                slot.insert(sheet);
                Ok(())
            }
        }
    }

    pub fn sheets(&self) -> impl Iterator<Item = (&String, &Sheet)> {
        self.sheets.iter()
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_preserves_order() {
        let mut book = Book::new();
        book.add_sheet("Книга", Sheet::new()).unwrap();
        book.add_sheet("Интернет-ресурс", Sheet::new()).unwrap();

        assert_eq!(book.sheet_names(), vec!["Книга", "Интернет-ресурс"]);
        assert_eq!(book.get_sheet("Книга").unwrap().name(), "Книга");
    }

    #[test]
    fn test_duplicate_sheet() {
        let mut book = Book::new();
        book.add_sheet("Data", Sheet::new()).unwrap();
        let result = book.add_sheet("Data", Sheet::new());
        assert!(matches!(result, Err(SheetError::SheetAlreadyExists { .. })));
    }

    #[test]
    fn test_missing_sheet() {
        let book = Book::new();
        assert!(matches!(
            book.get_sheet("Книга"),
            Err(SheetError::SheetNotFound { name }) if name == "Книга"
        ));
    }
}
