use crate::book::Book;
use crate::cell::{datetime_to_excel_serial, excel_serial_to_datetime, CellValue};
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const DATE_NUM_FORMAT: &str = "dd.mm.yyyy";

fn workbook_error(err: impl Display) -> SheetError {
    SheetError::Workbook(err.to_string())
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(chrono::NaiveTime::MIN))
        })
}

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            excel_serial_to_datetime(serial).map_or(CellValue::Float(serial), CellValue::DateTime)
        }
        Data::DateTimeIso(s) => {
            parse_iso_datetime(s).map_or_else(|| CellValue::String(s.clone()), CellValue::DateTime)
        }
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    }
}

impl Book {
    /// Load a book from an Excel file (all sheets, in workbook order)
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be opened or read.
    pub fn from_xlsx<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut workbook: Xlsx<BufReader<File>> = open_workbook(path).map_err(workbook_error)?;

        let sheet_names: Vec<String> = workbook.sheet_names().iter().map(|s| s.to_string()).collect();
        let book_name = path
            .file_stem()
            .map_or_else(|| "Book1".to_string(), |s| s.to_string_lossy().into_owned());
        let mut book = Book::with_name(&book_name);

        for sheet_name in sheet_names {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(workbook_error)?;

            // Ranges start at the first used cell; pad back to A1 so indices match the sheet
            let (row_offset, col_offset) = range
                .start()
                .map_or((0, 0), |(row, col)| (row as usize, col as usize));

            let mut sheet = Sheet::with_name(&sheet_name);
            let data = sheet.data_mut();
            data.extend(std::iter::repeat_with(Vec::new).take(row_offset));
            for row in range.rows() {
                let mut cells = vec![CellValue::Null; col_offset];
                cells.extend(row.iter().map(data_to_cell_value));
                data.push(cells);
            }

            book.add_sheet(&sheet_name, sheet)?;
        }

        Ok(book)
    }

    /// Save the book to an Excel file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be created or written.
    pub fn save_as_xlsx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut workbook = Workbook::new();
        let date_format = Format::new().set_num_format(DATE_NUM_FORMAT);

        for (name, sheet) in self.sheets() {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(name).map_err(workbook_error)?;
            write_sheet(worksheet, sheet, &date_format)?;
        }

        workbook.save(path.as_ref()).map_err(workbook_error)?;

        Ok(())
    }
}

/// Write sheet data to a worksheet
fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet, date_format: &Format) -> Result<()> {
    for (row_idx, row) in sheet.rows().enumerate() {
        let row_num =
            u32::try_from(row_idx).map_err(|_| workbook_error("Row index overflow"))?;
        for (col_idx, cell) in row.iter().enumerate() {
            let col_num =
                u16::try_from(col_idx).map_err(|_| workbook_error("Column index overflow"))?;

            match cell {
                CellValue::Null => {}
                CellValue::Bool(b) => {
                    worksheet
                        .write_boolean(row_num, col_num, *b)
                        .map_err(workbook_error)?;
                }
                CellValue::Int(i) => {
                    // Note: Excel stores all numbers as f64
                    worksheet
                        .write_number(row_num, col_num, *i as f64)
                        .map_err(workbook_error)?;
                }
                CellValue::Float(f) => {
                    worksheet
                        .write_number(row_num, col_num, *f)
                        .map_err(workbook_error)?;
                }
                CellValue::String(s) => {
                    worksheet
                        .write_string(row_num, col_num, s)
                        .map_err(workbook_error)?;
                }
                CellValue::DateTime(dt) => {
                    worksheet
                        .write_number_with_format(
                            row_num,
                            col_num,
                            datetime_to_excel_serial(dt),
                            date_format,
                        )
                        .map_err(workbook_error)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::cell;
    use tempfile::tempdir;

    #[test]
    fn test_book_xlsx_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("book.xlsx");

        let mut book = Book::new();
        book.add_sheet("Книга", Sheet::from_data(vec![vec!["Авторы", "Год"]]))
            .unwrap();
        book.add_sheet("Интернет-ресурс", Sheet::from_data(vec![vec![1, 2, 3]]))
            .unwrap();
        book.save_as_xlsx(&path).unwrap();

        let loaded = Book::from_xlsx(&path).unwrap();

        assert_eq!(loaded.name(), "book");
        assert_eq!(loaded.sheet_names(), vec!["Книга", "Интернет-ресурс"]);
        let sheet = loaded.get_sheet("Интернет-ресурс").unwrap();
        // Int becomes Float in Excel
        let row = sheet.rows().next().unwrap();
        assert!(matches!(cell(row, 1), CellValue::Float(f) if (*f - 2.0).abs() < 0.01));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = Book::from_xlsx(dir.path().join("absent.xlsx"));
        assert!(matches!(result, Err(SheetError::Workbook(_))));
    }

    #[test]
    fn test_iso_datetime_parsing() {
        let dt = parse_iso_datetime("2021-01-01").unwrap();
        assert_eq!(dt.format("%d.%m.%Y").to_string(), "01.01.2021");
        assert!(parse_iso_datetime("01.01.2021").is_none());
    }
}
