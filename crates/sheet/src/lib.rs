//! Sheet/Book module for citegen
//!
//! Holds workbook data in memory and moves it to and from XLSX files.
//! Source workbooks are read with `calamine`; template and fixture workbooks
//! are written with `rust_xlsxwriter`.
//!
//! # Examples
//!
//! ```
//! use citegen_sheet::{cell, Book, CellValue, Sheet};
//!
//! let mut book = Book::new();
//! book.add_sheet(
//!     "Книга",
//!     Sheet::from_data(vec![vec!["Авторы", "Название"], vec!["Иванов И.М.", "Наука"]]),
//! )
//! .unwrap();
//!
//! let sheet = book.get_sheet("Книга").unwrap();
//! assert_eq!(sheet.row_count(), 2);
//! let row = sheet.rows().nth(1).unwrap();
//! assert_eq!(cell(row, 0), &CellValue::from("Иванов И.М."));
//! ```

mod book;
mod cell;
mod error;
mod sheet;
mod xlsx;

/// Re-export book type.
pub use book::Book;
/// Re-export cell value type and Excel date helpers.
pub use cell::{datetime_to_excel_serial, excel_serial_to_datetime, CellValue};
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export sheet type.
pub use sheet::{cell, Sheet};
