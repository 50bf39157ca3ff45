use crate::cell::CellValue;

/// One worksheet: a row-major grid of cells.
///
/// Rows may be ragged since workbooks drop trailing empty cells; read
/// through [`cell`] to see `Null` past the end of a short row.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
}

impl Sheet {
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            data: Vec::new(),
        }
    }

    /// Build an unnamed sheet from literal rows.
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(rows: Vec<Vec<T>>) -> Self {
        let mut sheet = Self::new();
        for row in rows {
            sheet.row_append(row);
        }
        sheet
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    pub fn row_append<T: Into<CellValue>>(&mut self, cells: Vec<T>) {
        self.data.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn rows(&self) -> impl Iterator<Item = &Vec<CellValue>> {
        self.data.iter()
    }

    /// Rows below the first `header_rows`, paired with their 1-based
    /// spreadsheet row number (the number a user sees in Excel).
    pub fn data_rows(&self, header_rows: usize) -> impl Iterator<Item = (usize, &[CellValue])> {
        self.data
            .iter()
            .enumerate()
            .skip(header_rows)
            .map(|(idx, row)| (idx + 1, row.as_slice()))
    }

    pub(crate) fn data_mut(&mut self) -> &mut Vec<Vec<CellValue>> {
        &mut self.data
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a cell from a row, treating missing trailing cells as `Null`.
#[must_use]
pub fn cell(row: &[CellValue], col: usize) -> &CellValue {
    static NULL: CellValue = CellValue::Null;
    row.get(col).unwrap_or(&NULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_from_data() {
        let sheet = Sheet::from_data(vec![vec![1, 2, 3], vec![4, 5, 6]]);

        assert_eq!(sheet.row_count(), 2);
        let last = sheet.rows().nth(1).unwrap();
        assert_eq!(cell(last, 2), &CellValue::Int(6));
        assert!(sheet.rows().nth(2).is_none());
    }

    #[test]
    fn test_ragged_rows() {
        let mut sheet = Sheet::with_name("Книга");
        sheet.row_append(vec!["Авторы", "Название"]);
        sheet.row_append(vec!["Иванов И.М."]);

        let row = sheet.rows().nth(1).unwrap();
        assert_eq!(row.len(), 1);
        assert_eq!(cell(row, 0), &CellValue::from("Иванов И.М."));
        assert_eq!(cell(row, 1), &CellValue::Null);
    }

    #[test]
    fn test_data_rows_skip_header() {
        let sheet = Sheet::from_data(vec![vec!["header"], vec!["a"], vec!["b"]]);
        let rows: Vec<usize> = sheet.data_rows(1).map(|(number, _)| number).collect();
        assert_eq!(rows, vec![2, 3]);
    }
}
