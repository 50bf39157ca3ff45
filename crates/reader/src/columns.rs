use citegen_core::{CiteError, CiteResult, RecordKind};
use citegen_sheet::{cell, CellValue};
use indexmap::IndexMap;

/// How a cell is turned into a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Required text. Blank cells become empty text and fail record validation.
    Text,
    /// Text that may be absent.
    OptionalText,
    /// A whole number: an integer cell, a float without fraction or a numeric string.
    Integer,
    /// A date cell or Excel serial rendered as `DD.MM.YYYY`; text is kept verbatim.
    Date,
}

/// One column of a source sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// 0-based column index.
    pub index: usize,
    /// Record field the column fills.
    pub field: &'static str,
    /// Header label written to template workbooks.
    pub header: &'static str,
    pub coercion: Coercion,
}

impl Column {
    pub const fn new(
        index: usize,
        field: &'static str,
        header: &'static str,
        coercion: Coercion,
    ) -> Self {
        Self {
            index,
            field,
            header,
            coercion,
        }
    }
}

/// A coerced field value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldValue {
    #[default]
    Absent,
    Text(String),
    Integer(i64),
}

/// One sheet row after coercion, keyed by field name.
#[derive(Debug, Clone)]
pub struct CoercedRow {
    kind: RecordKind,
    values: IndexMap<&'static str, FieldValue>,
}

impl CoercedRow {
    /// Coerce the cells of `row` according to `columns`.
    pub fn coerce(kind: RecordKind, columns: &[Column], row: &[CellValue]) -> CiteResult<Self> {
        let mut values = IndexMap::with_capacity(columns.len());
        for column in columns {
            let value = coerce_cell(kind, column, cell(row, column.index))?;
            values.insert(column.field, value);
        }
        Ok(Self { kind, values })
    }

    fn take(&mut self, field: &str) -> FieldValue {
        self.values.get_mut(field).map(std::mem::take).unwrap_or_default()
    }

    /// Take a text field; absent values read as empty text.
    pub fn text(&mut self, field: &str) -> String {
        match self.take(field) {
            FieldValue::Text(s) => s,
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Absent => String::new(),
        }
    }

    /// Take an optional text field.
    pub fn optional_text(&mut self, field: &str) -> Option<String> {
        match self.take(field) {
            FieldValue::Text(s) => Some(s),
            FieldValue::Integer(i) => Some(i.to_string()),
            FieldValue::Absent => None,
        }
    }

    /// Take an integer field.
    ///
    /// Fails when `field` is not a [`Coercion::Integer`] column of the row,
    /// which means the column map and the record builder disagree.
    pub fn integer(&mut self, field: &str) -> CiteResult<i64> {
        match self.take(field) {
            FieldValue::Integer(i) => Ok(i),
            FieldValue::Text(_) => Err(CiteError::validation(
                self.kind,
                field,
                "is not mapped to an integer column",
            )),
            FieldValue::Absent => Err(CiteError::validation(self.kind, field, "is missing")),
        }
    }
}

fn coerce_cell(kind: RecordKind, column: &Column, value: &CellValue) -> CiteResult<FieldValue> {
    let blank = value.is_blank();
    let coerced = match column.coercion {
        Coercion::Text if blank => FieldValue::Text(String::new()),
        Coercion::Text => FieldValue::Text(single_line(&value.as_str())),
        Coercion::OptionalText if blank => FieldValue::Absent,
        Coercion::OptionalText => FieldValue::Text(single_line(&value.as_str())),
        Coercion::Integer if blank => {
            return Err(CiteError::validation(kind, column.field, "is missing"));
        }
        Coercion::Integer => match value.as_int() {
            Some(i) => FieldValue::Integer(i),
            None => {
                return Err(CiteError::validation(
                    kind,
                    column.field,
                    format!("must be an integer, got '{}'", value.as_str().trim()),
                ));
            }
        },
        Coercion::Date if blank => FieldValue::Text(String::new()),
        Coercion::Date => match value {
            CellValue::String(s) => FieldValue::Text(single_line(s)),
            other => match other.as_datetime() {
                Some(dt) => FieldValue::Text(dt.format("%d.%m.%Y").to_string()),
                None => FieldValue::Text(other.as_str()),
            },
        },
    };
    Ok(coerced)
}

/// Trim and collapse every whitespace run, line breaks included, to one space.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: [Column; 4] = [
        Column::new(0, "title", "Название", Coercion::Text),
        Column::new(1, "edition", "Издание", Coercion::OptionalText),
        Column::new(2, "year", "Год издания", Coercion::Integer),
        Column::new(3, "access_date", "Дата обращения", Coercion::Date),
    ];

    fn coerce(row: Vec<CellValue>) -> CiteResult<CoercedRow> {
        CoercedRow::coerce(RecordKind::Book, &COLUMNS, &row)
    }

    #[test]
    fn test_coerce_full_row() {
        let mut row = coerce(vec![
            CellValue::from(" Наука "),
            CellValue::from("3-е"),
            CellValue::Float(2020.0),
            CellValue::Float(44197.0),
        ])
        .unwrap();

        assert_eq!(row.text("title"), "Наука");
        assert_eq!(row.optional_text("edition"), Some("3-е".to_string()));
        assert_eq!(row.integer("year").unwrap(), 2020);
        assert_eq!(row.text("access_date"), "01.01.2021");
    }

    #[test]
    fn test_short_row_reads_blank() {
        let mut row = coerce(vec![CellValue::from("Наука"), CellValue::Null, CellValue::from("2020")])
            .unwrap();

        assert_eq!(row.optional_text("edition"), None);
        assert_eq!(row.integer("year").unwrap(), 2020);
        assert_eq!(row.text("access_date"), "");
    }

    #[test]
    fn test_text_date_kept_verbatim() {
        let mut row = coerce(vec![
            CellValue::from("Наука"),
            CellValue::Null,
            CellValue::Int(2020),
            CellValue::from("01.01.2021"),
        ])
        .unwrap();
        assert_eq!(row.text("access_date"), "01.01.2021");
    }

    #[test]
    fn test_non_numeric_integer() {
        let err = coerce(vec![
            CellValue::from("Наука"),
            CellValue::Null,
            CellValue::from("двадцатый"),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            CiteError::Validation { ref field, ref reason, .. }
                if field == "year" && reason == "must be an integer, got 'двадцатый'"
        ));
    }

    #[test]
    fn test_missing_integer() {
        let err = coerce(vec![CellValue::from("Наука")]).unwrap_err();
        assert!(err.to_string().contains("`year` is missing"));
    }

    #[test]
    fn test_line_breaks_collapse_to_one_space() {
        let mut row = coerce(vec![
            CellValue::from("  Наука\nкак\r\n  искусство\t"),
            CellValue::from("3-е\nизд"),
            CellValue::Int(2020),
            CellValue::from("01.01.\n2021"),
        ])
        .unwrap();

        assert_eq!(row.text("title"), "Наука как искусство");
        assert_eq!(row.optional_text("edition"), Some("3-е изд".to_string()));
        assert_eq!(row.text("access_date"), "01.01. 2021");
    }

    #[test]
    fn test_integer_from_text_column_fails() {
        let mut row = coerce(vec![
            CellValue::from("Наука"),
            CellValue::Null,
            CellValue::Int(2020),
        ])
        .unwrap();

        let err = row.integer("title").unwrap_err();
        assert!(err.to_string().contains("`title` is not mapped to an integer column"));

        let err = row.integer("pages").unwrap_err();
        assert!(err.to_string().contains("`pages` is missing"));
    }
}
