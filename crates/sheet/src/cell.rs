use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fmt;

/// Represents a cell value in a sheet
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    DateTime(NaiveDateTime),
}

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Serial of 9999-12-31, the last date Excel can represent.
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

/// Day zero of the Excel 1900 date system (accounts for the 1900 leap-year bug).
fn excel_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Convert an Excel serial date (days since 1899-12-30) to a datetime.
#[must_use]
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..=MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }
    let seconds = (serial * SECONDS_PER_DAY).round() as i64;
    excel_epoch().checked_add_signed(Duration::seconds(seconds))
}

/// Convert a datetime to an Excel serial date.
#[must_use]
pub fn datetime_to_excel_serial(value: &NaiveDateTime) -> f64 {
    let delta = *value - excel_epoch();
    delta.num_seconds() as f64 / SECONDS_PER_DAY
}

impl CellValue {
    /// Check if the value is null or an empty string
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Try to get the value as an integer.
    ///
    /// Floats convert only when they carry no fractional part.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            CellValue::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            CellValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Try to get the value as a datetime.
    ///
    /// Numbers are read as Excel serial dates.
    #[must_use]
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::DateTime(dt) => Some(*dt),
            CellValue::Int(i) => excel_serial_to_datetime(*i as f64),
            CellValue::Float(f) => excel_serial_to_datetime(*f),
            _ => None,
        }
    }

    /// Get the value as a string
    #[must_use]
    pub fn as_str(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, ""),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            // Whole floats print without the trailing ".0" Excel never shows
            CellValue::Float(fl) if fl.is_finite() && fl.fract() == 0.0 => {
                write!(f, "{}", *fl as i64)
            }
            CellValue::Float(fl) => write!(f, "{fl}"),
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%d.%m.%Y")),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::DateTime(d.and_time(chrono::NaiveTime::MIN))
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank() {
        assert!(CellValue::Null.is_blank());
        assert!(CellValue::from("  ").is_blank());
        assert!(!CellValue::Int(0).is_blank());
    }

    #[test]
    fn test_as_int() {
        assert_eq!(CellValue::Int(42).as_int(), Some(42));
        assert_eq!(CellValue::Float(2020.0).as_int(), Some(2020));
        assert_eq!(CellValue::Float(2.5).as_int(), None);
        assert_eq!(CellValue::from(" 999 ").as_int(), Some(999));
        assert_eq!(CellValue::from("много").as_int(), None);
        assert_eq!(CellValue::Null.as_int(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Float(10.0).to_string(), "10");
        assert_eq!(CellValue::Float(1.5).to_string(), "1.5");
        assert_eq!(CellValue::Null.to_string(), "");
    }

    #[test]
    fn test_excel_serial_conversions() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let dt = excel_serial_to_datetime(44197.0).unwrap();
        assert_eq!(dt.date(), date);
        assert!((datetime_to_excel_serial(&dt) - 44197.0).abs() < f64::EPSILON);
        assert_eq!(CellValue::Float(44197.0).as_datetime(), Some(dt));
        assert_eq!(excel_serial_to_datetime(-1.0), None);
    }

    #[test]
    fn test_datetime_display() {
        let value = CellValue::from(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(value.to_string(), "01.01.2021");
    }
}
