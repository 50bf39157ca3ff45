//! # citegen-formatting
//!
//! Renders bibliographic records as citation strings.
//!
//! Each (standard, record variant) pair has a [`StyleFormatter`] with a fixed
//! template. A [`CitationStyle`] is the per-standard dispatch table, and a
//! [`CitationFormatter`] runs a whole list through one style and sorts it.
//!
//! ```
//! use citegen_core::{InternetResourceRecord, Record, Standard};
//! use citegen_formatting::CitationFormatter;
//!
//! let record = Record::from(
//!     InternetResourceRecord::new(
//!         "Наука как искусство",
//!         "Ведомости",
//!         "https://www.vedomosti.ru",
//!         "01.01.2021",
//!     )
//!     .unwrap(),
//! );
//!
//! let items = CitationFormatter::for_standard(Standard::Apa)
//!     .format(vec![record])
//!     .unwrap();
//! assert_eq!(
//!     items[0].rendered(),
//!     "Наука как искусство. (n. d.). Ведомости. https://www.vedomosti.ru"
//! );
//! ```

pub mod apa;
pub mod citation;
pub mod gost;
mod style;

use citegen_core::Standard;

pub use apa::{Apa, ApaBook, ApaInternetResource};
pub use citation::{CitationFormatter, FormattedItem};
pub use gost::{
    Gost, GostBook, GostCollectionArticle, GostInternetResource, GostMagazineArticle,
    GostNewsArticle,
};
pub use style::{CitationStyle, StyleFormatter};

/// The built-in style for a citation standard.
#[must_use]
pub fn style_for(standard: Standard) -> &'static dyn CitationStyle {
    match standard {
        Standard::Gost => &Gost,
        Standard::Apa => &Apa,
    }
}
