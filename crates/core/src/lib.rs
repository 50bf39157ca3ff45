//! # citegen-core
//!
//! Core types for citegen.
//!
//! This crate provides:
//! - the bibliographic record types and the closed [`Record`] sum type
//! - the supported citation standards
//! - the error taxonomy shared by the reader, formatters and CLI

/// Error types and result aliases.
pub mod error;
/// Record types.
pub mod record;
/// Citation standards.
pub mod standard;

/// Re-export core error types.
pub use error::{CiteError, CiteResult, Location};
/// Re-export record types.
pub use record::{
    ArticlesCollectionRecord, BookRecord, InternetResourceRecord, MagazineArticleRecord,
    NewsArticleRecord, Record, RecordKind,
};
/// Re-export the standard type.
pub use standard::Standard;
