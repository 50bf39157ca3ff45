//! # citegen-render
//!
//! Writes an ordered list of citations to a document.
//!
//! The output format follows the file extension: `.docx` produces a
//! WordprocessingML package laid out for the citation standard, anything
//! else produces UTF-8 text with one citation per line.
//!
//! Output goes to a temporary file next to the target first and is moved
//! into place only once complete, so a failed render never leaves a
//! partial document behind.

pub mod docx;
pub mod error;

use std::io::Write;
use std::path::Path;

use citegen_core::Standard;
use tempfile::NamedTempFile;
use tracing::{debug, info};

pub use docx::{Indent, Layout};
pub use error::{RenderError, Result};

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Docx,
    Text,
}

impl DocumentFormat {
    /// Pick the format from a path's extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("docx") => DocumentFormat::Docx,
            _ => DocumentFormat::Text,
        }
    }
}

/// Renders formatted citations, in the order given.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    lines: Vec<String>,
}

impl Renderer {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn render<P: AsRef<Path>>(&self, path: P, standard: Standard) -> Result<DocumentFormat> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path);
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        match format {
            DocumentFormat::Docx => {
                let layout = Layout::for_standard(standard);
                debug!(?layout, "Writing DOCX package");
                docx::write_package(tmp.as_file_mut(), self.lines.as_slice(), &layout)?;
            }
            DocumentFormat::Text => self.write_text(tmp.as_file_mut())?,
        }
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;

        info!(
            path = %path.display(),
            count = self.lines.len(),
            format = ?format,
            "Rendered citations"
        );
        Ok(format)
    }

    fn write_text<W: Write>(&self, mut out: W) -> Result<()> {
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }
}
