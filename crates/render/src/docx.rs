//! Minimal WordprocessingML writer.
//!
//! A package holds three parts: the content-type map, the root
//! relationships and `word/document.xml` with one paragraph per citation.
//! Paragraph and run properties are inlined so the package needs no
//! styles part.

use std::io::{Seek, Write};

use citegen_core::Standard;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{RenderError, Result};

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"</Types>"#
);

const ROOT_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"</Relationships>"#
);

/// Part names, in write order.
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const ROOT_RELS_PART: &str = "_rels/.rels";
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Paragraph indentation, in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    FirstLine(u32),
    Hanging(u32),
}

/// Page and paragraph settings for a citation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub font: &'static str,
    /// Font size in half-points.
    pub size: u32,
    pub justified: bool,
    pub indent: Indent,
    /// Line spacing in 240ths of a line.
    pub line: u32,
}

impl Layout {
    /// GOST: Times New Roman 14 pt, justified, 1.25 cm first-line indent,
    /// one and a half spacing.
    pub const GOST: Layout = Layout {
        font: "Times New Roman",
        size: 28,
        justified: true,
        indent: Indent::FirstLine(709),
        line: 360,
    };

    /// APA: Times New Roman 12 pt, 0.5 in hanging indent, double spacing.
    pub const APA: Layout = Layout {
        font: "Times New Roman",
        size: 24,
        justified: false,
        indent: Indent::Hanging(720),
        line: 480,
    };

    #[must_use]
    pub fn for_standard(standard: Standard) -> Self {
        match standard {
            Standard::Gost => Self::GOST,
            Standard::Apa => Self::APA,
        }
    }
}

fn xml_error(err: impl std::fmt::Display) -> RenderError {
    RenderError::Xml(err.to_string())
}

struct DocumentWriter {
    inner: Writer<Vec<u8>>,
}

impl DocumentWriter {
    fn new() -> Self {
        Self {
            inner: Writer::new(Vec::new()),
        }
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.inner.write_event(event).map_err(xml_error)
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let elem = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.event(Event::Start(elem))
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let elem = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.event(Event::Empty(elem))
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn paragraph(&mut self, text: &str, layout: &Layout) -> Result<()> {
        let line = layout.line.to_string();
        let size = layout.size.to_string();

        self.start("w:p", &[])?;

        self.start("w:pPr", &[])?;
        self.empty(
            "w:spacing",
            &[
                ("w:after", "0"),
                ("w:line", line.as_str()),
                ("w:lineRule", "auto"),
            ],
        )?;
        match layout.indent {
            Indent::FirstLine(twips) => {
                let twips = twips.to_string();
                self.empty("w:ind", &[("w:firstLine", twips.as_str())])?;
            }
            Indent::Hanging(twips) => {
                let twips = twips.to_string();
                self.empty(
                    "w:ind",
                    &[("w:left", twips.as_str()), ("w:hanging", twips.as_str())],
                )?;
            }
        }
        if layout.justified {
            self.empty("w:jc", &[("w:val", "both")])?;
        }
        self.end("w:pPr")?;

        self.start("w:r", &[])?;
        self.start("w:rPr", &[])?;
        self.empty(
            "w:rFonts",
            &[
                ("w:ascii", layout.font),
                ("w:hAnsi", layout.font),
                ("w:cs", layout.font),
            ],
        )?;
        self.empty("w:sz", &[("w:val", size.as_str())])?;
        self.empty("w:szCs", &[("w:val", size.as_str())])?;
        self.end("w:rPr")?;
        self.start("w:t", &[("xml:space", "preserve")])?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.end("w:t")?;
        self.end("w:r")?;

        self.end("w:p")
    }

    fn section(&mut self) -> Result<()> {
        // A4 portrait with 3 cm / 1.5 cm / 2 cm margins.
        self.start("w:sectPr", &[])?;
        self.empty("w:pgSz", &[("w:w", "11906"), ("w:h", "16838")])?;
        self.empty(
            "w:pgMar",
            &[
                ("w:top", "1134"),
                ("w:right", "850"),
                ("w:bottom", "1134"),
                ("w:left", "1701"),
                ("w:header", "708"),
                ("w:footer", "708"),
                ("w:gutter", "0"),
            ],
        )?;
        self.end("w:sectPr")
    }

    fn into_string(self) -> Result<String> {
        String::from_utf8(self.inner.into_inner()).map_err(xml_error)
    }
}

/// Build the body part: one paragraph per line, in order.
pub fn document_xml<S: AsRef<str>>(lines: &[S], layout: &Layout) -> Result<String> {
    let mut w = DocumentWriter::new();
    w.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    w.start("w:document", &[("xmlns:w", W_NS)])?;
    w.start("w:body", &[])?;
    for line in lines {
        w.paragraph(line.as_ref(), layout)?;
    }
    w.section()?;
    w.end("w:body")?;
    w.end("w:document")?;
    w.into_string()
}

/// Write a complete package to `out`.
pub fn write_package<W, S>(out: W, lines: &[S], layout: &Layout) -> Result<()>
where
    W: Write + Seek,
    S: AsRef<str>,
{
    let document = document_xml(lines, layout)?;
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut zip = ZipWriter::new(out);
    for (name, body) in [
        (CONTENT_TYPES_PART, CONTENT_TYPES),
        (ROOT_RELS_PART, ROOT_RELS),
        (DOCUMENT_PART, document.as_str()),
    ] {
        zip.start_file(name, options)?;
        zip.write_all(body.as_bytes())?;
    }
    zip.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_for_standard() {
        assert_eq!(Layout::for_standard(Standard::Gost), Layout::GOST);
        assert_eq!(Layout::for_standard(Standard::Apa), Layout::APA);
    }

    #[test]
    fn test_gost_paragraph_properties() {
        let xml = document_xml(&["Иванов И.М. Алгебра."], &Layout::GOST).unwrap();
        assert!(xml.contains(r#"<w:jc w:val="both"/>"#));
        assert!(xml.contains(r#"<w:ind w:firstLine="709"/>"#));
        assert!(xml.contains(r#"w:line="360""#));
        assert!(xml.contains(r#"<w:sz w:val="28"/>"#));
        assert!(xml.contains("Иванов И.М. Алгебра."));
    }

    #[test]
    fn test_apa_paragraph_properties() {
        let xml = document_xml(&["Smith (2020)."], &Layout::APA).unwrap();
        assert!(!xml.contains("w:jc"));
        assert!(xml.contains(r#"<w:ind w:left="720" w:hanging="720"/>"#));
        assert!(xml.contains(r#"w:line="480""#));
        assert!(xml.contains(r#"<w:sz w:val="24"/>"#));
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = document_xml(&["A & B <C>"], &Layout::APA).unwrap();
        assert!(xml.contains("A &amp; B &lt;C&gt;"));
    }

    #[test]
    fn test_one_paragraph_per_line() {
        let xml = document_xml(&["one", "two", "three"], &Layout::GOST).unwrap();
        assert_eq!(xml.matches("<w:p>").count(), 3);
        let one = xml.find(">one<").unwrap();
        let two = xml.find(">two<").unwrap();
        let three = xml.find(">three<").unwrap();
        assert!(one < two && two < three);
    }

    #[test]
    fn test_empty_list_has_body_and_section() {
        let lines: [&str; 0] = [];
        let xml = document_xml(&lines, &Layout::GOST).unwrap();
        assert!(xml.contains("<w:body><w:sectPr>"));
        assert!(!xml.contains("<w:p>"));
    }
}
