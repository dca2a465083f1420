//! DOCX text extraction.
//!
//! DOCX files are zip archives; the body lives in `word/document.xml`.
//! Text events are streamed out with quick-xml. Paragraph ends become
//! newlines and tab marks become tabs so downstream line reconstruction
//! still sees the table row structure of claim forms.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

use super::Result;
use crate::error::DocumentError;

/// Extract plain text from a DOCX file.
pub fn extract_docx_text(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| DocumentError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| DocumentError::DocxArchive(e.to_string()))?;
    let document = archive
        .by_name("word/document.xml")
        .map_err(|e| DocumentError::DocxArchive(e.to_string()))?;

    let mut reader = Reader::from_reader(BufReader::new(document));
    reader.config_mut().trim_text(true);

    let mut content = String::with_capacity(8192);
    let mut buf = Vec::with_capacity(1024);

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => {
                if let Ok(text) = e.unescape() {
                    content.push_str(&text);
                    content.push(' ');
                }
            }
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"tab" => content.push('\t'),
                b"br" => content.push('\n'),
                _ => {}
            },
            Ok(Event::End(e)) if e.local_name().as_ref() == b"p" => content.push('\n'),
            Ok(Event::Eof) => break,
            Err(e) => return Err(DocumentError::TextExtraction(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    debug!("extracted {} chars from DOCX body", content.len());
    Ok(content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_docx(body_xml: &str) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        let mut zip = zip::ZipWriter::new(file.reopen().unwrap());
        let options = zip::write::FileOptions::default();
        zip.start_file("word/document.xml", options).unwrap();
        zip.write_all(body_xml.as_bytes()).unwrap();
        zip.finish().unwrap();
        file
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let file = write_docx(
            r#"<?xml version="1.0"?>
            <w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
              <w:body>
                <w:p><w:r><w:t>Policy No: POL-1</w:t></w:r></w:p>
                <w:p><w:r><w:t>Insured Name: Ravi</w:t></w:r></w:p>
              </w:body>
            </w:document>"#,
        );

        let text = extract_docx_text(file.path()).unwrap();
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        assert_eq!(lines, ["Policy No: POL-1", "Insured Name: Ravi"]);
    }

    #[test]
    fn test_tabs_preserved_for_table_rows() {
        let file = write_docx(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
              <w:body>
                <w:p><w:r><w:t>1</w:t><w:tab/><w:t>Bumper</w:t><w:tab/><w:t>4,500</w:t></w:r></w:p>
              </w:body>
            </w:document>"#,
        );

        let text = extract_docx_text(file.path()).unwrap();
        assert!(text.contains('\t'));
        assert!(text.contains("Bumper"));
    }

    #[test]
    fn test_not_a_zip() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        write!(file, "plain text, not an archive").unwrap();

        let err = extract_docx_text(file.path()).unwrap_err();
        assert!(matches!(err, DocumentError::DocxArchive(_)));
    }

    #[test]
    fn test_zip_without_document_xml() {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        let mut zip = zip::ZipWriter::new(file.reopen().unwrap());
        let options = zip::write::FileOptions::default();
        zip.start_file("other.txt", options).unwrap();
        zip.write_all(b"nothing here").unwrap();
        zip.finish().unwrap();

        let err = extract_docx_text(file.path()).unwrap_err();
        assert!(matches!(err, DocumentError::DocxArchive(_)));
    }
}
