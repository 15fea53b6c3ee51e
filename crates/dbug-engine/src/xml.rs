//! XML input: file-or-text resolution, validation and pretty printing.

use std::fmt;
use std::path::Path;

use dbug_types::Value;

use crate::markup;

/// First problem reported while parsing an XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlError {
    message: String,
}

impl XmlError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for XmlError {}

/// Render the inner content of an `xml` dump.
pub fn render_xml(value: &Value) -> String {
    let Some(source) = value.as_text().map(resolve_source) else {
        return markup::notice(&cannot_be("xml"));
    };

    let source = source.trim();
    if source.is_empty() {
        return markup::notice(&cannot_be("xml"));
    }

    format_document(source)
}

#[cfg(feature = "xml")]
fn format_document(source: &str) -> String {
    match pretty_print(source) {
        Ok(pretty) => markup::pre(&pretty),
        Err(err) => {
            tracing::debug!(error = %err, "xml parse failed");
            markup::notice(&format!("XML error: {}", err.message().trim()))
        }
    }
}

#[cfg(not(feature = "xml"))]
fn format_document(source: &str) -> String {
    markup::pre(source)
}

/// Text naming a readable file is replaced by the file contents.
fn resolve_source(text: &str) -> String {
    let path = Path::new(text);
    if path.is_file() {
        match std::fs::read_to_string(path) {
            Ok(contents) => return contents,
            Err(err) => tracing::debug!(path = %path.display(), error = %err, "xml file unreadable"),
        }
    }
    text.to_string()
}

/// `Error: Variable cannot be a/an <type> type`, with the article chosen from
/// the first letter of the type name.
pub fn cannot_be(type_name: &str) -> String {
    let type_name = type_name.to_lowercase();
    let article = match type_name.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u' | 'x') => "an",
        _ => "a",
    };
    format!("Error: Variable cannot be {} {} type", article, type_name)
}

/// Parse `source` and re-emit it indented by two spaces, dropping
/// whitespace-only text. Other text is kept as written. An XML declaration
/// is added when missing.
#[cfg(feature = "xml")]
pub fn pretty_print(source: &str) -> Result<String, XmlError> {
    use quick_xml::events::{BytesDecl, BytesStart, Event};
    use quick_xml::reader::Reader;
    use quick_xml::writer::Writer;

    fn check_start(start: &BytesStart<'_>) -> Result<(), XmlError> {
        let name = start.name();
        if !name.as_ref().first().copied().is_some_and(is_name_start) {
            return Err(XmlError::new("StartTag: invalid element name"));
        }

        let mut attributes = start.attributes();
        attributes.with_checks(true);
        for attribute in attributes {
            let attribute = attribute.map_err(|err| XmlError::new(format!("AttValue: {}", err)))?;
            attribute
                .unescape_value()
                .map_err(|err| XmlError::new(format!("AttValue: {}", err)))?;
        }
        Ok(())
    }

    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(false);

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    let mut depth = 0usize;
    let mut seen_root = false;
    let mut started = false;

    loop {
        let event = reader.read_event().map_err(|err| {
            XmlError::new(format!("{} at position {}", err, reader.buffer_position()))
        })?;

        match &event {
            Event::Eof => break,
            Event::Text(text) if text.iter().all(u8::is_ascii_whitespace) => continue,
            Event::Start(_) | Event::Empty(_) if depth == 0 && seen_root => {
                return Err(XmlError::new("Extra content at the end of the document"));
            }
            Event::Start(start) => {
                check_start(start)?;
                depth += 1;
                seen_root = true;
            }
            Event::Empty(start) => {
                check_start(start)?;
                seen_root = true;
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(_) if depth == 0 => {
                return Err(XmlError::new(if seen_root {
                    "Extra content at the end of the document"
                } else {
                    "Start tag expected, '<' not found"
                }));
            }
            Event::Text(text) => {
                text.unescape()
                    .map_err(|err| XmlError::new(format!("EntityRef: {}", err)))?;
            }
            Event::CData(_) if depth == 0 => {
                return Err(XmlError::new("Start tag expected, '<' not found"));
            }
            _ => {}
        }

        if !started {
            started = true;
            if !matches!(event, Event::Decl(_)) {
                writer
                    .write_event(Event::Decl(BytesDecl::new("1.0", None, None)))
                    .map_err(|err| XmlError::new(err.to_string()))?;
            }
        }

        writer
            .write_event(event)
            .map_err(|err| XmlError::new(err.to_string()))?;
    }

    if depth > 0 {
        return Err(XmlError::new("Premature end of data"));
    }
    if !seen_root {
        return Err(XmlError::new("Document is empty"));
    }

    String::from_utf8(writer.into_inner()).map_err(|err| XmlError::new(err.to_string()))
}

/// XML `NameStartChar`, judged on the first byte. Multi-byte characters
/// are accepted.
#[cfg(feature = "xml")]
fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || matches!(byte, b'_' | b':') || byte >= 0x80
}
