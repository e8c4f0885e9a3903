use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::extract::{Extractor, HtmlTextExtractor};
use crate::types::{ConversionError, MediaKind, PayloadFormat};

const INDENT_WIDTH: usize = 2;

pub trait Converter: Send + Sync {
    fn to_markdown(&self, body: &str) -> Result<String, ConversionError>;
}

/// Pick the converter for a classified content type.
///
/// Returns `None` for [`MediaKind::Unsupported`].
pub fn converter_for(kind: MediaKind) -> Option<&'static dyn Converter> {
    match kind {
        MediaKind::Html => Some(&HtmlConverter),
        MediaKind::Json => Some(&JsonConverter),
        MediaKind::Xml => Some(&XmlConverter),
        MediaKind::Plain => Some(&PlainTextConverter),
        MediaKind::Unsupported => None,
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlConverter;

impl Converter for HtmlConverter {
    fn to_markdown(&self, body: &str) -> Result<String, ConversionError> {
        Ok(HtmlTextExtractor.extract(body))
    }
}

/// Pretty-prints JSON with 2-space indentation inside a `json` fence.
/// Key order and non-ASCII characters are preserved.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonConverter;

impl Converter for JsonConverter {
    fn to_markdown(&self, body: &str) -> Result<String, ConversionError> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|err| ConversionError::malformed(PayloadFormat::Json, err.to_string()))?;
        let pretty = serde_json::to_string_pretty(&value)
            .map_err(|err| ConversionError::malformed(PayloadFormat::Json, err.to_string()))?;
        Ok(fenced("json", &pretty))
    }
}

/// Re-emits well-formed XML one node per line inside an `xml` fence.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlConverter;

impl Converter for XmlConverter {
    fn to_markdown(&self, body: &str) -> Result<String, ConversionError> {
        let pretty = pretty_print_xml(body)?;
        Ok(fenced("xml", pretty.trim_end()))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextConverter;

impl Converter for PlainTextConverter {
    fn to_markdown(&self, body: &str) -> Result<String, ConversionError> {
        Ok(body.trim().to_string())
    }
}

fn fenced(language: &str, content: &str) -> String {
    format!("```{language}\n{content}\n```")
}

fn xml_error(message: impl ToString) -> ConversionError {
    ConversionError::malformed(PayloadFormat::Xml, message.to_string())
}

fn pretty_print_xml(body: &str) -> Result<String, ConversionError> {
    let mut reader = Reader::from_str(body);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);

    let mut depth = 0usize;
    let mut roots = 0usize;
    loop {
        let event = reader.read_event().map_err(xml_error)?;
        match &event {
            Event::Eof => break,
            Event::Start(e) | Event::Empty(e) => {
                check_attributes(e)?;
                if depth == 0 {
                    roots += 1;
                    if roots > 1 {
                        return Err(xml_error("junk after document element"));
                    }
                }
                if matches!(event, Event::Start(_)) {
                    depth += 1;
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(e) => {
                if e.iter().all(u8::is_ascii_whitespace) {
                    continue;
                }
                if depth == 0 {
                    return Err(xml_error("text outside the document element"));
                }
                // Rejects undefined entities.
                e.unescape().map_err(xml_error)?;
                let raw = std::str::from_utf8(e).map_err(xml_error)?;
                let text = BytesText::from_escaped(trim_layout(raw));
                writer.write_event(Event::Text(text)).map_err(xml_error)?;
                continue;
            }
            Event::CData(_) if depth == 0 => {
                return Err(xml_error("character data outside the document element"));
            }
            _ => {}
        }
        writer.write_event(event).map_err(xml_error)?;
    }

    if depth != 0 {
        return Err(xml_error("unclosed element at end of document"));
    }
    if roots == 0 {
        return Err(xml_error("no document element found"));
    }
    String::from_utf8(writer.into_inner()).map_err(xml_error)
}

fn check_attributes(start: &BytesStart<'_>) -> Result<(), ConversionError> {
    for attr in start.attributes() {
        attr.map_err(xml_error)?
            .unescape_value()
            .map_err(xml_error)?;
    }
    Ok(())
}

/// Drop leading and trailing whitespace only when it spans a line break, so
/// source indentation goes away while spacing in mixed content survives.
fn trim_layout(text: &str) -> &str {
    let start = text.trim_start();
    let text = if text[..text.len() - start.len()].contains('\n') {
        start
    } else {
        text
    };
    let end = text.trim_end();
    if text[end.len()..].contains('\n') {
        end
    } else {
        text
    }
}
