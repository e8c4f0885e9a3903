use crate::classify::classify;
use crate::convert::converter_for;
use crate::preview::build_preview;
use crate::types::{ConversionError, ConversionResult};

/// Convert a decoded response body into Markdown plus a bounded preview.
///
/// `content_type` is the raw header value; parameters such as `charset` are
/// ignored for dispatch. Checks run in order: content type, payload parsing,
/// empty output, then the preview `limit`.
pub fn convert_to_markdown(
    body: &str,
    content_type: &str,
    limit: usize,
) -> Result<ConversionResult, ConversionError> {
    let converter = converter_for(classify(content_type)).ok_or_else(|| {
        ConversionError::UnsupportedContentType {
            content_type: content_type.to_string(),
        }
    })?;

    let markdown = converter.to_markdown(body)?;
    if markdown.trim().is_empty() {
        return Err(ConversionError::EmptyResult);
    }

    let preview = build_preview(&markdown, limit)?;
    Ok(ConversionResult { markdown, preview })
}
