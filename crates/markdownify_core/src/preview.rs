use crate::types::ConversionError;

pub const ELLIPSIS: char = '…';

/// Bound `markdown` to at most `limit` characters.
///
/// Lengths are counted in chars, not bytes. When truncation happens the
/// result is the first `limit - 1` chars followed by [`ELLIPSIS`].
pub fn build_preview(markdown: &str, limit: usize) -> Result<String, ConversionError> {
    if limit < 1 {
        return Err(ConversionError::InvalidLimit { limit });
    }
    if markdown.chars().count() <= limit {
        return Ok(markdown.to_string());
    }
    let mut preview: String = markdown.chars().take(limit - 1).collect();
    preview.push(ELLIPSIS);
    Ok(preview)
}
