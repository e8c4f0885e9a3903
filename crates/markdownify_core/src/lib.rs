//! Markdownify core: turns HTTP response bodies into lightweight Markdown.
//!
//! Pure and synchronous; no logging and no I/O happen in the conversion path.
mod classify;
mod convert;
mod decode;
mod engine;
mod extract;
mod preview;
mod types;

pub use classify::{classify, normalize_media_type};
pub use convert::{
    converter_for, Converter, HtmlConverter, JsonConverter, PlainTextConverter, XmlConverter,
};
pub use decode::{decode_body, DecodedBody};
pub use engine::convert_to_markdown;
pub use extract::{html_events, Extractor, HtmlEvent, HtmlEvents, HtmlTextExtractor};
pub use preview::{build_preview, ELLIPSIS};
pub use types::{ConversionError, ConversionResult, MediaKind, PayloadFormat};
