use std::fmt;

/// Conversion strategy selected from a content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Html,
    Json,
    Xml,
    Plain,
    Unsupported,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Html => write!(f, "html"),
            MediaKind::Json => write!(f, "json"),
            MediaKind::Xml => write!(f, "xml"),
            MediaKind::Plain => write!(f, "plain"),
            MediaKind::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// Structured payload formats that are parsed before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Json,
    Xml,
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadFormat::Json => write!(f, "json"),
            PayloadFormat::Xml => write!(f, "xml"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub markdown: String,
    pub preview: String,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("unsupported content type for markdown conversion: {content_type}")]
    UnsupportedContentType { content_type: String },
    #[error("malformed {format} payload: {message}")]
    MalformedPayload {
        format: PayloadFormat,
        message: String,
    },
    #[error("empty result after conversion")]
    EmptyResult,
    #[error("invalid preview limit {limit}: must be at least 1")]
    InvalidLimit { limit: usize },
}

impl ConversionError {
    pub(crate) fn malformed(format: PayloadFormat, message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            format,
            message: message.into(),
        }
    }
}
