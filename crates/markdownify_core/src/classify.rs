use crate::types::MediaKind;

/// Strip parameters after the first `;`, trim and lower-case.
pub fn normalize_media_type(raw_content_type: &str) -> String {
    raw_content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Map a raw content type onto a conversion strategy.
///
/// Substring checks run in the fixed order html, json, xml and win over the
/// `text/` prefix check, so `application/xhtml+xml` is html and
/// `text/xml` is xml.
pub fn classify(raw_content_type: &str) -> MediaKind {
    let media_type = normalize_media_type(raw_content_type);
    if media_type.contains("html") {
        MediaKind::Html
    } else if media_type.contains("json") {
        MediaKind::Json
    } else if media_type.contains("xml") {
        MediaKind::Xml
    } else if media_type.starts_with("text/") {
        MediaKind::Plain
    } else {
        MediaKind::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, normalize_media_type};
    use crate::types::MediaKind;

    #[test]
    fn parameters_and_case_are_dropped() {
        assert_eq!(
            normalize_media_type("  Text/HTML ; charset=UTF-8"),
            "text/html"
        );
        assert_eq!(normalize_media_type(""), "");
    }

    #[test]
    fn html_wins_over_xml_and_plain() {
        assert_eq!(classify("application/xhtml+xml"), MediaKind::Html);
        assert_eq!(classify("text/html; charset=utf-8"), MediaKind::Html);
    }

    #[test]
    fn substring_checks_precede_text_prefix() {
        assert_eq!(classify("application/ld+json"), MediaKind::Json);
        assert_eq!(classify("text/json"), MediaKind::Json);
        assert_eq!(classify("text/xml"), MediaKind::Xml);
        assert_eq!(classify("application/rss+xml"), MediaKind::Xml);
    }

    #[test]
    fn remaining_text_types_are_plain() {
        assert_eq!(classify("text/plain"), MediaKind::Plain);
        assert_eq!(classify("TEXT/CSV"), MediaKind::Plain);
    }

    #[test]
    fn everything_else_is_unsupported() {
        assert_eq!(classify("application/octet-stream"), MediaKind::Unsupported);
        assert_eq!(classify("image/png"), MediaKind::Unsupported);
        assert_eq!(classify(""), MediaKind::Unsupported);
        // Parameters never take part in classification.
        assert_eq!(classify("image/png; name=page.html"), MediaKind::Unsupported);
    }
}
