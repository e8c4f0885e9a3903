use encoding_rs::{Encoding, UTF_8};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBody {
    pub text: String,
    pub encoding_label: String,
}

/// Decode raw response bytes into text using: BOM -> Content-Type charset -> UTF-8.
///
/// Malformed sequences are replaced with U+FFFD; decoding never fails.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> DecodedBody {
    let encoding = Encoding::for_bom(bytes)
        .map(|(enc, _)| enc)
        .or_else(|| {
            content_type
                .and_then(extract_charset)
                .and_then(|label| Encoding::for_label(label.as_bytes()))
        })
        .unwrap_or(UTF_8);

    // `decode` sniffs and strips a BOM on its own.
    let (text, used, _had_errors) = encoding.decode(bytes);
    DecodedBody {
        text: text.into_owned(),
        encoding_label: used.name().to_string(),
    }
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim().trim_matches(['"', '\''].as_ref()))
        })
        .find(|label| !label.is_empty())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::{decode_body, extract_charset};

    #[test]
    fn charset_parameter_is_found_in_any_case() {
        assert_eq!(
            extract_charset("text/html; Charset=\"ISO-8859-1\"").as_deref(),
            Some("ISO-8859-1")
        );
        assert_eq!(extract_charset("text/html"), None);
        assert_eq!(extract_charset("text/html; charset="), None);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let decoded = decode_body(b"ok \xff", Some("text/plain"));
        assert_eq!(decoded.text, "ok \u{fffd}");
        assert_eq!(decoded.encoding_label, "UTF-8");
    }

    #[test]
    fn unknown_charset_falls_back_to_utf8() {
        let decoded = decode_body("caf\u{e9}".as_bytes(), Some("text/plain; charset=bogus"));
        assert_eq!(decoded.text, "caf\u{e9}");
        assert_eq!(decoded.encoding_label, "UTF-8");
    }
}
