use markdownify_core::{
    convert_to_markdown, decode_body, ConversionError, Converter, Extractor, HtmlConverter,
    HtmlTextExtractor, PayloadFormat,
};
use pretty_assertions::assert_eq;

#[test]
fn decode_respects_charset_header() {
    let bytes = b"caf\xe9"; // iso-8859-1
    let decoded = decode_body(bytes, Some("text/html; charset=ISO-8859-1"));
    assert_eq!(decoded.text, "café");
    assert!(
        decoded.encoding_label.eq_ignore_ascii_case("ISO-8859-1")
            || decoded.encoding_label.eq_ignore_ascii_case("windows-1252")
    );
}

#[test]
fn decode_handles_utf8_bom() {
    let bytes = b"\xEF\xBB\xBFhello";
    let decoded = decode_body(bytes, Some("text/html; charset=ISO-8859-1"));
    assert_eq!(decoded.text, "hello");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn extractor_keeps_document_structure() {
    let html = r#"
    <html><head><title>Title</title></head>
    <body>
        <header>Site</header>
        <article><h1>Heading</h1><p>Body <em>text</em> here.</p></article>
        <footer>Footer</footer>
    </body></html>
    "#;
    let text = HtmlTextExtractor.extract(html);
    assert_eq!(text, "Title Site\nHeading\nBody text here.\nFooter");
}

#[test]
fn converter_matches_extractor() {
    let html = "<ul><li>one</li><li>two</li></ul>";
    let md = HtmlConverter.to_markdown(html).unwrap();
    assert_eq!(md, HtmlTextExtractor.extract(html));
    assert_eq!(md, "one\ntwo");
}

#[test]
fn pipeline_decode_then_convert_is_deterministic() {
    let bytes = br#"<html><body><article><p>A</p><p>B</p></article></body></html>"#;
    let decoded = decode_body(bytes, Some("text/html; charset=utf-8"));
    let first = convert_to_markdown(&decoded.text, "text/html; charset=utf-8", 400).unwrap();
    let second = convert_to_markdown(&decoded.text, "text/html; charset=utf-8", 400).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.markdown, "A\nB");
}

#[test]
fn malformed_json_reports_its_format() {
    let err = convert_to_markdown("{not json}", "application/json", 10).unwrap_err();
    match err {
        ConversionError::MalformedPayload { format, message } => {
            assert_eq!(format, PayloadFormat::Json);
            assert!(!message.is_empty());
        }
        other => panic!("unexpected error {other:?}"),
    }
}
