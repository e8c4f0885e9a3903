use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

/// Start tags that open a new line.
const LINE_BREAK_START_TAGS: &[&str] = &["br", "p", "div", "li", "tr"];

/// End tags of block-level elements; closing one ends the current line.
const BLOCK_END_TAGS: &[&str] = &[
    "p", "div", "section", "article", "ul", "ol", "li", "br", "hr", "table", "tr", "td", "th",
    "header", "footer",
];

pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> String;
}

/// Structural text extractor:
/// - block-level tags become line breaks
/// - text runs are trimmed and joined by single spaces
/// - blank lines are dropped.
///
/// Malformed markup never fails; the result may simply be empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlTextExtractor;

impl Extractor for HtmlTextExtractor {
    fn extract(&self, html: &str) -> String {
        let raw = html_events(html).fold(String::new(), push_event);
        normalize_lines(&raw)
    }
}

/// A single tokenizer event. Tag names are ASCII lower-cased and text is
/// entity-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlEvent {
    StartTag(String),
    EndTag(String),
    Text(String),
}

pub type HtmlEvents = std::vec::IntoIter<HtmlEvent>;

/// Tokenize HTML-like markup into start, end and text events.
///
/// Uses the HTML5 tokenizer without a tree builder, so unbalanced or broken
/// markup is tolerated. A self-closing tag yields a start event followed by
/// an end event. Adjacent character runs are merged into one text event;
/// comments and doctypes only separate text.
pub fn html_events(html: &str) -> HtmlEvents {
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));

    let tokenizer = Tokenizer::new(EventSink::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    tokenizer.sink.flush_text();
    tokenizer.sink.events.take().into_iter()
}

#[derive(Default)]
struct EventSink {
    events: RefCell<Vec<HtmlEvent>>,
    text: RefCell<String>,
}

impl EventSink {
    fn flush_text(&self) {
        let text = self.text.take();
        if !text.is_empty() {
            self.events.borrow_mut().push(HtmlEvent::Text(text));
        }
    }

    fn push_tag(&self, tag: Tag) -> TokenSinkResult<()> {
        self.flush_text();
        let name = tag.name.to_ascii_lowercase().to_string();
        let mut events = self.events.borrow_mut();
        match tag.kind {
            TagKind::StartTag => {
                events.push(HtmlEvent::StartTag(name.clone()));
                if tag.self_closing {
                    events.push(HtmlEvent::EndTag(name));
                } else if let Some(kind) = raw_text_kind(&name) {
                    return TokenSinkResult::RawData(kind);
                }
            }
            TagKind::EndTag => events.push(HtmlEvent::EndTag(name)),
        }
        TokenSinkResult::Continue
    }
}

impl TokenSink for EventSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(text) => self.text.borrow_mut().push_str(&text),
            Token::TagToken(tag) => return self.push_tag(tag),
            Token::NullCharacterToken | Token::ParseError(_) => {}
            // Comments, doctypes and end of input.
            _ => self.flush_text(),
        }
        TokenSinkResult::Continue
    }
}

/// Elements whose content is text up to the matching end tag.
fn raw_text_kind(name: &str) -> Option<RawKind> {
    match name {
        "script" => Some(RawKind::ScriptData),
        "style" => Some(RawKind::Rawtext),
        _ => None,
    }
}

fn push_event(mut buf: String, event: HtmlEvent) -> String {
    match event {
        HtmlEvent::StartTag(tag) if LINE_BREAK_START_TAGS.contains(&tag.as_str()) => {
            buf.push('\n');
        }
        HtmlEvent::EndTag(tag) if BLOCK_END_TAGS.contains(&tag.as_str()) => buf.push('\n'),
        HtmlEvent::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                buf.push_str(trimmed);
                buf.push(' ');
            }
        }
        _ => {}
    }
    buf
}

fn normalize_lines(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
