//! html5ever tokenizer adapter.
//!
//! The reducer only needs a flat stream of open-tag, close-tag and text
//! events, so the document is run through html5ever's standalone tokenizer
//! rather than the tree builder. No tree is built and no implied tags are
//! inserted: every event corresponds to markup actually present in the input.

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

/// A single markup event.
///
/// Tag names are lowercase. Character references in text and attribute
/// values are already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent {
    Start {
        name: String,
        attrs: Vec<(String, String)>,
    },
    End {
        name: String,
    },
    Text(String),
}

impl MarkupEvent {
    /// An open tag without attributes.
    pub fn start(name: &str) -> Self {
        MarkupEvent::Start {
            name: name.to_string(),
            attrs: Vec::new(),
        }
    }

    /// An open tag with attributes.
    pub fn start_with(name: &str, attrs: &[(&str, &str)]) -> Self {
        MarkupEvent::Start {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn end(name: &str) -> Self {
        MarkupEvent::End {
            name: name.to_string(),
        }
    }

    pub fn text(text: &str) -> Self {
        MarkupEvent::Text(text.to_string())
    }
}

/// TokenSink that records events.
///
/// Uses interior mutability because html5ever's TokenSink takes `&self`.
/// Character tokens are buffered until the next non-character token so a
/// run of text between two tags is always reported as one `Text` event;
/// the tokenizer itself splits runs around character references.
#[derive(Default)]
struct EventSink {
    events: RefCell<Vec<MarkupEvent>>,
    pending_text: RefCell<String>,
}

impl EventSink {
    fn flush_text(&self) {
        let text = self.pending_text.take();
        if !text.is_empty() {
            self.events.borrow_mut().push(MarkupEvent::Text(text));
        }
    }
}

impl TokenSink for EventSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(text) => {
                self.pending_text.borrow_mut().push_str(&text);
            }
            Token::NullCharacterToken => {}
            Token::TagToken(tag) => {
                self.flush_text();
                let name = tag.name.to_string();
                let event = match tag.kind {
                    TagKind::StartTag => MarkupEvent::Start {
                        name,
                        attrs: tag
                            .attrs
                            .iter()
                            .map(|a| (a.name.local.to_string(), a.value.to_string()))
                            .collect(),
                    },
                    TagKind::EndTag => MarkupEvent::End { name },
                };
                self.events.borrow_mut().push(event);
            }
            // Comments, doctypes and EOF all end the current text run.
            _ => self.flush_text(),
        }
        TokenSinkResult::Continue
    }
}

/// Tokenize an HTML document into markup events.
pub fn tokenize(html: &str) -> Vec<MarkupEvent> {
    let tokenizer = Tokenizer::new(EventSink::default(), TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    tokenizer.sink.flush_text();
    tokenizer.sink.events.take()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_and_text() {
        let events = tokenize("<h2>經部</h2><br>");
        assert_eq!(
            events,
            vec![
                MarkupEvent::start("h2"),
                MarkupEvent::text("經部"),
                MarkupEvent::end("h2"),
                MarkupEvent::start("br"),
            ]
        );
    }

    #[test]
    fn test_attributes_lowercased_and_decoded() {
        let events = tokenize(r#"<FONT SIZE="-2">注</FONT>"#);
        assert_eq!(events[0], MarkupEvent::start_with("font", &[("size", "-2")]));
        assert_eq!(events[2], MarkupEvent::end("font"));
    }

    #[test]
    fn test_text_run_coalesced_across_references() {
        let events = tokenize("<p>a &amp; b</p>");
        assert_eq!(events[1], MarkupEvent::text("a & b"));
    }

    #[test]
    fn test_nbsp_decoded() {
        let events = tokenize("<div>&nbsp;</div>");
        assert_eq!(events[1], MarkupEvent::text("\u{a0}"));
    }

    #[test]
    fn test_comment_splits_text() {
        let events = tokenize("一<!-- x -->二");
        assert_eq!(
            events,
            vec![MarkupEvent::text("一"), MarkupEvent::text("二")]
        );
    }

    #[test]
    fn test_trailing_text_flushed() {
        let events = tokenize("<a>四庫全書</a>第一册");
        assert_eq!(events.last(), Some(&MarkupEvent::text("第一册")));
    }
}
