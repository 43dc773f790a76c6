//! Markup events → reduced lines.
//!
//! The reducer is a small state machine over four flags. It does not build a
//! tree: the catalog pages are flat enough that the innermost formatting
//! context decides how a text run is rendered.

use tracing::trace;

use crate::markup::MarkupEvent;

/// `size` attribute value that marks small-font annotations.
const SMALL_FONT_SIZE: &str = "-2";

/// Literal entity text that some pages leave undecoded.
const NBSP_ENTITY: &str = "&nbsp;";

/// Accumulates markup events into trimmed, non-empty lines.
#[derive(Debug, Default)]
pub struct LineReducer {
    in_title: bool,
    in_heading: bool,
    in_link: bool,
    in_small_font: bool,
    current_line: String,
    lines: Vec<String>,
}

impl LineReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a sequence of events.
    pub fn extend<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = MarkupEvent>,
    {
        for event in events {
            self.push(event);
        }
    }

    /// Feed a single event.
    pub fn push(&mut self, event: MarkupEvent) {
        match event {
            MarkupEvent::Start { name, attrs } => self.open(&name, &attrs),
            MarkupEvent::End { name } => self.close(&name),
            MarkupEvent::Text(text) => self.text(&text),
        }
    }

    /// Flush the pending buffer and return the collected lines.
    pub fn finish(mut self) -> Vec<String> {
        self.flush_line();
        self.lines
    }

    fn open(&mut self, name: &str, attrs: &[(String, String)]) {
        match name {
            "title" => self.in_title = true,
            "h2" => self.in_heading = true,
            "a" => self.in_link = true,
            "br" => self.flush_line(),
            "font" => {
                if attrs
                    .iter()
                    .any(|(k, v)| k == "size" && v == SMALL_FONT_SIZE)
                {
                    self.in_small_font = true;
                }
            }
            "ul" | "div" => self.flush_line(),
            _ => {}
        }
    }

    fn close(&mut self, name: &str) {
        match name {
            "title" => {
                self.in_title = false;
                self.flush_with_prefix("# ");
            }
            "h2" => {
                self.in_heading = false;
                self.flush_with_prefix("## ");
            }
            "a" => self.in_link = false,
            "font" => self.in_small_font = false,
            "ul" | "div" | "body" => self.flush_line(),
            _ => {}
        }
    }

    fn text(&mut self, data: &str) {
        let text = data.trim();
        if text.is_empty() {
            return;
        }

        if self.in_title || self.in_heading {
            self.current_line.push_str(text);
        } else if self.in_link {
            self.separate();
            self.current_line.push_str("**");
            self.current_line.push_str(text);
            self.current_line.push_str("**");
        } else if self.in_small_font {
            self.separate();
            self.current_line.push('*');
            self.current_line.push_str(text);
            self.current_line.push('*');
        } else if text != NBSP_ENTITY {
            self.current_line.push_str(text);
            self.current_line.push(' ');
        }
    }

    /// Insert a single space unless the buffer is empty or already ends in one.
    fn separate(&mut self) {
        if !self.current_line.is_empty() && !self.current_line.ends_with(' ') {
            self.current_line.push(' ');
        }
    }

    fn flush_with_prefix(&mut self, prefix: &str) {
        let line = self.current_line.trim();
        if !line.is_empty() {
            self.lines.push(format!("{prefix}{line}"));
            self.current_line.clear();
        }
    }

    fn flush_line(&mut self) {
        let line = self.current_line.trim();
        if !line.is_empty() {
            trace!("reduced line: {line}");
            self.lines.push(line.to_string());
            self.current_line.clear();
        }
    }
}

/// Reduce a full event stream to lines.
pub fn reduce<I>(events: I) -> Vec<String>
where
    I: IntoIterator<Item = MarkupEvent>,
{
    let mut reducer = LineReducer::new();
    reducer.extend(events);
    reducer.finish()
}
