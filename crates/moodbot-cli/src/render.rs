//! Terminal rendering of answer text.
//!
//! Rendering is a presentation concern the controller never sees: the chat
//! loop picks a renderer and feeds it answer content. [`MarkdownRenderer`]
//! walks pulldown-cmark events and emits ANSI-styled text; [`PlainRenderer`]
//! passes the text through untouched.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use yansi::Paint;

pub trait Renderer {
    fn render(&self, text: &str) -> String;
}

pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, text: &str) -> String {
        text.to_string()
    }
}

#[derive(Default)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, text: &str) -> String {
        render_markdown(text)
    }
}

fn render_markdown(input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(input, options);

    let mut out = String::new();
    let mut bold_depth = 0usize;
    let mut emphasis_depth = 0usize;
    let mut in_heading = false;
    let mut in_code_block = false;
    let mut list_ordinal: Option<u64> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                ensure_blank_line(&mut out);
                in_heading = true;
            }
            Event::End(TagEnd::Heading(_)) => {
                out.push('\n');
                in_heading = false;
            }

            Event::Start(Tag::Strong) => bold_depth += 1,
            Event::End(TagEnd::Strong) => bold_depth = bold_depth.saturating_sub(1),
            Event::Start(Tag::Emphasis) => emphasis_depth += 1,
            Event::End(TagEnd::Emphasis) => emphasis_depth = emphasis_depth.saturating_sub(1),

            Event::Start(Tag::List(start)) => list_ordinal = start,
            Event::End(TagEnd::List(_)) => list_ordinal = None,
            Event::Start(Tag::Item) => match list_ordinal {
                Some(n) => {
                    out.push_str(&format!("  {}. ", n));
                    list_ordinal = Some(n + 1);
                }
                None => out.push_str("  - "),
            },
            Event::End(TagEnd::Item) => out.push('\n'),

            Event::Start(Tag::CodeBlock(_)) => {
                ensure_blank_line(&mut out);
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                out.push('\n');
            }

            Event::End(TagEnd::Paragraph) => out.push('\n'),

            Event::Text(text) => {
                let styled = if in_heading || bold_depth > 0 {
                    Paint::new(text.as_ref()).bold().to_string()
                } else if emphasis_depth > 0 {
                    Paint::new(text.as_ref()).italic().to_string()
                } else if in_code_block {
                    Paint::cyan(text.as_ref()).to_string()
                } else {
                    text.to_string()
                };
                out.push_str(&styled);
            }
            Event::Code(code) => out.push_str(&Paint::cyan(code.as_ref()).to_string()),

            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => {
                ensure_blank_line(&mut out);
                out.push_str("----\n");
            }

            _ => {}
        }
    }

    out.trim_end().to_string()
}

fn ensure_blank_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}
