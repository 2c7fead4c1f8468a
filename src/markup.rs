//! Minimal rich-text markup for card display
//!
//! Card text is shown through a small tag language: `<b>..</b>` for bold and
//! `<i>..</i>` for italic, with HTML entities for reserved characters. User
//! supplied text must go through [`escape`] before it is embedded, otherwise a
//! card containing `<b>` would restyle the line instead of displaying it.

use std::borrow::Cow;

const TAGS: [(&str, Tag); 4] = [
    ("<b>", Tag::BoldOpen),
    ("</b>", Tag::BoldClose),
    ("<i>", Tag::ItalicOpen),
    ("</i>", Tag::ItalicClose),
];

#[derive(Debug, Clone, Copy)]
enum Tag {
    BoldOpen,
    BoldClose,
    ItalicOpen,
    ItalicClose,
}

/// A run of text sharing the same style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

/// Escape `&`, `<` and `>` so the text renders literally
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Wrap already-escaped markup in a bold tag
pub fn bold(markup: &str) -> String {
    format!("<b>{}</b>", markup)
}

/// Split markup into styled segments, decoding entities in the text.
///
/// Unknown tags are kept as literal text. Unbalanced closing tags are ignored.
pub fn parse(markup: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut pending = String::new();
    let mut bold_depth = 0usize;
    let mut italic_depth = 0usize;
    let mut rest = markup;

    while let Some(c) = rest.chars().next() {
        let tag = if c == '<' {
            TAGS.iter().find(|(text, _)| rest.starts_with(text))
        } else {
            None
        };

        match tag {
            Some((text, tag)) => {
                flush(&mut segments, &mut pending, bold_depth, italic_depth);
                match tag {
                    Tag::BoldOpen => bold_depth += 1,
                    Tag::BoldClose => bold_depth = bold_depth.saturating_sub(1),
                    Tag::ItalicOpen => italic_depth += 1,
                    Tag::ItalicClose => italic_depth = italic_depth.saturating_sub(1),
                }
                rest = &rest[text.len()..];
            }
            None => {
                pending.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    flush(&mut segments, &mut pending, bold_depth, italic_depth);

    segments
}

fn flush(
    segments: &mut Vec<Segment>,
    pending: &mut String,
    bold_depth: usize,
    italic_depth: usize,
) {
    if pending.is_empty() {
        return;
    }
    let text = html_escape::decode_html_entities(pending.as_str()).into_owned();
    pending.clear();

    let bold = bold_depth > 0;
    let italic = italic_depth > 0;
    // Merge with the previous run when the style did not change
    if let Some(last) = segments.last_mut() {
        if last.bold == bold && last.italic == italic {
            last.text.push_str(&text);
            return;
        }
    }
    segments.push(Segment { text, bold, italic });
}

/// Concatenated text of the markup with all styling removed
pub fn plain_text(markup: &str) -> String {
    parse(markup).into_iter().map(|s| s.text).collect()
}
