mod header;
mod normalize;
mod section;


pub use header::{HEADER_MARKER, parse_header};
pub use normalize::normalize_content;
pub use section::Section;

/// Section being filled while walking the document
struct OpenSection<'a> {
    title: &'a str,
    content: String,
}

impl OpenSection<'_> {
    fn finish(self) -> Section {
        Section::new(self.title, normalize_content(&self.content))
    }
}

/// Split a Markdown document into sections on level-2 headers
///
/// Rules:
/// - Every `##` header line opens a new section titled with its trimmed text
/// - Lines before the first header have no section and are dropped
/// - Deeper headers (`###`...) are ordinary content of the open section
/// - Section bodies are normalized with [`normalize_content`]
///
/// Never fails: empty input or input without headers yields no sections.
pub fn split_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<OpenSection<'_>> = None;

    for line in lines(text) {
        if let Some(title) = parse_header(line) {
            if let Some(open) = current.take() {
                sections.push(open.finish());
            }
            current = Some(OpenSection {
                title,
                content: String::new(),
            });
        } else if let Some(open) = current.as_mut() {
            open.content.push_str(line);
            open.content.push('\n');
        }
    }

    if let Some(open) = current {
        sections.push(open.finish());
    }

    sections
}

/// Iterate over lines, splitting on every line boundary [`is_line_break`]
/// accepts and treating `\r\n` as one boundary
///
/// A terminator at the very end does not produce a trailing empty line.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        match rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((pos, c)) => {
                let line = &rest[..pos];
                let skip = if rest[pos..].starts_with("\r\n") {
                    2
                } else {
                    c.len_utf8()
                };
                rest = &rest[pos + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Line boundaries: `\n`, `\r`, vertical tab, form feed, the file/group/record
/// separators, NEL and the Unicode line and paragraph separators
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
