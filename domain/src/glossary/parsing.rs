//! Glossary text parsing
//!
//! A glossary document is line oriented: every line holding a colon defines
//! one entry, `KEY: expansion text`. Everything else is ignored.

use super::entities::Glossary;

/// Characters that end a line, besides `\r\n` as a pair
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Parse a single line into an `(ABBREVIATION, expansion)` pair.
///
/// Splits on the first colon only, so expansions may contain colons.
/// Returns `None` for lines without a colon.
pub fn parse_glossary_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim().to_uppercase(), value.trim().to_string()))
}

/// Parse extracted page texts into a [`Glossary`].
///
/// Pages are concatenated in document order, each followed by a newline;
/// pages without text are skipped. Duplicate keys resolve last-line-wins.
pub fn parse_glossary_text<I, S>(pages: I) -> Glossary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        let page = page.as_ref();
        if !page.is_empty() {
            text.push_str(page);
            text.push('\n');
        }
    }

    split_lines(&text).filter_map(parse_glossary_line).collect()
}

/// Split on every line break PDF extraction may produce, including bare
/// `\r` and form feeds. `\r\n` counts as one break.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split("\r\n").flat_map(|chunk| chunk.split(LINE_BREAKS))
}
