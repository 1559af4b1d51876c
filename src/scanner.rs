//! Placeholder tokenizer.
//!
//! A placeholder is `${NAME}` where `NAME` is one or more ASCII letters, digits or
//! underscores, optionally padded with spaces or tabs inside the braces. Anything that
//! does not fit that shape (`${}`, `${A-B}`, an unclosed `${A`) is plain text.
//!
//! The scanner works on raw bytes, so templates need not be valid UTF-8.

use std::collections::BTreeSet;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Bytes copied through unchanged.
    Literal(&'a [u8]),
    /// A `${NAME}` occurrence; `name` excludes the braces and padding.
    Placeholder { name: &'a str },
}

#[derive(Debug)]
pub struct Scanner<'a> {
    source: &'a [u8],
    byte_idx: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self { source, byte_idx: 0 }
    }

    /// Next token and its byte span in the source. Spans are contiguous and cover the
    /// whole input.
    pub fn scan_next(&mut self) -> Option<(Token<'a>, Range<usize>)> {
        let start = self.byte_idx;
        if start >= self.source.len() {
            return None;
        }

        let mut search_from = start;

        while let Some(p) = memchr::memchr(b'$', &self.source[search_from..]) {
            let dollar = search_from + p;
            match self.match_placeholder(dollar) {
                Some((name, end)) => {
                    // Flush the text in front of the placeholder first.
                    if dollar > start {
                        self.byte_idx = dollar;
                        return Some((Token::Literal(&self.source[start..dollar]), start..dollar));
                    }
                    self.byte_idx = end;
                    return Some((Token::Placeholder { name }, dollar..end));
                }
                None => search_from = dollar + 1,
            }
        }

        let end = self.source.len();
        self.byte_idx = end;
        Some((Token::Literal(&self.source[start..end]), start..end))
    }

    /// Try to read `${ NAME }` starting at the `$` at `dollar`. Returns the name and the
    /// byte offset just past the closing brace.
    fn match_placeholder(&self, dollar: usize) -> Option<(&'a str, usize)> {
        let bytes = self.source;
        if bytes.get(dollar + 1) != Some(&b'{') {
            return None;
        }

        let mut i = skip_padding(bytes, dollar + 2);
        let name_start = i;
        while i < bytes.len() && is_ident_byte(bytes[i]) {
            i += 1;
        }
        if i == name_start {
            return None;
        }
        let name_end = i;

        i = skip_padding(bytes, i);
        if bytes.get(i) != Some(&b'}') {
            return None;
        }

        // Identifier bytes are ASCII, so this never fails.
        let name = std::str::from_utf8(&bytes[name_start..name_end]).ok()?;
        Some((name, i + 1))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = (Token<'a>, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        self.scan_next()
    }
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn skip_padding(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && matches!(bytes[i], b' ' | b'\t') {
        i += 1;
    }
    i
}

/// Distinct placeholder names in `template`, in ascending order.
pub fn scan(template: &[u8]) -> Vec<String> {
    let names: BTreeSet<&str> = Scanner::new(template)
        .filter_map(|(token, _)| match token {
            Token::Placeholder { name } => Some(name),
            Token::Literal(_) => None,
        })
        .collect();

    names.into_iter().map(str::to_owned).collect()
}
