use crate::checks::placeholder::Span;
use unicode_segmentation::UnicodeSegmentation;

/// A candidate word extracted from a source string, with its byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Extract candidate words from a source string, skipping excluded spans.
///
/// Words are contiguous runs of alphabetic characters and apostrophes; digits
/// and punctuation separate. Case is preserved. A word overlapping an excluded
/// span by even one character is dropped whole, so no fragment at a span
/// boundary is ever checked.
pub fn tokenize(source: &str, excluded: &[Span]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut word_start = 0;
    let mut offset = 0;

    for grapheme in source.graphemes(true) {
        let ch = grapheme.chars().next().unwrap_or(' ');

        if ch.is_alphabetic() || ch == '\'' {
            if current.is_empty() {
                word_start = offset;
            }
            current.push_str(grapheme);
        } else if !current.is_empty() {
            push_token(&mut tokens, &mut current, word_start, offset, excluded);
        }

        offset += grapheme.len();
    }

    if !current.is_empty() {
        push_token(&mut tokens, &mut current, word_start, offset, excluded);
    }

    tokens
}

fn push_token(
    tokens: &mut Vec<Token>,
    current: &mut String,
    start: usize,
    end: usize,
    excluded: &[Span],
) {
    let inside_excluded = excluded.iter().any(|span| span.intersects(start, end));
    if !inside_excluded {
        tokens.push(Token {
            text: std::mem::take(current),
            start,
            end,
        });
    } else {
        current.clear();
    }
}
