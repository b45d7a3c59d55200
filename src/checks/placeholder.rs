use crate::error::CheckError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Single-brace placeholders such as `{image_name}`, including empty `{}`.
    pub static ref SINGLE_BRACE: Regex = Regex::new(r"\{[^{}]*\}").unwrap();
    /// Printf-style named placeholders such as `%(name)s`.
    pub static ref PRINTF_NAMED: Regex = Regex::new(r"%\([A-Za-z0-9_]+\)[a-zA-Z]").unwrap();
}

/// Half-open byte range `[start, end)` inside a source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn intersects(&self, start: usize, end: usize) -> bool {
        start < self.end && self.start < end
    }
}

/// Identifies the character spans of a source string that hold placeholders
/// and must never reach the spelling engine.
///
/// Two mechanisms contribute spans: the configured regex patterns, applied
/// independently with their matches unioned, and a built-in nested-brace scan
/// that catches ICU-style plural/select constructs whose inner groups a flat
/// regex cannot bound correctly.
#[derive(Debug)]
pub struct PlaceholderMatcher {
    patterns: Vec<Regex>,
}

impl PlaceholderMatcher {
    pub fn new(patterns: &[String]) -> Result<Self, CheckError> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| CheckError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Compute the merged set of excluded spans for one source string.
    ///
    /// Fails with [`CheckError::MalformedPlaceholder`] when brace nesting is
    /// unbalanced in either direction, aborting the whole run.
    pub fn mask(&self, source: &str) -> Result<Vec<Span>, CheckError> {
        let mut spans = Vec::new();
        for pattern in &self.patterns {
            for found in pattern.find_iter(source) {
                spans.push(Span {
                    start: found.start(),
                    end: found.end(),
                });
            }
        }
        spans.extend(nested_brace_spans(source)?);
        Ok(merge_spans(spans))
    }
}

/// Scan for top-level `{...}` groups that contain nested `{...}` sub-groups,
/// e.g. `{pagesCount, plural, one {# page.} other {# pages.}}`. The entire
/// outer group is excluded, to arbitrary depth. Groups without nesting are
/// left to the configured patterns.
fn nested_brace_spans(source: &str) -> Result<Vec<Span>, CheckError> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut group_start = 0usize;
    let mut has_nested = false;

    for (offset, ch) in source.char_indices() {
        match ch {
            '{' => {
                if depth == 0 {
                    group_start = offset;
                    has_nested = false;
                } else {
                    has_nested = true;
                }
                depth += 1;
            }
            '}' => {
                if depth == 0 {
                    return Err(CheckError::MalformedPlaceholder(source.to_string()));
                }
                depth -= 1;
                if depth == 0 && has_nested {
                    spans.push(Span {
                        start: group_start,
                        end: offset + ch.len_utf8(),
                    });
                }
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(CheckError::MalformedPlaceholder(source.to_string()));
    }
    Ok(spans)
}

/// Union overlapping spans, keeping the larger exclusion when a regex match
/// and a nested group partially overlap.
fn merge_spans(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_by_key(|span| (span.start, span.end));
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => {
                last.end = last.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }
    merged
}
