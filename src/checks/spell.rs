use crate::checks::placeholder::PlaceholderMatcher;
use crate::checks::tokenizer;
use crate::checks::{CheckResult, Checker, CheckerKind};
use crate::config::{CheckerOptions, SpellParam};
use crate::dict::{self, SpellEngine};
use crate::error::CheckError;
use crate::extraction::ExtractionDiff;
use std::collections::HashSet;

/// A distinct flagged token with its ranked corrections.
///
/// Findings are deduplicated by token text across the entire diff collection;
/// the same misspelling in ten strings yields one finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub word: String,
    pub suggestions: Vec<String>,
}

/// Spelling checker over the added text units of an extraction diff.
///
/// Placeholders are masked before tokenization so variable names and nested
/// plural/select constructs never reach the spelling engine.
pub struct SpellCheck {
    options: CheckerOptions,
}

impl SpellCheck {
    pub fn new(options: CheckerOptions) -> Self {
        Self { options }
    }

    /// Run against a caller-supplied engine instead of loading one from the
    /// configured dictionary files. The configuration validation performed by
    /// [`run`](Checker::run) is skipped; only scanning happens here.
    pub fn run_with_engine<E: SpellEngine>(
        &self,
        engine: &E,
        diffs: &[ExtractionDiff],
    ) -> Result<CheckResult, CheckError> {
        let findings = self.scan(engine, diffs)?;
        Ok(self.complete(findings))
    }

    fn scan<E: SpellEngine>(
        &self,
        engine: &E,
        diffs: &[ExtractionDiff],
    ) -> Result<Vec<Finding>, CheckError> {
        let matcher = PlaceholderMatcher::new(self.options.placeholder_patterns())?;
        let mut flagged = HashSet::new();
        let mut findings = Vec::new();

        for diff in diffs {
            for unit in diff.added() {
                let excluded = matcher.mask(unit.source())?;
                for token in tokenizer::tokenize(unit.source(), &excluded) {
                    if flagged.contains(&token.text) || engine.spell(&token.text) {
                        continue;
                    }
                    flagged.insert(token.text.clone());
                    findings.push(Finding {
                        suggestions: engine.suggest(&token.text),
                        word: token.text,
                    });
                }
            }
        }

        Ok(findings)
    }

    fn complete(&self, findings: Vec<Finding>) -> CheckResult {
        let successful = findings.is_empty();
        CheckResult {
            checker: CheckerKind::Spell,
            successful,
            hard_fail: !successful && self.options.is_hard_fail(CheckerKind::Spell),
            notification: self.notification(&findings),
        }
    }

    fn notification(&self, findings: &[Finding]) -> String {
        if findings.is_empty() {
            return String::new();
        }

        let mut lines: Vec<String> = findings.iter().map(format_finding).collect();
        if let Some(path) = self.options.param(SpellParam::DictionaryAdditions) {
            lines.push(format!(
                "If a word is correctly spelt please add your spelling to {} to avoid future false negatives.",
                path
            ));
        }
        lines.join("\n")
    }
}

impl Checker for SpellCheck {
    fn kind(&self) -> CheckerKind {
        CheckerKind::Spell
    }

    fn set_options(&mut self, options: CheckerOptions) {
        self.options = options;
    }

    fn should_run(&self) -> bool {
        true
    }

    fn run(&self, diffs: &[ExtractionDiff]) -> Result<CheckResult, CheckError> {
        let engine = dict::load(&self.options)?;
        self.run_with_engine(&engine, diffs)
    }
}

fn format_finding(finding: &Finding) -> String {
    match finding.suggestions.as_slice() {
        [] => format!("* '{}'", finding.word),
        suggestions => format!(
            "* '{}' (Did you mean {}?)",
            finding.word,
            join_with_or(suggestions)
        ),
    }
}

/// `a` / `a or b` / `a, b or c` — comma-join all but the last, `or` before it.
fn join_with_or(words: &[String]) -> String {
    match words {
        [] => String::new(),
        [only] => only.clone(),
        [rest @ .., last] => format!("{} or {}", rest.join(", "), last),
    }
}
