pub mod placeholder;
pub mod report;
pub mod spell;
pub mod tokenizer;

use crate::config::CheckerOptions;
use crate::error::CheckError;
use crate::extraction::ExtractionDiff;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use spell::{Finding, SpellCheck};

/// Identifier for a checker variant. Used for hard-fail escalation,
/// option-key namespacing and report labelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckerKind {
    Spell,
}

impl CheckerKind {
    pub const ALL: [CheckerKind; 1] = [CheckerKind::Spell];

    /// Static registry: build the checker variant for this kind.
    pub fn instantiate(&self, options: CheckerOptions) -> ConfiguredChecker {
        match self {
            CheckerKind::Spell => SpellCheck::new(options).into(),
        }
    }
}

impl fmt::Display for CheckerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerKind::Spell => write!(f, "spell"),
        }
    }
}

impl FromStr for CheckerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spell" => Ok(CheckerKind::Spell),
            _ => Err(format!("unknown checker kind: {}", s)),
        }
    }
}

/// Capability set shared by every checker variant.
#[enum_dispatch]
pub trait Checker {
    fn kind(&self) -> CheckerKind;

    fn set_options(&mut self, options: CheckerOptions);

    /// Whether this checker participates in the run.
    fn should_run(&self) -> bool;

    /// Inspect every added text unit of every diff and report findings.
    /// Fatal configuration or masking failures come back as errors; findings
    /// are reported through the returned [`CheckResult`].
    fn run(&self, diffs: &[ExtractionDiff]) -> Result<CheckResult, CheckError>;
}

/// Outcome of one checker invocation. Created fresh per run and never
/// mutated after return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub checker: CheckerKind,
    pub successful: bool,
    pub hard_fail: bool,
    pub notification: String,
}

/// Tagged-variant dispatch over the configured checker variants.
#[enum_dispatch(Checker)]
pub enum ConfiguredChecker {
    Spell(SpellCheck),
}

/// Run the given checker kinds sequentially, in configured order. Each
/// checker owns its loaded resources; the first fatal error aborts the run
/// and propagates to the caller. Results come back in configured order.
pub fn run_checks(
    kinds: &[CheckerKind],
    options: &CheckerOptions,
    diffs: &[ExtractionDiff],
) -> Result<Vec<CheckResult>, CheckError> {
    let mut results = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let checker = kind.instantiate(options.clone());
        if !checker.should_run() {
            continue;
        }
        results.push(checker.run(diffs)?);
    }
    Ok(results)
}
