//! Quality checks for newly extracted localization source strings.
//!
//! An external extraction stage produces diffs of added text units; the
//! checkers here inspect those units and report findings (misspellings being
//! the concrete case) without ever touching runtime placeholders, including
//! nested ICU-style plural/select constructs.

pub mod checks;
pub mod config;
pub mod dict;
pub mod error;
pub mod extraction;

pub use checks::report::CheckReport;
pub use checks::{
    run_checks, CheckResult, Checker, CheckerKind, ConfiguredChecker, Finding, SpellCheck,
};
pub use config::{params, CheckerOptions, SpellParam};
pub use dict::{FstEngine, SpellEngine};
pub use error::CheckError;
pub use extraction::{ExtractionDiff, TextUnit};
