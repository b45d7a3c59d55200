use crate::checks::CheckerKind;
use crate::error::CheckError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Configuration keys consumed by the spelling checker.
///
/// Option-map keys are namespaced per checker kind so future checker variants
/// can define their own key sets without collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellParam {
    /// Path to the base dictionary file (required).
    DictionaryFile,
    /// Path to the dictionary affix rules file (required).
    DictionaryAffixFile,
    /// Path to a newline-delimited additions word list (optional).
    DictionaryAdditions,
}

impl SpellParam {
    pub fn key(&self) -> &'static str {
        match self {
            SpellParam::DictionaryFile => "spell.dictionary-file",
            SpellParam::DictionaryAffixFile => "spell.dictionary-affix-file",
            SpellParam::DictionaryAdditions => "spell.dictionary-additions",
        }
    }
}

/// Immutable configuration shared by every checker in a run.
///
/// Holds the placeholder-exclusion patterns, the set of checker kinds whose
/// failures escalate to hard failures, and a string-keyed option map for
/// checker-specific settings such as dictionary paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckerOptions {
    #[serde(default)]
    placeholder_patterns: Vec<String>,
    #[serde(default)]
    hard_fail: HashSet<CheckerKind>,
    #[serde(default)]
    params: HashMap<String, String>,
}

impl CheckerOptions {
    pub fn new(
        placeholder_patterns: Vec<String>,
        hard_fail: HashSet<CheckerKind>,
        params: HashMap<String, String>,
    ) -> Self {
        Self {
            placeholder_patterns,
            hard_fail,
            params,
        }
    }

    /// Load options from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, CheckError> {
        let contents = fs::read_to_string(path).map_err(|source| CheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| CheckError::ParseOptions {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn placeholder_patterns(&self) -> &[String] {
        &self.placeholder_patterns
    }

    pub fn is_hard_fail(&self, kind: CheckerKind) -> bool {
        self.hard_fail.contains(&kind)
    }

    pub fn param(&self, param: SpellParam) -> Option<&str> {
        self.params.get(param.key()).map(String::as_str)
    }

    /// Fetch a required option, failing with a configuration error naming the
    /// missing key.
    pub fn require_param(&self, param: SpellParam) -> Result<&str, CheckError> {
        self.param(param)
            .ok_or_else(|| CheckError::MissingOption(param.key().to_string()))
    }
}

/// Convenience builder for assembling the option map from typed keys.
pub fn params(entries: &[(SpellParam, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(param, value)| (param.key().to_string(), value.to_string()))
        .collect()
}
