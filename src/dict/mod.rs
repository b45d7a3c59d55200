pub mod suggestions;

use crate::config::{CheckerOptions, SpellParam};
use crate::error::CheckError;
use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set, Streamer};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const MAX_SUGGESTIONS: usize = 5;

/// Capability surface of the spelling engine consumed by checkers.
///
/// The engine's internal dictionary algorithms are not this crate's concern;
/// checkers only rely on these three operations.
pub trait SpellEngine {
    fn spell(&self, word: &str) -> bool;

    /// Candidate corrections ranked by the engine's own relevance order.
    /// Callers must not re-sort the returned list.
    fn suggest(&self, word: &str) -> Vec<String>;

    /// Register `word` as always correct for the remainder of the run.
    /// Adding the same word twice has no further observable effect.
    fn add(&mut self, word: &str);
}

/// Word-set spelling engine backed by an FST built from a `.dic` file, with
/// a mutable overlay for words added during the run.
#[derive(Debug)]
pub struct FstEngine {
    set: Set<Vec<u8>>,
    additions: HashSet<String>,
}

impl FstEngine {
    /// Load the base dictionary and affix pair. Both files must exist; the
    /// affix rules themselves belong to the external engine format and are
    /// not interpreted here.
    pub fn load(dictionary_path: &Path, affix_path: &Path) -> Result<Self, CheckError> {
        for path in [dictionary_path, affix_path] {
            if !path.is_file() {
                return Err(CheckError::FileNotFound(path.to_path_buf()));
            }
        }

        let contents = fs::read_to_string(dictionary_path).map_err(|source| CheckError::Io {
            path: dictionary_path.to_path_buf(),
            source,
        })?;

        let mut words = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            // .dic files open with an approximate entry count
            if index == 0 && line.chars().all(|ch| ch.is_ascii_digit()) {
                continue;
            }
            let word = line.split('/').next().unwrap_or(line);
            words.push(word.to_lowercase());
        }
        words.sort();
        words.dedup();

        let set = Set::from_iter(words).map_err(|source| CheckError::Dictionary {
            path: dictionary_path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            set,
            additions: HashSet::new(),
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes())
    }

    /// All dictionary words starting with `prefix`, in lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        let mut stream = self
            .set
            .search(Str::new(prefix).starts_with())
            .into_stream();

        while let Some(key) = stream.next() {
            if let Ok(word) = String::from_utf8(key.to_vec()) {
                results.push(word);
            }
        }

        results
    }
}

impl SpellEngine for FstEngine {
    fn spell(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.additions.contains(&lower) || self.contains(&lower)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        suggestions::generate(&word.to_lowercase(), self, MAX_SUGGESTIONS)
    }

    fn add(&mut self, word: &str) {
        self.additions.insert(word.to_lowercase());
    }
}

/// Load and prepare the spelling engine described by the checker options.
///
/// Fails before any text is examined when the dictionary or affix key is
/// missing, or when either configured file does not exist on disk.
pub fn load(options: &CheckerOptions) -> Result<FstEngine, CheckError> {
    let dictionary_path = options.require_param(SpellParam::DictionaryFile)?;
    let affix_path = options.require_param(SpellParam::DictionaryAffixFile)?;
    let mut engine = FstEngine::load(Path::new(dictionary_path), Path::new(affix_path))?;

    if let Some(additions_path) = options.param(SpellParam::DictionaryAdditions) {
        let words = load_additions(Path::new(additions_path));
        apply_additions(&mut engine, &words);
    }

    Ok(engine)
}

/// Read the additions word list, one token per line. A missing, unreadable or
/// empty file yields no additions; unlike the base dictionary pair, the file
/// is not required to exist.
pub fn load_additions(path: &Path) -> Vec<String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return Vec::new(),
    };

    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Register every addition word with the engine.
pub fn apply_additions(engine: &mut impl SpellEngine, words: &[String]) {
    for word in words {
        engine.add(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::params;
    use std::collections::HashSet as StdHashSet;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_dictionary(dir: &TempDir, words: &[&str]) -> (std::path::PathBuf, std::path::PathBuf) {
        let dic = dir.path().join("en_US.dic");
        let aff = dir.path().join("en_US.aff");
        let mut file = fs::File::create(&dic).unwrap();
        writeln!(file, "{}", words.len()).unwrap();
        for word in words {
            writeln!(file, "{}", word).unwrap();
        }
        fs::write(&aff, "SET UTF-8\n").unwrap();
        (dic, aff)
    }

    #[test]
    fn loads_dic_file_skipping_count_line_and_flags() {
        let dir = TempDir::new().unwrap();
        let (dic, aff) = write_dictionary(&dir, &["errors", "source/NS", "string"]);

        let engine = FstEngine::load(&dic, &aff).unwrap();
        assert!(engine.spell("errors"));
        assert!(engine.spell("source"));
        assert!(engine.spell("String"));
        assert!(!engine.spell("strng"));
        assert!(!engine.spell("3"));
    }

    #[test]
    fn missing_dictionary_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let (_, aff) = write_dictionary(&dir, &["errors"]);

        let err = FstEngine::load(&dir.path().join("absent.dic"), &aff).unwrap_err();
        assert!(matches!(err, CheckError::FileNotFound(_)));
    }

    #[test]
    fn missing_affix_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let (dic, _) = write_dictionary(&dir, &["errors"]);

        let err = FstEngine::load(&dic, &dir.path().join("absent.aff")).unwrap_err();
        assert!(matches!(err, CheckError::FileNotFound(_)));
    }

    #[test]
    fn load_requires_both_path_options() {
        let dir = TempDir::new().unwrap();
        let (dic, _) = write_dictionary(&dir, &["errors"]);

        let options = crate::CheckerOptions::new(
            Vec::new(),
            StdHashSet::new(),
            params(&[(SpellParam::DictionaryFile, dic.to_str().unwrap())]),
        );
        let err = load(&options).unwrap_err();
        assert!(
            matches!(err, CheckError::MissingOption(key) if key == "spell.dictionary-affix-file")
        );
    }

    #[test]
    fn additions_survive_and_are_idempotent() {
        let dir = TempDir::new().unwrap();
        let (dic, aff) = write_dictionary(&dir, &["errors"]);
        let mut engine = FstEngine::load(&dic, &aff).unwrap();

        assert!(!engine.spell("strng"));
        engine.add("strng");
        engine.add("strng");
        assert!(engine.spell("strng"));
        assert_eq!(engine.additions.len(), 1);
    }

    #[test]
    fn missing_additions_file_yields_no_words() {
        assert!(load_additions(Path::new("no/such/additions.txt")).is_empty());
    }

    #[test]
    fn additions_file_skips_blank_and_comment_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("additions.txt");
        fs::write(&path, "strng\n\n# product names\nerors\n").unwrap();

        assert_eq!(load_additions(&path), vec!["strng", "erors"]);
    }

    #[test]
    fn load_applies_configured_additions() {
        let dir = TempDir::new().unwrap();
        let (dic, aff) = write_dictionary(&dir, &["errors"]);
        let additions = dir.path().join("additions.txt");
        fs::write(&additions, "strng\n").unwrap();

        let options = crate::CheckerOptions::new(
            Vec::new(),
            StdHashSet::new(),
            params(&[
                (SpellParam::DictionaryFile, dic.to_str().unwrap()),
                (SpellParam::DictionaryAffixFile, aff.to_str().unwrap()),
                (SpellParam::DictionaryAdditions, additions.to_str().unwrap()),
            ]),
        );
        let engine = load(&options).unwrap();
        assert!(engine.spell("strng"));
        assert!(engine.spell("errors"));
    }

    #[test]
    fn suggestions_come_back_ranked() {
        let dir = TempDir::new().unwrap();
        let (dic, aff) = write_dictionary(&dir, &["errors", "string", "strong"]);
        let engine = FstEngine::load(&dic, &aff).unwrap();

        assert_eq!(engine.suggest("strng"), vec!["string", "strong"]);
        assert_eq!(engine.suggest("erors"), vec!["errors"]);
    }
}
