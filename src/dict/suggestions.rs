use crate::dict::FstEngine;

/// Generate ranked correction candidates for a misspelled word.
///
/// Cheap prefix lookups run first; single-edit transformations and a wider
/// prefix sweep fill in the rest. Results are ordered best-first and the
/// order is part of the engine contract.
pub fn generate(word: &str, engine: &FstEngine, max_suggestions: usize) -> Vec<String> {
    let mut suggestions = Vec::new();

    // 1. Same three-letter prefix, close edit distance.
    if let Some(prefix) = word.get(..3) {
        let mut matches = engine.words_with_prefix(prefix);
        matches.sort_by_key(|candidate| edit_distance(word, candidate));
        for candidate in matches {
            if edit_distance(word, &candidate) <= 2 && !suggestions.contains(&candidate) {
                suggestions.push(candidate);
                if suggestions.len() >= max_suggestions {
                    return suggestions;
                }
            }
        }
    }

    // 2. Single-edit transformations that land on dictionary words.
    for candidate in transformations(word) {
        if engine.contains(&candidate) && !suggestions.contains(&candidate) {
            suggestions.push(candidate);
            if suggestions.len() >= max_suggestions {
                return suggestions;
            }
        }
    }

    // 3. Wider sweep with a two-letter prefix for words the narrow prefix missed.
    if let Some(prefix) = word.get(..2) {
        let mut matches = engine.words_with_prefix(prefix);
        matches.sort_by_key(|candidate| edit_distance(word, candidate));
        for candidate in matches {
            if edit_distance(word, &candidate) <= 3 && !suggestions.contains(&candidate) {
                suggestions.push(candidate);
                if suggestions.len() >= max_suggestions {
                    return suggestions;
                }
            }
        }
    }

    suggestions
}

/// Levenshtein distance over characters.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        current[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}

/// Deletions, adjacent transpositions and common single-letter substitutions.
fn transformations(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut results = Vec::new();

    for i in 0..chars.len() {
        let mut candidate = chars.clone();
        candidate.remove(i);
        results.push(candidate.iter().collect());
    }

    for i in 0..chars.len().saturating_sub(1) {
        let mut candidate = chars.clone();
        candidate.swap(i, i + 1);
        results.push(candidate.iter().collect());
    }

    const COMMON_SUBSTITUTIONS: [(char, char); 8] = [
        ('a', 'e'),
        ('e', 'i'),
        ('i', 'o'),
        ('o', 'u'),
        ('c', 'k'),
        ('f', 'v'),
        ('m', 'n'),
        ('s', 'z'),
    ];

    for (i, &ch) in chars.iter().enumerate() {
        for &(from, to) in &COMMON_SUBSTITUTIONS {
            if ch == from {
                let mut candidate = chars.clone();
                candidate[i] = to;
                results.push(candidate.iter().collect());
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_distance_basics() {
        assert_eq!(edit_distance("hello", "hello"), 0);
        assert_eq!(edit_distance("strng", "string"), 1);
        assert_eq!(edit_distance("erors", "errors"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn transformations_cover_deletion_and_transposition() {
        let candidates = transformations("hello");
        assert!(candidates.contains(&"hllo".to_string()));
        assert!(candidates.contains(&"ehllo".to_string()));
    }
}
