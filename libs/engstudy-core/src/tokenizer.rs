//! Word extraction from pasted text.
//!
//! Splits on whitespace and common punctuation, lower-cases, and drops
//! tokens of two characters or fewer as well as purely numeric ones.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{normalize_text, Item};

const SEPARATORS: &[char] = &[',', '.', '!', '?', ';', ':', '(', ')', '"', '\''];
const SENTENCE_ENDS: &[char] = &['.', '!', '?', '\n'];
const MIN_TOKEN_CHARS: usize = 3;

/// What each extracted item keeps as its context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextMode {
    /// The whole pasted text.
    #[default]
    FullText,
    /// Only the sentence in which the word first appears.
    Sentence,
}

/// Extraction options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    #[serde(default)]
    pub context: ContextMode,
}

/// Extract deduplicated items from `text`, each carrying the full text as context.
pub fn extract(text: &str, now: DateTime<Utc>) -> Vec<Item> {
    extract_with(text, now, &ExtractOptions::default())
}

/// Extract deduplicated items from `text`.
pub fn extract_with(text: &str, now: DateTime<Utc>, options: &ExtractOptions) -> Vec<Item> {
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for sentence in sentences(text) {
        let context = match options.context {
            ContextMode::FullText => text,
            ContextMode::Sentence => sentence.trim(),
        };
        for token in tokens(sentence) {
            if seen.insert(token.clone()) {
                items.push(Item::new(&token, context, now));
            }
        }
    }

    debug!(count = items.len(), "extracted words");
    items
}

/// Normalized tokens worth a card, in order of appearance (not deduplicated).
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .map(normalize_text)
        .filter(|token| is_candidate(token))
}

fn is_candidate(token: &str) -> bool {
    token.chars().count() >= MIN_TOKEN_CHARS && !token.chars().all(|c| c.is_ascii_digit())
}

/// Split into sentences, keeping each terminator with its sentence.
fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for (idx, c) in text.char_indices() {
        if SENTENCE_ENDS.contains(&c) {
            let end = idx + c.len_utf8();
            out.push(&text[start..end]);
            start = end;
        }
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    fn texts(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.text()).collect()
    }

    #[test]
    fn extracts_pangram() {
        let input = "The Quick fox jumps over the lazy dog.";
        let items = extract(input, now());
        assert_eq!(
            texts(&items),
            vec!["the", "quick", "fox", "jumps", "over", "lazy", "dog"]
        );
        for item in &items {
            assert_eq!(item.context(), input);
            assert_eq!(item.created_at(), now());
            assert_eq!(item.next_review_at(), now());
        }
    }

    #[test]
    fn drops_short_and_numeric_tokens() {
        let items = extract("I am at 2024 with 42 cats, ok? 3rd place", now());
        assert_eq!(texts(&items), vec!["with", "cats", "3rd", "place"]);
    }

    #[test]
    fn splits_on_punctuation() {
        let items = extract("hello,world;(again) \"quoted\" it's", now());
        assert_eq!(texts(&items), vec!["hello", "world", "again", "quoted"]);
    }

    #[test]
    fn dedupes_case_insensitively() {
        let items = extract("Apple apple APPLE banana", now());
        assert_eq!(texts(&items), vec!["apple", "banana"]);
    }

    #[test]
    fn ids_are_unique() {
        let items = extract("one two three four five", now());
        let ids: HashSet<_> = items.iter().map(|i| i.id()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert!(extract("", now()).is_empty());
        assert!(extract("   \n\t ", now()).is_empty());
        assert!(extract("a an 12 ...", now()).is_empty());
    }

    #[test]
    fn counts_characters_not_bytes() {
        let items = extract("日本 café", now());
        assert_eq!(texts(&items), vec!["café"]);
    }

    #[test]
    fn sentence_context_uses_first_occurrence() {
        let input = "The cat sleeps. A dog barks!\nThe cat wakes";
        let options = ExtractOptions {
            context: ContextMode::Sentence,
        };
        let items = extract_with(input, now(), &options);
        let contexts: Vec<(&str, &str)> = items.iter().map(|i| (i.text(), i.context())).collect();
        assert_eq!(
            contexts,
            vec![
                ("the", "The cat sleeps."),
                ("cat", "The cat sleeps."),
                ("sleeps", "The cat sleeps."),
                ("dog", "A dog barks!"),
                ("barks", "A dog barks!"),
                ("wakes", "The cat wakes"),
            ]
        );
    }

    #[test]
    fn sentence_mode_keeps_same_words() {
        let input = "Rust is fast. Rust is safe? Yes: really safe";
        let full = extract(input, now());
        let per_sentence = extract_with(
            input,
            now(),
            &ExtractOptions {
                context: ContextMode::Sentence,
            },
        );
        assert_eq!(texts(&full), texts(&per_sentence));
    }
}
