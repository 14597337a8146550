//! Test fixtures and factory functions for request bodies.

use serde_json::{json, Value};
use uuid::Uuid;

/// Sample text with a repeated word and two three-letter words.
pub const PANGRAM: &str = "The Quick fox jumps over the lazy dog.";

/// Words extracted from `PANGRAM`, in order.
pub const PANGRAM_WORDS: [&str; 7] = ["the", "quick", "fox", "jumps", "over", "lazy", "dog"];

pub fn extract_body(text: &str) -> Value {
    json!({ "text": text })
}

pub fn extract_body_with_context(text: &str, context: &str) -> Value {
    json!({ "text": text, "context": context })
}

pub fn review_body(item_id: Uuid, rating: &str) -> Value {
    json!({ "item_id": item_id, "rating": rating })
}

/// Text with `n` distinct words, each long enough to become a card.
pub fn distinct_words(n: usize) -> String {
    (0..n)
        .map(|i| format!("word{}", char::from(b'a' + (i % 26) as u8)).repeat(1 + i / 26))
        .collect::<Vec<_>>()
        .join(" ")
}
