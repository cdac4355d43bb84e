//! Test fixtures and factory functions for creating test data.

use serde_json::json;
use uuid::Uuid;

/// Two letter words with definitions.
pub const TWO_LETTER_WORDS: &str = "AA a lava\nAB a muscle";

/// Generate pasted list text with a specified number of words.
pub fn sample_words_text(num_words: usize, with_definitions: bool) -> String {
    (0..num_words)
        .map(|i| {
            if with_definitions {
                format!("word{} definition number {}", i + 1, i + 1)
            } else {
                format!("word{}", i + 1)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a list request body.
pub fn list_request(name: &str, words_text: &str) -> serde_json::Value {
    json!({ "name": name, "words_text": words_text })
}

/// Create a register request body.
pub fn register_request(name: &str) -> serde_json::Value {
    json!({ "name": name })
}

/// Create a submit request body.
pub fn submit_request(input: &str) -> serde_json::Value {
    json!({ "input": input })
}

/// Generate a unique list name to avoid collisions.
pub fn unique_list_name(prefix: &str) -> String {
    format!("{}_{}", prefix, &Uuid::new_v4().to_string()[..8])
}
