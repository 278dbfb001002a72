//! Test fixtures and factory functions for creating test data.

use serde_json::json;
use uuid::Uuid;

/// Create a learner register request body.
pub fn register_request(username: Option<&str>) -> serde_json::Value {
    match username {
        Some(n) => json!({ "username": n }),
        None => json!({}),
    }
}

/// Create a study context request body.
pub fn context_request(level: i32, category: &str) -> serde_json::Value {
    json!({ "level": level, "category": category })
}

/// Create an answer submission body.
pub fn answer_request(word_id: i64, chosen: &str) -> serde_json::Value {
    json!({ "word_id": word_id, "chosen": chosen })
}

/// Create a skip request body.
pub fn skip_request(word_id: i64) -> serde_json::Value {
    json!({ "word_id": word_id })
}

/// Create an add-word request body with explicit placement.
pub fn add_word_request(
    source_text: &str,
    translation: &str,
    level: Option<i32>,
    category: Option<&str>,
) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert("source_text".to_string(), json!(source_text));
    obj.insert("translation".to_string(), json!(translation));
    if let Some(l) = level {
        obj.insert("level".to_string(), json!(l));
    }
    if let Some(c) = category {
        obj.insert("category".to_string(), json!(c));
    }
    serde_json::Value::Object(obj)
}

/// Generate a unique word text to avoid collisions between test runs.
pub fn unique_word(prefix: &str) -> String {
    format!("{}_{}", prefix, &Uuid::new_v4().to_string()[..8])
}
