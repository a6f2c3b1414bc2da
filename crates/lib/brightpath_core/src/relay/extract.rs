//! Reply extraction from variably-shaped upstream bodies.
//!
//! Rules are tried in order and the first match wins:
//!
//! 1. non-empty `replies` array: each element's `text`, else `payload`
//! 2. `output.generic` array: the non-empty `text` fields, if any
//! 3. non-empty `messages` array: each element's `text`
//! 4. a bare non-blank string (a whitespace-only one falls through to 5)
//! 5. anything else, serialized back to JSON text
//!
//! Multi-part replies are joined with newlines.

use serde_json::Value;

/// Parses an upstream body, falling back to the raw text as a JSON string.
pub fn parse_body(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

/// Extracts displayable reply text. Returns `None` only for an absent body
/// (`null` or an empty string).
pub fn extract_reply(parsed: &Value) -> Option<String> {
    if is_absent(parsed) {
        return None;
    }

    if let Some(replies) = non_empty_array(parsed, "replies") {
        return Some(join_lines(replies.iter().map(reply_part)));
    }

    if let Some(generic) = parsed.pointer("/output/generic").and_then(Value::as_array) {
        let texts: Vec<&str> = generic
            .iter()
            .filter_map(|g| g.get("text").and_then(Value::as_str))
            .filter(|t| !t.is_empty())
            .collect();
        if !texts.is_empty() {
            return Some(texts.join("\n"));
        }
    }

    if let Some(messages) = non_empty_array(parsed, "messages") {
        return Some(join_lines(messages.iter().map(|m| {
            m.get("text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned()
        })));
    }

    if let Some(text) = parsed.as_str()
        && !text.trim().is_empty()
    {
        return Some(text.to_owned());
    }

    Some(parsed.to_string())
}

fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn non_empty_array<'a>(value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    value
        .get(key)
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
}

fn reply_part(item: &Value) -> String {
    if let Some(text) = item.get("text").and_then(Value::as_str)
        && !text.is_empty()
    {
        return text.to_owned();
    }
    match item.get("payload") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn join_lines(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn replies_prefer_text_then_payload() {
        let body = json!({
            "replies": [
                {"text": "first"},
                {"payload": "second"},
                {"payload": {"kind": "card"}},
                {}
            ]
        });
        assert_eq!(
            extract_reply(&body).as_deref(),
            Some("first\nsecond\n{\"kind\":\"card\"}\n")
        );
    }

    #[test]
    fn empty_replies_fall_through() {
        let body = json!({"replies": [], "messages": [{"text": "from messages"}]});
        assert_eq!(extract_reply(&body).as_deref(), Some("from messages"));
    }

    #[test]
    fn output_generic_joins_texts() {
        let body = json!({"output": {"generic": [{"text": "a"}, {"text": "b"}]}});
        assert_eq!(extract_reply(&body).as_deref(), Some("a\nb"));
    }

    #[test]
    fn output_generic_drops_empty_texts() {
        let body = json!({"output": {"generic": [{"text": ""}, {"image": "x"}, {"text": "kept"}]}});
        assert_eq!(extract_reply(&body).as_deref(), Some("kept"));
    }

    #[test]
    fn output_generic_without_text_falls_through() {
        let body = json!({
            "output": {"generic": [{"image": "x"}]},
            "messages": [{"text": "fallback"}]
        });
        assert_eq!(extract_reply(&body).as_deref(), Some("fallback"));
    }

    #[test]
    fn messages_use_empty_string_for_missing_text() {
        let body = json!({"messages": [{"text": "hi"}, {"type": "image"}, {"text": "bye"}]});
        assert_eq!(extract_reply(&body).as_deref(), Some("hi\n\nbye"));
    }

    #[test]
    fn bare_string_is_returned_unchanged() {
        let body = json!("just a plain reply");
        assert_eq!(extract_reply(&body).as_deref(), Some("just a plain reply"));
    }

    #[test]
    fn unrecognized_shape_is_serialized() {
        let body = json!({"foo": "bar"});
        assert_eq!(extract_reply(&body).as_deref(), Some(r#"{"foo":"bar"}"#));
    }

    #[test]
    fn scalars_are_serialized() {
        assert_eq!(extract_reply(&json!(42)).as_deref(), Some("42"));
        assert_eq!(extract_reply(&json!(false)).as_deref(), Some("false"));
    }

    #[test]
    fn absent_values_yield_none() {
        assert_eq!(extract_reply(&Value::Null), None);
        assert_eq!(extract_reply(&json!("")), None);
    }

    #[test]
    fn whitespace_string_is_serialized_rather_than_dropped() {
        let reply = extract_reply(&json!("  \n"));
        assert_eq!(reply.as_deref(), Some(r#""  \n""#));
    }

    #[test]
    fn parse_body_keeps_raw_text_on_failure() {
        assert_eq!(parse_body("<html>oops</html>"), json!("<html>oops</html>"));
        assert_eq!(parse_body(r#"{"a":1}"#), json!({"a": 1}));
        assert_eq!(parse_body(r#""quoted""#), json!("quoted"));
        assert_eq!(parse_body(""), json!(""));
    }
}
