//! Agent reply shape and normalization to plain text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys an answer may hide under in a structured reply, in priority order.
/// Which one a backend uses varies by version and configuration.
const ANSWER_KEYS: [&str; 4] = ["output", "result", "answer", "text"];

/// Reply produced by one agent invocation.
///
/// Agent backends disagree on their return shape: some hand back plain
/// text, others a mapping that carries the answer under one of several
/// keys. Both shapes are modelled explicitly; [`AgentReply::into_text`]
/// collapses either into answer text and never fails on shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgentReply {
    /// Plain text answer.
    Text(String),

    /// Structured answer mapping.
    Structured(Map<String, Value>),
}

impl AgentReply {
    /// Create a plain text reply.
    pub fn text(content: impl Into<String>) -> Self {
        AgentReply::Text(content.into())
    }

    /// Fold an arbitrary JSON value into one of the two reply shapes.
    ///
    /// Strings and objects map directly; anything else is rendered to text.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => AgentReply::Text(s),
            Value::Object(map) => AgentReply::Structured(map),
            other => AgentReply::Text(render(&other)),
        }
    }

    /// Collapse the reply into answer text.
    ///
    /// A structured reply is probed for the known answer keys in priority
    /// order; the first non-null value wins. String values pass through
    /// verbatim, anything else is JSON-rendered. If no known key is present
    /// the whole mapping is rendered, so some answer text always comes back.
    pub fn into_text(self) -> String {
        match self {
            AgentReply::Text(s) => s,
            AgentReply::Structured(map) => {
                for key in ANSWER_KEYS {
                    if let Some(value) = map.get(key) {
                        if !value.is_null() {
                            return render(value);
                        }
                    }
                }
                render(&Value::Object(map))
            }
        }
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn structured(value: Value) -> AgentReply {
        AgentReply::from_value(value)
    }

    #[test]
    fn test_plain_text_passes_through() {
        let reply = AgentReply::text("42 rows");
        assert_eq!(reply.into_text(), "42 rows");
    }

    #[test]
    fn test_output_key_wins() {
        let reply = structured(json!({"output": "the answer", "text": "ignored"}));
        assert_eq!(reply.into_text(), "the answer");
    }

    #[test]
    fn test_key_priority_order() {
        let reply = structured(json!({"text": "d", "answer": "c", "result": "b"}));
        assert_eq!(reply.into_text(), "b");

        let reply = structured(json!({"text": "d", "answer": "c"}));
        assert_eq!(reply.into_text(), "c");

        let reply = structured(json!({"text": "d"}));
        assert_eq!(reply.into_text(), "d");
    }

    #[test]
    fn test_null_answer_is_skipped() {
        let reply = structured(json!({"output": null, "result": "fallback"}));
        assert_eq!(reply.into_text(), "fallback");
    }

    #[test]
    fn test_non_string_answer_is_rendered() {
        let reply = structured(json!({"output": 17}));
        assert_eq!(reply.into_text(), "17");

        let reply = structured(json!({"output": {"mean": 3.5}}));
        assert_eq!(reply.into_text(), r#"{"mean":3.5}"#);
    }

    #[test]
    fn test_unknown_shape_renders_whole_mapping() {
        let reply = structured(json!({"payload": "x"}));
        assert_eq!(reply.into_text(), r#"{"payload":"x"}"#);
    }

    #[test]
    fn test_from_value_scalars_render_to_text() {
        assert_eq!(AgentReply::from_value(json!(true)).into_text(), "true");
        assert_eq!(AgentReply::from_value(json!([1, 2])).into_text(), "[1,2]");
        assert_eq!(
            AgentReply::from_value(json!("hello")),
            AgentReply::text("hello")
        );
    }

    #[test]
    fn test_untagged_deserialization() {
        let reply: AgentReply = serde_json::from_str(r#""plain""#).unwrap();
        assert_eq!(reply, AgentReply::text("plain"));

        let reply: AgentReply = serde_json::from_str(r#"{"output": "o"}"#).unwrap();
        assert_eq!(reply.into_text(), "o");
    }
}
