//! Structured transcript input: role/content records decoded from JSON.
//!
//! Accepted shapes:
//! ```json
//! [
//!   { "role": "human", "content": "..." },
//!   { "role": "bot",   "content": ["first piece", { "type": "text", "text": "second" }] }
//! ]
//! ```
//! or the same list wrapped as `{ "messages": [...] }`.

use serde::Deserialize;
use serde_json::Value;

use super::roles::Role;
use super::session::Turn;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StructuredTranscript {
    Records(Vec<Record>),
    Wrapped { messages: Vec<Record> },
}

#[derive(Debug, Deserialize)]
struct Record {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Content {
    Text(String),
    Pieces(Vec<Value>),
}

impl Content {
    fn into_text(self) -> String {
        match self {
            Content::Text(text) => text,
            Content::Pieces(pieces) => pieces
                .iter()
                .filter_map(|piece| match piece {
                    Value::String(s) => Some(s.as_str()),
                    Value::Object(_) => piece.get("text").and_then(|t| t.as_str()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Try the structured path.
///
/// `None` when the input is not a well-formed, non-empty record collection;
/// the caller then falls back to plain-text segmentation. Well-formed records
/// whose contents are all blank yield `Some` with no turns, so the session is
/// rejected instead of scoring the JSON as prose.
pub fn parse_structured(input: &str) -> Option<Vec<Turn>> {
    let trimmed = input.trim_start();
    if !(trimmed.starts_with('[') || trimmed.starts_with('{')) {
        return None;
    }

    let transcript: StructuredTranscript = serde_json::from_str(input).ok()?;
    let records = match transcript {
        StructuredTranscript::Records(records) => records,
        StructuredTranscript::Wrapped { messages } => messages,
    };
    if records.is_empty() {
        return None;
    }

    let turns = records
        .into_iter()
        .filter_map(|record| {
            let role = Role::from_label(record.role.as_deref().unwrap_or("user"));
            let content = record.content.map(Content::into_text).unwrap_or_default();
            Turn::new(role, &content)
        })
        .collect();

    Some(turns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_messages_normalize_roles() {
        let json = r#"{"messages":[{"role":"human","content":"hi"},{"role":"bot","content":"hello there"}]}"#;
        let turns = parse_structured(json).unwrap();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role(), Role::User);
        assert_eq!(turns[1].role(), Role::Assistant);
        assert_eq!(turns[1].word_count(), 2);
    }

    #[test]
    fn test_bare_list() {
        let json = r#"[{"role":"user","content":"a"},{"role":"assistant","content":"b"}]"#;
        let turns = parse_structured(json).unwrap();
        assert_eq!(turns.len(), 2);
    }

    #[test]
    fn test_piece_list_joined_with_spaces() {
        let json = r#"[{"role":"assistant","content":["first", {"type":"text","text":"second"}, 42]}]"#;
        let turns = parse_structured(json).unwrap();
        assert_eq!(turns[0].content(), "first second");
    }

    #[test]
    fn test_missing_role_defaults_to_user() {
        let json = r#"[{"content":"no role here"},{"role":null,"content":"nor here"}]"#;
        let turns = parse_structured(json).unwrap();
        assert!(turns.iter().all(|t| t.role() == Role::User));
    }

    #[test]
    fn test_empty_contents_are_dropped() {
        let json = r#"[{"role":"user","content":"  "},{"role":"ai","content":"ok"},{"role":"user"}]"#;
        let turns = parse_structured(json).unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].role(), Role::Assistant);
    }

    #[test]
    fn test_falls_through() {
        assert!(parse_structured("User: hi").is_none());
        assert!(parse_structured("[not json").is_none());
        assert!(parse_structured("[]").is_none());
        assert!(parse_structured(r#"{"messages": []}"#).is_none());
        assert!(parse_structured(r#"{"turns": [{"role":"user","content":"x"}]}"#).is_none());
    }

    #[test]
    fn test_blank_records_yield_no_turns() {
        let turns = parse_structured(r#"[{"role":"user","content":"  "}]"#).unwrap();
        assert!(turns.is_empty());
        let turns = parse_structured(r#"{"messages":[{"role":"ai"},{"content":[]}]}"#).unwrap();
        assert!(turns.is_empty());
    }
}
