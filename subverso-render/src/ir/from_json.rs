//! Converts decoded JSON values into the canonical highlighted tree.
//!
//! The wire format is a tagged union keyed by constructor name, with several
//! redundantly wrapped spellings for the same constructor (a token may arrive
//! as `{"token": {...}}` or `{"token": {"tok": {...}}}`, text as a bare string
//! or `{"str": "..."}`, sequences as an array or `{"highlights": [...]}`).
//! All of that variance is resolved here, and only here: downstream renderers
//! see exactly one shape per constructor.
//!
//! Conversion is total. A shape none of the constructors claim becomes
//! [`HighlightedNode::Empty`], never an error, so format evolution does not
//! break documents that were highlighted with an older toolchain.

use serde_json::Value;

use super::nodes::{
    Diagnostic, Goal, HighlightedNode, Hypothesis, MessageContents, Point, Severity, Span, Tactics,
    Token, TokenKind, Trace, DEFAULT_GOAL_PREFIX,
};

/// Converts a JSON value to a canonical highlighted node.
///
/// Constructor precedence is fixed: token, text, seq, span, tactics, point,
/// unparsed, then the legacy `{kind, content}` token shape.
pub fn node_from_value(value: &Value) -> HighlightedNode {
    match value {
        Value::Null => HighlightedNode::Empty,
        Value::String(s) => HighlightedNode::Text(s.clone()),
        Value::Array(items) => HighlightedNode::Seq(items.iter().map(node_from_value).collect()),
        Value::Object(map) => {
            if let Some(token) = map.get("token") {
                // Unwrap the `{"tok": {...}}` spelling.
                let token = token.get("tok").unwrap_or(token);
                HighlightedNode::Token(token_from_value(token))
            } else if let Some(text) = map.get("text") {
                // Unwrap the `{"str": "..."}` spelling.
                let text = text.get("str").unwrap_or(text);
                HighlightedNode::Text(string_from_value(text))
            } else if let Some(seq) = map.get("seq") {
                // Unwrap the `{"highlights": [...]}` spelling.
                let seq = seq.get("highlights").unwrap_or(seq);
                match seq.as_array() {
                    Some(items) => {
                        HighlightedNode::Seq(items.iter().map(node_from_value).collect())
                    }
                    None => HighlightedNode::Empty,
                }
            } else if let Some(span) = map.get("span") {
                span_from_value(span)
            } else if let Some(tactics) = map.get("tactics") {
                tactics_from_value(tactics)
            } else if let Some(point) = map.get("point") {
                point_from_value(point)
            } else if let Some(unparsed) = map.get("unparsed") {
                HighlightedNode::Unparsed(string_from_value(unparsed))
            } else if map.contains_key("kind") && map.contains_key("content") {
                // Legacy shape: a bare token object without the constructor tag.
                HighlightedNode::Token(token_from_value(value))
            } else {
                HighlightedNode::Empty
            }
        }
        // Scalars other than strings carry no highlighted content.
        _ => HighlightedNode::Empty,
    }
}

fn token_from_value(value: &Value) -> Token {
    Token {
        kind: kind_from_value(value.get("kind").unwrap_or(&Value::Null)),
        content: string_from_value(value.get("content").unwrap_or(&Value::Null)),
    }
}

/// Converts a token kind value, accepting both the tagged-object spelling
/// (`{"keyword": {...}}`) and the bare string spelling (`"keyword"`).
fn kind_from_value(value: &Value) -> TokenKind {
    match value {
        Value::String(name) => kind_from_name(name, &Value::Null),
        Value::Object(map) => {
            // The constructor name is the single meaningful key; its payload
            // carries the optional hover fields.
            for (name, payload) in map {
                return kind_from_name(name, payload);
            }
            TokenKind::Unknown
        }
        _ => TokenKind::Unknown,
    }
}

fn kind_from_name(name: &str, payload: &Value) -> TokenKind {
    match name {
        "keyword" => TokenKind::Keyword {
            docs: optional_string(payload.get("docs")),
        },
        "const" => TokenKind::Const {
            name: payload.get("name").and_then(qualified_name),
            signature: optional_string(payload.get("signature")),
            is_def: payload
                .get("isDef")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        },
        "anonCtor" => TokenKind::AnonCtor,
        "var" => TokenKind::Var {
            ty: optional_string(payload.get("type")),
        },
        "str" => TokenKind::Str,
        "option" => TokenKind::Option,
        "docComment" => TokenKind::DocComment,
        "sort" => TokenKind::Sort,
        "levelVar" => TokenKind::LevelVar,
        "levelOp" => TokenKind::LevelOp,
        "levelConst" => TokenKind::LevelConst,
        "moduleName" => TokenKind::ModuleName,
        "withType" => TokenKind::WithType,
        _ => TokenKind::Unknown,
    }
}

/// Joins a qualified name serialized as a component array (`["Nat", "add"]`
/// becomes `Nat.add`). Bare strings pass through.
fn qualified_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(components) => {
            let parts: Vec<String> = components
                .iter()
                .map(|c| match c {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("."))
            }
        }
        _ => None,
    }
}

fn span_from_value(value: &Value) -> HighlightedNode {
    let diagnostics = value
        .get("info")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(diagnostic_from_value).collect())
        .unwrap_or_default();
    let content = node_from_value(value.get("content").unwrap_or(&Value::Null));

    HighlightedNode::Span(Span {
        diagnostics,
        content: Box::new(content),
    })
}

/// Converts one span info entry. Entries arrive either as `[kind, message]`
/// pairs or as objects keyed `fst`/`snd` or `kind`/`message`/`contents`.
fn diagnostic_from_value(value: &Value) -> Option<Diagnostic> {
    let (severity, message) = match value {
        Value::Array(pair) => (pair.first(), pair.get(1)),
        Value::Object(map) => (
            map.get("kind").or_else(|| map.get("fst")),
            map.get("snd")
                .or_else(|| map.get("message"))
                .or_else(|| map.get("contents")),
        ),
        // A bare severity string carries no message.
        Value::String(_) => (Some(value), None),
        _ => return None,
    };

    Some(Diagnostic {
        severity: severity.map(severity_from_value).unwrap_or(Severity::Info),
        message: message.map(message_from_value).unwrap_or(MessageContents::Empty),
    })
}

/// Unknown severities decode as the least severe, so a new wire severity
/// degrades to a neutral marker instead of an error.
fn severity_from_value(value: &Value) -> Severity {
    match value.as_str() {
        Some("error") => Severity::Error,
        Some("warning") => Severity::Warning,
        _ => Severity::Info,
    }
}

fn tactics_from_value(value: &Value) -> HighlightedNode {
    let goals = value
        .get("info")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(goal_from_value).collect())
        .unwrap_or_default();
    let content = node_from_value(value.get("content").unwrap_or(&Value::Null));

    HighlightedNode::Tactics(Tactics {
        goals,
        start_pos: value.get("startPos").and_then(Value::as_u64).unwrap_or(0),
        end_pos: value.get("endPos").and_then(Value::as_u64).unwrap_or(0),
        content: Box::new(content),
    })
}

fn point_from_value(value: &Value) -> HighlightedNode {
    HighlightedNode::Point(Point {
        severity: severity_from_value(value.get("kind").unwrap_or(&Value::Null)),
        message: value
            .get("info")
            .map(message_from_value)
            .unwrap_or(MessageContents::Empty),
    })
}

/// Converts a diagnostic message value to canonical message contents.
pub fn message_from_value(value: &Value) -> MessageContents {
    match value {
        Value::Null => MessageContents::Empty,
        Value::String(s) => MessageContents::Text(s.clone()),
        Value::Array(parts) => {
            MessageContents::Append(parts.iter().map(message_from_value).collect())
        }
        Value::Object(map) => {
            if let Some(text) = map.get("text") {
                MessageContents::Text(string_from_value(text))
            } else if let Some(parts) = map.get("append") {
                match parts.as_array() {
                    Some(items) => {
                        MessageContents::Append(items.iter().map(message_from_value).collect())
                    }
                    None => MessageContents::Empty,
                }
            } else if let Some(goal) = map.get("goal") {
                MessageContents::Goal(Box::new(goal_from_value(goal)))
            } else if let Some(term) = map.get("term") {
                MessageContents::Term(Box::new(node_from_value(term)))
            } else if let Some(trace) = map.get("trace") {
                MessageContents::Trace(Trace {
                    label: Box::new(
                        trace.get("msg").map(message_from_value).unwrap_or(MessageContents::Empty),
                    ),
                    children: trace
                        .get("children")
                        .and_then(Value::as_array)
                        .map(|items| items.iter().map(message_from_value).collect())
                        .unwrap_or_default(),
                    // Traces default to collapsed: children only show when the
                    // wire format explicitly opens them.
                    collapsed: trace
                        .get("collapsed")
                        .and_then(Value::as_bool)
                        .unwrap_or(true),
                })
            } else {
                MessageContents::Empty
            }
        }
        _ => MessageContents::Empty,
    }
}

/// Converts a goal value. Missing fields take their defaults (`⊢ ` prefix,
/// no name, no hypotheses) rather than failing.
pub fn goal_from_value(value: &Value) -> Goal {
    Goal {
        name: optional_string(value.get("name")),
        prefix: value
            .get("goalPrefix")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_GOAL_PREFIX)
            .to_string(),
        hypotheses: value
            .get("hypotheses")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(hypothesis_from_value).collect())
            .unwrap_or_default(),
        conclusion: node_from_value(value.get("conclusion").unwrap_or(&Value::Null)),
    }
}

fn hypothesis_from_value(value: &Value) -> Hypothesis {
    let names = value
        .get("names")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|name| match name {
                    // Hypothesis names are tokens, but a bare string works too.
                    Value::String(s) => Token {
                        kind: TokenKind::Var { ty: None },
                        content: s.clone(),
                    },
                    other => token_from_value(other.get("tok").unwrap_or(other)),
                })
                .collect()
        })
        .unwrap_or_default();

    Hypothesis {
        names,
        type_and_val: node_from_value(value.get("typeAndVal").unwrap_or(&Value::Null)),
    }
}

fn optional_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

fn string_from_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
