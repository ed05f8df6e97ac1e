//! Template interpolation for phrasings.
//!
//! Phrasings use `{{` / `}}` delimited actions. The supported actions are
//! field references into the variable map:
//!
//! - `{{ .Name }}` renders the variable `Name`
//! - `{{ .User.Name }}` walks into nested object values
//! - `{{ . }}` renders the whole variable map as JSON
//! - `{{ "text" }}` and ``{{ `text` }}`` render a string literal
//! - `{{/* note */}}` is a comment and renders nothing
//!
//! A `-` directly inside a delimiter followed (or preceded) by whitespace,
//! as in `{{- .Name -}}`, trims the whitespace of the adjacent text.
//! Execution is strict: referencing a variable that is absent is an error.
//!
//! This is a subset of Go's `text/template`. Conditionals (`if`, `with`),
//! `range`, pipelines, function calls and `$variables` are parse errors, so
//! a lookup returns such a phrasing raw. Rendering also differs: `{{ . }}`
//! prints JSON rather than `map[...]` and `null` prints nothing.

use crate::vars::{render_value, Vars};
use serde_json::Value;
use thiserror::Error;

/// Opening delimiter of an action
pub const LEFT_DELIM: &str = "{{";
/// Closing delimiter of an action
pub const RIGHT_DELIM: &str = "}}";

/// Errors raised while parsing or executing a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// An action was opened but never closed
    #[error("unclosed action starting at byte {offset}")]
    Unclosed {
        /// Byte offset of the opening delimiter
        offset: usize,
    },

    /// An action contains nothing
    #[error("missing value for action at byte {offset}")]
    EmptyAction {
        /// Byte offset of the opening delimiter
        offset: usize,
    },

    /// An action is not a field reference or comment
    #[error("unsupported action '{action}' at byte {offset}")]
    UnsupportedAction {
        /// Trimmed action text
        action: String,
        /// Byte offset of the opening delimiter
        offset: usize,
    },

    /// A referenced variable or field does not exist
    #[error("map has no entry for key \"{key}\"")]
    MissingKey {
        /// Name of the missing variable or field
        key: String,
    },

    /// A field was accessed on a value that is not an object
    #[error("can't evaluate field {field} in a non-object value")]
    NotAnObject {
        /// Field that was accessed
        field: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Text(String),
    /// Field path; empty for `.`
    Field(Vec<String>),
}

/// A parsed phrasing template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Parse a phrasing into a template
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut nodes = Vec::new();
        let mut rest = source;
        let mut offset = 0;
        let mut trim_next = false;

        while let Some(start) = rest.find(LEFT_DELIM) {
            let mut text = &rest[..start];
            if trim_next {
                text = text.trim_start();
            }

            let after_open = &rest[start + LEFT_DELIM.len()..];
            let end = after_open
                .find(RIGHT_DELIM)
                .ok_or(TemplateError::Unclosed {
                    offset: offset + start,
                })?;

            let mut action = &after_open[..end];
            if has_left_trim(action) {
                action = &action[1..];
                text = text.trim_end();
            }
            trim_next = has_right_trim(action);
            if trim_next {
                action = &action[..action.len() - 1];
            }

            if !text.is_empty() {
                nodes.push(Node::Text(text.to_string()));
            }
            if let Some(node) = parse_action(action.trim(), offset + start)? {
                nodes.push(node);
            }

            let consumed = start + LEFT_DELIM.len() + end + RIGHT_DELIM.len();
            offset += consumed;
            rest = &rest[consumed..];
        }

        let tail = if trim_next { rest.trim_start() } else { rest };
        if !tail.is_empty() {
            nodes.push(Node::Text(tail.to_string()));
        }

        Ok(Self { nodes })
    }

    /// Render the template against `vars`
    pub fn execute(&self, vars: &Vars) -> Result<String, TemplateError> {
        let mut output = String::new();

        for node in &self.nodes {
            match node {
                Node::Text(text) => output.push_str(text),
                Node::Field(path) => output.push_str(&resolve_field(path, vars)?),
            }
        }

        Ok(output)
    }
}

/// Parse and execute `source` in one step
pub fn interpolate(source: &str, vars: &Vars) -> Result<String, TemplateError> {
    Template::parse(source)?.execute(vars)
}

fn has_left_trim(action: &str) -> bool {
    let mut chars = action.chars();
    chars.next() == Some('-') && chars.next().is_some_and(char::is_whitespace)
}

fn has_right_trim(action: &str) -> bool {
    let mut chars = action.chars().rev();
    chars.next() == Some('-') && chars.next().is_some_and(char::is_whitespace)
}

fn parse_action(action: &str, offset: usize) -> Result<Option<Node>, TemplateError> {
    if action.is_empty() {
        return Err(TemplateError::EmptyAction { offset });
    }
    if action.starts_with("/*") && action.ends_with("*/") && action.len() >= 4 {
        return Ok(None);
    }
    if action == "." {
        return Ok(Some(Node::Field(Vec::new())));
    }

    let unsupported = || TemplateError::UnsupportedAction {
        action: action.to_string(),
        offset,
    };

    if action.starts_with('"') {
        let literal: String = serde_json::from_str(action).map_err(|_| unsupported())?;
        return Ok(Some(Node::Text(literal)));
    }
    if let Some(raw) = action
        .strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
        .filter(|raw| !raw.contains('`'))
    {
        return Ok(Some(Node::Text(raw.to_string())));
    }

    let path = action.strip_prefix('.').ok_or_else(unsupported)?;
    let segments: Vec<String> = path.split('.').map(str::to_string).collect();
    if segments.iter().all(|segment| is_identifier(segment)) {
        Ok(Some(Node::Field(segments)))
    } else {
        Err(unsupported())
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn resolve_field(path: &[String], vars: &Vars) -> Result<String, TemplateError> {
    let Some((first, rest)) = path.split_first() else {
        let whole: serde_json::Map<String, Value> = vars
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        return Ok(Value::Object(whole).to_string());
    };

    let mut current = vars
        .get(first)
        .ok_or_else(|| TemplateError::MissingKey { key: first.clone() })?;

    for field in rest {
        current = match current {
            Value::Object(map) => map
                .get(field)
                .ok_or_else(|| TemplateError::MissingKey { key: field.clone() })?,
            _ => {
                return Err(TemplateError::NotAnObject {
                    field: field.clone(),
                })
            }
        };
    }

    Ok(render_value(current))
}
