// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Safe field access over loosely-shaped JSON.
//!
//! A [`Node`] walks dotted paths through nested objects. Missing keys and
//! `null` at any level read as "absent" so callers can substitute a default.
//! A value that is present but of the wrong shape is reported as a
//! [`TypeMismatch`] carrying the full path, so callers can tell "Jira left
//! it out" apart from "Jira sent something we don't understand".

use serde_json::Value;

/// A present value had the wrong JSON type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected type at '{path}': expected {expected}, found {found}")]
pub struct TypeMismatch {
    pub path: String,
    pub expected: &'static str,
    pub found: &'static str,
}

/// JSON type name used in diagnostics.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A borrowed JSON value together with the path it was reached by.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Node<'a> {
    pub fn root(value: &'a Value) -> Self {
        Node {
            value,
            path: String::new(),
        }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Path from the root, e.g. `fields.comment.comments[1].author`.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn child_path(&self, segment: &str) -> String {
        if self.path.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", self.path, segment)
        }
    }

    fn mismatch(&self, expected: &'static str) -> TypeMismatch {
        TypeMismatch {
            path: if self.path.is_empty() {
                "<root>".to_string()
            } else {
                self.path.clone()
            },
            expected,
            found: kind(self.value),
        }
    }

    /// Walks `segments`. `Ok(None)` if any segment is missing or null.
    pub fn get(&self, segments: &[&str]) -> Result<Option<Node<'a>>, TypeMismatch> {
        let mut current = self.clone();
        for segment in segments {
            if current.value.is_null() {
                return Ok(None);
            }
            let Value::Object(map) = current.value else {
                return Err(current.mismatch("object"));
            };
            match map.get(*segment) {
                Some(Value::Null) | None => return Ok(None),
                Some(next) => {
                    current = Node {
                        value: next,
                        path: current.child_path(segment),
                    };
                }
            }
        }
        if current.value.is_null() {
            return Ok(None);
        }
        Ok(Some(current))
    }

    /// This node as a string.
    pub fn as_str(&self) -> Result<&'a str, TypeMismatch> {
        self.value.as_str().ok_or_else(|| self.mismatch("string"))
    }

    /// String at `segments`, or `default` when absent.
    pub fn str_or(&self, segments: &[&str], default: &str) -> Result<String, TypeMismatch> {
        match self.get(segments)? {
            Some(node) => node.as_str().map(String::from),
            None => Ok(default.to_string()),
        }
    }

    /// Free text at `segments`: a plain string, or an Atlassian Document
    /// Format document flattened to plain text.
    pub fn text_or(&self, segments: &[&str], default: &str) -> Result<String, TypeMismatch> {
        let Some(node) = self.get(segments)? else {
            return Ok(default.to_string());
        };
        match node.value {
            Value::String(s) => Ok(s.clone()),
            Value::Object(map) if map.get("type").and_then(Value::as_str) == Some("doc") => {
                Ok(adf_to_text(node.value))
            }
            _ => Err(node.mismatch("string or document")),
        }
    }

    /// Array elements at `segments`; empty when absent.
    pub fn list(&self, segments: &[&str]) -> Result<Vec<Node<'a>>, TypeMismatch> {
        let Some(node) = self.get(segments)? else {
            return Ok(Vec::new());
        };
        let Value::Array(items) = node.value else {
            return Err(node.mismatch("array"));
        };
        Ok(items
            .iter()
            .enumerate()
            .map(|(i, value)| Node {
                value,
                path: format!("{}[{}]", node.path, i),
            })
            .collect())
    }
}

/// Block-level ADF nodes whose children are inline and joined without separators.
const INLINE_CONTAINERS: &[&str] = &["paragraph", "heading", "codeBlock"];

/// Flattens an ADF node to plain text. Unknown node types contribute their children.
pub fn adf_to_text(node: &Value) -> String {
    let node_type = node.get("type").and_then(Value::as_str).unwrap_or_default();
    match node_type {
        "text" => node
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        "hardBreak" => "\n".to_string(),
        "mention" => node
            .pointer("/attrs/text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => {
            let parts: Vec<String> = node
                .get("content")
                .and_then(Value::as_array)
                .map(|children| children.iter().map(adf_to_text).collect())
                .unwrap_or_default();
            if INLINE_CONTAINERS.contains(&node_type) {
                parts.concat()
            } else {
                parts
                    .into_iter()
                    .filter(|p| !p.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
