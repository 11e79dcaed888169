// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;
use yare::parameterized;

#[parameterized(
    present = { json!({"a": {"b": "x"}}), "x" },
    missing_leaf = { json!({"a": {}}), "dflt" },
    null_leaf = { json!({"a": {"b": null}}), "dflt" },
    missing_parent = { json!({}), "dflt" },
    null_parent = { json!({"a": null}), "dflt" },
)]
fn str_or_defaults_absent_values(value: serde_json::Value, expected: &str) {
    let root = Node::root(&value);
    assert_eq!(root.str_or(&["a", "b"], "dflt").unwrap(), expected);
}

#[test]
fn str_or_rejects_non_object_parent() {
    let value = json!({"a": "flat"});
    let err = Node::root(&value).str_or(&["a", "b"], "x").unwrap_err();
    assert_eq!(err.path, "a");
    assert_eq!(err.expected, "object");
    assert_eq!(err.found, "string");
}

#[test]
fn str_or_rejects_non_string_leaf() {
    let value = json!({"a": {"b": 7}});
    let err = Node::root(&value).str_or(&["a", "b"], "x").unwrap_err();
    assert_eq!(err.path, "a.b");
    assert_eq!(err.found, "number");
}

#[test]
fn root_mismatch_is_named_root() {
    let value = json!(5);
    let err = Node::root(&value).str_or(&["key"], "x").unwrap_err();
    assert_eq!(err.path, "<root>");
    assert_eq!(
        err.to_string(),
        "unexpected type at '<root>': expected object, found number"
    );
}

#[test]
fn list_yields_indexed_paths() {
    let value = json!({"f": {"items": [{"n": 1}, {"n": 2}]}});
    let items = Node::root(&value).list(&["f", "items"]).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].path(), "f.items[1]");
}

#[test]
fn list_absent_is_empty() {
    let value = json!({"f": null});
    assert!(Node::root(&value).list(&["f", "items"]).unwrap().is_empty());
}

#[test]
fn list_rejects_non_array() {
    let value = json!({"items": {"n": 1}});
    let err = Node::root(&value).list(&["items"]).unwrap_err();
    assert_eq!(err.expected, "array");
    assert_eq!(err.found, "object");
}

#[test]
fn text_or_accepts_plain_string() {
    let value = json!({"d": "plain"});
    assert_eq!(Node::root(&value).text_or(&["d"], "").unwrap(), "plain");
}

#[test]
fn text_or_flattens_adf_document() {
    let value = json!({
        "d": {
            "type": "doc",
            "version": 1,
            "content": [
                {"type": "paragraph", "content": [
                    {"type": "text", "text": "Hello "},
                    {"type": "text", "text": "world"}
                ]},
                {"type": "paragraph", "content": [
                    {"type": "text", "text": "line one"},
                    {"type": "hardBreak"},
                    {"type": "text", "text": "line two"}
                ]},
                {"type": "bulletList", "content": [
                    {"type": "listItem", "content": [
                        {"type": "paragraph", "content": [
                            {"type": "mention", "attrs": {"text": "@alice"}}
                        ]}
                    ]}
                ]}
            ]
        }
    });
    assert_eq!(
        Node::root(&value).text_or(&["d"], "").unwrap(),
        "Hello world\nline one\nline two\n@alice"
    );
}

#[test]
fn text_or_rejects_other_objects() {
    let value = json!({"d": {"html": "<p>x</p>"}});
    assert!(Node::root(&value).text_or(&["d"], "").is_err());
}

#[parameterized(
    null = { json!(null), "null" },
    boolean = { json!(true), "boolean" },
    number = { json!(1.5), "number" },
    string = { json!("s"), "string" },
    array = { json!([]), "array" },
    object = { json!({}), "object" },
)]
fn kind_names(value: serde_json::Value, expected: &str) {
    assert_eq!(kind(&value), expected);
}
