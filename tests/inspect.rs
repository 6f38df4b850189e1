//! Tests for the deep value inspector.

use conlog::fmt::{inspect, stringify_arg};
use serde_json::json;

#[test]
fn top_level_strings_are_unquoted() {
    assert_eq!(stringify_arg(&json!("hello"), false), "hello");
}

#[test]
fn scalars_stringify_plainly() {
    assert_eq!(stringify_arg(&json!(42), false), "42");
    assert_eq!(stringify_arg(&json!(2.5), false), "2.5");
    assert_eq!(stringify_arg(&json!(true), false), "true");
    assert_eq!(stringify_arg(&json!(null), false), "null");
}

#[test]
fn nested_strings_are_quoted() {
    let out = inspect(&json!({"name": "ada"}), false);
    assert_eq!(out, "{ name: 'ada' }");
}

#[test]
fn small_containers_render_compact() {
    assert_eq!(inspect(&json!([1, 2, 3]), false), "[ 1, 2, 3 ]");
    assert_eq!(inspect(&json!({}), false), "{}");
    assert_eq!(inspect(&json!([]), false), "[]");
    assert_eq!(
        inspect(&json!({"a": 1, "b": [true, null]}), false),
        "{ a: 1, b: [ true, null ] }"
    );
}

#[test]
fn long_containers_break_across_lines() {
    let value = json!({
        "first_field_with_a_long_name": "some reasonably long value here",
        "second_field_with_a_long_name": "another reasonably long value",
    });
    let out = inspect(&value, false);
    assert!(out.contains('\n'));
    assert!(out.starts_with("{\n"));
    assert!(out.ends_with('}'));
}

#[test]
fn unbounded_depth() {
    let deep = json!({"a": {"b": {"c": {"d": {"e": 1}}}}});
    let out = inspect(&deep, false);
    assert!(out.contains("e: 1"));
}

#[test]
fn colorized_scalars_carry_escapes() {
    let out = inspect(&json!({"n": 7, "s": "x"}), true);
    assert!(out.contains("\x1b[33m7\x1b[0m"));
    assert!(out.contains("\x1b[32m'x'\x1b[0m"));
    // Keys stay plain.
    assert!(out.contains("n: "));
}

#[test]
fn non_identifier_keys_are_quoted() {
    let out = inspect(&json!({"two words": 1}), false);
    assert_eq!(out, "{ 'two words': 1 }");
}
