// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Recursive template interpolation over nested JSON documents.
//!
//! Callers hand in a template document (typically deserialized
//! configuration) and a set of named arguments; every string in the
//! document gets `{key}` placeholders substituted, containers are walked
//! recursively, and scalars pass through unchanged.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::errors::TemplateError;

/// Substitute `{key}` placeholders in a single string.
///
/// `{{` and `}}` escape to literal braces, as in `str.format`-style
/// templates.
///
/// # Errors
///
/// Returns [`TemplateError::MissingKey`] when a placeholder references an
/// argument that was not provided, and [`TemplateError::UnmatchedBrace`]
/// for an unterminated placeholder or a stray `}`.
pub fn interpolate(
    template: &str,
    arguments: &BTreeMap<String, String>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut key = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(inner) => key.push(inner),
                        None => {
                            return Err(TemplateError::UnmatchedBrace {
                                template: template.to_string(),
                            })
                        }
                    }
                }
                match arguments.get(&key) {
                    Some(value) => out.push_str(value),
                    None => return Err(TemplateError::MissingKey { key }),
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(TemplateError::UnmatchedBrace {
                        template: template.to_string(),
                    });
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Apply [`interpolate`] recursively across a nested document.
///
/// Strings are interpolated, objects and arrays are walked preserving keys
/// and order, and numbers, booleans and null are returned unchanged.
/// Recursion depth is bounded by the input document.
///
/// # Errors
///
/// Propagates the first [`TemplateError`] from any string in the document.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use serde_json::json;
/// use zonevet::template::format_recursive;
///
/// let template = json!({"a": "Value {a}", "c": ["Value {b}"], "d": 10});
/// let arguments = BTreeMap::from([
///     ("a".to_string(), "A".to_string()),
///     ("b".to_string(), "B".to_string()),
/// ]);
///
/// let result = format_recursive(&template, &arguments).unwrap();
/// assert_eq!(result, json!({"a": "Value A", "c": ["Value B"], "d": 10}));
/// ```
pub fn format_recursive(
    template: &Value,
    arguments: &BTreeMap<String, String>,
) -> Result<Value, TemplateError> {
    match template {
        Value::String(s) => Ok(Value::String(interpolate(s, arguments)?)),
        Value::Object(map) => {
            let mut formatted = serde_json::Map::with_capacity(map.len());
            for (key, value) in map {
                formatted.insert(key.clone(), format_recursive(value, arguments)?);
            }
            Ok(Value::Object(formatted))
        }
        Value::Array(items) => {
            let formatted = items
                .iter()
                .map(|item| format_recursive(item, arguments))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Array(formatted))
        }
        other => Ok(other.clone()),
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod template_tests;
