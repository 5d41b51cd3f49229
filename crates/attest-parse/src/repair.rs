//! Recovery heuristics for JSON-shaped Oracle output

use crate::error::ParseError;
use serde_json::Value;
use tracing::warn;

/// Strip a leading/trailing markdown code fence from a response.
///
/// LLMs routinely wrap JSON in ```json blocks despite instructions not to.
/// Input without fences is returned trimmed and otherwise untouched.
pub fn strip_code_fences(response: &str) -> String {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return String::new();
        }
        let end = if lines[lines.len() - 1].trim_start().starts_with("```") {
            lines.len() - 1
        } else {
            lines.len()
        };
        return lines[1..end].join("\n");
    }

    trimmed.to_string()
}

/// Repair a JSON array that lost its closing `]` to a token limit.
///
/// Scans the input with string/escape awareness (naive brace counting
/// mis-fires on braces inside string values), recording the end offset of
/// each complete top-level element. The repaired output keeps every
/// complete element up to the truncation point and drops the trailing
/// partial one.
///
/// Returns `None` when there is no opening `[`, when the array is already
/// properly closed, or when no complete element exists to salvage.
pub fn repair_truncated_array(input: &str) -> Option<String> {
    let start = input.find('[')?;
    let body = &input[start..];

    let mut in_string = false;
    let mut escaped = false;
    // Depth relative to the array itself: 0 means between elements.
    let mut depth: u32 = 0;
    let mut last_complete_end: Option<usize> = None;

    for (i, c) in body.char_indices().skip(1) {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    last_complete_end = Some(i + c.len_utf8());
                }
            }
            ']' => {
                if depth == 0 {
                    // Array closed properly; nothing to repair.
                    return None;
                }
                depth -= 1;
                if depth == 0 {
                    last_complete_end = Some(i + c.len_utf8());
                }
            }
            _ => {}
        }
    }

    let end = last_complete_end?;
    let mut repaired = body[..end].to_string();
    repaired.push(']');
    Some(repaired)
}

/// Parse untrusted Oracle output into a JSON array of values.
///
/// Recovery ladder: strip fences, parse directly, then attempt truncation
/// repair. A lone top-level object is accepted by wrapping it in an array
/// (a known Oracle misbehavior when asked for a single-element list).
/// Only when every rung fails does this return an error.
pub fn parse_array_lenient(response: &str) -> Result<Vec<Value>, ParseError> {
    let stripped = strip_code_fences(response);

    match serde_json::from_str::<Value>(&stripped) {
        Ok(Value::Array(items)) => return Ok(items),
        Ok(Value::Object(obj)) => return Ok(vec![Value::Object(obj)]),
        Ok(other) => {
            return Err(ParseError::NotAnArray(type_name(&other)));
        }
        Err(e) => {
            warn!("direct JSON parse failed, attempting repair: {}", e);
        }
    }

    let repaired = repair_truncated_array(&stripped)
        .ok_or_else(|| ParseError::Unrepairable("no complete array element found".to_string()))?;

    match serde_json::from_str::<Value>(&repaired) {
        Ok(Value::Array(items)) => {
            warn!(
                "recovered {} element(s) from truncated array response",
                items.len()
            );
            Ok(items)
        }
        Ok(other) => Err(ParseError::NotAnArray(type_name(&other))),
        Err(e) => Err(ParseError::Unrepairable(e.to_string())),
    }
}

fn type_name(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
    .to_string()
}
