//! Decoding serialized layouts.
//!
//! Page-builder layouts nest far deeper than ordinary JSON documents, past
//! serde_json's default recursion limit. The nesting is measured first and the
//! parse then runs without that limit, so every layout within
//! [`MAX_LAYOUT_NESTING`] decodes and anything deeper is refused up front.

use serde::Deserialize;
use serde_json::Value;

use crate::config::MAX_LAYOUT_NESTING;
use crate::error_handling::LayoutDecodeError;

/// Parses a serialized layout (or any JSON value) into a tree.
pub fn decode_layout(raw: &str) -> Result<Value, LayoutDecodeError> {
    let depth = bracket_depth(raw, MAX_LAYOUT_NESTING);
    if depth > MAX_LAYOUT_NESTING {
        return Err(LayoutDecodeError::TooDeep {
            depth,
            limit: MAX_LAYOUT_NESTING,
        });
    }

    let mut de = serde_json::Deserializer::from_str(raw);
    de.disable_recursion_limit();
    let tree = Value::deserialize(&mut de)?;
    de.end()?;
    Ok(tree)
}

/// Deepest `[`/`{` nesting outside string literals.
///
/// Stops counting once `stop_after` is exceeded, so the result is exact up to
/// `stop_after + 1`.
fn bracket_depth(raw: &str, stop_after: usize) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in raw.bytes() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > deepest {
                    deepest = depth;
                    if deepest > stop_after {
                        break;
                    }
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}
