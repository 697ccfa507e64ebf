//! Lenient JSON recovery from free-form model output.
//!
//! Slices from the first `{` to the last `}` and parses that. No brace
//! balancing: prose containing braces, or several objects, can produce a
//! slice that is wrong or invalid. Kept that way on purpose; callers rely on
//! the exact set of inputs that come back as `None`.

use serde_json::{Map, Value};

/// Recover a JSON object from `text`.
///
/// Returns `None` when there is no `{`, no `}`, the last `}` comes before the
/// first `{`, or the slice does not decode. These cases are not distinguished.
/// Any object is accepted, including `{}`.
pub fn clean_and_parse_json(text: &str) -> Option<Map<String, Value>> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}
