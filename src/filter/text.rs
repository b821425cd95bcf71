//! String cleaning: encoding repair followed by control-character removal.

use std::sync::LazyLock;

use regex::Regex;

use crate::value::{Key, Value};

/// Unicode general category Cc: U+0000..=U+001F and U+007F..=U+009F.
static CONTROL_CHARACTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Cc}").expect("invalid control character pattern"));

/// Decode bytes that claim to be UTF-8, substituting U+FFFD for every
/// invalid sequence. Never fails.
///
/// ```
/// use field_extract::repair_encoding;
///
/// assert_eq!(repair_encoding(b"caf\xc3\xa9".to_vec()), "café");
/// assert_eq!(repair_encoding(b"bad\xffbyte".to_vec()), "bad\u{fffd}byte");
/// ```
pub fn repair_encoding(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(
                "Repairing invalid UTF-8 starting at byte {}",
                err.utf8_error().valid_up_to()
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

/// Remove every control character from `text`, keeping all other
/// characters in order. Clean input is returned without reallocating.
///
/// ```
/// use field_extract::strip_control_characters;
///
/// assert_eq!(strip_control_characters("Al\x07ice".to_string()), "Alice");
/// ```
pub fn strip_control_characters(text: String) -> String {
    if !CONTROL_CHARACTERS.is_match(&text) {
        return text;
    }
    CONTROL_CHARACTERS.replace_all(&text, "").into_owned()
}

/// Clean a string value; anything else is returned untouched.
pub(crate) fn clean_value(value: Value) -> Value {
    match value {
        Value::Text(text) => Value::Text(strip_control_characters(text)),
        Value::Bytes(bytes) => Value::Text(strip_control_characters(repair_encoding(bytes))),
        other => other,
    }
}

pub(crate) fn clean_key(key: Key) -> Key {
    match key {
        Key::Text(text) => Key::Text(strip_control_characters(text)),
        Key::Bytes(bytes) => Key::Text(strip_control_characters(repair_encoding(bytes))),
        other => other,
    }
}
