//! The sanitizing filter applied to every extracted value.
//!
//! Strings lose their control characters (after any invalid UTF-8 has been
//! repaired). Lists and maps are cleaned one level deep only:
//!
//! - direct string elements of a list are cleaned,
//! - string keys and string values of a map are cleaned,
//! - containers nested inside a list or map are returned as they came in.
//!
//! Every other value passes through unchanged.

mod text;

pub use text::{repair_encoding, strip_control_characters};

use crate::value::{Map, Value};

use text::{clean_key, clean_value};

/// Sanitizes a single raw value.
///
/// # Example
///
/// ```
/// use field_extract::{Filter, Value};
///
/// let cleaned = Filter::new(vec!["a\u{1}", "b"]).value();
/// assert_eq!(cleaned, Value::from(vec!["a", "b"]));
/// ```
#[derive(Clone, Debug)]
pub struct Filter {
    value: Value,
}

impl Filter {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Consume the filter and return the sanitized value.
    pub fn value(self) -> Value {
        match self.value {
            value @ (Value::Text(_) | Value::Bytes(_)) => clean_value(value),
            Value::List(items) => Value::List(items.into_iter().map(clean_value).collect()),
            Value::Map(map) => Value::Map(clean_map(map)),
            other => other,
        }
    }
}

/// Shorthand for `Filter::new(value).value()`.
pub fn filter(value: Value) -> Value {
    Filter::new(value).value()
}

/// Rebuild `map` with cleaned keys and values, in source order.
///
/// Two distinct keys can clean to the same key (`"id\u{1}"` and `"id"`).
/// The later entry's value then overwrites the earlier one, and the entry
/// stays at the position where that key was first inserted.
fn clean_map(map: Map) -> Map {
    let capacity = map.len();
    map.into_iter()
        .fold(Map::with_capacity(capacity), |mut cleaned, (key, value)| {
            if let Some(previous) = cleaned.insert(clean_key(key), clean_value(value)) {
                tracing::trace!(
                    "Sanitized map key collided, dropping earlier {} value",
                    previous.kind()
                );
            }
            cleaned
        })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::value::Key;

    #[test]
    fn cleans_plain_string() {
        assert_eq!(filter(Value::from("Al\u{7}ice")), Value::from("Alice"));
    }

    #[test]
    fn clean_string_is_identity() {
        let value = Value::from("already clean");
        assert_eq!(filter(value.clone()), value);
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = filter(Value::bytes(b"x\x00y\xfez".to_vec()));
        assert_eq!(filter(once.clone()), once);
    }

    #[test]
    fn repairs_invalid_bytes_without_failing() {
        let value = Value::bytes(b"\x1bsearch\xc0term".to_vec());
        assert_eq!(filter(value), Value::from("search\u{fffd}term"));
    }

    #[test]
    fn list_elements_are_cleaned_in_order() {
        let value = Value::List(vec![
            Value::from("a\u{1}"),
            Value::Int(2),
            Value::bytes(b"c\x02".to_vec()),
            Value::Null,
        ]);
        assert_eq!(
            filter(value),
            Value::List(vec![
                Value::from("a"),
                Value::Int(2),
                Value::from("c"),
                Value::Null,
            ])
        );
    }

    #[test]
    fn list_does_not_recurse_into_nested_containers() {
        let nested_list = Value::from(vec!["deep\u{1}"]);
        let nested_map: Value = [("k\u{1}", "v\u{1}")].into_iter().collect();
        let value = Value::List(vec![
            Value::from("top\u{1}"),
            nested_list.clone(),
            nested_map.clone(),
        ]);

        assert_eq!(
            filter(value),
            Value::List(vec![Value::from("top"), nested_list, nested_map])
        );
    }

    #[test]
    fn map_keys_and_values_are_cleaned() {
        let value: Value = [("k\u{1}", Value::from("v\u{2}")), ("other", Value::Int(5))]
            .into_iter()
            .collect();
        let expected: Value = [("k", Value::from("v")), ("other", Value::Int(5))]
            .into_iter()
            .collect();
        assert_eq!(filter(value), expected);
    }

    #[test]
    fn map_does_not_recurse_into_nested_values() {
        let nested = Value::from(vec!["x\u{1}"]);
        let value: Value = [("list\u{1}", nested.clone())].into_iter().collect();
        let expected: Value = [("list", nested)].into_iter().collect();
        assert_eq!(filter(value), expected);
    }

    #[test]
    fn non_string_keys_are_untouched() {
        let mut map = Map::new();
        map.insert(Key::Int(1), Value::from("one\u{1}"));
        map.insert(Key::Bool(false), Value::Float(0.5));

        let mut expected = Map::new();
        expected.insert(Key::Int(1), Value::from("one"));
        expected.insert(Key::Bool(false), Value::Float(0.5));

        assert_eq!(filter(Value::Map(map)), Value::Map(expected));
    }

    #[test]
    fn colliding_keys_keep_later_value_at_first_position() {
        let mut map = Map::new();
        map.insert(Key::from("id"), Value::Int(1));
        map.insert(Key::from("title"), Value::from("t"));
        map.insert(Key::from("i\u{1}d"), Value::Int(2));

        let cleaned = filter(Value::Map(map));
        let cleaned = cleaned.as_map().unwrap();

        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned.get(&Key::from("id")), Some(&Value::Int(2)));
        let keys: Vec<_> = cleaned.keys().map(|k| k.as_str().unwrap()).collect();
        assert_eq!(keys, vec!["id", "title"]);
    }

    #[test]
    fn scalars_pass_through() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap();
        for value in [
            Value::Null,
            Value::Bool(true),
            Value::Int(-3),
            Value::Float(2.5),
            Value::Time(at),
        ] {
            assert_eq!(filter(value.clone()), value);
        }
    }

    #[test]
    fn filter_struct_accepts_plain_rust_values() {
        assert_eq!(Filter::new("tab\there").value(), Value::from("tabhere"));
        assert_eq!(Filter::new(7).value(), Value::Int(7));
    }
}
