//! Extraction by attribute name.

use super::Extractor;
use crate::document::Document;
use crate::error::{ExtractError, Result};
use crate::filter::filter;
use crate::value::Value;

/// Extracts a value by looking up a named attribute on the object.
///
/// The lookup happens on every call, so the same extractor can be used
/// against any number of objects.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use field_extract::{AttributeExtractor, Extractor, Value};
///
/// let doc = HashMap::from([("name".to_string(), Value::from("Al\x07ice"))]);
/// let name = AttributeExtractor::new("name");
/// assert_eq!(name.value_for(&doc).unwrap(), Value::from("Alice"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeExtractor {
    attribute: String,
}

impl AttributeExtractor {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }
}

impl<T: Document + ?Sized> Extractor<T> for AttributeExtractor {
    fn value_for(&self, object: &T) -> Result<Value> {
        match object.attribute(&self.attribute) {
            Some(raw) => Ok(filter(raw)),
            None => {
                tracing::debug!("Object has no attribute {:?}", self.attribute);
                Err(ExtractError::missing(self.attribute.as_str()))
            }
        }
    }
}
