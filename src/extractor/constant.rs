//! A fixed value returned for every object.

use super::Extractor;
use crate::error::Result;
use crate::filter::filter;
use crate::value::Value;

/// Returns the same value for every object.
///
/// The stored value is kept exactly as given and filtered again on each
/// call; it is never sanitized up front.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantExtractor {
    value: Value,
}

impl ConstantExtractor {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The stored, unsanitized value.
    pub fn raw(&self) -> &Value {
        &self.value
    }
}

impl<T: ?Sized> Extractor<T> for ConstantExtractor {
    fn value_for(&self, _object: &T) -> Result<Value> {
        Ok(filter(self.value.clone()))
    }
}
