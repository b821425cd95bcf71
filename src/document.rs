//! The [`Document`] trait that inspected objects implement to expose named
//! attributes to extractors.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::value::{Key, Map, Value};

/// Trait implemented by domain objects whose attributes can be extracted.
///
/// Attribute lookup is resolved on every call, by name. Returning `None`
/// means the object does not expose that attribute at all; an attribute
/// that exists but is empty should return `Some(Value::Null)`.
///
/// # Example
///
/// ```
/// use field_extract::{Document, Value};
///
/// struct Post {
///     title: String,
///     views: i64,
/// }
///
/// impl Document for Post {
///     fn attribute(&self, name: &str) -> Option<Value> {
///         match name {
///             "title" => Some(self.title.clone().into()),
///             "views" => Some(self.views.into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Document {
    /// Returns the current value of the named attribute, unsanitized.
    fn attribute(&self, name: &str) -> Option<Value>;
}

impl<D: Document + ?Sized> Document for &D {
    fn attribute(&self, name: &str) -> Option<Value> {
        (**self).attribute(name)
    }
}

impl<D: Document + ?Sized> Document for Box<D> {
    fn attribute(&self, name: &str) -> Option<Value> {
        (**self).attribute(name)
    }
}

impl<D: Document + ?Sized> Document for Arc<D> {
    fn attribute(&self, name: &str) -> Option<Value> {
        (**self).attribute(name)
    }
}

impl Document for HashMap<String, Value> {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl Document for BTreeMap<String, Value> {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// Only text keys are addressable by name.
impl Document for Map {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.get(&Key::Text(name.to_string())).cloned()
    }
}

#[cfg(feature = "serde")]
impl Document for serde_json::Map<String, serde_json::Value> {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Value::from)
    }
}

/// Objects expose their members; any other JSON value exposes nothing.
#[cfg(feature = "serde")]
impl Document for serde_json::Value {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.as_object()?.attribute(name)
    }
}
