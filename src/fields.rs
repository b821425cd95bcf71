//! Builder for naming a set of extractors and running them together.

use std::fmt;

use indexmap::IndexMap;

use crate::document::Document;
use crate::error::{BoxError, Result};
use crate::extractor::{DataExtractor, Extractor};
use crate::value::{Key, Map, Value};

/// An ordered set of named fields, each backed by a [`DataExtractor`].
///
/// Fields run in the order they were registered. Registering a name twice
/// replaces the earlier extractor but keeps its position.
///
/// # Example
///
/// ```
/// use field_extract::{Document, FieldSet, Value};
///
/// struct Post { title: String, body: String }
///
/// impl Document for Post {
///     fn attribute(&self, name: &str) -> Option<Value> {
///         match name {
///             "title" => Some(self.title.clone().into()),
///             "body" => Some(self.body.clone().into()),
///             _ => None,
///         }
///     }
/// }
///
/// let fields = FieldSet::new()
///     .attribute("title")
///     .attribute_as("text", "body")
///     .block("length", |p: &Post| p.body.len() as i64)
///     .constant("type", "Post");
///
/// let post = Post { title: "Hi\u{7}".into(), body: "Body".into() };
/// let doc = fields.extract(&post).unwrap();
/// assert_eq!(doc["title"], Value::from("Hi"));
/// assert_eq!(doc["length"], Value::Int(4));
/// ```
pub struct FieldSet<T: ?Sized> {
    fields: IndexMap<String, DataExtractor<T>>,
}

impl<T: ?Sized> FieldSet<T> {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Add a field named after the attribute it reads.
    pub fn attribute(self, name: impl Into<String>) -> Self {
        let name = name.into();
        let extractor = DataExtractor::<T>::attribute(name.as_str());
        self.field(name, extractor)
    }

    /// Add a field that reads an attribute under a different name.
    pub fn attribute_as(self, field: impl Into<String>, attribute: impl Into<String>) -> Self {
        self.field(field, DataExtractor::<T>::attribute(attribute))
    }

    /// Add a field with the same value for every object.
    pub fn constant(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.field(field, DataExtractor::<T>::constant(value))
    }

    /// Add a field backed by any extractor.
    pub fn field(
        mut self,
        field: impl Into<String>,
        extractor: impl Into<DataExtractor<T>>,
    ) -> Self {
        let field = field.into();
        if self.fields.insert(field.clone(), extractor.into()).is_some() {
            tracing::debug!("Field {field:?} registered twice, keeping the latest extractor");
        }
        self
    }

    pub fn get(&self, field: &str) -> Option<&DataExtractor<T>> {
        self.fields.get(field)
    }

    /// Field names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T: ?Sized + 'static> FieldSet<T> {
    /// Add a field computed by an infallible block.
    pub fn block<F, V>(self, field: impl Into<String>, block: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<Value> + 'static,
    {
        self.field(field, DataExtractor::<T>::block(block))
    }

    /// Add a field computed by a fallible block.
    pub fn try_block<F, V, E>(self, field: impl Into<String>, block: F) -> Self
    where
        F: Fn(&T) -> std::result::Result<V, E> + Send + Sync + 'static,
        V: Into<Value> + 'static,
        E: Into<BoxError> + 'static,
    {
        self.field(field, DataExtractor::<T>::try_block(block))
    }
}

impl<T: Document + ?Sized> FieldSet<T> {
    /// Run every field against `object`.
    ///
    /// Stops at the first failing field and returns its error unchanged.
    pub fn extract(&self, object: &T) -> Result<IndexMap<String, Value>> {
        let mut values = IndexMap::with_capacity(self.fields.len());
        for (field, extractor) in &self.fields {
            let value = extractor.value_for(object).inspect_err(|e| {
                tracing::debug!("Extracting field {field:?} failed: {e}");
            })?;
            values.insert(field.clone(), value);
        }
        tracing::trace!("Extracted {} fields", values.len());
        Ok(values)
    }
}

/// A field set is itself an extractor producing a map of field values.
impl<T: Document + ?Sized> Extractor<T> for FieldSet<T> {
    fn value_for(&self, object: &T) -> Result<Value> {
        let values = self.extract(object)?;
        Ok(Value::Map(
            values
                .into_iter()
                .map(|(field, value)| (Key::Text(field), value))
                .collect::<Map>(),
        ))
    }
}

impl<T: ?Sized> Default for FieldSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for FieldSet<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for FieldSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::ExtractError;

    type Doc = HashMap<String, Value>;

    fn doc() -> Doc {
        HashMap::from([
            ("title".to_string(), Value::from("Rust\u{0} tips")),
            ("author".to_string(), Value::from("ada")),
        ])
    }

    #[test]
    fn empty_set() {
        let fields = FieldSet::<Doc>::new();
        assert!(fields.is_empty());
        assert!(fields.extract(&doc()).unwrap().is_empty());
    }

    #[test]
    fn extracts_in_registration_order() {
        let fields = FieldSet::new()
            .constant("class", "Post")
            .attribute("title")
            .attribute_as("author_name", "author")
            .block("field_count", |d: &Doc| d.len() as i64);

        let values = fields.extract(&doc()).unwrap();
        let names: Vec<_> = values.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["class", "title", "author_name", "field_count"]);
        assert_eq!(values["title"], Value::from("Rust tips"));
        assert_eq!(values["author_name"], Value::from("ada"));
        assert_eq!(values["field_count"], Value::Int(2));
    }

    #[test]
    fn duplicate_field_replaces_in_place() {
        let fields = FieldSet::<Doc>::new()
            .constant("a", 1)
            .constant("b", 2)
            .constant("a", 3);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(fields.extract(&doc()).unwrap()["a"], Value::Int(3));
    }

    #[test]
    fn first_failure_propagates() {
        let fields = FieldSet::<Doc>::new()
            .attribute("title")
            .attribute("missing")
            .try_block("never", |_: &Doc| Err::<i64, _>("unreachable"));

        let err = fields.extract(&doc()).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingAttribute { ref attribute } if attribute == "missing"
        ));
    }

    #[test]
    fn field_set_as_extractor_yields_map() {
        let fields = FieldSet::<Doc>::new().attribute("author");
        let value = fields.value_for(&doc()).unwrap();
        let expected: Value = [("author", "ada")].into_iter().collect();
        assert_eq!(value, expected);
    }

    #[test]
    fn get_returns_registered_extractor() {
        let fields = FieldSet::<Doc>::new().attribute("title");
        assert!(matches!(fields.get("title"), Some(DataExtractor::Attribute(_))));
        assert!(fields.get("body").is_none());
    }
}
