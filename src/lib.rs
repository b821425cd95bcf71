//! # field_extract
//!
//! Field value extraction for search indexing, with a sanitizing filter
//! that makes every extracted value safe to write into a text-based index
//! document.
//!
//! ## Overview
//!
//! An [`Extractor`] turns an object into a [`Value`]. Three strategies are
//! built in:
//!
//! - [`AttributeExtractor`] reads a named attribute through the [`Document`] trait.
//! - [`BlockExtractor`] runs a user-supplied block, either with the object as
//!   its argument or against a [`Scope`] bound to the object.
//! - [`ConstantExtractor`] returns the same value for every object.
//!
//! Every extractor passes its result through the [`Filter`], which removes
//! control characters from strings and repairs invalid UTF-8. Lists and maps
//! are cleaned one level deep; other values pass through untouched.
//!
//! [`FieldSet`] names a group of extractors and runs them together.
//!
//! ## Quick start
//!
//! ```rust
//! use field_extract::{Document, FieldSet, Value};
//!
//! struct Article { title: String, tags: Vec<String> }
//!
//! impl Document for Article {
//!     fn attribute(&self, name: &str) -> Option<Value> {
//!         match name {
//!             "title" => Some(self.title.clone().into()),
//!             "tags" => Some(self.tags.clone().into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let fields = FieldSet::new()
//!     .attribute("title")
//!     .attribute("tags")
//!     .block("tag_count", |a: &Article| a.tags.len() as i64);
//!
//! let article = Article {
//!     title: "Ownership\u{0} explained".into(),
//!     tags: vec!["rust\u{1b}".into(), "memory".into()],
//! };
//!
//! let doc = fields.extract(&article).unwrap();
//! assert_eq!(doc["title"], Value::from("Ownership explained"));
//! assert_eq!(doc["tags"], Value::from(vec!["rust", "memory"]));
//! ```
//!
//! ## Feature flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | **yes** | `Serialize` for [`Value`], plus `serde_json` conversions and [`Document`] impls. |

pub mod context;
pub mod document;
pub mod error;
pub mod extractor;
pub mod fields;
pub mod filter;
pub mod value;

pub use context::{Binding, Scope};
pub use document::Document;
pub use error::{BoxError, ExtractError, Result};
pub use extractor::{
    AttributeExtractor, BlockExtractor, ConstantExtractor, DataExtractor, Extractor,
};
pub use fields::FieldSet;
pub use filter::{Filter, filter, repair_encoding, strip_control_characters};
pub use value::{Key, Map, Value};
