//! Strategies for pulling a value out of an object.
//!
//! Every extractor implements [`Extractor`], and every value it returns has
//! already been through the [`Filter`](crate::Filter).
//!
//! Built-in extractors:
//!
//! - [`AttributeExtractor`] -- looks up a named attribute.
//! - [`BlockExtractor`] -- runs a user-supplied block.
//! - [`ConstantExtractor`] -- returns a fixed value.
//!
//! [`DataExtractor`] closes over the three so field configurations can
//! hold any of them in one type.

mod attribute;
mod block;
mod constant;

pub use attribute::AttributeExtractor;
pub use block::BlockExtractor;
pub use constant::ConstantExtractor;

use std::fmt;

use crate::document::Document;
use crate::error::{BoxError, Result};
use crate::value::Value;

/// Trait for field value extractors.
///
/// Extractors are immutable once built and must be `Send + Sync` so a
/// single instance can serve many objects from many threads.
pub trait Extractor<T: ?Sized>: Send + Sync {
    /// Extract the sanitized value of this field from `object`.
    fn value_for(&self, object: &T) -> Result<Value>;
}

/// Any of the built-in extractors.
pub enum DataExtractor<T: ?Sized> {
    Attribute(AttributeExtractor),
    Block(BlockExtractor<T>),
    Constant(ConstantExtractor),
}

impl<T: ?Sized> DataExtractor<T> {
    pub fn attribute(name: impl Into<String>) -> Self {
        Self::Attribute(AttributeExtractor::new(name))
    }

    pub fn constant(value: impl Into<Value>) -> Self {
        Self::Constant(ConstantExtractor::new(value))
    }
}

impl<T: ?Sized + 'static> DataExtractor<T> {
    pub fn block<F, V>(block: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<Value> + 'static,
    {
        Self::Block(BlockExtractor::new(block))
    }

    pub fn try_block<F, V, E>(block: F) -> Self
    where
        F: Fn(&T) -> std::result::Result<V, E> + Send + Sync + 'static,
        V: Into<Value> + 'static,
        E: Into<BoxError> + 'static,
    {
        Self::Block(BlockExtractor::try_new(block))
    }
}

impl<T: Document + ?Sized> Extractor<T> for DataExtractor<T> {
    fn value_for(&self, object: &T) -> Result<Value> {
        match self {
            Self::Attribute(extractor) => extractor.value_for(object),
            Self::Block(extractor) => extractor.value_for(object),
            Self::Constant(extractor) => extractor.value_for(object),
        }
    }
}

impl<T: ?Sized> Clone for DataExtractor<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Attribute(extractor) => Self::Attribute(extractor.clone()),
            Self::Block(extractor) => Self::Block(extractor.clone()),
            Self::Constant(extractor) => Self::Constant(extractor.clone()),
        }
    }
}

impl<T: ?Sized> fmt::Debug for DataExtractor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute(extractor) => f.debug_tuple("Attribute").field(extractor).finish(),
            Self::Block(extractor) => f.debug_tuple("Block").field(extractor).finish(),
            Self::Constant(extractor) => f.debug_tuple("Constant").field(extractor).finish(),
        }
    }
}

impl<T: ?Sized> From<AttributeExtractor> for DataExtractor<T> {
    fn from(extractor: AttributeExtractor) -> Self {
        Self::Attribute(extractor)
    }
}

impl<T: ?Sized> From<BlockExtractor<T>> for DataExtractor<T> {
    fn from(extractor: BlockExtractor<T>) -> Self {
        Self::Block(extractor)
    }
}

impl<T: ?Sized> From<ConstantExtractor> for DataExtractor<T> {
    fn from(extractor: ConstantExtractor) -> Self {
        Self::Constant(extractor)
    }
}
