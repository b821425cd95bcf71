//! Calling conventions for user-supplied blocks.
//!
//! A block is either written against an explicit argument (`|post| ...`) or
//! against a [`Scope`] bound to the object, where bare attribute names are
//! looked up on the object (`|scope| scope.get("title")`). Both are adapted
//! here into one shared function type taking the object.

use std::sync::Arc;

use crate::document::Document;
use crate::error::{BoxError, ExtractError, Result};
use crate::value::Value;

pub(crate) type BlockFn<T> = dyn Fn(&T) -> std::result::Result<Value, BoxError> + Send + Sync;

/// How a block receives the object it is evaluated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    /// The block receives a [`Scope`] that resolves names against the object.
    Receiver,
    /// The block receives the object itself as its argument.
    Argument,
}

/// The object a receiver-style block is evaluated against.
///
/// Lookups return raw values; the extractor running the block filters the
/// block's result once it returns.
pub struct Scope<'a, T: ?Sized> {
    object: &'a T,
}

impl<'a, T: ?Sized> Scope<'a, T> {
    pub(crate) fn new(object: &'a T) -> Self {
        Self { object }
    }

    /// The object this scope is bound to.
    pub fn object(&self) -> &'a T {
        self.object
    }
}

impl<T: Document + ?Sized> Scope<'_, T> {
    /// Resolve `name` against the object.
    ///
    /// Fails with [`ExtractError::MissingAttribute`] when the object has no
    /// such attribute. Returned from a block, that error reaches the caller
    /// as-is.
    pub fn get(&self, name: &str) -> Result<Value> {
        self.object
            .attribute(name)
            .ok_or_else(|| ExtractError::missing(name))
    }

    /// Like [`get`](Self::get), but `None` for a missing attribute.
    pub fn try_get(&self, name: &str) -> Option<Value> {
        self.object.attribute(name)
    }
}

pub(crate) fn with_receiver<T, F, V, E>(block: F) -> Arc<BlockFn<T>>
where
    T: Document + ?Sized + 'static,
    F: Fn(&Scope<'_, T>) -> std::result::Result<V, E> + Send + Sync + 'static,
    V: Into<Value> + 'static,
    E: Into<BoxError> + 'static,
{
    Arc::new(move |object: &T| {
        block(&Scope::new(object))
            .map(Into::into)
            .map_err(Into::into)
    })
}

pub(crate) fn with_argument<T, F, V, E>(block: F) -> Arc<BlockFn<T>>
where
    T: ?Sized + 'static,
    F: Fn(&T) -> std::result::Result<V, E> + Send + Sync + 'static,
    V: Into<Value> + 'static,
    E: Into<BoxError> + 'static,
{
    Arc::new(move |object: &T| block(object).map(Into::into).map_err(Into::into))
}
