//! Extraction by evaluating a user-supplied block.

use std::fmt;
use std::sync::Arc;

use super::Extractor;
use crate::context::{self, Binding, BlockFn, Scope};
use crate::document::Document;
use crate::error::{BoxError, ExtractError, Result};
use crate::filter::filter;
use crate::value::Value;

/// Extracts a value by running a block against the object.
///
/// The block is chosen at construction in one of two conventions:
///
/// - [`new`](Self::new) / [`try_new`](Self::try_new): the object is passed
///   as the block's argument.
/// - [`in_context`](Self::in_context): the block receives a [`Scope`] whose
///   [`get`](Scope::get) resolves attribute names against the object.
///
/// Errors raised by the block reach the caller unchanged.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use field_extract::{BlockExtractor, ExtractError, Extractor, Scope, Value};
///
/// type Doc = HashMap<String, Value>;
///
/// let doc: Doc = HashMap::from([("name".to_string(), Value::from("ada"))]);
///
/// let explicit = BlockExtractor::new(|doc: &Doc| {
///     doc["name"].as_str().unwrap_or_default().to_uppercase()
/// });
/// let in_context = BlockExtractor::in_context(|scope: &Scope<'_, Doc>| {
///     let name = scope.get("name")?;
///     Ok::<_, ExtractError>(name.as_str().unwrap_or_default().to_uppercase())
/// });
///
/// assert_eq!(explicit.value_for(&doc).unwrap(), Value::from("ADA"));
/// assert_eq!(in_context.value_for(&doc).unwrap(), Value::from("ADA"));
/// ```
pub struct BlockExtractor<T: ?Sized> {
    block: Arc<BlockFn<T>>,
    binding: Binding,
}

impl<T: ?Sized + 'static> BlockExtractor<T> {
    /// Wrap an infallible block that takes the object as its argument.
    pub fn new<F, V>(block: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<Value> + 'static,
    {
        Self::try_new(move |object: &T| Ok::<V, BoxError>(block(object)))
    }

    /// Wrap a fallible block that takes the object as its argument.
    pub fn try_new<F, V, E>(block: F) -> Self
    where
        F: Fn(&T) -> std::result::Result<V, E> + Send + Sync + 'static,
        V: Into<Value> + 'static,
        E: Into<BoxError> + 'static,
    {
        Self {
            block: context::with_argument(block),
            binding: Binding::Argument,
        }
    }
}

impl<T: Document + ?Sized + 'static> BlockExtractor<T> {
    /// Wrap a block evaluated in the context of the object.
    pub fn in_context<F, V, E>(block: F) -> Self
    where
        F: Fn(&Scope<'_, T>) -> std::result::Result<V, E> + Send + Sync + 'static,
        V: Into<Value> + 'static,
        E: Into<BoxError> + 'static,
    {
        Self {
            block: context::with_receiver(block),
            binding: Binding::Receiver,
        }
    }
}

impl<T: ?Sized> BlockExtractor<T> {
    /// How the block receives the object.
    pub fn binding(&self) -> Binding {
        self.binding
    }
}

impl<T: ?Sized> Extractor<T> for BlockExtractor<T> {
    fn value_for(&self, object: &T) -> Result<Value> {
        let raw = (self.block)(object).map_err(ExtractError::from_block)?;
        Ok(filter(raw))
    }
}

impl<T: ?Sized> Clone for BlockExtractor<T> {
    fn clone(&self) -> Self {
        Self {
            block: Arc::clone(&self.block),
            binding: self.binding,
        }
    }
}

impl<T: ?Sized> fmt::Debug for BlockExtractor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockExtractor")
            .field("binding", &self.binding)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct Post {
        title: String,
        words: i64,
    }

    impl Document for Post {
        fn attribute(&self, name: &str) -> Option<Value> {
            match name {
                "title" => Some(self.title.clone().into()),
                "words" => Some(self.words.into()),
                _ => None,
            }
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("word count unavailable for {0}")]
    struct WordCountError(String);

    fn post() -> Post {
        Post {
            title: "Hello\u{0}World".into(),
            words: 120,
        }
    }

    #[test]
    fn explicit_block_result_is_filtered() {
        let extractor = BlockExtractor::new(|p: &Post| format!("{}\u{7}!", p.title));
        assert_eq!(extractor.binding(), Binding::Argument);
        assert_eq!(extractor.value_for(&post()).unwrap(), Value::from("HelloWorld!"));
    }

    #[test]
    fn context_block_resolves_names_on_object() {
        let extractor = BlockExtractor::in_context(|scope: &Scope<'_, Post>| {
            let title = scope.get("title")?;
            Ok::<_, ExtractError>(title.as_str().unwrap_or_default().to_uppercase())
        });
        assert_eq!(extractor.binding(), Binding::Receiver);
        assert_eq!(extractor.value_for(&post()).unwrap(), Value::from("HELLOWORLD"));
    }

    #[test]
    fn both_conventions_produce_identical_output() {
        let explicit = BlockExtractor::new(|p: &Post| p.title.to_uppercase());
        let in_context = BlockExtractor::in_context(|scope: &Scope<'_, Post>| {
            Ok::<_, ExtractError>(scope.object().title.to_uppercase())
        });
        assert_eq!(
            explicit.value_for(&post()).unwrap(),
            in_context.value_for(&post()).unwrap()
        );
    }

    #[test]
    fn user_error_propagates_unchanged() {
        let extractor = BlockExtractor::try_new(|p: &Post| {
            if p.words > 100 {
                Err(WordCountError(p.title.clone()))
            } else {
                Ok(p.words)
            }
        });
        let err = extractor.value_for(&post()).unwrap_err();
        assert_eq!(err.to_string(), "word count unavailable for Hello\u{0}World");
        assert!(err.downcast_ref::<WordCountError>().is_some());
    }

    #[test]
    fn missing_attribute_in_context_is_not_wrapped() {
        let extractor =
            BlockExtractor::in_context(|scope: &Scope<'_, Post>| scope.get("summary"));
        let err = extractor.value_for(&post()).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingAttribute { ref attribute } if attribute == "summary"
        ));
    }

    #[test]
    fn block_may_close_over_external_state() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let extractor = BlockExtractor::new(move |p: &Post| {
            counter.fetch_add(1, Ordering::SeqCst);
            p.words
        });

        extractor.value_for(&post()).unwrap();
        extractor.clone().value_for(&post()).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn debug_shows_binding() {
        let extractor = BlockExtractor::new(|p: &Post| p.words);
        assert_eq!(
            format!("{extractor:?}"),
            "BlockExtractor { binding: Argument, .. }"
        );
    }
}
