//! Error types for the `field_extract` crate.

/// A boxed error raised by user-supplied code.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// All errors that can occur while extracting a field value.
///
/// The sanitizing filter itself never fails; these only surface what the
/// inspected object or a user-supplied block reported.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The object does not expose the requested attribute.
    #[error("Missing attribute: {attribute}")]
    MissingAttribute { attribute: String },

    /// A user-supplied block failed. The original error is kept as-is and
    /// can be recovered with [`ExtractError::downcast_ref`].
    #[error(transparent)]
    Block(BoxError),
}

impl ExtractError {
    pub(crate) fn missing(attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            attribute: attribute.into(),
        }
    }

    /// Convert an error coming out of a block without double-wrapping
    /// errors that already are `ExtractError`s.
    pub(crate) fn from_block(err: BoxError) -> Self {
        match err.downcast::<ExtractError>() {
            Ok(inner) => *inner,
            Err(other) => Self::Block(other),
        }
    }

    /// Borrow the original block error as a concrete type.
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Block(err) => err.downcast_ref::<E>(),
            Self::MissingAttribute { .. } => None,
        }
    }
}

/// A type alias for `Result<T, ExtractError>`.
pub type Result<T> = std::result::Result<T, ExtractError>;
