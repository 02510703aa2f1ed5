//! Error types for envelope encoding, decoding and validation.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use thiserror::Error;

/// Errors raised at the JSON boundary.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The document is not valid JSON or does not match the envelope shape.
    #[error("failed to decode envelope: {0}")]
    Decode(#[source] serde_json::Error),

    /// The document is valid JSON but its top level is not an object.
    #[error("envelope must be a JSON object, found {found}")]
    NotAnObject {
        /// The JSON kind found at the top level.
        found: &'static str,
    },

    /// The envelope could not be serialised.
    #[error("failed to encode envelope: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response violates the configured size limits.
    #[error("response rejected: {0}")]
    Validation(#[from] ValidationError),
}

/// Size-limit and version violations found in an outbound response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Speech text exceeds the character limit.
    #[error("{field} text has {actual} characters, exceeds limit of {limit}")]
    SpeechTooLong {
        /// The response property holding the speech.
        field: &'static str,
        /// The actual character count.
        actual: usize,
        /// The maximum allowed character count.
        limit: usize,
    },

    /// Card text, image URLs included, exceeds the character limit.
    #[error("card text has {actual} characters, exceeds limit of {limit}")]
    CardTooLong {
        /// The actual character count.
        actual: usize,
        /// The maximum allowed character count.
        limit: usize,
    },

    /// A card image URL exceeds the character limit.
    #[error("{field} has {actual} characters, exceeds limit of {limit}")]
    ImageUrlTooLong {
        /// The image property holding the URL.
        field: &'static str,
        /// The actual character count.
        actual: usize,
        /// The maximum allowed character count.
        limit: usize,
    },

    /// An audio stream token exceeds the character limit.
    #[error("audio stream token has {actual} characters, exceeds limit of {limit}")]
    AudioTokenTooLong {
        /// The actual character count.
        actual: usize,
        /// The maximum allowed character count.
        limit: usize,
    },

    /// An audio stream URL exceeds the character limit.
    #[error("audio stream url has {actual} characters, exceeds limit of {limit}")]
    AudioUrlTooLong {
        /// The actual character count.
        actual: usize,
        /// The maximum allowed character count.
        limit: usize,
    },

    /// The serialised response exceeds the total size limit.
    #[error("response size {actual_bytes} exceeds limit of {limit_bytes} bytes")]
    ResponseTooLarge {
        /// The actual size in bytes.
        actual_bytes: usize,
        /// The maximum allowed size.
        limit_bytes: usize,
    },

    /// The envelope carries a version other than the protocol version.
    #[error("unexpected envelope version '{0}'")]
    UnexpectedVersion(String),

    /// The response could not be serialised to measure its size.
    #[error("failed to serialise response: {0}")]
    Serialization(String),

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Combines multiple validation errors into a single error.
    ///
    /// If only one error is provided, returns it directly rather than
    /// wrapping. Nested `Multiple` values are flattened.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if called with an empty vector, as this
    /// indicates a logic error in the caller. In release builds, returns a
    /// `Serialization` variant describing the misuse.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Self {
        let mut flattened = Vec::with_capacity(errors.len());
        for error in errors {
            match error {
                Self::Multiple(inner) => flattened.extend(inner),
                other => flattened.push(other),
            }
        }

        match flattened.len() {
            0 => {
                debug_assert!(false, "multiple() called with empty errors vector");
                Self::Serialization("internal error: no validation errors".into())
            }
            1 => flattened.into_iter().next().unwrap_or_else(|| {
                Self::Serialization("internal error: no validation errors".into())
            }),
            _ => Self::Multiple(flattened),
        }
    }

    /// Returns `true` if this error represents multiple validation failures.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Returns the individual errors, a single-element slice for non-`Multiple`
    /// variants.
    #[must_use]
    pub fn errors(&self) -> &[Self] {
        match self {
            Self::Multiple(errors) => errors,
            single => std::slice::from_ref(single),
        }
    }
}
