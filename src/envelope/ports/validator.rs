//! Validator port for outbound responses.
//!
//! Defines the abstract interface for checking a response against the size
//! limits the voice service enforces, and the configuration those checks
//! read.

use crate::envelope::{
    domain::{Card, Response, ResponseEnvelope},
    error::ValidationError,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for response validation operations.
///
/// Validation occurs in layers:
/// 1. Speech (output speech and reprompt text)
/// 2. Card (total text and image URLs)
/// 3. Envelope (version and total serialised size)
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect all validation errors before returning (not fail-fast)
/// - Use `ValidationError::multiple` to combine errors
/// - Be stateless and thread-safe
pub trait ResponseValidator: Send + Sync {
    /// Validates an envelope against all rules.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any rule fails. Multiple failures are
    /// combined using `ValidationError::Multiple`.
    fn validate(&self, envelope: &ResponseEnvelope) -> ValidationResult<()>;

    /// Validates the speech parts of a response.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::SpeechTooLong` for each speech property
    /// over the limit.
    fn validate_speech(&self, response: &Response) -> ValidationResult<()>;

    /// Validates a card.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the card text or an image URL is over
    /// its limit.
    fn validate_card(&self, card: &Card) -> ValidationResult<()>;

    /// Validates the serialised size of the whole envelope.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ResponseTooLarge` if the envelope exceeds
    /// the size limit.
    fn validate_size(&self, envelope: &ResponseEnvelope) -> ValidationResult<()>;

    /// Validates an envelope whose serialised form is already at hand.
    ///
    /// The bytes must be the serialisation of `envelope`. Implementations
    /// should measure it instead of serialising the envelope again; the
    /// provided method falls back to [`ResponseValidator::validate`].
    ///
    /// # Errors
    ///
    /// As for [`ResponseValidator::validate`].
    fn validate_encoded(
        &self,
        envelope: &ResponseEnvelope,
        _encoded: &[u8],
    ) -> ValidationResult<()> {
        self.validate(envelope)
    }
}

/// What to do with a response that violates a limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Enforcement {
    /// Log the violations and send the response anyway; the service will
    /// reject it.
    #[default]
    Warn,
    /// Refuse to encode the response.
    Reject,
}

/// Limits applied by response validation.
///
/// The defaults are the limits the voice service documents. Lengths are in
/// characters except for `max_response_bytes`.
///
/// # Examples
///
/// ```
/// use ask_envelope::envelope::ports::validator::{Enforcement, ValidationConfig};
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_speech_chars, 8000);
/// assert_eq!(config.enforcement, Enforcement::Warn);
///
/// let strict = ValidationConfig::strict();
/// assert_eq!(strict.enforcement, Enforcement::Reject);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Maximum output speech and reprompt text length.
    pub max_speech_chars: usize,
    /// Maximum card text length, title and image URLs included.
    pub max_card_chars: usize,
    /// Maximum length of each card image URL.
    pub max_image_url_chars: usize,
    /// Maximum audio stream token length.
    pub max_audio_token_chars: usize,
    /// Maximum audio stream URL length.
    pub max_audio_url_chars: usize,
    /// Maximum serialised response size in bytes.
    pub max_response_bytes: usize,
    /// Handling of violations during checked encoding.
    pub enforcement: Enforcement,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_speech_chars: 8000,
            max_card_chars: 8000,
            max_image_url_chars: 2000,
            max_audio_token_chars: 1024,
            max_audio_url_chars: 8000,
            max_response_bytes: 24 * 1024, // 24 KiB
            enforcement: Enforcement::Warn,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration that rejects responses over the service
    /// limits instead of only logging them.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            enforcement: Enforcement::Reject,
            ..Default::default()
        }
    }

    /// Creates a configuration with every limit disabled.
    ///
    /// Useful for testing or when the payload is not bound for the voice
    /// service.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            max_speech_chars: usize::MAX,
            max_card_chars: usize::MAX,
            max_image_url_chars: usize::MAX,
            max_audio_token_chars: usize::MAX,
            max_audio_url_chars: usize::MAX,
            max_response_bytes: usize::MAX,
            enforcement: Enforcement::Warn,
        }
    }

    /// Sets the enforcement mode.
    #[must_use]
    pub const fn with_enforcement(mut self, enforcement: Enforcement) -> Self {
        self.enforcement = enforcement;
        self
    }
}
