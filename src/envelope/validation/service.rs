//! Validation service implementation.
//!
//! Provides the default implementation of the `ResponseValidator` port,
//! combining individual validation rules into a comprehensive validator.

use crate::envelope::{
    domain::{Card, Response, ResponseEnvelope},
    error::ValidationError,
    ports::validator::{ResponseValidator, ValidationConfig, ValidationResult},
    validation::rules,
};

/// Default implementation of the response validator.
///
/// Applies all validation rules in order, collecting errors to provide
/// comprehensive feedback rather than failing on the first error.
///
/// # Examples
///
/// ```
/// use ask_envelope::envelope::domain::{Response, ResponseEnvelope};
/// use ask_envelope::envelope::ports::validator::ResponseValidator;
/// use ask_envelope::envelope::validation::service::DefaultResponseValidator;
///
/// let envelope = ResponseEnvelope::new(Response::speak("Hello").end_session());
///
/// let validator = DefaultResponseValidator::new();
/// assert!(validator.validate(&envelope).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DefaultResponseValidator {
    config: ValidationConfig,
}

impl DefaultResponseValidator {
    /// Creates a new validator with the service limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl DefaultResponseValidator {
    fn collect(
        &self,
        envelope: &ResponseEnvelope,
        size: ValidationResult<()>,
    ) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = rules::validate_version(envelope) {
            errors.push(e);
        }

        if let Err(e) = self.validate_speech(&envelope.response) {
            errors.push(e);
        }

        if let Some(card) = envelope.response.card.as_ref()
            && let Err(e) = self.validate_card(card)
        {
            errors.push(e);
        }

        if let Err(e) = size {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::multiple(errors))
        }
    }
}

impl Default for DefaultResponseValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseValidator for DefaultResponseValidator {
    fn validate(&self, envelope: &ResponseEnvelope) -> ValidationResult<()> {
        self.collect(envelope, self.validate_size(envelope))
    }

    fn validate_encoded(
        &self,
        envelope: &ResponseEnvelope,
        encoded: &[u8],
    ) -> ValidationResult<()> {
        self.collect(
            envelope,
            rules::validate_encoded_size(encoded.len(), &self.config),
        )
    }

    fn validate_speech(&self, response: &Response) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Some(speech) = response.output_speech.as_ref()
            && let Err(e) = rules::validate_speech_text(speech, "outputSpeech", &self.config)
        {
            errors.push(e);
        }

        if let Some(reprompt) = response.reprompt.as_ref()
            && let Err(e) =
                rules::validate_speech_text(&reprompt.output_speech, "reprompt", &self.config)
        {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::multiple(errors))
        }
    }

    fn validate_card(&self, card: &Card) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = rules::validate_card_text(card, &self.config) {
            errors.push(e);
        }

        if let Err(e) = rules::validate_card_images(card, &self.config) {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::multiple(errors))
        }
    }

    fn validate_size(&self, envelope: &ResponseEnvelope) -> ValidationResult<()> {
        rules::validate_response_size(envelope, &self.config)
    }
}
