//! Individual validation rule implementations.
//!
//! Each rule is implemented as a pure function that checks one documented
//! service limit. Rules return `Ok(())` on success or a specific
//! `ValidationError` on failure.

use crate::envelope::{
    domain::{API_VERSION, Card, OutputSpeech, ResponseEnvelope},
    error::ValidationError,
    ports::validator::ValidationConfig,
};

/// Validates that the envelope carries the protocol version.
///
/// # Errors
///
/// Returns `ValidationError::UnexpectedVersion` for any other version.
pub fn validate_version(envelope: &ResponseEnvelope) -> Result<(), ValidationError> {
    if envelope.version != API_VERSION {
        return Err(ValidationError::UnexpectedVersion(envelope.version.clone()));
    }
    Ok(())
}

/// Validates the text length of one speech property.
///
/// `field` names the response property (`outputSpeech` or `reprompt`) for
/// the error message.
///
/// # Errors
///
/// Returns `ValidationError::SpeechTooLong` if the text exceeds the limit.
pub fn validate_speech_text(
    speech: &OutputSpeech,
    field: &'static str,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let actual = speech.char_count();
    if actual > config.max_speech_chars {
        return Err(ValidationError::SpeechTooLong {
            field,
            actual,
            limit: config.max_speech_chars,
        });
    }
    Ok(())
}

/// Validates the total text length of a card.
///
/// # Errors
///
/// Returns `ValidationError::CardTooLong` if the title, body and image URLs
/// together exceed the limit.
pub fn validate_card_text(card: &Card, config: &ValidationConfig) -> Result<(), ValidationError> {
    let actual = card.char_count();
    if actual > config.max_card_chars {
        return Err(ValidationError::CardTooLong {
            actual,
            limit: config.max_card_chars,
        });
    }
    Ok(())
}

/// Validates each image URL of a card.
///
/// # Errors
///
/// Returns `ValidationError::ImageUrlTooLong`, or `Multiple` when both URLs
/// are over the limit.
pub fn validate_card_images(card: &Card, config: &ValidationConfig) -> Result<(), ValidationError> {
    let Some(image) = card.image() else {
        return Ok(());
    };

    let errors: Vec<ValidationError> = [
        ("smallImageUrl", image.small_image_url.as_deref()),
        ("largeImageUrl", image.large_image_url.as_deref()),
    ]
    .into_iter()
    .filter_map(|(field, url)| {
        let actual = url?.chars().count();
        (actual > config.max_image_url_chars).then_some(ValidationError::ImageUrlTooLong {
            field,
            actual,
            limit: config.max_image_url_chars,
        })
    })
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::multiple(errors))
    }
}

/// Validates the token and URL of an audio stream.
///
/// Audio player directives are built outside this crate; skills that emit
/// them can check the stream reference against the service limits here.
///
/// # Errors
///
/// Returns `ValidationError::AudioTokenTooLong` and/or
/// `ValidationError::AudioUrlTooLong`, combined with `Multiple` when both
/// fail.
///
/// # Examples
///
/// ```
/// use ask_envelope::envelope::ports::validator::ValidationConfig;
/// use ask_envelope::envelope::validation::rules::validate_audio_stream;
///
/// let config = ValidationConfig::default();
/// assert!(validate_audio_stream("track-1", "https://cdn.example.com/1.mp3", &config).is_ok());
/// assert!(validate_audio_stream(&"t".repeat(1025), "https://cdn.example.com/1.mp3", &config).is_err());
/// ```
pub fn validate_audio_stream(
    token: &str,
    url: &str,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    let token_chars = token.chars().count();
    if token_chars > config.max_audio_token_chars {
        errors.push(ValidationError::AudioTokenTooLong {
            actual: token_chars,
            limit: config.max_audio_token_chars,
        });
    }

    let url_chars = url.chars().count();
    if url_chars > config.max_audio_url_chars {
        errors.push(ValidationError::AudioUrlTooLong {
            actual: url_chars,
            limit: config.max_audio_url_chars,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::multiple(errors))
    }
}

/// Validates that the serialised envelope does not exceed the size limit.
///
/// # Errors
///
/// Returns `ValidationError::ResponseTooLarge` if the serialised envelope
/// exceeds the configured limit, or `ValidationError::Serialization` if it
/// cannot be serialised at all.
pub fn validate_response_size(
    envelope: &ResponseEnvelope,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let serialized =
        serde_json::to_vec(envelope).map_err(|e| ValidationError::Serialization(e.to_string()))?;
    validate_encoded_size(serialized.len(), config)
}

/// Validates the byte length of an already serialised envelope.
///
/// # Errors
///
/// Returns `ValidationError::ResponseTooLarge` if `actual_bytes` exceeds the
/// configured limit.
pub const fn validate_encoded_size(
    actual_bytes: usize,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    if actual_bytes > config.max_response_bytes {
        return Err(ValidationError::ResponseTooLarge {
            actual_bytes,
            limit_bytes: config.max_response_bytes,
        });
    }
    Ok(())
}
