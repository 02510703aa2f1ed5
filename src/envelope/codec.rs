//! JSON boundary for envelopes.
//!
//! Decoding accepts only JSON objects at the top level and ignores unknown
//! fields, since the voice service evolves independently of skills. Plain
//! encoding never validates; [`ResponseEncoder`] adds limit checks in front
//! of it.

use crate::envelope::{
    domain::{RequestEnvelope, ResponseEnvelope},
    error::CodecError,
    ports::validator::{Enforcement, ResponseValidator, ValidationConfig},
    validation::DefaultResponseValidator,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Decodes a request envelope from a JSON string.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed JSON, missing required fields
/// or wrongly typed fields, and [`CodecError::NotAnObject`] when the
/// document is not a JSON object.
///
/// # Examples
///
/// ```
/// use ask_envelope::envelope::codec::decode_request;
///
/// let envelope = decode_request(
///     r#"{"version":"1.0","request":{"type":"AudioPlayer.PlaybackStarted"},"context":{}}"#,
/// )
/// .expect("valid request");
/// assert!(envelope.session.is_none());
/// ```
pub fn decode_request(input: &str) -> Result<RequestEnvelope, CodecError> {
    let document: Value = serde_json::from_str(input).map_err(CodecError::Decode)?;
    decode_request_value(document)
}

/// Decodes a request envelope from raw JSON bytes.
///
/// # Errors
///
/// See [`decode_request`].
pub fn decode_request_slice(input: &[u8]) -> Result<RequestEnvelope, CodecError> {
    let document: Value = serde_json::from_slice(input).map_err(CodecError::Decode)?;
    decode_request_value(document)
}

/// Decodes a request envelope from an already parsed JSON value.
///
/// # Errors
///
/// See [`decode_request`].
pub fn decode_request_value(document: Value) -> Result<RequestEnvelope, CodecError> {
    let envelope: RequestEnvelope = decode_object(document)?;
    debug!(
        version = %envelope.version,
        request_type = envelope.raw_request_type().unwrap_or("<missing>"),
        has_session = envelope.session.is_some(),
        "decoded request envelope"
    );
    Ok(envelope)
}

/// Decodes a response envelope from a JSON string.
///
/// Skills rarely need this; it lets tests and proxies inspect responses
/// with the same rules applied to requests.
///
/// # Errors
///
/// See [`decode_request`].
pub fn decode_response(input: &str) -> Result<ResponseEnvelope, CodecError> {
    let document: Value = serde_json::from_str(input).map_err(CodecError::Decode)?;
    decode_object(document)
}

/// Encodes a response envelope as a JSON string.
///
/// Empty session attributes and unset optional parts are omitted rather than
/// written as `{}` or `null`.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialisation fails.
///
/// # Examples
///
/// ```
/// use ask_envelope::envelope::codec::encode_response;
/// use ask_envelope::envelope::domain::{Response, ResponseEnvelope};
///
/// let json = encode_response(&ResponseEnvelope::new(Response::new().end_session()))
///     .expect("encodable");
/// assert_eq!(json, r#"{"version":"1.0","response":{"shouldEndSession":true}}"#);
/// ```
pub fn encode_response(envelope: &ResponseEnvelope) -> Result<String, CodecError> {
    let json = serde_json::to_string(envelope).map_err(CodecError::Encode)?;
    debug!(bytes = json.len(), "encoded response envelope");
    Ok(json)
}

/// Encodes a response envelope as JSON bytes.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialisation fails.
pub fn encode_response_vec(envelope: &ResponseEnvelope) -> Result<Vec<u8>, CodecError> {
    let json = serde_json::to_vec(envelope).map_err(CodecError::Encode)?;
    debug!(bytes = json.len(), "encoded response envelope");
    Ok(json)
}

fn decode_object<T: DeserializeOwned>(document: Value) -> Result<T, CodecError> {
    if !document.is_object() {
        return Err(CodecError::NotAnObject {
            found: json_kind(&document),
        });
    }
    serde_json::from_value(document).map_err(CodecError::Decode)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Encoder that checks responses against the service limits first.
///
/// # Examples
///
/// ```
/// use ask_envelope::envelope::codec::ResponseEncoder;
/// use ask_envelope::envelope::domain::{Response, ResponseEnvelope};
/// use ask_envelope::envelope::error::CodecError;
/// use ask_envelope::envelope::ports::validator::ValidationConfig;
///
/// let encoder = ResponseEncoder::from_config(ValidationConfig::strict());
/// let too_long = ResponseEnvelope::new(Response::speak("a".repeat(8001)));
///
/// assert!(matches!(encoder.encode(&too_long), Err(CodecError::Validation(_))));
/// ```
#[derive(Debug, Clone)]
pub struct ResponseEncoder<V = DefaultResponseValidator> {
    validator: V,
    enforcement: Enforcement,
}

impl ResponseEncoder {
    /// Creates an encoder that warns on violations of the service limits.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(ValidationConfig::default())
    }

    /// Creates an encoder backed by the default validator.
    #[must_use]
    pub fn from_config(config: ValidationConfig) -> Self {
        let enforcement = config.enforcement;
        Self {
            validator: DefaultResponseValidator::with_config(config),
            enforcement,
        }
    }
}

impl Default for ResponseEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ResponseValidator> ResponseEncoder<V> {
    /// Creates an encoder around a custom validator.
    #[must_use]
    pub const fn with_validator(validator: V, enforcement: Enforcement) -> Self {
        Self {
            validator,
            enforcement,
        }
    }

    /// Returns the enforcement mode.
    #[must_use]
    pub const fn enforcement(&self) -> Enforcement {
        self.enforcement
    }

    /// Validates and encodes a response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Validation`] if a limit is violated and the
    /// encoder rejects violations, or [`CodecError::Encode`] if serialisation
    /// fails.
    pub fn encode(&self, envelope: &ResponseEnvelope) -> Result<String, CodecError> {
        let json = encode_response(envelope)?;
        self.check(envelope, json.as_bytes())?;
        Ok(json)
    }

    /// Validates and encodes a response envelope as bytes.
    ///
    /// # Errors
    ///
    /// See [`ResponseEncoder::encode`].
    pub fn encode_vec(&self, envelope: &ResponseEnvelope) -> Result<Vec<u8>, CodecError> {
        let json = encode_response_vec(envelope)?;
        self.check(envelope, &json)?;
        Ok(json)
    }

    fn check(&self, envelope: &ResponseEnvelope, encoded: &[u8]) -> Result<(), CodecError> {
        let Err(error) = self.validator.validate_encoded(envelope, encoded) else {
            return Ok(());
        };

        match self.enforcement {
            Enforcement::Reject => Err(CodecError::Validation(error)),
            Enforcement::Warn => {
                for violation in error.errors() {
                    warn!(%violation, "response exceeds a service limit");
                }
                Ok(())
            }
        }
    }
}
