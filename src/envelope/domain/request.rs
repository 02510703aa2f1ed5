//! Inbound request envelope types.
//!
//! The voice service wraps every request in an envelope carrying the
//! protocol version, the request payload and a context object. The payload
//! and context are kept opaque because their shape depends on the request
//! type and on the optional interfaces the skill declares; callers re-decode
//! them once they know what they are looking at.

use super::RequestType;
use crate::envelope::error::CodecError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attributes of the current conversation with the user.
///
/// Standard request types (`CanFulfillIntentRequest`, `LaunchRequest`,
/// `IntentRequest` and `SessionEndedRequest`) and game engine events carry a
/// session. Audio player and playback controller events are not sent in the
/// context of a session and omit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// `true` when this is the first turn of the session.
    pub new: bool,
}

impl Session {
    /// Creates a session marker.
    #[must_use]
    pub const fn new(new: bool) -> Self {
        Self { new }
    }
}

/// The intent the voice platform extracted from the user's utterance.
///
/// The name must match an intent configured for the skill out of band; it is
/// not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Intent identifier.
    pub name: String,
}

impl Intent {
    /// Creates an intent reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The fields common to every request payload.
///
/// Type-specific fields are ignored during decoding; the full payload stays
/// available on [`RequestEnvelope::request`].
///
/// # Examples
///
/// ```
/// use ask_envelope::envelope::domain::{Request, RequestType};
///
/// let request = Request::intent("HelloWorldIntent");
/// assert_eq!(request.request_type(), RequestType::Intent);
/// assert_eq!(request.intent_name(), Some("HelloWorldIntent"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Request type discriminator, for example `IntentRequest`.
    #[serde(rename = "type")]
    pub kind: String,

    /// The matched intent, present on intent-bearing requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
}

impl Request {
    /// Creates a request of the given type with no intent.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            intent: None,
        }
    }

    /// Creates an `IntentRequest` for the named intent.
    #[must_use]
    pub fn intent(name: impl Into<String>) -> Self {
        Self {
            kind: RequestType::Intent.as_str().to_owned(),
            intent: Some(Intent::new(name)),
        }
    }

    /// Classifies the `type` discriminator.
    #[must_use]
    pub fn request_type(&self) -> RequestType {
        RequestType::from(self.kind.as_str())
    }

    /// Returns the intent name, if the request carries one.
    #[must_use]
    pub fn intent_name(&self) -> Option<&str> {
        self.intent.as_ref().map(|intent| intent.name.as_str())
    }
}

/// The top-level inbound message.
///
/// All requests include `version`, `request` and (in practice) `context` at
/// the top level. `session` is included for standard requests only.
///
/// # Examples
///
/// ```
/// use ask_envelope::envelope::codec::decode_request;
///
/// let envelope = decode_request(
///     r#"{"version":"1.0","session":{"new":true},"request":{"type":"LaunchRequest"},"context":{}}"#,
/// )
/// .expect("valid request");
///
/// assert_eq!(envelope.version, "1.0");
/// assert!(envelope.is_new_session());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Protocol version, expected to be [`super::API_VERSION`].
    pub version: String,

    /// Conversation marker; absent for interface events outside a session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,

    /// The request payload, kept as raw JSON.
    pub request: Value,

    /// The context payload, kept as raw JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl RequestEnvelope {
    /// Creates an envelope around a raw request payload.
    #[must_use]
    pub fn new(version: impl Into<String>, request: Value) -> Self {
        Self {
            version: version.into(),
            session: None,
            request,
            context: None,
        }
    }

    /// Attaches a session marker.
    #[must_use]
    pub const fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Attaches a context payload.
    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }

    /// Returns `true` if the envelope opens a new session.
    ///
    /// Envelopes without a session are never new.
    #[must_use]
    pub fn is_new_session(&self) -> bool {
        self.session.is_some_and(|session| session.new)
    }

    /// Returns the raw `request.type` value without decoding the payload.
    #[must_use]
    pub fn raw_request_type(&self) -> Option<&str> {
        self.request.get("type").and_then(Value::as_str)
    }

    /// Decodes the common request fields out of the opaque payload.
    ///
    /// The payload itself is left untouched, so it can be decoded again into
    /// a caller-defined type-specific shape.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decode`] if the payload has no string `type`
    /// field or if `intent` is malformed.
    pub fn request_payload(&self) -> Result<Request, CodecError> {
        Request::deserialize(&self.request).map_err(CodecError::Decode)
    }

    /// Decodes the opaque request payload into a caller-supplied shape.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decode`] if the payload does not match `T`.
    pub fn request_as<T>(&self) -> Result<T, CodecError>
    where
        T: for<'de> Deserialize<'de>,
    {
        T::deserialize(&self.request).map_err(CodecError::Decode)
    }

    /// Decodes the opaque context payload into a caller-supplied shape.
    ///
    /// Returns `Ok(None)` when the envelope carries no context.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decode`] if the context does not match `T`.
    pub fn context_as<T>(&self) -> Result<Option<T>, CodecError>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.context
            .as_ref()
            .map(|context| T::deserialize(context).map_err(CodecError::Decode))
            .transpose()
    }
}
