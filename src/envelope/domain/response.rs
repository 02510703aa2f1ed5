//! Outbound response envelope types.

use super::{API_VERSION, Card, OutputSpeech, Reprompt};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// What to render to the user and whether to end the current session.
///
/// Optional parts are omitted from the JSON entirely when unset; the service
/// parser treats an explicit `null` differently from a missing key.
///
/// # Examples
///
/// ```
/// use ask_envelope::envelope::domain::Response;
///
/// let response = Response::speak("Goodbye").end_session();
/// assert!(response.should_end_session);
/// assert_eq!(
///     response.output_speech.as_ref().map(|speech| speech.text.as_str()),
///     Some("Goodbye"),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// `true` to close the session after this response.
    pub should_end_session: bool,

    /// Speech to render, omitted when the skill has nothing to say.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,

    /// Speech to render if the user does not reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,

    /// Card for the companion app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
}

impl Response {
    /// Creates an empty response that keeps the session open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a response speaking plain text.
    #[must_use]
    pub fn speak(text: impl Into<String>) -> Self {
        Self::new().with_output_speech(OutputSpeech::plain_text(text))
    }

    /// Sets the output speech.
    #[must_use]
    pub fn with_output_speech(mut self, speech: OutputSpeech) -> Self {
        self.output_speech = Some(speech);
        self
    }

    /// Sets the reprompt.
    #[must_use]
    pub fn with_reprompt(mut self, reprompt: impl Into<Reprompt>) -> Self {
        self.reprompt = Some(reprompt.into());
        self
    }

    /// Sets the card.
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    /// Marks the session to be closed after this response.
    #[must_use]
    pub const fn end_session(mut self) -> Self {
        self.should_end_session = true;
        self
    }
}

/// The top-level response object returned by the skill.
///
/// The service rejects responses whose serialised form exceeds 24 kilobytes,
/// along with the per-field limits documented on
/// [`crate::envelope::ports::validator::ValidationConfig`].
///
/// # Examples
///
/// ```
/// use ask_envelope::envelope::domain::{API_VERSION, Response, ResponseEnvelope};
/// use serde_json::json;
///
/// let envelope = ResponseEnvelope::new(Response::speak("Hi"))
///     .with_session_attribute("turns", json!(1));
///
/// assert_eq!(envelope.version, API_VERSION);
/// assert_eq!(envelope.session_attribute("turns"), Some(&json!(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// Protocol version, normally [`API_VERSION`].
    pub version: String,

    /// State carried to the next request of the session; omitted when empty.
    ///
    /// Keys serialise in sorted order, so equal envelopes encode to equal
    /// bytes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub session_attributes: BTreeMap<String, Value>,

    /// The response body.
    pub response: Response,
}

impl ResponseEnvelope {
    /// Wraps a response with the current protocol version and no session
    /// attributes.
    #[must_use]
    pub fn new(response: Response) -> Self {
        Self {
            version: API_VERSION.to_owned(),
            session_attributes: BTreeMap::new(),
            response,
        }
    }

    /// Adds or replaces a session attribute.
    #[must_use]
    pub fn with_session_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.session_attributes.insert(key.into(), value);
        self
    }

    /// Returns a session attribute by key.
    #[must_use]
    pub fn session_attribute(&self, key: &str) -> Option<&Value> {
        self.session_attributes.get(key)
    }
}

impl From<Response> for ResponseEnvelope {
    fn from(response: Response) -> Self {
        Self::new(response)
    }
}
