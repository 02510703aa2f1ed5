//! Speech content returned to the user.

use super::PLAIN_TEXT;
use serde::{Deserialize, Serialize};

/// Speech rendered to the user.
///
/// Used for both the `outputSpeech` and the `reprompt` properties of a
/// response, and only valid in responses to `CanFulfillIntentRequest`,
/// `LaunchRequest`, `IntentRequest` or game engine input events.
///
/// The service rejects text longer than 8000 characters. The type itself
/// accepts any length; see
/// [`crate::envelope::validation::DefaultResponseValidator`] for local checks.
///
/// # Examples
///
/// ```
/// use ask_envelope::envelope::domain::{OutputSpeech, PLAIN_TEXT};
///
/// let speech = OutputSpeech::plain_text("Hello there");
/// assert_eq!(speech.kind, PLAIN_TEXT);
/// assert_eq!(speech.char_count(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpeech {
    /// Speech type tag, for example [`PLAIN_TEXT`].
    #[serde(rename = "type")]
    pub kind: String,

    /// The literal text to speak.
    pub text: String,
}

impl OutputSpeech {
    /// Creates speech with an explicit type tag.
    #[must_use]
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }

    /// Creates plain-text speech.
    #[must_use]
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self::new(PLAIN_TEXT, text)
    }

    /// Returns the text length in characters, the unit the service limits.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Speech played when the user does not answer after the session was kept
/// open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    /// The reprompt speech.
    pub output_speech: OutputSpeech,
}

impl Reprompt {
    /// Creates a plain-text reprompt.
    #[must_use]
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            output_speech: OutputSpeech::plain_text(text),
        }
    }
}

impl From<OutputSpeech> for Reprompt {
    fn from(output_speech: OutputSpeech) -> Self {
        Self { output_speech }
    }
}
