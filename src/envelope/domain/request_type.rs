//! Classification of the inbound request discriminator.

use std::fmt;

/// The kind of inbound request, derived from the `request.type` field.
///
/// The voice service sends one of the standard request types when a user
/// engages the skill by voice. Skills that declare optional interfaces
/// (audio player, playback controller, game engine) also receive interface
/// events; these, and any type introduced after this crate was written, are
/// kept verbatim in [`RequestType::Other`].
///
/// # Examples
///
/// ```
/// use ask_envelope::envelope::domain::RequestType;
///
/// assert_eq!(RequestType::from("IntentRequest"), RequestType::Intent);
/// assert_eq!(
///     RequestType::from("AudioPlayer.PlaybackStarted"),
///     RequestType::Other("AudioPlayer.PlaybackStarted".to_owned()),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestType {
    /// The user invoked the skill without a specific intent.
    Launch,
    /// The user made a request matching a configured intent.
    Intent,
    /// The session ended for a reason other than the skill closing it.
    SessionEnded,
    /// The service is asking whether the skill could fulfil an intent.
    CanFulfillIntent,
    /// Any other request type, including optional-interface events.
    Other(String),
}

impl RequestType {
    /// Returns the wire representation of the request type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Launch => "LaunchRequest",
            Self::Intent => "IntentRequest",
            Self::SessionEnded => "SessionEndedRequest",
            Self::CanFulfillIntent => "CanFulfillIntentRequest",
            Self::Other(value) => value,
        }
    }

    /// Returns `true` for the four standard request types, which are always
    /// delivered inside a session.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for RequestType {
    fn from(value: &str) -> Self {
        match value {
            "LaunchRequest" => Self::Launch,
            "IntentRequest" => Self::Intent,
            "SessionEndedRequest" => Self::SessionEnded,
            "CanFulfillIntentRequest" => Self::CanFulfillIntent,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
