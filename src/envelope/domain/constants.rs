//! Protocol-wide constants.

/// Protocol version carried by every envelope.
///
/// Outbound envelopes built with [`super::ResponseEnvelope::new`] populate
/// their `version` field with this value.
pub const API_VERSION: &str = "1.0";

/// Output speech type tag for plain (non-SSML) text.
pub const PLAIN_TEXT: &str = "PlainText";
