//! Unit tests for the inbound request types.

use super::envelope_fixtures::INTENT_REQUEST_JSON;
use crate::envelope::{
    codec::decode_request,
    domain::{Intent, Request, RequestEnvelope, RequestType, Session},
    error::CodecError,
};
use rstest::rstest;
use serde::Deserialize;
use serde_json::json;

// ============================================================================
// RequestType tests
// ============================================================================

#[rstest]
#[case("LaunchRequest", RequestType::Launch)]
#[case("IntentRequest", RequestType::Intent)]
#[case("SessionEndedRequest", RequestType::SessionEnded)]
#[case("CanFulfillIntentRequest", RequestType::CanFulfillIntent)]
fn request_type_recognises_standard_types(#[case] wire: &str, #[case] expected: RequestType) {
    let kind = RequestType::from(wire);
    assert_eq!(kind, expected);
    assert!(kind.is_standard());
    assert_eq!(kind.as_str(), wire);
}

#[rstest]
#[case("AudioPlayer.PlaybackStarted")]
#[case("PlaybackController.NextCommandIssued")]
#[case("GameEngine.InputHandlerEvent")]
#[case("intentrequest")]
fn request_type_keeps_unknown_types_verbatim(#[case] wire: &str) {
    let kind = RequestType::from(wire);
    assert_eq!(kind, RequestType::Other(wire.to_owned()));
    assert!(!kind.is_standard());
    assert_eq!(kind.to_string(), wire);
}

// ============================================================================
// Request tests
// ============================================================================

#[rstest]
fn request_intent_constructor_sets_type_and_name() {
    let request = Request::intent("PlayIntent");
    assert_eq!(request.kind, "IntentRequest");
    assert_eq!(request.intent, Some(Intent::new("PlayIntent")));
    assert_eq!(request.intent_name(), Some("PlayIntent"));
}

#[rstest]
fn request_without_intent_has_no_intent_name() {
    let request = Request::new("LaunchRequest");
    assert_eq!(request.request_type(), RequestType::Launch);
    assert_eq!(request.intent_name(), None);
}

#[rstest]
fn request_serialisation_omits_missing_intent() {
    let value = serde_json::to_value(Request::new("LaunchRequest")).expect("serialise");
    assert_eq!(value, json!({"type": "LaunchRequest"}));
}

// ============================================================================
// RequestEnvelope tests
// ============================================================================

#[rstest]
fn envelope_is_new_session_follows_session_flag() {
    let base = RequestEnvelope::new("1.0", json!({"type": "LaunchRequest"}));
    assert!(!base.is_new_session());
    assert!(base.clone().with_session(Session::new(true)).is_new_session());
    assert!(!base.with_session(Session::new(false)).is_new_session());
}

#[rstest]
fn envelope_exposes_raw_request_type() {
    let envelope = decode_request(INTENT_REQUEST_JSON).expect("decode");
    assert_eq!(envelope.raw_request_type(), Some("IntentRequest"));

    let untyped = RequestEnvelope::new("1.0", json!({}));
    assert_eq!(untyped.raw_request_type(), None);
}

#[rstest]
fn envelope_request_payload_decodes_intent() {
    let envelope = RequestEnvelope::new(
        "1.0",
        json!({
            "type": "IntentRequest",
            "requestId": "amzn1.echo-api.request.1",
            "intent": {"name": "WeatherIntent", "confirmationStatus": "NONE"}
        }),
    );

    let payload = envelope.request_payload().expect("payload should decode");
    assert_eq!(payload.request_type(), RequestType::Intent);
    assert_eq!(payload.intent_name(), Some("WeatherIntent"));
}

#[rstest]
fn envelope_request_payload_rejects_missing_type() {
    let envelope = RequestEnvelope::new("1.0", json!({"intent": {"name": "X"}}));
    assert!(matches!(
        envelope.request_payload(),
        Err(CodecError::Decode(_))
    ));
}

#[rstest]
fn envelope_request_payload_leaves_raw_payload_intact() {
    let raw = json!({
        "type": "SessionEndedRequest",
        "reason": "USER_INITIATED",
        "error": {"type": "INVALID_RESPONSE", "message": "bad"}
    });
    let envelope = RequestEnvelope::new("1.0", raw.clone());

    let _ = envelope.request_payload().expect("payload should decode");
    assert_eq!(envelope.request, raw);
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct SessionEnded {
    reason: String,
}

#[rstest]
fn envelope_request_as_decodes_type_specific_shape() {
    let envelope = RequestEnvelope::new(
        "1.0",
        json!({"type": "SessionEndedRequest", "reason": "EXCEEDED_MAX_REPROMPTS"}),
    );
    let ended: SessionEnded = envelope.request_as().expect("type-specific decode");
    assert_eq!(ended.reason, "EXCEEDED_MAX_REPROMPTS");
}

#[derive(Debug, Deserialize)]
struct Context {
    #[serde(rename = "System")]
    system: System,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct System {
    api_endpoint: String,
}

#[rstest]
fn envelope_context_as_decodes_present_context() {
    let envelope = RequestEnvelope::new("1.0", json!({"type": "LaunchRequest"})).with_context(
        json!({"System": {"apiEndpoint": "https://api.example.com", "device": {}}}),
    );

    let context: Option<Context> = envelope.context_as().expect("context decodes");
    assert_eq!(
        context.map(|c| c.system.api_endpoint),
        Some("https://api.example.com".to_owned())
    );
}

#[rstest]
fn envelope_context_as_returns_none_without_context() {
    let envelope = RequestEnvelope::new("1.0", json!({"type": "LaunchRequest"}));
    let decoded: Option<serde_json::Value> = envelope.context_as().expect("no context");
    assert!(decoded.is_none());
}

#[rstest]
fn envelope_serialisation_omits_absent_session_and_context() {
    let envelope = RequestEnvelope::new("1.0", json!({"type": "LaunchRequest"}));
    let value = serde_json::to_value(&envelope).expect("serialise");
    assert_eq!(
        value,
        json!({"version": "1.0", "request": {"type": "LaunchRequest"}})
    );
}
