//! Behavioural tests for the request/response exchange between the voice
//! service and a skill.

use ask_envelope::envelope::{
    codec::{ResponseEncoder, decode_request, encode_response},
    domain::{RequestEnvelope, Response, ResponseEnvelope},
    error::{CodecError, ValidationError},
    ports::validator::ValidationConfig,
};
use eyre::{Result, eyre};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

#[derive(Default)]
struct ExchangeWorld {
    request_document: Option<String>,
    decoded_request: Option<RequestEnvelope>,
    response: Option<ResponseEnvelope>,
    encoded_response: Option<Value>,
    encode_error: Option<CodecError>,
}

impl ExchangeWorld {
    fn decoded(&self) -> Result<&RequestEnvelope> {
        self.decoded_request
            .as_ref()
            .ok_or_else(|| eyre!("no decoded request in scenario world"))
    }

    fn encoded(&self) -> Result<&Value> {
        self.encoded_response
            .as_ref()
            .ok_or_else(|| eyre!("no encoded response in scenario world"))
    }

    fn take_response(&mut self) -> Result<ResponseEnvelope> {
        self.response
            .take()
            .ok_or_else(|| eyre!("no response in scenario world"))
    }
}

#[fixture]
fn world() -> ExchangeWorld {
    ExchangeWorld::default()
}

// ============================================================================
// Given
// ============================================================================

#[given(r#"an intent request for "{intent}" in a new session"#)]
fn intent_request_in_new_session(world: &mut ExchangeWorld, intent: String) {
    let document = json!({
        "version": "1.0",
        "session": {"new": true},
        "request": {"type": "IntentRequest", "intent": {"name": intent}},
        "context": {}
    });
    world.request_document = Some(document.to_string());
}

#[given(r#"an intent request for "{intent}" with an unrecognised top-level field"#)]
fn intent_request_with_unknown_field(world: &mut ExchangeWorld, intent: String) {
    let document = json!({
        "version": "1.0",
        "session": {"new": false},
        "request": {"type": "IntentRequest", "intent": {"name": intent}},
        "context": {},
        "experimentalFlags": {"beta": true}
    });
    world.request_document = Some(document.to_string());
}

#[given(r#"an interface event of type "{kind}""#)]
fn interface_event(world: &mut ExchangeWorld, kind: String) {
    let document = json!({
        "version": "1.0",
        "request": {"type": kind, "token": "track-1"},
        "context": {"AudioPlayer": {"playerActivity": "PLAYING"}}
    });
    world.request_document = Some(document.to_string());
}

#[given("a response that ends the session without speech")]
fn response_without_speech(world: &mut ExchangeWorld) {
    world.response = Some(ResponseEnvelope::new(Response::new().end_session()));
}

#[given(r#"a response speaking "{text}""#)]
fn response_speaking(world: &mut ExchangeWorld, text: String) {
    world.response = Some(ResponseEnvelope::new(Response::speak(text)));
}

#[given(r#"the session attribute "{key}" is set"#)]
fn session_attribute_set(world: &mut ExchangeWorld, key: String) -> Result<()> {
    let response = world.take_response()?;
    world.response = Some(response.with_session_attribute(key, json!(1)));
    Ok(())
}

#[given("a response speaking more than 8000 characters")]
fn response_speaking_too_much(world: &mut ExchangeWorld) {
    world.response = Some(ResponseEnvelope::new(Response::speak("a".repeat(8001))));
}

// ============================================================================
// When
// ============================================================================

#[when("the request is decoded")]
fn decode_the_request(world: &mut ExchangeWorld) -> Result<()> {
    let document = world
        .request_document
        .as_deref()
        .ok_or_else(|| eyre!("no request document in scenario world"))?;
    let decoded = decode_request(document).map_err(|err| eyre!("decode failed: {err}"))?;
    world.decoded_request = Some(decoded);
    Ok(())
}

#[when("the response is encoded")]
fn encode_the_response(world: &mut ExchangeWorld) -> Result<()> {
    let response = world.take_response()?;
    let json = encode_response(&response).map_err(|err| eyre!("encode failed: {err}"))?;
    world.encoded_response = Some(serde_json::from_str(&json)?);
    Ok(())
}

#[when("the response is encoded with strict limits")]
fn encode_the_response_strictly(world: &mut ExchangeWorld) -> Result<()> {
    let response = world.take_response()?;
    let encoder = ResponseEncoder::from_config(ValidationConfig::strict());
    world.encode_error = encoder.encode(&response).err();
    Ok(())
}

// ============================================================================
// Then
// ============================================================================

#[then(r#"the request type is "{kind}""#)]
fn request_type_is(world: &ExchangeWorld, kind: String) -> Result<()> {
    let payload = world
        .decoded()?
        .request_payload()
        .map_err(|err| eyre!("payload decode failed: {err}"))?;
    assert_eq!(payload.request_type().as_str(), kind);
    Ok(())
}

#[then(r#"the intent name is "{intent}""#)]
fn intent_name_is(world: &ExchangeWorld, intent: String) -> Result<()> {
    let payload = world
        .decoded()?
        .request_payload()
        .map_err(|err| eyre!("payload decode failed: {err}"))?;
    assert_eq!(payload.intent_name(), Some(intent.as_str()));
    Ok(())
}

#[then("the session is new")]
fn session_is_new(world: &ExchangeWorld) -> Result<()> {
    assert!(world.decoded()?.is_new_session());
    Ok(())
}

#[then("the request has no session")]
fn request_has_no_session(world: &ExchangeWorld) -> Result<()> {
    assert!(world.decoded()?.session.is_none());
    Ok(())
}

#[then(r#"the encoded response has no "{key}" key"#)]
fn encoded_response_lacks_key(world: &ExchangeWorld, key: String) -> Result<()> {
    let encoded = world.encoded()?;
    let found = encoded.get(&key).is_some()
        || encoded
            .get("response")
            .is_some_and(|response| response.get(&key).is_some());
    assert!(!found, "unexpected key {key} in {encoded}");
    Ok(())
}

#[then(r#"the encoded response has a "{key}" key"#)]
fn encoded_response_has_key(world: &ExchangeWorld, key: String) -> Result<()> {
    assert!(world.encoded()?.get(&key).is_some());
    Ok(())
}

#[then("encoding fails with a speech limit violation")]
fn encoding_fails_on_speech(world: &ExchangeWorld) -> Result<()> {
    let error = world
        .encode_error
        .as_ref()
        .ok_or_else(|| eyre!("expected encoding to fail"))?;
    assert!(matches!(
        error,
        CodecError::Validation(ValidationError::SpeechTooLong { .. })
    ));
    Ok(())
}

// ============================================================================
// Scenarios
// ============================================================================

#[scenario(
    path = "tests/features/skill_exchange.feature",
    name = "Intent request opens a new session"
)]
fn intent_request_opens_session(world: ExchangeWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/skill_exchange.feature",
    name = "Audio player event arrives without a session"
)]
fn audio_event_without_session(world: ExchangeWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/skill_exchange.feature",
    name = "Request with unknown fields is still accepted"
)]
fn unknown_fields_accepted(world: ExchangeWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/skill_exchange.feature",
    name = "Skill ends the session without speech or attributes"
)]
fn end_session_without_speech(world: ExchangeWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/skill_exchange.feature",
    name = "Skill keeps state in session attributes"
)]
fn state_in_session_attributes(world: ExchangeWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/skill_exchange.feature",
    name = "Strict encoder refuses over-long speech"
)]
fn strict_encoder_refuses(world: ExchangeWorld) {
    let _ = world;
}
