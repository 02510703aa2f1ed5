//! Request and response envelopes for voice-assistant skills.
//!
//! This module implements the wire-format data model exchanged between the
//! voice service and a skill, the JSON boundary around it and the checks for
//! the size limits the service enforces.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure record types ([`domain::RequestEnvelope`], [`domain::ResponseEnvelope`], [`domain::OutputSpeech`], etc.)
//! - **Codec**: JSON decode/encode entry points ([`codec::decode_request`], [`codec::encode_response`], [`codec::ResponseEncoder`])
//! - **Ports**: Abstract trait interfaces ([`ports::validator::ResponseValidator`])
//! - **Validation**: Service limit enforcement at the outbound boundary
//!
//! # Example
//!
//! ```
//! use ask_envelope::envelope::codec::{decode_request, encode_response};
//! use ask_envelope::envelope::domain::{RequestType, Response, ResponseEnvelope};
//! use serde_json::json;
//!
//! let request = decode_request(
//!     r#"{"version":"1.0","session":{"new":true},"request":{"type":"IntentRequest","intent":{"name":"HelloIntent"}},"context":{}}"#,
//! )
//! .expect("valid request");
//! let payload = request.request_payload().expect("typed payload");
//! assert_eq!(payload.request_type(), RequestType::Intent);
//!
//! let response = ResponseEnvelope::new(Response::speak("Hello!"))
//!     .with_session_attribute("greeted", json!(true));
//! let json = encode_response(&response).expect("encodable");
//! assert!(json.contains(r#""sessionAttributes":{"greeted":true}"#));
//! ```

pub mod codec;
pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

#[cfg(test)]
mod tests;
