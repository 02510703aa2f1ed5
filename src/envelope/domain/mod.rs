//! Domain types for the envelope schema.
//!
//! This module contains pure record types with no infrastructure
//! dependencies. Every type is constructed fresh per request/response cycle
//! and serialisable via serde with the exact JSON keys the voice service
//! expects.

mod card;
mod constants;
mod request;
mod request_type;
mod response;
mod speech;

pub use card::{Card, CardImage};
pub use constants::{API_VERSION, PLAIN_TEXT};
pub use request::{Intent, Request, RequestEnvelope, Session};
pub use request_type::RequestType;
pub use response::{Response, ResponseEnvelope};
pub use speech::{OutputSpeech, Reprompt};
