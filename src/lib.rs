//! Wire-format envelopes for voice-assistant skills.
//!
//! This crate provides the JSON data contract between a voice-assistant
//! service and the skills it calls: inbound request envelopes carrying the
//! session, request and context, and outbound response envelopes carrying
//! speech, cards and session attributes.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure record types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for validation
//! - **Adapters**: The JSON codec and the default validator
//!
//! # Modules
//!
//! - [`envelope`]: Envelope types, codec and size-limit validation

pub mod envelope;
