//! Unit tests for the envelope module.
//!
//! Tests are organised by concern, covering the JSON contract, the typed
//! request view and the service limit checks.

mod request_tests;
