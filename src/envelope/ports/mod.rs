//! Port definitions for the envelope module.
//!
//! Ports are abstract trait interfaces that adapters or services implement.

pub mod validator;
