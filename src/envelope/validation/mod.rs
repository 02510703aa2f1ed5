//! Response validation implementation.
//!
//! This module provides the default implementation of response validation,
//! including individual limit rules and the composite validator service.
//! Nothing here runs implicitly: plain encoding never validates.

pub mod rules;
pub mod service;

pub use service::DefaultResponseValidator;
