//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Layer composition
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Token, repository and organization resolution tests
//! - `loading`: Environment and CLI loading tests

mod helpers;
