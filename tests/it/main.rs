//! Single test binary entry point.
//!
//! Structure:
//! - helpers: tracker harness and builder
//! - integration: full press/move/release workflows through the event surface
//! - unit: single-module tests against the public API

mod helpers;
mod unit;
