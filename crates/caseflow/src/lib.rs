//! Domain library backing the AML case-review triage service.
//!
//! The crate hosts two independent, stateless cores: the client
//! recommendation engine and the review-board transition policy. The
//! `workflows::casework` module composes them behind a service facade
//! and an HTTP router; `config`, `telemetry`, and `error` carry the
//! ambient service plumbing.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
