//! Networking modules for the authentication REST call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `client` builds requests, `transport`
//! executes them, `error` classifies failures, and `login` ties the attempt
//! together.

pub mod client;
pub mod error;
pub mod login;
pub mod transport;
pub mod types;
