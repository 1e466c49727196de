//! DynamoDB session utilities
//!
//! This crate builds configured DynamoDB clients (retry policy, timeouts,
//! endpoint override for local development) and provides the classifying call
//! wrapper that logs every failing AWS call exactly once before propagating
//! the error to the caller.

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

pub mod classify;
mod error;
pub mod probe;
pub mod session;

pub use error::{SessionError, SessionResult};
