//! Configuration and shared error types for rsodata.
//!
//! This crate holds the pieces every other rsodata crate needs: the
//! environment-driven [`ODataConfig`] and the infrastructure error type.

mod config;
mod error;

pub use config::ODataConfig;
pub use error::{RsODataError, RsODataResult};
