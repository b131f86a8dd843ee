//! Base types and error handling.
//!
//! - [`ConsentError`](error::ConsentError): configuration and response errors
//! - [`IoResultExt`](context::IoResultExt): IO error context helpers

pub mod context;
pub mod error;

#[cfg(test)]
mod tests;
