//! # Utility Functions
//!
//! - **[`validation`]**: client-side checks run before any network call
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: wire decoding helpers
//! - [`crate::core`]: error types

pub mod validation;
