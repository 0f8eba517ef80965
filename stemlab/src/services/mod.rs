//! # External Services
//!
//! - **[`api`]**: reqwest-based client for the idea service REST API
//! - **[`storage`]**: local durable key/value storage (token, selection mirror, onboarding flag)

pub mod api;
pub mod storage;
