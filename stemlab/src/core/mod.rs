//! # Core Abstractions
//!
//! Core traits and error types used throughout the client.
//!
//! - **[`error`]**: Client error taxonomy (`AppError`, `Result<T>`)
//! - **[`service`]**: `ApiService`, the dependency-injection seam over the backend
//! - **[`request_gate`]**: Latest-request-wins tokens for superseding calls
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stemlab::core::ApiService;
//!
//! // In production: the reqwest-backed client
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&config, storage)?);
//!
//! // In tests: an in-memory implementation
//! let api: Arc<dyn ApiService> = Arc::new(MockApi::default());
//! ```

pub mod error;
pub mod request_gate;
pub mod service;

pub use error::{AppError, Result};
pub use request_gate::{RequestGate, RequestToken};
pub use service::ApiService;
