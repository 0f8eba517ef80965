//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the STEMLab client and the idea
//! service backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::component`]**: Electronic component catalog entries
//!   - **[`dto::user`]**: User preferences and usage statistics
//!   - **[`dto::idea`]**: Generated and saved project ideas
//!   - **[`dto::common`]**: Health, message and error envelopes
//! - **[`utils`]**: Lenient decoding helpers used by the DTOs
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** on both sides
//! - Almost every field carries `#[serde(default)]`: the backend omits fields
//!   freely and the client fills in the documented defaults at the boundary
//! - Ids may arrive as strings or integers and are normalised to strings
//! - Timestamps accept RFC 3339 or naive ISO-8601 (read as UTC)
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::component::Component;
//!
//! let json = r#"{"id": 2, "name": "DHT22", "category": "Sensors"}"#;
//! let component: Component = serde_json::from_str(json).unwrap();
//! assert_eq!(component.id, "2");
//! assert_eq!(component.price_range, "");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
