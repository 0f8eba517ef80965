//! # STEM Idea Client - Library Root
//!
//! Headless client for the STEM project-idea service: browse the component
//! catalog, pick a project basket, set theme and skill preferences, request
//! AI-generated ideas and curate a saved library.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  app       - screen controllers (state, handlers)      │
//! ├────────────────────────────────────────────────────────┤
//! │  store     - preferences, stats, component selection   │
//! │  query     - search / filter / sort over fetched lists │
//! ├────────────────────────────────────────────────────────┤
//! │  services  - ApiClient (reqwest), LocalStorage         │
//! │  core      - AppError, ApiService, RequestGate         │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (JSON)
//!          ▼
//! ┌─────────────────┐
//! │  Idea service   │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: per-screen orchestration; async results come back as
//!   `AppEvent`s over an `async_channel`
//! - **store**: the single source of truth for user data, injected into
//!   every controller and observable through `StoreEvent`s
//! - **query**: pure derivation of browsing views
//! - **services**: `api` (one file per resource group) and `storage`
//! - **core**: error taxonomy and the `ApiService` trait seam
//! - **config** / **logging**: environment-driven setup for the binary
//! - **utils**: client-side validation
//!
//! ## Consistency Model
//!
//! - preferences are replaced only with the server-confirmed copy
//! - stat increments are local and never sent to the server
//! - favourite toggles and deletes show up only after the server acknowledges
//! - idea generation is latest-request-wins; superseded responses are dropped

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod query;
pub mod services;
pub mod store;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::app::{App, Screen};
pub use crate::config::ClientConfig;
pub use crate::core::{AppError, Result};
pub use crate::store::UserStore;
