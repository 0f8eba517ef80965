//! # Backend API Client Module
//!
//! HTTP client for the idea service REST API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient, request execution, 401 handling
//! ├── health.rs       - Liveness probe
//! ├── components.rs   - Component catalog (list, get, by category)
//! ├── preferences.rs  - Preferences (get, full replace)
//! ├── ideas.rs        - Saved ideas (CRUD, favorite toggle, search)
//! ├── generation.rs   - AI idea generation
//! └── stats.rs        - Usage statistics
//! ```
//!
//! ## Resource Surface
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | health | GET | /api/health |
//! | list components | GET | /api/components |
//! | get component | GET | /api/components/{id} |
//! | components by category | GET | /api/components/category/{category} |
//! | get preferences | GET | /api/preferences |
//! | save preferences | POST | /api/preferences |
//! | list saved ideas | GET | /api/ideas |
//! | save idea | POST | /api/ideas |
//! | update idea | PUT | /api/ideas/{id} |
//! | delete idea | DELETE | /api/ideas/{id} |
//! | toggle favorite | PATCH | /api/ideas/{id}/favorite?is_favorite={bool} |
//! | search ideas | GET | /api/ideas/search?query={text} |
//! | generate ideas | POST | /api/generate-ideas |
//! | get stats | GET | /api/stats |

pub mod client;
pub mod components;
pub mod generation;
pub mod health;
pub mod ideas;
pub mod preferences;
pub mod stats;

pub use client::{ApiClient, SessionEvent};
