//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the client and the idea service via the REST API.
//!
//! ## Module Organization
//!
//! - [`component`] - Component catalog entries and availability
//! - [`user`] - Preferences, statistics and the preference option catalogues
//! - [`idea`] - Project ideas and the generation request
//! - [`common`] - Health check, message and error envelopes
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/generate-ideas
//! Content-Type: application/json
//!
//! {
//!   "selected_components": ["Arduino Uno", "DHT22"],
//!   "user_preferences": { "skill_level": "Beginner", ... },
//!   "count": 5
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! [
//!   {
//!     "id": "6f1c...",
//!     "title": "Smart Plant Watering System",
//!     "difficulty": "Beginner",
//!     "estimated_cost": "₹850",
//!     "components": ["Arduino Uno", "Soil Moisture Sensor"],
//!     "tags": ["Agriculture", "IoT"],
//!     "is_favorite": false
//!   }
//! ]
//! ```

pub mod common;
pub mod component;
pub mod idea;
pub mod user;

pub use common::*;
pub use component::*;
pub use idea::*;
pub use user::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty / skill level shared by ideas and preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All levels in ascending order.
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ]
    }

    /// Wire and display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Short description shown next to the skill level picker.
    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "New to electronics and programming",
            Difficulty::Intermediate => "Some experience with basic projects",
            Difficulty::Advanced => "Experienced with complex implementations",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::all()
            .iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("unknown difficulty: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_wire_names() {
        assert_eq!(serde_json::to_string(&Difficulty::Intermediate).unwrap(), "\"Intermediate\"");
        let parsed: Difficulty = serde_json::from_str("\"Advanced\"").unwrap();
        assert_eq!(parsed, Difficulty::Advanced);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("Beginner".parse::<Difficulty>().unwrap(), Difficulty::Beginner);
        assert!("beginner".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::default(), Difficulty::Beginner);
    }
}
