use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Availability, Difficulty, UserPreferences};
use crate::utils;

/// A generated or saved project idea.
///
/// Generated ideas are ephemeral until posted to `/api/ideas`; the backend
/// echoes the persisted record back with its confirmed id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Idea {
    #[serde(default, deserialize_with = "utils::id_string")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "utils::null_as_default")]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub estimated_cost: String,
    #[serde(default, deserialize_with = "utils::null_as_default")]
    pub components: Vec<String>,
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default)]
    pub working_principle: String,
    #[serde(default, deserialize_with = "utils::null_as_default")]
    pub innovation_elements: Vec<String>,
    #[serde(default, deserialize_with = "utils::null_as_default")]
    pub scalability_options: Vec<String>,
    #[serde(default, deserialize_with = "utils::null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub notes: String,
    #[serde(default, with = "utils::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "utils::timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Idea {
    /// Plain-text blurb used when sharing an idea.
    pub fn share_text(&self) -> String {
        format!("Check out this project idea: {}\n\n{}", self.title, self.description)
    }
}

fn default_count() -> u32 {
    5
}

/// Body of `POST /api/generate-ideas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaGenerationRequest {
    /// Component names, not ids.
    pub selected_components: Vec<String>,
    #[serde(default)]
    pub user_preferences: Option<UserPreferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default = "default_count")]
    pub count: u32,
}

impl IdeaGenerationRequest {
    pub fn new(selected_components: Vec<String>, user_preferences: Option<UserPreferences>) -> Self {
        Self {
            selected_components,
            user_preferences,
            theme: None,
            count: default_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_idea_decodes() {
        let json = r#"{
            "id": "i-1",
            "title": "Smart Plant Watering System",
            "description": "Automated irrigation",
            "problem_statement": "Plants dry out",
            "working_principle": "Moisture threshold triggers a pump",
            "difficulty": "Beginner",
            "estimated_cost": "₹850",
            "components": ["Arduino Uno", "Relay Module"],
            "innovation_elements": ["SMS notifications"],
            "scalability_options": ["IoT connectivity"],
            "availability": "Available",
            "created_at": "2024-06-01T12:00:00.5",
            "updated_at": "2024-06-01T12:00:00.5",
            "is_favorite": false,
            "tags": ["Agriculture", "IoT"],
            "notes": ""
        }"#;
        let idea: Idea = serde_json::from_str(json).unwrap();
        assert_eq!(idea.components.len(), 2);
        assert_eq!(idea.availability, Some(Availability::Available));
        assert!(idea.created_at.is_some());
    }

    #[test]
    fn test_sparse_idea_uses_defaults() {
        let idea: Idea = serde_json::from_str(r#"{"id": 7, "tags": null}"#).unwrap();
        assert_eq!(idea.id, "7");
        assert_eq!(idea.difficulty, Difficulty::Beginner);
        assert!(idea.tags.is_empty());
        assert!(!idea.is_favorite);
    }

    #[test]
    fn test_share_text() {
        let idea = Idea {
            title: "Weather Station".into(),
            description: "Logs temperature".into(),
            ..Default::default()
        };
        assert_eq!(
            idea.share_text(),
            "Check out this project idea: Weather Station\n\nLogs temperature"
        );
    }

    #[test]
    fn test_generation_request_body() {
        let request = IdeaGenerationRequest::new(vec!["DHT22".into()], None);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["count"], 5);
        assert_eq!(value["selected_components"][0], "DHT22");
        assert!(value["user_preferences"].is_null());
        assert!(value.get("theme").is_none());
    }
}
