use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Difficulty;
use crate::utils;

pub const DEFAULT_DURATION: &str = "1-2 hours";
pub const DEFAULT_TEAM_SIZE: &str = "Individual";

/// A project theme offered on the preference screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const THEMES: &[ThemeOption] = &[
    ThemeOption { id: "robotics", name: "Robotics", description: "Automated systems and mechanical engineering" },
    ThemeOption { id: "iot", name: "IoT & Smart Home", description: "Internet of Things and connected devices" },
    ThemeOption { id: "ai", name: "Artificial Intelligence", description: "Machine learning and intelligent systems" },
    ThemeOption { id: "environmental", name: "Environmental Tech", description: "Sustainability and eco-friendly solutions" },
    ThemeOption { id: "health", name: "Health & Medical", description: "Healthcare technology and monitoring" },
    ThemeOption { id: "agriculture", name: "Smart Agriculture", description: "Modern farming and crop monitoring" },
    ThemeOption { id: "education", name: "Educational Tools", description: "Learning aids and teaching technology" },
    ThemeOption { id: "security", name: "Security & Safety", description: "Protection and monitoring systems" },
];

pub const DURATIONS: &[&str] = &[
    "30 minutes - 1 hour",
    "1-2 hours",
    "2-4 hours",
    "4-8 hours",
    "1-2 days",
    "1 week+",
];

pub const TEAM_SIZES: &[&str] = &["Individual", "2-3 people", "4-6 people", "7+ people"];

pub const INTEREST_AREAS: &[&str] = &[
    "Programming",
    "Hardware Design",
    "Data Analysis",
    "User Interface",
    "Mobile Development",
    "Web Development",
    "3D Printing",
    "Circuit Design",
    "Machine Learning",
    "Computer Vision",
    "Sensors",
    "Automation",
];

fn default_duration() -> String {
    DEFAULT_DURATION.to_string()
}

fn default_team_size() -> String {
    DEFAULT_TEAM_SIZE.to_string()
}

fn default_true() -> bool {
    true
}

/// User preferences, replaced wholesale on every save (last writer wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "utils::null_as_default")]
    pub selected_themes: Vec<String>,
    #[serde(default, deserialize_with = "utils::null_as_default")]
    pub skill_level: Difficulty,
    #[serde(default = "default_duration")]
    pub preferred_duration: String,
    #[serde(default = "default_team_size")]
    pub team_size: String,
    #[serde(default, deserialize_with = "utils::null_as_default")]
    pub interests: Vec<String>,
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
    #[serde(default)]
    pub dark_mode_enabled: bool,
    #[serde(default, with = "utils::timestamp", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            id: None,
            selected_themes: Vec::new(),
            skill_level: Difficulty::Beginner,
            preferred_duration: default_duration(),
            team_size: default_team_size(),
            interests: Vec::new(),
            notifications_enabled: true,
            dark_mode_enabled: false,
            last_updated: None,
        }
    }
}

impl UserPreferences {
    /// Add the theme if absent, remove it otherwise.
    pub fn toggle_theme(&mut self, theme_id: &str) {
        toggle_entry(&mut self.selected_themes, theme_id);
    }

    /// Add the interest if absent, remove it otherwise.
    pub fn toggle_interest(&mut self, interest: &str) {
        toggle_entry(&mut self.interests, interest);
    }
}

fn toggle_entry(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}

/// Usage counters tracked per user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub ideas_generated: u64,
    #[serde(default)]
    pub projects_completed: u64,
    #[serde(default)]
    pub components_scanned: u64,
    #[serde(default)]
    pub days_active: u64,
    #[serde(default, with = "utils::timestamp", skip_serializing_if = "Option::is_none")]
    pub last_active_date: Option<DateTime<Utc>>,
}

impl UserStats {
    pub fn get(&self, key: StatKey) -> u64 {
        match key {
            StatKey::IdeasGenerated => self.ideas_generated,
            StatKey::ProjectsCompleted => self.projects_completed,
            StatKey::ComponentsScanned => self.components_scanned,
            StatKey::DaysActive => self.days_active,
        }
    }

    /// Bump a counter and stamp `last_active_date`.
    pub fn increment(&mut self, key: StatKey, amount: u64, now: DateTime<Utc>) {
        let counter = match key {
            StatKey::IdeasGenerated => &mut self.ideas_generated,
            StatKey::ProjectsCompleted => &mut self.projects_completed,
            StatKey::ComponentsScanned => &mut self.components_scanned,
            StatKey::DaysActive => &mut self.days_active,
        };
        *counter = counter.saturating_add(amount);
        self.last_active_date = Some(now);
    }
}

/// Counter names accepted by [`UserStats::increment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKey {
    IdeasGenerated,
    ProjectsCompleted,
    ComponentsScanned,
    DaysActive,
}

impl StatKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKey::IdeasGenerated => "ideas_generated",
            StatKey::ProjectsCompleted => "projects_completed",
            StatKey::ComponentsScanned => "components_scanned",
            StatKey::DaysActive => "days_active",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ideas_generated" => Ok(StatKey::IdeasGenerated),
            "projects_completed" => Ok(StatKey::ProjectsCompleted),
            "components_scanned" => Ok(StatKey::ComponentsScanned),
            "days_active" => Ok(StatKey::DaysActive),
            other => Err(format!("unknown stat key: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_preferences_defaults_from_empty_object() {
        let prefs: UserPreferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, UserPreferences::default());
        assert_eq!(prefs.preferred_duration, "1-2 hours");
        assert_eq!(prefs.team_size, "Individual");
        assert!(prefs.notifications_enabled);
        assert!(!prefs.dark_mode_enabled);
    }

    #[test]
    fn test_null_skill_level_is_beginner() {
        let prefs: UserPreferences = serde_json::from_str(r#"{"skill_level": null}"#).unwrap();
        assert_eq!(prefs.skill_level, Difficulty::Beginner);
    }

    #[test]
    fn test_toggle_theme_keeps_list_unique() {
        let mut prefs = UserPreferences::default();
        prefs.toggle_theme("iot");
        prefs.toggle_theme("robotics");
        assert_eq!(prefs.selected_themes, vec!["iot", "robotics"]);
        prefs.toggle_theme("iot");
        assert_eq!(prefs.selected_themes, vec!["robotics"]);
    }

    #[test]
    fn test_increment_stat() {
        let mut stats = UserStats { ideas_generated: 2, ..Default::default() };
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        stats.increment(StatKey::IdeasGenerated, 5, now);
        assert_eq!(stats.ideas_generated, 7);
        assert_eq!(stats.last_active_date, Some(now));
        assert_eq!(stats.get(StatKey::ProjectsCompleted), 0);
    }

    #[test]
    fn test_stat_key_round_trips_wire_name() {
        for key in [
            StatKey::IdeasGenerated,
            StatKey::ProjectsCompleted,
            StatKey::ComponentsScanned,
            StatKey::DaysActive,
        ] {
            assert_eq!(key.as_str().parse::<StatKey>().unwrap(), key);
        }
        assert!("likes".parse::<StatKey>().is_err());
    }

    #[test]
    fn test_option_catalogues() {
        assert_eq!(THEMES.len(), 8);
        assert_eq!(DURATIONS.len(), 6);
        assert_eq!(TEAM_SIZES.len(), 4);
        assert_eq!(INTEREST_AREAS.len(), 12);
        assert!(DURATIONS.contains(&DEFAULT_DURATION));
        assert!(TEAM_SIZES.contains(&DEFAULT_TEAM_SIZE));
    }
}
