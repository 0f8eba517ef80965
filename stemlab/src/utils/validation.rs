/// Validation utilities for screen input
use crate::core::AppError;
use shared::{Component, UserPreferences, DURATIONS, TEAM_SIZES, THEMES};

pub const SELECT_COMPONENT_TO_CONTINUE: &str = "Please select at least one component to continue";
pub const SELECT_COMPONENTS_FIRST: &str = "Please select components first";
pub const SELECT_THEME: &str = "Please select at least one theme";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Validation` error for `?` propagation.
    pub fn into_result(self) -> Result<(), AppError> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

/// Continue from component selection
pub fn validate_selection(components: &[Component]) -> ValidationResult {
    if components.is_empty() {
        return ValidationResult::err(SELECT_COMPONENT_TO_CONTINUE);
    }
    ValidationResult::ok()
}

/// Start idea generation
pub fn validate_generation(components: &[Component]) -> ValidationResult {
    if components.is_empty() {
        return ValidationResult::err(SELECT_COMPONENTS_FIRST);
    }
    ValidationResult::ok()
}

/// Save from the theme/skill screen.
///
/// At least one theme is required, and every theme, duration and team size
/// must come from the option catalogues.
pub fn validate_preferences(preferences: &UserPreferences) -> ValidationResult {
    if preferences.selected_themes.is_empty() {
        return ValidationResult::err(SELECT_THEME);
    }

    if let Some(unknown) = preferences
        .selected_themes
        .iter()
        .find(|id| !THEMES.iter().any(|t| t.id == id.as_str()))
    {
        return ValidationResult::err(format!("Unknown theme: {}", unknown));
    }

    if !DURATIONS.contains(&preferences.preferred_duration.as_str()) {
        return ValidationResult::err(format!(
            "Unknown project duration: {}",
            preferences.preferred_duration
        ));
    }

    if !TEAM_SIZES.contains(&preferences.team_size.as_str()) {
        return ValidationResult::err(format!("Unknown team size: {}", preferences.team_size));
    }

    ValidationResult::ok()
}
