use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils;

/// Stock availability of a catalog component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    Available,
    #[serde(rename = "Partially Available")]
    PartiallyAvailable,
    #[serde(rename = "Not Available")]
    NotAvailable,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::PartiallyAvailable => "Partially Available",
            Availability::NotAvailable => "Not Available",
        }
    }
}

/// Catalog entry for an electronic part.
///
/// Read-only from the client's point of view. Selecting a component for a
/// project is a client-local relation held by the store, never a mutation of
/// the entity itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Component {
    #[serde(default, deserialize_with = "utils::id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_range: String,
    #[serde(default, deserialize_with = "utils::null_as_default")]
    pub availability: Availability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "utils::string_map")]
    pub specifications: BTreeMap<String, String>,
    #[serde(default, with = "utils::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
