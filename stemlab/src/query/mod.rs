//! # List Query / Filter Engine
//!
//! Pure derivation of a browsing view from a fetched collection. A
//! [`ListQuery`] combines four independent inputs:
//!
//! - a free-text **search** term, matched case-insensitively as a substring
//!   against the entity's text fields
//! - a **selector**: `All`, `Favorites` (ideas only) or an exact categorical value
//! - a **scope** (library tab): everything or favourites only
//! - an optional **sort** key: name, category or price range
//!
//! The three predicates are ANDed, so their order never changes the result;
//! sorting runs last and is stable. The source slice is never mutated.
//!
//! ```rust
//! use shared::Component;
//! use stemlab::query::{ListQuery, Selector, SortKey};
//!
//! let catalog = vec![
//!     Component { id: "1".into(), name: "Arduino Uno".into(), category: "Microcontrollers".into(), ..Default::default() },
//!     Component { id: "2".into(), name: "DHT22".into(), category: "Sensors".into(), ..Default::default() },
//! ];
//!
//! let view = ListQuery::new()
//!     .with_selector(Selector::value("Sensors"))
//!     .with_sort(SortKey::Name)
//!     .apply(&catalog);
//! assert_eq!(view.len(), 1);
//! assert_eq!(view[0].id, "2");
//! ```

mod components;
mod ideas;

pub use ideas::LibraryStats;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Selector sentinel meaning "no categorical filter".
pub const ALL: &str = "All";
/// Selector sentinel meaning "favourites only" (ideas).
pub const FAVORITES: &str = "Favorites";

/// Entities the engine can search, filter and sort.
pub trait Queryable {
    /// Whether the `Favorites` selector sentinel applies to this entity.
    const HAS_FAVORITES: bool = false;

    /// Text fields matched by the search term.
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared against [`Selector::Value`].
    fn category(&self) -> &str;

    fn is_favorite(&self) -> bool {
        false
    }

    /// Field compared for `key`. Absent fields are empty strings.
    fn sort_field(&self, key: SortKey) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Name,
    Category,
    Price,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[SortKey::Name, SortKey::Category, SortKey::Price]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::Price => "price",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            "price" => Ok(SortKey::Price),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

/// Categorical filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selector {
    #[default]
    All,
    /// Filter on the favourite flag instead of a categorical field.
    Favorites,
    /// Exact match against [`Queryable::category`].
    Value(String),
}

impl Selector {
    pub fn value(v: impl Into<String>) -> Self {
        Selector::Value(v.into())
    }

    /// Parse a picker value for entity `T`.
    ///
    /// `"Favorites"` is only a sentinel for entities that carry a favourite
    /// flag; elsewhere it is an ordinary category name.
    pub fn parse_for<T: Queryable>(raw: &str) -> Self {
        match raw {
            ALL => Selector::All,
            FAVORITES if T::HAS_FAVORITES => Selector::Favorites,
            other => Selector::Value(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Selector::All => ALL,
            Selector::Favorites => FAVORITES,
            Selector::Value(v) => v,
        }
    }
}

/// Library tab scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    #[default]
    All,
    Favorites,
}

/// Search, selector, scope and sort applied to one list view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub search: String,
    pub selector: Selector,
    pub scope: Scope,
    /// `None` keeps the input order.
    pub sort: Option<SortKey>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_sort(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }

    /// Whether `item` passes every predicate.
    pub fn matches<T: Queryable>(&self, item: &T) -> bool {
        let needle = self.search.to_lowercase();
        self.matches_lowered(item, &needle)
    }

    fn matches_lowered<T: Queryable>(&self, item: &T, needle: &str) -> bool {
        matches_search(item, needle) && matches_selector(item, &self.selector) && matches_scope(item, self.scope)
    }

    /// Filter then sort into a new vector.
    pub fn apply<T: Queryable + Clone>(&self, items: &[T]) -> Vec<T> {
        let needle = self.search.to_lowercase();
        let mut view: Vec<T> = items
            .iter()
            .filter(|item| self.matches_lowered(*item, &needle))
            .cloned()
            .collect();

        if let Some(key) = self.sort {
            // slice::sort_by is stable: equal keys keep their input order
            view.sort_by(|a, b| a.sort_field(key).cmp(b.sort_field(key)));
        }
        view
    }
}

fn matches_search<T: Queryable>(item: &T, needle: &str) -> bool {
    needle.is_empty()
        || item
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

fn matches_selector<T: Queryable>(item: &T, selector: &Selector) -> bool {
    match selector {
        Selector::All => true,
        Selector::Favorites => item.is_favorite(),
        Selector::Value(value) => item.category() == value,
    }
}

fn matches_scope<T: Queryable>(item: &T, scope: Scope) -> bool {
    match scope {
        Scope::All => true,
        Scope::Favorites => item.is_favorite(),
    }
}

/// Picker values: `"All"` followed by each distinct category in first-seen order.
pub fn categories<T: Queryable>(items: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    std::iter::once(ALL.to_string())
        .chain(
            items
                .iter()
                .map(|item| item.category())
                .filter(|category| seen.insert(*category))
                .map(str::to_string),
        )
        .collect()
}
