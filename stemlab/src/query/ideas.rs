//! Idea library view: search over title, description and tags; selector on
//! difficulty or the favourite flag; optional favourites tab scope.

use shared::{Difficulty, Idea};

use super::{Queryable, SortKey};

impl Queryable for Idea {
    const HAS_FAVORITES: bool = true;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(2 + self.tags.len());
        fields.push(self.title.as_str());
        fields.push(self.description.as_str());
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn category(&self) -> &str {
        self.difficulty.as_str()
    }

    fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    fn sort_field(&self, key: SortKey) -> &str {
        match key {
            SortKey::Name => self.title.as_str(),
            SortKey::Category => self.difficulty.as_str(),
            SortKey::Price => self.estimated_cost.as_str(),
        }
    }
}

/// Summary counts shown above the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LibraryStats {
    pub total: usize,
    pub favorites: usize,
    pub beginner: usize,
    pub intermediate: usize,
    pub advanced: usize,
}

impl LibraryStats {
    pub fn from_ideas(ideas: &[Idea]) -> Self {
        ideas.iter().fold(Self::default(), |mut stats, idea| {
            stats.total += 1;
            if idea.is_favorite {
                stats.favorites += 1;
            }
            match idea.difficulty {
                Difficulty::Beginner => stats.beginner += 1,
                Difficulty::Intermediate => stats.intermediate += 1,
                Difficulty::Advanced => stats.advanced += 1,
            }
            stats
        })
    }

    pub fn count_for(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Beginner => self.beginner,
            Difficulty::Intermediate => self.intermediate,
            Difficulty::Advanced => self.advanced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{ListQuery, Scope, Selector};
    use super::*;

    fn idea(id: &str, title: &str, difficulty: Difficulty, tags: &[&str], favorite: bool) -> Idea {
        Idea {
            id: id.into(),
            title: title.into(),
            description: format!("{} description", title),
            difficulty,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            is_favorite: favorite,
            ..Default::default()
        }
    }

    fn library() -> Vec<Idea> {
        vec![
            idea("1", "Plant Watering", Difficulty::Beginner, &["Agriculture", "IoT"], false),
            idea("2", "Line Follower", Difficulty::Intermediate, &["Robotics"], true),
            idea("3", "Air Monitor", Difficulty::Advanced, &["Health"], false),
            idea("4", "Smart Doorbell", Difficulty::Beginner, &["Security", "IoT"], true),
        ]
    }

    fn ids(view: &[Idea]) -> Vec<&str> {
        view.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_search_matches_tags() {
        let view = ListQuery::new().with_search("iot").apply(&library());
        assert_eq!(ids(&view), vec!["1", "4"]);
    }

    #[test]
    fn test_difficulty_selector() {
        let selector = Selector::parse_for::<Idea>("Beginner");
        let view = ListQuery::new().with_selector(selector).apply(&library());
        assert_eq!(ids(&view), vec!["1", "4"]);
    }

    #[test]
    fn test_favorites_selector_uses_flag() {
        let selector = Selector::parse_for::<Idea>("Favorites");
        assert_eq!(selector, Selector::Favorites);
        let view = ListQuery::new().with_selector(selector).apply(&library());
        assert_eq!(ids(&view), vec!["2", "4"]);
    }

    #[test]
    fn test_tab_scope_combines_with_selector() {
        let view = ListQuery::new()
            .with_selector(Selector::value("Beginner"))
            .with_scope(Scope::Favorites)
            .apply(&library());
        assert_eq!(ids(&view), vec!["4"]);
    }

    #[test]
    fn test_unknown_difficulty_is_empty() {
        let view = ListQuery::new()
            .with_selector(Selector::parse_for::<Idea>("Expert"))
            .apply(&library());
        assert!(view.is_empty());
    }

    #[test]
    fn test_server_order_kept_without_sort() {
        let view = ListQuery::new().apply(&library());
        assert_eq!(ids(&view), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_library_stats() {
        let stats = LibraryStats::from_ideas(&library());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.favorites, 2);
        assert_eq!(stats.count_for(Difficulty::Beginner), 2);
        assert_eq!(stats.intermediate, 1);
        assert_eq!(stats.advanced, 1);
    }
}
