//! Component catalog view: search over name and description, category
//! selector, sort by name / category / price range.

use shared::Component;

use super::{Queryable, SortKey};

impl Queryable for Component {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn category(&self) -> &str {
        self.category.as_str()
    }

    fn sort_field(&self, key: SortKey) -> &str {
        match key {
            SortKey::Name => self.name.as_str(),
            SortKey::Category => self.category.as_str(),
            SortKey::Price => self.price_range.as_str(),
        }
    }
}
