use lovelink_db::keys;
use lovelink_types::api::CatalogFilter;
use lovelink_types::models::User;

use crate::{App, Result};

impl App {
    /// Every registered profile, in registration order.
    pub fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.store.get(keys::USERS, Vec::new())?)
    }

    pub fn find_user(&self, email: &str) -> Result<Option<User>> {
        Ok(self.all_users()?.into_iter().find(|u| u.email == email))
    }

    /// Browse the catalog. Gender must equal the tag exactly when given, age
    /// is an inclusive range, and the interest query is a case-insensitive
    /// substring test against the raw interests string.
    pub fn catalog(&self, filter: &CatalogFilter) -> Result<Vec<User>> {
        let query = filter
            .interest_query
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());

        Ok(self
            .all_users()?
            .into_iter()
            .filter(|u| filter.gender.as_deref().is_none_or(|g| u.gender == g))
            .filter(|u| u.age >= filter.min_age && u.age <= filter.max_age)
            .filter(|u| {
                query
                    .as_deref()
                    .is_none_or(|q| u.interests.to_lowercase().contains(q))
            })
            .collect())
    }
}
