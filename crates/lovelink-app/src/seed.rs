use std::collections::HashMap;

use tracing::info;

use lovelink_db::keys;
use lovelink_types::models::{Message, User};

use crate::{App, Result};

impl App {
    /// Populate the directory with the demo profiles. Does nothing when any
    /// users already exist; returns whether seeding happened.
    pub fn seed_demo_users(&self) -> Result<bool> {
        let existing: Vec<User> = self.store.get(keys::USERS, Vec::new())?;
        if !existing.is_empty() {
            return Ok(false);
        }

        let demo = demo_users();
        self.store.set(keys::USERS, &demo)?;
        self.store
            .set(keys::LIKES, &HashMap::<String, Vec<String>>::new())?;
        self.store
            .set(keys::MESSAGES, &HashMap::<String, Vec<Message>>::new())?;

        info!("Seeded {} demo profiles", demo.len());
        Ok(true)
    }
}

fn demo_users() -> Vec<User> {
    [
        (
            "Ava Chen",
            "ava@example.com",
            24,
            "female",
            "hiking, coffee, indie films, jazz",
            "Sydney",
            "UX student who loves coastal walks.",
        ),
        (
            "Ben Li",
            "ben@example.com",
            26,
            "male",
            "basketball, ramen, EDM, gaming",
            "Sydney",
            "Dev bootcamp grad, plays pickup ball.",
        ),
        (
            "Clara Wu",
            "clara@example.com",
            28,
            "female",
            "yoga, cooking, museums, travel",
            "Melbourne",
            "Data analyst who meal-preps a mean curry.",
        ),
        (
            "Daniel Park",
            "daniel@example.com",
            29,
            "male",
            "photography, jazz, hiking, startup",
            "Sydney",
            "Early-stage PM into street photos.",
        ),
        (
            "Ethan Zhou",
            "ethan@example.com",
            23,
            "male",
            "tennis, crypto, anime, hotpot",
            "Brisbane",
            "Comp sci student, slices a decent backhand.",
        ),
        (
            "Fiona Zhang",
            "fiona@example.com",
            25,
            "female",
            "baking, yoga, live gigs, board games",
            "Sydney",
            "Marketing grad baking sourdough weekly.",
        ),
    ]
    .into_iter()
    .map(|(name, email, age, gender, interests, city, bio)| User {
        email: email.to_string(),
        name: name.to_string(),
        password: "1234".to_string(),
        age,
        gender: gender.to_string(),
        interests: interests.to_string(),
        city: Some(city.to_string()),
        bio: Some(bio.to_string()),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lovelink_db::Store;

    use crate::App;

    #[test]
    fn seeds_once_then_leaves_the_directory_alone() {
        let app = App::new(Arc::new(Store::open_in_memory().unwrap()));

        assert!(app.seed_demo_users().unwrap());
        assert_eq!(app.all_users().unwrap().len(), 6);

        assert!(!app.seed_demo_users().unwrap());
        assert_eq!(app.all_users().unwrap().len(), 6);
    }
}
