use chrono::Utc;

use lovelink_db::keys;
use lovelink_types::models::Contact;

use crate::{App, Result};

impl App {
    /// Record a contact-form submission. Newest first, like the review feed.
    pub fn submit_contact(&self, email: &str, topic: &str, body: &str) -> Result<Contact> {
        let contact = Contact {
            email: email.to_string(),
            topic: topic.to_string(),
            body: body.to_string(),
            sent_at: Utc::now(),
        };
        let mut contacts: Vec<Contact> = self.store.get(keys::CONTACTS, Vec::new())?;
        contacts.insert(0, contact.clone());
        self.store.set(keys::CONTACTS, &contacts)?;

        Ok(contact)
    }

    /// Newest submissions first, capped at `limit`.
    pub fn recent_contacts(&self, limit: usize) -> Result<Vec<Contact>> {
        let mut contacts: Vec<Contact> = self.store.get(keys::CONTACTS, Vec::new())?;
        contacts.truncate(limit);
        Ok(contacts)
    }
}
