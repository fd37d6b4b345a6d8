use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered profile. The email is the natural key: case-sensitive,
/// unique, and never edited after registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    /// Stored as plaintext. This is a local demo core, not real auth.
    pub password: String,
    pub age: u32,
    /// Free-text tag, matched exactly by the catalog filter.
    pub gender: String,
    /// Comma-separated free-text tags, kept raw as entered.
    pub interests: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// One entry in a two-party conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// A review of another profile. Newest reviews sit at the front of the
/// stored list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub target: String,
    /// 1–5, validated at submission.
    pub rating: u8,
    pub comment: String,
    pub submitted_at: DateTime<Utc>,
}

/// A contact-form submission. Newest first, like reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub topic: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// The signed-in identity. Absent from the store when nobody is signed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
}
