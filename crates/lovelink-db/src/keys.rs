//! Well-known record keys. One key per record family; values are whole
//! JSON documents (a list of users, a map of conversation logs, and so on).

pub const USERS: &str = "users";
pub const LIKES: &str = "likes";
pub const MESSAGES: &str = "messages";
pub const REVIEWS: &str = "reviews";
pub const CONTACTS: &str = "contacts";
pub const SESSION: &str = "session";
