use serde::{Deserialize, Serialize};

use crate::models::User;

// -- Registration & sign-in --

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub age: u32,
    pub gender: String,
    pub interests: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// -- Catalog --

/// Catalog filter. `None` leaves that axis unconstrained; the age bounds
/// default to the 18..=99 range the browse form starts from.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFilter {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default = "default_min_age")]
    pub min_age: u32,
    #[serde(default = "default_max_age")]
    pub max_age: u32,
    #[serde(default)]
    pub interest_query: Option<String>,
}

fn default_min_age() -> u32 {
    18
}

fn default_max_age() -> u32 {
    99
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            gender: None,
            min_age: default_min_age(),
            max_age: default_max_age(),
            interest_query: None,
        }
    }
}

// -- Matching --

/// One ranked suggestion: the candidate, the heuristic score, and a
/// human-readable explanation reproducible from the score inputs alone.
#[derive(Debug, Clone, Serialize)]
pub struct RankedMatch {
    pub user: User,
    pub score: u32,
    pub reason: String,
}
