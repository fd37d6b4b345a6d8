//! Operation layer for the LoveLink core: registration and sign-in, the
//! user catalog, directed interest edges with derived matches, ranked
//! suggestions, per-pair conversation logs with a scripted auto-reply, the
//! review feed, and the contact box.
//!
//! Every operation takes the acting identity explicitly; nothing reads
//! ambient session state. The stored session record exists for callers that
//! want to remember who is signed in between runs.

pub mod affinity;
pub mod auth;
pub mod chat;
pub mod contact;
pub mod directory;
pub mod error;
pub mod reviews;
pub mod scorer;
pub mod seed;

use std::ops::RangeInclusive;
use std::sync::Arc;

use lovelink_db::Store;

pub use error::{AppError, Result};

/// Default auto-reply delay window, in milliseconds.
const REPLY_DELAY_MS: RangeInclusive<u64> = 600..=1800;

/// The operation layer. Cheap to clone; all clones share one store.
#[derive(Clone)]
pub struct App {
    store: Arc<Store>,
    reply_delay_ms: RangeInclusive<u64>,
}

impl App {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            reply_delay_ms: REPLY_DELAY_MS,
        }
    }

    /// Override the auto-reply delay window. Tests shrink it so the scripted
    /// reply lands without real waiting.
    pub fn with_reply_delay_ms(mut self, delay_ms: RangeInclusive<u64>) -> Self {
        self.reply_delay_ms = delay_ms;
        self
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}
