use std::collections::HashMap;

use lovelink_db::keys;
use lovelink_types::models::User;

use crate::{App, Result};

/// Directed interest edges, keyed by the expressing user. Append-only; no
/// revoke operation exists.
type EdgeMap = HashMap<String, Vec<String>>;

impl App {
    /// Record that `from` is interested in `to`. Adding an edge that already
    /// exists changes nothing, and a call without an acting identity is a
    /// silent no-op.
    pub fn express_interest(&self, from: &str, to: &str) -> Result<()> {
        if from.is_empty() {
            return Ok(());
        }

        let mut edges: EdgeMap = self.store.get(keys::LIKES, EdgeMap::new())?;
        let targets = edges.entry(from.to_string()).or_default();
        if !targets.iter().any(|t| t == to) {
            targets.push(to.to_string());
            self.store.set(keys::LIKES, &edges)?;
        }
        Ok(())
    }

    /// Two users match iff each has expressed interest in the other. Derived
    /// from the edge map on every call; nothing is cached. False when either
    /// identifier is empty.
    pub fn is_match(&self, a: &str, b: &str) -> Result<bool> {
        if a.is_empty() || b.is_empty() {
            return Ok(false);
        }
        let edges: EdgeMap = self.store.get(keys::LIKES, EdgeMap::new())?;
        Ok(has_edge(&edges, a, b) && has_edge(&edges, b, a))
    }

    /// The registered users whose mutual edge with `email` exists.
    pub fn matches_for(&self, email: &str) -> Result<Vec<User>> {
        if email.is_empty() {
            return Ok(Vec::new());
        }
        let edges: EdgeMap = self.store.get(keys::LIKES, EdgeMap::new())?;
        Ok(self
            .all_users()?
            .into_iter()
            .filter(|u| has_edge(&edges, email, &u.email) && has_edge(&edges, &u.email, email))
            .collect())
    }
}

fn has_edge(edges: &EdgeMap, from: &str, to: &str) -> bool {
    edges
        .get(from)
        .is_some_and(|targets| targets.iter().any(|t| t == to))
}
