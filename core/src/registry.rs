//! # Identifier Registry
//!
//! Tracks every identifier handed out by a factory.
//!
//! Identifiers are claimed once and **never released**: removing a zone from a
//! center, or dropping it altogether, does not make its id available again.

use std::collections::BTreeSet;

use tracing::debug;

/// A set of identifiers claimed for the lifetime of the registry.
#[derive(Debug, Default, Clone)]
pub struct IdentifierRegistry {
    claimed: BTreeSet<String>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `id`.
    ///
    /// Returns `false` without changing anything if the id was claimed before.
    pub fn claim(&mut self, id: &str) -> bool {
        if self.claimed.contains(id) {
            return false;
        }
        debug!("Claimed identifier {id}");
        self.claimed.insert(id.to_string())
    }

    pub fn is_claimed(&self, id: &str) -> bool {
        self.claimed.contains(id)
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.claimed.iter().map(String::as_str)
    }
}
