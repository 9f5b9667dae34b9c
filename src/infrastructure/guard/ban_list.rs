//! Process-wide set of identities flagged as abusive

use dashmap::DashSet;

use crate::domain::ClientIdentity;

/// Banned identities. Entries live until the process exits.
#[derive(Debug, Default)]
pub struct BanList {
    banned: DashSet<ClientIdentity>,
}

impl BanList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_banned(&self, identity: ClientIdentity) -> bool {
        self.banned.contains(&identity)
    }

    /// Ban an identity. Idempotent; returns `true` only on the first ban.
    pub fn ban(&self, identity: ClientIdentity) -> bool {
        self.banned.insert(identity)
    }

    pub fn len(&self) -> usize {
        self.banned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banned.is_empty()
    }
}
