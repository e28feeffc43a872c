//! Credential lookup for login attempts.

use crate::models::{CredentialRecord, Role};

/// Source of credential records.
///
/// Lookup is by email and role; the secret is compared by the caller.
pub trait CredentialRepository: Send + Sync {
    fn find_credential(&self, email: &str, role: Role) -> Option<&CredentialRecord>;
}

/// Built-in demo accounts.
const DEMO_ACCOUNTS: &[CredentialRecord] = &[
    CredentialRecord {
        id: "1",
        email: "user@example.com",
        secret: "password",
        name: "John Doe",
        role: Role::Standard,
    },
    CredentialRecord {
        id: "2",
        email: "admin@example.com",
        secret: "admin123",
        name: "Admin User",
        role: Role::Administrator,
    },
];

/// Fixed allow-list, scanned linearly.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    records: &'static [CredentialRecord],
}

impl StaticCredentials {
    pub fn new(records: &'static [CredentialRecord]) -> Self {
        Self { records }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new(DEMO_ACCOUNTS)
    }
}

impl CredentialRepository for StaticCredentials {
    fn find_credential(&self, email: &str, role: Role) -> Option<&CredentialRecord> {
        self.records
            .iter()
            .find(|record| record.email == email && record.role == role)
    }
}
