// ============================
// crates/backend-lib/src/auth/store.rs
// ============================
//! Credential records and the in-memory store that owns them.
use std::{collections::HashMap, sync::Arc};

use metrics::{counter, gauge};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;

/// Username of the record seeded at startup
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Password of the record seeded at startup
pub const DEFAULT_ADMIN_PASSWORD: &str = "password";

/// Account role, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// One stored credential per registered user
#[derive(Clone)]
pub struct CredentialRecord {
    pub username: String,
    pub secret_hash: String,
    pub role: Role,
}

/// In-memory credential store.
///
/// The sole owner of user state. Mutating operations take the write lock for
/// their whole check-and-write sequence, so concurrent calls can never
/// observe or create a half-applied record. Plaintext secrets never leave
/// this module: hashing and comparison both happen at the store boundary.
#[derive(Clone)]
pub struct CredentialStore {
    records: Arc<RwLock<HashMap<String, CredentialRecord>>>,
}

impl CredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        CredentialStore {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert the default admin record if it is not present yet.
    ///
    /// Idempotent: repeated calls (or racing calls on a shared store) insert
    /// at most one record.
    pub async fn seed_default(&self) -> Result<(), AppError> {
        let secret_hash = hash_password(DEFAULT_ADMIN_PASSWORD)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let mut records = self.records.write().await;
        if records.contains_key(DEFAULT_ADMIN_USERNAME) {
            return Ok(());
        }
        records.insert(
            DEFAULT_ADMIN_USERNAME.to_string(),
            CredentialRecord {
                username: DEFAULT_ADMIN_USERNAME.to_string(),
                secret_hash,
                role: Role::Admin,
            },
        );
        gauge!("auth.user.count").set(records.len() as f64);
        drop(records);

        info!("default admin user seeded");
        Ok(())
    }

    /// Create a new user record with role `User`.
    ///
    /// The existence check and the insert run under one write guard, so two
    /// racing registrations of the same username cannot both succeed.
    pub async fn create(&self, username: &str, secret: &str) -> Result<(), AppError> {
        // Hash outside the critical section; only the map update needs the lock.
        let secret_hash =
            hash_password(secret).map_err(|e| AppError::Internal(e.to_string()))?;

        let mut records = self.records.write().await;
        if records.contains_key(username) {
            warn!("registration rejected, user {username} already exists");
            return Err(AppError::AlreadyExists);
        }
        records.insert(
            username.to_string(),
            CredentialRecord {
                username: username.to_string(),
                secret_hash,
                role: Role::User,
            },
        );
        counter!("auth.user.registered").increment(1);
        gauge!("auth.user.count").set(records.len() as f64);
        Ok(())
    }

    /// Look up a record by username
    pub async fn get(&self, username: &str) -> Option<CredentialRecord> {
        let records = self.records.read().await;
        records.get(username).cloned()
    }

    /// Check a secret against the stored record.
    ///
    /// Returns the account role on a match; `None` covers both an unknown
    /// user and a wrong secret, so callers cannot tell the cases apart.
    pub async fn verify_secret(&self, username: &str, secret: &str) -> Option<Role> {
        let record = {
            let records = self.records.read().await;
            records.get(username).cloned()
        }?;

        if verify_password(&record.secret_hash, secret) {
            Some(record.role)
        } else {
            None
        }
    }

    /// Replace a user's secret after verifying the old one.
    ///
    /// Verify and overwrite run under one write guard; a concurrent change
    /// on the same user cannot slip in between them.
    pub async fn update_secret(
        &self,
        username: &str,
        old_secret: &str,
        new_secret: &str,
    ) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(username)
            .ok_or_else(|| AppError::NotFound(format!("user {username}")))?;

        if !verify_password(&record.secret_hash, old_secret) {
            warn!("password change rejected for user {username}");
            return Err(AppError::WrongSecret);
        }

        record.secret_hash =
            hash_password(new_secret).map_err(|e| AppError::Internal(e.to_string()))?;
        counter!("auth.password.changed").increment(1);
        Ok(())
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
