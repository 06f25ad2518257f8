use async_trait::async_trait;
use metrics::counter;
use tracing::{debug, info};

use crate::auth::{AuthService, CredentialStore, Role, TokenAuthority};
use crate::error::AppError;

pub struct DefaultAuth {
    store: CredentialStore,
}

impl DefaultAuth {
    pub fn new(store: CredentialStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }
}

#[async_trait]
impl AuthService for DefaultAuth {
    async fn register(&self, username: &str, password: &str) -> Result<(), AppError> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::MissingFields);
        }
        self.store.create(username, password).await?;
        info!("user {username} registered");
        Ok(())
    }

    async fn login(&self, username: &str, password: &str) -> Result<(String, Role), AppError> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::MissingFields);
        }
        let role = match self.store.verify_secret(username, password).await {
            Some(role) => role,
            None => {
                counter!("auth.login.failure").increment(1);
                return Err(AppError::InvalidCredentials);
            }
        };
        counter!("auth.login.success").increment(1);
        info!("user {username} logged in");
        Ok((TokenAuthority::issue(username), role))
    }

    async fn validate(&self, token: &str) -> Result<String, AppError> {
        // Structural check only: the referenced username is not looked up in
        // the store, so a well-shaped token validates even if no such user
        // was ever registered.
        let username = TokenAuthority::parse(token).ok_or(AppError::InvalidToken)?;
        debug!("token validated for {username}");
        Ok(username.to_string())
    }

    async fn refresh(&self, token: &str) -> Result<String, AppError> {
        let refreshed = TokenAuthority::refresh(token)?;
        counter!("auth.token.refreshed").increment(1);
        Ok(refreshed)
    }

    async fn change_password(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if username.is_empty() || old_password.is_empty() || new_password.is_empty() {
            return Err(AppError::MissingFields);
        }
        self.store
            .update_secret(username, old_password, new_password)
            .await?;
        info!("password changed for user {username}");
        Ok(())
    }
}
