use async_trait::async_trait;

use crate::auth::Role;
use crate::error::AppError;

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn register(&self, username: &str, password: &str) -> Result<(), AppError>;
    async fn login(&self, username: &str, password: &str) -> Result<(String, Role), AppError>;
    async fn validate(&self, token: &str) -> Result<String, AppError>;
    async fn refresh(&self, token: &str) -> Result<String, AppError>;
    async fn change_password(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError>;
}
