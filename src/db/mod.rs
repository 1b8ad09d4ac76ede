/// Credential storage abstraction
///
/// Handlers and the auth service only see [`CredentialStore`], so tests can swap in
/// a fresh store per case and a persistent backend can be added without touching
/// the HTTP layer.
use crate::{error::AppResult, models::Account};

pub mod memory;

pub use memory::InMemoryCredentialStore;

#[async_trait::async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up an account by username
    async fn get(&self, username: &str) -> AppResult<Option<Account>>;

    /// Store `account` unless its username is taken.
    ///
    /// Returns `false` and leaves the existing record untouched when the username
    /// is already present. The check and the write happen under one exclusive update.
    async fn insert_if_absent(&self, account: Account) -> AppResult<bool>;

    async fn exists(&self, username: &str) -> AppResult<bool>;
}
