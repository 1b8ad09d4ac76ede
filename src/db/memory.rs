use std::collections::{hash_map::Entry, HashMap};

use tokio::sync::RwLock;

use crate::{db::CredentialStore, error::AppResult, models::Account};

/// Process-lifetime credential store backed by a `HashMap`
#[derive(Default)]
pub struct InMemoryCredentialStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn get(&self, username: &str) -> AppResult<Option<Account>> {
        Ok(self.accounts.read().await.get(username).cloned())
    }

    async fn insert_if_absent(&self, account: Account) -> AppResult<bool> {
        let mut accounts = self.accounts.write().await;
        match accounts.entry(account.username.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(account);
                Ok(true)
            }
        }
    }

    async fn exists(&self, username: &str) -> AppResult<bool> {
        Ok(self.accounts.read().await.contains_key(username))
    }
}
