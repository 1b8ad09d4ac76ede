/// Account registration and login
///
/// Passwords are hashed on tokio's blocking pool since Argon2 is deliberately slow.
use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::{
    db::CredentialStore,
    error::{AppError, AppResult},
    models::{Account, RegisterRequest, TokenResponse},
};

pub mod password;
pub mod token;

pub use token::{Claims, TokenIssuer, TOKEN_TYPE};

/// Verified against when the username is unknown, so both rejection paths cost one hash check
const DUMMY_PASSWORD: &str = "movierec-unknown-user";

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    tokens: TokenIssuer,
    dummy_hash: Arc<OnceCell<String>>,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, tokens: TokenIssuer) -> Self {
        Self {
            store,
            tokens,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    async fn dummy_hash(&self) -> AppResult<String> {
        let hash = self
            .dummy_hash
            .get_or_try_init(|| async {
                tokio::task::spawn_blocking(|| password::hash_password(DUMMY_PASSWORD)).await?
            })
            .await?;
        Ok(hash.clone())
    }

    /// Create a new account. Fails with `AlreadyExists` if the username is taken.
    ///
    /// The username is stored exactly as given; only all-blank names are rejected.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<()> {
        let username = request.username;
        if username.trim().is_empty() {
            return Err(AppError::InvalidInput("Username cannot be empty".to_string()));
        }
        if request.password.is_empty() {
            return Err(AppError::InvalidInput("Password cannot be empty".to_string()));
        }

        // Skip the expensive hash for obvious duplicates; insert_if_absent is still authoritative.
        if self.store.exists(&username).await? {
            return Err(AppError::AlreadyExists(username));
        }

        let plaintext = request.password;
        let password_hash =
            tokio::task::spawn_blocking(move || password::hash_password(&plaintext)).await??;

        let account = Account {
            username: username.clone(),
            email: request.email,
            full_name: request.full_name,
            password_hash,
        };

        if !self.store.insert_if_absent(account).await? {
            return Err(AppError::AlreadyExists(username));
        }

        tracing::info!(username = %username, "Account registered");
        Ok(())
    }

    /// Verify credentials and issue a session token
    pub async fn login(&self, username: &str, password: &str) -> AppResult<TokenResponse> {
        let account = self.store.get(username).await?;
        let hash = match &account {
            Some(account) => account.password_hash.clone(),
            None => self.dummy_hash().await?,
        };

        let plaintext = password.to_string();
        let matches =
            tokio::task::spawn_blocking(move || password::verify_password(&plaintext, &hash))
                .await??;

        if account.is_none() {
            tracing::info!(username = %username, "Login rejected: unknown user");
            return Err(AppError::InvalidCredentials);
        }
        if !matches {
            tracing::info!(username = %username, "Login rejected: bad password");
            return Err(AppError::InvalidCredentials);
        }

        let access_token = self.tokens.issue(username)?;
        tracing::info!(username = %username, "Login succeeded");

        Ok(TokenResponse {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
            username: username.to_string(),
        })
    }

    /// Decode a previously issued token.
    ///
    /// No route enforces tokens yet; this is the hook for when one does.
    pub fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.tokens.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryCredentialStore;
    use chrono::Utc;

    fn service() -> (AuthService, Arc<InMemoryCredentialStore>) {
        let store = Arc::new(InMemoryCredentialStore::new());
        let service = AuthService::new(store.clone(), TokenIssuer::new("test-secret", 30).unwrap());
        (service, store)
    }

    fn register_request(username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password: password.to_string(),
            full_name: Some("Test User".to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_password() {
        let (service, store) = service();
        service.register(register_request("alice", "pw1")).await.unwrap();

        let account = store.get("alice").await.unwrap().unwrap();
        assert_ne!(account.password_hash, "pw1");
        assert!(account.password_hash.starts_with("$argon2id$"));
        assert_eq!(account.full_name.as_deref(), Some("Test User"));
    }

    #[tokio::test]
    async fn test_duplicate_register_keeps_original_hash() {
        let (service, store) = service();
        service.register(register_request("alice", "pw1")).await.unwrap();
        let original = store.get("alice").await.unwrap().unwrap().password_hash;

        let result = service.register(register_request("alice", "pw2")).await;
        assert!(matches!(result, Err(AppError::AlreadyExists(_))));

        let after = store.get("alice").await.unwrap().unwrap().password_hash;
        assert_eq!(original, after);
    }

    #[tokio::test]
    async fn test_register_rejects_blank_username() {
        let (service, _) = service();
        let result = service.register(register_request("   ", "pw")).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_login_issues_token_for_subject() {
        let (service, _) = service();
        service.register(register_request("alice", "pw1")).await.unwrap();

        let issued_at = Utc::now().timestamp();
        let token = service.login("alice", "pw1").await.unwrap();
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.username, "alice");

        let claims = service.verify_token(&token.access_token).unwrap();
        assert_eq!(claims.sub, "alice");
        let ahead = claims.exp - issued_at;
        assert!((30 * 60 - 5..=30 * 60 + 5).contains(&ahead));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (service, _) = service();
        service.register(register_request("alice", "pw1")).await.unwrap();

        let result = service.login("alice", "nope").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let (service, _) = service();
        let result = service.login("ghost", "pw").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_unknown_user_still_checks_a_hash() {
        let (service, _) = service();
        assert!(service.dummy_hash.get().is_none());

        // Even the dummy password itself never logs in an unknown user
        let result = service.login("ghost", DUMMY_PASSWORD).await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));

        let hash = service.dummy_hash.get().unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_padded_username_is_kept_verbatim() {
        let (service, store) = service();
        service.register(register_request(" bob ", "pw")).await.unwrap();

        assert!(store.exists(" bob ").await.unwrap());
        assert!(!store.exists("bob").await.unwrap());

        let token = service.login(" bob ", "pw").await.unwrap();
        assert_eq!(token.username, " bob ");
        assert_eq!(service.verify_token(&token.access_token).unwrap().sub, " bob ");

        // A distinct, unpadded name is a separate account
        service.register(register_request("bob", "other")).await.unwrap();
        assert!(matches!(
            service.login("bob", "pw").await,
            Err(AppError::InvalidCredentials)
        ));
        assert!(service.login("bob", "other").await.is_ok());
    }
}
