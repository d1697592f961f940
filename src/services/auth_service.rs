use std::sync::Arc;

use chrono::Duration;

use crate::error::{Error, Result};
use crate::models::user::User;
use crate::services::user_service::UserStore;
use crate::utils::{crypto, token::TokenKeys};

/// Credential checking and bearer-token authorization. Stateless: tokens are
/// never stored, every protected request is re-validated from scratch.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    keys: TokenKeys,
    token_ttl: Duration,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, keys: TokenKeys, token_ttl: Duration) -> Self {
        Self {
            store,
            keys,
            token_ttl,
        }
    }

    /// Exchanges a mobile number and password for a signed access token.
    ///
    /// Unknown numbers and wrong passwords fail identically. The active flag
    /// is not consulted here; every protected request re-checks it, so a
    /// token obtained by an inactive account is unusable.
    pub async fn authenticate(&self, mobile_no: &str, password: &str) -> Result<String> {
        let Some(user) = self.store.find_by_mobile(mobile_no).await? else {
            // Burn a hash so an unknown number costs as much as a wrong password.
            let _ = crypto::hash_password(password);
            return Err(Error::AuthenticationFailed);
        };

        if !crypto::verify_password(password, &user.password_hash) {
            return Err(Error::AuthenticationFailed);
        }

        let token = self.keys.issue(&user.mobile_no, self.token_ttl)?;
        Ok(token)
    }

    /// Resolves a bearer token to its account: token signature and expiry,
    /// then subject lookup, then the active flag. Store faults propagate as
    /// server errors, never as credential rejections.
    pub async fn authorize(&self, token: &str) -> Result<User> {
        let subject = self
            .keys
            .validate(token)
            .map_err(|_| Error::InvalidCredentials)?;

        let user = self
            .store
            .find_by_mobile(&subject)
            .await?
            .ok_or(Error::InvalidCredentials)?;

        if !user.is_active {
            return Err(Error::InactiveAccount);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::user_service::MockUserStore;
    use chrono::Utc;

    const SECRET: &str = "auth-service-test-secret";

    fn test_user(mobile_no: &str, password: &str, is_active: bool) -> User {
        User {
            id: 1,
            mobile_no: mobile_no.to_string(),
            full_name: Some("Test User".to_string()),
            password_hash: crypto::hash_password(password).expect("hash"),
            is_active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(store: MockUserStore) -> AuthService {
        AuthService::new(
            Arc::new(store),
            TokenKeys::new(SECRET),
            Duration::minutes(30),
        )
    }

    #[tokio::test]
    async fn authenticate_issues_a_token_that_authorizes_the_same_user() {
        let user = test_user("9990001111", "pass1234", true);
        let mut store = MockUserStore::new();
        let found = user.clone();
        store
            .expect_find_by_mobile()
            .returning(move |_| Ok(Some(found.clone())));

        let auth = service(store);
        let token = auth.authenticate("9990001111", "pass1234").await.unwrap();
        let resolved = auth.authorize(&token).await.unwrap();
        assert_eq!(resolved.mobile_no, user.mobile_no);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_number_fail_identically() {
        let user = test_user("9990001111", "pass1234", true);
        let mut store = MockUserStore::new();
        store.expect_find_by_mobile().returning(move |mobile| {
            if mobile == "9990001111" {
                Ok(Some(user.clone()))
            } else {
                Ok(None)
            }
        });

        let auth = service(store);
        let wrong_password = auth
            .authenticate("9990001111", "wrong-password")
            .await
            .unwrap_err();
        let unknown_number = auth
            .authenticate("0000000000", "anything")
            .await
            .unwrap_err();
        assert!(matches!(wrong_password, Error::AuthenticationFailed));
        assert!(matches!(unknown_number, Error::AuthenticationFailed));
    }

    #[tokio::test]
    async fn inactive_account_can_log_in_but_not_authorize() {
        let user = test_user("9990001111", "pass1234", false);
        let mut store = MockUserStore::new();
        let found = user.clone();
        store
            .expect_find_by_mobile()
            .returning(move |_| Ok(Some(found.clone())));

        let auth = service(store);
        let token = auth.authenticate("9990001111", "pass1234").await.unwrap();
        let err = auth.authorize(&token).await.unwrap_err();
        assert!(matches!(err, Error::InactiveAccount));
    }

    #[tokio::test]
    async fn token_for_a_vanished_subject_is_invalid() {
        let mut store = MockUserStore::new();
        store.expect_find_by_mobile().returning(|_| Ok(None));

        let auth = service(store);
        let token = TokenKeys::new(SECRET)
            .issue("9990001111", Duration::minutes(30))
            .unwrap();
        let err = auth.authorize(&token).await.unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
    }

    #[tokio::test]
    async fn expired_token_is_rejected_before_the_store_is_consulted() {
        // No expectation configured: a store call would panic the mock.
        let store = MockUserStore::new();
        let auth = service(store);
        let token = TokenKeys::new(SECRET)
            .issue("9990001111", Duration::minutes(-5))
            .unwrap();
        let err = auth.authorize(&token).await.unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
    }

    #[tokio::test]
    async fn store_faults_are_not_reported_as_credential_errors() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_mobile()
            .returning(|_| Err(Error::Database(sqlx::Error::PoolTimedOut)));

        let auth = service(store);
        let token = TokenKeys::new(SECRET)
            .issue("9990001111", Duration::minutes(30))
            .unwrap();
        let err = auth.authorize(&token).await.unwrap_err();
        assert!(matches!(err, Error::Database(_)));
    }
}
