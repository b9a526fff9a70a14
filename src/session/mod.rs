//! In-memory session store.
//!
//! Maps a Discord user to the credential returned by the API at login.
//! Nothing is persisted; a restart logs everyone out.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::models::ApiId;

/// Discord user id of the operator issuing commands.
pub type OperatorId = u64;

/// Cached login for one operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub user_id: Option<ApiId>,
    pub user_group_id: Option<ApiId>,
    pub campaign_id: Option<ApiId>,
}

/// Operator credentials, shared between interaction tasks.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<OperatorId, Credential>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a credential, replacing any previous login of the operator.
    pub async fn put(&self, operator: OperatorId, credential: Credential) {
        self.sessions.write().await.insert(operator, credential);
    }

    pub async fn get(&self, operator: OperatorId) -> Option<Credential> {
        self.sessions.read().await.get(&operator).cloned()
    }

    /// Change the active campaign of a logged-in operator.
    ///
    /// Returns `false` when the operator has no session.
    pub async fn set_campaign(&self, operator: OperatorId, campaign_id: ApiId) -> bool {
        match self.sessions.write().await.get_mut(&operator) {
            Some(credential) => {
                credential.campaign_id = Some(campaign_id);
                true
            }
            None => false,
        }
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(token: &str) -> Credential {
        Credential {
            token: token.to_string(),
            user_id: Some(ApiId::Int(1)),
            user_group_id: Some(ApiId::Int(10)),
            campaign_id: Some(ApiId::Int(100)),
        }
    }

    #[tokio::test]
    async fn test_get_missing_operator() {
        let store = SessionStore::new();
        assert!(store.get(7).await.is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_previous_login() {
        let store = SessionStore::new();
        store.put(7, credential("first")).await;
        store.put(7, credential("second")).await;

        assert_eq!(store.count().await, 1);
        assert_eq!(store.get(7).await.unwrap().token, "second");
    }

    #[tokio::test]
    async fn test_set_campaign_keeps_other_fields() {
        let store = SessionStore::new();
        store.put(7, credential("tok")).await;

        assert!(store.set_campaign(7, ApiId::from("55")).await);

        let updated = store.get(7).await.unwrap();
        assert_eq!(updated.token, "tok");
        assert_eq!(updated.user_id, Some(ApiId::Int(1)));
        assert_eq!(updated.user_group_id, Some(ApiId::Int(10)));
        assert_eq!(updated.campaign_id, Some(ApiId::from("55")));
    }

    #[tokio::test]
    async fn test_set_campaign_without_session() {
        let store = SessionStore::new();
        assert!(!store.set_campaign(7, ApiId::Int(1)).await);
        assert!(store.get(7).await.is_none());
    }
}
