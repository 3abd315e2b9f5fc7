use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::common::UserId;
use crate::domains::users::models::user::UserRole;

/// Session token (random UUID, handed out as a bearer token)
pub type SessionToken = String;

/// Session data stored after a successful login
#[derive(Clone, Debug)]
pub struct Session {
    pub user_id: UserId,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// In-memory session store with a fixed TTL.
pub struct SessionStore {
    ttl: Duration,
    sessions: Arc<RwLock<HashMap<SessionToken, Session>>>,
}

impl SessionStore {
    pub fn new(ttl_hours: i64) -> Self {
        Self {
            ttl: Duration::hours(ttl_hours),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a new session and return the token
    pub async fn create_session(&self, user_id: UserId, role: UserRole) -> SessionToken {
        let token = Uuid::new_v4().to_string();
        let session = Session {
            user_id,
            role,
            created_at: Utc::now(),
        };
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), session);
        token
    }

    /// Get session by token, ignoring expired entries
    pub async fn get_session(&self, token: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(token)?;

        if Utc::now().signed_duration_since(session.created_at) >= self.ttl {
            return None;
        }

        Some(session.clone())
    }

    /// Delete session (logout)
    pub async fn delete_session(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }

    /// Drop expired sessions (run periodically)
    pub async fn cleanup_expired(&self) {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();
        sessions.retain(|_, session| now.signed_duration_since(session.created_at) < self.ttl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn session_roundtrip() {
        let store = SessionStore::new(24);
        let user_id = UserId::new();
        let token = store.create_session(user_id, UserRole::Organizer).await;
        assert!(!token.is_empty());

        let session = store.get_session(&token).await.unwrap();
        assert_eq!(session.user_id, user_id);
        assert_eq!(session.role, UserRole::Organizer);
    }

    #[tokio::test]
    async fn expired_sessions_are_invisible() {
        let store = SessionStore::new(24);
        let token = store.create_session(UserId::new(), UserRole::Admin).await;
        {
            let mut sessions = store.sessions.write().await;
            sessions.get_mut(&token).unwrap().created_at = Utc::now() - Duration::hours(25);
        }
        assert!(store.get_session(&token).await.is_none());

        store.cleanup_expired().await;
        assert!(store.sessions.read().await.is_empty());
    }

    #[tokio::test]
    async fn logout_removes_session() {
        let store = SessionStore::new(24);
        let token = store.create_session(UserId::new(), UserRole::Stallholder).await;
        store.delete_session(&token).await;
        assert!(store.get_session(&token).await.is_none());
    }
}
