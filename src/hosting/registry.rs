use crate::GameError;
use crate::ID;
use crate::gameroom::Session;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Live matches by identifier.
/// Lookups from many connections proceed in parallel; inserts and
/// removals take the write lock briefly.
#[derive(Default)]
pub struct Registry {
    sessions: RwLock<HashMap<ID<Session>, Arc<Session>>>,
}

impl Registry {
    pub async fn insert(&self, session: Arc<Session>) {
        self.sessions.write().await.insert(session.id(), session);
    }
    /// Resolves a wire identifier; anything unparseable is simply unknown.
    pub async fn lookup(&self, game: &str) -> Result<Arc<Session>, GameError> {
        let id = ID::<Session>::try_from(game).map_err(|_| GameError::Lookup(game.to_string()))?;
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| GameError::Lookup(game.to_string()))
    }
    pub async fn remove(&self, id: ID<Session>) -> Option<Arc<Session>> {
        self.sessions.write().await.remove(&id)
    }
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
