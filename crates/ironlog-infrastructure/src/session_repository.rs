//! JSON key-value backed SessionRepository implementation.

use crate::dto::SessionV1;
use ironlog_core::config::TrackerConfig;
use ironlog_core::error::Result;
use ironlog_core::session::{Session, SessionRepository};
use ironlog_core::storage::KeyValueStore;
use std::sync::Arc;

/// Persists sessions as JSON strings in a [`KeyValueStore`].
///
/// This implementation follows the layered design:
/// - Uses DTOs (`SessionV1`) for the stored shape
/// - Converts between DTOs and domain models
/// - Keeps the list and the drafted open session under separate keys
///
/// A key that was never written, or holds only whitespace, reads as empty.
pub struct JsonSessionRepository {
    store: Arc<dyn KeyValueStore>,
    sessions_key: String,
    active_key: String,
}

impl JsonSessionRepository {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        sessions_key: impl Into<String>,
        active_key: impl Into<String>,
    ) -> Self {
        Self {
            store,
            sessions_key: sessions_key.into(),
            active_key: active_key.into(),
        }
    }

    /// Uses the storage keys named in `config`.
    pub fn from_config(store: Arc<dyn KeyValueStore>, config: &TrackerConfig) -> Self {
        Self::new(
            store,
            config.sessions_key.clone(),
            config.active_session_key.clone(),
        )
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .store
            .get(key)?
            .filter(|value| !value.trim().is_empty()))
    }
}

impl SessionRepository for JsonSessionRepository {
    fn load_all(&self) -> Result<Vec<Session>> {
        let Some(content) = self.read(&self.sessions_key)? else {
            return Ok(Vec::new());
        };
        let dtos: Vec<SessionV1> = serde_json::from_str(&content)?;
        let sessions = dtos
            .into_iter()
            .map(Session::try_from)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!("Loaded {} sessions from '{}'", sessions.len(), self.sessions_key);
        Ok(sessions)
    }

    fn save_all(&self, sessions: &[Session]) -> Result<()> {
        let dtos: Vec<SessionV1> = sessions.iter().map(SessionV1::from).collect();
        let content = serde_json::to_string(&dtos)?;
        self.store.set(&self.sessions_key, &content)?;
        tracing::debug!("Saved {} sessions to '{}'", sessions.len(), self.sessions_key);
        Ok(())
    }

    fn load_active(&self) -> Result<Option<Session>> {
        let Some(content) = self.read(&self.active_key)? else {
            return Ok(None);
        };
        let dto: SessionV1 = serde_json::from_str(&content)?;
        Ok(Some(Session::try_from(dto)?))
    }

    fn save_active(&self, session: Option<&Session>) -> Result<()> {
        match session {
            Some(session) => {
                let content = serde_json::to_string(&SessionV1::from(session))?;
                self.store.set(&self.active_key, &content)
            }
            None => self.store.remove(&self.active_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::DateTime;
    use ironlog_core::session::Exercise;

    fn repository(store: Arc<MemoryStore>) -> JsonSessionRepository {
        JsonSessionRepository::from_config(store, &TrackerConfig::default())
    }

    fn session(id: u64) -> Session {
        let start = DateTime::parse_from_rfc3339("2024-02-01T07:00:00+01:00").unwrap();
        let mut session = Session::new(id, start, None, Some(75.0)).unwrap();
        let mut exercise = Exercise::new(id + 1, "Deadlift").unwrap();
        exercise.add_set(3, 140.0, start).unwrap();
        session.exercises.push(exercise);
        session
    }

    #[test]
    fn test_absent_or_blank_key_loads_empty() {
        let store = Arc::new(MemoryStore::new());
        let repo = repository(store.clone());
        assert!(repo.load_all().unwrap().is_empty());

        store.set("fitnessTrackerSessions", "   ").unwrap();
        assert!(repo.load_all().unwrap().is_empty());
        assert!(repo.load_active().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_all() {
        let store = Arc::new(MemoryStore::new());
        let repo = repository(store.clone());
        let sessions = vec![session(1), session(10)];

        repo.save_all(&sessions).unwrap();
        assert_eq!(repo.load_all().unwrap(), sessions);

        let raw = store.get("fitnessTrackerSessions").unwrap().unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"bodyWeight\":75.0"));
    }

    #[test]
    fn test_corrupt_list_is_serialization_error() {
        let store = Arc::new(MemoryStore::new());
        store.set("fitnessTrackerSessions", "{not json").unwrap();
        let err = repository(store).load_all().unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_active_slot_is_independent() {
        let store = Arc::new(MemoryStore::new());
        let repo = repository(store.clone());

        repo.save_active(Some(&session(5))).unwrap();
        assert_eq!(repo.load_active().unwrap(), Some(session(5)));
        assert!(repo.load_all().unwrap().is_empty());

        repo.save_active(None).unwrap();
        assert!(repo.load_active().unwrap().is_none());
        assert_eq!(store.get("fitnessTrackerActiveSession").unwrap(), None);
    }
}
