//! Wiring of configuration, storage and the session manager for one run.

use chrono::{DateTime, FixedOffset, NaiveDate};
use ironlog_core::clock::{Clock, SystemClock};
use ironlog_core::error::Result;
use ironlog_core::session::{SessionManager, SessionRepository};
use ironlog_core::TrackerConfig;
use ironlog_infrastructure::{ConfigService, IronlogPaths, JsonFileStore, JsonSessionRepository};
use std::path::PathBuf;
use std::sync::Arc;

pub struct App {
    pub config: TrackerConfig,
    pub manager: SessionManager,
    repository: Arc<JsonSessionRepository>,
    clock: Arc<dyn Clock>,
}

impl App {
    /// Loads configuration, the saved sessions and any drafted open session.
    pub fn open(config_file: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Self> {
        let paths = IronlogPaths::resolve(config_file, data_dir)?;
        tracing::debug!(
            "Using config {:?} and data dir {:?}",
            paths.config_file(),
            paths.data_dir()
        );

        let config = ConfigService::new(paths.config_file()).load()?;
        let store = Arc::new(JsonFileStore::new(paths.data_dir()));
        let repository = Arc::new(JsonSessionRepository::from_config(store, &config));
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let mut manager = SessionManager::load(repository.clone(), clock.clone())?;
        if let Some(draft) = repository.load_active()? {
            if manager.find_session(draft.id).is_some() {
                tracing::warn!("Discarding draft of session {}, it was already saved", draft.id);
                repository.save_active(None)?;
            } else {
                manager.restore_active(draft)?;
            }
        }

        Ok(Self {
            config,
            manager,
            repository,
            clock,
        })
    }

    /// Writes the open session (or its absence) to the draft slot.
    pub fn save_draft(&self) -> Result<()> {
        self.repository.save_active(self.manager.active())
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
