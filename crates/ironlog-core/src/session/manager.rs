use super::model::{Exercise, Session, SetEntry, validate_body_weight, validate_times};
use super::repository::SessionRepository;
use crate::clock::Clock;
use crate::error::{IronlogError, Result};
use crate::id::IdGenerator;
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;

/// Form values for starting a workout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartSession {
    /// Required; `None` is reported as a validation error
    pub start_time: Option<DateTime<FixedOffset>>,
    /// Stored if present, but does not close the session
    pub end_time: Option<DateTime<FixedOffset>>,
    pub body_weight: Option<f64>,
}

/// Form values for retroactively editing a saved session.
///
/// `end_time` and `body_weight` replace the stored values, so `None` clears
/// them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionEdit {
    pub start_time: Option<DateTime<FixedOffset>>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub body_weight: Option<f64>,
}

/// Owns the session list and the single open-session slot.
///
/// `SessionManager` is responsible for:
/// - Loading the persisted sessions once at start-up
/// - Starting, stopping and ending the open session
/// - Editing the open session's exercises and sets
/// - Retroactive edits of saved sessions
/// - Writing the whole list back whenever a session is ended or edited
///
/// The open session lives only in memory. Every operation either completes
/// or leaves the manager exactly as it was.
pub struct SessionManager {
    /// Persisted sessions in storage order
    sessions: Vec<Session>,
    /// The open session, if a workout is in progress
    active: Option<Session>,
    /// Persistent storage backend for the session list
    repository: Arc<dyn SessionRepository>,
    /// Time source for ids, set timestamps and the stop button
    clock: Arc<dyn Clock>,
    ids: IdGenerator,
}

impl SessionManager {
    /// Creates a manager by reading the persisted session list.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    pub fn load(repository: Arc<dyn SessionRepository>, clock: Arc<dyn Clock>) -> Result<Self> {
        let sessions = repository.load_all()?;
        Ok(Self::with_sessions(sessions, repository, clock))
    }

    /// Creates a manager around an already loaded session list.
    pub fn with_sessions(
        sessions: Vec<Session>,
        repository: Arc<dyn SessionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut ids = IdGenerator::default();
        for session in &sessions {
            observe_ids(&mut ids, session);
        }
        tracing::debug!(
            "Loaded {} sessions, id floor {}",
            sessions.len(),
            ids.last()
        );

        Self {
            sessions,
            active: None,
            repository,
            clock,
            ids,
        }
    }

    /// Persisted sessions in storage order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// The open session, if any.
    pub fn active(&self) -> Option<&Session> {
        self.active.as_ref()
    }

    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn find_session(&self, session_id: u64) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == session_id)
    }

    /// Like [`Self::find_session`], but an unknown id is a `NotFound` error.
    pub fn get_session(&self, session_id: u64) -> Result<&Session> {
        self.find_session(session_id)
            .ok_or_else(|| IronlogError::not_found("session", session_id.to_string()))
    }

    /// Puts a previously drafted open session back into the active slot.
    ///
    /// # Errors
    ///
    /// - `State` if a session is already open
    /// - `State` if the draft was already saved to the session list
    pub fn restore_active(&mut self, session: Session) -> Result<()> {
        if self.active.is_some() {
            return Err(IronlogError::state("A workout session is already in progress"));
        }
        if self.find_session(session.id).is_some() {
            return Err(IronlogError::state(format!(
                "Session {} has already been saved",
                session.id
            )));
        }
        observe_ids(&mut self.ids, &session);
        self.active = Some(session);
        Ok(())
    }

    // ============================================================================
    // Lifecycle
    // ============================================================================

    /// Starts a new open session.
    ///
    /// # Errors
    ///
    /// - `Validation` if the start time is missing, the end time is before it,
    ///   or the body weight is not positive
    /// - `State` if a session is already open
    pub fn start_session(&mut self, request: StartSession) -> Result<&Session> {
        let start_time = request.start_time.ok_or_else(|| {
            IronlogError::validation("Please select a start time for your workout")
        })?;
        if self.active.is_some() {
            return Err(IronlogError::state("A workout session is already in progress"));
        }

        let id = self.next_id()?;
        let session = Session::new(id, start_time, request.end_time, request.body_weight)?;
        tracing::info!("Workout session {} started at {}", session.id, session.start_time);

        Ok(self.active.insert(session))
    }

    /// Replaces the open session's times.
    ///
    /// A missing start time keeps the current one; a missing end time clears
    /// it, which puts the duration back to "ongoing". Nothing is persisted.
    pub fn update_session_times(
        &mut self,
        start_time: Option<DateTime<FixedOffset>>,
        end_time: Option<DateTime<FixedOffset>>,
    ) -> Result<&Session> {
        let session = self.active_mut()?;
        let start_time = start_time.unwrap_or(session.start_time);
        session.set_times(start_time, end_time)?;
        Ok(session)
    }

    /// Records the current time as the open session's end time without
    /// closing it, so times can still be adjusted before saving.
    pub fn stop_session(&mut self) -> Result<&Session> {
        let now = self.clock.now();
        let session = self.active_mut()?;
        let end_time = now.max(session.start_time);
        session.end_time = Some(end_time);
        tracing::debug!("Session {} stopped at {}", session.id, end_time);
        Ok(session)
    }

    /// Closes the open session and appends it to the persisted list.
    ///
    /// `end_time` falls back to the end time already recorded on the open
    /// session (for example by [`Self::stop_session`]).
    ///
    /// # Errors
    ///
    /// - `State` if no session is open (so ending twice never duplicates)
    /// - `Validation` if no end time is available or it precedes the start
    /// - Storage errors; the session then stays open and unsaved
    pub fn end_session(&mut self, end_time: Option<DateTime<FixedOffset>>) -> Result<Session> {
        let active = self
            .active
            .as_ref()
            .ok_or_else(|| IronlogError::state("No active workout session"))?;
        let end_time = end_time.or(active.end_time).ok_or_else(|| {
            IronlogError::validation("Please set an end time before ending the session")
        })?;
        validate_times(active.start_time, Some(end_time))?;

        let mut ended = active.clone();
        ended.end_time = Some(end_time);
        self.sessions.push(ended.clone());

        if let Err(e) = self.repository.save_all(&self.sessions) {
            self.sessions.pop();
            return Err(e);
        }

        self.active = None;
        tracing::info!(
            "Workout session {} completed ({})",
            ended.id,
            ended.duration()
        );
        Ok(ended)
    }

    /// Retroactively edits a saved session and re-persists the list.
    ///
    /// # Errors
    ///
    /// - `Validation` if the start time is missing, the id is unknown, the end
    ///   time precedes the start or the body weight is not positive
    /// - Storage errors; the in-memory list is then left unchanged
    pub fn edit_session(&mut self, session_id: u64, edit: SessionEdit) -> Result<&Session> {
        let start_time = edit
            .start_time
            .ok_or_else(|| IronlogError::validation("Start time is required"))?;
        let index = self
            .sessions
            .iter()
            .position(|s| s.id == session_id)
            .ok_or_else(|| IronlogError::validation(format!("Unknown session id {}", session_id)))?;
        validate_body_weight(edit.body_weight)?;

        let mut edited = self.sessions[index].clone();
        edited.set_times(start_time, edit.end_time)?;
        edited.body_weight = edit.body_weight;

        let previous = std::mem::replace(&mut self.sessions[index], edited);
        if let Err(e) = self.repository.save_all(&self.sessions) {
            self.sessions[index] = previous;
            return Err(e);
        }

        tracing::info!("Session {} updated", session_id);
        Ok(&self.sessions[index])
    }

    // ============================================================================
    // Exercise / set editor
    // ============================================================================

    /// Appends a new exercise with no sets to the open session.
    pub fn add_exercise(&mut self, name: &str) -> Result<&Exercise> {
        if self.active.is_none() {
            return Err(IronlogError::state("Please start a workout session first"));
        }
        let id = self.next_id()?;
        let exercise = Exercise::new(id, name)?;
        let session = self.active_mut()?;
        tracing::debug!("Added {} to session {}", exercise.name, session.id);
        session.exercises.push(exercise);
        Ok(&session.exercises[session.exercises.len() - 1])
    }

    /// Logs a set on one of the open session's exercises.
    pub fn add_set(&mut self, exercise_id: u64, reps: i64, weight: f64) -> Result<&SetEntry> {
        let timestamp = self.clock.now();
        let exercise = self.active_exercise_mut(exercise_id)?;
        exercise.add_set(reps, weight, timestamp)
    }

    /// Removes a set by position. An out-of-range index changes nothing and
    /// yields `Ok(None)`.
    pub fn remove_set(&mut self, exercise_id: u64, index: usize) -> Result<Option<SetEntry>> {
        let exercise = self.active_exercise_mut(exercise_id)?;
        Ok(exercise.remove_set(index))
    }

    /// Removes an exercise from the open session once `confirm` agrees.
    ///
    /// `confirm` sees the exercise about to be removed. A declined
    /// confirmation or an unknown id leaves the session untouched and yields
    /// `Ok(None)`.
    pub fn remove_exercise<F>(&mut self, exercise_id: u64, confirm: F) -> Result<Option<Exercise>>
    where
        F: FnOnce(&Exercise) -> bool,
    {
        let session = self.active_mut()?;
        let Some(exercise) = session.exercise(exercise_id) else {
            return Ok(None);
        };
        if !confirm(exercise) {
            return Ok(None);
        }
        Ok(session.remove_exercise(exercise_id))
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    fn next_id(&mut self) -> Result<u64> {
        self.ids.next(self.clock.now().timestamp_millis())
    }

    fn active_mut(&mut self) -> Result<&mut Session> {
        self.active
            .as_mut()
            .ok_or_else(|| IronlogError::state("No active workout session"))
    }

    fn active_exercise_mut(&mut self, exercise_id: u64) -> Result<&mut Exercise> {
        self.active_mut()?
            .exercise_mut(exercise_id)
            .ok_or_else(|| IronlogError::validation(format!("Unknown exercise id {}", exercise_id)))
    }
}

fn observe_ids(ids: &mut IdGenerator, session: &Session) {
    ids.observe(session.id);
    for exercise in &session.exercises {
        ids.observe(exercise.id);
    }
}
