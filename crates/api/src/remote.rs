use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use drill_core::model::{
    AnswerResult, Concept, ConceptDetail, ConceptId, ConceptPerformance, OverviewStats,
    ProgressSeries, Question, QuestionId, RecentActivity,
};

/// Errors surfaced by remote-service adapters.
///
/// Every non-success outcome collapses into one of these variants; callers
/// never branch on specific HTTP status codes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RemoteError {
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

//
// ─── SERVICE CONTRACTS ─────────────────────────────────────────────────────────
//

/// The question service driving the practice session protocol.
#[async_trait]
pub trait QuestionService: Send + Sync {
    /// Fetch a fresh question for the next round.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success status.
    async fn random_question(&self) -> Result<Question, RemoteError>;

    /// Submit the selected option index and receive the verdict.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success status.
    async fn check_answer(
        &self,
        id: &QuestionId,
        answer: usize,
    ) -> Result<AnswerResult, RemoteError>;

    /// Ask the service to re-derive the stored answer for a question.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success status.
    async fn recheck_answer(&self, id: &QuestionId) -> Result<String, RemoteError>;

    /// Accept a proposed replacement answer for a question.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success status.
    async fn update_answer(&self, id: &QuestionId, answer: &str) -> Result<(), RemoteError>;

    /// Mark a question for human review.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success status.
    async fn flag_question(&self, id: &QuestionId) -> Result<(), RemoteError>;

    /// Remove a question from the pool.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success status.
    async fn delete_question(&self, id: &QuestionId) -> Result<(), RemoteError>;
}

/// Read surface for concept browsing.
#[async_trait]
pub trait ConceptService: Send + Sync {
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success status.
    async fn list_concepts(&self) -> Result<Vec<Concept>, RemoteError>;

    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success status.
    async fn concept_detail(&self, id: ConceptId) -> Result<ConceptDetail, RemoteError>;
}

/// Read surface for the statistics page.
#[async_trait]
pub trait StatsService: Send + Sync {
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success status.
    async fn overview(&self) -> Result<OverviewStats, RemoteError>;

    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success status.
    async fn concept_performance(&self) -> Result<ConceptPerformance, RemoteError>;

    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success status.
    async fn progress_over_time(&self) -> Result<ProgressSeries, RemoteError>;

    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success status.
    async fn recent_activity(&self) -> Result<Vec<RecentActivity>, RemoteError>;
}

//
// ─── IN-MEMORY BACKEND ─────────────────────────────────────────────────────────
//

/// Per-operation call counters exposed by [`InMemoryBackend`].
///
/// Tests use these to assert that an operation never reached the network
/// layer (e.g. submitting without a selection, or a declined delete).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestionCallCounts {
    pub random: u32,
    pub check: u32,
    pub recheck: u32,
    pub update: u32,
    pub flag: u32,
    pub delete: u32,
}

#[derive(Debug, Clone)]
struct AnswerKey {
    correct_index: usize,
    explanation: String,
}

#[derive(Default)]
struct BackendState {
    queue: VecDeque<Question>,
    answer_keys: HashMap<QuestionId, AnswerKey>,
    recheck_proposals: HashMap<QuestionId, String>,
    updated: Vec<(QuestionId, String)>,
    flagged: Vec<QuestionId>,
    deleted: Vec<QuestionId>,
    concepts: Vec<Concept>,
    concept_details: HashMap<ConceptId, ConceptDetail>,
    overview: Option<OverviewStats>,
    performance: Option<ConceptPerformance>,
    progress: Option<ProgressSeries>,
    activity: Vec<RecentActivity>,
    calls: QuestionCallCounts,
    failing: bool,
    fail_next_delete: bool,
}

/// Scriptable in-memory stand-in for the remote service, for tests and
/// offline prototyping. Questions are served in FIFO order of scripting.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    state: Arc<Mutex<BackendState>>,
}

impl InMemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a question to be served by the next `random_question` call,
    /// along with its answer key.
    pub fn push_question(&self, question: Question, correct_index: usize, explanation: &str) {
        let mut state = self.lock();
        state.answer_keys.insert(
            question.id().clone(),
            AnswerKey {
                correct_index,
                explanation: explanation.to_string(),
            },
        );
        state.queue.push_back(question);
    }

    /// Script the proposal returned by `recheck_answer` for a question.
    pub fn set_recheck_proposal(&self, id: QuestionId, proposal: &str) {
        self.lock().recheck_proposals.insert(id, proposal.to_string());
    }

    pub fn set_concepts(&self, concepts: Vec<Concept>) {
        self.lock().concepts = concepts;
    }

    pub fn set_concept_detail(&self, detail: ConceptDetail) {
        self.lock().concept_details.insert(detail.id, detail);
    }

    pub fn set_overview(&self, overview: OverviewStats) {
        self.lock().overview = Some(overview);
    }

    pub fn set_concept_performance(&self, performance: ConceptPerformance) {
        self.lock().performance = Some(performance);
    }

    pub fn set_progress(&self, progress: ProgressSeries) {
        self.lock().progress = Some(progress);
    }

    pub fn set_activity(&self, activity: Vec<RecentActivity>) {
        self.lock().activity = activity;
    }

    /// Make every subsequent call fail with `RemoteError::Connection` until
    /// switched back off.
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    /// Fail only the next `delete_question` call, leaving everything else up.
    pub fn fail_next_delete(&self) {
        self.lock().fail_next_delete = true;
    }

    #[must_use]
    pub fn calls(&self) -> QuestionCallCounts {
        self.lock().calls
    }

    #[must_use]
    pub fn updated(&self) -> Vec<(QuestionId, String)> {
        self.lock().updated.clone()
    }

    #[must_use]
    pub fn flagged(&self) -> Vec<QuestionId> {
        self.lock().flagged.clone()
    }

    #[must_use]
    pub fn deleted(&self) -> Vec<QuestionId> {
        self.lock().deleted.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BackendState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn check_failing(state: &BackendState) -> Result<(), RemoteError> {
        if state.failing {
            return Err(RemoteError::Connection("scripted failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl QuestionService for InMemoryBackend {
    async fn random_question(&self) -> Result<Question, RemoteError> {
        let mut state = self.lock();
        state.calls.random += 1;
        Self::check_failing(&state)?;
        state
            .queue
            .pop_front()
            .ok_or_else(|| RemoteError::Connection("no questions scripted".to_string()))
    }

    async fn check_answer(
        &self,
        id: &QuestionId,
        answer: usize,
    ) -> Result<AnswerResult, RemoteError> {
        let mut state = self.lock();
        state.calls.check += 1;
        Self::check_failing(&state)?;
        let key = state
            .answer_keys
            .get(id)
            .ok_or_else(|| RemoteError::Connection(format!("no answer key for {id}")))?;
        Ok(AnswerResult {
            correct: answer == key.correct_index,
            explanation: key.explanation.clone(),
        })
    }

    async fn recheck_answer(&self, id: &QuestionId) -> Result<String, RemoteError> {
        let mut state = self.lock();
        state.calls.recheck += 1;
        Self::check_failing(&state)?;
        state
            .recheck_proposals
            .get(id)
            .cloned()
            .ok_or_else(|| RemoteError::Connection(format!("no recheck scripted for {id}")))
    }

    async fn update_answer(&self, id: &QuestionId, answer: &str) -> Result<(), RemoteError> {
        let mut state = self.lock();
        state.calls.update += 1;
        Self::check_failing(&state)?;
        state.updated.push((id.clone(), answer.to_string()));
        Ok(())
    }

    async fn flag_question(&self, id: &QuestionId) -> Result<(), RemoteError> {
        let mut state = self.lock();
        state.calls.flag += 1;
        Self::check_failing(&state)?;
        state.flagged.push(id.clone());
        Ok(())
    }

    async fn delete_question(&self, id: &QuestionId) -> Result<(), RemoteError> {
        let mut state = self.lock();
        state.calls.delete += 1;
        Self::check_failing(&state)?;
        if state.fail_next_delete {
            state.fail_next_delete = false;
            return Err(RemoteError::Connection("scripted delete failure".to_string()));
        }
        state.deleted.push(id.clone());
        Ok(())
    }
}

#[async_trait]
impl ConceptService for InMemoryBackend {
    async fn list_concepts(&self) -> Result<Vec<Concept>, RemoteError> {
        let state = self.lock();
        Self::check_failing(&state)?;
        Ok(state.concepts.clone())
    }

    async fn concept_detail(&self, id: ConceptId) -> Result<ConceptDetail, RemoteError> {
        let state = self.lock();
        Self::check_failing(&state)?;
        state
            .concept_details
            .get(&id)
            .cloned()
            .ok_or_else(|| RemoteError::Connection(format!("no concept detail for {id}")))
    }
}

#[async_trait]
impl StatsService for InMemoryBackend {
    async fn overview(&self) -> Result<OverviewStats, RemoteError> {
        let state = self.lock();
        Self::check_failing(&state)?;
        state
            .overview
            .ok_or_else(|| RemoteError::Connection("no overview scripted".to_string()))
    }

    async fn concept_performance(&self) -> Result<ConceptPerformance, RemoteError> {
        let state = self.lock();
        Self::check_failing(&state)?;
        state
            .performance
            .clone()
            .ok_or_else(|| RemoteError::Connection("no performance scripted".to_string()))
    }

    async fn progress_over_time(&self) -> Result<ProgressSeries, RemoteError> {
        let state = self.lock();
        Self::check_failing(&state)?;
        state
            .progress
            .clone()
            .ok_or_else(|| RemoteError::Connection("no progress scripted".to_string()))
    }

    async fn recent_activity(&self) -> Result<Vec<RecentActivity>, RemoteError> {
        let state = self.lock();
        Self::check_failing(&state)?;
        Ok(state.activity.clone())
    }
}

//
// ─── AGGREGATE ─────────────────────────────────────────────────────────────────
//

/// Bundles the remote surfaces behind trait objects so adapters can be
/// swapped wholesale (HTTP in production, in-memory in tests).
#[derive(Clone)]
pub struct Remote {
    pub questions: Arc<dyn QuestionService>,
    pub concepts: Arc<dyn ConceptService>,
    pub stats: Arc<dyn StatsService>,
}

impl Remote {
    /// Wire all surfaces to the HTTP adapter for the given configuration.
    #[must_use]
    pub fn http(config: crate::http::ApiConfig) -> Self {
        let api = Arc::new(crate::http::HttpApi::new(config));
        Self {
            questions: api.clone(),
            concepts: api.clone(),
            stats: api,
        }
    }

    /// Wire all surfaces to one in-memory backend.
    #[must_use]
    pub fn in_memory(backend: InMemoryBackend) -> Self {
        let backend = Arc::new(backend);
        Self {
            questions: backend.clone(),
            concepts: backend.clone(),
            stats: backend,
        }
    }
}
