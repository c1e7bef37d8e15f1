use std::sync::Arc;

use api::remote::QuestionService;
use drill_core::model::{AnswerResult, CorrectionRecord, Question, SessionStats};

use super::snapshot::{FeedbackTone, FeedbackView, PracticeSnapshot, QuestionView};
use crate::error::PracticeError;

/// UI phase of the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticePhase {
    Loading,
    AwaitingAnswer,
    Submitted,
}

/// Blocking yes/no confirmation, asked before destructive actions.
///
/// Implemented by the adapter layer (a terminal prompt, a modal dialog) and
/// by tests with a canned answer.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent and nothing changed.
    Declined,
    /// The delete was issued and the session advanced to the next question.
    Advanced,
}

/// Drives the question-answer-feedback loop against the question service.
///
/// One controller owns one session: its stats, its current question, and its
/// correction state. All operations take `&mut self`, so no two operations
/// of the same session can ever be in flight at once; adapters disable the
/// triggering control simply by not being able to issue a second call.
pub struct PracticeController {
    questions: Arc<dyn QuestionService>,
    phase: PracticePhase,
    question: Option<Question>,
    selected: Option<usize>,
    feedback: Option<AnswerResult>,
    correction: Option<CorrectionRecord>,
    stats: SessionStats,
    notice: Option<String>,
}

impl PracticeController {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionService>) -> Self {
        Self {
            questions,
            phase: PracticePhase::Loading,
            question: None,
            selected: None,
            feedback: None,
            correction: None,
            stats: SessionStats::new(),
            notice: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> PracticePhase {
        self.phase
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// Emit a pure data snapshot for the rendering layer.
    #[must_use]
    pub fn snapshot(&self) -> PracticeSnapshot {
        PracticeSnapshot {
            phase: self.phase,
            question: self.question.as_ref().map(|question| QuestionView {
                prompt: question.prompt().to_string(),
                options: question.options().to_vec(),
                selected: self.selected,
            }),
            feedback: self.feedback.as_ref().map(|result| FeedbackView {
                tone: if result.correct {
                    FeedbackTone::Positive
                } else {
                    FeedbackTone::Negative
                },
                verdict: if result.correct { "Correct!" } else { "Incorrect" }.to_string(),
                explanation: result.explanation.clone(),
            }),
            proposed_answer: self
                .correction
                .as_ref()
                .map(|record| record.proposed_answer().to_string()),
            stats: self.stats,
            notice: self.notice.clone(),
        }
    }

    /// Fetch a fresh question and reset the round.
    ///
    /// On success the previous question, selection, feedback, and correction
    /// state are replaced wholesale and the phase returns to
    /// `AwaitingAnswer`. On failure nothing is touched; the caller surfaces
    /// the error and the prior round stays on screen. No automatic retry.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Remote` when the fetch fails.
    pub async fn load_next_question(&mut self) -> Result<(), PracticeError> {
        let question = self.questions.random_question().await?;
        tracing::debug!(id = %question.id(), "loaded question");

        self.question = Some(question);
        self.selected = None;
        self.feedback = None;
        self.correction = None;
        self.notice = None;
        self.phase = PracticePhase::AwaitingAnswer;
        Ok(())
    }

    /// Record the single selected option (radio-group semantics).
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::NoQuestion` without a current question and
    /// `PracticeError::InvalidOption` for an out-of-range index.
    pub fn select_option(&mut self, index: usize) -> Result<(), PracticeError> {
        let question = self.question.as_ref().ok_or(PracticeError::NoQuestion)?;
        if !question.has_option(index) {
            return Err(PracticeError::InvalidOption {
                index,
                len: question.options().len(),
            });
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Submit the selected option and record the verdict.
    ///
    /// A missing selection fails locally before any network call. On remote
    /// failure the phase stays `AwaitingAnswer` and neither counter moves;
    /// on success `questions_answered` bumps by one, `score` by one iff
    /// correct, and the phase becomes `Submitted`.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::NoQuestion`, `PracticeError::AlreadySubmitted`,
    /// `PracticeError::NoSelection`, or `PracticeError::Remote`.
    pub async fn submit_answer(&mut self) -> Result<(), PracticeError> {
        let question = self.question.as_ref().ok_or(PracticeError::NoQuestion)?;
        if self.phase == PracticePhase::Submitted {
            return Err(PracticeError::AlreadySubmitted);
        }
        let selected = self.selected.ok_or(PracticeError::NoSelection)?;

        let result = self.questions.check_answer(question.id(), selected).await?;

        self.stats.record(result.correct);
        self.feedback = Some(result);
        self.phase = PracticePhase::Submitted;
        Ok(())
    }

    /// Ask the service to re-derive the answer for the current question and
    /// hold the proposal for user review. Never touches stats or the phase.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::NoQuestion` or `PracticeError::Remote`.
    pub async fn recheck_question(&mut self) -> Result<(), PracticeError> {
        let question = self.question.as_ref().ok_or(PracticeError::NoQuestion)?;
        let proposal = self.questions.recheck_answer(question.id()).await?;
        self.correction = Some(CorrectionRecord::new(question.id().clone(), proposal));
        Ok(())
    }

    /// Accept the held proposal as the question's new answer.
    ///
    /// On failure the proposal stays open for another attempt.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::NoProposal` or `PracticeError::Remote`.
    pub async fn accept_new_answer(&mut self) -> Result<(), PracticeError> {
        let correction = self.correction.as_ref().ok_or(PracticeError::NoProposal)?;
        self.questions
            .update_answer(correction.question_id(), correction.proposed_answer())
            .await?;
        self.correction = None;
        self.notice = Some("Answer updated successfully".to_string());
        Ok(())
    }

    /// Discard the held proposal. Purely local; never issues a network call.
    pub fn reject_new_answer(&mut self) {
        self.correction = None;
    }

    /// Mark the current question for review. No phase change.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::NoQuestion` or `PracticeError::Remote`.
    pub async fn flag_question(&mut self) -> Result<(), PracticeError> {
        let question = self.question.as_ref().ok_or(PracticeError::NoQuestion)?;
        self.questions.flag_question(question.id()).await?;
        self.notice = Some("Question flagged for review".to_string());
        Ok(())
    }

    /// Delete the current question after confirmation, then advance.
    ///
    /// A declined confirmation issues no request and changes nothing. Once
    /// confirmed, the session advances to the next question whether or not
    /// the delete itself succeeded (fire-and-advance).
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::NoQuestion` without a current question, and
    /// `PracticeError::Remote` when the follow-up load fails.
    pub async fn delete_question(
        &mut self,
        prompt: &dyn ConfirmPrompt,
    ) -> Result<DeleteOutcome, PracticeError> {
        let question = self.question.as_ref().ok_or(PracticeError::NoQuestion)?;
        if !prompt.confirm("Are you sure you want to delete this question?") {
            return Ok(DeleteOutcome::Declined);
        }

        let id = question.id().clone();
        let deleted = match self.questions.delete_question(&id).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%id, error = %err, "delete failed, advancing anyway");
                false
            }
        };

        self.load_next_question().await?;
        if deleted {
            self.notice = Some("Question deleted successfully".to_string());
        }
        Ok(DeleteOutcome::Advanced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::remote::InMemoryBackend;
    use drill_core::model::QuestionId;

    struct Answering(bool);

    impl ConfirmPrompt for Answering {
        fn confirm(&self, _message: &str) -> bool {
            self.0
        }
    }

    fn backend_with(id: &str, options: &[&str], correct: usize) -> InMemoryBackend {
        let backend = InMemoryBackend::new();
        let question = Question::new(
            QuestionId::new(id),
            "2+2?",
            options.iter().map(ToString::to_string).collect(),
        )
        .unwrap();
        backend.push_question(question, correct, "4 is correct");
        backend
    }

    async fn loaded_controller(backend: &InMemoryBackend) -> PracticeController {
        let mut controller = PracticeController::new(Arc::new(backend.clone()));
        controller.load_next_question().await.unwrap();
        controller
    }

    #[tokio::test]
    async fn starts_in_loading_phase() {
        let controller = PracticeController::new(Arc::new(InMemoryBackend::new()));
        assert_eq!(controller.phase(), PracticePhase::Loading);
        assert!(controller.snapshot().question.is_none());
    }

    #[tokio::test]
    async fn load_resets_round_and_shows_submit() {
        let backend = backend_with("q1", &["3", "4", "5"], 1);
        let controller = loaded_controller(&backend).await;

        let snapshot = controller.snapshot();
        assert!(snapshot.submit_visible());
        assert!(!snapshot.feedback_visible());
        assert!(!snapshot.correction_visible());
        let view = snapshot.question.unwrap();
        assert_eq!(view.options, ["3", "4", "5"]);
        assert_eq!(view.selected, None);
    }

    #[tokio::test]
    async fn failed_load_leaves_prior_round_untouched() {
        let backend = backend_with("q1", &["3", "4", "5"], 1);
        let mut controller = loaded_controller(&backend).await;
        controller.select_option(2).unwrap();

        backend.set_failing(true);
        let err = controller.load_next_question().await.unwrap_err();
        assert!(matches!(err, PracticeError::Remote(_)));

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.phase, PracticePhase::AwaitingAnswer);
        assert_eq!(snapshot.question.unwrap().selected, Some(2));
    }

    #[tokio::test]
    async fn submit_without_selection_is_local_and_silent() {
        let backend = backend_with("q1", &["3", "4", "5"], 1);
        let mut controller = loaded_controller(&backend).await;

        let err = controller.submit_answer().await.unwrap_err();
        assert!(matches!(err, PracticeError::NoSelection));
        assert_eq!(backend.calls().check, 0);
        assert_eq!(controller.stats().questions_answered(), 0);
    }

    #[tokio::test]
    async fn select_rejects_out_of_range_index() {
        let backend = backend_with("q1", &["3", "4", "5"], 1);
        let mut controller = loaded_controller(&backend).await;

        let err = controller.select_option(3).unwrap_err();
        assert!(matches!(
            err,
            PracticeError::InvalidOption { index: 3, len: 3 }
        ));
    }

    #[tokio::test]
    async fn correct_submit_updates_stats_and_feedback() {
        let backend = backend_with("q1", &["3", "4", "5"], 1);
        let mut controller = loaded_controller(&backend).await;
        controller.select_option(1).unwrap();
        controller.submit_answer().await.unwrap();

        let snapshot = controller.snapshot();
        assert!(snapshot.feedback_visible());
        assert!(!snapshot.submit_visible());
        assert!(snapshot.next_visible());
        let feedback = snapshot.feedback.unwrap();
        assert_eq!(feedback.tone, FeedbackTone::Positive);
        assert_eq!(feedback.verdict, "Correct!");
        assert_eq!(feedback.explanation, "4 is correct");
        assert_eq!(snapshot.stats.score(), 1);
        assert_eq!(snapshot.stats.questions_answered(), 1);
    }

    #[tokio::test]
    async fn incorrect_submit_counts_round_but_not_score() {
        let backend = backend_with("q1", &["3", "4", "5"], 1);
        let mut controller = loaded_controller(&backend).await;
        controller.select_option(0).unwrap();
        controller.submit_answer().await.unwrap();

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.feedback.unwrap().tone, FeedbackTone::Negative);
        assert_eq!(snapshot.stats.score(), 0);
        assert_eq!(snapshot.stats.questions_answered(), 1);
    }

    #[tokio::test]
    async fn failed_submit_keeps_phase_and_counters() {
        let backend = backend_with("q1", &["3", "4", "5"], 1);
        let mut controller = loaded_controller(&backend).await;
        controller.select_option(1).unwrap();

        backend.set_failing(true);
        let err = controller.submit_answer().await.unwrap_err();
        assert!(matches!(err, PracticeError::Remote(_)));
        assert_eq!(controller.phase(), PracticePhase::AwaitingAnswer);
        assert_eq!(controller.stats().questions_answered(), 0);
    }

    #[tokio::test]
    async fn double_submit_is_rejected_locally() {
        let backend = backend_with("q1", &["3", "4", "5"], 1);
        let mut controller = loaded_controller(&backend).await;
        controller.select_option(1).unwrap();
        controller.submit_answer().await.unwrap();

        let err = controller.submit_answer().await.unwrap_err();
        assert!(matches!(err, PracticeError::AlreadySubmitted));
        assert_eq!(backend.calls().check, 1);
        assert_eq!(controller.stats().questions_answered(), 1);
    }

    #[tokio::test]
    async fn recheck_holds_proposal_without_touching_stats() {
        let backend = backend_with("q1", &["3", "4", "5"], 1);
        backend.set_recheck_proposal(QuestionId::new("q1"), "B) 4");
        let mut controller = loaded_controller(&backend).await;
        controller.select_option(1).unwrap();
        controller.submit_answer().await.unwrap();

        controller.recheck_question().await.unwrap();

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.proposed_answer.as_deref(), Some("B) 4"));
        assert!(snapshot.proposal_visible());
        assert_eq!(snapshot.phase, PracticePhase::Submitted);
        assert_eq!(snapshot.stats.questions_answered(), 1);
    }

    #[tokio::test]
    async fn accept_posts_proposal_and_clears_panel() {
        let backend = backend_with("q1", &["3", "4", "5"], 1);
        backend.set_recheck_proposal(QuestionId::new("q1"), "B) 4");
        let mut controller = loaded_controller(&backend).await;
        controller.recheck_question().await.unwrap();

        controller.accept_new_answer().await.unwrap();

        assert_eq!(
            backend.updated(),
            vec![(QuestionId::new("q1"), "B) 4".to_string())]
        );
        let snapshot = controller.snapshot();
        assert!(snapshot.proposed_answer.is_none());
        assert_eq!(snapshot.notice.as_deref(), Some("Answer updated successfully"));
    }

    #[tokio::test]
    async fn failed_accept_leaves_panel_open() {
        let backend = backend_with("q1", &["3", "4", "5"], 1);
        backend.set_recheck_proposal(QuestionId::new("q1"), "B) 4");
        let mut controller = loaded_controller(&backend).await;
        controller.recheck_question().await.unwrap();

        backend.set_failing(true);
        assert!(controller.accept_new_answer().await.is_err());
        assert!(controller.snapshot().proposal_visible());
    }

    #[tokio::test]
    async fn reject_is_local_and_hides_panel() {
        let backend = backend_with("q1", &["3", "4", "5"], 1);
        backend.set_recheck_proposal(QuestionId::new("q1"), "B) 4");
        let mut controller = loaded_controller(&backend).await;
        controller.recheck_question().await.unwrap();
        let calls_before = backend.calls();

        controller.reject_new_answer();

        assert!(!controller.snapshot().proposal_visible());
        assert_eq!(backend.calls(), calls_before);
    }

    #[tokio::test]
    async fn flag_reports_confirmation_without_phase_change() {
        let backend = backend_with("q1", &["3", "4", "5"], 1);
        let mut controller = loaded_controller(&backend).await;

        controller.flag_question().await.unwrap();

        assert_eq!(backend.flagged(), vec![QuestionId::new("q1")]);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.phase, PracticePhase::AwaitingAnswer);
        assert_eq!(snapshot.notice.as_deref(), Some("Question flagged for review"));
    }

    #[tokio::test]
    async fn declined_delete_issues_no_request() {
        let backend = backend_with("q1", &["3", "4", "5"], 1);
        let mut controller = loaded_controller(&backend).await;
        let before = controller.snapshot();

        let outcome = controller.delete_question(&Answering(false)).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(backend.calls().delete, 0);
        assert_eq!(controller.snapshot(), before);
    }

    #[tokio::test]
    async fn confirmed_delete_advances_to_next_question() {
        let backend = backend_with("q1", &["3", "4", "5"], 1);
        let next = Question::new(
            QuestionId::new("q2"),
            "3+3?",
            vec!["5".to_string(), "6".to_string()],
        )
        .unwrap();
        backend.push_question(next, 1, "6 is correct");
        let mut controller = loaded_controller(&backend).await;

        let outcome = controller.delete_question(&Answering(true)).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Advanced);
        assert_eq!(backend.deleted(), vec![QuestionId::new("q1")]);
        assert_eq!(controller.current_question().unwrap().id().as_str(), "q2");
        assert_eq!(controller.phase(), PracticePhase::AwaitingAnswer);
    }

    #[tokio::test]
    async fn delete_failure_still_advances() {
        let backend = backend_with("q1", &["3", "4", "5"], 1);
        let next = Question::new(
            QuestionId::new("q2"),
            "3+3?",
            vec!["5".to_string(), "6".to_string()],
        )
        .unwrap();
        backend.push_question(next, 1, "6 is correct");
        let mut controller = loaded_controller(&backend).await;
        backend.fail_next_delete();

        let outcome = controller.delete_question(&Answering(true)).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Advanced);
        assert!(backend.deleted().is_empty());
        assert_eq!(controller.current_question().unwrap().id().as_str(), "q2");
        // the round advanced without pretending the delete worked
        assert!(controller.snapshot().notice.is_none());
    }
}
