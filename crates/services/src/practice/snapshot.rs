use drill_core::model::SessionStats;

use super::controller::PracticePhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Positive,
    Negative,
}

/// Feedback panel contents for a submitted round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackView {
    pub tone: FeedbackTone,
    pub verdict: String,
    pub explanation: String,
}

/// The current question as the adapter should render it: prompt, options in
/// the exact order received, and the single selected index (radio-group
/// semantics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
}

/// Pure data snapshot of the controller for a rendering layer to consume.
///
/// Panel visibility is derived entirely from the phase, so any adapter
/// renders the same UI state for the same snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeSnapshot {
    pub phase: PracticePhase,
    pub question: Option<QuestionView>,
    pub feedback: Option<FeedbackView>,
    pub proposed_answer: Option<String>,
    pub stats: SessionStats,
    pub notice: Option<String>,
}

impl PracticeSnapshot {
    /// The answer-submission control is only offered before the verdict.
    #[must_use]
    pub fn submit_visible(&self) -> bool {
        self.phase == PracticePhase::AwaitingAnswer
    }

    /// The "next question" control replaces the submit control.
    #[must_use]
    pub fn next_visible(&self) -> bool {
        self.phase == PracticePhase::Submitted
    }

    #[must_use]
    pub fn feedback_visible(&self) -> bool {
        self.phase == PracticePhase::Submitted && self.feedback.is_some()
    }

    /// Correction controls (recheck/flag/delete) open up once a round has
    /// been submitted.
    #[must_use]
    pub fn correction_visible(&self) -> bool {
        self.phase == PracticePhase::Submitted
    }

    /// The proposed-answer review panel, shown after a successful recheck.
    #[must_use]
    pub fn proposal_visible(&self) -> bool {
        self.proposed_answer.is_some()
    }
}
