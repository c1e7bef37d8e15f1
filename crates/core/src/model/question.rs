use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt is empty")]
    EmptyPrompt,

    #[error("question has {len} options, at least 2 required")]
    TooFewOptions { len: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },
}

/// A question as served for one practice round.
///
/// Immutable on the client; the next round replaces it wholesale. Options
/// keep the exact order the service sent them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` for a blank prompt,
    /// `QuestionError::TooFewOptions` for fewer than two options, and
    /// `QuestionError::EmptyOption` for a blank option.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions { len: options.len() });
        }
        if let Some(index) = options.iter().position(|option| option.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }

        Ok(Self {
            id,
            prompt,
            options,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// True if `index` addresses one of this question's options.
    #[must_use]
    pub fn has_option(&self, index: usize) -> bool {
        index < self.options.len()
    }
}

//
// ─── ANSWER FEEDBACK ───────────────────────────────────────────────────────────
//

/// Outcome of checking a submitted answer, as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub correct: bool,
    pub explanation: String,
}

/// A proposed replacement answer produced by a recheck.
///
/// Held transiently until the user accepts or rejects it; always tied to the
/// question it was derived for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionRecord {
    question_id: QuestionId,
    proposed_answer: String,
}

impl CorrectionRecord {
    #[must_use]
    pub fn new(question_id: QuestionId, proposed_answer: impl Into<String>) -> Self {
        Self {
            question_id,
            proposed_answer: proposed_answer.into(),
        }
    }

    #[must_use]
    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    #[must_use]
    pub fn proposed_answer(&self) -> &str {
        &self.proposed_answer
    }
}
