mod controller;
mod snapshot;

// Public API of the practice subsystem.
pub use crate::error::PracticeError;
pub use controller::{ConfirmPrompt, DeleteOutcome, PracticeController, PracticePhase};
pub use snapshot::{FeedbackTone, FeedbackView, PracticeSnapshot, QuestionView};
