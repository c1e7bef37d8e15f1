#![forbid(unsafe_code)]

pub mod concepts;
pub mod error;
pub mod insights;
pub mod practice;

pub use error::PracticeError;

pub use concepts::ConceptBrowser;
pub use insights::{
    ActivityRowVm, ChartVm, OverviewVm, map_activity, map_concept_performance, map_overview,
    map_progress,
};
pub use practice::{
    ConfirmPrompt, DeleteOutcome, FeedbackTone, FeedbackView, PracticeController, PracticePhase,
    PracticeSnapshot, QuestionView,
};
