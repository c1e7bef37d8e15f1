#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    AnswerResult, Concept, ConceptDetail, ConceptId, ConceptPerformance, CorrectionRecord,
    OverviewStats, ProgressSeries, Question, QuestionError, QuestionId, RecentActivity,
    SeriesError, SessionStats,
};
