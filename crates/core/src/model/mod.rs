mod concept;
mod ids;
mod insights;
mod question;
mod stats;

pub use ids::{ConceptId, ParseIdError, QuestionId};

pub use concept::{Concept, ConceptDetail};
pub use insights::{ConceptPerformance, OverviewStats, ProgressSeries, RecentActivity, SeriesError};
pub use question::{AnswerResult, CorrectionRecord, Question, QuestionError};
pub use stats::SessionStats;
