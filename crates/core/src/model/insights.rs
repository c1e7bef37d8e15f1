use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SeriesError {
    #[error("series length mismatch: {labels} labels vs {values} values")]
    LengthMismatch { labels: usize, values: usize },
}

/// Headline numbers for the statistics page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverviewStats {
    pub total_questions: u64,
    /// Percentage in `0..=100`.
    pub average_score: f64,
    pub total_minutes: u64,
}

/// Per-concept score series, chart-ready as parallel label/value vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptPerformance {
    labels: Vec<String>,
    scores: Vec<f64>,
}

impl ConceptPerformance {
    /// # Errors
    ///
    /// Returns `SeriesError::LengthMismatch` when the vectors differ in length.
    pub fn new(labels: Vec<String>, scores: Vec<f64>) -> Result<Self, SeriesError> {
        if labels.len() != scores.len() {
            return Err(SeriesError::LengthMismatch {
                labels: labels.len(),
                values: scores.len(),
            });
        }
        Ok(Self { labels, scores })
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }
}

/// Average score per day, ordered by date.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSeries {
    dates: Vec<String>,
    scores: Vec<f64>,
}

impl ProgressSeries {
    /// # Errors
    ///
    /// Returns `SeriesError::LengthMismatch` when the vectors differ in length.
    pub fn new(dates: Vec<String>, scores: Vec<f64>) -> Result<Self, SeriesError> {
        if dates.len() != scores.len() {
            return Err(SeriesError::LengthMismatch {
                labels: dates.len(),
                values: scores.len(),
            });
        }
        Ok(Self { dates, scores })
    }

    #[must_use]
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    #[must_use]
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }
}

/// One row of the recent-activity table.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentActivity {
    /// Timestamp as the service reports it (`YYYY-MM-DD HH:MM:SS`).
    pub date: String,
    pub concept: String,
    /// Percentage in `0..=100`.
    pub score: f64,
    pub minutes_spent: u64,
}
