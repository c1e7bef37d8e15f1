//! View-model mapping for the statistics page: turns server series into
//! render-ready labels so adapters never do their own formatting.

use chrono::NaiveDateTime;

use drill_core::model::{ConceptPerformance, OverviewStats, ProgressSeries, RecentActivity};

/// Headline labels for the overview cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewVm {
    pub total_questions_label: String,
    pub average_score_label: String,
    pub practice_time_label: String,
}

#[must_use]
pub fn map_overview(stats: &OverviewStats) -> OverviewVm {
    OverviewVm {
        total_questions_label: stats.total_questions.to_string(),
        average_score_label: format!("{}%", stats.average_score.round()),
        practice_time_label: format_minutes(stats.total_minutes),
    }
}

/// A chart-ready series: parallel labels and values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartVm {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[must_use]
pub fn map_concept_performance(performance: &ConceptPerformance) -> ChartVm {
    ChartVm {
        labels: performance.labels().to_vec(),
        values: performance.scores().to_vec(),
    }
}

#[must_use]
pub fn map_progress(progress: &ProgressSeries) -> ChartVm {
    ChartVm {
        labels: progress.dates().to_vec(),
        values: progress.scores().to_vec(),
    }
}

/// One row of the recent-activity table, fully formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRowVm {
    pub date_label: String,
    pub concept: String,
    pub score_label: String,
    pub time_label: String,
}

#[must_use]
pub fn map_activity(entries: &[RecentActivity]) -> Vec<ActivityRowVm> {
    entries
        .iter()
        .map(|entry| ActivityRowVm {
            date_label: format_date(&entry.date),
            concept: entry.concept.clone(),
            score_label: format!("{}%", entry.score.round()),
            time_label: format_minutes(entry.minutes_spent),
        })
        .collect()
}

/// `95` → `"1h 35m"`, `120` → `"2h"`, `34` → `"34m"`.
#[must_use]
pub fn format_minutes(minutes: u64) -> String {
    if minutes < 60 {
        return format!("{minutes}m");
    }
    let hours = minutes / 60;
    let remaining = minutes % 60;
    if remaining > 0 {
        format!("{hours}h {remaining}m")
    } else {
        format!("{hours}h")
    }
}

/// Reformat a service timestamp (`YYYY-MM-DD HH:MM:SS`) as `Aug 1, 2026`;
/// anything unparseable passes through untouched.
#[must_use]
pub fn format_date(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
