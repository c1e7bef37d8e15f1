//! Text rendering of controller snapshots. Pure string builders so the
//! session logic stays testable without a terminal attached.

use drill_core::model::Concept;
use services::{ActivityRowVm, ChartVm, FeedbackTone, OverviewVm, PracticeSnapshot};

#[must_use]
pub fn render_practice(snapshot: &PracticeSnapshot) -> String {
    let mut out = String::new();

    if let Some(notice) = &snapshot.notice {
        out.push_str(&format!("* {notice}\n\n"));
    }

    match &snapshot.question {
        Some(view) => {
            out.push_str(&format!("{}\n", view.prompt));
            for (index, option) in view.options.iter().enumerate() {
                let marker = if view.selected == Some(index) {
                    "(*)"
                } else {
                    "( )"
                };
                out.push_str(&format!("  {marker} {index}. {option}\n"));
            }
        }
        None => out.push_str("Loading question...\n"),
    }

    if let Some(feedback) = &snapshot.feedback {
        if snapshot.feedback_visible() {
            let tone = match feedback.tone {
                FeedbackTone::Positive => "+",
                FeedbackTone::Negative => "-",
            };
            out.push_str(&format!("\n[{tone}] {}\n{}\n", feedback.verdict, feedback.explanation));
        }
    }

    if let Some(proposal) = &snapshot.proposed_answer {
        out.push_str(&format!(
            "\nProposed new answer: {proposal}\n  [a]ccept  [x] reject\n"
        ));
    }

    out.push_str(&format!(
        "\nScore: {}/{}\n",
        snapshot.stats.score(),
        snapshot.stats.questions_answered()
    ));

    let mut actions: Vec<&str> = Vec::new();
    if snapshot.submit_visible() {
        actions.push("[0-9] select  [s]ubmit");
    }
    if snapshot.next_visible() {
        actions.push("[n]ext");
    }
    if snapshot.correction_visible() {
        actions.push("[r]echeck  [f]lag  [d]elete");
    }
    actions.push("[c]oncepts  [t] stats  [q]uit");
    out.push_str(&format!("{}\n", actions.join("  ")));

    out
}

#[must_use]
pub fn render_concepts(concepts: &[&Concept]) -> String {
    if concepts.is_empty() {
        return "No concepts match the current filters.\n".to_string();
    }
    let mut out = String::new();
    for concept in concepts {
        let difficulty = concept.difficulty.as_deref().unwrap_or("unrated");
        out.push_str(&format!(
            "[{}] {} ({difficulty}, {} questions)\n      {}\n",
            concept.id, concept.name, concept.question_count, concept.description
        ));
    }
    out
}

#[must_use]
pub fn render_stats(
    overview: &OverviewVm,
    performance: &ChartVm,
    progress: &ChartVm,
    activity: &[ActivityRowVm],
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Questions answered: {}\nAverage score:      {}\nPractice time:      {}\n",
        overview.total_questions_label, overview.average_score_label, overview.practice_time_label
    ));

    out.push_str("\nBy concept:\n");
    for (label, value) in performance.labels.iter().zip(&performance.values) {
        out.push_str(&format!("  {label:<24} {value:>5.1}%\n"));
    }

    out.push_str("\nProgress:\n");
    for (label, value) in progress.labels.iter().zip(&progress.values) {
        out.push_str(&format!("  {label:<12} {value:>5.1}%\n"));
    }

    out.push_str("\nRecent activity:\n");
    for row in activity {
        out.push_str(&format!(
            "  {}  {}  {}  {}\n",
            row.date_label, row.concept, row.score_label, row.time_label
        ));
    }
    out
}
