//! Wire-format DTOs for the remote service, kept separate from the domain
//! model so serde naming quirks (camelCase stats fields, `newAnswer`) never
//! leak out of the adapter.

use serde::{Deserialize, Serialize};

use drill_core::model::{
    AnswerResult, Concept, ConceptDetail, ConceptId, OverviewStats, Question, QuestionId,
    RecentActivity,
};

use crate::remote::RemoteError;

#[derive(Debug, Deserialize)]
pub(crate) struct QuestionDto {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
}

impl QuestionDto {
    pub(crate) fn into_question(self) -> Result<Question, RemoteError> {
        Question::new(QuestionId::new(self.id), self.text, self.options)
            .map_err(|err| RemoteError::Decode(err.to_string()))
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CheckRequest {
    pub answer: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckResponse {
    pub correct: bool,
    pub explanation: String,
}

impl From<CheckResponse> for AnswerResult {
    fn from(dto: CheckResponse) -> Self {
        Self {
            correct: dto.correct,
            explanation: dto.explanation,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecheckResponse {
    #[serde(rename = "newAnswer")]
    pub new_answer: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateRequest<'a> {
    pub answer: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConceptDto {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub question_count: u32,
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl From<ConceptDto> for Concept {
    fn from(dto: ConceptDto) -> Self {
        Self {
            id: ConceptId::new(dto.id),
            name: dto.name,
            description: dto.description,
            question_count: dto.question_count,
            difficulty: dto.difficulty,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConceptDetailDto {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub question_count: u32,
    #[serde(default)]
    pub average_score: Option<f64>,
}

impl From<ConceptDetailDto> for ConceptDetail {
    fn from(dto: ConceptDetailDto) -> Self {
        Self {
            id: ConceptId::new(dto.id),
            name: dto.name,
            description: dto.description,
            topics: dto.topics,
            difficulty: dto.difficulty,
            prerequisites: dto.prerequisites,
            question_count: dto.question_count,
            average_score: dto.average_score,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OverviewDto {
    pub total_questions: u64,
    pub average_score: f64,
    /// Minutes, pre-rounded by the service.
    pub total_time: u64,
}

impl From<OverviewDto> for OverviewStats {
    fn from(dto: OverviewDto) -> Self {
        Self {
            total_questions: dto.total_questions,
            average_score: dto.average_score,
            total_minutes: dto.total_time,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConceptSeriesDto {
    pub concepts: Vec<String>,
    pub scores: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgressSeriesDto {
    pub dates: Vec<String>,
    pub scores: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ActivityDto {
    pub date: String,
    pub concept: String,
    pub score: f64,
    pub time_spent: u64,
}

impl From<ActivityDto> for RecentActivity {
    fn from(dto: ActivityDto) -> Self {
        Self {
            date: dto.date,
            concept: dto.concept,
            score: dto.score,
            minutes_spent: dto.time_spent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_dto_decodes_spec_shape() {
        let dto: QuestionDto =
            serde_json::from_str(r#"{"id":"q1","text":"2+2?","options":["3","4","5"]}"#).unwrap();
        let question = dto.into_question().unwrap();
        assert_eq!(question.id().as_str(), "q1");
        assert_eq!(question.prompt(), "2+2?");
        assert_eq!(question.options(), ["3", "4", "5"]);
    }

    #[test]
    fn question_dto_with_one_option_fails_decode() {
        let dto: QuestionDto =
            serde_json::from_str(r#"{"id":"q1","text":"2+2?","options":["4"]}"#).unwrap();
        assert!(matches!(
            dto.into_question().unwrap_err(),
            RemoteError::Decode(_)
        ));
    }

    #[test]
    fn check_request_serializes_integer_answer() {
        let body = serde_json::to_string(&CheckRequest { answer: 1 }).unwrap();
        assert_eq!(body, r#"{"answer":1}"#);
    }

    #[test]
    fn recheck_response_reads_camel_case_key() {
        let dto: RecheckResponse =
            serde_json::from_str(r#"{"newAnswer":"B) 4"}"#).unwrap();
        assert_eq!(dto.new_answer, "B) 4");
    }

    #[test]
    fn update_request_serializes_answer_text() {
        let body = serde_json::to_string(&UpdateRequest { answer: "B) 4" }).unwrap();
        assert_eq!(body, r#"{"answer":"B) 4"}"#);
    }

    #[test]
    fn overview_dto_reads_camel_case_fields() {
        let dto: OverviewDto = serde_json::from_str(
            r#"{"totalQuestions":42,"averageScore":87.5,"totalTime":95}"#,
        )
        .unwrap();
        let stats = OverviewStats::from(dto);
        assert_eq!(stats.total_questions, 42);
        assert_eq!(stats.average_score, 87.5);
        assert_eq!(stats.total_minutes, 95);
    }

    #[test]
    fn activity_dto_maps_time_spent_to_minutes() {
        let dto: ActivityDto = serde_json::from_str(
            r#"{"date":"2026-08-01 10:30:00","concept":"SVM","score":100,"timeSpent":3}"#,
        )
        .unwrap();
        let entry = RecentActivity::from(dto);
        assert_eq!(entry.minutes_spent, 3);
        assert_eq!(entry.concept, "SVM");
    }

    #[test]
    fn concept_dto_tolerates_missing_optionals() {
        let dto: ConceptDto = serde_json::from_str(r#"{"id":3,"name":"SVM"}"#).unwrap();
        let concept = Concept::from(dto);
        assert_eq!(concept.id.value(), 3);
        assert_eq!(concept.question_count, 0);
        assert!(concept.difficulty.is_none());
    }
}
