use async_trait::async_trait;

use drill_core::model::{AnswerResult, Question, QuestionId};

use super::wire::{CheckRequest, CheckResponse, QuestionDto, RecheckResponse, UpdateRequest};
use super::HttpApi;
use crate::remote::{QuestionService, RemoteError};

#[async_trait]
impl QuestionService for HttpApi {
    async fn random_question(&self) -> Result<Question, RemoteError> {
        let dto: QuestionDto = self.get_json("/api/questions/random").await?;
        dto.into_question()
    }

    async fn check_answer(
        &self,
        id: &QuestionId,
        answer: usize,
    ) -> Result<AnswerResult, RemoteError> {
        let url = self.endpoint(&format!("/api/questions/{id}/check"));
        tracing::debug!(%url, answer, "POST");
        let response = self
            .client()
            .post(&url)
            .json(&CheckRequest { answer })
            .send()
            .await?;
        let response = Self::ensure_success(response)?;
        let dto: CheckResponse = response.json().await?;
        Ok(dto.into())
    }

    async fn recheck_answer(&self, id: &QuestionId) -> Result<String, RemoteError> {
        let dto: RecheckResponse = self
            .get_json(&format!("/api/questions/{id}/recheck"))
            .await?;
        Ok(dto.new_answer)
    }

    async fn update_answer(&self, id: &QuestionId, answer: &str) -> Result<(), RemoteError> {
        let url = self.endpoint(&format!("/api/questions/{id}/update"));
        tracing::debug!(%url, "POST");
        let response = self
            .client()
            .post(&url)
            .json(&UpdateRequest { answer })
            .send()
            .await?;
        Self::ensure_success(response)?;
        Ok(())
    }

    async fn flag_question(&self, id: &QuestionId) -> Result<(), RemoteError> {
        let url = self.endpoint(&format!("/api/questions/{id}/flag"));
        tracing::debug!(%url, "POST");
        let response = self.client().post(&url).send().await?;
        Self::ensure_success(response)?;
        Ok(())
    }

    async fn delete_question(&self, id: &QuestionId) -> Result<(), RemoteError> {
        let url = self.endpoint(&format!("/api/questions/{id}"));
        tracing::debug!(%url, "DELETE");
        let response = self.client().delete(&url).send().await?;
        Self::ensure_success(response)?;
        Ok(())
    }
}
