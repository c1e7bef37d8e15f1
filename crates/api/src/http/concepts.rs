use async_trait::async_trait;

use drill_core::model::{Concept, ConceptDetail, ConceptId};

use super::wire::{ConceptDetailDto, ConceptDto};
use super::HttpApi;
use crate::remote::{ConceptService, RemoteError};

#[async_trait]
impl ConceptService for HttpApi {
    async fn list_concepts(&self) -> Result<Vec<Concept>, RemoteError> {
        let dtos: Vec<ConceptDto> = self.get_json("/api/concepts").await?;
        Ok(dtos.into_iter().map(Concept::from).collect())
    }

    async fn concept_detail(&self, id: ConceptId) -> Result<ConceptDetail, RemoteError> {
        let dto: ConceptDetailDto = self.get_json(&format!("/api/concepts/{id}")).await?;
        Ok(dto.into())
    }
}
