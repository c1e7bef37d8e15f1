use async_trait::async_trait;

use drill_core::model::{ConceptPerformance, OverviewStats, ProgressSeries, RecentActivity};

use super::wire::{ActivityDto, ConceptSeriesDto, OverviewDto, ProgressSeriesDto};
use super::HttpApi;
use crate::remote::{RemoteError, StatsService};

#[async_trait]
impl StatsService for HttpApi {
    async fn overview(&self) -> Result<OverviewStats, RemoteError> {
        let dto: OverviewDto = self.get_json("/api/stats/overview").await?;
        Ok(dto.into())
    }

    async fn concept_performance(&self) -> Result<ConceptPerformance, RemoteError> {
        let dto: ConceptSeriesDto = self.get_json("/api/stats/concepts").await?;
        ConceptPerformance::new(dto.concepts, dto.scores)
            .map_err(|err| RemoteError::Decode(err.to_string()))
    }

    async fn progress_over_time(&self) -> Result<ProgressSeries, RemoteError> {
        let dto: ProgressSeriesDto = self.get_json("/api/stats/progress").await?;
        ProgressSeries::new(dto.dates, dto.scores)
            .map_err(|err| RemoteError::Decode(err.to_string()))
    }

    async fn recent_activity(&self) -> Result<Vec<RecentActivity>, RemoteError> {
        let dtos: Vec<ActivityDto> = self.get_json("/api/stats/activity").await?;
        Ok(dtos.into_iter().map(RecentActivity::from).collect())
    }
}
