use std::sync::Arc;

use api::remote::{ConceptService, RemoteError};
use drill_core::model::{Concept, ConceptDetail, ConceptId};

/// Holds the fetched concept list and applies the search/difficulty filters
/// locally, the way the browsing page does.
pub struct ConceptBrowser {
    concepts: Arc<dyn ConceptService>,
    all: Vec<Concept>,
    search: String,
    difficulty: String,
}

impl ConceptBrowser {
    #[must_use]
    pub fn new(concepts: Arc<dyn ConceptService>) -> Self {
        Self {
            concepts,
            all: Vec::new(),
            search: String::new(),
            difficulty: String::new(),
        }
    }

    /// Refetch the concept list, replacing the local copy.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success status;
    /// the previous list stays in place.
    pub async fn refresh(&mut self) -> Result<(), RemoteError> {
        self.all = self.concepts.list_concepts().await?;
        Ok(())
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_difficulty(&mut self, filter: impl Into<String>) {
        self.difficulty = filter.into();
    }

    /// Concepts passing both active filters, in server order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Concept> {
        self.all
            .iter()
            .filter(|concept| {
                concept.matches_search(&self.search)
                    && concept.matches_difficulty(&self.difficulty)
            })
            .collect()
    }

    /// Fetch full detail for one concept.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success status.
    pub async fn detail(&self, id: ConceptId) -> Result<ConceptDetail, RemoteError> {
        self.concepts.concept_detail(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::remote::InMemoryBackend;

    fn concept(id: u64, name: &str, description: &str, difficulty: &str) -> Concept {
        Concept {
            id: ConceptId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            question_count: 5,
            difficulty: Some(difficulty.to_string()),
        }
    }

    async fn browser_with(concepts: Vec<Concept>) -> ConceptBrowser {
        let backend = InMemoryBackend::new();
        backend.set_concepts(concepts);
        let mut browser = ConceptBrowser::new(Arc::new(backend));
        browser.refresh().await.unwrap();
        browser
    }

    #[tokio::test]
    async fn shows_everything_without_filters() {
        let browser = browser_with(vec![
            concept(1, "SVM", "Margins", "intermediate"),
            concept(2, "Backprop", "Gradients", "advanced"),
        ])
        .await;

        assert_eq!(browser.visible().len(), 2);
    }

    #[tokio::test]
    async fn combines_search_and_difficulty_filters() {
        let mut browser = browser_with(vec![
            concept(1, "SVM", "Margins", "intermediate"),
            concept(2, "Backprop", "Gradient flow", "advanced"),
            concept(3, "CNN", "Convolutions and gradients", "advanced"),
        ])
        .await;

        browser.set_search("gradient");
        browser.set_difficulty("advanced");

        let names: Vec<_> = browser.visible().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Backprop", "CNN"]);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_list() {
        let backend = InMemoryBackend::new();
        backend.set_concepts(vec![concept(1, "SVM", "Margins", "beginner")]);
        let mut browser = ConceptBrowser::new(Arc::new(backend.clone()));
        browser.refresh().await.unwrap();

        backend.set_failing(true);
        assert!(browser.refresh().await.is_err());
        assert_eq!(browser.visible().len(), 1);
    }

    #[tokio::test]
    async fn detail_passes_through() {
        let backend = InMemoryBackend::new();
        backend.set_concept_detail(ConceptDetail {
            id: ConceptId::new(1),
            name: "SVM".to_string(),
            description: "Margins".to_string(),
            topics: vec!["Kernels".to_string()],
            difficulty: Some("intermediate".to_string()),
            prerequisites: vec![],
            question_count: 5,
            average_score: Some(72.5),
        });
        let browser = ConceptBrowser::new(Arc::new(backend));

        let detail = browser.detail(ConceptId::new(1)).await.unwrap();
        assert_eq!(detail.name, "SVM");
        assert_eq!(detail.topics, ["Kernels"]);
    }
}
