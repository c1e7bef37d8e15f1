use crate::model::ids::ConceptId;

/// A concept as listed by the browsing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Concept {
    pub id: ConceptId,
    pub name: String,
    pub description: String,
    pub question_count: u32,
    /// Server-defined difficulty label; absent on older records.
    pub difficulty: Option<String>,
}

impl Concept {
    /// Case-insensitive match against a search term, over name and description.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }

    /// Match against a difficulty filter; an empty filter matches everything.
    #[must_use]
    pub fn matches_difficulty(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        self.difficulty
            .as_deref()
            .is_some_and(|difficulty| difficulty.eq_ignore_ascii_case(filter))
    }
}

/// Full detail for a single concept, including curriculum context and the
/// caller's aggregate score when one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptDetail {
    pub id: ConceptId,
    pub name: String,
    pub description: String,
    pub topics: Vec<String>,
    pub difficulty: Option<String>,
    pub prerequisites: Vec<String>,
    pub question_count: u32,
    pub average_score: Option<f64>,
}
