/// Running counters for one practice session.
///
/// Owned by the controller instance, never process-wide. Both counters are
/// monotonically non-decreasing and `score <= questions_answered` holds by
/// construction; there is no reset short of dropping the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    score: u32,
    questions_answered: u32,
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed round: always bumps `questions_answered`, and
    /// `score` only when the answer was correct.
    pub fn record(&mut self, correct: bool) {
        self.questions_answered += 1;
        if correct {
            self.score += 1;
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn questions_answered(&self) -> u32 {
        self.questions_answered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let stats = SessionStats::new();
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.questions_answered(), 0);
    }

    #[test]
    fn record_increments_answered_always_and_score_on_correct() {
        let mut stats = SessionStats::new();
        stats.record(true);
        stats.record(false);
        stats.record(true);

        assert_eq!(stats.questions_answered(), 3);
        assert_eq!(stats.score(), 2);
    }

    #[test]
    fn score_never_exceeds_answered() {
        let mut stats = SessionStats::new();
        for round in 0..100 {
            stats.record(round % 3 == 0);
            assert!(stats.score() <= stats.questions_answered());
        }
    }
}
