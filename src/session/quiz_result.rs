/// Score summary for a completed session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
}

/// Qualitative feedback band for a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    /// 80% and above
    Excellent,
    /// 60% up to 80%
    Solid,
    KeepStudying,
}

impl FeedbackTier {
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            FeedbackTier::Excellent
        } else if percentage >= 60.0 {
            FeedbackTier::Solid
        } else {
            FeedbackTier::KeepStudying
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "Excellent! You are well-prepared. Time for the exam!",
            FeedbackTier::Solid => {
                "Solid performance. Review your weak topics to lock in that score."
            }
            FeedbackTier::KeepStudying => {
                "Keep studying! Focus on foundational concepts and retest often."
            }
        }
    }
}

impl QuizResult {
    pub fn new(score: usize, total: usize) -> Self {
        Self { score, total }
    }

    /// Percentage rounded to one decimal; 0 for an empty quiz
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.score as f64 * 1000.0 / self.total as f64).round() / 10.0
    }

    pub fn tier(&self) -> FeedbackTier {
        FeedbackTier::for_percentage(self.percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_examples() {
        assert_eq!(QuizResult::new(0, 5).percentage(), 0.0);
        assert_eq!(QuizResult::new(4, 5).percentage(), 80.0);
        assert_eq!(QuizResult::new(3, 5).percentage(), 60.0);
        assert_eq!(QuizResult::new(2, 5).percentage(), 40.0);
    }

    #[test]
    fn test_percentage_rounds_to_one_decimal() {
        assert_eq!(QuizResult::new(2, 3).percentage(), 66.7);
        assert_eq!(QuizResult::new(1, 3).percentage(), 33.3);
        assert_eq!(QuizResult::new(1, 8).percentage(), 12.5);
    }

    #[test]
    fn test_percentage_empty_quiz_is_zero() {
        assert_eq!(QuizResult::new(0, 0).percentage(), 0.0);
    }

    #[test]
    fn test_tiers_at_boundaries() {
        assert_eq!(QuizResult::new(4, 5).tier(), FeedbackTier::Excellent);
        assert_eq!(QuizResult::new(5, 5).tier(), FeedbackTier::Excellent);
        assert_eq!(QuizResult::new(3, 5).tier(), FeedbackTier::Solid);
        assert_eq!(QuizResult::new(2, 5).tier(), FeedbackTier::KeepStudying);
        assert_eq!(QuizResult::new(0, 0).tier(), FeedbackTier::KeepStudying);
    }

    #[test]
    fn test_rounding_applies_before_tiering() {
        // 79.96% rounds to 80.0
        assert_eq!(QuizResult::new(1999, 2500).percentage(), 80.0);
        assert_eq!(QuizResult::new(1999, 2500).tier(), FeedbackTier::Excellent);
    }

    #[test]
    fn test_tier_messages_differ() {
        assert_ne!(
            FeedbackTier::Excellent.message(),
            FeedbackTier::Solid.message()
        );
        assert!(FeedbackTier::KeepStudying.message().starts_with("Keep studying"));
    }
}
