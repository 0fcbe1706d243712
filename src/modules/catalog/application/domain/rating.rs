use serde::Serialize;

/// Raw numbers produced by the store for one owner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingStats {
    pub average: Option<f64>,
    pub count: u64,
}

/// Mean rating and review count of a store as shown to users.
///
/// `average` is `None` when the store has no reviews. An empty store never
/// reports `0.0`, which would read as a real low score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct RatingSummary {
    pub average: Option<f64>,
    pub count: u64,
}

impl RatingSummary {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_stats(stats: RatingStats) -> Self {
        if stats.count == 0 {
            return Self::empty();
        }
        Self {
            average: stats.average.map(round_to_tenth),
            count: stats.count,
        }
    }
}

/// Halves go to the even tenth, so 4.25 shows as 4.2.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
