//! Relevance scoring for free-text product search.

use chrono::{DateTime, Utc};

use super::entities::Product;

pub const TITLE_MATCH_SCORE: f64 = 100.0;
pub const EXACT_TITLE_BONUS: f64 = 50.0;
pub const DESCRIPTION_MATCH_SCORE: f64 = 30.0;
pub const FRESHNESS_WINDOW_DAYS: i64 = 20;

const SECONDS_PER_DAY: i64 = 86_400;

/// Case-insensitive relevance of `product` for `query`, evaluated at `now`.
///
/// The freshness term is added whether or not the text matches.
pub fn score(product: &Product, query: &str, now: DateTime<Utc>) -> f64 {
    let query = query.to_lowercase();
    let title = product.title.to_lowercase();
    let description = product.description.to_lowercase();

    let mut score = 0.0;
    if title.contains(&query) {
        score += TITLE_MATCH_SCORE;
        if title == query {
            score += EXACT_TITLE_BONUS;
        }
    }
    if description.contains(&query) {
        score += DESCRIPTION_MATCH_SCORE;
    }
    score + freshness_bonus(product.created_at, now)
}

fn freshness_bonus(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let Some(created_at) = created_at else {
        return 0.0;
    };
    // Whole days, floored; a future timestamp has a negative age.
    let age_days = (now - created_at).num_seconds().div_euclid(SECONDS_PER_DAY);
    (FRESHNESS_WINDOW_DAYS - age_days).max(0) as f64
}

/// Orders products by descending score. Equal scores keep their input order.
pub fn rank(products: Vec<Product>, query: &str, now: DateTime<Utc>) -> Vec<Product> {
    let mut scored: Vec<(f64, Product)> = products
        .into_iter()
        .map(|p| (score(&p, query, now), p))
        .collect();
    // sort_by is stable
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, p)| p).collect()
}
