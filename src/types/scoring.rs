use serde::Serialize;

pub type Score = f64;

/// The five independently capped terms of a company score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub rating: Score,
    pub age: Score,
    pub projects: Score,
    pub discount: Score,
    pub award: Score,
    pub total: Score,
}

impl ScoreBreakdown {
    pub fn new(rating: Score, age: Score, projects: Score, discount: Score, award: Score) -> Self {
        let sum = rating + age + projects + discount + award;
        Self {
            rating,
            age,
            projects,
            discount,
            award,
            total: round_to_cents(sum),
        }
    }
}

/// Rounds the exact binary value to two decimal places, ties to even.
pub fn round_to_cents(value: Score) -> Score {
    format!("{value:.2}").parse().unwrap_or(value)
}
