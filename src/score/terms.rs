use crate::types::scoring::Score;

const RATING_SCALE: f64 = 5.0;
const FULL_CONFIDENCE_REVIEWS: f64 = 100.0;
const AGE_STEP: f64 = 0.1;
const PROJECT_STEP: f64 = 0.01;
const TERM_CAP: Score = 0.5;
const OFFER_BONUS: Score = 0.5;
const RECENT_AWARD: Score = 0.5;
const PAST_AWARD: Score = 0.25;

/// Rating weighted by review confidence, 0 to 1 for ratings on the 5 point scale.
/// No reviews means no credit.
pub fn rating_term(rating: f64, reviews: i64) -> Score {
    if reviews <= 0 {
        return 0.0;
    }
    let confidence = (reviews as f64 / FULL_CONFIDENCE_REVIEWS).min(1.0);
    (rating.max(0.0) / RATING_SCALE) * confidence
}

/// 0.1 per year, capped at five years.
pub fn age_term(years: i64) -> Score {
    if years <= 0 {
        return 0.0;
    }
    (years as f64 * AGE_STEP).min(TERM_CAP)
}

/// 0.01 per completed project, capped at fifty.
pub fn projects_term(projects: i64) -> Score {
    if projects <= 0 {
        return 0.0;
    }
    (projects as f64 * PROJECT_STEP).min(TERM_CAP)
}

pub fn discount_term(has_offer: bool) -> Score {
    if has_offer {
        OFFER_BONUS
    } else {
        0.0
    }
}

/// `None` when no award is listed; otherwise recent awards earn the full bonus.
pub fn award_term<S: AsRef<str>>(award: Option<&str>, recent_keywords: &[S]) -> Score {
    let Some(award) = award.map(str::trim).filter(|text| !text.is_empty()) else {
        return 0.0;
    };
    let lowered = award.to_lowercase();
    let is_recent = recent_keywords
        .iter()
        .any(|keyword| lowered.contains(&keyword.as_ref().to_lowercase()));
    if is_recent {
        RECENT_AWARD
    } else {
        PAST_AWARD
    }
}
