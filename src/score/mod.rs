pub mod coerce;
pub mod rank;
pub mod terms;

use crate::types::config::ScoringRules;
use crate::types::record::{CompanyRecord, Table};
use crate::types::scoring::{Score, ScoreBreakdown};
use coerce::{has_text, is_malformed, try_parse_count, try_parse_number};
use tracing::debug;

pub fn score_breakdown(record: &CompanyRecord, rules: &ScoringRules) -> ScoreBreakdown {
    let fields = &rules.fields;

    let rating = try_parse_number::<f64>(record.get(&fields.rating));
    let reviews = try_parse_number::<i64>(record.get(&fields.reviews));
    let age = try_parse_number::<i64>(record.get(&fields.age));
    let projects = try_parse_count(record.get(&fields.projects));
    let has_offer = has_text(record.get(&fields.discounts));
    let award = record
        .get(&fields.awards)
        .filter(|cell| !cell.is_blank())
        .map(|cell| cell.to_string());

    ScoreBreakdown::new(
        terms::rating_term(rating, reviews),
        terms::age_term(age),
        terms::projects_term(projects),
        terms::discount_term(has_offer),
        terms::award_term(award.as_deref(), &rules.recent_award_keywords),
    )
}

pub fn compute_score(record: &CompanyRecord, rules: &ScoringRules) -> Score {
    score_breakdown(record, rules).total
}

/// Names of numeric columns whose values were discarded by coercion.
pub fn malformed_fields<'a>(record: &CompanyRecord, rules: &'a ScoringRules) -> Vec<&'a str> {
    let fields = &rules.fields;
    let mut malformed = Vec::new();
    if is_malformed::<f64>(record.get(&fields.rating)) {
        malformed.push(fields.rating.as_str());
    }
    if is_malformed::<i64>(record.get(&fields.reviews)) {
        malformed.push(fields.reviews.as_str());
    }
    if is_malformed::<i64>(record.get(&fields.age)) {
        malformed.push(fields.age.as_str());
    }
    if is_malformed::<f64>(record.get(&fields.projects)) {
        malformed.push(fields.projects.as_str());
    }
    malformed
}

/// Scores every row in input order.
pub fn score_table(table: &Table, rules: &ScoringRules) -> Vec<Score> {
    table
        .rows
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let malformed = malformed_fields(record, rules);
            if !malformed.is_empty() {
                debug!(row = index + 1, fields = ?malformed, "coerced malformed values to zero");
            }
            compute_score(record, rules)
        })
        .collect()
}
