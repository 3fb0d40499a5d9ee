use crate::types::record::{CompanyRecord, Table};
use crate::types::scoring::Score;
use serde::Serialize;
use std::cmp::Ordering;

const FALLBACK_NAME_COLUMN: &str = "name";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCompany {
    pub rank: usize,
    pub name: String,
    pub score: Score,
}

/// Highest scores first; equal scores keep input order.
pub fn rank_companies(
    table: &Table,
    scores: &[Score],
    name_column: &str,
    limit: usize,
) -> Vec<RankedCompany> {
    let mut order = (0..table.rows.len().min(scores.len())).collect::<Vec<_>>();
    order.sort_by(|left, right| {
        scores[*right]
            .partial_cmp(&scores[*left])
            .unwrap_or(Ordering::Equal)
    });

    order
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(position, index)| RankedCompany {
            rank: position + 1,
            name: company_name(&table.rows[index], name_column),
            score: scores[index],
        })
        .collect()
}

fn company_name(record: &CompanyRecord, name_column: &str) -> String {
    [name_column, FALLBACK_NAME_COLUMN]
        .iter()
        .filter_map(|column| record.get(column))
        .find(|cell| !cell.is_blank())
        .map(|cell| cell.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}
