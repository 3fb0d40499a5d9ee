use crate::error::IntyError;
use serde::Deserialize;

pub const DEFAULT_RECENT_AWARD_KEYWORDS: [&str; 4] = ["2023", "2024", "recent", "current"];
pub const DEFAULT_SCORED_FILE: &str = "Interior_Companies_Scored.csv";
pub const DEFAULT_SCORE_COLUMN: &str = "Score";
pub const DEFAULT_CITY: &str = "Bengaluru";
pub const DEFAULT_SERVICE: &str = "Residential";
pub const DEFAULT_SHEET: &str = "Interior Companies";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntyConfig {
    pub input: Option<InputConfig>,
    pub columns: Option<ColumnsConfig>,
    pub scoring: Option<ScoringConfig>,
    pub output: Option<OutputConfig>,
    pub listing: Option<ListingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    /// Worksheet read from Excel workbooks.
    pub sheet: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColumnsConfig {
    pub rating: Option<String>,
    pub reviews: Option<String>,
    pub age: Option<String>,
    pub projects: Option<String>,
    pub discounts: Option<String>,
    pub awards: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    pub recent_award_keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub scored_file: Option<String>,
    pub score_column: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingConfig {
    pub city: Option<String>,
    pub service: Option<String>,
}

/// Column names the scorer reads from each record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMap {
    pub rating: String,
    pub reviews: String,
    pub age: String,
    pub projects: String,
    pub discounts: String,
    pub awards: String,
    pub name: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            rating: "Google Rating".to_string(),
            reviews: "Google Reviews".to_string(),
            age: "Age of company".to_string(),
            projects: "No.of projects completed".to_string(),
            discounts: "Discounts".to_string(),
            awards: "Any Awards won?".to_string(),
            name: "Name".to_string(),
        }
    }
}

/// Resolved scoring settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringRules {
    pub fields: FieldMap,
    pub recent_award_keywords: Vec<String>,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            fields: FieldMap::default(),
            recent_award_keywords: DEFAULT_RECENT_AWARD_KEYWORDS
                .iter()
                .map(|keyword| keyword.to_string())
                .collect(),
        }
    }
}

impl IntyConfig {
    pub fn field_map(&self) -> FieldMap {
        let defaults = FieldMap::default();
        match &self.columns {
            Some(columns) => FieldMap {
                rating: columns.rating.clone().unwrap_or(defaults.rating),
                reviews: columns.reviews.clone().unwrap_or(defaults.reviews),
                age: columns.age.clone().unwrap_or(defaults.age),
                projects: columns.projects.clone().unwrap_or(defaults.projects),
                discounts: columns.discounts.clone().unwrap_or(defaults.discounts),
                awards: columns.awards.clone().unwrap_or(defaults.awards),
                name: columns.name.clone().unwrap_or(defaults.name),
            },
            None => defaults,
        }
    }

    pub fn scoring_rules(&self) -> ScoringRules {
        let defaults = ScoringRules::default();
        ScoringRules {
            fields: self.field_map(),
            recent_award_keywords: self
                .scoring
                .as_ref()
                .and_then(|scoring| scoring.recent_award_keywords.clone())
                .unwrap_or(defaults.recent_award_keywords),
        }
    }

    pub fn sheet_name(&self) -> String {
        self.input
            .as_ref()
            .and_then(|input| input.sheet.clone())
            .unwrap_or_else(|| DEFAULT_SHEET.to_string())
    }

    pub fn scored_file(&self) -> String {
        self.output
            .as_ref()
            .and_then(|output| output.scored_file.clone())
            .unwrap_or_else(|| DEFAULT_SCORED_FILE.to_string())
    }

    pub fn score_column(&self) -> String {
        self.output
            .as_ref()
            .and_then(|output| output.score_column.clone())
            .unwrap_or_else(|| DEFAULT_SCORE_COLUMN.to_string())
    }

    pub fn listing_city(&self) -> String {
        self.listing
            .as_ref()
            .and_then(|listing| listing.city.clone())
            .unwrap_or_else(|| DEFAULT_CITY.to_string())
    }

    pub fn listing_service(&self) -> String {
        self.listing
            .as_ref()
            .and_then(|listing| listing.service.clone())
            .unwrap_or_else(|| DEFAULT_SERVICE.to_string())
    }

    pub fn validate(&self) -> Result<(), IntyError> {
        let fields = self.field_map();
        let named_columns = [
            ("columns.rating", &fields.rating),
            ("columns.reviews", &fields.reviews),
            ("columns.age", &fields.age),
            ("columns.projects", &fields.projects),
            ("columns.discounts", &fields.discounts),
            ("columns.awards", &fields.awards),
            ("columns.name", &fields.name),
        ];
        let blank = named_columns
            .iter()
            .filter(|(_, column)| column.trim().is_empty())
            .map(|(key, _)| *key)
            .collect::<Vec<_>>();
        if !blank.is_empty() {
            return Err(IntyError::ConfigParse(format!(
                "column names must be non-empty: {}",
                blank.join(", ")
            )));
        }

        if self.sheet_name().trim().is_empty() {
            return Err(IntyError::ConfigParse(
                "input.sheet must be non-empty".to_string(),
            ));
        }
        if self.score_column().trim().is_empty() {
            return Err(IntyError::ConfigParse(
                "output.score_column must be non-empty".to_string(),
            ));
        }
        if self.scored_file().trim().is_empty() {
            return Err(IntyError::ConfigParse(
                "output.scored_file must be non-empty".to_string(),
            ));
        }

        let keywords = self.scoring_rules().recent_award_keywords;
        if keywords.is_empty() {
            return Err(IntyError::ConfigParse(
                "scoring.recent_award_keywords cannot be empty".to_string(),
            ));
        }
        if keywords.iter().any(|keyword| keyword.trim().is_empty()) {
            return Err(IntyError::ConfigParse(
                "scoring.recent_award_keywords entries must be non-empty".to_string(),
            ));
        }

        Ok(())
    }
}
