use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

const UNKNOWN_NAME: &str = "Unknown";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Company {
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub types: Vec<String>,
    #[serde(rename = "availableCities", default)]
    pub available_cities: Vec<String>,
}

impl Company {
    /// Substring match so "Commercial" also matches "Commercial & Retail".
    pub fn offers(&self, service: &str) -> bool {
        self.types.iter().any(|kind| kind.contains(service))
    }

    pub fn available_in(&self, city: &str) -> bool {
        self.available_cities.iter().any(|available| available == city)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }
}

#[derive(Debug, Default, Deserialize)]
struct CompaniesFile {
    #[serde(default)]
    companies: Vec<Company>,
}

pub fn parse_companies(content: &str) -> Result<Vec<Company>> {
    let file: CompaniesFile = serde_json::from_str(content)?;
    Ok(file.companies)
}

pub fn load_companies(path: &Path) -> Result<Vec<Company>> {
    let content = fs::read_to_string(path)?;
    let companies = parse_companies(&content)?;
    info!(path = %path.display(), companies = companies.len(), "loaded listing");
    Ok(companies)
}

/// Which filter narrows the listing first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOrder {
    CityFirst,
    ServiceFirst,
}

#[derive(Debug, Clone)]
pub struct ListingQuery {
    pub city: String,
    pub service: String,
    pub order: FilterOrder,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stage {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingSummary {
    pub total: usize,
    pub stages: Vec<Stage>,
    pub heading: String,
    pub listed: Vec<String>,
}

pub fn summarize(companies: &[Company], query: &ListingQuery) -> ListingSummary {
    let city = query.city.as_str();
    let service = query.service.as_str();
    let service_lower = service.to_lowercase();

    let (stages, listed, heading) = match query.order {
        FilterOrder::CityFirst => {
            let in_city = companies
                .iter()
                .filter(|company| company.available_in(city))
                .collect::<Vec<_>>();
            let offering = in_city
                .iter()
                .copied()
                .filter(|company| company.offers(service))
                .collect::<Vec<_>>();
            let stages = vec![
                Stage {
                    label: format!("Companies in {city}"),
                    count: in_city.len(),
                },
                Stage {
                    label: format!("Companies in {city} offering {service} services"),
                    count: offering.len(),
                },
            ];
            let heading = format!("List of {service_lower} companies in {city}");
            (stages, offering, heading)
        }
        FilterOrder::ServiceFirst => {
            let offering = companies
                .iter()
                .filter(|company| company.offers(service))
                .collect::<Vec<_>>();
            let in_city = offering
                .iter()
                .filter(|company| company.available_in(city))
                .count();
            let stages = vec![
                Stage {
                    label: format!("Companies offering {service} services"),
                    count: offering.len(),
                },
                Stage {
                    label: format!("Companies in {city} offering {service} services"),
                    count: in_city,
                },
            ];
            let heading = format!("List of {service_lower} companies");
            (stages, offering, heading)
        }
    };

    ListingSummary {
        total: companies.len(),
        stages,
        heading,
        listed: listed
            .into_iter()
            .map(|company| company.display_name().to_string())
            .collect(),
    }
}
