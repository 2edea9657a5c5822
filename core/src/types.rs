//! Filter sets for the two search endpoints.
//!
//! # Design
//! Every field is public and optional in the sense that `Default` fills it
//! with what the API would be sent if the caller said nothing. Callers set
//! the fields they care about and spread the rest:
//!
//! ```
//! use freelancer_core::ProjectSearch;
//!
//! let search = ProjectSearch {
//!     query: "PHP".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(search.sort_field, "time_updated");
//! ```
//!
//! Field declaration order is the wire order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Project billing type accepted by the `project_types[]` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Fixed,
    Hourly,
}

impl ProjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Fixed => "fixed",
            ProjectType::Hourly => "hourly",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fixed" => Ok(ProjectType::Fixed),
            "hourly" => Ok(ProjectType::Hourly),
            other => Err(format!("unknown project type `{other}` (expected fixed or hourly)")),
        }
    }
}

/// Filters for `GET /projects/active/`.
///
/// The six price and rate bounds are always sent, so leaving one at `0.0`
/// sends `0.0` rather than omitting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSearch {
    /// Space separated terms matched against project names and descriptions.
    pub query: String,
    pub project_types: Vec<ProjectType>,
    /// Projects with at least one of these job ids.
    pub jobs: Vec<u64>,
    /// Minimum average bid, USD.
    pub min_avg_price: f64,
    /// Maximum average bid, USD.
    pub max_avg_price: f64,
    pub min_avg_hourly_rate: f64,
    pub max_avg_hourly_rate: f64,
    /// Fixed-price budget lower bound, USD.
    pub min_price: f64,
    /// Fixed-price budget upper bound, USD.
    pub max_price: f64,
    /// Hourly budget lower bound, USD. Unlike the bounds above, only sent
    /// when set.
    pub min_hourly_rate: Option<f64>,
    /// Hourly budget upper bound, USD. Only sent when set.
    pub max_hourly_rate: Option<f64>,
    /// Country codes such as `au`, `us`.
    pub countries: Vec<String>,
    /// Language codes such as `en`, `es`.
    pub languages: Vec<String>,
    pub sort_field: String,
}

impl Default for ProjectSearch {
    fn default() -> Self {
        Self {
            query: String::new(),
            project_types: Vec::new(),
            jobs: Vec::new(),
            min_avg_price: 0.0,
            max_avg_price: 0.0,
            min_avg_hourly_rate: 0.0,
            max_avg_hourly_rate: 0.0,
            min_price: 0.0,
            max_price: 0.0,
            min_hourly_rate: None,
            max_hourly_rate: None,
            countries: Vec::new(),
            languages: Vec::new(),
            sort_field: "time_updated".to_string(),
        }
    }
}

/// Filters for `GET /jobs/search/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSearch {
    pub jobs: Vec<u64>,
    /// Substrings of the job name.
    pub job_names: Vec<String>,
    /// Substrings of the job's SEO URL.
    pub seo_urls: Vec<String>,
    /// Substrings of the job's SEO text.
    pub seo_texts: Vec<String>,
    pub categories: Vec<u64>,
    pub only_local: bool,
    /// Include SEO information in the returned jobs.
    pub seo_details: bool,
    /// Country used to populate SEO text.
    pub seo_country_name: String,
    /// Accepted for compatibility; requests always go out with `lang=en`.
    pub lang: String,
}

impl Default for JobSearch {
    fn default() -> Self {
        Self {
            jobs: Vec::new(),
            job_names: Vec::new(),
            seo_urls: Vec::new(),
            seo_texts: Vec::new(),
            categories: Vec::new(),
            only_local: false,
            seo_details: true,
            seo_country_name: "en".to_string(),
            lang: "en".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_search_defaults() {
        let search = ProjectSearch::default();
        assert_eq!(search.query, "");
        assert!(search.project_types.is_empty());
        assert_eq!(search.min_avg_price, 0.0);
        assert_eq!(search.max_price, 0.0);
        assert_eq!(search.min_hourly_rate, None);
        assert_eq!(search.max_hourly_rate, None);
        assert_eq!(search.sort_field, "time_updated");
    }

    #[test]
    fn job_search_defaults() {
        let search = JobSearch::default();
        assert!(search.jobs.is_empty());
        assert!(!search.only_local);
        assert!(search.seo_details);
        assert_eq!(search.seo_country_name, "en");
        assert_eq!(search.lang, "en");
    }

    #[test]
    fn defaults_do_not_share_lists() {
        let mut first = JobSearch::default();
        first.job_names.push("Python".to_string());
        let second = JobSearch::default();
        assert!(second.job_names.is_empty());
    }

    #[test]
    fn project_type_parses_case_insensitively() {
        assert_eq!("Hourly".parse::<ProjectType>().unwrap(), ProjectType::Hourly);
        assert_eq!("fixed".parse::<ProjectType>().unwrap(), ProjectType::Fixed);
        assert!("contest".parse::<ProjectType>().is_err());
    }

    #[test]
    fn partial_json_filters_fill_in_defaults() {
        let search: ProjectSearch =
            serde_json::from_str(r#"{"query":"PHP","project_types":["hourly"]}"#).unwrap();
        assert_eq!(search.query, "PHP");
        assert_eq!(search.project_types, vec![ProjectType::Hourly]);
        assert_eq!(search.sort_field, "time_updated");
    }
}
