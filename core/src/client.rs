//! Request builder and response parser for the Freelancer search API.
//!
//! # Design
//! `FreelancerClient` holds the auth token and base URL and nothing else.
//! `build_*` methods produce an `HttpRequest`, `parse_result` consumes an
//! `HttpResponse`, and the `search_*` helpers run both around a
//! `Transport`. Status codes are not interpreted: error payloads are parsed
//! like success payloads and simply tend to have no `result`.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::query::{self, QueryValue};
use crate::transport::Transport;
use crate::types::{JobSearch, ProjectSearch};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://www.freelancer.com/api/projects/0.1";

/// Header carrying the access token.
pub const OAUTH_HEADER: &str = "freelancer-oauth-v1";

const PROJECTS_PATH: &str = "/projects/active/";
const JOBS_PATH: &str = "/jobs/search/";

/// Job search results are always requested in English, whatever `lang` the
/// caller passed.
const JOB_SEARCH_LANG: &str = "en";

/// Synchronous client for project and job search.
///
/// Cloning is cheap enough for per-thread copies; there is no shared
/// mutable state.
#[derive(Clone)]
pub struct FreelancerClient {
    token: String,
    base_url: String,
}

impl std::fmt::Debug for FreelancerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FreelancerClient")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl FreelancerClient {
    /// Client for the production API. The token is stored as given.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(token: impl Into<String>, base_url: &str) -> Self {
        Self {
            token: token.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_search_projects(&self, search: &ProjectSearch) -> HttpRequest {
        let project_types: Vec<&str> = search.project_types.iter().map(|t| t.as_str()).collect();
        let params = query::encode(&[
            ("query", (&search.query).into()),
            ("project_types", QueryValue::list(project_types)),
            ("jobs", search.jobs.as_slice().into()),
            ("min_avg_price", search.min_avg_price.into()),
            ("max_avg_price", search.max_avg_price.into()),
            ("min_avg_hourly_rate", search.min_avg_hourly_rate.into()),
            ("max_avg_hourly_rate", search.max_avg_hourly_rate.into()),
            ("min_price", search.min_price.into()),
            ("max_price", search.max_price.into()),
            ("min_hourly_rate", search.min_hourly_rate.into()),
            ("max_hourly_rate", search.max_hourly_rate.into()),
            ("countries", search.countries.as_slice().into()),
            ("languages", search.languages.as_slice().into()),
            ("sort_field", (&search.sort_field).into()),
        ]);
        self.get(PROJECTS_PATH, &params)
    }

    pub fn build_search_jobs(&self, search: &JobSearch) -> HttpRequest {
        if search.lang != JOB_SEARCH_LANG {
            tracing::debug!(
                requested = %search.lang,
                sent = JOB_SEARCH_LANG,
                "job search language is fixed; ignoring requested lang"
            );
        }
        let params = query::encode(&[
            ("jobs", search.jobs.as_slice().into()),
            ("job_names", search.job_names.as_slice().into()),
            ("seo_urls", search.seo_urls.as_slice().into()),
            ("seo_texts", search.seo_texts.as_slice().into()),
            ("categories", search.categories.as_slice().into()),
            ("only_local", search.only_local.into()),
            ("seo_details", search.seo_details.into()),
            ("seo_country_name", (&search.seo_country_name).into()),
            ("lang", JOB_SEARCH_LANG.into()),
        ]);
        self.get(JOBS_PATH, &params)
    }

    /// Extract `result` from a response body.
    ///
    /// The status code is ignored. A body that is not a JSON object is an
    /// error; an object without `result` (or with `result: null`) is
    /// `Ok(None)`.
    pub fn parse_result(&self, response: HttpResponse) -> Result<Option<Value>, ApiError> {
        if !response.is_success() {
            tracing::debug!(status = response.status, "non-success status, parsing body anyway");
        }
        let body: Value = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        let Value::Object(mut envelope) = body else {
            return Err(ApiError::DeserializationError(
                "expected a JSON object at the top level".to_string(),
            ));
        };
        let result = envelope.remove("result").filter(|value| !value.is_null());
        if result.is_none() {
            tracing::debug!(status = response.status, "response has no result");
        }
        Ok(result)
    }

    pub fn search_projects<T: Transport>(
        &self,
        transport: &T,
        search: &ProjectSearch,
    ) -> Result<Option<Value>, ApiError> {
        let response = transport.execute(self.build_search_projects(search))?;
        self.parse_result(response)
    }

    pub fn search_jobs<T: Transport>(
        &self,
        transport: &T,
        search: &JobSearch,
    ) -> Result<Option<Value>, ApiError> {
        let response = transport.execute(self.build_search_jobs(search))?;
        self.parse_result(response)
    }

    fn get(&self, path: &str, params: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{path}?{params}", self.base_url),
            headers: vec![(OAUTH_HEADER.to_string(), self.token.clone())],
        }
    }
}
