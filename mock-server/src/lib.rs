use std::sync::Arc;

use axum::{
    extract::{Query, RawQuery, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const OAUTH_HEADER: &str = "freelancer-oauth-v1";

/// What the server saw for one request. `query` is the raw, still encoded
/// query string so tests can compare it byte for byte.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub path: String,
    pub query: String,
    pub token: Option<String>,
}

pub type RequestLog = Arc<RwLock<Vec<RecordedRequest>>>;

type Params = Vec<(String, String)>;

pub fn app() -> Router {
    app_with_log(RequestLog::default())
}

pub fn app_with_log(log: RequestLog) -> Router {
    Router::new()
        .route("/projects/active/", get(search_projects))
        .route("/jobs/search/", get(search_jobs))
        .with_state(log)
}

pub async fn run(listener: TcpListener, log: RequestLog) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_log(log)).await
}

async fn search_projects(
    State(log): State<RequestLog>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
    Query(params): Query<Params>,
) -> (StatusCode, Json<Value>) {
    let token = record(&log, "/projects/active/", &headers, raw).await;
    if token.is_none() {
        return unauthorized();
    }

    let query = first(&params, "query").unwrap_or_default().to_lowercase();
    let types = all(&params, "project_types[]");
    let projects: Vec<Value> = sample_projects()
        .into_iter()
        .filter(|p| query.is_empty() || p["title"].as_str().is_some_and(|t| t.to_lowercase().contains(&query)))
        .filter(|p| types.is_empty() || types.iter().any(|t| p["type"] == *t))
        .collect();

    ok(json!({ "projects": projects, "total_count": projects.len() }))
}

async fn search_jobs(
    State(log): State<RequestLog>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
    Query(params): Query<Params>,
) -> (StatusCode, Json<Value>) {
    let token = record(&log, "/jobs/search/", &headers, raw).await;
    if token.is_none() {
        return unauthorized();
    }

    let ids: Vec<u64> = all(&params, "jobs[]").iter().filter_map(|v| v.parse().ok()).collect();
    let names: Vec<String> = all(&params, "job_names[]").iter().map(|v| v.to_lowercase()).collect();
    let categories: Vec<u64> = all(&params, "categories[]")
        .iter()
        .filter_map(|v| v.parse().ok())
        .collect();
    let seo_details = first(&params, "seo_details").as_deref() == Some("true");

    let jobs: Vec<Value> = sample_jobs()
        .into_iter()
        .filter(|j| ids.is_empty() || j["id"].as_u64().is_some_and(|id| ids.contains(&id)))
        .filter(|j| {
            names.is_empty()
                || j["name"]
                    .as_str()
                    .is_some_and(|n| names.iter().any(|q| n.to_lowercase().contains(q)))
        })
        .filter(|j| {
            categories.is_empty()
                || j["category"]["id"].as_u64().is_some_and(|id| categories.contains(&id))
        })
        .map(|mut j| {
            if !seo_details {
                if let Some(job) = j.as_object_mut() {
                    job.remove("seo_url");
                }
            }
            j
        })
        .collect();

    ok(Value::Array(jobs))
}

async fn record(
    log: &RequestLog,
    path: &str,
    headers: &HeaderMap,
    raw: Option<String>,
) -> Option<String> {
    let token = headers
        .get(OAUTH_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string);
    tracing::debug!(path, has_token = token.is_some(), "request");
    log.write().await.push(RecordedRequest {
        path: path.to_string(),
        query: raw.unwrap_or_default(),
        token: token.clone(),
    });
    token
}

fn first(params: &Params, key: &str) -> Option<String> {
    params.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

fn all(params: &Params, key: &str) -> Vec<String> {
    params
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .collect()
}

fn ok(result: Value) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "success", "result": result, "request_id": "mock" })),
    )
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "status": "error",
            "message": "You must be logged in to perform this request",
            "error_code": "AuthenticationError.MissingToken",
            "request_id": "mock",
        })),
    )
}

fn sample_projects() -> Vec<Value> {
    vec![
        json!({ "id": 101, "title": "PHP website fixes", "type": "fixed", "currency": { "code": "USD" } }),
        json!({ "id": 102, "title": "Django REST API", "type": "hourly", "currency": { "code": "USD" } }),
        json!({ "id": 103, "title": "Logo design for PHP meetup", "type": "hourly", "currency": { "code": "AUD" } }),
    ]
}

fn sample_jobs() -> Vec<Value> {
    vec![
        json!({ "id": 3, "name": "PHP", "category": { "id": 1 }, "seo_url": "php" }),
        json!({ "id": 13, "name": "Python", "category": { "id": 1 }, "seo_url": "python" }),
        json!({ "id": 1017, "name": "Django", "category": { "id": 1 }, "seo_url": "django" }),
        json!({ "id": 20, "name": "Graphic Design", "category": { "id": 3 }, "seo_url": "graphic-design" }),
    ]
}
