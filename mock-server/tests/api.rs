use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_log, RecordedRequest, RequestLog, OAUTH_HEADER};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn authed(uri: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header(OAUTH_HEADER, "token-123")
        .body(String::new())
        .unwrap()
}

// --- auth ---

#[tokio::test]
async fn missing_token_returns_401_without_result() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/projects/active/?query=&")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert!(body.get("result").is_none());
}

#[tokio::test]
async fn empty_token_is_treated_as_missing() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/jobs/search/?lang=en&")
                .header(OAUTH_HEADER, "")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- projects ---

#[tokio::test]
async fn projects_without_filters_returns_everything() {
    let resp = app().oneshot(authed("/projects/active/?query=&")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["result"]["total_count"], 3);
}

#[tokio::test]
async fn projects_filter_by_query_and_type() {
    let resp = app()
        .oneshot(authed(
            "/projects/active/?query=php&project_types[]=fixed&min_price=0.0&sort_field=time_updated&",
        ))
        .await
        .unwrap();

    let body = body_json(resp).await;
    let projects = body["result"]["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["id"], 101);
}

// --- jobs ---

#[tokio::test]
async fn jobs_filter_by_name_and_category() {
    let resp = app()
        .oneshot(authed(
            "/jobs/search/?job_names[]=Python&job_names[]=Django&categories[]=1&seo_details=true&lang=en&",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let names: Vec<&str> = body["result"]
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Python", "Django"]);
    assert_eq!(body["result"][0]["seo_url"], "python");
}

#[tokio::test]
async fn jobs_without_seo_details_drop_seo_url() {
    let resp = app()
        .oneshot(authed("/jobs/search/?jobs[]=3&seo_details=false&lang=en&"))
        .await
        .unwrap();

    let body = body_json(resp).await;
    let jobs = body["result"].as_array().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["name"], "PHP");
    assert!(jobs[0].get("seo_url").is_none());
}

// --- recording ---

#[tokio::test]
async fn requests_are_recorded_verbatim() {
    let log = RequestLog::default();

    app_with_log(log.clone())
        .oneshot(authed("/projects/active/?query=web%20design&countries[]=au&"))
        .await
        .unwrap();
    app_with_log(log.clone())
        .oneshot(
            Request::builder()
                .uri("/jobs/search/?lang=en&")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    let recorded = log.read().await;
    assert_eq!(
        *recorded,
        vec![
            RecordedRequest {
                path: "/projects/active/".to_string(),
                query: "query=web%20design&countries[]=au&".to_string(),
                token: Some("token-123".to_string()),
            },
            RecordedRequest {
                path: "/jobs/search/".to_string(),
                query: "lang=en&".to_string(),
                token: None,
            },
        ]
    );
}
