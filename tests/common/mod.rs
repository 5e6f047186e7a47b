#![allow(dead_code)]

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use case_maintenance::{router, AppState, ServiceConfig};
use httpmock::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

pub const USER_TOKEN: &str = "Bearer user-token";
pub const USER_ID: &str = "42";
pub const CASEWORKER_TOKEN: &str = "cw-token";
pub const CASEWORKER_ID: &str = "900";
pub const SERVICE_TOKEN: &str = "svc-token";

pub const CITIZEN_CASES: &str = "/citizens/42/jurisdictions/DIVORCE/case-types/DIVORCE/cases";
pub const CASEWORKER_CASES: &str = "/caseworkers/900/jurisdictions/DIVORCE/case-types/DIVORCE/cases";

/// Every upstream points at the same mock server; their paths never overlap.
pub fn config_toml(base_url: &str) -> String {
    format!(
        r#"
[case_data]
url = "{base}"
jurisdiction_id = "DIVORCE"
case_type = "DIVORCE"
bulk_case_type = "DIVORCE_BulkAction"

[case_data.events]
create = "create"
create_hwf = "hwfCreate"
create_bulk_case = "scheduleCreate"

[identity]
url = "{base}"
service_name = "divorce_frontend"
client_id = "divorce"
client_secret = "client-secret"
redirect_uri = "http://localhost:9000/oauth2/callback"

[identity.caseworker]
username = "caseworker@example.com"
password = "password"

[formatter]
url = "{base}"

[draft_store]
url = "{base}"
"#,
        base = base_url
    )
}

pub fn app(server: &MockServer) -> Result<Router> {
    let config = ServiceConfig::from_toml_str(&config_toml(&server.base_url()))?;
    Ok(router(AppState::from_config(&config)?))
}

/// Citizen lookup plus service token lease.
pub async fn mock_citizen(server: &MockServer, email: &str) {
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/details")
                .header("Authorization", USER_TOKEN);
            then.status(200).json_body(json!({
                "id": USER_ID,
                "email": email,
                "forename": "Jane",
                "surname": "Doe",
                "roles": ["citizen"]
            }));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/lease");
            then.status(200).body(SERVICE_TOKEN);
        })
        .await;
}

/// Password-grant login and lookup of the system caseworker.
pub async fn mock_caseworker(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/o/token")
                .body_contains("grant_type=password");
            then.status(200)
                .json_body(json!({ "access_token": CASEWORKER_TOKEN }));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/details")
                .header("Authorization", "Bearer cw-token");
            then.status(200).json_body(json!({
                "id": 900,
                "email": "caseworker@example.com",
                "roles": ["caseworker-divorce"]
            }));
        })
        .await;
}

pub async fn mock_no_drafts(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/drafts");
            then.status(200).json_body(json!({ "data": [], "paging": {} }));
        })
        .await;
}

pub fn request(method: &str, uri: &str, body: Option<Value>) -> Result<Request<Body>> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", USER_TOKEN);

    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };
    Ok(request)
}

pub async fn send(app: Router, request: Request<Body>) -> Result<Response<Body>> {
    Ok(app.oneshot(request).await?)
}

pub async fn json_body(response: Response<Body>) -> Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
