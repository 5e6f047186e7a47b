use crate::app::extract::{Authorisation, CaseBody, CheckCcdQuery, DivorceFormatQuery};
use crate::app::response::found_or;
use crate::app::state::AppState;
use crate::domain::model::{CaseDetails, DraftList, Role, SearchResult};
use crate::utils::error::Result;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

pub const BASE_PATH: &str = "/casemaintenance/version/1";

pub fn router(state: AppState) -> Router {
    let cases = Router::new()
        .route("/submit", post(submit_case))
        .route("/bulk/submit", post(submit_bulk_case))
        .route("/updateCase/{case_id}/{event_id}", post(update_case))
        .route("/bulk/updateCase/{case_id}/{event_id}", post(update_bulk_case))
        .route("/retrieveCase", get(retrieve_petition))
        .route("/case", get(retrieve_case))
        .route("/case/{case_id}", get(retrieve_case_by_id))
        .route("/retrieveAosCase", get(retrieve_aos_case))
        .route("/search", post(search_cases))
        .route("/link-respondent/{case_id}/{letter_holder_id}", post(link_respondent))
        .route("/link-respondent/{case_id}", delete(unlink_respondent))
        .route(
            "/drafts",
            put(save_draft).get(get_all_drafts).delete(delete_draft),
        )
        .route("/amended-petition-draft", put(amended_petition_draft))
        .route("/amended-petition-draft-refusal", put(amended_petition_draft_refusal))
        .route(
            "/amended-petition-draft-refusal/{case_id}",
            put(amended_petition_draft_refusal_for_case),
        );

    Router::new()
        .nest(BASE_PATH, cases)
        .route("/health", get(health))
        .route("/health/liveness", get(liveness))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn submit_case(
    State(state): State<AppState>,
    auth: Authorisation,
    CaseBody(data): CaseBody,
) -> Result<Json<CaseDetails>> {
    let case = state.services.submission.submit_case(data, auth.as_str()).await?;
    Ok(Json(case))
}

async fn submit_bulk_case(
    State(state): State<AppState>,
    auth: Authorisation,
    CaseBody(data): CaseBody,
) -> Result<Json<CaseDetails>> {
    let case = state
        .services
        .submission
        .submit_bulk_case(data, auth.as_str())
        .await?;
    Ok(Json(case))
}

async fn update_case(
    State(state): State<AppState>,
    auth: Authorisation,
    Path((case_id, event_id)): Path<(String, String)>,
    CaseBody(data): CaseBody,
) -> Result<Json<CaseDetails>> {
    let case = state
        .services
        .update
        .update_case(&case_id, data, &event_id, auth.as_str())
        .await?;
    Ok(Json(case))
}

async fn update_bulk_case(
    State(state): State<AppState>,
    auth: Authorisation,
    Path((case_id, event_id)): Path<(String, String)>,
    CaseBody(data): CaseBody,
) -> Result<Json<CaseDetails>> {
    let case = state
        .services
        .update
        .update_bulk_case(&case_id, data, &event_id, auth.as_str())
        .await?;
    Ok(Json(case))
}

async fn retrieve_petition(
    State(state): State<AppState>,
    auth: Authorisation,
    Query(query): Query<CheckCcdQuery>,
) -> Result<Response> {
    let case = state
        .services
        .petition
        .retrieve_petition(auth.as_str(), query.check_ccd)
        .await?;
    Ok(found_or(case, StatusCode::NO_CONTENT))
}

async fn retrieve_case(State(state): State<AppState>, auth: Authorisation) -> Result<Response> {
    let case = state
        .services
        .retrieval
        .retrieve_case(auth.as_str(), Role::Petitioner)
        .await?;
    Ok(found_or(case, StatusCode::NO_CONTENT))
}

async fn retrieve_case_by_id(
    State(state): State<AppState>,
    auth: Authorisation,
    Path(case_id): Path<String>,
) -> Result<Response> {
    let case = state
        .services
        .retrieval
        .retrieve_case_by_id(auth.as_str(), &case_id)
        .await?;
    Ok(found_or(case, StatusCode::NOT_FOUND))
}

async fn retrieve_aos_case(State(state): State<AppState>, auth: Authorisation) -> Result<Response> {
    let case = state
        .services
        .petition
        .retrieve_petition_for_aos(auth.as_str())
        .await?;
    Ok(found_or(case, StatusCode::NO_CONTENT))
}

async fn search_cases(
    State(state): State<AppState>,
    auth: Authorisation,
    query: String,
) -> Result<Json<SearchResult>> {
    let result = state
        .services
        .retrieval
        .search_cases(auth.as_str(), &query)
        .await?;
    Ok(Json(result))
}

async fn link_respondent(
    State(state): State<AppState>,
    auth: Authorisation,
    Path((case_id, letter_holder_id)): Path<(String, String)>,
) -> Result<StatusCode> {
    state
        .services
        .access
        .link_respondent(auth.as_str(), &case_id, &letter_holder_id)
        .await?;
    Ok(StatusCode::OK)
}

async fn unlink_respondent(
    State(state): State<AppState>,
    auth: Authorisation,
    Path(case_id): Path<String>,
) -> Result<StatusCode> {
    state
        .services
        .access
        .unlink_respondent(auth.as_str(), &case_id)
        .await?;
    Ok(StatusCode::OK)
}

async fn save_draft(
    State(state): State<AppState>,
    auth: Authorisation,
    Query(query): Query<DivorceFormatQuery>,
    CaseBody(data): CaseBody,
) -> Result<StatusCode> {
    state
        .services
        .drafts
        .save_draft(auth.as_str(), data, query.divorce_format)
        .await?;
    Ok(StatusCode::OK)
}

async fn get_all_drafts(State(state): State<AppState>, auth: Authorisation) -> Result<Json<DraftList>> {
    let drafts = state.services.drafts.get_all_drafts(auth.as_str()).await?;
    Ok(Json(drafts))
}

async fn delete_draft(State(state): State<AppState>, auth: Authorisation) -> Result<StatusCode> {
    state.services.drafts.delete_draft(auth.as_str()).await?;
    Ok(StatusCode::OK)
}

async fn amended_petition_draft(State(state): State<AppState>, auth: Authorisation) -> Result<Response> {
    let draft = state
        .services
        .petition
        .create_amended_petition_draft(auth.as_str())
        .await?;
    Ok(found_or(draft, StatusCode::NOT_FOUND))
}

async fn amended_petition_draft_refusal(
    State(state): State<AppState>,
    auth: Authorisation,
) -> Result<Response> {
    let draft = state
        .services
        .petition
        .create_amended_petition_draft_refusal(auth.as_str())
        .await?;
    Ok(found_or(draft, StatusCode::NOT_FOUND))
}

async fn amended_petition_draft_refusal_for_case(
    State(state): State<AppState>,
    auth: Authorisation,
    Path(case_id): Path<String>,
) -> Result<Response> {
    let draft = state
        .services
        .petition
        .create_amended_petition_draft_refusal_for_case(auth.as_str(), &case_id)
        .await?;
    Ok(found_or(draft, StatusCode::NOT_FOUND))
}

async fn health(State(state): State<AppState>) -> Response {
    let report = state.services.health.check_all().await;
    let status = if report.is_up() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report)).into_response()
}

async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "UP" }))
}
