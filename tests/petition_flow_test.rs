mod common;

use anyhow::Result;
use axum::http::StatusCode;
use common::*;
use httpmock::prelude::*;
use serde_json::json;

const BASE: &str = "/casemaintenance/version/1";

#[tokio::test]
async fn test_link_respondent_grants_access() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_citizen(&server, "resp@example.com").await;
    mock_caseworker(&server).await;

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("{CASEWORKER_CASES}/1234"))
                .header("Authorization", "Bearer cw-token");
            then.status(200).json_body(json!({
                "id": 1234,
                "state": "AosAwaiting",
                "case_data": { "AosLetterHolderId": "resp-pin" }
            }));
        })
        .await;

    let grant = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("{CASEWORKER_CASES}/1234/users"))
                .json_body(json!({ "id": USER_ID }));
            then.status(201);
        })
        .await;

    let response = send(
        app(&server)?,
        request("POST", &format!("{BASE}/link-respondent/1234/resp-pin"), None)?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::OK);
    grant.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_link_with_wrong_letter_holder_is_not_found() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_citizen(&server, "resp@example.com").await;
    mock_caseworker(&server).await;

    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("{CASEWORKER_CASES}/1234"));
            then.status(200).json_body(json!({
                "id": 1234,
                "case_data": { "AosLetterHolderId": "resp-pin" }
            }));
        })
        .await;

    let grant = server
        .mock_async(|when, then| {
            when.method(POST).path(format!("{CASEWORKER_CASES}/1234/users"));
            then.status(201);
        })
        .await;

    let response = send(
        app(&server)?,
        request("POST", &format!("{BASE}/link-respondent/1234/other-pin"), None)?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(grant.hits_async().await, 0);
    Ok(())
}

#[tokio::test]
async fn test_link_case_claimed_by_someone_else_is_not_found() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_citizen(&server, "intruder@example.com").await;
    mock_caseworker(&server).await;

    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("{CASEWORKER_CASES}/1234"));
            then.status(200).json_body(json!({
                "id": 1234,
                "case_data": {
                    "CoRespLetterHolderId": "coresp-pin",
                    "CoRespEmailAddress": "coresp@example.com"
                }
            }));
        })
        .await;

    let response = send(
        app(&server)?,
        request("POST", &format!("{BASE}/link-respondent/1234/coresp-pin"), None)?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_unlink_respondent_revokes_access() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_citizen(&server, "resp@example.com").await;
    mock_caseworker(&server).await;

    let revoke = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path(format!("{CASEWORKER_CASES}/1234/users/42"));
            then.status(204);
        })
        .await;

    let response = send(
        app(&server)?,
        request("DELETE", &format!("{BASE}/link-respondent/1234"), None)?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::OK);
    revoke.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_get_all_drafts_follows_paging() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_citizen(&server, "jane@example.com").await;

    let second_page = server
        .mock_async(|when, then| {
            when.method(GET).path("/drafts").query_param("after", "1");
            then.status(200).json_body(json!({
                "data": [{ "id": "2", "type": "divorcedraft", "document": {} }],
                "paging": {}
            }));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/drafts")
                .header("ServiceAuthorization", "Bearer svc-token");
            then.status(200).json_body(json!({
                "data": [{ "id": "1", "type": "divorcedraft", "document": {} }],
                "paging": { "after": "1" }
            }));
        })
        .await;

    let response = send(app(&server)?, request("GET", &format!("{BASE}/drafts"), None)?).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
    second_page.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_save_draft_creates_when_none_exists() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_citizen(&server, "jane@example.com").await;
    mock_no_drafts(&server).await;

    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/drafts")
                .json_body_partial(r#"{"type": "divorcedraftccdformat", "max_stale_days": 183}"#);
            then.status(201);
        })
        .await;

    let response = send(
        app(&server)?,
        request(
            "PUT",
            &format!("{BASE}/drafts?divorceFormat=false"),
            Some(json!({ "D8PetitionerFirstName": "Jane" })),
        )?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::OK);
    create.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_save_draft_updates_existing_draft() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_citizen(&server, "jane@example.com").await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/drafts");
            then.status(200).json_body(json!({
                "data": [
                    { "id": "7", "type": "someotherservice", "document": {} },
                    { "id": "8", "type": "divorcedraft", "document": {} }
                ],
                "paging": {}
            }));
        })
        .await;

    let update = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/drafts/8")
                .json_body_partial(r#"{"type": "divorcedraft"}"#);
            then.status(204);
        })
        .await;

    let response = send(
        app(&server)?,
        request("PUT", &format!("{BASE}/drafts"), Some(json!({ "courts": "serviceCentre" })))?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::OK);
    update.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_retrieve_petition_falls_back_to_ccd_format_draft() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_citizen(&server, "jane@example.com").await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/drafts");
            then.status(200).json_body(json!({
                "data": [{
                    "id": "3",
                    "type": "divorcedraftccdformat",
                    "document": { "D8PetitionerFirstName": "Jane" }
                }],
                "paging": {}
            }));
        })
        .await;

    let format = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/caseformatter/version/1/to-divorce-format")
                .json_body(json!({ "D8PetitionerFirstName": "Jane" }));
            then.status(200)
                .json_body(json!({ "petitionerFirstName": "Jane" }));
        })
        .await;

    let response = send(
        app(&server)?,
        request("GET", &format!("{BASE}/retrieveCase?checkCcd=false"), None)?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await?;
    assert_eq!(body["case_data"]["petitionerFirstName"], "Jane");
    assert_eq!(body["case_data"]["fetchedDraft"], true);
    assert_eq!(body["id"], serde_json::Value::Null);
    format.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_ccd_format_draft_is_formatted_with_caller_token() -> Result<()> {
    let server = MockServer::start_async().await;

    // the caller is never looked up, only a service token is leased
    let details = server
        .mock_async(|when, then| {
            when.method(GET).path("/details");
            then.status(200).json_body(json!({ "id": USER_ID }));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/lease");
            then.status(200).body(SERVICE_TOKEN);
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/drafts")
                .header("Authorization", USER_TOKEN);
            then.status(200).json_body(json!({
                "data": [{
                    "id": "3",
                    "type": "divorcedraftccdformat",
                    "document": { "D8PetitionerFirstName": "Jane" }
                }],
                "paging": {}
            }));
        })
        .await;

    let format = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/caseformatter/version/1/to-divorce-format")
                .header("Authorization", USER_TOKEN);
            then.status(200)
                .json_body(json!({ "petitionerFirstName": "Jane" }));
        })
        .await;

    let response = send(
        app(&server)?,
        request("GET", &format!("{BASE}/retrieveCase?checkCcd=false"), None)?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await?["case_data"]["petitionerFirstName"], "Jane");
    format.assert_async().await;
    assert_eq!(details.hits_async().await, 0);
    Ok(())
}

#[tokio::test]
async fn test_existing_amendment_draft_wins_over_amend_petition_case() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_citizen(&server, "jane@example.com").await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/drafts");
            then.status(200).json_body(json!({
                "data": [{
                    "id": "5",
                    "type": "divorcedraft",
                    "document": {
                        "divorceWho": "wife",
                        "previousCaseId": "01234567890"
                    }
                }],
                "paging": {}
            }));
        })
        .await;

    let cases = server
        .mock_async(|when, then| {
            when.method(GET).path(CITIZEN_CASES);
            then.status(200).json_body(json!([{
                "id": 1234,
                "state": "AmendPetition",
                "case_data": {
                    "D8caseReference": "LV17D80100",
                    "D8ReasonForDivorce": "adultery"
                }
            }]));
        })
        .await;

    let format = server
        .mock_async(|when, then| {
            when.method(POST).path("/caseformatter/version/1/to-divorce-format");
            then.status(200).json_body(json!({}));
        })
        .await;

    let response = send(app(&server)?, request("GET", &format!("{BASE}/retrieveCase"), None)?).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await?;
    assert_eq!(body["case_data"]["previousCaseId"], "01234567890");
    assert_eq!(body["case_data"]["divorceWho"], "wife");
    assert_eq!(body["case_data"]["fetchedDraft"], true);
    assert_eq!(body["id"], serde_json::Value::Null);
    cases.assert_async().await;
    assert_eq!(format.hits_async().await, 0);
    Ok(())
}

#[tokio::test]
async fn test_retrieve_petition_builds_amendment_from_case() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_citizen(&server, "jane@example.com").await;
    mock_no_drafts(&server).await;

    server
        .mock_async(|when, then| {
            when.method(GET).path(CITIZEN_CASES);
            then.status(200).json_body(json!([{
                "id": 1234,
                "state": "AmendPetition",
                "case_data": {
                    "D8caseReference": "LV17D80100",
                    "D8ReasonForDivorce": "adultery",
                    "D8PetitionerFirstName": "Jane"
                }
            }]));
        })
        .await;

    let format = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/caseformatter/version/1/to-divorce-format")
                .json_body_partial(r#"{"D8DivorceUnit": "serviceCentre"}"#);
            then.status(200).json_body(json!({
                "petitionerFirstName": "Jane",
                "courts": "serviceCentre"
            }));
        })
        .await;

    let response = send(app(&server)?, request("GET", &format!("{BASE}/retrieveCase"), None)?).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await?;
    assert_eq!(body["case_data"]["previousCaseId"], "1234");
    assert_eq!(body["case_data"]["previousReasonsForDivorce"], json!(["adultery"]));
    assert_eq!(body["case_data"]["fetchedDraft"], true);
    format.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_retrieve_petition_without_case_or_draft_is_no_content() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_citizen(&server, "jane@example.com").await;
    mock_no_drafts(&server).await;

    server
        .mock_async(|when, then| {
            when.method(GET).path(CITIZEN_CASES);
            then.status(200).json_body(json!([]));
        })
        .await;

    let response = send(app(&server)?, request("GET", &format!("{BASE}/retrieveCase"), None)?).await?;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn test_retrieve_aos_case_ignores_unissued_cases() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_citizen(&server, "resp@example.com").await;

    server
        .mock_async(|when, then| {
            when.method(GET).path(CITIZEN_CASES);
            then.status(200).json_body(json!([
                { "id": 1, "state": "AwaitingPayment", "case_data": {} },
                { "id": 2, "state": "AosStarted", "case_data": {} }
            ]));
        })
        .await;

    let response =
        send(app(&server)?, request("GET", &format!("{BASE}/retrieveAosCase"), None)?).await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await?["id"], 2);
    Ok(())
}

#[tokio::test]
async fn test_amended_petition_draft_recreates_draft() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_citizen(&server, "jane@example.com").await;

    server
        .mock_async(|when, then| {
            when.method(GET).path(CITIZEN_CASES);
            then.status(200).json_body(json!([{
                "id": 1234,
                "state": "Rejected",
                "case_data": {
                    "D8caseReference": "LV17D80100",
                    "D8ReasonForDivorce": "desertion",
                    "PreviousReasonsForDivorce": ["adultery"],
                    "IssueDate": "2018-11-01"
                }
            }]));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/caseformatter/version/1/to-divorce-format");
            then.status(200).json_body(json!({ "previousIssueDate": "2018-11-01" }));
        })
        .await;

    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/drafts");
            then.status(204);
        })
        .await;

    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/drafts")
                .json_body_partial(r#"{"type": "divorcedraft", "document": {"previousCaseId": "1234"}}"#);
            then.status(201);
        })
        .await;

    let response = send(
        app(&server)?,
        request("PUT", &format!("{BASE}/amended-petition-draft"), None)?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await?;
    assert_eq!(body["previousReasonsForDivorce"], json!(["adultery", "desertion"]));
    assert_eq!(body["previousIssueDate"], "2018-11-01");
    delete.assert_async().await;
    create.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_refusal_amendment_strips_refused_sections_and_recreates_draft() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_citizen(&server, "jane@example.com").await;

    server
        .mock_async(|when, then| {
            when.method(GET).path(CITIZEN_CASES);
            then.status(200).json_body(json!([{
                "id": 1234,
                "state": "Rejected",
                "case_data": {
                    "D8caseReference": "LV17D80100",
                    "D8ReasonForDivorce": "adultery",
                    "D8ReasonForDivorceBehaviourDetails": "details",
                    "PreviousReasonsForDivorceRefusal": ["desertion"],
                    "RefusalRejectionReason": ["noCriteria"],
                    "D8Connections": { "A": "yes" },
                    "D8PetitionerFirstName": "Jane"
                }
            }]));
        })
        .await;

    // the about-divorce section must not reach the formatter
    let leaked = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/caseformatter/version/1/to-divorce-format")
                .body_contains("D8ReasonForDivorce");
            then.status(500);
        })
        .await;

    let format = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/caseformatter/version/1/to-divorce-format")
                .header("Authorization", USER_TOKEN)
                .json_body_partial(
                    r#"{"D8DivorceUnit": "serviceCentre", "D8Connections": {"A": "yes"}, "D8PetitionerFirstName": "Jane"}"#,
                );
            then.status(200).json_body(json!({
                "petitionerFirstName": "Jane",
                "connections": { "A": "yes" },
                "courts": "serviceCentre"
            }));
        })
        .await;

    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/drafts");
            then.status(204);
        })
        .await;

    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/drafts")
                .json_body_partial(
                    r#"{"type": "divorcedraft", "document": {"previousCaseId": "1234", "courts": "serviceCentre"}}"#,
                );
            then.status(201);
        })
        .await;

    let response = send(
        app(&server)?,
        request("PUT", &format!("{BASE}/amended-petition-draft-refusal"), None)?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await?;
    assert_eq!(body["previousCaseId"], "1234");
    assert_eq!(body["previousReasonsForDivorceRefusal"], json!(["desertion", "adultery"]));
    assert_eq!(body["connections"], json!({ "A": "yes" }));
    assert!(body.get("previousReasonsForDivorce").is_none());

    assert_eq!(leaked.hits_async().await, 0);
    format.assert_async().await;
    delete.assert_async().await;
    create.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_amended_petition_draft_without_reference_is_not_found() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_citizen(&server, "jane@example.com").await;

    server
        .mock_async(|when, then| {
            when.method(GET).path(CITIZEN_CASES);
            then.status(200).json_body(json!([{
                "id": 1234,
                "state": "AwaitingPayment",
                "case_data": { "D8ReasonForDivorce": "adultery" }
            }]));
        })
        .await;

    let create = server
        .mock_async(|when, then| {
            when.method(POST).path("/drafts");
            then.status(201);
        })
        .await;

    let response = send(
        app(&server)?,
        request("PUT", &format!("{BASE}/amended-petition-draft-refusal"), None)?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(create.hits_async().await, 0);
    Ok(())
}

#[tokio::test]
async fn test_refusal_draft_for_case_stays_in_storage_format() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_citizen(&server, "jane@example.com").await;
    mock_caseworker(&server).await;

    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("{CASEWORKER_CASES}/1234"));
            then.status(200).json_body(json!({
                "id": 1234,
                "state": "Rejected",
                "case_data": {
                    "D8caseReference": "LV17D80100",
                    "D8ReasonForDivorce": "adultery",
                    "RefusalRejectionReason": ["noJurisdiction"],
                    "D8Connections": { "A": "yes" }
                }
            }));
        })
        .await;

    let format = server
        .mock_async(|when, then| {
            when.method(POST).path("/caseformatter/version/1/to-divorce-format");
            then.status(200).json_body(json!({}));
        })
        .await;

    let drafts = server
        .mock_async(|when, then| {
            when.path("/drafts");
            then.status(200);
        })
        .await;

    let response = send(
        app(&server)?,
        request("PUT", &format!("{BASE}/amended-petition-draft-refusal/1234"), None)?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await?;
    assert_eq!(body["D8ReasonForDivorce"], "adultery");
    assert_eq!(body["D8DivorceUnit"], "serviceCentre");
    assert_eq!(body["previousCaseId"], "1234");
    assert_eq!(body["previousReasonsForDivorceRefusal"], json!(["adultery"]));
    assert!(body.get("D8Connections").is_none());
    assert!(body.get("D8caseReference").is_none());
    assert_eq!(format.hits_async().await, 0);
    assert_eq!(drafts.hits_async().await, 0);
    Ok(())
}
