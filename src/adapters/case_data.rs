use crate::adapters::http::{endpoint, ensure_success};
use crate::domain::model::{CaseDataContent, CaseDetails, SearchResult, StartEventResponse};
use crate::domain::ports::{CaseAccess, CaseDataApi};
use crate::utils::auth::{bearer_token, SERVICE_AUTHORIZATION};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use url::Url;

const SERVICE: &str = "case data store";

/// HTTP client for the case data store.
#[derive(Debug, Clone)]
pub struct CaseDataClient {
    base_url: String,
    client: Client,
}

impl CaseDataClient {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// `/{actor}/{uid}/jurisdictions/{jid}/case-types/{ctid}/...`
    fn scoped_url(&self, access: &CaseAccess<'_>, tail: &[&str]) -> Result<Url> {
        let mut segments = vec![
            access.actor.path_segment(),
            access.user_id,
            "jurisdictions",
            access.jurisdiction_id,
            "case-types",
            access.case_type,
        ];
        segments.extend_from_slice(tail);
        endpoint(&self.base_url, &segments)
    }

    fn request(&self, method: Method, url: Url, user_token: &str, service_token: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, bearer_token(user_token))
            .header(SERVICE_AUTHORIZATION, bearer_token(service_token))
    }

    async fn start(&self, url: Url, access: &CaseAccess<'_>) -> Result<StartEventResponse> {
        tracing::debug!("📡 Starting event: {}", url.path());
        let response = self
            .request(Method::GET, url, access.user_token, access.service_token)
            .send()
            .await?;
        let response = ensure_success(SERVICE, response).await?;
        Ok(response.json().await?)
    }

    async fn submit(
        &self,
        url: Url,
        access: &CaseAccess<'_>,
        content: &CaseDataContent,
    ) -> Result<CaseDetails> {
        tracing::debug!("📡 Submitting event '{}': {}", content.event.id, url.path());
        let response = self
            .request(Method::POST, url, access.user_token, access.service_token)
            .query(&[("ignore-warning", content.ignore_warning)])
            .json(content)
            .send()
            .await?;
        let response = ensure_success(SERVICE, response).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl CaseDataApi for CaseDataClient {
    async fn start_case(
        &self,
        access: &CaseAccess<'_>,
        event_id: &str,
    ) -> Result<StartEventResponse> {
        let url = self.scoped_url(access, &["event-triggers", event_id, "token"])?;
        self.start(url, access).await
    }

    async fn submit_case(
        &self,
        access: &CaseAccess<'_>,
        content: &CaseDataContent,
    ) -> Result<CaseDetails> {
        let url = self.scoped_url(access, &["cases"])?;
        self.submit(url, access, content).await
    }

    async fn start_event(
        &self,
        access: &CaseAccess<'_>,
        case_id: &str,
        event_id: &str,
    ) -> Result<StartEventResponse> {
        let url = self.scoped_url(
            access,
            &["cases", case_id, "event-triggers", event_id, "token"],
        )?;
        self.start(url, access).await
    }

    async fn submit_event(
        &self,
        access: &CaseAccess<'_>,
        case_id: &str,
        content: &CaseDataContent,
    ) -> Result<CaseDetails> {
        let url = self.scoped_url(access, &["cases", case_id, "events"])?;
        self.submit(url, access, content).await
    }

    async fn read_case(
        &self,
        access: &CaseAccess<'_>,
        case_id: &str,
    ) -> Result<Option<CaseDetails>> {
        let url = self.scoped_url(access, &["cases", case_id])?;
        let response = self
            .request(Method::GET, url, access.user_token, access.service_token)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("📡 Case {} not found in {}", case_id, SERVICE);
            return Ok(None);
        }

        let response = ensure_success(SERVICE, response).await?;
        Ok(Some(response.json().await?))
    }

    async fn list_cases(&self, access: &CaseAccess<'_>) -> Result<Vec<CaseDetails>> {
        let url = self.scoped_url(access, &["cases"])?;
        let response = self
            .request(Method::GET, url, access.user_token, access.service_token)
            .send()
            .await?;
        let response = ensure_success(SERVICE, response).await?;
        let cases: Vec<CaseDetails> = response.json().await?;
        tracing::debug!("📡 {} returned {} cases", SERVICE, cases.len());
        Ok(cases)
    }

    async fn search_cases(
        &self,
        user_token: &str,
        service_token: &str,
        case_type: &str,
        query: &str,
    ) -> Result<SearchResult> {
        let url = endpoint(&self.base_url, &["searchCases"])?;
        let response = self
            .request(Method::POST, url, user_token, service_token)
            .query(&[("ctid", case_type)])
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(query.to_string())
            .send()
            .await?;
        let response = ensure_success(SERVICE, response).await?;
        Ok(response.json().await?)
    }

    async fn grant_access(
        &self,
        access: &CaseAccess<'_>,
        case_id: &str,
        grantee_id: &str,
    ) -> Result<()> {
        let url = self.scoped_url(access, &["cases", case_id, "users"])?;
        let response = self
            .request(Method::POST, url, access.user_token, access.service_token)
            .json(&serde_json::json!({ "id": grantee_id }))
            .send()
            .await?;
        ensure_success(SERVICE, response).await?;
        Ok(())
    }

    async fn revoke_access(
        &self,
        access: &CaseAccess<'_>,
        case_id: &str,
        revokee_id: &str,
    ) -> Result<()> {
        let url = self.scoped_url(access, &["cases", case_id, "users", revokee_id])?;
        let response = self
            .request(Method::DELETE, url, access.user_token, access.service_token)
            .send()
            .await?;
        ensure_success(SERVICE, response).await?;
        Ok(())
    }
}
