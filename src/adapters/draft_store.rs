use crate::adapters::http::{endpoint, ensure_success};
use crate::domain::model::{CreateDraft, DraftList, UpdateDraft};
use crate::domain::ports::DraftStoreApi;
use crate::utils::auth::{bearer_token, SERVICE_AUTHORIZATION};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use url::Url;

const SERVICE: &str = "draft store";

#[derive(Debug, Clone)]
pub struct DraftStoreClient {
    base_url: String,
    client: Client,
}

impl DraftStoreClient {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn request(&self, method: Method, url: Url, user_token: &str, service_token: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, bearer_token(user_token))
            .header(SERVICE_AUTHORIZATION, bearer_token(service_token))
    }
}

#[async_trait]
impl DraftStoreApi for DraftStoreClient {
    async fn list_drafts(
        &self,
        user_token: &str,
        service_token: &str,
        after: Option<&str>,
    ) -> Result<DraftList> {
        let url = endpoint(&self.base_url, &["drafts"])?;
        let mut request = self.request(Method::GET, url, user_token, service_token);
        if let Some(after) = after {
            request = request.query(&[("after", after)]);
        }

        let response = ensure_success(SERVICE, request.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn create_draft(
        &self,
        user_token: &str,
        service_token: &str,
        draft: &CreateDraft,
    ) -> Result<()> {
        let url = endpoint(&self.base_url, &["drafts"])?;
        let response = self
            .request(Method::POST, url, user_token, service_token)
            .json(draft)
            .send()
            .await?;
        ensure_success(SERVICE, response).await?;
        Ok(())
    }

    async fn update_draft(
        &self,
        user_token: &str,
        service_token: &str,
        draft_id: &str,
        draft: &UpdateDraft,
    ) -> Result<()> {
        let url = endpoint(&self.base_url, &["drafts", draft_id])?;
        let response = self
            .request(Method::PUT, url, user_token, service_token)
            .json(draft)
            .send()
            .await?;
        ensure_success(SERVICE, response).await?;
        Ok(())
    }

    async fn delete_all_drafts(&self, user_token: &str, service_token: &str) -> Result<()> {
        let url = endpoint(&self.base_url, &["drafts"])?;
        let response = self
            .request(Method::DELETE, url, user_token, service_token)
            .send()
            .await?;
        ensure_success(SERVICE, response).await?;
        Ok(())
    }
}
