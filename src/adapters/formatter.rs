use crate::adapters::http::{endpoint, ensure_success};
use crate::domain::model::CaseData;
use crate::domain::ports::FormatterApi;
use crate::utils::auth::bearer_token;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

const SERVICE: &str = "formatter service";

#[derive(Debug, Clone)]
pub struct FormatterClient {
    base_url: String,
    client: Client,
}

impl FormatterClient {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    async fn transform(&self, operation: &str, user_token: &str, data: &CaseData) -> Result<CaseData> {
        let url = endpoint(
            &self.base_url,
            &["caseformatter", "version", "1", operation],
        )?;

        tracing::debug!("📡 Formatting {} fields via {}", data.len(), operation);
        let response = self
            .client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, bearer_token(user_token))
            .json(data)
            .send()
            .await?;
        let response = ensure_success(SERVICE, response).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl FormatterApi for FormatterClient {
    async fn to_divorce_format(&self, user_token: &str, data: &CaseData) -> Result<CaseData> {
        self.transform("to-divorce-format", user_token, data).await
    }
}
