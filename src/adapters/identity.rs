use crate::adapters::http::{endpoint, ensure_success};
use crate::config::toml_config::IdentityConfig;
use crate::domain::model::UserDetails;
use crate::domain::ports::IdentityApi;
use crate::utils::auth::bearer_token;
use crate::utils::error::{CaseMaintenanceError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const SERVICE: &str = "identity service";
const LOGIN_SCOPE: &str = "openid profile roles";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// HTTP client for the identity service: user lookups, caseworker login and
/// service-to-service token leases.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    config: IdentityConfig,
    client: Client,
}

impl IdentityClient {
    pub fn new(config: IdentityConfig, client: Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl IdentityApi for IdentityClient {
    async fn user_details(&self, bearer: &str) -> Result<UserDetails> {
        let url = endpoint(&self.config.url, &["details"])?;
        let response = self
            .client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, bearer_token(bearer))
            .send()
            .await?;
        let response = ensure_success(SERVICE, response).await?;
        Ok(response.json().await?)
    }

    async fn login(&self, username: &str, password: &str) -> Result<String> {
        let url = endpoint(&self.config.url, &["o", "token"])?;
        let form = [
            ("grant_type", "password"),
            ("username", username),
            ("password", password),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", LOGIN_SCOPE),
        ];

        tracing::debug!("🔑 Logging in as {}", username);
        let response = self.client.post(url).form(&form).send().await?;
        let response = ensure_success(SERVICE, response).await?;
        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    async fn lease_service_token(&self) -> Result<String> {
        let url = endpoint(&self.config.url, &["lease"])?;
        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({ "microservice": self.config.service_name }))
            .send()
            .await?;
        let response = ensure_success(SERVICE, response).await?;
        let token = response.text().await?.trim().to_string();

        if token.is_empty() {
            return Err(CaseMaintenanceError::Upstream {
                service: SERVICE.to_string(),
                status: 502,
                message: "Empty service token lease".to_string(),
            });
        }
        Ok(token)
    }
}
