use crate::utils::error::{CaseMaintenanceError, Result};
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

const MAX_ERROR_BODY: usize = 512;

pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("case-maintenance/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// 將 base URL 與路徑片段組合，片段會自動做百分號編碼
pub fn endpoint(base_url: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base_url).map_err(|e| CaseMaintenanceError::ConfigError {
        message: format!("Invalid upstream base URL '{}': {}", base_url, e),
    })?;

    url.path_segments_mut()
        .map_err(|_| CaseMaintenanceError::ConfigError {
            message: format!("Upstream base URL '{}' cannot have a path", base_url),
        })?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Turn any non-2xx response into an `Upstream` error carrying the status.
pub async fn ensure_success(service: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let mut message = response.text().await.unwrap_or_default();
    if message.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !message.is_char_boundary(cut) {
            cut -= 1;
        }
        message.truncate(cut);
    }

    tracing::warn!("📡 {} responded with {}", service, status);
    Err(CaseMaintenanceError::Upstream {
        service: service.to_string(),
        status: status.as_u16(),
        message,
    })
}
