use crate::adapters::http::endpoint;
use reqwest::Client;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentHealth {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub components: BTreeMap<String, ComponentHealth>,
}

impl HealthReport {
    pub fn is_up(&self) -> bool {
        self.status == HealthStatus::Up
    }
}

/// Probes `{url}/health` of one upstream.
#[derive(Debug, Clone)]
pub struct WebServiceHealthCheck {
    name: String,
    base_url: String,
    client: Client,
}

impl WebServiceHealthCheck {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>, client: Client) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            client,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn check(&self) -> ComponentHealth {
        let url = match endpoint(&self.base_url, &["health"]) {
            Ok(url) => url,
            Err(e) => return down(e.to_string()),
        };

        match self.client.get(url).send().await {
            Ok(response) if response.status().is_success() => ComponentHealth {
                status: HealthStatus::Up,
                detail: None,
            },
            Ok(response) => down(format!("HTTP {}", response.status())),
            Err(e) => down(e.to_string()),
        }
    }
}

fn down(detail: String) -> ComponentHealth {
    ComponentHealth {
        status: HealthStatus::Down,
        detail: Some(detail),
    }
}

#[derive(Debug, Clone, Default)]
pub struct HealthService {
    checks: Vec<WebServiceHealthCheck>,
}

impl HealthService {
    pub fn new(checks: Vec<WebServiceHealthCheck>) -> Self {
        Self { checks }
    }

    pub async fn check_all(&self) -> HealthReport {
        let mut components = BTreeMap::new();

        for check in &self.checks {
            let health = check.check().await;
            if health.status == HealthStatus::Down {
                tracing::warn!("🩺 {} is down: {}", check.name(), health.detail.as_deref().unwrap_or(""));
            }
            components.insert(check.name().to_string(), health);
        }

        let status = if components.values().all(|c| c.status == HealthStatus::Up) {
            HealthStatus::Up
        } else {
            HealthStatus::Down
        };

        HealthReport { status, components }
    }
}
