use crate::domain::model::CaseData;
use crate::utils::error::CaseMaintenanceError;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::Json;
use serde::Deserialize;

/// The caller's `Authorization` header, passed through to upstreams as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorisation(pub String);

impl Authorisation {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Authorisation {
    type Rejection = CaseMaintenanceError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| CaseMaintenanceError::invalid_request("Authorization header is required"))?;

        Ok(Self(value.to_string()))
    }
}

/// JSON case data body. Malformed bodies answer with the usual error envelope.
#[derive(Debug, Clone)]
pub struct CaseBody(pub CaseData);

impl<S: Send + Sync> FromRequest<S> for CaseBody {
    type Rejection = CaseMaintenanceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<CaseData>::from_request(req, state)
            .await
            .map_err(|rejection| CaseMaintenanceError::invalid_request(rejection.body_text()))?;
        Ok(Self(data))
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckCcdQuery {
    #[serde(default = "default_true")]
    pub check_ccd: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivorceFormatQuery {
    #[serde(default = "default_true")]
    pub divorce_format: bool,
}
