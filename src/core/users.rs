use crate::config::toml_config::CaseworkerCredentials;
use crate::domain::model::User;
use crate::domain::ports::IdentityApi;
use crate::utils::auth::bearer_token;
use crate::utils::error::{CaseMaintenanceError, Result};
use std::sync::Arc;

/// Resolves callers against the identity service.
#[derive(Clone)]
pub struct UserService {
    identity: Arc<dyn IdentityApi>,
    caseworker: CaseworkerCredentials,
}

impl UserService {
    pub fn new(identity: Arc<dyn IdentityApi>, caseworker: CaseworkerCredentials) -> Self {
        Self {
            identity,
            caseworker,
        }
    }

    pub async fn retrieve_user(&self, authorisation: &str) -> Result<User> {
        let token = bearer_token(authorisation);

        match self.identity.user_details(&token).await {
            Ok(details) => Ok(User {
                auth_token: token,
                details,
            }),
            Err(CaseMaintenanceError::Upstream {
                status: 401 | 403, ..
            }) => Err(CaseMaintenanceError::Forbidden {
                message: "User token was rejected by the identity service".to_string(),
            }),
            Err(e) => Err(e),
        }
    }

    /// 以設定中的 caseworker 帳號登入，用於代表系統讀取或授權案件
    pub async fn retrieve_anonymous_caseworker(&self) -> Result<User> {
        let token = self
            .identity
            .login(&self.caseworker.username, &self.caseworker.password)
            .await?;
        self.retrieve_user(&token).await
    }

    pub async fn service_token(&self) -> Result<String> {
        self.identity.lease_service_token().await
    }
}
