use crate::config::toml_config::CaseDataConfig;
use crate::core::users::UserService;
use crate::domain::model::{Actor, CaseData, CaseDataContent, CaseDetails};
use crate::domain::ports::{CaseAccess, CaseDataApi};
use crate::utils::error::Result;
use crate::utils::validation::validate_case_id;
use std::sync::Arc;

pub const UPDATE_EVENT_SUMMARY: &str = "Divorce case update event";
pub const UPDATE_EVENT_DESCRIPTION: &str = "Updating Divorce Case";

#[derive(Clone)]
pub struct UpdateService {
    case_data: Arc<dyn CaseDataApi>,
    users: UserService,
    settings: CaseDataConfig,
}

impl UpdateService {
    pub fn new(case_data: Arc<dyn CaseDataApi>, users: UserService, settings: CaseDataConfig) -> Self {
        Self {
            case_data,
            users,
            settings,
        }
    }

    pub async fn update_case(
        &self,
        case_id: &str,
        data: CaseData,
        event_id: &str,
        authorisation: &str,
    ) -> Result<CaseDetails> {
        self.update(Actor::Citizen, &self.settings.case_type, case_id, data, event_id, authorisation)
            .await
    }

    pub async fn update_bulk_case(
        &self,
        case_id: &str,
        data: CaseData,
        event_id: &str,
        authorisation: &str,
    ) -> Result<CaseDetails> {
        self.update(
            Actor::Caseworker,
            &self.settings.bulk_case_type,
            case_id,
            data,
            event_id,
            authorisation,
        )
        .await
    }

    async fn update(
        &self,
        actor: Actor,
        case_type: &str,
        case_id: &str,
        data: CaseData,
        event_id: &str,
        authorisation: &str,
    ) -> Result<CaseDetails> {
        validate_case_id(case_id)?;

        let user = self.users.retrieve_user(authorisation).await?;
        let service_token = self.users.service_token().await?;
        let access = CaseAccess {
            actor,
            user_token: &user.auth_token,
            service_token: &service_token,
            user_id: user.id(),
            jurisdiction_id: &self.settings.jurisdiction_id,
            case_type,
        };

        let start = self.case_data.start_event(&access, case_id, event_id).await?;
        let content = CaseDataContent::for_event(
            &start,
            UPDATE_EVENT_SUMMARY,
            UPDATE_EVENT_DESCRIPTION,
            data,
        );
        let case = self.case_data.submit_event(&access, case_id, &content).await?;
        tracing::info!("✅ Event '{}' applied to case {}", event_id, case_id);
        Ok(case)
    }
}
