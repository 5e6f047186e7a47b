use crate::config::toml_config::CaseDataConfig;
use crate::core::drafts::DraftService;
use crate::core::users::UserService;
use crate::domain::model::{Actor, CaseData, CaseDataContent, CaseDetails};
use crate::domain::ports::{CaseAccess, CaseDataApi};
use crate::domain::properties::{HELP_WITH_FEES_NEED_HELP, YES_VALUE};
use crate::utils::error::Result;
use std::sync::Arc;

pub const SUBMISSION_EVENT_SUMMARY: &str = "Divorce case submission event";
pub const SUBMISSION_EVENT_DESCRIPTION: &str = "Submitting Divorce Case";
pub const BULK_SUBMISSION_EVENT_SUMMARY: &str = "Divorce Bulk case submission event";
pub const BULK_SUBMISSION_EVENT_DESCRIPTION: &str = "Submitting divorce bulk Case";

/// Creates new cases in the case data store.
#[derive(Clone)]
pub struct SubmissionService {
    case_data: Arc<dyn CaseDataApi>,
    users: UserService,
    drafts: DraftService,
    settings: CaseDataConfig,
}

impl SubmissionService {
    pub fn new(
        case_data: Arc<dyn CaseDataApi>,
        users: UserService,
        drafts: DraftService,
        settings: CaseDataConfig,
    ) -> Self {
        Self {
            case_data,
            users,
            drafts,
            settings,
        }
    }

    pub async fn submit_case(&self, data: CaseData, authorisation: &str) -> Result<CaseDetails> {
        let user = self.users.retrieve_user(authorisation).await?;
        let service_token = self.users.service_token().await?;
        let access = CaseAccess {
            actor: Actor::Citizen,
            user_token: &user.auth_token,
            service_token: &service_token,
            user_id: user.id(),
            jurisdiction_id: &self.settings.jurisdiction_id,
            case_type: &self.settings.case_type,
        };

        let event_id = self.creation_event(&data);
        let start = self.case_data.start_case(&access, event_id).await?;
        let content = CaseDataContent::for_event(
            &start,
            SUBMISSION_EVENT_SUMMARY,
            SUBMISSION_EVENT_DESCRIPTION,
            data,
        );
        let case = self.case_data.submit_case(&access, &content).await?;
        tracing::info!("✅ Case {} submitted with event '{}'", case.id_string(), event_id);

        // 案件送出後草稿已無用途；刪除失敗不影響送出結果
        if let Err(e) = self.drafts.delete_draft(authorisation).await {
            tracing::warn!("⚠️ Case {} submitted but drafts were not deleted: {}", case.id_string(), e);
        }

        Ok(case)
    }

    pub async fn submit_bulk_case(&self, data: CaseData, authorisation: &str) -> Result<CaseDetails> {
        let user = self.users.retrieve_user(authorisation).await?;
        let service_token = self.users.service_token().await?;
        let access = CaseAccess {
            actor: Actor::Caseworker,
            user_token: &user.auth_token,
            service_token: &service_token,
            user_id: user.id(),
            jurisdiction_id: &self.settings.jurisdiction_id,
            case_type: &self.settings.bulk_case_type,
        };

        let start = self
            .case_data
            .start_case(&access, &self.settings.events.create_bulk_case)
            .await?;
        let content = CaseDataContent::for_event(
            &start,
            BULK_SUBMISSION_EVENT_SUMMARY,
            BULK_SUBMISSION_EVENT_DESCRIPTION,
            data,
        );
        let case = self.case_data.submit_case(&access, &content).await?;
        tracing::info!("✅ Bulk case {} submitted", case.id_string());
        Ok(case)
    }

    /// Help-with-fees applications start with their own event.
    fn creation_event(&self, data: &CaseData) -> &str {
        let needs_help = data
            .get(HELP_WITH_FEES_NEED_HELP)
            .and_then(|v| v.as_str())
            .is_some_and(|v| v.eq_ignore_ascii_case(YES_VALUE));

        if needs_help {
            &self.settings.events.create_hwf
        } else {
            &self.settings.events.create
        }
    }
}
