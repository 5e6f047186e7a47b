use crate::config::toml_config::CaseDataConfig;
use crate::core::users::UserService;
use crate::domain::model::{Actor, CaseDetails, User};
use crate::domain::ports::{CaseAccess, CaseDataApi};
use crate::domain::properties::{
    CO_RESP_EMAIL_ADDRESS, CO_RESP_LETTER_HOLDER_ID, RESP_EMAIL_ADDRESS, RESP_LETTER_HOLDER_ID,
};
use crate::utils::error::{CaseMaintenanceError, Result};
use crate::utils::validation::validate_case_id;
use std::sync::Arc;

/// Which party a letter holder id identifies on a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkedParty {
    Respondent,
    CoRespondent,
}

impl LinkedParty {
    fn email_field(&self) -> &'static str {
        match self {
            LinkedParty::Respondent => RESP_EMAIL_ADDRESS,
            LinkedParty::CoRespondent => CO_RESP_EMAIL_ADDRESS,
        }
    }
}

/// Grants respondents and co-respondents access to a case they hold a letter for.
#[derive(Clone)]
pub struct AccessService {
    case_data: Arc<dyn CaseDataApi>,
    users: UserService,
    settings: CaseDataConfig,
}

impl AccessService {
    pub fn new(case_data: Arc<dyn CaseDataApi>, users: UserService, settings: CaseDataConfig) -> Self {
        Self {
            case_data,
            users,
            settings,
        }
    }

    pub async fn link_respondent(
        &self,
        authorisation: &str,
        case_id: &str,
        letter_holder_id: &str,
    ) -> Result<()> {
        validate_case_id(case_id)?;

        let caseworker = self.users.retrieve_anonymous_caseworker().await?;
        let service_token = self.users.service_token().await?;
        let access = self.caseworker_access(&caseworker, &service_token);

        let case = self
            .case_data
            .read_case(&access, case_id)
            .await?
            .ok_or_else(|| {
                CaseMaintenanceError::case_not_found(format!("Case {} not found", case_id))
            })?;

        let party = letter_holder_party(&case, letter_holder_id).ok_or_else(|| {
            tracing::warn!("⚠️ Letter holder id does not match case {}", case_id);
            CaseMaintenanceError::case_not_found(format!(
                "Case {} has no party with the given letter holder id",
                case_id
            ))
        })?;

        let linking_user = self.users.retrieve_user(authorisation).await?;
        ensure_not_linked_to_other(&case, party, &linking_user)?;

        self.case_data
            .grant_access(&access, case_id, linking_user.id())
            .await?;

        tracing::info!("🔗 {:?} {} linked to case {}", party, linking_user.id(), case_id);
        Ok(())
    }

    /// 撤銷目前使用者對案件的存取權
    pub async fn unlink_respondent(&self, authorisation: &str, case_id: &str) -> Result<()> {
        validate_case_id(case_id)?;

        let user = self.users.retrieve_user(authorisation).await?;
        let caseworker = self.users.retrieve_anonymous_caseworker().await?;
        let service_token = self.users.service_token().await?;
        let access = self.caseworker_access(&caseworker, &service_token);

        self.case_data
            .revoke_access(&access, case_id, user.id())
            .await?;

        tracing::info!("🔗 User {} unlinked from case {}", user.id(), case_id);
        Ok(())
    }

    fn caseworker_access<'a>(&'a self, caseworker: &'a User, service_token: &'a str) -> CaseAccess<'a> {
        CaseAccess {
            actor: Actor::Caseworker,
            user_token: &caseworker.auth_token,
            service_token,
            user_id: caseworker.id(),
            jurisdiction_id: &self.settings.jurisdiction_id,
            case_type: &self.settings.case_type,
        }
    }
}

pub fn letter_holder_party(case: &CaseDetails, letter_holder_id: &str) -> Option<LinkedParty> {
    if case.string_field(RESP_LETTER_HOLDER_ID) == Some(letter_holder_id) {
        Some(LinkedParty::Respondent)
    } else if case.string_field(CO_RESP_LETTER_HOLDER_ID) == Some(letter_holder_id) {
        Some(LinkedParty::CoRespondent)
    } else {
        None
    }
}

/// A party whose email is already on the case may only be claimed by that email.
fn ensure_not_linked_to_other(case: &CaseDetails, party: LinkedParty, user: &User) -> Result<()> {
    let Some(linked_email) = case.string_field(party.email_field()) else {
        return Ok(());
    };

    let same_user = user
        .details
        .email
        .as_deref()
        .is_some_and(|email| email.eq_ignore_ascii_case(linked_email));

    if same_user {
        Ok(())
    } else {
        Err(CaseMaintenanceError::CaseAlreadyLinked {
            message: format!("Case {} is already linked to another user", case.id_string()),
        })
    }
}
