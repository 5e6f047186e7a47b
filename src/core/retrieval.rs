use crate::config::toml_config::CaseDataConfig;
use crate::core::users::UserService;
use crate::domain::case_state::{CaseStateGrouping, StateGroupingTable};
use crate::domain::model::{Actor, CaseDetails, Role, SearchResult, User};
use crate::domain::ports::{CaseAccess, CaseDataApi};
use crate::utils::error::{CaseMaintenanceError, Result};
use crate::utils::validation::validate_case_id;
use std::sync::Arc;

/// Finds the case that belongs to a citizen.
#[derive(Clone)]
pub struct RetrievalService {
    case_data: Arc<dyn CaseDataApi>,
    users: UserService,
    settings: CaseDataConfig,
}

impl RetrievalService {
    pub fn new(case_data: Arc<dyn CaseDataApi>, users: UserService, settings: CaseDataConfig) -> Self {
        Self {
            case_data,
            users,
            settings,
        }
    }

    /// The user's only case; more than one is a duplicate.
    pub async fn retrieve_case(&self, authorisation: &str, role: Role) -> Result<Option<CaseDetails>> {
        let (user, cases) = self.cases_for(authorisation).await?;

        if cases.len() > 1 {
            tracing::warn!("⚠️ {} {} has {} cases", role, user.id(), cases.len());
            return Err(CaseMaintenanceError::DuplicateCase {
                message: format!("There are {} cases for the {}", cases.len(), role),
            });
        }

        Ok(cases.into_iter().next())
    }

    /// 依角色的狀態分組挑選案件
    pub async fn retrieve_case_grouped(
        &self,
        authorisation: &str,
        role: Role,
    ) -> Result<Option<CaseDetails>> {
        let (user, cases) = self.cases_for(authorisation).await?;
        tracing::debug!("🔍 {} {} has {} cases", role, user.id(), cases.len());
        select_case(cases, StateGroupingTable::for_role(role))
    }

    pub async fn retrieve_case_by_id(
        &self,
        authorisation: &str,
        case_id: &str,
    ) -> Result<Option<CaseDetails>> {
        let user = self.users.retrieve_user(authorisation).await?;
        self.read_case_as(&user, Actor::Citizen, case_id).await
    }

    /// Read a case on behalf of an already resolved user.
    pub async fn read_case_as(
        &self,
        user: &User,
        actor: Actor,
        case_id: &str,
    ) -> Result<Option<CaseDetails>> {
        validate_case_id(case_id)?;

        let service_token = self.users.service_token().await?;
        let access = CaseAccess {
            actor,
            user_token: &user.auth_token,
            service_token: &service_token,
            user_id: user.id(),
            jurisdiction_id: &self.settings.jurisdiction_id,
            case_type: &self.settings.case_type,
        };
        self.case_data.read_case(&access, case_id).await
    }

    pub async fn search_cases(&self, authorisation: &str, query: &str) -> Result<SearchResult> {
        if query.trim().is_empty() {
            return Err(CaseMaintenanceError::invalid_request("Search query must not be empty"));
        }

        let user = self.users.retrieve_user(authorisation).await?;
        let service_token = self.users.service_token().await?;
        let result = self
            .case_data
            .search_cases(&user.auth_token, &service_token, &self.settings.case_type, query)
            .await?;

        tracing::debug!("🔍 Search matched {} cases", result.total);
        Ok(result)
    }

    async fn cases_for(&self, authorisation: &str) -> Result<(User, Vec<CaseDetails>)> {
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

        let cases = self.case_data.list_cases(&access).await?;
        Ok((user, cases))
    }
}

/// Completed cases win, then a case awaiting amendment, then the single
/// incomplete case. Cases in unknown states are ignored.
pub fn select_case(
    cases: Vec<CaseDetails>,
    table: StateGroupingTable,
) -> Result<Option<CaseDetails>> {
    let mut complete = Vec::new();
    let mut amend = Vec::new();
    let mut incomplete = Vec::new();

    for case in cases {
        match table.group_of(case.state.as_deref()) {
            CaseStateGrouping::Complete => complete.push(case),
            CaseStateGrouping::Amend => amend.push(case),
            CaseStateGrouping::Incomplete => incomplete.push(case),
            CaseStateGrouping::Unknown => {}
        }
    }

    if let Some(case) = complete.into_iter().next() {
        return Ok(Some(case));
    }
    if let Some(case) = amend.into_iter().next() {
        return Ok(Some(case));
    }
    if incomplete.len() > 1 {
        return Err(CaseMaintenanceError::DuplicateCase {
            message: format!("There are {} incomplete cases", incomplete.len()),
        });
    }

    Ok(incomplete.into_iter().next())
}
