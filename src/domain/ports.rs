use crate::domain::model::{
    Actor, CaseData, CaseDataContent, CaseDetails, CreateDraft, DraftList, SearchResult,
    StartEventResponse, UpdateDraft, UserDetails,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Tokens and scope for one call into the case data store.
#[derive(Debug, Clone, Copy)]
pub struct CaseAccess<'a> {
    pub actor: Actor,
    pub user_token: &'a str,
    pub service_token: &'a str,
    pub user_id: &'a str,
    pub jurisdiction_id: &'a str,
    pub case_type: &'a str,
}

#[async_trait]
pub trait CaseDataApi: Send + Sync {
    /// Start an event that creates a new case.
    async fn start_case(&self, access: &CaseAccess<'_>, event_id: &str)
        -> Result<StartEventResponse>;

    async fn submit_case(
        &self,
        access: &CaseAccess<'_>,
        content: &CaseDataContent,
    ) -> Result<CaseDetails>;

    /// Start an event on an existing case.
    async fn start_event(
        &self,
        access: &CaseAccess<'_>,
        case_id: &str,
        event_id: &str,
    ) -> Result<StartEventResponse>;

    async fn submit_event(
        &self,
        access: &CaseAccess<'_>,
        case_id: &str,
        content: &CaseDataContent,
    ) -> Result<CaseDetails>;

    /// `None` when the store has no such case.
    async fn read_case(&self, access: &CaseAccess<'_>, case_id: &str)
        -> Result<Option<CaseDetails>>;

    async fn list_cases(&self, access: &CaseAccess<'_>) -> Result<Vec<CaseDetails>>;

    async fn search_cases(
        &self,
        user_token: &str,
        service_token: &str,
        case_type: &str,
        query: &str,
    ) -> Result<SearchResult>;

    async fn grant_access(
        &self,
        access: &CaseAccess<'_>,
        case_id: &str,
        grantee_id: &str,
    ) -> Result<()>;

    async fn revoke_access(
        &self,
        access: &CaseAccess<'_>,
        case_id: &str,
        revokee_id: &str,
    ) -> Result<()>;
}

#[async_trait]
pub trait IdentityApi: Send + Sync {
    async fn user_details(&self, bearer_token: &str) -> Result<UserDetails>;

    /// Password-grant login; returns the raw access token.
    async fn login(&self, username: &str, password: &str) -> Result<String>;

    /// Issue a service-to-service token for this service.
    async fn lease_service_token(&self) -> Result<String>;
}

#[async_trait]
pub trait FormatterApi: Send + Sync {
    async fn to_divorce_format(&self, user_token: &str, data: &CaseData) -> Result<CaseData>;
}

#[async_trait]
pub trait DraftStoreApi: Send + Sync {
    async fn list_drafts(
        &self,
        user_token: &str,
        service_token: &str,
        after: Option<&str>,
    ) -> Result<DraftList>;

    async fn create_draft(
        &self,
        user_token: &str,
        service_token: &str,
        draft: &CreateDraft,
    ) -> Result<()>;

    async fn update_draft(
        &self,
        user_token: &str,
        service_token: &str,
        draft_id: &str,
        draft: &UpdateDraft,
    ) -> Result<()>;

    async fn delete_all_drafts(&self, user_token: &str, service_token: &str) -> Result<()>;
}
