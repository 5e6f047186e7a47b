use crate::core::amendment::{prepare_amendment, prepare_refusal_amendment, AmendmentDraft};
use crate::core::drafts::DraftService;
use crate::core::retrieval::RetrievalService;
use crate::core::users::UserService;
use crate::domain::case_state::CaseState;
use crate::domain::model::{Actor, CaseData, CaseDetails, Draft, Role, User};
use crate::domain::ports::FormatterApi;
use crate::domain::properties::{D8_CASE_REFERENCE, IS_DRAFT_KEY, PREVIOUS_CASE_ID};
use crate::utils::auth::bearer_token;
use crate::utils::error::Result;
use serde_json::Value;
use std::sync::Arc;

/// A citizen's petition: the submitted case, an amendment of it, or the draft.
#[derive(Clone)]
pub struct PetitionService {
    retrieval: RetrievalService,
    drafts: DraftService,
    formatter: Arc<dyn FormatterApi>,
    users: UserService,
}

impl PetitionService {
    pub fn new(
        retrieval: RetrievalService,
        drafts: DraftService,
        formatter: Arc<dyn FormatterApi>,
        users: UserService,
    ) -> Self {
        Self {
            retrieval,
            drafts,
            formatter,
            users,
        }
    }

    pub async fn retrieve_petition(
        &self,
        authorisation: &str,
        check_ccd: bool,
    ) -> Result<Option<CaseDetails>> {
        let draft = self.drafts.get_draft(authorisation).await?;

        let mut case = if check_ccd {
            self.retrieval
                .retrieve_case_grouped(authorisation, Role::Petitioner)
                .await?
        } else {
            None
        };

        if let Some(found) = case.take() {
            let state = CaseState::parse(found.state.as_deref().unwrap_or_default());
            tracing::debug!("📋 Case {} is in state {}", found.id_string(), state.as_str());

            case = match (&draft, state == CaseState::AmendPetition) {
                (_, false) => Some(found),
                (Some(existing), true) if is_amendment_draft(existing) => {
                    tracing::debug!("📝 Amendment draft already exists, ignoring case {}", found.id_string());
                    None
                }
                (_, true) => {
                    let amended = self
                        .in_divorce_format(authorisation, prepare_amendment(&found))
                        .await?;
                    Some(draft_as_case(amended))
                }
            };
        }

        match (case, draft) {
            (Some(case), _) => Ok(Some(case)),
            (None, Some(draft)) => {
                let document = self.draft_document(authorisation, draft).await?;
                Ok(Some(draft_as_case(document)))
            }
            (None, None) => Ok(None),
        }
    }

    pub async fn retrieve_petition_for_aos(&self, authorisation: &str) -> Result<Option<CaseDetails>> {
        self.retrieval
            .retrieve_case_grouped(authorisation, Role::Respondent)
            .await
    }

    /// Replaces the citizen's drafts with an amendment of their submitted case.
    pub async fn create_amended_petition_draft(&self, authorisation: &str) -> Result<Option<CaseData>> {
        let Some((user, case)) = self.amendable_case(authorisation).await? else {
            return Ok(None);
        };

        tracing::info!("📝 Amending case {} for user {}", case.id_string(), user.id());
        let amended = self
            .in_divorce_format(authorisation, prepare_amendment(&case))
            .await?;
        self.recreate_draft(authorisation, &amended).await?;
        Ok(Some(amended))
    }

    pub async fn create_amended_petition_draft_refusal(
        &self,
        authorisation: &str,
    ) -> Result<Option<CaseData>> {
        let Some((user, case)) = self.amendable_case(authorisation).await? else {
            return Ok(None);
        };

        tracing::info!("📝 Refusal amendment of case {} for user {}", case.id_string(), user.id());
        let amended = self
            .in_divorce_format(authorisation, prepare_refusal_amendment(&case))
            .await?;
        self.recreate_draft(authorisation, &amended).await?;
        Ok(Some(amended))
    }

    /// Refusal amendment of a given case, in storage format. The draft store is not touched.
    pub async fn create_amended_petition_draft_refusal_for_case(
        &self,
        authorisation: &str,
        case_id: &str,
    ) -> Result<Option<CaseData>> {
        let user = self.users.retrieve_user(authorisation).await?;
        let caseworker = self.users.retrieve_anonymous_caseworker().await?;
        let case = self
            .retrieval
            .read_case_as(&caseworker, Actor::Caseworker, case_id)
            .await?;

        let Some(case) = amendable(case, &user) else {
            return Ok(None);
        };

        Ok(Some(prepare_refusal_amendment(&case).into_storage_format()))
    }

    async fn amendable_case(&self, authorisation: &str) -> Result<Option<(User, CaseDetails)>> {
        let user = self.users.retrieve_user(authorisation).await?;
        let case = self
            .retrieval
            .retrieve_case(authorisation, Role::Petitioner)
            .await?;

        Ok(amendable(case, &user).map(|case| (user, case)))
    }

    async fn in_divorce_format(&self, authorisation: &str, draft: AmendmentDraft) -> Result<CaseData> {
        let formatted = self
            .formatter
            .to_divorce_format(&bearer_token(authorisation), &draft.data)
            .await?;
        Ok(draft.finish(formatted))
    }

    async fn recreate_draft(&self, authorisation: &str, data: &CaseData) -> Result<()> {
        self.drafts.delete_draft(authorisation).await?;
        self.drafts
            .create_draft(authorisation, data.clone(), true)
            .await
    }

    async fn draft_document(&self, authorisation: &str, draft: Draft) -> Result<CaseData> {
        if self.drafts.is_in_ccd_format(&draft) {
            self.formatter
                .to_divorce_format(&bearer_token(authorisation), &draft.document)
                .await
        } else {
            Ok(draft.document)
        }
    }
}

/// Only cases that reached a court reference can be amended.
fn amendable(case: Option<CaseDetails>, user: &User) -> Option<CaseDetails> {
    match case {
        None => {
            tracing::warn!("⚠️ No case found for user {}", user.id());
            None
        }
        Some(case) if !case.has_field(D8_CASE_REFERENCE) => {
            tracing::warn!(
                "⚠️ Case {} of user {} has no court reference yet",
                case.id_string(),
                user.id()
            );
            None
        }
        Some(case) => Some(case),
    }
}

fn is_amendment_draft(draft: &Draft) -> bool {
    draft.document.contains_key(PREVIOUS_CASE_ID)
}

fn draft_as_case(mut document: CaseData) -> CaseDetails {
    document.insert(IS_DRAFT_KEY.to_string(), Value::Bool(true));
    CaseDetails::from_data(document)
}
