use crate::config::toml_config::DraftStoreConfig;
use crate::core::users::UserService;
use crate::domain::model::{CaseData, CreateDraft, Draft, DraftList, UpdateDraft};
use crate::domain::ports::DraftStoreApi;
use crate::utils::auth::bearer_token;
use crate::utils::error::Result;
use std::sync::Arc;

/// Drafts of a citizen's petition, kept in the draft store until the case is submitted.
#[derive(Clone)]
pub struct DraftService {
    store: Arc<dyn DraftStoreApi>,
    users: UserService,
    settings: DraftStoreConfig,
}

impl DraftService {
    pub fn new(store: Arc<dyn DraftStoreApi>, users: UserService, settings: DraftStoreConfig) -> Self {
        Self {
            store,
            users,
            settings,
        }
    }

    /// 取得所有分頁的草稿
    pub async fn get_all_drafts(&self, authorisation: &str) -> Result<DraftList> {
        let user_token = bearer_token(authorisation);
        let service_token = self.users.service_token().await?;

        let mut drafts = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let page = self
                .store
                .list_drafts(&user_token, &service_token, after.as_deref())
                .await?;
            let page_was_empty = page.data.is_empty();
            drafts.extend(page.data);

            match page.paging.after {
                Some(next) if !page_was_empty && after.as_deref() != Some(next.as_str()) => {
                    after = Some(next)
                }
                _ => break,
            }
        }

        tracing::debug!("📝 Found {} drafts", drafts.len());
        Ok(DraftList {
            data: drafts,
            ..DraftList::default()
        })
    }

    /// The first draft written by this service, in either format.
    pub async fn get_draft(&self, authorisation: &str) -> Result<Option<Draft>> {
        let drafts = self.get_all_drafts(authorisation).await?;
        Ok(drafts.data.into_iter().find(|draft| self.is_own_draft(draft)))
    }

    pub async fn save_draft(
        &self,
        authorisation: &str,
        data: CaseData,
        divorce_format: bool,
    ) -> Result<()> {
        match self.get_draft(authorisation).await? {
            Some(existing) => {
                let user_token = bearer_token(authorisation);
                let service_token = self.users.service_token().await?;
                let update = UpdateDraft {
                    document: data,
                    draft_type: self.draft_type(divorce_format).to_string(),
                };

                tracing::info!("📝 Updating draft {}", existing.id);
                self.store
                    .update_draft(&user_token, &service_token, &existing.id, &update)
                    .await
            }
            None => self.create_draft(authorisation, data, divorce_format).await,
        }
    }

    pub async fn create_draft(
        &self,
        authorisation: &str,
        data: CaseData,
        divorce_format: bool,
    ) -> Result<()> {
        let user_token = bearer_token(authorisation);
        let service_token = self.users.service_token().await?;
        let draft = CreateDraft {
            document: data,
            draft_type: self.draft_type(divorce_format).to_string(),
            max_stale_days: self.settings.max_stale_days(),
        };

        tracing::info!("📝 Creating {} draft", draft.draft_type);
        self.store
            .create_draft(&user_token, &service_token, &draft)
            .await
    }

    pub async fn delete_draft(&self, authorisation: &str) -> Result<()> {
        let user_token = bearer_token(authorisation);
        let service_token = self.users.service_token().await?;

        tracing::info!("📝 Deleting drafts");
        self.store
            .delete_all_drafts(&user_token, &service_token)
            .await
    }

    pub fn is_in_ccd_format(&self, draft: &Draft) -> bool {
        draft.draft_type == self.settings.ccd_format_type()
    }

    fn is_own_draft(&self, draft: &Draft) -> bool {
        draft.draft_type == self.settings.divorce_format_type()
            || draft.draft_type == self.settings.ccd_format_type()
    }

    fn draft_type(&self, divorce_format: bool) -> &str {
        if divorce_format {
            self.settings.divorce_format_type()
        } else {
            self.settings.ccd_format_type()
        }
    }
}
