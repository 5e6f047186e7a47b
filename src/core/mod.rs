pub mod access;
pub mod amendment;
pub mod drafts;
pub mod health;
pub mod petition;
pub mod retrieval;
pub mod submission;
pub mod update;
pub mod users;

use crate::adapters::http::build_client;
use crate::adapters::{CaseDataClient, DraftStoreClient, FormatterClient, IdentityClient};
use crate::config::ServiceConfig;
use crate::domain::ports::{CaseDataApi, DraftStoreApi, FormatterApi, IdentityApi};
use crate::utils::error::Result;
use std::sync::Arc;

pub use access::AccessService;
pub use drafts::DraftService;
pub use health::{HealthReport, HealthService, WebServiceHealthCheck};
pub use petition::PetitionService;
pub use retrieval::RetrievalService;
pub use submission::SubmissionService;
pub use update::UpdateService;
pub use users::UserService;

/// The four upstream services behind their ports.
#[derive(Clone)]
pub struct Upstreams {
    pub case_data: Arc<dyn CaseDataApi>,
    pub identity: Arc<dyn IdentityApi>,
    pub formatter: Arc<dyn FormatterApi>,
    pub drafts: Arc<dyn DraftStoreApi>,
}

impl Upstreams {
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let client = build_client(config.request_timeout())?;

        Ok(Self {
            case_data: Arc::new(CaseDataClient::new(&config.case_data.url, client.clone())),
            identity: Arc::new(IdentityClient::new(config.identity.clone(), client.clone())),
            formatter: Arc::new(FormatterClient::new(&config.formatter.url, client.clone())),
            drafts: Arc::new(DraftStoreClient::new(&config.draft_store.url, client)),
        })
    }
}

/// Every operation the service exposes, wired to one set of upstreams.
#[derive(Clone)]
pub struct CaseMaintenance {
    pub submission: SubmissionService,
    pub update: UpdateService,
    pub retrieval: RetrievalService,
    pub drafts: DraftService,
    pub access: AccessService,
    pub petition: PetitionService,
    pub health: HealthService,
}

impl CaseMaintenance {
    pub fn new(upstreams: Upstreams, config: &ServiceConfig, health: HealthService) -> Self {
        let users = UserService::new(upstreams.identity.clone(), config.identity.caseworker.clone());
        let drafts = DraftService::new(upstreams.drafts.clone(), users.clone(), config.draft_store.clone());
        let retrieval = RetrievalService::new(
            upstreams.case_data.clone(),
            users.clone(),
            config.case_data.clone(),
        );

        Self {
            submission: SubmissionService::new(
                upstreams.case_data.clone(),
                users.clone(),
                drafts.clone(),
                config.case_data.clone(),
            ),
            update: UpdateService::new(upstreams.case_data.clone(), users.clone(), config.case_data.clone()),
            access: AccessService::new(upstreams.case_data.clone(), users.clone(), config.case_data.clone()),
            petition: PetitionService::new(retrieval.clone(), drafts.clone(), upstreams.formatter.clone(), users),
            retrieval,
            drafts,
            health,
        }
    }

    /// Real HTTP upstreams and a health probe for each.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let upstreams = Upstreams::from_config(config)?;
        let client = build_client(config.request_timeout())?;
        let health = HealthService::new(vec![
            WebServiceHealthCheck::new("caseDataStore", &config.case_data.url, client.clone()),
            WebServiceHealthCheck::new("identity", &config.identity.url, client.clone()),
            WebServiceHealthCheck::new("formatter", &config.formatter.url, client.clone()),
            WebServiceHealthCheck::new("draftStore", &config.draft_store.url, client),
        ]);

        Ok(Self::new(upstreams, config, health))
    }
}
