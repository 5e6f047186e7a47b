use crate::config::ServiceConfig;
use crate::core::CaseMaintenance;
use crate::utils::error::Result;
use std::sync::Arc;

/// Shared by every handler; cloning only bumps the reference count.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<CaseMaintenance>,
}

impl AppState {
    pub fn new(services: CaseMaintenance) -> Self {
        Self {
            services: Arc::new(services),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        Ok(Self::new(CaseMaintenance::from_config(config)?))
    }
}
