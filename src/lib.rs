pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{router, AppState};
pub use config::ServiceConfig;
pub use crate::core::{CaseMaintenance, Upstreams};
pub use utils::error::{CaseMaintenanceError, Result};
