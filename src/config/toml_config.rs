use crate::utils::error::{CaseMaintenanceError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:4010";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_DIVORCE_DRAFT_TYPE: &str = "divorcedraft";
const DEFAULT_CCD_DRAFT_TYPE: &str = "divorcedraftccdformat";
const DEFAULT_MAX_STALE_DAYS: u32 = 183;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub server: Option<ServerConfig>,
    pub http: Option<HttpConfig>,
    pub logging: Option<LoggingConfig>,
    pub case_data: CaseDataConfig,
    pub identity: IdentityConfig,
    pub formatter: FormatterConfig,
    pub draft_store: DraftStoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseDataConfig {
    pub url: String,
    pub jurisdiction_id: String,
    pub case_type: String,
    pub bulk_case_type: String,
    pub events: EventsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    pub create: String,
    pub create_hwf: String,
    pub create_bulk_case: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub url: String,
    pub service_name: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub caseworker: CaseworkerCredentials,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct CaseworkerCredentials {
    pub username: String,
    pub password: String,
}

// 避免密碼出現在 debug 日誌
impl std::fmt::Debug for CaseworkerCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseworkerCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatterConfig {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftStoreConfig {
    pub url: String,
    pub divorce_format_type: Option<String>,
    pub ccd_format_type: Option<String>,
    pub max_stale_days: Option<u32>,
}

impl DraftStoreConfig {
    pub fn divorce_format_type(&self) -> &str {
        self.divorce_format_type
            .as_deref()
            .unwrap_or(DEFAULT_DIVORCE_DRAFT_TYPE)
    }

    pub fn ccd_format_type(&self) -> &str {
        self.ccd_format_type.as_deref().unwrap_or(DEFAULT_CCD_DRAFT_TYPE)
    }

    pub fn max_stale_days(&self) -> u32 {
        self.max_stale_days.unwrap_or(DEFAULT_MAX_STALE_DAYS)
    }
}

impl ServiceConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CaseMaintenanceError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| {
            CaseMaintenanceError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            }
        })
    }

    /// 替換環境變數 (例如 ${CASEWORKER_PASSWORD})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CaseMaintenanceError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("case_data.url", &self.case_data.url)?;
        validation::validate_url("identity.url", &self.identity.url)?;
        validation::validate_url("formatter.url", &self.formatter.url)?;
        validation::validate_url("draft_store.url", &self.draft_store.url)?;

        validation::validate_non_empty_string(
            "case_data.jurisdiction_id",
            &self.case_data.jurisdiction_id,
        )?;
        validation::validate_non_empty_string("case_data.case_type", &self.case_data.case_type)?;
        validation::validate_non_empty_string(
            "case_data.bulk_case_type",
            &self.case_data.bulk_case_type,
        )?;
        validation::validate_non_empty_string(
            "case_data.events.create",
            &self.case_data.events.create,
        )?;
        validation::validate_non_empty_string(
            "case_data.events.create_hwf",
            &self.case_data.events.create_hwf,
        )?;
        validation::validate_non_empty_string(
            "case_data.events.create_bulk_case",
            &self.case_data.events.create_bulk_case,
        )?;
        validation::validate_non_empty_string("identity.service_name", &self.identity.service_name)?;

        validation::validate_resolved("identity.client_secret", &self.identity.client_secret)?;
        validation::validate_resolved(
            "identity.caseworker.username",
            &self.identity.caseworker.username,
        )?;
        validation::validate_resolved(
            "identity.caseworker.password",
            &self.identity.caseworker.password,
        )?;

        if let Some(timeout) = self.http.as_ref().and_then(|h| h.timeout_seconds) {
            validation::validate_positive_number("http.timeout_seconds", timeout, 1)?;
        }

        if self.draft_store.divorce_format_type() == self.draft_store.ccd_format_type() {
            return Err(CaseMaintenanceError::InvalidConfigValueError {
                field: "draft_store.ccd_format_type".to_string(),
                value: self.draft_store.ccd_format_type().to_string(),
                reason: "Draft types for the two formats must differ".to_string(),
            });
        }

        Ok(())
    }

    pub fn bind_address(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.bind_address.as_deref())
            .unwrap_or(DEFAULT_BIND_ADDRESS)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.http
                .as_ref()
                .and_then(|h| h.timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn verbose_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
