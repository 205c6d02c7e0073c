use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use url::Url;

pub const DEFAULT_TARGET_URL: &str = "https://www.ycombinator.com/companies";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.114 Safari/537.36";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub target_url: String,
    pub user_agent: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_iterations: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub request_timeout_secs: u64,
    pub failure_policy: FailurePolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub page_path: PathBuf,
    pub companies_path: PathBuf,
    pub history_path: PathBuf,
}

/// What the agent loop does once a step has failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Record the failure and carry on with the next scripted step.
    Continue,
    /// Record the failure and end the run.
    Halt,
}

impl ApplicationSettings {
    pub fn target_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.target_url)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("Failed to read current dir: {}", e)))?;

    load_configuration(&base_path.join("configuration"))
}

/// Defaults, then `base.yaml` from `configuration_directory` if present, then
/// `APP_` environment variables (`APP_APPLICATION__MAX_ITERATIONS=5`).
pub fn load_configuration(configuration_directory: &Path) -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("application.target_url", DEFAULT_TARGET_URL)?
        .set_default("application.user_agent", DEFAULT_USER_AGENT)?
        .set_default("application.max_iterations", 3_i64)?
        .set_default("application.request_timeout_secs", 30_i64)?
        .set_default("application.failure_policy", "continue")?
        .set_default("output.page_path", "yc_companies_page.html")?
        .set_default("output.companies_path", "yc_companies.json")?
        .set_default("output.history_path", "react_history.json")?
        .add_source(
            config::File::from(configuration_directory.join("base.yaml")).required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
