use crate::api_client::UserApiClient;
use serde_aux::field_attributes::{
    deserialize_number_from_string, deserialize_option_number_from_string,
};

const BASE_CONFIGURATION: &str = include_str!("../configuration/base.yaml");

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub api: ApiSettings,
    pub runner: RunnerSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub base_url: String,
    pub create_user_path: String,
    pub roll_number_header: String,
    pub valid_roll_number: String,
    // Unset means the transport default, i.e. no timeout at all
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub timeout_milliseconds: Option<u64>,
}

impl ApiSettings {
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.create_user_path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_milliseconds.map(std::time::Duration::from_millis)
    }

    pub fn client(&self) -> Result<UserApiClient, reqwest::Error> {
        UserApiClient::new(
            self.endpoint(),
            self.roll_number_header.clone(),
            self.timeout(),
        )
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct RunnerSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub rate_limit_attempts: u32,
    /// Fixed seed for generated phone numbers, emails and strings.
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub seed: Option<u64>,
    /// Exit non-zero when any scenario failed.
    pub strict: bool,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!(
            "Failed to determine the current directory: {}",
            e
        ))
    })?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from_str(
            BASE_CONFIGURATION,
            config::FileFormat::Yaml,
        ))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_RUNNER__SEED=7` would set `Settings.runner.seed`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for our application.
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
