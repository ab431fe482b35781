use crate::constants::paths::DEFAULT_BUILD_DIR;
use crate::response::binary::BinaryContentTypes;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub routing: RoutingSettings,
    pub binary: BinarySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RoutingSettings {
    pub build_dir: PathBuf,
    /// Host used to tell same-origin redirects from external ones
    #[serde(default)]
    pub host: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BinarySettings {
    #[serde(default)]
    pub extra_content_types: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Self::builder(&environment)?.build()?.try_deserialize()
    }

    fn builder(
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            // Start with default values
            .set_default("routing.build_dir", DEFAULT_BUILD_DIR)?
            .set_default("binary.extra_content_types", Vec::<String>::new())?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(
                Environment::with_prefix("SERVERLESS_ROUTING")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("binary.extra_content_types")
                    .try_parsing(true),
            ))
    }

    /// The default binary classifier extended with configured media types
    pub fn binary_classifier(&self) -> BinaryContentTypes {
        BinaryContentTypes::default().with_extra(&self.binary.extra_content_types)
    }

    pub fn host(&self) -> Option<&str> {
        self.routing.host.as_deref().filter(|h| !h.is_empty())
    }
}
