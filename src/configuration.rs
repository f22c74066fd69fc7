use std::{collections::HashMap, path::Path};

use serde::Deserialize;
use url::Url;

use crate::{domain::reader::DEFAULT_READER_TYPE, error::ReaderSyncError};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub source: SourceSettings,
    pub destination: DestinationSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SourceSettings {
    pub url: String,
    pub accepted_domain_suffix: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DestinationSettings {
    pub url: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub captured_payload: String,
    pub group_prefix: String,
    #[serde(default = "default_reader_type")]
    pub reader_type: String,
}

fn default_reader_type() -> String {
    DEFAULT_READER_TYPE.to_string()
}

#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    pub source_url: String,
    pub destination_url: String,
    pub accepted_domain_suffix: String,
    pub headers: HashMap<String, String>,
    pub captured_payload: String,
    pub group_prefix: String,
    pub reader_type: String,
}

impl Settings {
    pub fn pipeline_config(self) -> Result<PipelineConfig, ReaderSyncError> {
        for (name, url) in [
            ("source.url", &self.source.url),
            ("destination.url", &self.destination.url),
        ] {
            Url::parse(url)
                .map_err(|e| ReaderSyncError::Config(format!("{} '{}': {}", name, url, e)))?;
        }

        let accepted_domain_suffix = self.source.accepted_domain_suffix.trim().to_lowercase();
        if accepted_domain_suffix.is_empty() {
            return Err(ReaderSyncError::Config(
                "source.accepted_domain_suffix is empty".to_string(),
            ));
        }
        if self.destination.group_prefix.is_empty() {
            return Err(ReaderSyncError::Config(
                "destination.group_prefix is empty".to_string(),
            ));
        }

        Ok(PipelineConfig {
            source_url: self.source.url,
            destination_url: self.destination.url,
            accepted_domain_suffix,
            headers: self.destination.headers,
            captured_payload: self.destination.captured_payload,
            group_prefix: self.destination.group_prefix,
            reader_type: self.destination.reader_type,
        })
    }
}

pub enum Environment {
    Local,
    Flipbook,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Flipbook => "flipbook",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "flipbook" => Ok(Self::Flipbook),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `flipbook`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, ReaderSyncError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ReaderSyncError::Config(format!("current directory: {}", e)))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ReaderSyncError::Config)?;

    build_settings(
        &base_path.join("configuration"),
        environment,
        env_overrides(),
    )
}

fn env_overrides() -> config::Environment {
    config::Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
}

/// Layers base.yaml, then `<environment>.yaml`, then `overrides`.
fn build_settings(
    configuration_directory: &Path,
    environment: Environment,
    overrides: config::Environment,
) -> Result<Settings, ReaderSyncError> {
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(overrides)
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, path::Path};

    use super::{
        build_settings, env_overrides, DestinationSettings, Environment, Settings, SourceSettings,
    };
    use crate::{error::ReaderSyncError, services::to_header_map};

    fn configuration_directory() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("configuration")
    }

    fn header<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
        headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn settings() -> Settings {
        Settings {
            source: SourceSettings {
                url: "https://mocki.io/v1/emails".to_string(),
                accepted_domain_suffix: " @Gmail.com ".to_string(),
            },
            destination: DestinationSettings {
                url: "https://heyzine.com/flip-book/save".to_string(),
                headers: HashMap::from([("Cookie".to_string(), "s=1".to_string())]),
                captured_payload: "flipbook%5Bid%5D=1".to_string(),
                group_prefix: "flipbook[readers]".to_string(),
                reader_type: "google".to_string(),
            },
        }
    }

    #[test]
    fn pipeline_config_valid() {
        let config = settings().pipeline_config().unwrap();

        assert_eq!(config.accepted_domain_suffix, "@gmail.com");
        assert_eq!(config.group_prefix, "flipbook[readers]");
        assert_eq!(config.destination_url, "https://heyzine.com/flip-book/save");
        assert_eq!(config.headers["Cookie"], "s=1");
    }

    #[test]
    fn pipeline_config_invalid() {
        let mut bad_url = settings();
        bad_url.destination.url = "heyzine.com/save".to_string();
        assert!(matches!(
            bad_url.pipeline_config(),
            Err(ReaderSyncError::Config(_))
        ));

        let mut no_suffix = settings();
        no_suffix.source.accepted_domain_suffix = "  ".to_string();
        assert!(matches!(
            no_suffix.pipeline_config(),
            Err(ReaderSyncError::Config(_))
        ));

        let mut no_prefix = settings();
        no_prefix.destination.group_prefix = String::new();
        assert!(matches!(
            no_prefix.pipeline_config(),
            Err(ReaderSyncError::Config(_))
        ));
    }

    #[test]
    fn environment_from_string() {
        assert!(matches!(
            Environment::try_from("Flipbook".to_string()),
            Ok(Environment::Flipbook)
        ));
        assert!(Environment::try_from("production".to_string()).is_err());
    }

    #[test]
    fn build_settings_layers_flipbook_over_base() {
        let mut env = config::Map::new();
        env.insert(
            "APP_DESTINATION__HEADERS__COOKIE".to_string(),
            "heyzine_session=secret".to_string(),
        );
        let settings = build_settings(
            &configuration_directory(),
            Environment::Flipbook,
            env_overrides().source(Some(env)),
        )
        .unwrap();
        let config = settings.pipeline_config().unwrap();

        assert_eq!(config.destination_url, "https://heyzine.com/flip-book/save");
        assert_eq!(config.group_prefix, "flipbook[readers]");
        assert!(config.captured_payload.starts_with("flipbook%5Bid%5D"));
        assert_eq!(config.accepted_domain_suffix, "@gmail.com");
        assert_eq!(
            header(&config.headers, "referer"),
            Some("https://heyzine.com/flip-book/edit")
        );
        assert_eq!(header(&config.headers, "origin"), Some("https://heyzine.com"));
        assert_eq!(
            header(&config.headers, "cookie"),
            Some("heyzine_session=secret")
        );

        let map = to_header_map(&config.headers).unwrap();
        assert_eq!(map.get_all("cookie").iter().count(), 1);
        assert_eq!(map["cookie"], "heyzine_session=secret");
    }

    #[test]
    fn build_settings_local_keeps_library_shape() {
        let settings = build_settings(
            &configuration_directory(),
            Environment::Local,
            env_overrides().source(Some(config::Map::new())),
        )
        .unwrap();
        let config = settings.pipeline_config().unwrap();

        assert_eq!(config.destination_url, "https://heyzine.com/library/save");
        assert_eq!(config.group_prefix, "library[readers]");
        assert_eq!(config.reader_type, "google");
        assert_eq!(header(&config.headers, "cookie"), Some(""));
        assert!(header(&config.headers, "user-agent").is_some());
    }
}
