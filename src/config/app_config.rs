use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub validation: ValidationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Storage backend selection
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Backend name: "memory" or "postgres"
    pub backend: String,
    /// Connection URL, required for the postgres backend
    pub database_url: Option<String>,
    /// Connection pool size for the postgres backend
    pub max_connections: u32,
}

/// Field validation settings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ValidationSettings {
    /// Explicit set of letters accepted in person names. When unset, any
    /// Unicode letter is accepted.
    pub name_alphabet: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            storage: StorageSettings::default(),
            validation: ValidationSettings::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            database_url: None,
            max_connections: 10,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.storage.backend, "memory");
        assert!(config.storage.database_url.is_none());
        assert!(config.validation.name_alphabet.is_none());
    }

    #[test]
    fn test_log_format_deserialization() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: LogFormat,
        }

        let wrapper: Wrapper = serde_json::from_str(r#"{"format":"json"}"#).unwrap();
        assert_eq!(wrapper.format, LogFormat::Json);
    }

    #[test]
    fn test_partial_config_uses_section_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server":{"host":"127.0.0.1","port":9000}}"#).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.storage.backend, "memory");
    }

    #[test]
    fn test_storage_settings_deserialization() {
        let config: AppConfig = serde_json::from_str(
            r#"{"storage":{"backend":"postgres","database_url":"postgres://localhost/wht_teams","max_connections":5}}"#,
        )
        .unwrap();

        assert_eq!(config.storage.backend, "postgres");
        assert_eq!(
            config.storage.database_url.as_deref(),
            Some("postgres://localhost/wht_teams")
        );
        assert_eq!(config.storage.max_connections, 5);
    }
}
