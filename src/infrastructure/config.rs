use serde::Deserialize;
use std::path::Path;

const CONFIG_PATH_ENV: &str = "PENSION_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/default.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub redis: RedisConfig,
    pub background_check: BackgroundCheckConfig,
    pub reference_ids: ReferenceIdsConfig,
    pub cors: CorsConfig,
    pub worker: WorkerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    pub url: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackgroundCheckConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for BackgroundCheckConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9090".to_string(),
            timeout_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReferenceIdsConfig {
    pub prefix: String,
}

impl Default for ReferenceIdsConfig {
    fn default() -> Self {
        Self {
            prefix: "PEN".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    pub delivered_ttl_seconds: u64,
    pub poll_timeout_seconds: f64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            delivered_ttl_seconds: 86_400,
            poll_timeout_seconds: 1.0,
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Loads the file named by `PENSION_CONFIG`, falling back to
    /// `config/default.yaml` and then to built-in defaults, and applies
    /// environment overrides on top.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: port,
            })?;
        }
        if let Some(url) = lookup("REDIS_URL") {
            self.redis.url = url;
        }
        if let Some(url) = lookup("BACKGROUND_CHECK_URL") {
            self.background_check.base_url = url;
        }
        if let Some(timeout) = lookup("BACKGROUND_CHECK_TIMEOUT_MS") {
            self.background_check.timeout_ms =
                timeout.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "BACKGROUND_CHECK_TIMEOUT_MS",
                    value: timeout,
                })?;
        }
        if let Some(prefix) = lookup("REFERENCE_ID_PREFIX") {
            self.reference_ids.prefix = prefix;
        }
        if let Some(origins) = lookup("CORS_ALLOWED_ORIGINS") {
            self.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml_str(
            r#"
server:
  port: 9000
background_check:
  base_url: "http://checks.internal"
"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.background_check.base_url, "http://checks.internal");
        assert_eq!(config.background_check.timeout_ms, 5000);
        assert_eq!(config.reference_ids.prefix, "PEN");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("SERVER_PORT", "3000"),
            ("REDIS_URL", "redis://cache:6379"),
            ("REFERENCE_ID_PREFIX", "PX"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.redis.url, "redis://cache:6379");
        assert_eq!(config.reference_ids.prefix, "PX");
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(|key| (key == "SERVER_PORT").then(|| "eighty".to_string()))
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { key: "SERVER_PORT", .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
