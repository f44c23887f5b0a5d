use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the bulletin tools.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub messages: MessagesConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        let catalog_path = match env::var("BULLETIN_MESSAGES_PATH") {
            Ok(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyMessagesPath),
            Ok(raw) => Some(PathBuf::from(raw.trim())),
            Err(_) => None,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            messages: MessagesConfig { catalog_path },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where to find the message catalog; `None` keeps the built-in strings.
#[derive(Debug, Clone, Default)]
pub struct MessagesConfig {
    pub catalog_path: Option<PathBuf>,
}

impl MessagesConfig {
    pub fn ensure_exists(&self) -> Result<(), ConfigError> {
        match &self.catalog_path {
            Some(path) if !path.is_file() => Err(ConfigError::MissingMessagesFile {
                path: path.clone(),
            }),
            _ => Ok(()),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyMessagesPath,
    MissingMessagesFile { path: PathBuf },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyMessagesPath => {
                write!(f, "BULLETIN_MESSAGES_PATH is set but empty")
            }
            ConfigError::MissingMessagesFile { path } => {
                write!(f, "message catalog '{}' does not exist", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}
