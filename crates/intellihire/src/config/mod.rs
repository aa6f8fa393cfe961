use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::workflows::interview::evaluation::{EvaluationConfig, FallbackPolicy};

const DEFAULT_HISTORY_PATH: &str = "data/interview_sessions.json";
const DEFAULT_EVALUATION_DELAY_MS: u64 = 2000;

/// Distinguishes runtime behavior for different stages of the service.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub practice: PracticeConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let history_path = env::var("APP_HISTORY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_HISTORY_PATH));

        let evaluation_delay_ms = match env::var("APP_EVALUATION_DELAY_MS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEvaluationDelay)?,
            Err(_) => DEFAULT_EVALUATION_DELAY_MS,
        };

        let fallback_score = match env::var("APP_FALLBACK_SCORE") {
            Ok(raw) => Some(parse_fallback_score(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            practice: PracticeConfig {
                history_path,
                evaluation_delay_ms,
                fallback_score,
            },
        })
    }
}

fn parse_fallback_score(raw: &str) -> Result<u8, ConfigError> {
    let score = raw
        .trim()
        .parse::<u8>()
        .map_err(|_| ConfigError::InvalidFallbackScore(raw.to_string()))?;
    if FallbackPolicy::RANDOM_RANGE.contains(&score) {
        Ok(score)
    } else {
        Err(ConfigError::InvalidFallbackScore(raw.to_string()))
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Interview practice settings: where history lives and how grading behaves.
#[derive(Debug, Clone)]
pub struct PracticeConfig {
    pub history_path: PathBuf,
    pub evaluation_delay_ms: u64,
    pub fallback_score: Option<u8>,
}

impl PracticeConfig {
    pub fn evaluation_config(&self) -> EvaluationConfig {
        let fallback = match self.fallback_score {
            Some(score) => FallbackPolicy::Fixed { score },
            None => FallbackPolicy::Randomized,
        };

        EvaluationConfig {
            simulated_latency_ms: self.evaluation_delay_ms,
            fallback,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidEvaluationDelay,
    InvalidFallbackScore(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidEvaluationDelay => {
                write!(f, "APP_EVALUATION_DELAY_MS must be a whole number of milliseconds")
            }
            ConfigError::InvalidFallbackScore(value) => {
                write!(f, "APP_FALLBACK_SCORE must be between 6 and 9, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidEvaluationDelay
            | ConfigError::InvalidFallbackScore(_) => None,
        }
    }
}
