use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;
use validator::Validate;

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const CONFIG_DIR: &str = "config";
const DEFAULT_TREND_WINDOW_DAYS: usize = 7;

/// Application configuration with validation.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Application environment
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,

    /// Comma-separated list of allowed CORS origins; permissive when unset
    /// in development
    #[serde(default)]
    pub cors_allowed_origins: Option<String>,

    /// Opening balance of the cash ledger, applied before all recorded
    /// transactions
    #[serde(default = "default_opening_balance")]
    pub finance_opening_balance: Decimal,

    /// Days covered by the dashboard trend series, inclusive of today
    #[serde(default = "default_trend_window_days")]
    #[validate(range(min = 1, max = 90))]
    pub trend_window_days: usize,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_environment() -> String {
    DEFAULT_ENV.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_opening_balance() -> Decimal {
    Decimal::new(50_000, 0)
}

fn default_trend_window_days() -> usize {
    DEFAULT_TREND_WINDOW_DAYS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
            log_json: false,
            cors_allowed_origins: None,
            finance_opening_balance: default_opening_balance(),
            trend_window_days: default_trend_window_days(),
        }
    }
}

impl AppConfig {
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}

/// Loads configuration from optional `config/{default,<env>}.toml` files
/// layered under `APP__`-prefixed environment variables.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let environment = env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_ENV.to_string());

    let mut builder = Config::builder();
    for name in ["default", environment.as_str()] {
        let path = Path::new(CONFIG_DIR).join(name);
        if let Some(path) = path.to_str() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }
    builder = builder.add_source(Environment::with_prefix("APP").separator("__"));

    let config: AppConfig = builder.build()?.try_deserialize()?;
    config
        .validate()
        .map_err(|e| ConfigError::Message(e.to_string()))?;

    info!(
        environment = %config.environment,
        port = config.port,
        "configuration loaded"
    );
    Ok(config)
}

/// Initializes the global tracing subscriber. `RUST_LOG` wins over the
/// configured level when set.
pub fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
