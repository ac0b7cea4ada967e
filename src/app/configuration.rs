use std::env;
use std::env::VarError;
use std::time::Duration;

use config::{
    Config,
    ConfigError,
    Environment,
    File,
};
use custom_error::custom_error;
use derivative::Derivative;
use sqlx::postgres::{
    PgConnectOptions,
    PgSslMode,
};

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub email_client: EmailClientSettings,
    pub cors: CorsSettings,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub max_pending_connections: u32,
    pub port: u16,
}

#[derive(Clone, Derivative, serde::Deserialize)]
#[derivative(Debug)]
pub struct DatabaseSettings {
    pub acquire_timeout_seconds: u64,
    pub name: String,
    pub host: String,
    pub max_db_connections: u32,
    #[derivative(Debug = "ignore")]
    pub password: String,
    pub port: u16,
    pub require_ssl: bool,
    pub username: String,
}

#[derive(Clone, Derivative, serde::Deserialize)]
#[derivative(Debug)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub sender_name: String,
    pub timeout_secs: u64,
    pub username: String,
    #[derivative(Debug = "ignore")]
    pub password: String,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct CorsSettings {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default)]
    pub allow_all_origins: bool,
}

impl ApplicationSettings {
    pub fn binding_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseSettings {
    pub fn pgserver_connection_options(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };
        PgConnectOptions::new()
            .host(&self.host)
            .username(&self.username)
            .password(&self.password)
            .port(self.port)
            .ssl_mode(ssl_mode)
    }

    pub fn database_connection_options(&self) -> PgConnectOptions {
        self.pgserver_connection_options().database(&self.name)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_seconds)
    }
}

custom_error! {
///! Custom error for missing env variable or invalid configuration files.
pub ConfigurationError
    MissingAppEnv{source:VarError} = "`APP_ENVIRONMENT` is not set \
    (possible values: [`local`|`production`]).",
    InvalidConfig{source:ConfigError} = "{source}",
}

/// Load the configuration from the directory: `configuration`.
///
/// It fails if:
/// - the `APP_ENVIRONMENT` env variable is not set
/// - the `configuration/base` file is missing
/// - the `configuration/${APP_ENVIRONMENT}` file is missing
/// - the `configuration/*` files have missing or unexpected fields
///
/// Environment variables prefixed with `APP_` and using `__` as separator
/// override the files, e.g. `APP_DATABASE__PASSWORD=secret` sets
/// `Settings.database.password` and `APP_CORS__ALLOWED_ORIGINS=a,b` sets the
/// list of allowed origins.
///
/// # Examples
///
/// ```rust,no_run
/// use workshop_registration::app::load_configuration;
///
/// assert!(load_configuration().is_ok());
/// ```
pub fn load_configuration() -> Result<Settings, ConfigurationError> {
    let app_environment = env::var("APP_ENVIRONMENT")?;
    let config = Config::builder()
        .add_source(File::with_name("configuration/base").required(true))
        .add_source(File::with_name(&format!("configuration/{}", app_environment)).required(true))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins"),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
