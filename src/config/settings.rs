use std::env;
use std::path::Path;
use std::str::FromStr;

use config::{Config, ConfigError, File};
use dotenv::dotenv;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::config::jwt::JwtSettings;
use crate::config::scoring::PointTable;

/// Everything the server reads at startup: `configuration/base.yml`, then the
/// environment file, then `POSTGRES__*` / `APP__*` variables.
#[derive(Deserialize, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub scoring: PointTable,
}

#[derive(Deserialize, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: SecretString,
    pub db_name: String,
    /// Full url, takes precedence over the individual fields when set
    #[serde(default)]
    pub db_url: Option<SecretString>,
}

impl DatabaseSettings {
    pub fn connection_string(&self) -> SecretString {
        if let Some(url) = &self.db_url {
            return url.clone();
        }
        let url = format!("{}/{}", self.connection_string_without_db(), self.db_name);
        SecretString::new(url.into_boxed_str())
    }

    /// Server url without a database, used to create throwaway databases
    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}",
            self.user,
            self.password.expose_secret(),
            self.host,
            self.port
        )
    }
}

/// Location of the team reference tables, read on first use
#[derive(Deserialize, Debug, Clone)]
pub struct CatalogSettings {
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    fn file_name(self) -> &'static str {
        match self {
            Environment::Local => "local.yml",
            Environment::Production => "production.yml",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(ConfigError::Message(format!(
                "{} is not a supported environment, use `local` or `production`",
                other
            ))),
        }
    }
}

fn env_source(prefix: &str) -> config::Environment {
    config::Environment::default()
        .prefix(prefix)
        .prefix_separator("__")
        .separator("__")
}

pub fn get_config() -> Result<Settings, ConfigError> {
    dotenv().ok();

    let base_path = env::current_dir().map_err(|e| {
        ConfigError::Message(format!("Failed to determine the current directory: {}", e))
    })?;
    let environment: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .parse()?;

    let mut settings: Settings = load(&base_path.join("configuration"), environment)?;
    apply_secret_overrides(&mut settings);
    Ok(settings)
}

fn load(directory: &Path, environment: Environment) -> Result<Settings, ConfigError> {
    Config::builder()
        .add_source(File::from(directory.join("base.yml")))
        .add_source(File::from(directory.join(environment.file_name())))
        .add_source(env_source("POSTGRES"))
        .add_source(env_source("APP"))
        .build()?
        .try_deserialize()
}

/// Hosted deployments hand over `DATABASE_URL` and `JWT_SECRET` unprefixed
fn apply_secret_overrides(settings: &mut Settings) {
    if let Ok(url) = env::var("DATABASE_URL") {
        settings.database.db_url = Some(SecretString::new(url.into_boxed_str()));
    }
    if let Ok(secret) = env::var("JWT_SECRET") {
        settings.jwt.secret = SecretString::new(secret.into_boxed_str());
    }
}

/// Owned copy of the signing settings for the server and test clients
pub fn get_jwt_settings(settings: &Settings) -> JwtSettings {
    JwtSettings::new(
        settings.jwt.secret.expose_secret().to_string(),
        settings.jwt.expiration_hours,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_names_are_case_insensitive() {
        assert_eq!("Production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_database_url_wins_over_fields() {
        let mut db = DatabaseSettings {
            host: "localhost".into(),
            port: 5432,
            user: "postgres".into(),
            password: SecretString::new("pw".into()),
            db_name: "matchday".into(),
            db_url: None,
        };
        assert_eq!(
            db.connection_string().expose_secret(),
            "postgres://postgres:pw@localhost:5432/matchday"
        );

        db.db_url = Some(SecretString::new("postgres://elsewhere/db".into()));
        assert_eq!(db.connection_string().expose_secret(), "postgres://elsewhere/db");
    }
}
