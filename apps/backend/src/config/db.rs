use std::env;

use crate::error::AppError;

/// Connection settings for the record store.
///
/// The pool bounds the number of in-flight transactions; award calls
/// beyond the pool's capacity wait for a free connection instead of
/// failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub url: String,
    pub min_connections: u32,
    pub max_connections: u32,
}

impl DbConfig {
    /// Builds the config from environment variables. `DATABASE_URL`
    /// wins when set; otherwise the URL is assembled from the discrete
    /// `POSTGRES_*` variables.
    pub fn from_env() -> Result<Self, AppError> {
        let url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => postgres_url()?,
        };
        Ok(Self {
            url,
            min_connections: var_or("DB_MIN_CONNECTIONS", 50)?,
            max_connections: var_or("DB_MAX_CONNECTIONS", 100)?,
        })
    }
}

fn postgres_url() -> Result<String, AppError> {
    let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
    let db_name = must_var("POSTGRES_DB")?;
    let username = must_var("POSTGRES_USER")?;
    let password = must_var("POSTGRES_PASSWORD")?;
    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

/// Get required environment variable or return a config error.
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::config(format!("{name} must be set")))
}

fn var_or(name: &str, default: u32) -> Result<u32, AppError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .parse::<u32>()
            .map_err(|_| AppError::config(format!("{name} must be a number, got '{raw}'"))),
    }
}
