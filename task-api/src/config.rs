// src/config.rs
use dotenvy::dotenv;
use std::env;

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string, required
    pub database_url: String,
    /// Bind address for the HTTP listener
    pub server_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        // A missing .env file is not an error
        dotenv().ok();

        Ok(Config {
            database_url: env::var("DATABASE_URL")?,
            server_addr: env::var("SERVER_ADDR")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string()),
        })
    }
}
