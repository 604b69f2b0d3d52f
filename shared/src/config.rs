use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub admin: AdminConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            filename: env::var("DATABASE_FILENAME")
                .unwrap_or_else(|_| "hostel_feedback.db".into()),
        };
        // The admin credential pair is never row-based and never compiled in;
        // the hash is an argon2 PHC string supplied by the operator.
        let admin = AdminConfig {
            username: env::var("ADMIN_USERNAME").context("ADMIN_USERNAME must be set")?,
            password_hash: env::var("ADMIN_PASSWORD_HASH")
                .context("ADMIN_PASSWORD_HASH must be set")?,
        };
        let server = ServerConfig {
            port: match env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a port number")?,
                Err(_) => 8080,
            },
        };
        Ok(Self {
            database,
            admin,
            server,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub filename: String,
}

#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}
