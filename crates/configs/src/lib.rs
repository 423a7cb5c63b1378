use std::time::Duration;

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

/// Connection string used when neither `config.toml` nor `DATABASE_URL` provide one.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://ContosoPizza.db?mode=rwc";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// `0` keeps idle connections open indefinitely.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    /// `0` never recycles a connection.
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

fn default_max_connections() -> u32 { 5 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load from `CONFIG_PATH` (default `config.toml`) and validate. A missing
    /// config file falls back to `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS` and `DATABASE_URL`.
    pub fn load_or_env() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if is_not_found(&e) => Self::from_env(),
            Err(e) => return Err(e),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut server = ServerConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            server.worker_threads = Some(w);
        }
        Self { server, database: DatabaseConfig::default() }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .map(|io| io.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    /// Single-connection in-memory SQLite. The database lives as long as that
    /// one connection, so it is never idled out or recycled.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            idle_timeout_secs: 0,
            max_lifetime_secs: 0,
            ..Self::default()
        }
    }

    pub fn normalize_from_env(&mut self) {
        // env beats the built-in default, never an explicit url
        if self.url.trim().is_empty() {
            self.url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        if !self.url.to_lowercase().starts_with("sqlite:") {
            return Err(anyhow!("database.url must start with sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration { Duration::from_secs(self.connect_timeout_secs) }
    pub fn acquire_timeout(&self) -> Duration { Duration::from_secs(self.acquire_timeout_secs) }
    pub fn idle_timeout(&self) -> Option<Duration> {
        (self.idle_timeout_secs > 0).then(|| Duration::from_secs(self.idle_timeout_secs))
    }
    pub fn max_lifetime(&self) -> Option<Duration> {
        (self.max_lifetime_secs > 0).then(|| Duration::from_secs(self.max_lifetime_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [database]
            url = "sqlite://data/pizza.db?mode=rwc"
            max_connections = 8
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.database.max_connections, 8);
        assert_eq!(cfg.database.min_connections, 1);
        assert_eq!(cfg.database.acquire_timeout(), Duration::from_secs(30));
        cfg.database.validate().expect("valid");
    }

    #[test]
    fn missing_sections_use_defaults() {
        let mut cfg = parse("").expect("parse empty");
        cfg.database.url = "sqlite::memory:".into();
        cfg.normalize_and_validate().expect("valid");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn explicit_url_is_kept() {
        let mut db = DatabaseConfig { url: "sqlite://explicit.db".into(), ..DatabaseConfig::default() };
        db.normalize_from_env();
        assert_eq!(db.url, "sqlite://explicit.db");
    }

    #[test]
    fn rejects_non_sqlite_url() {
        let db = DatabaseConfig { url: "postgres://localhost/pizza".into(), ..DatabaseConfig::default() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_empty_url() {
        let db = DatabaseConfig::default();
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_inverted_pool_bounds() {
        let db = DatabaseConfig { max_connections: 1, min_connections: 2, ..DatabaseConfig::in_memory() };
        assert!(db.validate().is_err());
        let db = DatabaseConfig { min_connections: 0, ..DatabaseConfig::in_memory() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_zero_port() {
        let mut cfg = AppConfig { server: ServerConfig { port: 0, ..ServerConfig::default() }, database: DatabaseConfig::in_memory() };
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn in_memory_is_valid() {
        DatabaseConfig::in_memory().validate().expect("in-memory config");
    }

    #[test]
    fn in_memory_connection_is_never_recycled() {
        let db = DatabaseConfig::in_memory();
        assert_eq!(db.idle_timeout(), None);
        assert_eq!(db.max_lifetime(), None);

        let file = DatabaseConfig::default();
        assert_eq!(file.idle_timeout(), Some(Duration::from_secs(600)));
        assert_eq!(file.max_lifetime(), Some(Duration::from_secs(3600)));
    }
}
