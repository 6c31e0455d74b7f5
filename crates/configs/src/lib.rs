use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cache: CacheConfig,
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
    pub url: String,
    /// Optional read-scoped URL for the restricted client used by page
    /// renderers. Falls back to `url` when absent.
    #[serde(default)]
    pub public_url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            public_url: None,
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

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_max_pages")]
    pub max_pages: u64,
    #[serde(default = "default_page_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_pages: default_max_pages(), ttl_secs: default_page_ttl() }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_max_pages() -> u64 { 64 }
fn default_page_ttl() -> u64 { 3600 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        // database URLs may come from the environment instead of TOML
        self.database.normalize_from_env();
        self.database.validate()?;
        self.cache.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
        if self.public_url.as_deref().map(|u| u.trim().is_empty()).unwrap_or(true) {
            if let Ok(url) = std::env::var("PUBLIC_DATABASE_URL") {
                self.public_url = Some(url);
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or via DATABASE_URL"));
        }
        validate_pg_scheme("database.url", &self.url)?;
        if let Some(pu) = &self.public_url {
            validate_pg_scheme("database.public_url", pu)?;
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
}

fn validate_pg_scheme(field: &str, url: &str) -> Result<()> {
    let lower = url.to_lowercase();
    if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
        return Err(anyhow!("{field} must start with postgresql:// or postgres://"));
    }
    Ok(())
}

impl CacheConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_pages == 0 {
            return Err(anyhow!("cache.max_pages must be >= 1"));
        }
        if self.ttl_secs == 0 {
            return Err(anyhow!("cache.ttl_secs must be >= 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "postgres://localhost/site".into();
        assert!(cfg.normalize_and_validate().is_ok());
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.cache.max_pages, 64);
    }

    #[test]
    fn empty_host_normalizes_to_localhost() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "postgres://localhost/site".into();
        cfg.server.host = "  ".into();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
    }

    #[test]
    fn rejects_non_postgres_url() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "mysql://localhost/site".into();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn rejects_bad_public_url() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "postgres://localhost/site".into();
        cfg.database.public_url = Some("sqlite://nope".into());
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn rejects_zero_cache_capacity() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "postgres://localhost/site".into();
        cfg.cache.max_pages = 0;
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn parses_toml_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [database]
            url = "postgres://site:site@db/site"
            max_connections = 5

            [cache]
            max_pages = 16
            ttl_secs = 60
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.database.max_connections, 5);
        assert_eq!(cfg.cache.ttl_secs, 60);
    }
}
