/// Centralized environment configuration.
/// All env vars and defaults are defined here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL. Required.
    pub database_url: String,

    /// Base URL the service is reachable at, for printing short links.
    /// Default: http://localhost:3000
    pub app_url: String,

    /// Address to bind the HTTP listener to.
    /// Default: 0.0.0.0:3000
    pub bind_addr: String,
}

impl Config {
    /// Build config from environment variables.
    /// Returns an error if required vars are missing.
    pub fn from_env() -> Result<Self, String> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set in .env")?;

        let app_url =
            std::env::var("APP_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Ok(Self {
            database_url,
            app_url,
            bind_addr,
        })
    }

    /// Returns the base URL without trailing slash, for building links.
    pub fn app_url_base(&self) -> &str {
        self.app_url.trim_end_matches('/')
    }

    /// Config for tests. Uses in-memory database URL.
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            app_url: "http://localhost:3000".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
        }
    }
}
