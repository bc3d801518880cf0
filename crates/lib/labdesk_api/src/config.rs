//! API server configuration.

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:5000").
    pub bind_addr: String,
    /// PostgreSQL connection URL for the experiment store.
    pub pg_connection_url: String,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable       | Default                             |
    /// |----------------|-------------------------------------|
    /// | `BIND_ADDR`    | `0.0.0.0:5000`                      |
    /// | `DATABASE_URL` | `postgres://localhost:5432/labdesk` |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".into()),
            pg_connection_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/labdesk".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_produces_usable_values() {
        let config = ApiConfig::from_env();
        assert!(config.bind_addr.contains(':'));
        assert!(!config.pg_connection_url.is_empty());
    }
}
