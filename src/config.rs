//! Process configuration, read from the environment once at startup.
//!
//! The loaded values are passed explicitly into constructors; nothing in
//! the request pipeline reads the environment.

/// Default listen port; `PORT` or a CLI `--port` flag override it.
pub const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the Zyte extract API. `None` keeps the service up,
    /// but every render fails soft and `/news` serves empty lists.
    pub zyte_api_key: Option<String>,
    /// REST listen port.
    pub port: u16,
}

impl Config {
    /// Load from `ZYTE_API_KEY` and `PORT`.
    pub fn from_env() -> Self {
        let zyte_api_key = std::env::var("ZYTE_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { zyte_api_key, port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race a sibling.
    #[test]
    fn from_env_reads_key_and_port() {
        std::env::remove_var("ZYTE_API_KEY");
        std::env::remove_var("PORT");
        let config = Config::from_env();
        assert!(config.zyte_api_key.is_none());
        assert_eq!(config.port, DEFAULT_PORT);

        std::env::set_var("ZYTE_API_KEY", "secret");
        std::env::set_var("PORT", "8081");
        let config = Config::from_env();
        assert_eq!(config.zyte_api_key.as_deref(), Some("secret"));
        assert_eq!(config.port, 8081);

        std::env::set_var("PORT", "not-a-port");
        assert_eq!(Config::from_env().port, DEFAULT_PORT);

        std::env::remove_var("ZYTE_API_KEY");
        std::env::remove_var("PORT");
    }
}
