use anyhow::Context;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    /// When set, CORS only admits this origin. Otherwise any origin is allowed.
    pub frontend_url: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "contacts.db".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", raw))?,
            None => 8080,
        };
        let frontend_url = lookup("FRONTEND_URL").filter(|url| !url.is_empty());
        Ok(Self {
            database_url,
            port,
            frontend_url,
        })
    }
}
