use crate::error::{Error, Result};

/// Connection parameters for the target database.
///
/// Built once at process start and passed explicitly to every component that
/// needs database access; nothing reads ambient environment state after this.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub dbname: String,
}

impl DbConfig {
    /// Read the five required parameters from the process environment.
    ///
    /// Absence of any variable is a fatal configuration error, not a
    /// retryable condition.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .ok_or_else(|| Error::Config(format!("missing environment variable '{key}'")))
        };

        let port_raw = get("PGPORT")?;
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| Error::Config(format!("invalid PGPORT '{port_raw}'")))?;

        Ok(Self {
            user: get("PGUSER")?,
            password: get("PGPASSWORD")?,
            host: get("PGHOST")?,
            port,
            dbname: get("PGDATABASE")?,
        })
    }
}
