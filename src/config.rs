//! Server configuration read from environment variables.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("Invalid OPEN_OFFICIATING value: {0} (expected true or false)")]
    InvalidFlag(String),
    #[error("Invalid user id in TOURNAMENT_OFFICIALS: {0}")]
    InvalidUserId(String),
}

/// Web server settings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    /// Bind host. Defaults to 0.0.0.0 so the app is reachable on a VPS.
    pub host: String,
    pub port: u16,
    /// Let any caller begin tournaments and record results instead of assigned officials only.
    pub open_officiating: bool,
    /// Users holding the tournament-official role: they may appoint officials to any tournament.
    pub official_roles: Vec<Uuid>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open_officiating: false,
            official_roles: Vec::new(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    /// Read HOST, PORT, OPEN_OFFICIATING and TOURNAMENT_OFFICIALS (comma-separated user ids).
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(default_host);
        let port = match lookup("PORT") {
            Some(p) => p
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(p.clone()))?,
            None => default_port(),
        };
        let open_officiating = match lookup("OPEN_OFFICIATING") {
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => return Err(ConfigError::InvalidFlag(v)),
            },
            None => false,
        };
        let official_roles = lookup("TOURNAMENT_OFFICIALS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| id.parse::<Uuid>().map_err(|_| ConfigError::InvalidUserId(id.to_string())))
            .collect::<Result<Vec<Uuid>, _>>()?;
        Ok(Self {
            host,
            port,
            open_officiating,
            official_roles,
        })
    }
}
