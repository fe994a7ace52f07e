/// Environment-based configuration for the ingest endpoint.
///
/// These are purely helpers; the server and sink types remain decoupled
/// from environment access.

/// TCP port the endpoint binds to.
pub const PORT_ENV: &str = "PORT";

/// Port used when [`PORT_ENV`] is unset or empty.
pub const DEFAULT_PORT: u16 = 5005;

/// Error type returned when reading configuration from the environment.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid {PORT_ENV} value {0:?}: expected a TCP port number")]
    InvalidPort(String),
}

/// Runtime configuration of the service.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config { port: DEFAULT_PORT }
    }
}

impl Config {
    /// Build a config from the process environment.
    ///
    /// An unset or empty `PORT` falls back to [`DEFAULT_PORT`]; a value
    /// that is not a valid port number is a hard error, surfaced to the
    /// caller so startup can fail loudly instead of binding elsewhere.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var(PORT_ENV).ok().as_deref())?;
        Ok(Config { port })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(s) if s.is_empty() => Ok(DEFAULT_PORT),
        Some(s) => s
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_port_defaults() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn empty_port_defaults() {
        assert_eq!(parse_port(Some("")).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn explicit_port_is_used() {
        assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    }

    #[test]
    fn garbage_port_is_an_error() {
        assert!(matches!(
            parse_port(Some("not-a-port")),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            parse_port(Some("70000")),
            Err(ConfigError::InvalidPort(_))
        ));
    }
}
