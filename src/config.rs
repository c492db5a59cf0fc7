use std::env;
use anyhow::{Result, bail};

/// Which of the two mock endpoint sets this process serves.
///
/// The variant owns every literal that differs between the two: the
/// `/api/resource` message text and whether `/api/test` is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Server,
    Client,
}

impl Variant {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "server" => Ok(Variant::Server),
            "client" => Ok(Variant::Client),
            other => bail!("MOCK_VARIANT must be 'server' or 'client', got '{}'", other),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Server => "server",
            Variant::Client => "client",
        }
    }

    /// Fixed message returned by `GET /api/resource`.
    pub fn resource_message(self) -> &'static str {
        match self {
            Variant::Server => "This is mock data!",
            Variant::Client => "This is mock resource data!",
        }
    }

    /// The client variant additionally exposes `GET /api/test`.
    pub fn serves_test_route(self) -> bool {
        matches!(self, Variant::Client)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
    pub variant: Variant,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let service_port = match env::var("SERVICE_PORT") {
            Ok(raw) => match raw.parse::<u16>() {
                Ok(port) => port,
                Err(_) => bail!("SERVICE_PORT must be a valid port number (0-65535), got '{}'", raw),
            },
            Err(_) => 3000,
        };

        let variant = match env::var("MOCK_VARIANT") {
            Ok(raw) => Variant::parse(&raw)?,
            Err(_) => Variant::Server,
        };

        Ok(Config {
            service_host,
            service_port,
            variant,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Variant: {}", self.variant.name());
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env_vars() {
        unsafe {
            env::remove_var("SERVICE_HOST");
            env::remove_var("SERVICE_PORT");
            env::remove_var("MOCK_VARIANT");
        }
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_HOST", "127.0.0.1");
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("MOCK_VARIANT", "client");
        }

        let config = Config::from_env().unwrap();
        clear_env_vars();

        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.variant, Variant::Client);
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.service_port, 3000);
        assert_eq!(config.variant, Variant::Server);
    }

    #[test]
    fn test_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        clear_env_vars();

        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        clear_env_vars();

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_variant() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        unsafe {
            env::set_var("MOCK_VARIANT", "staging");
        }

        let result = Config::from_env();
        clear_env_vars();

        let error = result.unwrap_err();
        assert!(error.to_string().contains("MOCK_VARIANT"));
    }

    #[test]
    fn test_variant_literals() {
        assert_eq!(Variant::Server.resource_message(), "This is mock data!");
        assert_eq!(Variant::Client.resource_message(), "This is mock resource data!");
        assert!(!Variant::Server.serves_test_route());
        assert!(Variant::Client.serves_test_route());
    }
}
