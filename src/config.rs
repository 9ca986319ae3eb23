use anyhow::{Context, Result};
use std::net::{SocketAddr, ToSocketAddrs};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    pub port: u16,

    // Static export
    pub export_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(v) => v
                    .parse()
                    .with_context(|| format!("PORT must be a port number, got '{}'", v))?,
                Err(_) => 8080,
            },

            // Static export
            export_dir: std::env::var("EXPORT_DIR").unwrap_or_else(|_| "dist".to_string()),
        })
    }

    /// Socket address the server listens on.
    ///
    /// `BIND_ADDRESS` may be an IPv4 or IPv6 literal or a host name; names
    /// resolve to their first address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        (self.bind_address.as_str(), self.port)
            .to_socket_addrs()
            .with_context(|| format!("Invalid BIND_ADDRESS '{}'", self.bind_address))?
            .next()
            .with_context(|| {
                format!("BIND_ADDRESS '{}' resolved to no address", self.bind_address)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("BIND_ADDRESS");
        std::env::remove_var("PORT");
        std::env::remove_var("EXPORT_DIR");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.export_dir, "dist");
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("BIND_ADDRESS", "127.0.0.1");
        std::env::set_var("PORT", "3000");
        std::env::set_var("EXPORT_DIR", "public");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.port, 3000);
        assert_eq!(config.export_dir, "public");
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_error() {
        clear_env();
        std::env::set_var("PORT", "eighty");

        let result = Config::from_env();
        clear_env();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    fn config_with_bind(bind_address: &str) -> Config {
        Config {
            bind_address: bind_address.to_string(),
            port: 8080,
            export_dir: "dist".to_string(),
        }
    }

    #[test]
    fn test_socket_addr_ipv4() {
        let addr = config_with_bind("127.0.0.1").socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_socket_addr_ipv6_unspecified() {
        let addr = config_with_bind("::").socket_addr().unwrap();
        assert!(addr.is_ipv6());
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.to_string(), "[::]:8080");
    }

    #[test]
    fn test_socket_addr_ipv6_loopback() {
        let addr = config_with_bind("::1").socket_addr().unwrap();
        assert_eq!(addr.to_string(), "[::1]:8080");
    }

    #[test]
    fn test_socket_addr_resolves_localhost() {
        let addr = config_with_bind("localhost").socket_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_invalid_bind_address_is_error() {
        let err = config_with_bind("not an address").socket_addr().unwrap_err();
        assert!(err.to_string().contains("BIND_ADDRESS"));
    }
}
