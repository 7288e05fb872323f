//! Server configuration loaded from environment variables.

use core_config::{ConfigError, FromEnv, env_or_default, env_parse};
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{GrpcError, GrpcResult};

/// Configuration for a gRPC server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    pub host: String,
    /// Port to listen on (default: 8080)
    pub port: u16,
    /// Enable Zstd compression (default: true)
    pub enable_compression: bool,
    /// Upper bound for a single request, in seconds (default: 30)
    pub request_timeout_secs: u64,
    /// Maximum message size for decoding and encoding (default: 4MB)
    pub max_message_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_compression: true,
            request_timeout_secs: 30,
            max_message_size: 4 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_compression(mut self, enable: bool) -> Self {
        self.enable_compression = enable;
        self
    }

    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolve the socket address to bind to.
    ///
    /// `host` may be an IP literal or a name such as `localhost`; the first
    /// resolved address is used.
    pub async fn socket_addr(&self) -> GrpcResult<SocketAddr> {
        let addr = self.addr_string();
        let resolved = tokio::net::lookup_host(addr.as_str())
            .await
            .and_then(|mut addrs| {
                addrs.next().ok_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::NotFound, "no address resolved")
                })
            });

        resolved.map_err(|source| GrpcError::InvalidAddress { addr, source })
    }

    /// Get the address string (for logging).
    pub fn addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads:
    /// - `SVC_LISTEN_ADDR` (default: 0.0.0.0)
    /// - `SVC_LISTEN_PORT` (default: 8080)
    /// - `GRPC_COMPRESSION` (default: true)
    /// - `GRPC_REQUEST_TIMEOUT_SECS` (default: 30)
    /// - `GRPC_MAX_MESSAGE_SIZE` (default: 4194304)
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("SVC_LISTEN_ADDR", "");
        let host = if host.is_empty() {
            "0.0.0.0".to_string()
        } else {
            host
        };

        Ok(Self {
            host,
            port: env_parse("SVC_LISTEN_PORT", "8080")?,
            enable_compression: env_parse("GRPC_COMPRESSION", "true")?,
            request_timeout_secs: env_parse("GRPC_REQUEST_TIMEOUT_SECS", "30")?,
            max_message_size: env_parse("GRPC_MAX_MESSAGE_SIZE", "4194304")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.enable_compression);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ServerConfig::new()
            .with_host("127.0.0.1")
            .with_port(50051)
            .with_compression(false)
            .with_request_timeout(5);

        assert_eq!(config.addr_string(), "127.0.0.1:50051");
        assert!(!config.enable_compression);
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[tokio::test]
    async fn test_socket_addr_from_ip_literal() {
        let config = ServerConfig::new().with_host("127.0.0.1").with_port(50051);
        let addr = config.socket_addr().await.unwrap();
        assert_eq!(addr, "127.0.0.1:50051".parse::<SocketAddr>().unwrap());
    }

    #[tokio::test]
    async fn test_socket_addr_resolves_hostname() {
        let config = ServerConfig::new().with_host("localhost").with_port(9090);
        let addr = config.socket_addr().await.unwrap();
        assert!(addr.ip().is_loopback(), "{addr}");
        assert_eq!(addr.port(), 9090);
    }

    #[tokio::test]
    async fn test_invalid_socket_addr() {
        let config = ServerConfig::new().with_host("not a host");
        assert!(matches!(
            config.socket_addr().await,
            Err(GrpcError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset(
            [
                "SVC_LISTEN_ADDR",
                "SVC_LISTEN_PORT",
                "GRPC_COMPRESSION",
                "GRPC_REQUEST_TIMEOUT_SECS",
                "GRPC_MAX_MESSAGE_SIZE",
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.addr_string(), "0.0.0.0:8080");
                assert!(config.enable_compression);
            },
        );
    }

    #[test]
    fn test_from_env_empty_listen_addr_binds_all_interfaces() {
        temp_env::with_vars(
            [("SVC_LISTEN_ADDR", Some("")), ("SVC_LISTEN_PORT", Some("9000"))],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.addr_string(), "0.0.0.0:9000");
            },
        );
    }

    #[test]
    fn test_from_env_invalid_port() {
        temp_env::with_var("SVC_LISTEN_PORT", Some("99999"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("SVC_LISTEN_PORT"));
        });
    }
}
