// GUI configuration: where the HTTP server listens and which dashboard
// configuration file to load. The dashboard configuration itself lives in
// the engine crate.
pub mod theme;

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Optional JSON file replacing the embedded dashboard configuration.
    pub dashboard_config: Option<PathBuf>,
    /// Permissive CORS, handy when the page is served from another origin in development.
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dashboard_config: None,
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// Reads `DASHBOARD_HOST`, `DASHBOARD_PORT`, `DASHBOARD_CONFIG` and `DASHBOARD_CORS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("DASHBOARD_HOST").unwrap_or(defaults.host),
            port: lookup("DASHBOARD_PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.port),
            dashboard_config: lookup("DASHBOARD_CONFIG")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            enable_cors: lookup("DASHBOARD_CORS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.enable_cors),
        }
    }

    /// `host:port`, bracketing bare IPv6 hosts such as `::1`.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "127.0.0.1:8050");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("DASHBOARD_HOST", "0.0.0.0"),
            ("DASHBOARD_PORT", "9000"),
            ("DASHBOARD_CONFIG", "/etc/dashboard.json"),
            ("DASHBOARD_CORS", "false"),
        ]
        .into_iter()
        .collect();
        let config = ServerConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.dashboard_config, Some(PathBuf::from("/etc/dashboard.json")));
        assert!(!config.enable_cors);
    }

    #[test]
    fn test_bind_address_hosts() {
        let named = ServerConfig { host: "localhost".to_string(), port: 0, ..ServerConfig::default() };
        assert_eq!(named.bind_address(), "localhost:0");
        let ipv6 = ServerConfig { host: "::1".to_string(), port: 8050, ..ServerConfig::default() };
        assert_eq!(ipv6.bind_address(), "[::1]:8050");
        let bracketed = ServerConfig { host: "[::1]".to_string(), ..ipv6 };
        assert_eq!(bracketed.bind_address(), "[::1]:8050");
    }

    #[test]
    fn test_bad_port_keeps_default() {
        let config = ServerConfig::from_lookup(|k| (k == "DASHBOARD_PORT").then(|| "http".to_string()));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
