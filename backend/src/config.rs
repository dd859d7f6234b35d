//! Command-line and environment configuration of the device settings server.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "backend", about = "Serves the device settings page and its REST endpoint")]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "DEVCONF_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "DEVCONF_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite file holding the persisted settings.
    #[arg(long, env = "DEVCONF_DB", default_value = "device_settings.sqlite")]
    pub database: PathBuf,

    /// Do not open a browser window on start.
    #[arg(long, env = "DEVCONF_NO_BROWSER")]
    pub no_browser: bool,
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_arguments() {
        let config = ServerConfig::try_parse_from(["backend"]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert!(!config.no_browser);
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "backend",
            "--host",
            "0.0.0.0",
            "--port",
            "80",
            "--database",
            "/tmp/settings.sqlite",
            "--no-browser",
        ])
        .unwrap();
        assert_eq!(config.url(), "http://0.0.0.0:80");
        assert_eq!(config.database, PathBuf::from("/tmp/settings.sqlite"));
        assert!(config.no_browser);
    }
}
