//! Configuration types for tjpb-dl

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Crawler configuration (listing page, output directory, HTTP settings)
///
/// All fields have sensible defaults targeting the live TJPB transparency
/// portal; tests point `listing_url` at a mock server and `download_dir`
/// at a temporary directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// URL of the transparency page listing payroll PDFs by period
    /// (default: the live TJPB payroll listing)
    #[serde(default = "default_listing_url")]
    pub listing_url: String,

    /// Directory where downloaded PDFs are written (default: ".")
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,

    /// User-Agent header sent with every request (default: "tjpb-dl")
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Timeout applied to each HTTP request (default: 30 seconds)
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listing_url: default_listing_url(),
            download_dir: default_download_dir(),
            user_agent: default_user_agent(),
            timeout: default_timeout(),
        }
    }
}

fn default_listing_url() -> String {
    "https://www.tjpb.jus.br/transparencia/gestao-de-pessoas/folha-de-pagamento-de-pessoal"
        .to_string()
}

fn default_download_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_user_agent() -> String {
    "tjpb-dl".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_the_live_portal() {
        let config = Config::default();
        assert!(config.listing_url.starts_with("https://www.tjpb.jus.br/"));
        assert_eq!(config.download_dir, PathBuf::from("."));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.user_agent, "tjpb-dl");
        assert_eq!(config.download_dir, PathBuf::from("."));
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let config: Config = serde_json::from_str(
            r#"{"listing_url": "http://localhost:8080/folha", "download_dir": "/tmp/pdfs"}"#,
        )
        .unwrap();
        assert_eq!(config.listing_url, "http://localhost:8080/folha");
        assert_eq!(config.download_dir, PathBuf::from("/tmp/pdfs"));
        assert_eq!(config.timeout, Duration::from_secs(30), "unset fields keep defaults");
    }
}
