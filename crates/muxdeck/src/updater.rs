//! Update checking
//!
//! Fetches a JSON manifest (`{"version": "x.y.z", "notes": "..."}`) and
//! compares it with the running version. Failures are turned into a user
//! facing message by [`format_updater_error`].

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum UpdaterError {
    #[error("network error: {0}")]
    Network(String),
    #[error("update endpoint returned HTTP {0}")]
    Status(u16),
    #[error("failed to parse update manifest: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    UpToDate { current: String },
    Available { latest: String, notes: Option<String> },
}

#[async_trait]
pub trait UpdateChecker: Send + Sync {
    async fn check(&self) -> Result<UpdateStatus, UpdaterError>;
}

#[derive(Debug, Deserialize)]
struct Manifest {
    version: String,
    #[serde(default)]
    notes: Option<String>,
}

/// Checks a manifest served over HTTP
pub struct HttpUpdateChecker {
    endpoint: String,
    current: String,
    client: reqwest::Client,
}

impl HttpUpdateChecker {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, UpdaterError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("muxdeck/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| UpdaterError::Network(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into(),
            current: env!("CARGO_PKG_VERSION").to_string(),
            client,
        })
    }
}

#[async_trait]
impl UpdateChecker for HttpUpdateChecker {
    async fn check(&self) -> Result<UpdateStatus, UpdaterError> {
        log::debug!("Checking for updates at {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| UpdaterError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpdaterError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| UpdaterError::Network(e.to_string()))?;
        let manifest: Manifest =
            serde_json::from_str(&body).map_err(|e| UpdaterError::Parse(e.to_string()))?;

        Ok(compare_versions(&self.current, manifest))
    }
}

fn compare_versions(current: &str, manifest: Manifest) -> UpdateStatus {
    if version_key(&manifest.version) > version_key(current) {
        UpdateStatus::Available {
            latest: manifest.version,
            notes: manifest.notes,
        }
    } else {
        UpdateStatus::UpToDate {
            current: current.to_string(),
        }
    }
}

/// Numeric components of `v1.2.3-beta`; non-numeric suffixes are ignored
///
/// Trailing zero components are dropped so `1.0` and `1.0.0` compare equal.
fn version_key(version: &str) -> Vec<u64> {
    let mut key: Vec<u64> = version
        .trim()
        .trim_start_matches('v')
        .split('.')
        .map(|part| {
            part.chars()
                .take_while(char::is_ascii_digit)
                .collect::<String>()
                .parse()
                .unwrap_or(0)
        })
        .collect();
    while key.last() == Some(&0) {
        key.pop();
    }
    key
}

/// User-facing text for a failed update check
///
/// The raw message is classified by substring and kept after the summary.
pub fn format_updater_error(message: &str) -> String {
    let raw = message.trim();
    if raw.is_empty() {
        return "Update check failed for an unknown reason.".to_string();
    }

    let lower = raw.to_lowercase();
    let summary = if ["network", "unreachable", "connect", "timed out", "dns"]
        .iter()
        .any(|needle| lower.contains(needle))
    {
        "Unable to reach the update endpoint."
    } else if lower.contains("signature") {
        "The update signature could not be verified."
    } else if ["parse", "json", "manifest"]
        .iter()
        .any(|needle| lower.contains(needle))
    {
        "The update manifest could not be read."
    } else {
        "Update check failed."
    };

    format!("{} ({})", summary, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(version: &str) -> Manifest {
        Manifest {
            version: version.to_string(),
            notes: Some("Faster panes".to_string()),
        }
    }

    #[test]
    fn test_network_error_keeps_raw_message() {
        let text = format_updater_error("network unreachable");
        assert!(text.contains("Unable to reach the update endpoint."));
        assert!(text.contains("network unreachable"));
    }

    #[test]
    fn test_error_classes_are_distinct() {
        let network = format_updater_error("connection refused");
        let signature = format_updater_error("bad signature");
        let parse = format_updater_error("failed to parse update manifest: eof");
        let other = format_updater_error("HTTP 500");

        assert!(network.starts_with("Unable to reach"));
        assert!(signature.starts_with("The update signature"));
        assert!(parse.starts_with("The update manifest"));
        assert!(other.starts_with("Update check failed."));
        assert!(other.contains("HTTP 500"));
    }

    #[test]
    fn test_empty_message_falls_back() {
        assert_eq!(
            format_updater_error("   "),
            "Update check failed for an unknown reason."
        );
    }

    #[test]
    fn test_typed_errors_classify() {
        let text = format_updater_error(&UpdaterError::Network("dns".to_string()).to_string());
        assert!(text.starts_with("Unable to reach"));
        let text = format_updater_error(&UpdaterError::Parse("eof".to_string()).to_string());
        assert!(text.starts_with("The update manifest"));
    }

    #[test]
    fn test_trailing_zero_components_are_not_newer() {
        assert_eq!(
            compare_versions("0.1.0", manifest("0.1.0.0")),
            UpdateStatus::UpToDate {
                current: "0.1.0".to_string()
            }
        );
        assert_eq!(
            compare_versions("1.0.0", manifest("1.0")),
            UpdateStatus::UpToDate {
                current: "1.0.0".to_string()
            }
        );
        assert!(matches!(
            compare_versions("0.1.0", manifest("0.1.0.1")),
            UpdateStatus::Available { .. }
        ));
    }

    #[test]
    fn test_compare_versions() {
        assert_eq!(
            compare_versions("0.1.0", manifest("v0.2.0")),
            UpdateStatus::Available {
                latest: "v0.2.0".to_string(),
                notes: Some("Faster panes".to_string()),
            }
        );
        assert_eq!(
            compare_versions("0.10.0", manifest("0.9.9")),
            UpdateStatus::UpToDate {
                current: "0.10.0".to_string()
            }
        );
        assert_eq!(
            compare_versions("1.0.0", manifest("1.0.0-beta")),
            UpdateStatus::UpToDate {
                current: "1.0.0".to_string()
            }
        );
    }
}
