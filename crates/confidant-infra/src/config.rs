//! Service configuration loader for Confidant.
//!
//! Reads `confidant.toml` and deserializes it into [`ServiceConfig`]. Falls
//! back to defaults when the file is missing or malformed.

use std::path::Path;

use confidant_types::config::ServiceConfig;

/// File name looked up in the data directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "confidant.toml";

/// Load service configuration from `path`.
///
/// - If the file does not exist, returns [`ServiceConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_service_config(path: &Path) -> ServiceConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return ServiceConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ServiceConfig::default();
        }
    };

    match toml::from_str::<ServiceConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ServiceConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_service_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_service_config(&tmp.path().join(CONFIG_FILE_NAME)).await;
        assert_eq!(config, ServiceConfig::default());
    }

    #[tokio::test]
    async fn load_service_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        tokio::fs::write(
            &path,
            r#"
model = "gpt-4o"
base_url = "http://localhost:8080/v1"
temperature = 0.6
"#,
        )
        .await
        .unwrap();

        let config = load_service_config(&path).await;
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.temperature, Some(0.6));
        assert!(config.max_tokens.is_none());
    }

    #[tokio::test]
    async fn load_service_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_service_config(&path).await;
        assert_eq!(config, ServiceConfig::default());
    }
}
