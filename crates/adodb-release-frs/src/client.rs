//! SourceForge Release API client
//!
//! One PUT per file sets its default download platforms. See
//! <https://sourceforge.net/p/forge/documentation/Using%20the%20Release%20API/>.

use std::path::Path;

use reqwest::{header, Client, Request, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::error::{FrsError, Result};
use crate::platforms::DefaultPlatform;

/// Base URL of the project's file listing
const API_BASE_URL: &str = "https://sourceforge.net/projects/adodb/files";

/// Environment variable holding the Release API key
const API_KEY_ENV: &str = "SOURCEFORGE_API_KEY";

/// Placeholder key so dry runs can compose URLs without credentials
const DRY_RUN_API_KEY: &str = "DRY-RUN";

/// Release API configuration
#[derive(Debug, Clone)]
pub struct FrsConfig {
    /// Release API key
    pub api_key: String,
}

impl FrsConfig {
    /// Load the API key from the environment or the credentials file.
    ///
    /// Looks for `SOURCEFORGE_API_KEY` first, then for an `api_key` entry
    /// in the `[sourceforge]` table of `~/.sourceforge/credentials.toml`.
    pub fn load() -> Result<Self> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                debug!("loaded API key from {}", API_KEY_ENV);
                return Ok(Self { api_key: key });
            }
        }

        if let Some(home_dir) = dirs::home_dir() {
            let credentials_path = home_dir.join(".sourceforge").join("credentials.toml");

            if let Some(key) = Self::read_credentials_file(&credentials_path)? {
                debug!("loaded API key from {}", credentials_path.display());
                return Ok(Self { api_key: key });
            }
        }

        Err(FrsError::Configuration(format!(
            "SourceForge API key not found, set {} or add it to ~/.sourceforge/credentials.toml",
            API_KEY_ENV
        )))
    }

    /// Config with a placeholder key, for dry runs without credentials
    pub fn for_dry_run() -> Self {
        Self {
            api_key: DRY_RUN_API_KEY.to_string(),
        }
    }

    fn read_credentials_file(path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            FrsError::Configuration(format!("failed to read {}: {}", path.display(), e))
        })?;

        let credentials: toml::Value = toml::from_str(&content).map_err(|e| {
            FrsError::Configuration(format!("failed to parse {}: {}", path.display(), e))
        })?;

        Ok(credentials
            .get("sourceforge")
            .and_then(|table| table.get("api_key"))
            .and_then(|value| value.as_str())
            .map(String::from))
    }
}

/// SourceForge Release API client
pub struct FrsClient {
    config: FrsConfig,
    client: Client,
}

/// Successful update response, trimmed to the part the tool reports
#[derive(Debug, Deserialize)]
struct UpdateResponse {
    result: UpdateResult,
}

#[derive(Debug, Deserialize)]
struct UpdateResult {
    x_sf: XsfInfo,
}

#[derive(Debug, Deserialize)]
struct XsfInfo {
    default: Vec<String>,
}

impl FrsClient {
    /// Create a new client
    pub fn new(config: FrsConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// URL of a file in the project's download area
    pub fn file_url(&self, target_dir: &str, file_name: &str) -> String {
        format!("{}/{}/{}", API_BASE_URL, target_dir, file_name)
    }

    /// Compose the update request for a file and return its final URL,
    /// query string included. Dry runs print this instead of sending.
    pub fn prepared_url(
        &self,
        target_dir: &str,
        file_name: &str,
        defaults: &[DefaultPlatform],
    ) -> Result<String> {
        let request = self.build_update(target_dir, file_name, defaults)?;
        Ok(request.url().to_string())
    }

    /// Set the default download platforms for an uploaded file.
    ///
    /// Returns the platform tags echoed back by the API.
    pub async fn update_file(
        &self,
        target_dir: &str,
        file_name: &str,
        defaults: &[DefaultPlatform],
    ) -> Result<Vec<String>> {
        let request = self.build_update(target_dir, file_name, defaults)?;
        debug!(url = %request.url(), "calling release API");

        let response = self.client.execute(request).await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(FrsError::Unauthorized);
        }
        // The API answers a plain 200 with a JSON body on success; anything
        // else is treated as a failed call.
        if status != StatusCode::OK {
            return Err(FrsError::ApiFailure {
                status: status.as_u16(),
            });
        }

        let body: UpdateResponse = response.json().await?;
        Ok(body.result.x_sf.default)
    }

    fn build_update(
        &self,
        target_dir: &str,
        file_name: &str,
        defaults: &[DefaultPlatform],
    ) -> Result<Request> {
        let mut query: Vec<(&str, &str)> = defaults
            .iter()
            .map(|platform| ("default[]", platform.as_str()))
            .collect();
        query.push(("api_key", self.config.api_key.as_str()));

        let request = self
            .client
            .put(self.file_url(target_dir, file_name))
            .header(header::ACCEPT, "application/json")
            .query(&query)
            .build()?;

        Ok(request)
    }
}
