use crate::error::{PageError, Result, ResultExt as _};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BANNER_URL: &str = "https://media.istockphoto.com/id/2150426978/photo/cybersecurity-and-privacy-concepts-to-protect-data-lock-icon-and-internet-network.jpg";
pub const DEFAULT_THESIS_URL: &str = "https://cdn.pixabay.com/photo/2023/05/08/09/57/ai-generated-hacker-safety-computer-8002660_960_720.jpg";

/// Settings that shape how the page is built.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PageConfig {
    /// Image shown under the page title
    pub banner_url: String,
    /// Image shown at the end of the thesis section
    pub thesis_url: String,
    /// Request timeout for image downloads. `None` keeps the client default.
    pub timeout_secs: Option<u64>,
    /// Optional `User-Agent` header for image downloads
    pub user_agent: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            banner_url: DEFAULT_BANNER_URL.to_owned(),
            thesis_url: DEFAULT_THESIS_URL.to_owned(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl PageConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Loads the config from the default location, falling back to defaults
    /// when no file exists.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON, or
    /// leaves an image URL empty.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns error if the parent directory cannot be created or the file
    /// cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.banner_url.trim().is_empty() {
            return Err(PageError::Config("banner_url is empty".to_owned()));
        }
        if self.thesis_url.trim().is_empty() {
            return Err(PageError::Config("thesis_url is empty".to_owned()));
        }
        Ok(())
    }
}

/// `<config_dir>/bio_page/config.json`, if the platform has a config dir.
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bio_page").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_original_images() {
        let config = PageConfig::default();
        assert_eq!(config.banner_url, DEFAULT_BANNER_URL);
        assert_eq!(config.thesis_url, DEFAULT_THESIS_URL);
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PageConfig =
            serde_json::from_str(r#"{ "timeout_secs": 5 }"#).expect("valid json");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.banner_url, DEFAULT_BANNER_URL);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.json");
        let config = PageConfig {
            user_agent: Some("bio-page-test".to_owned()),
            ..PageConfig::default()
        };

        config.save_to(&path).expect("save");
        let loaded = PageConfig::load_from(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_empty_url_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "banner_url": "  " }"#).expect("write");

        let err = PageConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, PageError::Config(_)));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").expect("write");

        assert!(matches!(
            PageConfig::load_from(&path),
            Err(PageError::Config(_))
        ));
    }

    #[test]
    fn test_save_reports_blocked_config_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("bio_page");
        std::fs::write(&blocker, "not a directory").expect("write");

        let err = PageConfig::default()
            .save_to(&blocker.join("config.json"))
            .unwrap_err();
        assert!(matches!(err, PageError::Other(_)));
        assert!(err.to_string().starts_with("Failed to create config directory"));
    }
}
