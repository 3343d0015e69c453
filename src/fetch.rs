//! Remote image acquisition with graceful fallback.
//!
//! [`ImageFetcher::load_image_from_url`] never fails: when the download or
//! decode goes wrong it writes a single notice to the surface and returns
//! `None`, so the rest of the page keeps rendering.

use crate::config::PageConfig;
use crate::error::{PageError, Result};
use crate::surface::Surface;
use image::RgbaImage;

/// A decoded image, ready to be uploaded as a texture.
#[derive(Clone, PartialEq, Eq)]
pub struct FetchedImage {
    pixels: RgbaImage,
}

impl std::fmt::Debug for FetchedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchedImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl FetchedImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width() as usize, self.height() as usize]
    }

    /// Unmultiplied RGBA bytes, row-major.
    pub fn rgba(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl From<image::DynamicImage> for FetchedImage {
    fn from(image: image::DynamicImage) -> Self {
        Self {
            pixels: image.into_rgba8(),
        }
    }
}

/// Blocking image downloader. No retries, no caching.
pub struct ImageFetcher {
    client: reqwest::blocking::Client,
}

impl ImageFetcher {
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed (for example
    /// when the TLS backend fails to initialize).
    pub fn new(config: &PageConfig) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let client = builder
            .build()
            .map_err(|e| PageError::Other(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Downloads and decodes `url`, reporting any failure to `surface`.
    ///
    /// Exactly one error notice is written when `None` is returned; nothing
    /// is written on success.
    pub fn load_image_from_url(&self, url: &str, surface: &mut dyn Surface) -> Option<FetchedImage> {
        match self.try_fetch(url) {
            Ok(image) => {
                tracing::info!(
                    url,
                    width = image.width(),
                    height = image.height(),
                    "Image loaded"
                );
                Some(image)
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "Image unavailable");
                surface.error(&format!("Error loading image: {err}"));
                None
            }
        }
    }

    /// Downloads and decodes `url`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::ImageUnavailable`] for network failures, non-2xx
    /// statuses, unreadable bodies and undecodable bytes alike.
    pub fn try_fetch(&self, url: &str) -> Result<FetchedImage> {
        let unavailable = |reason: String| PageError::ImageUnavailable {
            url: url.to_owned(),
            reason,
        };

        tracing::debug!(url, "Requesting image");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| unavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| unavailable(e.to_string()))?;
        let body = response.bytes().map_err(|e| unavailable(e.to_string()))?;

        let decoded = image::load_from_memory(&body)
            .map_err(|e| unavailable(format!("Could not decode image: {e}")))?;
        Ok(decoded.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dynamic_image_keeps_dimensions() {
        let dynamic = image::DynamicImage::new_rgb8(3, 7);
        let fetched = FetchedImage::from(dynamic);
        assert_eq!(fetched.size(), [3, 7]);
        assert_eq!(fetched.rgba().len(), 3 * 7 * 4);
    }

    #[test]
    fn test_fetcher_builds_with_timeout_and_agent() {
        let config = PageConfig {
            timeout_secs: Some(2),
            user_agent: Some("bio-page".to_owned()),
            ..PageConfig::default()
        };
        assert!(ImageFetcher::new(&config).is_ok());
    }
}
