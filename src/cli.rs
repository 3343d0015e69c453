use anyhow::{Context as _, Result};
use bio_page::config::PageConfig;
use bio_page::fetch::ImageFetcher;
use bio_page::page;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bio_page", about = "Biography and thesis defense page")]
pub struct Cli {
    /// Path to a JSON config file. Defaults to the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the banner image URL
    #[arg(long, global = true)]
    pub banner_url: Option<String>,

    /// Override the thesis image URL
    #[arg(long, global = true)]
    pub thesis_url: Option<String>,

    /// Request timeout for image downloads, in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Build the page and print one line per block, without opening a window
    Outline,
    /// Download and decode a single image
    Fetch {
        /// Image URL
        url: String,
    },
}

impl Cli {
    /// Loads the config file and applies command-line overrides on top.
    pub fn page_config(&self) -> Result<PageConfig> {
        let mut config = match &self.config {
            Some(path) => PageConfig::load_from(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => PageConfig::load().context("Failed to load config")?,
        };

        if let Some(url) = &self.banner_url {
            config.banner_url.clone_from(url);
        }
        if let Some(url) = &self.thesis_url {
            config.thesis_url.clone_from(url);
        }
        if self.timeout_secs.is_some() {
            config.timeout_secs = self.timeout_secs;
        }
        Ok(config)
    }
}

#[expect(clippy::print_stdout)]
pub fn run_command(command: Commands, config: &PageConfig) -> Result<()> {
    let fetcher = ImageFetcher::new(config)?;

    match command {
        Commands::Outline => {
            let page = page::build_page(&fetcher, config);
            for block in page.blocks() {
                println!("{}", block.describe());
            }
        }
        Commands::Fetch { url } => {
            let image = fetcher.try_fetch(&url)?;
            println!("{url}: {}x{}", image.width(), image.height());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fetch_command() {
        let cli = Cli::parse_from(["bio_page", "fetch", "https://example.com/ok.png"]);
        assert_eq!(
            cli.command,
            Some(Commands::Fetch {
                url: "https://example.com/ok.png".to_owned()
            })
        );
    }

    #[test]
    fn test_no_command_means_gui() {
        let cli = Cli::parse_from(["bio_page"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_overrides_apply_on_top_of_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "timeout_secs": 3, "thesis_url": "https://a/t.png" }"#)
            .expect("write");

        let cli = Cli::parse_from([
            "bio_page".to_owned(),
            "--config".to_owned(),
            path.display().to_string(),
            "--banner-url".to_owned(),
            "https://a/b.png".to_owned(),
            "outline".to_owned(),
        ]);
        let config = cli.page_config().expect("config");

        assert_eq!(config.banner_url, "https://a/b.png");
        assert_eq!(config.thesis_url, "https://a/t.png");
        assert_eq!(config.timeout_secs, Some(3));
        assert_eq!(cli.command, Some(Commands::Outline));
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(image::RgbaImage::new(width, height))
            .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .expect("encode png");
        buf
    }

    #[test]
    fn test_fetch_command_fails_on_missing_image() {
        let server = httpmock::MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(httpmock::Method::GET).path("/missing.png");
            then.status(404);
        });

        let command = Commands::Fetch {
            url: server.url("/missing.png"),
        };
        let result = run_command(command, &PageConfig::default());

        mock.assert();
        let err = result.expect_err("404 should fail the command");
        assert!(err.to_string().contains("missing.png"), "{err}");
    }

    #[test]
    fn test_fetch_command_succeeds_on_png() {
        let server = httpmock::MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(httpmock::Method::GET).path("/ok.png");
            then.status(200).body(png_bytes(6, 3));
        });

        let command = Commands::Fetch {
            url: server.url("/ok.png"),
        };
        assert!(run_command(command, &PageConfig::default()).is_ok());
        mock.assert();
    }

    #[test]
    fn test_outline_command_survives_failed_images() {
        let server = httpmock::MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(httpmock::Method::GET);
            then.status(404);
        });

        let config = PageConfig {
            banner_url: server.url("/banner.jpg"),
            thesis_url: server.url("/thesis.jpg"),
            ..PageConfig::default()
        };
        assert!(run_command(Commands::Outline, &config).is_ok());
        mock.assert_hits(2);
    }
}
