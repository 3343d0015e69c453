//! # Biography Page Entry Point
//!
//! ```text
//! main()
//!   │
//!   ├─> Initialize logging (tracing)
//!   ├─> Parse CLI arguments (clap) and load config
//!   │
//!   ├─> If command provided:
//!   │   └─> Run it and exit (`outline`, `fetch <url>`)
//!   │
//!   └─> Otherwise:
//!       ├─> Build the page once (both image downloads, in order)
//!       └─> Open the egui window and draw it
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod cli;

use bio_page::fetch::ImageFetcher;
use bio_page::theme::PageTheme;
use bio_page::{gui, logging, page};
use clap::Parser as _;

fn main() -> anyhow::Result<()> {
    if let Err(err) = logging::init_with_fallback() {
        report_logging_failure(&err);
    }

    let cli = cli::Cli::parse();
    let config = cli.page_config()?;

    if let Some(command) = cli.command {
        return cli::run_command(command, &config);
    }

    let fetcher = ImageFetcher::new(&config)?;
    let page = page::build_page(&fetcher, &config);
    gui::run(page, PageTheme::default())?;
    Ok(())
}

/// No subscriber is installed at this point, so stderr is the only sink left.
#[expect(clippy::print_stderr)]
fn report_logging_failure(err: &anyhow::Error) {
    eprintln!("Logging unavailable: {err:#}");
}
