//! # Biography & Thesis Defense Page
//!
//! A single-window portfolio page: text sections, a career timeline bar
//! chart, a goals pie chart, a resume word cloud, two downloaded images and a
//! link.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bio_page::{config::PageConfig, fetch::ImageFetcher, page};
//!
//! # fn example() -> bio_page::error::Result<()> {
//! let config = PageConfig::default();
//! let fetcher = ImageFetcher::new(&config)?;
//! let page = page::build_page(&fetcher, &config);
//!
//! for notice in page.notices() {
//!     println!("{notice}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`fetch`]: image download with fallback to a visible notice
//! - [`surface`]: the display surface trait and the page recorder
//! - [`page`]: the fixed page sequence, [`content`]: its literal text and data
//! - [`charts`], [`wordcloud`], [`markdown`]: inputs for the visual blocks
//! - [`gui`]: the egui app that draws a built page
//! - [`config`], [`error`], [`logging`], [`theme`]: ambient plumbing

#![warn(clippy::all, rust_2018_idioms)]

pub mod charts;
pub mod config;
pub mod content;
pub mod error;
pub mod fetch;
pub mod gui;
pub mod logging;
pub mod markdown;
pub mod page;
pub mod surface;
pub mod theme;
pub mod wordcloud;
