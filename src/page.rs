//! The page script: a fixed, linear sequence of surface calls.

use crate::config::PageConfig;
use crate::content;
use crate::fetch::ImageFetcher;
use crate::surface::{Page, PageRecorder, Surface};

/// Writes the whole page to `surface`, top to bottom.
///
/// The two image downloads run in order (banner first) and a failed one only
/// leaves a notice in its place.
pub fn render_page(surface: &mut dyn Surface, fetcher: &ImageFetcher, config: &PageConfig) {
    surface.title(content::PAGE_TITLE);

    if let Some(banner) = fetcher.load_image_from_url(&config.banner_url, surface) {
        surface.image(banner, content::BANNER_CAPTION);
    }

    surface.header("Biography");
    surface.text(content::BIOGRAPHY);
    surface.subheader("Career Highlights");
    surface.bar_chart(content::career_timeline());

    surface.header("Thesis Defense");
    surface.text(content::THESIS_SUMMARY);
    surface.text(content::THESIS_TOOL);
    if let Some(thesis) = fetcher.load_image_from_url(&config.thesis_url, surface) {
        surface.image(thesis, content::THESIS_CAPTION);
    }

    surface.header("Goals");
    surface.text(content::GOALS_INTRO);
    surface.markdown(content::GOALS);
    surface.pie_chart(content::goals_distribution());

    surface.header("Key Points from My Resume");
    surface.text(content::RESUME_INTRO);
    surface.markdown(content::RESUME_POINTS);
    surface.word_cloud(content::resume_word_cloud());

    surface.header("Let's Connect");
    surface.text(content::CLOSING);
    surface.markdown(content::CONNECT_LINK);
}

/// Builds the page once into a recorded [`Page`].
pub fn build_page(fetcher: &ImageFetcher, config: &PageConfig) -> Page {
    let mut recorder = PageRecorder::new();
    render_page(&mut recorder, fetcher, config);
    let page = recorder.into_page();
    tracing::info!(
        blocks = page.blocks().len(),
        notices = page.notices().len(),
        "Page built"
    );
    page
}
