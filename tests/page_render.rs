//! The full page sequence, with the image server mocked.

use bio_page::config::PageConfig;
use bio_page::fetch::ImageFetcher;
use bio_page::markdown::{self, Span};
use bio_page::page;
use bio_page::surface::{Block, Page};
use httpmock::prelude::*;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(RgbaImage::new(width, height))
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("encode png");
    buf
}

fn build(config: &PageConfig) -> Page {
    let fetcher = ImageFetcher::new(config).expect("client");
    page::build_page(&fetcher, config)
}

fn headers(page: &Page) -> Vec<&str> {
    page.blocks()
        .iter()
        .filter_map(|b| match b {
            Block::Header(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn position(page: &Page, pred: impl Fn(&Block) -> bool) -> usize {
    page.blocks()
        .iter()
        .position(pred)
        .expect("block should be present")
}

#[test]
fn test_page_completes_when_both_images_fail() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(404);
    });

    let config = PageConfig {
        banner_url: server.url("/banner.jpg"),
        thesis_url: server.url("/thesis.jpg"),
        ..PageConfig::default()
    };
    let page = build(&config);

    assert_eq!(page.title(), Some("Brad's Biography and Thesis Defense"));
    assert_eq!(
        headers(&page),
        vec![
            "Biography",
            "Thesis Defense",
            "Goals",
            "Key Points from My Resume",
            "Let's Connect"
        ]
    );
    assert_eq!(page.notices().len(), 2);
    assert!(page.notices().iter().all(|n| n.contains("Error loading image")));

    let blocks = page.blocks();
    assert!(!blocks.iter().any(|b| matches!(b, Block::Image { .. })));
    assert!(blocks.iter().any(|b| matches!(b, Block::BarChart(_))));
    assert!(blocks.iter().any(|b| matches!(b, Block::PieChart(_))));
    assert!(blocks.iter().any(|b| matches!(b, Block::WordCloud(_))));
    assert!(matches!(
        blocks.last(),
        Some(Block::Markdown(source)) if source.contains("https://www.linkedin.com/in/bradolton/")
    ));
}

#[test]
fn test_page_closes_with_markdown_link() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(404);
    });

    let config = PageConfig {
        banner_url: server.url("/banner.jpg"),
        thesis_url: server.url("/thesis.jpg"),
        ..PageConfig::default()
    };
    let page = build(&config);

    let Some(Block::Markdown(source)) = page.blocks().last() else {
        panic!("page should close with a markdown block");
    };
    let links: Vec<(String, String)> = markdown::parse(source)
        .into_iter()
        .flat_map(|line| line.spans)
        .filter_map(|span| match span {
            Span::Link { text, url } => Some((text, url)),
            _ => None,
        })
        .collect();
    assert_eq!(
        links,
        vec![(
            "Connect with me on LinkedIn".to_owned(),
            "https://www.linkedin.com/in/bradolton/".to_owned()
        )]
    );
}

#[test]
fn test_images_land_in_their_sections() {
    let server = MockServer::start();
    let banner = server.mock(|when, then| {
        when.method(GET).path("/banner.png");
        then.status(200).body(png_bytes(40, 10));
    });
    let thesis = server.mock(|when, then| {
        when.method(GET).path("/thesis.png");
        then.status(200).body(png_bytes(12, 8));
    });

    let config = PageConfig {
        banner_url: server.url("/banner.png"),
        thesis_url: server.url("/thesis.png"),
        ..PageConfig::default()
    };
    let page = build(&config);

    banner.assert();
    thesis.assert();
    assert!(page.notices().is_empty());

    let banner_at = position(&page, |b| {
        matches!(b, Block::Image { caption, .. } if caption == "Cybersecurity and Privacy Concepts")
    });
    let biography_at = position(&page, |b| matches!(b, Block::Header(h) if h == "Biography"));
    let thesis_at = position(&page, |b| {
        matches!(b, Block::Image { caption, .. } if caption == "AI-Powered Cybersecurity Framework")
    });
    let goals_at = position(&page, |b| matches!(b, Block::Header(h) if h == "Goals"));

    assert_eq!(banner_at, 1, "banner follows the title");
    assert!(banner_at < biography_at);
    assert!(biography_at < thesis_at && thesis_at < goals_at);

    match page.blocks().get(thesis_at) {
        Some(Block::Image { image, .. }) => assert_eq!(image.size(), [12, 8]),
        other => panic!("expected thesis image, got {other:?}"),
    }
}

#[test]
fn test_failed_banner_notice_takes_banner_slot() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/banner.png");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET).path("/thesis.png");
        then.status(200).body(png_bytes(4, 4));
    });

    let config = PageConfig {
        banner_url: server.url("/banner.png"),
        thesis_url: server.url("/thesis.png"),
        ..PageConfig::default()
    };
    let page = build(&config);

    assert_eq!(page.notices().len(), 1);
    assert!(matches!(page.blocks().get(1), Some(Block::Error(_))));
    assert_eq!(
        page.blocks()
            .iter()
            .filter(|b| matches!(b, Block::Image { .. }))
            .count(),
        1
    );
}
