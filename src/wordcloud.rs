//! Word-frequency cloud layout.
//!
//! Words are counted, sized by frequency and placed on an Archimedean spiral
//! around the canvas center. Layout only uses an estimate of glyph widths, so
//! it is deterministic and does not need a font atlas.

use egui::{Color32, Pos2, Rect, Vec2, vec2};
use std::collections::HashMap;

const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "in", "into", "is",
    "it", "of", "on", "or", "so", "that", "the", "their", "this", "to", "was", "were", "with",
];

/// Average glyph advance as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.55;
const LINE_HEIGHT: f32 = 1.15;
const SPIRAL_STEP: f32 = 0.1;
const SPIRAL_GAP: f32 = 2.0;
/// Smallest font decrement between placement attempts.
const MIN_FONT_STEP: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct WordCloudSettings {
    pub width: f32,
    pub height: f32,
    pub background: Color32,
    pub max_font_size: f32,
    pub min_font_size: f32,
    pub font_step: f32,
    /// 0.0 ranks words only by order, 1.0 scales size linearly with frequency.
    pub relative_scaling: f32,
}

impl Default for WordCloudSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            background: Color32::BLACK,
            max_font_size: 100.0,
            min_font_size: 4.0,
            font_step: 2.0,
            relative_scaling: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub font_size: f32,
    /// Bounding box in canvas coordinates, origin top-left.
    pub rect: Rect,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordCloud {
    pub width: f32,
    pub height: f32,
    pub background: Color32,
    pub words: Vec<PlacedWord>,
}

/// Counts words case-insensitively, keeping the first-seen spelling.
///
/// Sorted by count descending, ties broken by first appearance.
pub fn word_frequencies(text: &str) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, (String, usize)> = HashMap::new();

    for token in text
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|t| t.trim_matches('\''))
        .filter(|t| t.chars().count() >= 2)
    {
        let key = token.to_lowercase();
        if STOPWORDS.contains(&key.as_str()) {
            continue;
        }
        counts
            .entry(key.clone())
            .and_modify(|(_, n)| *n += 1)
            .or_insert_with(|| {
                order.push(key);
                (token.to_owned(), 1)
            });
    }

    let mut words: Vec<(usize, String, usize)> = order
        .iter()
        .enumerate()
        .filter_map(|(i, key)| counts.remove(key).map(|(word, n)| (i, word, n)))
        .collect();
    words.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));
    words.into_iter().map(|(_, word, n)| (word, n)).collect()
}

/// Estimated bounding size of `text` at `font_size`.
pub fn text_extent(text: &str, font_size: f32) -> Vec2 {
    vec2(
        text.chars().count() as f32 * font_size * GLYPH_WIDTH,
        font_size * LINE_HEIGHT,
    )
}

/// Samples the viridis colormap at `t` in `[0, 1]`.
pub fn viridis(t: f32) -> Color32 {
    const STOPS: [(f32, [u8; 3]); 5] = [
        (0.0, [0x44, 0x01, 0x54]),
        (0.25, [0x3b, 0x52, 0x8b]),
        (0.5, [0x21, 0x91, 0x8c]),
        (0.75, [0x5e, 0xc9, 0x62]),
        (1.0, [0xfd, 0xe7, 0x25]),
    ];

    let t = t.clamp(0.0, 1.0);
    let mut lower = STOPS[0];
    for stop in STOPS {
        if stop.0 >= t {
            let span = stop.0 - lower.0;
            let f = if span > 0.0 { (t - lower.0) / span } else { 0.0 };
            let lerp = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * f).round() as u8;
            return Color32::from_rgb(
                lerp(lower.1[0], stop.1[0]),
                lerp(lower.1[1], stop.1[1]),
                lerp(lower.1[2], stop.1[2]),
            );
        }
        lower = stop;
    }
    Color32::from_rgb(lower.1[0], lower.1[1], lower.1[2])
}

impl WordCloud {
    /// Lays out `text` on a canvas described by `settings`.
    pub fn generate(text: &str, settings: &WordCloudSettings) -> Self {
        let frequencies = word_frequencies(text);
        let max_freq = frequencies.first().map(|(_, n)| *n).unwrap_or(1) as f32;
        let canvas = Rect::from_min_size(Pos2::ZERO, vec2(settings.width, settings.height));
        // NaN falls through `max` to the minimum as well.
        let font_step = settings.font_step.max(MIN_FONT_STEP);

        let mut words: Vec<PlacedWord> = Vec::with_capacity(frequencies.len());
        for (index, (word, count)) in frequencies.into_iter().enumerate() {
            let rs = settings.relative_scaling;
            let mut font_size =
                settings.max_font_size * (rs * (count as f32 / max_freq) + (1.0 - rs));

            while font_size >= settings.min_font_size {
                if let Some(rect) = find_position(&canvas, &words, text_extent(&word, font_size)) {
                    words.push(PlacedWord {
                        text: word.clone(),
                        font_size,
                        rect,
                        // Golden-ratio stepping spreads neighbours across the colormap.
                        color: viridis((index as f32 * 0.618_034).fract()),
                    });
                    break;
                }
                font_size -= font_step;
            }

            if font_size < settings.min_font_size {
                tracing::debug!(word = %word, "Word cloud has no room left for word");
            }
        }

        Self {
            width: settings.width,
            height: settings.height,
            background: settings.background,
            words,
        }
    }
}

fn find_position(canvas: &Rect, placed: &[PlacedWord], extent: Vec2) -> Option<Rect> {
    let center = canvas.center();
    let max_radius = canvas.size().length() / 2.0;

    let mut theta: f32 = 0.0;
    loop {
        let radius = SPIRAL_GAP * theta;
        if radius > max_radius {
            return None;
        }
        let at = center + vec2(theta.cos(), theta.sin()) * radius;
        let candidate = Rect::from_center_size(at, extent);
        if canvas.contains_rect(candidate) && placed.iter().all(|w| !w.rect.intersects(candidate)) {
            return Some(candidate);
        }
        theta += SPIRAL_STEP;
    }
}
