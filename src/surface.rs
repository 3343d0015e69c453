//! The display surface the page script writes to.
//!
//! The page is written once against [`Surface`] and recorded by
//! [`PageRecorder`] into a [`Page`]; the egui app then draws that page every
//! frame.

use crate::charts::{BarChart, PieChart};
use crate::fetch::FetchedImage;
use crate::wordcloud::WordCloud;

pub trait Surface {
    fn title(&mut self, text: &str);
    fn header(&mut self, text: &str);
    fn subheader(&mut self, text: &str);
    fn text(&mut self, text: &str);
    fn markdown(&mut self, source: &str);
    fn image(&mut self, image: FetchedImage, caption: &str);
    fn bar_chart(&mut self, chart: BarChart);
    fn pie_chart(&mut self, chart: PieChart);
    fn word_cloud(&mut self, cloud: WordCloud);
    /// A visible, non-fatal error notice.
    fn error(&mut self, message: &str);
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Header(String),
    Subheader(String),
    Text(String),
    Markdown(String),
    Image { image: FetchedImage, caption: String },
    BarChart(BarChart),
    PieChart(PieChart),
    WordCloud(WordCloud),
    Error(String),
}

impl Block {
    /// Short one-line description, used by the `outline` command.
    pub fn describe(&self) -> String {
        match self {
            Self::Title(text) => format!("title      {text}"),
            Self::Header(text) => format!("header     {text}"),
            Self::Subheader(text) => format!("subheader  {text}"),
            Self::Text(text) => format!("text       {}", preview(text)),
            Self::Markdown(source) => format!("markdown   {}", preview(source)),
            Self::Image { image, caption } => {
                format!("image      {caption} ({}x{})", image.width(), image.height())
            }
            Self::BarChart(chart) => format!("bar chart  {} ({} bars)", chart.title, chart.bars.len()),
            Self::PieChart(chart) => {
                format!("pie chart  {} ({} slices)", chart.title, chart.slices.len())
            }
            Self::WordCloud(cloud) => format!("word cloud {} words", cloud.words.len()),
            Self::Error(message) => format!("error      {message}"),
        }
    }
}

fn preview(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    if first_line.chars().count() > 60 {
        let cut: String = first_line.chars().take(57).collect();
        format!("{cut}...")
    } else {
        first_line.to_owned()
    }
}

/// A fully built page. Immutable once recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    blocks: Vec<Block>,
}

impl Page {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The first title block, if any.
    pub fn title(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Title(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// All error notices, in order.
    pub fn notices(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Error(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Surface that records every call as a [`Block`].
#[derive(Debug, Default)]
pub struct PageRecorder {
    page: Page,
}

impl PageRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        self.page.blocks()
    }

    pub fn notices(&self) -> Vec<&str> {
        self.page.notices()
    }

    pub fn into_page(self) -> Page {
        self.page
    }

    fn push(&mut self, block: Block) {
        self.page.blocks.push(block);
    }
}

impl Surface for PageRecorder {
    fn title(&mut self, text: &str) {
        self.push(Block::Title(text.to_owned()));
    }

    fn header(&mut self, text: &str) {
        self.push(Block::Header(text.to_owned()));
    }

    fn subheader(&mut self, text: &str) {
        self.push(Block::Subheader(text.to_owned()));
    }

    fn text(&mut self, text: &str) {
        self.push(Block::Text(text.to_owned()));
    }

    fn markdown(&mut self, source: &str) {
        self.push(Block::Markdown(source.to_owned()));
    }

    fn image(&mut self, image: FetchedImage, caption: &str) {
        self.push(Block::Image {
            image,
            caption: caption.to_owned(),
        });
    }

    fn bar_chart(&mut self, chart: BarChart) {
        self.push(Block::BarChart(chart));
    }

    fn pie_chart(&mut self, chart: PieChart) {
        self.push(Block::PieChart(chart));
    }

    fn word_cloud(&mut self, cloud: WordCloud) {
        self.push(Block::WordCloud(cloud));
    }

    fn error(&mut self, message: &str) {
        self.push(Block::Error(message.to_owned()));
    }
}
