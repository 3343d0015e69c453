use crate::surface::{Block, Page};
use crate::theme::{self, PageTheme};
use eframe::egui;
use std::collections::HashMap;

pub mod markdown;
pub mod plots;

/// Draws a recorded [`Page`] every frame.
pub struct BioApp {
    page: Page,
    theme: PageTheme,
    /// Uploaded image textures, keyed by block index.
    textures: HashMap<usize, egui::TextureHandle>,
}

impl BioApp {
    /// Applies the page theme once and takes ownership of the built page.
    pub fn new(cc: &eframe::CreationContext<'_>, page: Page, theme: PageTheme) -> Self {
        theme::apply_page_theme(&cc.egui_ctx, &theme);
        Self {
            page,
            theme,
            textures: HashMap::new(),
        }
    }

    fn render_blocks(&mut self, ui: &mut egui::Ui) {
        let Self {
            page, textures, ..
        } = self;

        for (index, block) in page.blocks().iter().enumerate() {
            match block {
                Block::Title(text) => {
                    ui.add_space(theme::SPACING_LARGE);
                    ui.label(egui::RichText::new(text).size(32.0).strong());
                    ui.add_space(theme::SPACING_MEDIUM);
                }
                Block::Header(text) => {
                    ui.add_space(theme::SPACING_LARGE);
                    ui.label(egui::RichText::new(text).size(24.0).strong());
                    ui.separator();
                }
                Block::Subheader(text) => {
                    ui.add_space(theme::SPACING_SMALL);
                    ui.label(egui::RichText::new(text).size(18.0).strong());
                }
                Block::Text(text) => {
                    ui.label(egui::RichText::new(text).size(15.0));
                    ui.add_space(theme::SPACING_TINY);
                }
                Block::Markdown(source) => {
                    markdown::render(ui, source);
                    ui.add_space(theme::SPACING_TINY);
                }
                Block::Image { image, caption } => {
                    let texture = textures.entry(index).or_insert_with(|| {
                        tracing::debug!(index, "Uploading image texture");
                        ui.ctx().load_texture(
                            format!("page-image-{index}"),
                            egui::ColorImage::from_rgba_unmultiplied(image.size(), image.rgba()),
                            egui::TextureOptions::LINEAR,
                        )
                    });
                    render_image(ui, texture, caption);
                }
                Block::BarChart(chart) => {
                    plots::render_bar_chart(ui, index, chart);
                }
                Block::PieChart(chart) => {
                    plots::render_pie_chart(ui, chart);
                }
                Block::WordCloud(cloud) => {
                    plots::render_word_cloud(ui, cloud);
                }
                Block::Error(message) => {
                    render_notice(ui, message);
                }
            }
        }
    }
}

fn render_image(ui: &mut egui::Ui, texture: &egui::TextureHandle, caption: &str) {
    let [w, h] = texture.size();
    if w == 0 || h == 0 {
        return;
    }
    let width = ui.available_width();
    let height = width * h as f32 / w as f32;

    ui.add(
        egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
            .fit_to_exact_size(egui::vec2(width, height)),
    );
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(caption).small().weak());
    });
    ui.add_space(theme::SPACING_SMALL);
}

fn render_notice(ui: &mut egui::Ui, message: &str) {
    egui::Frame::new()
        .fill(egui::Color32::from_rgba_unmultiplied(180, 40, 40, 90))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(message).color(theme::ERROR_COLOR));
        });
    ui.add_space(theme::SPACING_SMALL);
}

impl eframe::App for BioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                theme::paint_gradient(ui.painter(), ui.max_rect(), &self.theme);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let available = ui.available_width();
                        let width = (available - 2.0 * theme::PANEL_SIDE)
                            .min(theme::CONTENT_MAX_WIDTH)
                            .max(200.0);
                        let side = ((available - width) / 2.0).max(0.0);

                        ui.horizontal(|ui| {
                            ui.add_space(side);
                            ui.vertical(|ui| {
                                ui.set_width(width);
                                self.render_blocks(ui);
                                ui.add_space(theme::SPACING_LARGE);
                            });
                        });
                    });
            });
    }
}

/// Opens the native window and blocks until it is closed.
///
/// # Errors
///
/// Returns error if the window or graphics context cannot be created.
pub fn run(page: Page, theme: PageTheme) -> crate::error::Result<()> {
    let title = page.title().unwrap_or("Biography").to_owned();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    tracing::info!("Opening window");
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(BioApp::new(cc, page, theme)))),
    )?;
    Ok(())
}
