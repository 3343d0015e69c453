use egui::{Color32, CornerRadius, Margin, Stroke};

pub const NAVY: Color32 = Color32::from_rgb(0x2c, 0x3e, 0x50);
pub const TEAL: Color32 = Color32::from_rgb(0x4c, 0xa1, 0xaf);
pub const ERROR_COLOR: Color32 = Color32::from_rgb(255, 120, 120);

// Spacing constants
pub const SPACING_TINY: f32 = 4.0;
pub const SPACING_SMALL: f32 = 8.0;
pub const SPACING_MEDIUM: f32 = 12.0;
pub const SPACING_LARGE: f32 = 20.0;

pub const PANEL_SIDE: f32 = 40.0;
pub const MARGIN_CARD: f32 = 15.0;
pub const CONTENT_MAX_WIDTH: f32 = 960.0;

/// Page-wide styling, applied once when the app is created.
#[derive(Debug, Clone, PartialEq)]
pub struct PageTheme {
    pub gradient_start: Color32,
    pub gradient_end: Color32,
    pub text: Color32,
    pub button_fill: Color32,
    pub button_hover: Color32,
    pub button_radius: u8,
}

impl Default for PageTheme {
    fn default() -> Self {
        Self {
            gradient_start: NAVY,
            gradient_end: TEAL,
            text: Color32::WHITE,
            button_fill: TEAL,
            button_hover: NAVY,
            button_radius: 5,
        }
    }
}

pub fn apply_page_theme(ctx: &egui::Context, theme: &PageTheme) {
    let mut visuals = egui::Visuals::dark();

    visuals.override_text_color = Some(theme.text);
    visuals.hyperlink_color = Color32::from_rgb(0xd6, 0xf5, 0xfa);
    visuals.panel_fill = Color32::TRANSPARENT;

    visuals.widgets.inactive.bg_fill = theme.button_fill;
    visuals.widgets.inactive.weak_bg_fill = theme.button_fill;
    visuals.widgets.inactive.corner_radius = CornerRadius::same(theme.button_radius);

    visuals.widgets.hovered.bg_fill = theme.button_hover;
    visuals.widgets.hovered.weak_bg_fill = theme.button_hover;
    visuals.widgets.hovered.corner_radius = CornerRadius::same(theme.button_radius);

    visuals.widgets.active.bg_fill = theme.button_hover;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, theme.text);

    visuals.faint_bg_color = Color32::from_rgba_unmultiplied(255, 255, 255, 18);
    visuals.extreme_bg_color = Color32::from_rgba_unmultiplied(0, 0, 0, 60);

    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.spacing.button_padding = egui::vec2(10.0, 10.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    });

    tracing::debug!("Page theme applied");
}

/// Paints the diagonal background gradient behind everything in `rect`.
pub fn paint_gradient(painter: &egui::Painter, rect: egui::Rect, theme: &PageTheme) {
    let mut mesh = egui::Mesh::default();
    let start = theme.gradient_start;
    let end = theme.gradient_end;
    let mid = lerp_color(start, end, 0.5);

    // 135deg: top-left starts, bottom-right ends.
    mesh.colored_vertex(rect.left_top(), start);
    mesh.colored_vertex(rect.right_top(), mid);
    mesh.colored_vertex(rect.right_bottom(), end);
    mesh.colored_vertex(rect.left_bottom(), mid);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);

    painter.add(egui::Shape::mesh(mesh));
}

pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

pub fn chart_frame(background: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(background)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(MARGIN_CARD as i8))
}
