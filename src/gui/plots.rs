use crate::charts::{BarChart, PieChart, Wedge};
use crate::theme;
use crate::wordcloud::WordCloud;
use eframe::egui;
use egui_plot::{Bar, GridMark, Plot};
use std::ops::RangeInclusive;

const BAR_PLOT_HEIGHT: f32 = 260.0;
const PIE_HEIGHT: f32 = 340.0;
const CATEGORY_AXIS_WIDTH: f32 = 190.0;
const EMPTY_CHART_LABEL: &str = "No data";

fn chart_title(ui: &mut egui::Ui, title: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(title)
                .size(16.0)
                .strong()
                .color(egui::Color32::WHITE),
        );
    });
    ui.add_space(theme::SPACING_TINY);
}

/// Label for a category axis tick, or nothing between categories.
fn category_label(labels: &[String], mark: f64) -> String {
    let rounded = mark.round();
    if (mark - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

pub fn render_bar_chart(ui: &mut egui::Ui, id: usize, chart: &BarChart) {
    let labels: Vec<String> = chart.bars.iter().map(|(label, _)| label.clone()).collect();
    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            Bar::new(i as f64, *value)
                .name(label)
                .width(0.8)
                .fill(chart.fill)
                .stroke(egui::Stroke::new(1.0, chart.edge))
        })
        .collect();

    let plot_chart = egui_plot::BarChart::new(chart.title.clone(), bars)
        .horizontal()
        .element_formatter(Box::new(|bar, _| format!("{}: {}", bar.name, bar.value)));

    let x_max = chart.max_value() * 1.05;
    let category_count = labels.len() as f64;

    theme::chart_frame(chart.background).show(ui, |ui| {
        ui.set_width(ui.available_width());
        chart_title(ui, &chart.title);

        Plot::new(format!("bar_chart_{id}"))
            .height(BAR_PLOT_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_grid([false, false])
            .include_x(0.0)
            .include_x(x_max)
            .include_y(-0.6)
            .include_y(category_count - 0.4)
            .y_axis_min_width(CATEGORY_AXIS_WIDTH)
            .y_grid_spacer(egui_plot::uniform_grid_spacer(|_| [1.0, 1.0, 1.0]))
            .y_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
                category_label(&labels, mark.value)
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(plot_chart);
            });
    });
    ui.add_space(theme::SPACING_SMALL);
}

/// Screen-space point at `angle` (counter-clockwise from +x) on a circle.
fn on_circle(center: egui::Pos2, radius: f32, angle: f32) -> egui::Pos2 {
    center + egui::vec2(angle.cos(), -angle.sin()) * radius
}

fn paint_wedge(painter: &egui::Painter, center: egui::Pos2, radius: f32, wedge: &Wedge) {
    // Convex polygons only: split anything wider than a half turn.
    let pieces = if wedge.sweep > std::f32::consts::PI { 2 } else { 1 };
    let piece_sweep = wedge.sweep / pieces as f32;

    for piece in 0..pieces {
        let start = wedge.start + piece as f32 * piece_sweep;
        let steps = ((piece_sweep / (std::f32::consts::PI / 48.0)).ceil() as usize).max(3);

        let mut points = vec![center];
        for j in 0..=steps {
            let angle = start + (j as f32 / steps as f32) * piece_sweep;
            points.push(on_circle(center, radius, angle));
        }

        painter.add(egui::Shape::convex_polygon(
            points,
            wedge.color,
            egui::Stroke::NONE,
        ));
    }
}

pub fn render_pie_chart(ui: &mut egui::Ui, chart: &PieChart) {
    let wedges = chart.wedges();

    theme::chart_frame(chart.background).show(ui, |ui| {
        ui.set_width(ui.available_width());
        chart_title(ui, &chart.title);

        if wedges.is_empty() {
            ui.label(EMPTY_CHART_LABEL);
            return;
        }

        let (rect, _response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), PIE_HEIGHT),
            egui::Sense::hover(),
        );
        let center = rect.center();
        let radius = (rect.height() / 2.0 - 24.0).min(rect.width() / 4.0).max(10.0);
        let painter = ui.painter_at(rect);

        for wedge in &wedges {
            paint_wedge(&painter, center, radius, wedge);
        }

        for wedge in &wedges {
            let mid = wedge.mid_angle();
            painter.text(
                on_circle(center, radius * 0.6, mid),
                egui::Align2::CENTER_CENTER,
                wedge.percent_label(),
                egui::FontId::proportional(13.0),
                egui::Color32::BLACK,
            );

            let label_pos = on_circle(center, radius * 1.1, mid);
            let align = if label_pos.x >= center.x {
                egui::Align2::LEFT_CENTER
            } else {
                egui::Align2::RIGHT_CENTER
            };
            painter.text(
                label_pos,
                align,
                &wedge.label,
                egui::FontId::proportional(13.0),
                egui::Color32::WHITE,
            );
        }
    });
    ui.add_space(theme::SPACING_SMALL);
}

pub fn render_word_cloud(ui: &mut egui::Ui, cloud: &WordCloud) {
    if cloud.width <= 0.0 || cloud.height <= 0.0 {
        return;
    }

    let scale = (ui.available_width() / cloud.width).min(1.0);
    let size = egui::vec2(cloud.width, cloud.height) * scale;
    let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 6.0, cloud.background);
    for word in &cloud.words {
        painter.text(
            rect.min + word.rect.center().to_vec2() * scale,
            egui::Align2::CENTER_CENTER,
            &word.text,
            egui::FontId::proportional(word.font_size * scale),
            word.color,
        );
    }
    ui.add_space(theme::SPACING_SMALL);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_only_on_whole_ticks() {
        let labels = vec!["Navy".to_owned(), "PhD".to_owned()];
        assert_eq!(category_label(&labels, 0.0), "Navy");
        assert_eq!(category_label(&labels, 1.0), "PhD");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }

    fn collect_text(shape: &egui::Shape, out: &mut Vec<String>) {
        match shape {
            egui::Shape::Text(text) => out.push(text.galley.text().to_owned()),
            egui::Shape::Vec(shapes) => shapes.iter().for_each(|s| collect_text(s, out)),
            _ => {}
        }
    }

    #[test]
    fn test_empty_pie_shows_no_data_label() {
        let chart = PieChart {
            title: "Empty".to_owned(),
            slices: Vec::new(),
            start_angle_deg: 0.0,
            background: egui::Color32::BLACK,
        };

        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| render_pie_chart(ui, &chart));
        });

        let mut texts = Vec::new();
        for clipped in &output.shapes {
            collect_text(&clipped.shape, &mut texts);
        }
        assert!(texts.iter().any(|t| t == EMPTY_CHART_LABEL), "{texts:?}");
        assert!(texts.iter().any(|t| t == "Empty"));
    }

    #[test]
    fn test_on_circle_is_counter_clockwise_on_screen() {
        let center = egui::pos2(0.0, 0.0);
        let top = on_circle(center, 10.0, std::f32::consts::FRAC_PI_2);
        assert!(top.y < -9.9, "90 degrees points up on screen");
    }
}
