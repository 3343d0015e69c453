use crate::markdown::{self, Span};
use eframe::egui;

const INDENT: f32 = 18.0;

pub fn render(ui: &mut egui::Ui, source: &str) {
    for line in markdown::parse(source) {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.add_space(INDENT * line.indent as f32);
            if line.bullet {
                let marker = if line.indent == 0 { "•  " } else { "-  " };
                ui.label(egui::RichText::new(marker).size(15.0));
            }
            for span in &line.spans {
                match span {
                    Span::Plain(text) => {
                        ui.label(egui::RichText::new(text).size(15.0));
                    }
                    Span::Bold(text) => {
                        ui.label(egui::RichText::new(text).size(15.0).strong());
                    }
                    Span::Link { text, url } => {
                        ui.hyperlink_to(egui::RichText::new(text).size(15.0), url);
                    }
                }
            }
        });
    }
}
