//! Chart inputs. These are plain data; drawing lives in `gui::plots`.

use egui::Color32;

/// Horizontal bar chart, one bar per category.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    /// `(label, value)` pairs, drawn bottom to top.
    pub bars: Vec<(String, f64)>,
    pub fill: Color32,
    pub edge: Color32,
    pub background: Color32,
}

impl BarChart {
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub size: f64,
    pub color: Color32,
}

/// Pie chart with percent labels.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
    /// Angle of the first wedge edge, in degrees counter-clockwise from the
    /// positive x axis.
    pub start_angle_deg: f32,
    pub background: Color32,
}

/// A wedge resolved to angles, in radians counter-clockwise from +x.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub label: String,
    pub color: Color32,
    pub start: f32,
    pub sweep: f32,
    pub fraction: f64,
}

impl Wedge {
    pub fn mid_angle(&self) -> f32 {
        self.start + self.sweep / 2.0
    }

    /// Percent label, e.g. `30.0%`.
    pub fn percent_label(&self) -> String {
        format_percent(self.fraction)
    }
}

pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

impl PieChart {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.size.max(0.0)).sum()
    }

    /// Resolves slices into consecutive counter-clockwise wedges.
    ///
    /// Slices with a non-positive size are skipped. Returns nothing when the
    /// total is zero.
    pub fn wedges(&self) -> Vec<Wedge> {
        let total = self.total();
        if total <= 0.0 {
            return Vec::new();
        }

        let mut start = self.start_angle_deg.to_radians();
        self.slices
            .iter()
            .filter(|s| s.size > 0.0)
            .map(|s| {
                let fraction = s.size / total;
                let sweep = fraction as f32 * std::f32::consts::TAU;
                let wedge = Wedge {
                    label: s.label.clone(),
                    color: s.color,
                    start,
                    sweep,
                    fraction,
                };
                start += sweep;
                wedge
            })
            .collect()
    }
}
