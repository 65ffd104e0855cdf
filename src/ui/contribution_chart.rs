use crate::data::snapshot::SnapshotRecord;
use eframe::egui::Color32;
use egui_plot::{Bar, BarChart};

/// Build a bar chart of a snapshot's logit contributions. Terms pushing the
/// logit up (toward recession) are drawn red, terms pulling it down green.
pub fn contribution_chart(record: &SnapshotRecord) -> BarChart {
    let bars: Vec<Bar> = record
        .contributions
        .iter()
        .enumerate()
        .map(|(index, (name, value))| {
            let fill = if *value >= 0.0 {
                Color32::LIGHT_RED
            } else {
                Color32::LIGHT_GREEN
            };
            Bar::new(index as f64, *value).name(name).fill(fill)
        })
        .collect();
    BarChart::new(bars).name(&record.title)
}
