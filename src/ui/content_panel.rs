use super::app::DeckApp;
use super::contribution_chart::contribution_chart;
use super::date_format::pretty_month;
use super::risk_colors::RiskLevel;
use crate::data::page::PageId;
use crate::data::registry::SnapshotRegistry;
use crate::data::snapshot::{Note, SnapshotRecord};
use eframe::egui::{CentralPanel, Color32, Grid, RichText, ScrollArea, Ui};

/// Render the central content area: the Summary overview, one snapshot's
/// detail view, or nothing at all when no panel is active.
pub fn render_content_panel(app: &mut DeckApp, ctx: &eframe::egui::Context) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| match app.panels.active_page() {
            Some(PageId::Summary) => render_summary(&app.registry, ui),
            Some(page) => match app.registry.page_record(page) {
                Some(record) => render_snapshot(record, ui),
                None => (),
            },
            None => (),
        });
    });
}

/// The Summary overview: one table row per assigned page.
fn render_summary(registry: &SnapshotRegistry, ui: &mut Ui) {
    ui.label(
        RichText::new("Model Summary")
            .color(Color32::LIGHT_BLUE)
            .size(18.0),
    );
    ui.separator();
    if registry.is_empty() {
        ui.label(RichText::new("No snapshot records are loaded.").size(16.0));
        return;
    }
    let rows: Vec<(PageId, &SnapshotRecord)> = registry
        .assigned_pages()
        .into_iter()
        .filter_map(|page| registry.page_record(page).map(|record| (page, record)))
        .collect();
    ui.push_id(0, |ui| {
        egui_extras::TableBuilder::new(ui)
            .striped(true)
            .column(egui_extras::Column::auto().at_least(80.0).resizable(true))
            .column(egui_extras::Column::auto().at_least(220.0).resizable(true))
            .column(egui_extras::Column::auto().at_least(100.0).resizable(true))
            .column(egui_extras::Column::auto().at_least(120.0).resizable(true))
            .column(egui_extras::Column::auto().at_least(90.0).resizable(true))
            .column(egui_extras::Column::auto().at_least(80.0).resizable(true))
            .header(40.0, |mut header| {
                header.col(|ui| {
                    ui.heading("Page");
                });
                header.col(|ui| {
                    ui.heading("Model");
                });
                header.col(|ui| {
                    ui.heading("As Of");
                });
                header.col(|ui| {
                    ui.heading("P(next 12m)");
                });
                header.col(|ui| {
                    ui.heading("Risk");
                });
                header.col(|ui| {
                    ui.heading("z");
                });
            })
            .body(|body| {
                body.rows(24.0, rows.len(), |mut row| {
                    let ridx = row.index();
                    let (page, record) = rows[ridx];
                    let level = RiskLevel::from_probability(record.probability_pct);
                    row.col(|ui| {
                        ui.label(RichText::new(page.to_string()).color(Color32::LIGHT_GREEN));
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(record.title.clone()));
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(pretty_month(&record.as_of)));
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(format!("{:.1}%", record.probability_pct)));
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(format!("{level}")).color(&level));
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(format!("{:.4}", record.z)));
                    });
                })
            });
    });
    ui.separator();
}

/// One snapshot's detail view: scalar outputs, input and contribution
/// tables, the contribution chart, and any notes.
fn render_snapshot(record: &SnapshotRecord, ui: &mut Ui) {
    let level = RiskLevel::from_probability(record.probability_pct);
    ui.label(
        RichText::new(record.title.clone())
            .color(Color32::LIGHT_BLUE)
            .size(18.0),
    );
    ui.label(RichText::new(format!("Data as of {}", pretty_month(&record.as_of))).size(16.0));
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!(
                "Recession probability (next 12m): {:.1}%",
                record.probability_pct
            ))
            .size(16.0)
            .color(&level),
        );
        ui.separator();
        ui.label(
            RichText::new(format!("Risk band: {level}"))
                .size(16.0)
                .color(&level),
        );
        ui.separator();
        ui.label(RichText::new(format!("Logit z: {:.4}", record.z)).size(16.0));
    });
    ui.separator();

    ui.label(RichText::new("Model Inputs").size(16.0));
    let features: Vec<(&String, &f64)> = record.features.iter().collect();
    ui.push_id(1, |ui| {
        egui_extras::TableBuilder::new(ui)
            .striped(true)
            .column(egui_extras::Column::auto().at_least(200.0).resizable(true))
            .column(egui_extras::Column::auto().at_least(100.0).resizable(true))
            .header(30.0, |mut header| {
                header.col(|ui| {
                    ui.heading("Indicator");
                });
                header.col(|ui| {
                    ui.heading("Value");
                });
            })
            .body(|body| {
                body.rows(22.0, features.len(), |mut row| {
                    let ridx = row.index();
                    let (name, value) = features[ridx];
                    row.col(|ui| {
                        ui.label(RichText::new(name.clone()).color(Color32::LIGHT_GREEN));
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(format!("{value:+.3}")));
                    });
                })
            });
    });
    ui.separator();

    ui.label(RichText::new("Logit Contributions").size(16.0));
    let contributions: Vec<(&String, &f64)> = record.contributions.iter().collect();
    ui.push_id(2, |ui| {
        egui_extras::TableBuilder::new(ui)
            .striped(true)
            .column(egui_extras::Column::auto().at_least(200.0).resizable(true))
            .column(egui_extras::Column::auto().at_least(100.0).resizable(true))
            .header(30.0, |mut header| {
                header.col(|ui| {
                    ui.heading("Component");
                });
                header.col(|ui| {
                    ui.heading("Contribution");
                });
            })
            .body(|body| {
                body.rows(22.0, contributions.len(), |mut row| {
                    let ridx = row.index();
                    let (name, value) = contributions[ridx];
                    let color = if *value >= 0.0 {
                        Color32::LIGHT_RED
                    } else {
                        Color32::LIGHT_GREEN
                    };
                    row.col(|ui| {
                        ui.label(RichText::new(name.clone()));
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(format!("{value:+.4}")).color(color));
                    });
                })
            });
    });
    ui.label(
        RichText::new(format!(
            "Sum of contributions: {:+.4} (z = {:+.4})",
            record.contribution_total(),
            record.z
        ))
        .size(14.0),
    );
    ui.separator();

    egui_plot::Plot::new("ContributionPlot")
        .view_aspect(4.0)
        .height(220.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(contribution_chart(record));
        });
    ui.separator();

    render_notes(record, ui);
}

fn render_notes(record: &SnapshotRecord, ui: &mut Ui) {
    if record.notes.is_empty() {
        return;
    }
    ui.label(RichText::new("Notes").size(16.0));
    for (topic, note) in record.notes.iter() {
        match note {
            Note::Text(text) => {
                ui.label(RichText::new(format!("{topic}: {text}")).size(14.0));
            }
            Note::Table(entries) => {
                ui.label(
                    RichText::new(topic.clone())
                        .size(14.0)
                        .color(Color32::LIGHT_GREEN),
                );
                Grid::new(topic).num_columns(2).show(ui, |ui| {
                    for (key, value) in entries.iter() {
                        ui.label(RichText::new(key.clone()).size(14.0));
                        ui.label(RichText::new(value.clone()).size(14.0));
                        ui.end_row();
                    }
                });
            }
        }
    }
}
