use super::app::DeckApp;
use super::date_format::pretty_month;
use super::risk_colors::RiskLevel;
use eframe::egui::{RichText, TopBottomPanel};
use rfd::FileDialog;

/// Number of widgets in the header-info group. Must match what
/// render_header_panel draws when the group is visible.
pub const HEADER_WIDGET_COUNT: usize = 3;

/// Render the top panel: the File menu plus the header-info widgets that
/// accompany the Summary page.
pub fn render_header_panel(app: &mut DeckApp, ctx: &eframe::egui::Context) {
    TopBottomPanel::top("Header_Panel").show(ctx, |ui| {
        ui.menu_button(RichText::new("File").size(16.0), |ui| {
            if ui.button(RichText::new("Save Config").size(14.0)).clicked() {
                if let Some(path) = FileDialog::new()
                    .set_directory(
                        &std::env::current_dir().expect("Couldn't access runtime directory"),
                    )
                    .add_filter("YAML", &["yaml", "yml"])
                    .save_file()
                {
                    app.config.path = path;
                    match app.config.save() {
                        Ok(()) => (),
                        Err(e) => tracing::error!("Could not save Config: {e}"),
                    }
                }
                ui.close_menu();
            }
            if ui.button(RichText::new("Open Config").size(14.0)).clicked() {
                if let Some(path) = FileDialog::new()
                    .set_directory(
                        &std::env::current_dir().expect("Couldn't access runtime directory"),
                    )
                    .add_filter("YAML", &["yaml", "yml"])
                    .pick_file()
                {
                    // data_dir from the new config takes effect on the next launch
                    match app.config.load(path) {
                        Ok(()) => app.apply_start_page(),
                        Err(e) => tracing::error!("Could not load Config: {e}"),
                    }
                }
                ui.close_menu();
            }
        });
        ui.separator();
        if app.panels.header_visible() {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("Models tracked: {}", app.registry.len())).size(16.0),
                );
                ui.separator();
                let latest = match app.registry.latest_as_of() {
                    Some(as_of) => pretty_month(as_of),
                    None => String::from("n/a"),
                };
                ui.label(RichText::new(format!("Latest data: {latest}")).size(16.0));
                ui.separator();
                match app.registry.peak_probability() {
                    Some(record) => {
                        let level = RiskLevel::from_probability(record.probability_pct);
                        ui.label(
                            RichText::new(format!(
                                "Peak risk: {:.1}% ({level}, {})",
                                record.probability_pct, record.title
                            ))
                            .size(16.0)
                            .color(&level),
                        );
                    }
                    None => {
                        ui.label(RichText::new("Peak risk: n/a").size(16.0));
                    }
                }
            });
            ui.separator();
        }
    });
}
