use super::app::DeckApp;
use crate::data::page::PageId;
use eframe::egui::{Button, Color32, RichText, SidePanel, Ui};

/// Render the page navigation, the left side panel in the UI. Every
/// identifier in the enumeration gets a button; pages with no record bound
/// to them are shown disabled.
pub fn render_nav_panel(app: &mut DeckApp, ctx: &eframe::egui::Context) {
    SidePanel::left("Nav_Panel").show(ctx, |ui| {
        ui.label(RichText::new("Pages").color(Color32::LIGHT_BLUE).size(18.0));
        ui.separator();
        let mut requested: Option<PageId> = None;
        if nav_button(ui, "Summary", app.panels.is_active(PageId::Summary), true) {
            requested = Some(PageId::Summary);
        }
        ui.separator();
        for page in PageId::all().skip(1) {
            let record = app.registry.page_record(page);
            let label = match record {
                Some(record) => record.title.clone(),
                None => page.to_string(),
            };
            if nav_button(ui, &label, app.panels.is_active(page), record.is_some()) {
                requested = Some(page);
            }
        }
        if let Some(page) = requested {
            app.panels.activate_page(page);
        }
    });
}

fn nav_button(ui: &mut Ui, label: &str, is_active: bool, enabled: bool) -> bool {
    let color = if is_active {
        Color32::LIGHT_GREEN
    } else {
        Color32::LIGHT_GRAY
    };
    ui.add_enabled(
        enabled,
        Button::new(RichText::new(label).color(color).size(16.0)).min_size([180.0, 25.0].into()),
    )
    .clicked()
}
