use super::config::Config;
use super::content_panel::render_content_panel;
use super::header_panel::{render_header_panel, HEADER_WIDGET_COUNT};
use super::nav_panel::render_nav_panel;
use super::panel_manager::PanelManager;
use crate::data::page::PageId;
use crate::data::registry::SnapshotRegistry;

use eframe::egui::Color32;

const DEFAULT_TEXT_COLOR: Color32 = Color32::LIGHT_GRAY;

/// DeckApp implements the eframe::App trait,
/// and holds the snapshot registry and the panel visibility state.
#[derive(Debug)]
pub struct DeckApp {
    pub config: Config,
    pub registry: SnapshotRegistry,
    pub panels: PanelManager,
}

impl DeckApp {
    /// Create the app from an eframe context: load the config, build the
    /// registry, and activate the configured start page.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut visuals = eframe::egui::Visuals::dark();
        visuals.override_text_color = Some(DEFAULT_TEXT_COLOR);
        cc.egui_ctx.set_visuals(visuals);
        cc.egui_ctx.set_theme(eframe::egui::Theme::Dark);

        let config = Config::load_or_default();
        let mut registry = match SnapshotRegistry::embedded() {
            Ok(registry) => registry,
            Err(e) => {
                tracing::error!("Could not load the embedded snapshots: {e}");
                SnapshotRegistry::empty()
            }
        };
        if let Some(dir) = &config.data_dir {
            match registry.load_dir(dir) {
                Ok(count) => {
                    tracing::info!("Loaded {count} snapshot(s) from {}", dir.display())
                }
                Err(e) => {
                    tracing::error!("Could not load snapshots from {}: {e}", dir.display())
                }
            }
        }

        let mut pages = vec![PageId::Summary];
        pages.extend(registry.assigned_pages());
        let mut panels = PanelManager::new(&pages, HEADER_WIDGET_COUNT);
        panels.activate(&config.start_page);

        DeckApp {
            config,
            registry,
            panels,
        }
    }

    /// Re-apply the configured start page, e.g. after a new config is opened.
    pub fn apply_start_page(&mut self) {
        self.panels.activate(&self.config.start_page);
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        render_header_panel(self, ctx);
        render_nav_panel(self, ctx);
        render_content_panel(self, ctx);
    }
}
