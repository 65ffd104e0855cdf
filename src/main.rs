mod data;
mod ui;

use ui::app::DeckApp;

fn main() {
    if let Err(e) = std::fs::create_dir_all("logs") {
        eprintln!("Could not create the log directory: {e}");
    }
    let appender = tracing_appender::rolling::daily("logs", "finance_deck.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("Starting the finance deck");

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };
    match eframe::run_native(
        "Finance Deck",
        native_options,
        Box::new(|cc| Ok(Box::new(DeckApp::new(cc)))),
    ) {
        Ok(()) => tracing::info!("Finance deck shut down"),
        Err(e) => tracing::error!("Could not run the finance deck: {e}"),
    }
}
