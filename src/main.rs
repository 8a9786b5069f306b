use eframe::egui;
use qrdesk::{gui, logging, view};

fn main() -> eframe::Result<()> {
    logging::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(view::WINDOW_TITLE)
            .with_inner_size(gui::INITIAL_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        view::WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(gui::QrApp::new(cc)))),
    )
}
