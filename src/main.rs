// NGO Agenda desktop application
// Main entry point

use ngo_agenda::ui_egui::CalendarApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting NGO Agenda");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("NGO Agenda")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "NGO Agenda",
        options,
        Box::new(|cc| Ok(Box::new(CalendarApp::new(cc)?))),
    )
}
