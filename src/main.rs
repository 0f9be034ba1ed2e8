mod core;
mod device;
mod gesture;
mod gui;
mod playback;

use eframe::egui;
use gui::SwipeControlsApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 540.0])
            .with_title("Swipe Controls - Gesture Media Overlay"),
        ..Default::default()
    };

    eframe::run_native(
        "Swipe Controls",
        options,
        Box::new(|cc| {
            match SwipeControlsApp::new(cc) {
                Ok(app) => Ok(Box::new(app)),
                Err(e) => {
                    eprintln!("Failed to initialize app: {}", e);
                    std::process::exit(1);
                }
            }
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
