#![warn(clippy::all, rust_2018_idioms)]

#[cfg(not(target_arch = "wasm32"))]
use pixel_slammer::{EditorConfig, PaintApp};

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_CONFIG: &str = "pixel_slammer.json";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = match std::env::args().nth(1) {
        Some(path) => EditorConfig::load_or_default(path),
        None if std::path::Path::new(DEFAULT_CONFIG).exists() => {
            EditorConfig::load_or_default(DEFAULT_CONFIG)
        }
        None => EditorConfig::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Pixel Slammer",
        native_options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc, config)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
