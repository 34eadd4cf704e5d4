use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod controller;
mod ui;

use ui::KioskApp;

const WINDOW_TITLE: &str = "Attendify Kiosk";

#[derive(Parser, Debug)]
struct Args {
    /// Overrides the roll number from attendify.toml / ATTENDIFY__ROLL_NUMBER.
    #[arg(long)]
    roll_number: Option<String>,
    /// JPEG served as the camera feed instead of the synthetic pattern.
    #[arg(long)]
    camera_frame: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut settings = client_core::load_settings().context("failed to load kiosk settings")?;
    if let Some(roll_number) = args.roll_number.filter(|roll| !roll.trim().is_empty()) {
        settings.roll_number = roll_number;
    }
    if let Some(path) = args.camera_frame {
        settings.camera_frame_path = Some(path);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build async runtime")?;
    let kiosk = controller::startup::build_controller(runtime.handle().clone(), settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([980.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(KioskApp::new(kiosk, runtime)))),
    )
    .map_err(|err| anyhow!("kiosk window failed: {err}"))
}
