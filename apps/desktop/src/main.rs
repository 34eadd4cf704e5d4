use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    camera::to_data_url, AttendanceApi, CameraSource, HttpAttendanceApi, StillFrameCamera,
    SyntheticCamera,
};
use shared::protocol::StatsResponse;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Talks to the attendance backend directly, bypassing the kiosk UI.
#[derive(Parser, Debug)]
struct Args {
    /// Defaults to the kiosk settings (attendify.toml, ATTENDIFY__API_BASE_URL).
    #[arg(long)]
    api_base_url: Option<String>,
    #[arg(long)]
    roll_number: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch attendance statistics.
    Stats,
    /// Mark attendance for the roll number.
    Mark {
        #[arg(long)]
        manual: bool,
    },
    /// Mark attendance with a manual code.
    Manual {
        #[arg(long)]
        code: String,
    },
    /// Upload one camera frame for gesture detection.
    Detect {
        /// JPEG to upload; a synthetic frame is used when omitted.
        #[arg(long)]
        frame: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let settings = client_core::load_settings().context("failed to load kiosk settings")?;
    let base_url = args.api_base_url.unwrap_or(settings.api_base_url);
    let roll_number = args.roll_number.unwrap_or(settings.roll_number);
    let api = HttpAttendanceApi::new(base_url, settings.request_timeout)
        .context("failed to build attendance API client")?;
    info!(api = %api.base_url(), roll_number = %roll_number, "backend client ready");

    match args.command {
        Command::Stats => {
            let stats = api.stats(&roll_number).await.context("stats request failed")?;
            match &stats {
                StatsResponse::Snapshot(snapshot) => println!(
                    "{:.1}% ({} of {} classes), {} more needed for 75%",
                    snapshot.current_percentage,
                    snapshot.classes_attended,
                    snapshot.total_classes,
                    snapshot.classes_needed
                ),
                StatsResponse::Summary(summary) => println!(
                    "{:.1}% ({} attended, {} missed, {} left), {} required for 75%, can miss {}",
                    summary.percent,
                    summary.attended,
                    summary.missed,
                    summary.left,
                    summary.required_for_75,
                    summary.can_miss
                ),
            }
        }
        Command::Mark { manual } => {
            let ack = api
                .mark_attendance(&roll_number, manual)
                .await
                .context("mark request failed")?;
            println!("{}", ack.message);
        }
        Command::Manual { code } => {
            let ack = api
                .manual_attendance(&roll_number, &code)
                .await
                .context("manual attendance request failed")?;
            println!("{}", ack.message);
        }
        Command::Detect { frame } => {
            let camera: Box<dyn CameraSource> = match frame {
                Some(path) => Box::new(StillFrameCamera::new(path)),
                None => Box::new(SyntheticCamera::default()),
            };
            let jpeg = camera
                .acquire()
                .and_then(|mut grabber| grabber.grab_jpeg())
                .context("failed to capture a frame")?;
            let detected = api
                .detect_gesture(&to_data_url(&jpeg))
                .await
                .context("gesture detection request failed")?;
            println!("{}", serde_json::to_string_pretty(&detected)?);
        }
    }

    Ok(())
}
