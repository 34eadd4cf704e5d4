//! Builds the kiosk controller from loaded settings.

use std::sync::Arc;

use anyhow::{Context, Result};
use client_core::{
    CameraSource, HttpAttendanceApi, KioskController, KioskDeps, KioskSettings, LoggingExtension,
    StillFrameCamera, SyntheticCamera, ThreadRngDecisions,
};
use tokio::runtime::Handle;
use tracing::info;

pub fn select_camera(settings: &KioskSettings) -> Arc<dyn CameraSource> {
    match &settings.camera_frame_path {
        Some(path) => {
            let camera = StillFrameCamera::new(path.clone());
            info!(path = %camera.path().display(), "using still-frame camera");
            Arc::new(camera)
        }
        None => Arc::new(SyntheticCamera::default()),
    }
}

pub fn build_controller(runtime: Handle, settings: KioskSettings) -> Result<KioskController> {
    let api = HttpAttendanceApi::new(settings.api_base_url.clone(), settings.request_timeout)
        .context("failed to build attendance API client")?;
    info!(
        api = %api.base_url(),
        roll_number = %settings.roll_number,
        "kiosk starting"
    );

    let deps = KioskDeps {
        api: Arc::new(api),
        camera: select_camera(&settings),
        decisions: Box::new(ThreadRngDecisions),
        extension: Box::new(LoggingExtension),
        runtime,
    };
    Ok(KioskController::new(deps, settings))
}
