//! Periodic gesture-frame upload while the student view is mounted.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::mpsc::UnboundedSender,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, warn};

use crate::{
    api::AttendanceApi,
    camera::{to_data_url, FrameGrabber},
    events::{KioskEvent, SessionEpoch},
};

/// Uploads one frame per `period`, first one a full period after start, and
/// reports every detected key. Runs until the owning task is aborted, which
/// also drops `grabber` and releases the camera.
pub async fn run_frame_uploader(
    api: Arc<dyn AttendanceApi>,
    mut grabber: Box<dyn FrameGrabber>,
    period: Duration,
    session: SessionEpoch,
    events: UnboundedSender<KioskEvent>,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let frame = match grabber.grab_jpeg() {
            Ok(frame) => frame,
            Err(err) => {
                warn!(error = %err, "failed to grab camera frame");
                continue;
            }
        };

        match api.detect_gesture(&to_data_url(&frame)).await {
            Ok(response) => {
                let Some(key) = response.key else {
                    continue;
                };
                debug!(key = %key, gesture = ?response.gesture, "gesture frame matched a key");
                if events
                    .send(KioskEvent::FrameKeyDetected { session, key })
                    .is_err()
                {
                    return;
                }
            }
            Err(err) => warn!(error = %err, "gesture frame upload failed"),
        }
    }
}
