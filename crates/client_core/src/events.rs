//! Completions delivered back to the controller by timers and requests.

use shared::{
    domain::ModalKind,
    protocol::{AttendanceAck, StatsResponse},
};

use crate::error::ClientError;

/// Identifies one stay in the student view. Events tagged with an older
/// epoch belong to a released session and are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionEpoch(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerSlot {
    Status,
    ChatConfirmation,
}

#[derive(Debug)]
pub enum KioskEvent {
    HideBanner {
        slot: BannerSlot,
        generation: u64,
    },
    WelcomeNotice {
        session: SessionEpoch,
    },
    DemoPrompt {
        session: SessionEpoch,
        modal: ModalKind,
    },
    FacultyReply,
    VoiceCaptured {
        generation: u64,
    },
    /// `session` is the student session the request was issued from, if any.
    StatsLoaded {
        session: Option<SessionEpoch>,
        result: Result<StatsResponse, ClientError>,
    },
    AttendanceMarked {
        session: Option<SessionEpoch>,
        result: Result<AttendanceAck, ClientError>,
    },
    FrameKeyDetected {
        session: SessionEpoch,
        key: String,
    },
}

impl KioskEvent {
    pub fn name(&self) -> &'static str {
        match self {
            KioskEvent::HideBanner { .. } => "hide_banner",
            KioskEvent::WelcomeNotice { .. } => "welcome_notice",
            KioskEvent::DemoPrompt { .. } => "demo_prompt",
            KioskEvent::FacultyReply => "faculty_reply",
            KioskEvent::VoiceCaptured { .. } => "voice_captured",
            KioskEvent::StatsLoaded { .. } => "stats_loaded",
            KioskEvent::AttendanceMarked { .. } => "attendance_marked",
            KioskEvent::FrameKeyDetected { .. } => "frame_key_detected",
        }
    }
}
