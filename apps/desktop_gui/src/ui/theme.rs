use client_core::modals::Severity;
use eframe::egui::{self, Color32, Stroke};
use shared::domain::{NotificationKind, StudentStatus};

pub const ACCENT: Color32 = Color32::from_rgb(88, 101, 242);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(150, 152, 160);
pub const CAMERA_BACKGROUND: Color32 = Color32::from_rgb(18, 18, 20);

pub fn banner_colors(kind: NotificationKind) -> (Color32, Stroke) {
    match kind {
        NotificationKind::Success => (
            Color32::from_rgb(32, 92, 58),
            Stroke::new(1.0, Color32::from_rgb(35, 165, 90)),
        ),
        NotificationKind::Warning => (
            Color32::from_rgb(110, 84, 30),
            Stroke::new(1.0, Color32::from_rgb(214, 158, 46)),
        ),
    }
}

pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Info => ACCENT,
        Severity::Warning => Color32::from_rgb(214, 158, 46),
        Severity::Error => Color32::from_rgb(240, 71, 71),
    }
}

pub fn status_color(status: StudentStatus) -> Color32 {
    match status {
        StudentStatus::Hero => Color32::from_rgb(35, 165, 90),
        StudentStatus::Normal => ACCENT,
        StudentStatus::Edge => Color32::from_rgb(240, 71, 71),
    }
}

pub fn attendance_color(meets_target: bool) -> Color32 {
    if meets_target {
        Color32::from_rgb(35, 165, 90)
    } else {
        Color32::from_rgb(240, 71, 71)
    }
}

pub fn card() -> egui::Frame {
    egui::Frame::NONE
        .fill(Color32::from_rgb(36, 36, 40))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
}
