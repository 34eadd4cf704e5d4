use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident, $inner:ty) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub $inner);
    };
}

id_newtype!(MessageId, u64);
id_newtype!(StudentId, u32);

/// Attendance percentage a student has to keep to stay out of the at-risk band.
pub const ATTENDANCE_TARGET_PERCENT: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    Landing,
    Student,
    Teacher,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Landing => "landing",
            ViewMode::Student => "student",
            ViewMode::Teacher => "teacher",
        }
    }
}

/// Every dialog the overlay layer can show. At most one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModalKind {
    MultipleFaces,
    LowLight,
    UnknownFace,
    GestureNotRecognized,
    VoiceUnclear,
    NetworkError,
    ClassesNeeded,
}

impl ModalKind {
    /// Failures a simulated face match can end in.
    pub const RECOGNITION_FAILURES: [ModalKind; 3] = [
        ModalKind::MultipleFaces,
        ModalKind::LowLight,
        ModalKind::UnknownFace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModalKind::MultipleFaces => "multiple-faces",
            ModalKind::LowLight => "low-light",
            ModalKind::UnknownFace => "unknown-face",
            ModalKind::GestureNotRecognized => "gesture-not-recognized",
            ModalKind::VoiceUnclear => "voice-unclear",
            ModalKind::NetworkError => "network-error",
            ModalKind::ClassesNeeded => "classes-needed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    Peace,
    Wave,
    Rock,
    Fist,
}

impl Gesture {
    pub const ALL: [Gesture; 4] = [Gesture::Peace, Gesture::Wave, Gesture::Rock, Gesture::Fist];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "peace" => Some(Gesture::Peace),
            "wave" => Some(Gesture::Wave),
            "rock" => Some(Gesture::Rock),
            "fist" => Some(Gesture::Fist),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Gesture::Peace => "peace",
            Gesture::Wave => "wave",
            Gesture::Rock => "rock",
            Gesture::Fist => "fist",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Gesture::Peace => "✌",
            Gesture::Wave => "👋",
            Gesture::Rock => "🤟",
            Gesture::Fist => "✊",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gesture::Peace => "View Stats",
            Gesture::Wave => "Mark Attendance",
            Gesture::Rock => "Open Chat",
            Gesture::Fist => "Teacher View",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Gesture::Peace => "Show attendance statistics",
            Gesture::Wave => "Manual attendance marking",
            Gesture::Rock => "Chat with faculty",
            Gesture::Fist => "Switch to teacher dashboard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Student,
    Faculty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryChannel {
    #[default]
    Sms,
    WhatsApp,
    Email,
}

impl DeliveryChannel {
    pub const ALL: [DeliveryChannel; 3] = [
        DeliveryChannel::Sms,
        DeliveryChannel::WhatsApp,
        DeliveryChannel::Email,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeliveryChannel::Sms => "SMS",
            DeliveryChannel::WhatsApp => "WhatsApp",
            DeliveryChannel::Email => "Email",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Warning,
}

/// Snapshot shown in the student quick-stats panel. The fields are supplied
/// independently; none of them is derived from the others.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStats {
    pub current_percentage: f64,
    pub classes_attended: u32,
    pub total_classes: u32,
    pub classes_needed: u32,
}

impl AttendanceStats {
    pub fn meets_target(&self) -> bool {
        self.current_percentage >= ATTENDANCE_TARGET_PERCENT
    }

    /// Width of the progress bar, capped at a full bar.
    pub fn progress_fraction(&self) -> f32 {
        (self.current_percentage.clamp(0.0, 100.0) / 100.0) as f32
    }
}

/// Status tags are assigned with the record, never computed from `attendance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentStatus {
    Hero,
    Normal,
    Edge,
}

impl StudentStatus {
    pub fn badge(self) -> &'static str {
        match self {
            StudentStatus::Hero => "Hero",
            StudentStatus::Normal => "Normal",
            StudentStatus::Edge => "At Risk",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub attendance: u32,
    pub classes_attended: u32,
    pub total_classes: u32,
    pub status: StudentStatus,
}
