//! Copy for every dialog the overlay layer can show.

use shared::domain::ModalKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalContent {
    pub title: &'static str,
    pub body: &'static str,
    pub detail: Option<&'static str>,
    pub severity: Severity,
    /// Closes the dialog.
    pub dismiss_label: &'static str,
    /// Shown above the dismiss button; has no effect of its own.
    pub extra_label: Option<&'static str>,
}

pub fn content(kind: ModalKind) -> ModalContent {
    match kind {
        ModalKind::MultipleFaces => ModalContent {
            title: "Multiple Faces Detected",
            body: "Multiple faces detected in the camera feed. The system is resolving the primary face for attendance marking.",
            detail: Some("Resolving primary face..."),
            severity: Severity::Warning,
            dismiss_label: "Understood",
            extra_label: None,
        },
        ModalKind::LowLight => ModalContent {
            title: "Poor Lighting Conditions",
            body: "Lighting conditions are not optimal for accurate face recognition. Please adjust your position or lighting.",
            detail: Some("Tip: Position yourself facing a light source for better detection"),
            severity: Severity::Warning,
            dismiss_label: "Try Again",
            extra_label: None,
        },
        ModalKind::UnknownFace => ModalContent {
            title: "Unknown Face Detected",
            body: "Face detected but not recognized in the system. Please ensure you are registered for this class.",
            detail: None,
            severity: Severity::Error,
            dismiss_label: "Try Again",
            extra_label: Some("Register New Student"),
        },
        ModalKind::GestureNotRecognized => ModalContent {
            title: "Gesture Not Recognized",
            body: "The gesture was not clearly recognized. Please try again with one of the supported gestures.",
            detail: Some("✌ Stats   👋 Mark   🤟 Chat   ✊ Teacher"),
            severity: Severity::Info,
            dismiss_label: "Try Again",
            extra_label: None,
        },
        ModalKind::VoiceUnclear => ModalContent {
            title: "Voice Not Clear",
            body: "Your voice message was unclear due to background noise. Please confirm the message before sending.",
            detail: Some("Did you mean: \"Can I get an extension for my assignment?\""),
            severity: Severity::Info,
            dismiss_label: "No, Try Again",
            extra_label: Some("Yes, Send This Message"),
        },
        ModalKind::NetworkError => ModalContent {
            title: "Network Connection Lost",
            body: "Message delivery failed due to network connectivity issues. The message has been saved locally.",
            detail: Some("Your message will be sent automatically when connection is restored"),
            severity: Severity::Error,
            dismiss_label: "Understood",
            extra_label: None,
        },
        ModalKind::ClassesNeeded => ModalContent {
            title: "Classes Needed Analysis",
            body: "Based on your current attendance, here's what you need to reach 75%.",
            detail: Some("Attend 3 more classes to reach the minimum 75% requirement"),
            severity: Severity::Info,
            dismiss_label: "Got It",
            extra_label: None,
        },
    }
}
