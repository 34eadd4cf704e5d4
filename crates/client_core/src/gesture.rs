//! Maps gesture names onto the four dashboard actions.

use shared::domain::{Gesture, ModalKind};
use tracing::debug;

use crate::decision::DecisionSource;

/// Probability that a simulated face match ends in one of the recognition failures.
pub const MARK_FAILURE_PROBABILITY: f64 = 0.30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureAction {
    ViewStats,
    MarkAttendance,
    OpenChat,
    SwitchToTeacher,
    Forward(String),
}

pub fn resolve(name: &str) -> GestureAction {
    match Gesture::from_name(name) {
        Some(Gesture::Peace) => GestureAction::ViewStats,
        Some(Gesture::Wave) => GestureAction::MarkAttendance,
        Some(Gesture::Rock) => GestureAction::OpenChat,
        Some(Gesture::Fist) => GestureAction::SwitchToTeacher,
        None => GestureAction::Forward(name.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    Simulated(ModalKind),
    Submit,
}

/// First draw decides failure, second draw picks which failure.
pub fn draw_mark_outcome(decisions: &mut dyn DecisionSource) -> MarkOutcome {
    if decisions.chance(MARK_FAILURE_PROBABILITY) {
        let failures = ModalKind::RECOGNITION_FAILURES;
        MarkOutcome::Simulated(failures[decisions.pick_index(failures.len())])
    } else {
        MarkOutcome::Submit
    }
}

/// Receives gesture names outside the built-in set.
pub trait GestureExtension: Send {
    fn handle(&mut self, gesture: &str);
}

#[derive(Debug, Default)]
pub struct LoggingExtension;

impl GestureExtension for LoggingExtension {
    fn handle(&mut self, gesture: &str) {
        debug!(gesture, "unhandled gesture forwarded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::ScriptedDecisions;

    #[test]
    fn resolves_known_gestures() {
        assert_eq!(resolve("peace"), GestureAction::ViewStats);
        assert_eq!(resolve("wave"), GestureAction::MarkAttendance);
        assert_eq!(resolve("rock"), GestureAction::OpenChat);
        assert_eq!(resolve("fist"), GestureAction::SwitchToTeacher);
    }

    #[test]
    fn forwards_unknown_names_unchanged() {
        assert_eq!(
            resolve("thumbs-up"),
            GestureAction::Forward("thumbs-up".to_string())
        );
        assert_eq!(resolve("Peace"), GestureAction::Forward("Peace".to_string()));
    }

    #[test]
    fn low_draw_picks_a_recognition_failure() {
        let mut decisions = ScriptedDecisions::new([0.10, 0.5]);
        assert_eq!(
            draw_mark_outcome(&mut decisions),
            MarkOutcome::Simulated(ModalKind::LowLight)
        );
    }

    #[test]
    fn draw_at_threshold_submits() {
        let mut decisions = ScriptedDecisions::always(0.30);
        assert_eq!(draw_mark_outcome(&mut decisions), MarkOutcome::Submit);
    }
}
