//! Timed failure prompts staged while the student view is on screen.

use std::time::Duration;

use shared::domain::ModalKind;

use crate::{
    events::{KioskEvent, SessionEpoch},
    timers::{Scheduler, TimerGuard},
};

pub const DEMO_PROMPT_PROBABILITY: f64 = 0.30;

pub const DEMO_SCHEDULE: [(Duration, ModalKind); 3] = [
    (Duration::from_secs(8), ModalKind::GestureNotRecognized),
    (Duration::from_secs(18), ModalKind::VoiceUnclear),
    (Duration::from_secs(28), ModalKind::NetworkError),
];

/// The three prompt timers, owned together. Dropping the sequence cancels
/// every prompt that has not fired yet.
#[derive(Debug)]
pub struct DemoSequence {
    timers: Vec<TimerGuard>,
}

impl DemoSequence {
    pub fn start(scheduler: &Scheduler, session: SessionEpoch) -> Self {
        let timers = DEMO_SCHEDULE
            .iter()
            .map(|&(delay, modal)| scheduler.after(delay, KioskEvent::DemoPrompt { session, modal }))
            .collect();
        Self { timers }
    }

    pub fn pending(&self) -> usize {
        self.timers.iter().filter(|timer| !timer.is_finished()).count()
    }
}
