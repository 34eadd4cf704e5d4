//! Transient banners that hide themselves after a fixed duration.

use std::time::Duration;

use shared::domain::NotificationKind;

use crate::{
    events::{BannerSlot, KioskEvent},
    timers::{Scheduler, TimerGuard},
};

pub const STATUS_BANNER_DURATION: Duration = Duration::from_millis(3000);
pub const WELCOME_BANNER_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: NotificationKind,
    pub message: String,
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }
}

/// One banner position. A new `show` replaces the message and cancels the
/// previous hide timer, so the latest banner always gets its full duration.
#[derive(Debug)]
pub struct NotificationSlot {
    slot: BannerSlot,
    banner: Option<Banner>,
    visible: bool,
    generation: u64,
    hide_timer: Option<TimerGuard>,
}

impl NotificationSlot {
    pub fn new(slot: BannerSlot) -> Self {
        Self {
            slot,
            banner: None,
            visible: false,
            generation: 0,
            hide_timer: None,
        }
    }

    pub fn show(&mut self, scheduler: &Scheduler, banner: Banner, duration: Duration) {
        self.generation += 1;
        self.banner = Some(banner);
        self.visible = true;
        self.hide_timer = Some(scheduler.after(
            duration,
            KioskEvent::HideBanner {
                slot: self.slot,
                generation: self.generation,
            },
        ));
    }

    /// Applies a hide timer. Timers from a replaced banner are ignored.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        self.hide_timer = None;
        true
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.visible = false;
        self.hide_timer = None;
    }

    pub fn visible(&self) -> Option<&Banner> {
        if self.visible {
            self.banner.as_ref()
        } else {
            None
        }
    }
}
