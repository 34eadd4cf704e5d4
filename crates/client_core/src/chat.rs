//! Faculty chat overlay: open/closed state, message log, scripted replies and
//! the simulated voice capture.

use std::time::Duration;

use chrono::Utc;
use shared::domain::{ChatMessage, DeliveryChannel, MessageId, Sender};
use tracing::{debug, info};

use crate::{
    events::{BannerSlot, KioskEvent},
    notify::{Banner, NotificationSlot},
    timers::{Scheduler, TimerGuard},
};

pub const GREETING: &str = "Hello! How can I help you today?";
pub const FACULTY_REPLY: &str = "Thank you for your message. I'll get back to you shortly.";
pub const VOICE_PHRASE: &str = "Can I get an extension for my assignment?";

pub const FACULTY_REPLY_DELAY: Duration = Duration::from_millis(1500);
pub const VOICE_CAPTURE_DELAY: Duration = Duration::from_millis(2000);
pub const CONFIRMATION_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug)]
pub struct ChatPanel {
    open: bool,
    messages: Vec<ChatMessage>,
    next_id: u64,
    pub input: String,
    listening: bool,
    voice_generation: u64,
    voice_timer: Option<TimerGuard>,
    channel: DeliveryChannel,
    confirmation: NotificationSlot,
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatPanel {
    pub fn new() -> Self {
        let mut panel = Self {
            open: false,
            messages: Vec::new(),
            next_id: 0,
            input: String::new(),
            listening: false,
            voice_generation: 0,
            voice_timer: None,
            channel: DeliveryChannel::default(),
            confirmation: NotificationSlot::new(BannerSlot::ChatConfirmation),
        };
        panel.append(GREETING.to_string(), Sender::Faculty);
        panel
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        if !self.open {
            info!("chat opened");
        }
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn channel(&self) -> DeliveryChannel {
        self.channel
    }

    pub fn set_channel(&mut self, channel: DeliveryChannel) {
        self.channel = channel;
    }

    pub fn can_send(&self) -> bool {
        !self.listening && !self.input.trim().is_empty()
    }

    pub fn confirmation(&self) -> Option<&Banner> {
        self.confirmation.visible()
    }

    /// Appends the typed message and schedules the faculty reply. Returns
    /// false, touching nothing, when there is nothing to send.
    pub fn send(&mut self, scheduler: &Scheduler) -> bool {
        if !self.can_send() {
            return false;
        }
        let text = std::mem::take(&mut self.input);
        let id = self.append(text, Sender::Student);
        debug!(message_id = id.0, channel = self.channel.label(), "chat message sent");

        self.confirmation.show(
            scheduler,
            Banner::success(format!(
                "Message sent to Faculty via {}",
                self.channel.label().to_uppercase()
            )),
            CONFIRMATION_DURATION,
        );
        scheduler.after_detached(FACULTY_REPLY_DELAY, KioskEvent::FacultyReply);
        true
    }

    pub fn push_faculty_reply(&mut self) -> MessageId {
        self.append(FACULTY_REPLY.to_string(), Sender::Faculty)
    }

    /// Starts a capture when idle; stops a running one, discarding its result.
    pub fn toggle_voice(&mut self, scheduler: &Scheduler) {
        self.voice_generation += 1;
        if self.listening {
            self.listening = false;
            self.voice_timer = None;
            return;
        }
        self.listening = true;
        self.voice_timer = Some(scheduler.after(
            VOICE_CAPTURE_DELAY,
            KioskEvent::VoiceCaptured {
                generation: self.voice_generation,
            },
        ));
    }

    pub fn finish_voice_capture(&mut self, generation: u64) -> bool {
        if !self.listening || generation != self.voice_generation {
            return false;
        }
        self.input = VOICE_PHRASE.to_string();
        self.listening = false;
        self.voice_timer = None;
        true
    }

    pub(crate) fn expire_confirmation(&mut self, generation: u64) {
        self.confirmation.expire(generation);
    }

    fn append(&mut self, text: String, sender: Sender) -> MessageId {
        self.next_id += 1;
        let id = MessageId(self.next_id);
        self.messages.push(ChatMessage {
            id,
            text,
            sender,
            timestamp: Utc::now(),
        });
        id
    }
}

#[cfg(test)]
#[path = "tests/chat_tests.rs"]
mod tests;
