//! View router for the kiosk: owns the top-level view, the overlays, and the
//! per-visit student session, and applies every timer or request completion
//! on the thread that owns it.

use std::sync::Arc;

use shared::{
    domain::{AttendanceStats, DeliveryChannel, ModalKind, ViewMode},
    protocol::AttendanceAck,
};
use tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver},
};
use tracing::{debug, error, info, warn};

use crate::{
    api::AttendanceApi,
    camera::CameraSource,
    chat::ChatPanel,
    config::KioskSettings,
    dashboard::{sample_stats, TeacherDashboard},
    decision::DecisionSource,
    demo::{DemoSequence, DEMO_PROMPT_PROBABILITY},
    error::ClientError,
    events::{BannerSlot, KioskEvent, SessionEpoch},
    gesture::{self, GestureAction, GestureExtension, MarkOutcome},
    keyboard::{InputBus, KeyPress, Shortcut, ShortcutScope, SubscriptionId},
    notify::{Banner, NotificationSlot, STATUS_BANNER_DURATION, WELCOME_BANNER_DURATION},
    timers::{Scheduler, TimerGuard},
    uploader::run_frame_uploader,
};

pub const WELCOME_DELAY: std::time::Duration = std::time::Duration::from_millis(1000);
pub const STATS_NOTICE: &str = "Viewing attendance statistics";
pub const MARKED_NOTICE: &str = "Attendance marked successfully";

pub struct KioskDeps {
    pub api: Arc<dyn AttendanceApi>,
    pub camera: Arc<dyn CameraSource>,
    pub decisions: Box<dyn DecisionSource>,
    pub extension: Box<dyn GestureExtension>,
    pub runtime: Handle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraStatus {
    Live,
    Unavailable,
}

/// Everything acquired on entering the student view. Dropping it cancels the
/// demo prompts, the welcome banner, and the frame uploader together, and
/// releases the camera held by the uploader.
struct StudentSession {
    epoch: SessionEpoch,
    subscription: SubscriptionId,
    camera: CameraStatus,
    demo: DemoSequence,
    _welcome: TimerGuard,
    _uploader: Option<TimerGuard>,
}

pub struct KioskController {
    settings: KioskSettings,
    api: Arc<dyn AttendanceApi>,
    camera: Arc<dyn CameraSource>,
    decisions: Box<dyn DecisionSource>,
    extension: Box<dyn GestureExtension>,
    scheduler: Scheduler,
    events: UnboundedReceiver<KioskEvent>,
    input: InputBus,
    view: ViewMode,
    active_modal: Option<ModalKind>,
    chat: ChatPanel,
    notification: NotificationSlot,
    stats: AttendanceStats,
    teacher: TeacherDashboard,
    session: Option<StudentSession>,
    last_epoch: u64,
}

impl KioskController {
    pub fn new(deps: KioskDeps, settings: KioskSettings) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut input = InputBus::default();
        input.subscribe(ShortcutScope::App);

        Self {
            settings,
            api: deps.api,
            camera: deps.camera,
            decisions: deps.decisions,
            extension: deps.extension,
            scheduler: Scheduler::new(deps.runtime, tx),
            events: rx,
            input,
            view: ViewMode::Landing,
            active_modal: None,
            chat: ChatPanel::new(),
            notification: NotificationSlot::new(BannerSlot::Status),
            stats: sample_stats(),
            teacher: TeacherDashboard::sample(),
            session: None,
            last_epoch: 0,
        }
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn settings(&self) -> &KioskSettings {
        &self.settings
    }

    pub fn stats(&self) -> &AttendanceStats {
        &self.stats
    }

    pub fn teacher(&self) -> &TeacherDashboard {
        &self.teacher
    }

    pub fn chat(&self) -> &ChatPanel {
        &self.chat
    }

    pub fn chat_input_mut(&mut self) -> &mut String {
        &mut self.chat.input
    }

    pub fn active_modal(&self) -> Option<ModalKind> {
        self.active_modal
    }

    pub fn notification(&self) -> Option<&Banner> {
        self.notification.visible()
    }

    pub fn chat_confirmation(&self) -> Option<&Banner> {
        self.chat.confirmation()
    }

    /// Camera state of the current student session, if one is active.
    pub fn camera_status(&self) -> Option<CameraStatus> {
        self.session.as_ref().map(|session| session.camera)
    }

    pub fn demo_prompts_pending(&self) -> usize {
        self.session
            .as_ref()
            .map(|session| session.demo.pending())
            .unwrap_or(0)
    }

    pub fn navigate(&mut self, target: ViewMode) {
        if target == self.view {
            return;
        }
        if self.view == ViewMode::Student {
            self.leave_student_view();
        }
        info!(from = self.view.as_str(), to = target.as_str(), "view changed");
        self.view = target;
        if target == ViewMode::Student {
            self.enter_student_view();
        }
    }

    pub fn launch_demo(&mut self) {
        self.navigate(ViewMode::Student);
    }

    pub fn go_home(&mut self) {
        self.navigate(ViewMode::Landing);
    }

    pub fn back_to_student(&mut self) {
        self.navigate(ViewMode::Student);
    }

    pub fn activate_gesture(&mut self, name: &str) {
        let action = gesture::resolve(name);
        debug!(gesture = name, action = ?action, "gesture activated");
        match action {
            GestureAction::ViewStats => self.request_stats(),
            GestureAction::MarkAttendance => {
                match gesture::draw_mark_outcome(self.decisions.as_mut()) {
                    MarkOutcome::Simulated(kind) => self.open_modal(kind),
                    MarkOutcome::Submit => self.submit_attendance(),
                }
            }
            GestureAction::OpenChat => self.chat.open(),
            GestureAction::SwitchToTeacher => self.navigate(ViewMode::Teacher),
            GestureAction::Forward(name) => self.extension.handle(&name),
        }
    }

    /// Returns whether the press triggered a shortcut.
    pub fn handle_key(&mut self, press: &KeyPress) -> bool {
        let Some(shortcut) = self.input.route(press) else {
            return false;
        };
        debug!(key = %press.key, shortcut = ?shortcut, "keyboard shortcut");
        match shortcut {
            Shortcut::OpenChat => self.chat.open(),
            Shortcut::TeacherView => self.navigate(ViewMode::Teacher),
            Shortcut::ViewStats => self.activate_gesture("peace"),
        }
        true
    }

    pub fn open_chat(&mut self) {
        self.chat.open();
    }

    pub fn close_chat(&mut self) {
        self.chat.close();
    }

    pub fn send_chat_message(&mut self) -> bool {
        self.chat.send(&self.scheduler)
    }

    pub fn toggle_voice(&mut self) {
        self.chat.toggle_voice(&self.scheduler);
    }

    pub fn set_delivery_channel(&mut self, channel: DeliveryChannel) {
        self.chat.set_channel(channel);
    }

    pub fn open_modal(&mut self, kind: ModalKind) {
        info!(modal = kind.as_str(), "modal opened");
        self.active_modal = Some(kind);
    }

    pub fn dismiss_modal(&mut self) {
        self.active_modal = None;
    }

    /// Applies every queued completion. Call from the thread that owns the
    /// controller, once per frame or after awaiting virtual time in tests.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    fn apply(&mut self, event: KioskEvent) {
        match event {
            KioskEvent::HideBanner { slot, generation } => match slot {
                BannerSlot::Status => {
                    self.notification.expire(generation);
                }
                BannerSlot::ChatConfirmation => self.chat.expire_confirmation(generation),
            },
            KioskEvent::WelcomeNotice { session } => {
                if self.is_current(session) {
                    self.notification.show(
                        &self.scheduler,
                        Banner::success(MARKED_NOTICE),
                        WELCOME_BANNER_DURATION,
                    );
                }
            }
            KioskEvent::DemoPrompt { session, modal } => {
                if self.is_current(session) && self.decisions.chance(DEMO_PROMPT_PROBABILITY) {
                    self.open_modal(modal);
                }
            }
            KioskEvent::FacultyReply => {
                self.chat.push_faculty_reply();
            }
            KioskEvent::VoiceCaptured { generation } => {
                self.chat.finish_voice_capture(generation);
            }
            KioskEvent::StatsLoaded { session, result } => match result {
                Ok(stats) => {
                    debug!(percent = stats.percent(), "attendance stats loaded");
                    if self.current_epoch() == session {
                        self.show_status(Banner::success(STATS_NOTICE));
                    }
                }
                Err(err) => error!(error = %err, "failed to load attendance stats"),
            },
            KioskEvent::AttendanceMarked { session, result } => {
                self.on_attendance_marked(session, result)
            }
            KioskEvent::FrameKeyDetected { session, key } => {
                if !self.is_current(session) {
                    return;
                }
                match key.as_str() {
                    "c" => self.chat.open(),
                    "t" => self.navigate(ViewMode::Teacher),
                    other => debug!(key = other, "ignoring detected key"),
                }
            }
        }
    }

    fn on_attendance_marked(
        &mut self,
        session: Option<SessionEpoch>,
        result: Result<AttendanceAck, ClientError>,
    ) {
        match result {
            Ok(ack) => debug!(message = %ack.message, "attendance marked"),
            Err(err) if err.is_transport() => {
                error!(error = %err, "failed to mark attendance");
                return;
            }
            // The banner does not depend on what the backend answered.
            Err(err) => warn!(error = %err, "mark attendance returned an unexpected body"),
        }
        // The view that asked has since been left.
        if self.current_epoch() != session {
            return;
        }
        self.show_status(Banner::success(MARKED_NOTICE));
    }

    fn show_status(&mut self, banner: Banner) {
        self.notification
            .show(&self.scheduler, banner, STATUS_BANNER_DURATION);
    }

    fn request_stats(&mut self) {
        let api = Arc::clone(&self.api);
        let roll_number = self.settings.roll_number.clone();
        let session = self.current_epoch();
        self.scheduler.request(async move {
            KioskEvent::StatsLoaded {
                session,
                result: api.stats(&roll_number).await,
            }
        });
    }

    fn submit_attendance(&mut self) {
        let api = Arc::clone(&self.api);
        let roll_number = self.settings.roll_number.clone();
        let session = self.current_epoch();
        self.scheduler.request(async move {
            KioskEvent::AttendanceMarked {
                session,
                result: api.mark_attendance(&roll_number, false).await,
            }
        });
    }

    /// Epoch of the live student session; `None` outside the student view.
    fn current_epoch(&self) -> Option<SessionEpoch> {
        self.session.as_ref().map(|session| session.epoch)
    }

    fn is_current(&self, epoch: SessionEpoch) -> bool {
        self.current_epoch() == Some(epoch)
    }

    fn enter_student_view(&mut self) {
        self.last_epoch += 1;
        let epoch = SessionEpoch(self.last_epoch);

        let (camera, uploader) = match self.camera.acquire() {
            Ok(grabber) => {
                let task = run_frame_uploader(
                    Arc::clone(&self.api),
                    grabber,
                    self.settings.frame_interval,
                    epoch,
                    self.scheduler.events(),
                );
                (CameraStatus::Live, Some(self.scheduler.scoped(task)))
            }
            Err(err) => {
                error!(error = %err, "camera unavailable; feed left blank");
                (CameraStatus::Unavailable, None)
            }
        };

        self.session = Some(StudentSession {
            epoch,
            subscription: self.input.subscribe(ShortcutScope::StudentView),
            camera,
            demo: DemoSequence::start(&self.scheduler, epoch),
            _welcome: self
                .scheduler
                .after(WELCOME_DELAY, KioskEvent::WelcomeNotice { session: epoch }),
            _uploader: uploader,
        });
        debug!(session = epoch.0, "student session started");
    }

    fn leave_student_view(&mut self) {
        if let Some(session) = self.session.take() {
            self.input.unsubscribe(session.subscription);
            debug!(session = session.epoch.0, "student session released");
        }
        self.notification.clear();
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
