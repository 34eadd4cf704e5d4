//! Keyboard shortcut routing.
//!
//! Views subscribe a [`ShortcutScope`] while mounted and drop the
//! subscription when they unmount, so a key is always resolved against the
//! scopes that are live at the moment it is pressed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    TextInput,
    TextArea,
    ContentEditable,
    #[default]
    Other,
}

impl FocusTarget {
    pub fn is_editable(self) -> bool {
        !matches!(self, FocusTarget::Other)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub focus: FocusTarget,
}

impl KeyPress {
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_focus(mut self, focus: FocusTarget) -> Self {
        self.focus = focus;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    fn has_modifier(&self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    OpenChat,
    TeacherView,
    ViewStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutScope {
    /// Bound for as long as the app is mounted.
    App,
    /// Bound only while the student dashboard is mounted.
    StudentView,
}

impl ShortcutScope {
    fn bind(self, key: &str) -> Option<Shortcut> {
        match (self, key) {
            (ShortcutScope::App, "c") => Some(Shortcut::OpenChat),
            (ShortcutScope::App, "t") => Some(Shortcut::TeacherView),
            (ShortcutScope::StudentView, "v") => Some(Shortcut::ViewStats),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Default)]
pub struct InputBus {
    next_id: u64,
    subscriptions: Vec<(SubscriptionId, ShortcutScope)>,
}

impl InputBus {
    pub fn subscribe(&mut self, scope: ShortcutScope) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscriptions.push((id, scope));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|(existing, _)| *existing != id);
        self.subscriptions.len() != before
    }

    /// Resolves a key press. Presses aimed at editable fields and presses
    /// carrying ctrl/meta/alt are ignored.
    pub fn route(&self, press: &KeyPress) -> Option<Shortcut> {
        if press.focus.is_editable() || press.has_modifier() {
            return None;
        }
        let key = press.key.to_lowercase();
        self.subscriptions
            .iter()
            .find_map(|(_, scope)| scope.bind(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_bus() -> InputBus {
        let mut bus = InputBus::default();
        bus.subscribe(ShortcutScope::App);
        bus
    }

    #[test]
    fn routes_app_shortcuts_case_insensitively() {
        let bus = app_bus();
        assert_eq!(bus.route(&KeyPress::plain("c")), Some(Shortcut::OpenChat));
        assert_eq!(bus.route(&KeyPress::plain("T")), Some(Shortcut::TeacherView));
        assert_eq!(bus.route(&KeyPress::plain("x")), None);
    }

    #[test]
    fn ignores_editable_focus_and_modifiers() {
        let bus = app_bus();
        for focus in [
            FocusTarget::TextInput,
            FocusTarget::TextArea,
            FocusTarget::ContentEditable,
        ] {
            assert_eq!(bus.route(&KeyPress::plain("c").with_focus(focus)), None);
        }
        assert_eq!(bus.route(&KeyPress::plain("c").with_ctrl()), None);
    }

    #[test]
    fn student_shortcut_follows_subscription() {
        let mut bus = app_bus();
        assert_eq!(bus.route(&KeyPress::plain("v")), None);

        let id = bus.subscribe(ShortcutScope::StudentView);
        assert_eq!(bus.route(&KeyPress::plain("v")), Some(Shortcut::ViewStats));

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        assert_eq!(bus.route(&KeyPress::plain("v")), None);
    }
}
