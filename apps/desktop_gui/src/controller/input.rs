//! Translation from egui key events to kiosk key presses.

use client_core::{FocusTarget, KeyPress};
use eframe::egui;

pub fn translate(key: egui::Key, modifiers: egui::Modifiers, text_focused: bool) -> KeyPress {
    KeyPress {
        key: key.name().to_ascii_lowercase(),
        ctrl: modifiers.ctrl,
        meta: modifiers.mac_cmd,
        alt: modifiers.alt,
        focus: if text_focused {
            FocusTarget::TextInput
        } else {
            FocusTarget::Other
        },
    }
}

/// Key-down events of the current frame. Auto-repeats of a held key are
/// kept, each one fires its shortcut again.
pub fn frame_key_presses(ctx: &egui::Context) -> Vec<KeyPress> {
    let text_focused = ctx.wants_keyboard_input();
    ctx.input(|input| key_presses(&input.events, text_focused))
}

pub fn key_presses(events: &[egui::Event], text_focused: bool) -> Vec<KeyPress> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => Some(translate(*key, *modifiers, text_focused)),
            _ => None,
        })
        .collect()
}
