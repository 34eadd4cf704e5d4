//! Chat window and modal dialogs drawn above whichever view is active.

use client_core::{modals, KioskController};
use eframe::egui;
use shared::domain::{DeliveryChannel, ModalKind, Sender};
use tracing::debug;

use crate::ui::theme;

pub fn show_chat(ctx: &egui::Context, kiosk: &mut KioskController) {
    if !kiosk.chat().is_open() {
        return;
    }

    let mut open = true;
    egui::Window::new("Chat with Faculty")
        .open(&mut open)
        .default_width(380.0)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .collapsible(false)
        .show(ctx, |ui| {
            let mut channel = kiosk.chat().channel();
            egui::ComboBox::from_label("Send via")
                .selected_text(channel.label())
                .show_ui(ui, |ui| {
                    for option in DeliveryChannel::ALL {
                        ui.selectable_value(&mut channel, option, option.label());
                    }
                });
            if channel != kiosk.chat().channel() {
                kiosk.set_delivery_channel(channel);
            }
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(260.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for message in kiosk.chat().messages() {
                        let (who, align) = match message.sender {
                            Sender::Student => ("You", egui::Align::Max),
                            Sender::Faculty => ("Faculty", egui::Align::Min),
                        };
                        let stamp = message
                            .timestamp
                            .with_timezone(&chrono::Local)
                            .format("%H:%M");
                        ui.with_layout(egui::Layout::top_down(align), |ui| {
                            ui.small(
                                egui::RichText::new(format!("{who} · {stamp}"))
                                    .color(theme::MUTED_TEXT),
                            );
                            ui.label(&message.text);
                        });
                        ui.add_space(4.0);
                    }
                });

            if let Some(banner) = kiosk.chat_confirmation() {
                let (_, stroke) = theme::banner_colors(banner.kind);
                ui.label(egui::RichText::new(&banner.message).color(stroke.color));
            }
            ui.separator();

            let listening = kiosk.chat().is_listening();
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(kiosk.chat_input_mut())
                        .hint_text("Type your message...")
                        .desired_width(220.0),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                let mic = if listening { "⏹ Listening" } else { "🎤" };
                if ui.button(mic).clicked() {
                    kiosk.toggle_voice();
                }
                let send = ui.add_enabled(kiosk.chat().can_send(), egui::Button::new("Send"));
                if send.clicked() || submitted {
                    kiosk.send_chat_message();
                }
            });
        });

    if !open {
        kiosk.close_chat();
    }
}

pub fn show_modal(ctx: &egui::Context, kiosk: &mut KioskController) {
    let Some(kind) = kiosk.active_modal() else {
        return;
    };
    let content = modals::content(kind);
    let classes_needed = kiosk.stats().classes_needed;
    let mut dismissed = false;

    egui::Window::new(egui::RichText::new(content.title).color(theme::severity_color(content.severity)))
        .id(egui::Id::new("kiosk_modal"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.label(content.body);
            if kind == ModalKind::ClassesNeeded {
                ui.label(
                    egui::RichText::new(format!("Classes needed: {classes_needed}"))
                        .size(24.0)
                        .strong(),
                );
            }
            if let Some(detail) = content.detail {
                ui.small(egui::RichText::new(detail).color(theme::MUTED_TEXT));
            }
            ui.add_space(8.0);
            if let Some(extra) = content.extra_label {
                if ui.button(extra).clicked() {
                    debug!(modal = kind.as_str(), action = extra, "modal action has no effect");
                }
            }
            if ui.button(content.dismiss_label).clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        kiosk.dismiss_modal();
    }
}
