use client_core::KioskController;
use eframe::egui;
use shared::domain::Gesture;

use crate::ui::theme;

pub fn show(ctx: &egui::Context, kiosk: &mut KioskController) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(egui::RichText::new("Attendify").size(42.0).strong());
            ui.label(
                egui::RichText::new("Touch-free attendance with face, gesture and voice")
                    .size(18.0)
                    .color(theme::MUTED_TEXT),
            );
            ui.add_space(24.0);

            for gesture in Gesture::ALL {
                ui.label(format!(
                    "{}  {}: {}",
                    gesture.emoji(),
                    gesture.label(),
                    gesture.description()
                ));
            }

            ui.add_space(24.0);
            let launch = egui::Button::new(egui::RichText::new("Launch demo").strong().size(18.0))
                .fill(theme::ACCENT)
                .min_size(egui::vec2(200.0, 44.0));
            if ui.add(launch).clicked() {
                kiosk.launch_demo();
            }
            ui.add_space(8.0);
            ui.small(
                egui::RichText::new("Shortcuts: C opens chat, T opens the teacher view")
                    .color(theme::MUTED_TEXT),
            );
        });
    });
}
