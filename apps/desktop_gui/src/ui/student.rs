use client_core::{CameraStatus, KioskController};
use eframe::egui;
use shared::domain::{Gesture, ModalKind, ATTENDANCE_TARGET_PERCENT};

use crate::ui::theme;

pub fn show(ctx: &egui::Context, kiosk: &mut KioskController) {
    egui::CentralPanel::default().show(ctx, |ui| {
        show_notification(ui, kiosk);
        ui.add_space(8.0);
        ui.columns(2, |columns| {
            show_camera(&mut columns[0], kiosk);
            columns[0].add_space(12.0);
            show_gestures(&mut columns[0], kiosk);
            show_quick_stats(&mut columns[1], kiosk);
        });
    });
}

fn show_notification(ui: &mut egui::Ui, kiosk: &KioskController) {
    let Some(banner) = kiosk.notification() else {
        return;
    };
    let (fill, stroke) = theme::banner_colors(banner.kind);
    egui::Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
        });
}

fn show_camera(ui: &mut egui::Ui, kiosk: &KioskController) {
    let (text, color) = match kiosk.camera_status() {
        Some(CameraStatus::Live) => ("● Camera live, watching for gestures", theme::attendance_color(true)),
        Some(CameraStatus::Unavailable) => ("Camera unavailable", theme::MUTED_TEXT),
        None => ("Camera idle", theme::MUTED_TEXT),
    };
    egui::Frame::NONE
        .fill(theme::CAMERA_BACKGROUND)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_height(240.0);
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new(text).color(color));
            });
        });
}

fn show_gestures(ui: &mut egui::Ui, kiosk: &mut KioskController) {
    ui.label(egui::RichText::new("Gestures").strong());
    ui.horizontal_wrapped(|ui| {
        for gesture in Gesture::ALL {
            let button = egui::Button::new(format!("{} {}", gesture.emoji(), gesture.label()))
                .min_size(egui::vec2(140.0, 36.0));
            if ui
                .add(button)
                .on_hover_text(gesture.description())
                .clicked()
            {
                kiosk.activate_gesture(gesture.name());
            }
        }
    });
    ui.small(egui::RichText::new("V shows your stats").color(theme::MUTED_TEXT));
}

fn show_quick_stats(ui: &mut egui::Ui, kiosk: &mut KioskController) {
    let stats = *kiosk.stats();
    let mut open_classes_needed = false;

    theme::card().show(ui, |ui| {
        ui.label(egui::RichText::new("Quick Stats").strong());
        ui.label(
            egui::RichText::new(format!("{:.0}%", stats.current_percentage))
                .size(36.0)
                .color(theme::attendance_color(stats.meets_target())),
        );
        ui.add(egui::ProgressBar::new(stats.progress_fraction()).text(format!(
            "target {ATTENDANCE_TARGET_PERCENT:.0}%"
        )));
        ui.label(format!(
            "{} of {} classes attended",
            stats.classes_attended, stats.total_classes
        ));
        if ui
            .button(format!("Need for 75%: {} classes", stats.classes_needed))
            .clicked()
        {
            open_classes_needed = true;
        }
    });

    if open_classes_needed {
        kiosk.open_modal(ModalKind::ClassesNeeded);
    }
}
