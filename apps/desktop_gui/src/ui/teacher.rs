use client_core::KioskController;
use eframe::egui;
use shared::domain::Student;

use crate::ui::theme;

pub fn show(ctx: &egui::Context, kiosk: &mut KioskController) {
    let summary = kiosk.teacher().summary();
    let ranked: Vec<Student> = kiosk.teacher().leaderboard().into_iter().cloned().collect();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Teacher Dashboard");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Back to student").clicked() {
                    kiosk.back_to_student();
                }
            });
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            summary_card(ui, "Present today", summary.total_present.to_string());
            summary_card(ui, "Class average", format!("{}%", summary.class_average));
            summary_card(ui, "Below 75%", summary.below_threshold.to_string());
        });
        ui.add_space(12.0);

        ui.label(egui::RichText::new("Leaderboard").strong());
        egui::Grid::new("teacher_leaderboard")
            .striped(true)
            .num_columns(5)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for header in ["#", "Student", "Attendance", "Classes", "Status"] {
                    ui.label(egui::RichText::new(header).color(theme::MUTED_TEXT));
                }
                ui.end_row();

                for (rank, student) in ranked.iter().enumerate() {
                    ui.label(format!("{}", rank + 1));
                    ui.label(&student.name);
                    ui.label(format!("{}%", student.attendance));
                    ui.label(format!("{}/{}", student.classes_attended, student.total_classes));
                    ui.label(
                        egui::RichText::new(student.status.badge())
                            .color(theme::status_color(student.status)),
                    );
                    ui.end_row();
                }
            });
    });
}

fn summary_card(ui: &mut egui::Ui, title: &str, value: String) {
    theme::card().show(ui, |ui| {
        ui.set_min_width(160.0);
        ui.label(egui::RichText::new(title).color(theme::MUTED_TEXT));
        ui.label(egui::RichText::new(value).size(28.0).strong());
    });
}
