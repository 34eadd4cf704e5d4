use std::time::Duration;

use client_core::KioskController;
use eframe::egui;
use shared::domain::ViewMode;
use tokio::runtime::Runtime;

use crate::controller::input;
use crate::ui::{landing, overlays, student, teacher, theme};

pub struct KioskApp {
    kiosk: KioskController,
    // Declared after the controller so the session tasks are aborted before
    // the runtime shuts down.
    _runtime: Runtime,
}

impl KioskApp {
    pub fn new(kiosk: KioskController, runtime: Runtime) -> Self {
        Self {
            kiosk,
            _runtime: runtime,
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("kiosk_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new("Attendify").color(theme::ACCENT).strong());
                ui.label(egui::RichText::new(self.kiosk.view().as_str()).color(theme::MUTED_TEXT));
                if self.kiosk.view() == ViewMode::Student {
                    ui.label(
                        egui::RichText::new(format!("Roll {}", self.kiosk.settings().roll_number))
                            .color(theme::MUTED_TEXT),
                    );
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("💬 Chat").clicked() {
                        self.kiosk.open_chat();
                    }
                    if self.kiosk.view() != ViewMode::Landing && ui.button("Home").clicked() {
                        self.kiosk.go_home();
                    }
                });
            });
        });
    }
}

impl eframe::App for KioskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for press in input::frame_key_presses(ctx) {
            self.kiosk.handle_key(&press);
        }
        self.kiosk.pump();

        self.show_header(ctx);
        match self.kiosk.view() {
            ViewMode::Landing => landing::show(ctx, &mut self.kiosk),
            ViewMode::Student => student::show(ctx, &mut self.kiosk),
            ViewMode::Teacher => teacher::show(ctx, &mut self.kiosk),
        }
        overlays::show_chat(ctx, &mut self.kiosk);
        overlays::show_modal(ctx, &mut self.kiosk);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
