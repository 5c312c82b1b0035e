use std::time::Duration;

use crossbeam_channel::Receiver;
use eframe::egui;

use crate::controller::{
    events::UiEvent,
    orchestration::InteractionController,
    presentation::{self, project},
};
use crate::ui::{
    panels::{self, UiAction},
    theme::lighten_color,
};

#[derive(Debug, Clone)]
struct StatusBanner {
    message: String,
}

pub struct MoodScreenApp {
    controller: InteractionController,
    ui_rx: Receiver<UiEvent>,
    endpoint_label: String,
    status_banner: Option<StatusBanner>,
}

impl MoodScreenApp {
    pub fn new(
        controller: InteractionController,
        ui_rx: Receiver<UiEvent>,
        endpoint_label: impl Into<String>,
    ) -> Self {
        Self {
            controller,
            ui_rx,
            endpoint_label: endpoint_label.into(),
            status_banner: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ClassificationSettled { ticket, outcome } => {
                    self.controller.apply_backend_outcome(ticket, outcome);
                }
                UiEvent::BackendUnavailable(reason) => {
                    tracing::error!("backend unavailable: {reason}");
                    self.status_banner = Some(StatusBanner { message: reason });
                }
            }
        }
    }

    fn apply_actions(&mut self, actions: Vec<UiAction>) {
        for action in actions {
            match action {
                UiAction::Edit(text) => self.controller.edit_text(text),
                UiAction::Submit => self.controller.submit(),
                UiAction::Reset => self.controller.reset(),
            }
        }
    }

    fn show_main_card(&mut self, ctx: &egui::Context) -> Vec<UiAction> {
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_size();
            let card_width = avail.x.clamp(420.0, 680.0);
            ui.add_space((avail.y * 0.08).clamp(12.0, 60.0));

            ui.vertical_centered(|ui| {
                ui.set_width(card_width);

                egui::Frame::NONE
                    .fill(lighten_color(ui.visuals().panel_fill, 0.8))
                    .corner_radius(14.0)
                    .stroke(egui::Stroke::new(
                        1.0,
                        ui.visuals().widgets.noninteractive.bg_stroke.color,
                    ))
                    .inner_margin(egui::Margin::symmetric(24, 22))
                    .show(ui, |ui| {
                        ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);
                        ui.vertical_centered(|ui| {
                            ui.heading(egui::RichText::new(presentation::TITLE).strong());
                        });
                        ui.add_space(6.0);

                        if let Some(banner) = &self.status_banner {
                            if panels::show_status_banner(ui, &banner.message) {
                                self.status_banner = None;
                            }
                        }

                        let view = project(self.controller.state());
                        panels::show_input(ui, &view, &mut actions);
                        panels::show_controls(ui, &view, &mut actions);

                        if let Some(notice) = view.failure {
                            ui.add_space(8.0);
                            panels::show_failure_notice(ui, notice);
                        }
                        if let Some(verdict) = &view.verdict {
                            ui.add_space(12.0);
                            panels::show_verdict(ui, verdict);
                        }

                        ui.add_space(6.0);
                        ui.separator();
                        ui.horizontal_wrapped(|ui| {
                            ui.small("Layanan:");
                            ui.small(egui::RichText::new(&self.endpoint_label).weak());
                        });
                    });
            });
        });

        actions
    }
}

impl eframe::App for MoodScreenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let actions = self.show_main_card(ctx);
        self.apply_actions(actions);

        if self.controller.state().is_submitting() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
