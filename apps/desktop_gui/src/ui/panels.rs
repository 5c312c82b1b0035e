use eframe::egui;

use crate::controller::{
    events::{FailureCategory, FailureNotice},
    presentation::{self, VerdictPanel, ViewModel},
};
use crate::ui::theme::{accent_color, failure_palette, tone_palette};

/// User intents collected while drawing a frame, applied after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Edit(String),
    Submit,
    Reset,
}

fn category_label(category: FailureCategory) -> &'static str {
    match category {
        FailureCategory::Unreachable => "Koneksi",
        FailureCategory::Timeout => "Batas waktu",
        FailureCategory::Service => "Layanan",
        FailureCategory::InvalidResponse => "Respons tidak valid",
        FailureCategory::LocalQueue => "Aplikasi",
    }
}

pub fn show_input(ui: &mut egui::Ui, view: &ViewModel<'_>, actions: &mut Vec<UiAction>) {
    let mut draft = view.input_text.to_string();
    let response = ui.add(
        egui::TextEdit::multiline(&mut draft)
            .hint_text(presentation::INPUT_PLACEHOLDER)
            .desired_rows(8)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        actions.push(UiAction::Edit(draft));
    }

    let submit_shortcut =
        ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));
    if response.has_focus() && submit_shortcut {
        actions.push(UiAction::Submit);
    }
}

pub fn show_controls(ui: &mut egui::Ui, view: &ViewModel<'_>, actions: &mut Vec<UiAction>) {
    let submit = view.submit;
    let label = egui::RichText::new(submit.label)
        .strong()
        .size(16.0)
        .color(egui::Color32::WHITE);
    let button = egui::Button::new(label)
        .fill(accent_color())
        .min_size(egui::vec2(ui.available_width(), 40.0));

    if ui.add_enabled(submit.enabled, button).clicked() {
        actions.push(UiAction::Submit);
    }

    ui.horizontal(|ui| {
        if submit.busy {
            ui.add(egui::Spinner::new());
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(view.reset_enabled, egui::Button::new(presentation::RESET_LABEL))
                .clicked()
            {
                actions.push(UiAction::Reset);
            }
        });
    });
}

pub fn show_verdict(ui: &mut egui::Ui, verdict: &VerdictPanel<'_>) {
    let palette = tone_palette(verdict.tone);
    egui::Frame::NONE
        .fill(palette.fill)
        .stroke(egui::Stroke::new(1.0, palette.stroke))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(20, 18))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(verdict.caption)
                        .size(16.0)
                        .color(palette.text),
                );
                ui.label(
                    egui::RichText::new(verdict.headline)
                        .size(28.0)
                        .strong()
                        .color(palette.text),
                );
                ui.add_space(6.0);
                ui.label(egui::RichText::new(verdict.advisory).color(palette.text));
            });
        });
}

pub fn show_failure_notice(ui: &mut egui::Ui, notice: &FailureNotice) {
    let palette = failure_palette();
    egui::Frame::NONE
        .fill(palette.fill)
        .stroke(egui::Stroke::new(1.0, palette.stroke))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(notice.headline()).color(palette.text));
            ui.small(
                egui::RichText::new(format!(
                    "{}: {}",
                    category_label(notice.category()),
                    notice.detail()
                ))
                .color(palette.text),
            );
        });
}

/// Returns true when the user dismissed the banner.
pub fn show_status_banner(ui: &mut egui::Ui, message: &str) -> bool {
    let palette = failure_palette();
    let mut dismissed = false;
    egui::Frame::NONE
        .fill(palette.fill)
        .stroke(egui::Stroke::new(1.0, palette.stroke))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(message).color(palette.text));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Tutup").clicked() {
                        dismissed = true;
                    }
                });
            });
        });
    dismissed
}
