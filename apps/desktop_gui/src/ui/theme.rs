use eframe::egui::{self, Color32};

use crate::controller::presentation::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TonePalette {
    pub fill: Color32,
    pub stroke: Color32,
    pub text: Color32,
}

pub fn tone_palette(tone: Tone) -> TonePalette {
    match tone {
        Tone::Warning => TonePalette {
            fill: Color32::from_rgb(254, 226, 226),
            stroke: Color32::from_rgb(248, 113, 113),
            text: Color32::from_rgb(153, 27, 27),
        },
        Tone::Stable => TonePalette {
            fill: Color32::from_rgb(220, 252, 231),
            stroke: Color32::from_rgb(74, 222, 128),
            text: Color32::from_rgb(22, 101, 52),
        },
    }
}

pub fn failure_palette() -> TonePalette {
    TonePalette {
        fill: Color32::from_rgb(111, 53, 53),
        stroke: Color32::from_rgb(175, 96, 96),
        text: Color32::WHITE,
    }
}

pub fn accent_color() -> Color32 {
    Color32::from_rgb(37, 99, 235)
}

pub fn lighten_color(c: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

pub fn apply_light_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = Color32::from_rgb(249, 250, 251);
    visuals.selection.bg_fill = lighten_color(accent_color(), 0.6);
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_and_stable_palettes_differ() {
        assert_ne!(tone_palette(Tone::Warning), tone_palette(Tone::Stable));
    }

    #[test]
    fn lighten_moves_towards_white() {
        let base = Color32::from_rgb(100, 0, 200);
        assert_eq!(lighten_color(base, 0.0), base);
        assert_eq!(lighten_color(base, 1.0), Color32::from_rgb(255, 255, 255));
        assert_eq!(lighten_color(base, 0.5), Color32::from_rgb(178, 128, 228));
    }
}
