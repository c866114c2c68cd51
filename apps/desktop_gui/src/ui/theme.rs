//! Red-accent board theme and text scaling helpers.

use std::collections::BTreeMap;

use egui::{Color32, FontFamily, FontId, TextStyle};

/// The board's signature red, lifted from the original styling.
pub const BOARD_RED: Color32 = Color32::from_rgb(178, 24, 28);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardTheme {
    pub accent: Color32,
    pub text_scale: f32,
}

impl Default for BoardTheme {
    fn default() -> Self {
        Self {
            accent: BOARD_RED,
            text_scale: 1.0,
        }
    }
}

pub fn lighten_color(c: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

pub fn scaled_text_styles(scale: f32) -> BTreeMap<TextStyle, FontId> {
    let scale = scale.clamp(0.8, 1.6);
    [
        (
            TextStyle::Heading,
            FontId::new(24.0 * scale, FontFamily::Proportional),
        ),
        (
            TextStyle::Body,
            FontId::new(14.0 * scale, FontFamily::Proportional),
        ),
        (
            TextStyle::Button,
            FontId::new(14.0 * scale, FontFamily::Proportional),
        ),
        (
            TextStyle::Small,
            FontId::new(11.0 * scale, FontFamily::Proportional),
        ),
        (
            TextStyle::Monospace,
            FontId::new(13.0 * scale, FontFamily::Monospace),
        ),
    ]
    .into_iter()
    .collect()
}

/// Applies the theme to the whole context. Called only when the theme
/// actually changed; `ctx.set_style` invalidates layout caches.
pub fn apply(ctx: &egui::Context, theme: BoardTheme) {
    let mut style = (*ctx.style()).clone();
    style.text_styles = scaled_text_styles(theme.text_scale);
    style.visuals.selection.bg_fill = theme.accent;
    style.visuals.hyperlink_color = lighten_color(theme.accent, 0.25);
    style.visuals.widgets.hovered.bg_stroke =
        egui::Stroke::new(1.0, lighten_color(theme.accent, 0.4));
    style.visuals.widgets.active.bg_stroke = egui::Stroke::new(1.2, theme.accent);
    ctx.set_style(style);
}
