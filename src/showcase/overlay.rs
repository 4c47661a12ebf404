use egui::{Align2, Color32, Frame, Margin, RichText, Stroke};

use super::keyframe::{Align, Caption, CaptionBody};
use super::page::PageFrame;
use crate::config::ShowcaseConfig;

const TITLE_COLOR: Color32 = Color32::WHITE;
const SUBTITLE_COLOR: Color32 = Color32::from_rgb(0xFF, 0xD6, 0x00);
const TITLE_SIZE: f32 = 80.0;
const SUBTITLE_SIZE: f32 = 24.0;
const CAPTION_TEXT_SIZE: f32 = 17.6;
const CAPTION_MAX_WIDTH: f32 = 340.0;
/// Captions below this opacity ignore the pointer
const INTERACTIVE_OPACITY: f32 = 0.01;

/// Hero title plus one caption box per keyframe, drawn over the model
pub struct CaptionOverlay {
    title: String,
    subtitle: String,
    captions: Vec<(Caption, Align)>,
}

impl CaptionOverlay {
    pub fn new(config: &ShowcaseConfig) -> Self {
        Self {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            captions: config
                .showcase
                .keyframes()
                .iter()
                .map(|k| (k.caption.clone(), k.align))
                .collect(),
        }
    }

    pub fn show(&self, ctx: &egui::Context, frame: &PageFrame) {
        #[allow(deprecated)]
        let screen = ctx.screen_rect();

        self.show_hero(ctx, screen, frame.hero_opacity);

        if !frame.captions_visible {
            return;
        }

        for (i, ((caption, align), &opacity)) in self
            .captions
            .iter()
            .zip(&frame.caption_opacities)
            .enumerate()
        {
            let anchor = egui::pos2(
                screen.left() + screen.width() * align.anchor_fraction(),
                screen.center().y,
            );

            egui::Area::new(egui::Id::new(("caption", i)))
                .fixed_pos(anchor)
                .pivot(Align2::CENTER_CENTER)
                .interactable(opacity > INTERACTIVE_OPACITY)
                .show(ctx, |ui| {
                    ui.multiply_opacity(opacity);
                    caption_box(ui, caption);
                });
        }
    }

    fn show_hero(&self, ctx: &egui::Context, screen: egui::Rect, opacity: f32) {
        let x = screen.left() + screen.width() * 0.27;

        egui::Area::new(egui::Id::new("hero_subtitle"))
            .fixed_pos(egui::pos2(x, screen.top() + screen.height() * 0.13))
            .pivot(Align2::CENTER_BOTTOM)
            .interactable(false)
            .show(ctx, |ui| {
                ui.multiply_opacity(opacity);
                ui.label(
                    RichText::new(&self.subtitle)
                        .size(SUBTITLE_SIZE)
                        .color(SUBTITLE_COLOR),
                );
            });

        egui::Area::new(egui::Id::new("hero_title"))
            .fixed_pos(egui::pos2(x, screen.top() + screen.height() * 0.20))
            .pivot(Align2::CENTER_BOTTOM)
            .interactable(false)
            .show(ctx, |ui| {
                ui.multiply_opacity(opacity);
                ui.label(RichText::new(&self.title).size(TITLE_SIZE).color(TITLE_COLOR));
            });
    }
}

fn caption_box(ui: &mut egui::Ui, caption: &Caption) {
    Frame::new()
        .fill(Color32::from_black_alpha(128))
        .stroke(Stroke::new(0.5, Color32::WHITE))
        .corner_radius(8.0)
        .inner_margin(Margin::symmetric(32, 19))
        .show(ui, |ui| {
            ui.set_max_width(CAPTION_MAX_WIDTH);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(&caption.title)
                        .size(CAPTION_TEXT_SIZE)
                        .strong()
                        .color(Color32::WHITE),
                );
            });

            match &caption.body {
                CaptionBody::Text(text) => {
                    ui.vertical_centered(|ui| {
                        ui.label(body_text(text));
                    });
                }
                CaptionBody::Bullets(items) => {
                    for item in items {
                        ui.label(body_text(&format!("• {item}")));
                    }
                }
            }
        });
}

fn body_text(text: &str) -> RichText {
    RichText::new(text)
        .size(CAPTION_TEXT_SIZE)
        .color(Color32::WHITE)
}
