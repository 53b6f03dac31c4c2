//! Immediate-mode UI: title, button grid, controls, picker and particles.
//!
//! [`draw`] only reads state. Everything the user did this frame comes back
//! as a list of [`UiEvent`]s that the app applies after the frame ends.

use egui::{Align2, Color32, FontId, Id, LayerId, Order};

use crate::palette::EmojiPalette;
use crate::particle::RenderParticle;

/// Glyph size of a particle, in points.
const PARTICLE_FONT_SIZE: f32 = 24.0;
const TITLE: &str = "Explodiemoji";
/// Seconds for the title hue to cycle once.
const RAINBOW_PERIOD: f64 = 8.0;

/// Something the user did during a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A grid button was pressed.
    Pressed(usize),
    /// An emoji was chosen in the open picker.
    Picked(String),
    /// The picker was dismissed without a choice.
    CancelPick,
    Clear,
    ToggleGravity,
}

/// Read-only state the UI is built from.
pub struct UiView<'a, I> {
    pub palette: &'a EmojiPalette,
    /// Slot being configured, if the picker is open.
    pub picking: Option<usize>,
    pub picker: &'a [String],
    pub gravity_enabled: bool,
    pub particles: I,
}

pub fn draw<'a, I>(ctx: &egui::Context, view: UiView<'a, I>) -> Vec<UiEvent>
where
    I: Iterator<Item = RenderParticle<'a>>,
{
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.inner_margin(80.0))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(rainbow_title(ctx.input(|i| i.time)));
                ui.add_space(32.0);
                button_grid(ui, view.palette, &mut events);
            });
        });

    controls(ctx, view.gravity_enabled, &mut events);

    if view.picking.is_some() {
        picker(ctx, view.picker, &mut events);
    }

    let painter = ctx.layer_painter(LayerId::new(Order::Middle, Id::new("particles")));
    for particle in view.particles {
        painter.text(
            egui::pos2(particle.x, particle.y),
            Align2::CENTER_CENTER,
            particle.emoji,
            FontId::proportional(PARTICLE_FONT_SIZE),
            Color32::DARK_GRAY.gamma_multiply(particle.opacity),
        );
    }

    events
}

/// The title with each letter a step further around the hue wheel.
fn rainbow_title(time: f64) -> egui::text::LayoutJob {
    let phase = (time % RAINBOW_PERIOD / RAINBOW_PERIOD) as f32;
    let letters = TITLE.chars().count() as f32;

    let mut job = egui::text::LayoutJob::default();
    for (i, ch) in TITLE.chars().enumerate() {
        let hue = (phase + i as f32 / letters).fract();
        let color: Color32 = egui::ecolor::Hsva::new(hue, 0.8, 0.9, 1.0).into();
        job.append(
            &ch.to_string(),
            0.0,
            egui::TextFormat {
                font_id: FontId::proportional(40.0),
                color,
                ..Default::default()
            },
        );
    }
    job
}

fn button_grid(ui: &mut egui::Ui, palette: &EmojiPalette, events: &mut Vec<UiEvent>) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
        for (index, button) in palette.buttons().iter().enumerate() {
            let text = egui::RichText::new(button.label()).size(24.0);
            let widget = egui::Button::new(text)
                .min_size(egui::vec2(48.0, 48.0))
                .corner_radius(24.0);
            if ui.add(widget).clicked() {
                events.push(UiEvent::Pressed(index));
            }
        }
    });
}

/// `[clear]` and `[gravity: on/off]`, pinned to the bottom-left corner.
fn controls(ctx: &egui::Context, gravity_enabled: bool, events: &mut Vec<UiEvent>) {
    egui::Area::new(Id::new("controls"))
        .anchor(Align2::LEFT_BOTTOM, egui::vec2(60.0, -60.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.visuals_mut().override_text_color = Some(Color32::GRAY);
                if ui.add(egui::Label::new("[clear]").sense(egui::Sense::click())).clicked() {
                    events.push(UiEvent::Clear);
                }
                let gravity = format!("[gravity: {}]", if gravity_enabled { "on" } else { "off" });
                if ui.add(egui::Label::new(gravity).sense(egui::Sense::click())).clicked() {
                    events.push(UiEvent::ToggleGravity);
                }
            });
        });
}

fn picker(ctx: &egui::Context, choices: &[String], events: &mut Vec<UiEvent>) {
    let mut picked = false;
    let modal = egui::Modal::new(Id::new("emoji_picker")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.heading("Pick an emoji");
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for emoji in choices {
                let text = egui::RichText::new(emoji).size(24.0);
                if ui.add(egui::Button::new(text).frame(false)).clicked() {
                    events.push(UiEvent::Picked(emoji.clone()));
                    picked = true;
                }
            }
        });
        ui.add_space(8.0);
        if ui.button("Cancel").clicked() {
            events.push(UiEvent::CancelPick);
            picked = true;
        }
    });

    // Escape or a click on the dimmed backdrop
    if !picked && modal.should_close() {
        events.push(UiEvent::CancelPick);
    }
}
