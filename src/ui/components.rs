// Reusable UI components
// Message bubbles, typing indicator, stat counters, reveal wrapper, and toasts

use eframe::egui;
use std::time::Instant;

use crate::chat::{Author, ConversationTurn};
use crate::state::reveal::{REVEAL_DURATION_SECS, REVEAL_SLIDE};
use crate::state::{RevealAnimator, StatCounter, Toast, ToastKind};

/// Accent green used for the assistant, buttons, and success toasts
pub const ACCENT_GREEN: egui::Color32 = egui::Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Background of informational toasts
const INFO_GRAY: egui::Color32 = egui::Color32::from_rgb(0x33, 0x33, 0x33);

/// Render one conversation turn as an avatar plus a bubble with text and time
/// User turns are right-aligned, assistant turns left-aligned
pub fn message_bubble(ui: &mut egui::Ui, turn: &ConversationTurn) {
    let (layout, fill, text_color) = match turn.author() {
        Author::User => (
            egui::Layout::right_to_left(egui::Align::TOP),
            ACCENT_GREEN,
            egui::Color32::WHITE,
        ),
        Author::Assistant => (
            egui::Layout::left_to_right(egui::Align::TOP),
            ui.visuals().faint_bg_color,
            ui.visuals().text_color(),
        ),
    };

    ui.with_layout(layout, |ui| {
        ui.label(egui::RichText::new(turn.author().avatar()).size(20.0));
        egui::Frame::none()
            .fill(fill)
            .rounding(10.0)
            .inner_margin(egui::Margin::same(8.0))
            .show(ui, |ui| {
                ui.set_max_width(240.0);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(turn.text()).color(text_color));
                    ui.label(
                        egui::RichText::new(turn.time_label())
                            .color(text_color)
                            .small()
                            .weak(),
                    );
                });
            });
    });
    ui.add_space(6.0);
}

/// Three pulsing dots shown while a reply is pending
pub fn typing_indicator(ui: &mut egui::Ui) {
    let time = ui.input(|i| i.time);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(Author::Assistant.avatar()).size(20.0));
        egui::Frame::none()
            .fill(ui.visuals().faint_bg_color)
            .rounding(10.0)
            .inner_margin(egui::Margin::symmetric(12.0, 10.0))
            .show(ui, |ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(36.0, 10.0), egui::Sense::hover());
                let color = ui.visuals().weak_text_color();
                for i in 0..3 {
                    // 1.4s cycle, each dot trailing the previous one by 0.16s
                    let phase = ((time + 0.16 * i as f64) % 1.4 / 1.4) as f32;
                    let pulse = 1.0 - (phase * 2.0 - 1.0).abs();
                    let radius = 3.2 + 0.8 * pulse;
                    let center = egui::pos2(rect.left() + 6.0 + 12.0 * i as f32, rect.center().y);
                    ui.painter()
                        .circle_filled(center, radius, color.gamma_multiply(0.5 + 0.5 * pulse));
                }
            });
    });
    ui.ctx().request_repaint();
}

/// Fade and slide `add_contents` in the first time it is on screen
///
/// `add_contents` gets the reveal progress in `0.0..=1.0` for any colors
/// it sets itself; text and frame strokes from the visuals fade on their own.
pub fn revealed<R>(
    ui: &mut egui::Ui,
    reveal: &mut RevealAnimator,
    key: &str,
    add_contents: impl FnOnce(&mut egui::Ui, f32) -> R,
) -> R {
    let t = ui.ctx().animate_bool_with_time(
        egui::Id::new(("reveal", key)),
        reveal.is_revealed(key),
        REVEAL_DURATION_SECS,
    );

    let inner = ui.vertical(|ui| {
        // Total height stays the same while the content slides up
        ui.add_space(REVEAL_SLIDE * (1.0 - t));
        let widgets = &mut ui.visuals_mut().widgets;
        for visuals in [&mut widgets.noninteractive, &mut widgets.active] {
            visuals.fg_stroke.color = visuals.fg_stroke.color.gamma_multiply(t);
            visuals.bg_stroke.color = visuals.bg_stroke.color.gamma_multiply(t);
        }
        let out = add_contents(ui, t);
        ui.add_space(REVEAL_SLIDE * t);
        out
    });

    reveal.observe(key, ui.is_rect_visible(inner.response.rect));
    inner.inner
}

/// Render a statistic counter, starting its animation once it is on screen
pub fn stat_tile(ui: &mut egui::Ui, counter: &mut StatCounter, now: Instant, opacity: f32) {
    let response = ui
        .vertical(|ui| {
            ui.set_min_width(140.0);
            ui.label(
                egui::RichText::new(counter.display(now))
                    .size(28.0)
                    .strong()
                    .color(ACCENT_GREEN.gamma_multiply(opacity)),
            );
            ui.label(egui::RichText::new(&counter.caption).weak());
        })
        .response;

    if !counter.is_started() && ui.is_rect_visible(response.rect) {
        counter.start(now);
    }
}

/// Card used for feature and info sections
pub fn info_card(ui: &mut egui::Ui, icon: &str, title: &str, body: &str) {
    ui.group(|ui| {
        ui.set_width(220.0);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(icon).size(28.0));
            ui.add_space(4.0);
            ui.label(egui::RichText::new(title).strong().size(16.0));
            ui.add_space(4.0);
            ui.label(egui::RichText::new(body).weak());
        });
    });
}

/// Render a primary action button
pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(text).strong().color(egui::Color32::WHITE))
            .fill(ACCENT_GREEN),
    )
}

/// Render a quick-reply chip
pub fn quick_reply_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    ui.add_enabled(
        enabled,
        egui::Button::new(egui::RichText::new(text).small()).rounding(12.0),
    )
}

/// Render a single toast
pub fn toast(ui: &mut egui::Ui, toast: &Toast) {
    let fill = match toast.kind {
        ToastKind::Success => ACCENT_GREEN,
        ToastKind::Info => INFO_GRAY,
    };
    egui::Frame::none()
        .fill(fill)
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(20.0, 16.0))
        .shadow(ui.visuals().popup_shadow)
        .show(ui, |ui| {
            ui.set_max_width(400.0);
            ui.label(
                egui::RichText::new(&toast.message)
                    .color(egui::Color32::WHITE)
                    .size(14.0),
            );
        });
}
