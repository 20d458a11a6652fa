// Main application layout
// Header, navigation panel, landing page, floating chat window, and toasts

use eframe::egui;
use std::time::Instant;

use crate::chat::ChatBridge;
use crate::state::{AppState, Section, QUICK_REPLIES};
use crate::ui::components::*;

/// Feature cards as (icon, title, body)
const FEATURES: [(&str, &str, &str); 3] = [
    ("💧", "Watering plans", "Schedules tuned to each crop and season."),
    ("☀️", "Sunlight tracking", "Know which corner of the roof suits a plant."),
    ("🐛", "Pest alerts", "Early signs and organic remedies."),
];

/// About cards as (icon, title, body)
const ABOUT: [(&str, &str, &str); 2] = [
    ("🏙️", "Built for cities", "Container crops, raised beds, and balcony pots."),
    ("🤖", "AI assistant", "GreenBot answers from a curated plant knowledge base."),
];

/// Render the whole page for one frame
pub fn render_app_layout(ctx: &egui::Context, state: &mut AppState, bridge: &mut ChatBridge) {
    let now = Instant::now();
    // The click that opens the chat must not also close it
    let was_open = state.chat.open;

    let screen = ctx.screen_rect().size();
    state.ui_state.observe_window_size((screen.x, screen.y));

    render_header(ctx, state);
    render_nav(ctx, state);
    render_landing(ctx, state, now);

    let toggle_rect = render_chat_toggle(ctx, state);
    let window_rect = render_chat_window(ctx, state, bridge, now);
    close_chat_on_outside_click(ctx, state, was_open, toggle_rect, window_rect);

    render_toasts(ctx, state, now);
}

/// Top header with hamburger button; hidden while scrolling down
fn render_header(ctx: &egui::Context, state: &mut AppState) {
    let visible = state.header.is_visible();
    egui::TopBottomPanel::top("header").show_animated(ctx, visible, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("☰").on_hover_text("Menu").clicked() {
                state.ui_state.toggle_nav();
            }
            ui.add_space(8.0);
            ui.heading(egui::RichText::new("🌱 PlantCare AI").color(ACCENT_GREEN));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut dark_mode = ctx.style().visuals.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    let visuals = if dark_mode {
                        egui::Visuals::dark()
                    } else {
                        egui::Visuals::light()
                    };
                    ctx.set_visuals(visuals);
                }
            });
        });
        ui.add_space(6.0);
    });
}

/// Collapsible navigation panel
fn render_nav(ctx: &egui::Context, state: &mut AppState) {
    let open = state.ui_state.nav_visible;
    egui::SidePanel::left("nav_panel")
        .resizable(false)
        .default_width(180.0)
        .show_animated(ctx, open, |ui| {
            ui.add_space(8.0);
            ui.heading("Menu");
            ui.separator();
            for section in Section::ALL {
                if ui.selectable_label(false, section.label()).clicked() {
                    state.ui_state.navigate_to(section);
                }
            }
        });
}

/// Scrollable landing page: hero, features, statistics, about
fn render_landing(ctx: &egui::Context, state: &mut AppState, now: Instant) {
    let target = state.ui_state.take_scroll_target();

    egui::CentralPanel::default().show(ctx, |ui| {
        let output = egui::ScrollArea::vertical()
            .id_source("landing_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    let hero = egui::RichText::new("Smart care for rooftop gardens").size(30.0);
                    section_heading(ui, hero, Section::Home, target);
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "Ask GreenBot about watering, sunlight, pests, and what to plant next.",
                        )
                        .size(15.0),
                    );
                    ui.add_space(16.0);
                    if primary_button(ui, "Chat with GreenBot").clicked() {
                        state.chat.open = true;
                    }
                });

                ui.add_space(48.0);
                section_heading(ui, "Features", Section::Features, target);
                ui.add_space(12.0);
                ui.horizontal_wrapped(|ui| {
                    for (icon, title, body) in FEATURES {
                        let key = format!("features/{title}");
                        revealed(ui, &mut state.reveal, &key, |ui, _| {
                            info_card(ui, icon, title, body)
                        });
                    }
                });

                ui.add_space(48.0);
                section_heading(ui, "Impact", Section::Impact, target);
                ui.add_space(12.0);
                ui.horizontal_wrapped(|ui| {
                    for (i, counter) in state.stats.iter_mut().enumerate() {
                        let key = format!("impact/{i}");
                        revealed(ui, &mut state.reveal, &key, |ui, t| {
                            stat_tile(ui, counter, now, t)
                        });
                        ui.add_space(16.0);
                    }
                });

                ui.add_space(48.0);
                section_heading(ui, "About", Section::About, target);
                ui.add_space(12.0);
                ui.horizontal_wrapped(|ui| {
                    for (icon, title, body) in ABOUT {
                        let key = format!("about/{title}");
                        revealed(ui, &mut state.reveal, &key, |ui, _| {
                            info_card(ui, icon, title, body)
                        });
                    }
                });
                ui.add_space(120.0);
            });

        state.header.on_scroll(output.state.offset.y);
    });

    if state.stats_animating(now) {
        ctx.request_repaint();
    }
}

/// Section heading that the page scrolls to when its section was picked
fn section_heading(
    ui: &mut egui::Ui,
    text: impl Into<egui::RichText>,
    section: Section,
    target: Option<Section>,
) {
    let response = ui.heading(text);
    if target == Some(section) {
        response.scroll_to_me(Some(egui::Align::TOP));
    }
}

/// Floating round button in the bottom-right corner; returns its rect
fn render_chat_toggle(ctx: &egui::Context, state: &mut AppState) -> egui::Rect {
    egui::Area::new(egui::Id::new("chat_toggle"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-20.0, -20.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let label = if state.chat.open { "✖" } else { "🌱" };
            let button = egui::Button::new(egui::RichText::new(label).size(24.0))
                .fill(ACCENT_GREEN)
                .rounding(28.0)
                .min_size(egui::vec2(56.0, 56.0));
            if ui.add(button).on_hover_text("Chat with GreenBot").clicked() {
                state.chat.toggle();
            }
        })
        .response
        .rect
}

/// Chat window above the toggle button; returns its rect when open
fn render_chat_window(
    ctx: &egui::Context,
    state: &mut AppState,
    bridge: &mut ChatBridge,
    now: Instant,
) -> Option<egui::Rect> {
    if !state.chat.open {
        return None;
    }

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        state.chat.close();
        return None;
    }

    let inner = egui::Window::new("GreenBot")
        .id(egui::Id::new("chat_window"))
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::RIGHT_BOTTOM, [-20.0, -90.0])
        .fixed_size([360.0, 460.0])
        .show(ctx, |ui| {
            render_chat_header(ui, state);
            ui.separator();
            render_chat_messages(ui, bridge);
            ui.separator();
            render_quick_replies(ui, state, bridge, now);
            render_chat_input(ui, state, bridge);
        });

    inner.map(|inner| inner.response.rect)
}

fn render_chat_header(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("🌱").size(22.0));
        ui.vertical(|ui| {
            ui.label(egui::RichText::new("GreenBot").strong());
            ui.label(egui::RichText::new("Plant care assistant").small().weak());
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✖").on_hover_text("Close").clicked() {
                state.chat.close();
            }
        });
    });
}

fn render_chat_messages(ui: &mut egui::Ui, bridge: &ChatBridge) {
    egui::ScrollArea::vertical()
        .id_source("chat_messages")
        .auto_shrink([false; 2])
        .max_height(320.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if bridge.turns().is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(
                        egui::RichText::new("Hi! Ask me anything about your rooftop garden.")
                            .italics()
                            .weak(),
                    );
                });
            }
            for turn in bridge.turns() {
                message_bubble(ui, turn);
            }
            if bridge.is_pending() {
                typing_indicator(ui);
            }
        });
}

fn render_quick_replies(
    ui: &mut egui::Ui,
    state: &mut AppState,
    bridge: &mut ChatBridge,
    now: Instant,
) {
    if !state.chat.quick_replies_visible(now) {
        ui.ctx().request_repaint_after(crate::state::app_state::QUICK_REPLY_COOLDOWN);
        return;
    }

    let enabled = !bridge.is_pending();
    ui.horizontal_wrapped(|ui| {
        for reply in QUICK_REPLIES {
            if quick_reply_button(ui, reply, enabled).clicked() && bridge.submit(reply) {
                state.chat.hide_quick_replies(now);
            }
        }
    });
}

fn render_chat_input(ui: &mut egui::Ui, state: &mut AppState, bridge: &mut ChatBridge) {
    ui.horizontal(|ui| {
        let can_send = state.chat.can_send(bridge.is_pending());
        let send_width = 56.0;

        let edit = ui.add(
            egui::TextEdit::singleline(&mut state.chat.input)
                .hint_text("Ask about your plants...")
                .desired_width(ui.available_width() - send_width),
        );
        let enter_pressed = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let send = ui.add_enabled(
            can_send,
            egui::Button::new(egui::RichText::new("Send").strong()).fill(ACCENT_GREEN),
        );

        if (send.clicked() || enter_pressed) && can_send {
            let message = state.chat.take_input();
            bridge.submit(&message);
            edit.request_focus();
        }
    });
}

/// A click outside both the chat window and its toggle closes the window
///
/// `was_open` is the window state at the start of the frame, so the click
/// that opened the chat does not close it again.
fn close_chat_on_outside_click(
    ctx: &egui::Context,
    state: &mut AppState,
    was_open: bool,
    toggle_rect: egui::Rect,
    window_rect: Option<egui::Rect>,
) {
    let Some(window_rect) = window_rect else {
        return;
    };
    if !was_open {
        return;
    }

    let outside_click = ctx.input(|i| {
        i.pointer.any_click()
            && i.pointer
                .interact_pos()
                .is_some_and(|pos| !window_rect.contains(pos) && !toggle_rect.contains(pos))
    });

    if outside_click {
        state.chat.close();
    }
}

/// Visible toasts stacked in the top-right corner
fn render_toasts(ctx: &egui::Context, state: &mut AppState, now: Instant) {
    state.notifications.prune(now);
    if state.notifications.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_TOP, [-20.0, 20.0])
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            for item in state.notifications.visible(now) {
                toast(ui, item);
                ui.add_space(8.0);
            }
        });

    if let Some(wait) = state.notifications.next_change(now) {
        ctx.request_repaint_after(wait);
    }
}
