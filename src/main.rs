// PlantCare AI - GUI Entry Point
// Native landing page with the GreenBot chat widget

mod chat;
mod config;
mod state;
mod ui;

use std::sync::Arc;
use std::time::Instant;

use chat::{ChatBridge, HttpChatClient};
use config::Config;
use eframe::egui;
use state::AppState;
use tracing::info;
use ui::render_app_layout;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    info!(?config, "Configuration loaded");

    // Chat requests run here; the UI thread only polls for their results
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;
    let client = Arc::new(HttpChatClient::new(
        config.chat_api_url.clone(),
        config.chat_timeout(),
    )?);
    info!(endpoint = client.endpoint(), "Chat client ready");
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PlantCare AI")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PlantCare AI",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let bridge = ChatBridge::new(client, handle)
                .with_notifier(Arc::new(move || ctx.request_repaint()));
            Box::new(GreenBotApp::new(bridge))
        }),
    )?;

    info!("PlantCare AI GUI closed");
    Ok(())
}

/// Main application struct
/// Owns the page state and the chat bridge for this session
struct GreenBotApp {
    /// Page state (navigation, counters, chat window, toasts)
    state: AppState,
    /// Conversation with the remote chat endpoint
    bridge: ChatBridge,
}

impl GreenBotApp {
    fn new(bridge: ChatBridge) -> Self {
        let mut state = AppState::new();
        state.schedule_welcome(Instant::now());
        info!("PlantCare AI application initialized");
        Self { state, bridge }
    }
}

impl eframe::App for GreenBotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.bridge.poll();
        render_app_layout(ctx, &mut self.state, &mut self.bridge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Author;

    #[tokio::test]
    async fn test_app_creation() {
        let client = Arc::new(HttpChatClient::new("http://127.0.0.1:9/chat", None).unwrap());
        let app = GreenBotApp::new(ChatBridge::new(client, tokio::runtime::Handle::current()));

        assert!(app.bridge.turns().is_empty());
        assert!(!app.bridge.is_pending());
        assert!(!app.state.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_shows_fallback() {
        let client = Arc::new(
            HttpChatClient::new("http://127.0.0.1:9/chat", Some(std::time::Duration::from_secs(2)))
                .unwrap(),
        );
        let mut app = GreenBotApp::new(ChatBridge::new(client, tokio::runtime::Handle::current()));

        assert!(app.bridge.submit("list crops"));
        app.bridge.settle().await;

        let turns = app.bridge.turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].author(), Author::Assistant);
        assert_eq!(turns[1].text(), chat::bridge::FALLBACK_MESSAGE);
    }
}
