// Chat bridge
// Owns the conversation and the single in-flight request to the chat endpoint

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::chat::client::ChatClient;
use crate::chat::error::RemoteUnavailable;
use crate::chat::models::ConversationTurn;

/// Assistant text shown whenever the endpoint cannot produce a reply
pub const FALLBACK_MESSAGE: &str = "I'm having trouble connecting to my plant database right now. \
Please make sure the backend server is running. You can try asking about crops like \
'list crops' or specific plants like 'tomato general information'.";

/// Callback run from the request task once its reply is ready
pub type ReplyNotifier = Arc<dyn Fn() + Send + Sync>;

type Outcome = Result<String, RemoteUnavailable>;

/// Mediates between the chat window and the remote endpoint
///
/// Exactly one request may be outstanding. While a reply is awaited every
/// `submit` is dropped; once the reply (or the fallback) has been appended
/// the bridge accepts input again. Requests run on the tokio runtime behind
/// `runtime` so the UI thread never blocks.
pub struct ChatBridge {
    client: Arc<dyn ChatClient>,
    runtime: Handle,
    turns: Vec<ConversationTurn>,
    /// Present exactly while a reply is awaited
    in_flight: Option<oneshot::Receiver<Outcome>>,
    on_reply: Option<ReplyNotifier>,
}

impl ChatBridge {
    /// Create an idle bridge with an empty conversation
    pub fn new(client: Arc<dyn ChatClient>, runtime: Handle) -> Self {
        Self {
            client,
            runtime,
            turns: Vec::new(),
            in_flight: None,
            on_reply: None,
        }
    }

    /// Run `notify` whenever a reply arrives (e.g. to request a repaint)
    pub fn with_notifier(mut self, notify: ReplyNotifier) -> Self {
        self.on_reply = Some(notify);
        self
    }

    /// Conversation so far, oldest first
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Whether a reply is still awaited
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Submit user text
    ///
    /// Returns `false` without touching any state when the trimmed text is
    /// empty or a reply is still pending. Otherwise the user turn is appended
    /// immediately and the request is dispatched in the background.
    pub fn submit(&mut self, text: &str) -> bool {
        let message = text.trim();
        if message.is_empty() {
            return false;
        }
        if self.is_pending() {
            tracing::debug!("Reply still pending, dropping submission");
            return false;
        }

        self.turns.push(ConversationTurn::user(message));

        let (tx, rx) = oneshot::channel();
        let client = Arc::clone(&self.client);
        let on_reply = self.on_reply.clone();
        let message = message.to_string();

        self.runtime.spawn(async move {
            let outcome = client.send(message).await;
            // Receiver is gone only if the bridge itself was dropped
            let _ = tx.send(outcome);
            if let Some(notify) = on_reply {
                notify();
            }
        });
        self.in_flight = Some(rx);

        true
    }

    /// Finish the exchange if its reply has arrived, without blocking
    ///
    /// Returns `true` when an assistant turn was appended.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.in_flight.as_mut() else {
            return false;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => Err(RemoteUnavailable::Dropped),
        };

        self.in_flight = None;
        self.finish(outcome);
        true
    }

    /// Wait for the pending reply, if any, and finish the exchange
    ///
    /// Returns `true` when an assistant turn was appended.
    pub async fn settle(&mut self) -> bool {
        let Some(rx) = self.in_flight.take() else {
            return false;
        };

        let outcome = rx.await.unwrap_or(Err(RemoteUnavailable::Dropped));
        self.finish(outcome);
        true
    }

    fn finish(&mut self, outcome: Outcome) {
        let text = match outcome {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "Chat endpoint unavailable, showing fallback reply");
                FALLBACK_MESSAGE.to_string()
            }
        };
        self.turns.push(ConversationTurn::assistant(text));
    }
}
