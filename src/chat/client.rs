// Remote chat client
// Sends one user message to the chat endpoint and extracts the reply text

use std::time::Duration;

use async_trait::async_trait;

use crate::chat::error::RemoteUnavailable;
use crate::chat::models::{ChatReply, ChatRequest};

/// Anything that can turn a user message into a reply
///
/// `ChatBridge` only talks to the network through this trait, so tests can
/// swap in scripted clients.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `message` and return the reply text
    async fn send(&self, message: String) -> Result<String, RemoteUnavailable>;
}

/// `ChatClient` that POSTs JSON to the configured `/chat` endpoint
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpChatClient {
    /// Build a client for `endpoint`
    ///
    /// `timeout` of `None` leaves requests unbounded; a request that never
    /// completes then keeps the bridge pending.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, RemoteUnavailable> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RemoteUnavailable::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    async fn send(&self, message: String) -> Result<String, RemoteUnavailable> {
        tracing::debug!(
            endpoint = %self.endpoint,
            message_len = message.len(),
            "Sending chat message"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { message: &message })
            .send()
            .await
            .map_err(|e| RemoteUnavailable::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteUnavailable::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RemoteUnavailable::Transport(e.to_string()))?;

        let reply: ChatReply = serde_json::from_str(&body)
            .map_err(|e| RemoteUnavailable::Malformed(e.to_string()))?;

        tracing::debug!(reply_len = reply.bot.len(), "Chat reply received");

        Ok(reply.bot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    async fn client_for(server: &Server) -> HttpChatClient {
        let endpoint = format!("{}/chat", server.url());
        HttpChatClient::new(endpoint, Some(Duration::from_secs(5))).unwrap()
    }

    #[tokio::test]
    async fn test_send_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({"message": "How often to water?"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"bot": "Water twice a week"}"#)
            .create_async()
            .await;

        let client = client_for(&server).await;
        let result = client.send("How often to water?".to_string()).await;

        mock.assert_async().await;
        assert_eq!(result.unwrap(), "Water twice a week");
    }

    #[tokio::test]
    async fn test_send_server_error_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat")
            .with_status(500)
            .with_body(r#"{"bot": "Error: model unavailable"}"#)
            .create_async()
            .await;

        let client = client_for(&server).await;
        let result = client.send("hello".to_string()).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RemoteUnavailable::Status(500))));
    }

    #[tokio::test]
    async fn test_send_missing_bot_field() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat")
            .with_status(200)
            .with_body(r#"{"reply": "wrong field"}"#)
            .create_async()
            .await;

        let client = client_for(&server).await;
        let result = client.send("hello".to_string()).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RemoteUnavailable::Malformed(_))));
    }

    #[tokio::test]
    async fn test_send_non_json_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = client_for(&server).await;
        let result = client.send("hello".to_string()).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RemoteUnavailable::Malformed(_))));
    }

    #[tokio::test]
    async fn test_send_connection_refused() {
        // Port 9 (discard) is not expected to have an HTTP listener
        let client =
            HttpChatClient::new("http://127.0.0.1:9/chat", Some(Duration::from_secs(2))).unwrap();
        let result = client.send("hello".to_string()).await;
        assert!(matches!(result, Err(RemoteUnavailable::Transport(_))));
    }

    #[test]
    fn test_new_without_timeout() {
        let client = HttpChatClient::new("http://127.0.0.1:5000/chat", None).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:5000/chat");
    }
}
