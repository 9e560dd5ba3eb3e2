//! Seller/admin conversation synchronization.
//!
//! The transcript is owned by the server; this controller holds a
//! read-only copy and replaces it wholesale after every send. There is no
//! pagination, no incremental merge, and no last-seen tracking.
//!
//! Send flow: `Idle -> Sending -> (Refreshing -> Idle | Idle)`. A failed
//! send is logged and leaves the input text intact for resubmission; the
//! flow deliberately surfaces no notification there.

use shopfront_core::ChatMessage;

use crate::api::ShopApi;
use crate::session::SessionToken;

/// Where the controller is in the send/refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Idle,
    Sending,
    Refreshing,
}

/// One side of the two-party seller/admin conversation.
pub struct ChatController<A: ShopApi> {
    api: A,
    token: SessionToken,
    /// Subject hint decoded once from the token; `None` when the token is
    /// malformed, which makes every message render as "not mine".
    subject: Option<String>,
    transcript: Vec<ChatMessage>,
    input: String,
    state: SyncState,
}

impl<A: ShopApi> ChatController<A> {
    #[must_use]
    pub fn new(api: A, token: SessionToken) -> Self {
        let subject = token.subject_hint();
        Self {
            api,
            token,
            subject,
            transcript: Vec::new(),
            input: String::new(),
            state: SyncState::default(),
        }
    }

    /// The visible transcript, in server order.
    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Current input field contents.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    #[must_use]
    pub const fn state(&self) -> SyncState {
        self.state
    }

    /// Whether a message was sent by this side of the conversation.
    ///
    /// Compares the sender as text against the token's subject hint.
    #[must_use]
    pub fn is_mine(&self, message: &ChatMessage) -> bool {
        self.subject.as_deref() == Some(message.sender_id.as_str())
    }

    /// Send the current input. Both the send button and the Enter key in
    /// the input field route here.
    ///
    /// Whitespace-only input is a no-op with zero network calls. On
    /// success the input clears and the whole transcript is refetched; on
    /// failure the input stays for resubmission and the error is logged.
    pub async fn send(&mut self) {
        let text = self.input.trim().to_owned();
        if text.is_empty() {
            return;
        }

        self.state = SyncState::Sending;
        match self.api.send_to_admin(&self.token, &text).await {
            Ok(()) => {
                self.input.clear();
                self.state = SyncState::Refreshing;
                self.refresh().await;
            }
            Err(error) => tracing::error!(%error, "failed to send chat message"),
        }
        self.state = SyncState::Idle;
    }

    /// Fetch the full transcript and replace the in-memory copy.
    ///
    /// On failure the previous transcript is kept and the error logged.
    pub async fn refresh(&mut self) {
        match self.api.conversation(&self.token).await {
            Ok(messages) => self.transcript = messages,
            Err(error) => tracing::error!(%error, "failed to refresh conversation"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::{ApiError, CartReply};
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use chrono::{TimeZone, Utc};
    use shopfront_core::{ChatMessageId, Product, ProductId};
    use std::sync::Mutex;

    /// Stub API recording sent texts and serving a fixed conversation.
    struct StubApi {
        send_ok: bool,
        conversation: Vec<ChatMessage>,
        sent: Mutex<Vec<String>>,
    }

    impl StubApi {
        fn new(send_ok: bool, conversation: Vec<ChatMessage>) -> Self {
            Self {
                send_ok,
                conversation,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl ShopApi for StubApi {
        async fn random_products(&self) -> Result<Vec<Product>, ApiError> {
            unreachable!()
        }

        async fn top_selling(&self) -> Result<Vec<Product>, ApiError> {
            unreachable!()
        }

        async fn my_favourites(&self, _token: &SessionToken) -> Result<Vec<ProductId>, ApiError> {
            unreachable!()
        }

        async fn toggle_favourite(
            &self,
            _token: &SessionToken,
            _product_id: ProductId,
        ) -> Result<(), ApiError> {
            unreachable!()
        }

        async fn toggle_cart(
            &self,
            _token: &SessionToken,
            _product_id: ProductId,
        ) -> Result<CartReply, ApiError> {
            unreachable!()
        }

        async fn send_to_admin(&self, _token: &SessionToken, text: &str) -> Result<(), ApiError> {
            if self.send_ok {
                self.sent.lock().unwrap().push(text.to_string());
                Ok(())
            } else {
                Err(ApiError::Status {
                    status: 500,
                    body: String::new(),
                })
            }
        }

        async fn conversation(&self, _token: &SessionToken) -> Result<Vec<ChatMessage>, ApiError> {
            Ok(self.conversation.clone())
        }
    }

    fn message(id: i64, sender: &str, text: &str) -> ChatMessage {
        ChatMessage {
            id: ChatMessageId::new(id),
            sender_id: sender.to_string(),
            message: text.to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 10, 30, 0).unwrap(),
        }
    }

    fn seller_token() -> SessionToken {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none"}"#);
        let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":"seller-7"}"#);
        SessionToken::new(format!("{header}.{payload}.sig"))
    }

    #[tokio::test]
    async fn test_whitespace_input_is_a_no_op() {
        let api = StubApi::new(true, vec![message(1, "admin", "hi")]);
        let mut chat = ChatController::new(api, seller_token());

        chat.set_input("   \t ");
        chat.send().await;

        assert!(chat.api.sent().is_empty());
        assert!(chat.transcript().is_empty());
        assert_eq!(chat.input(), "   \t ");
        assert_eq!(chat.state(), SyncState::Idle);
    }

    #[tokio::test]
    async fn test_send_trims_clears_input_and_replaces_transcript() {
        let server_view = vec![
            message(1, "admin", "hello"),
            message(2, "seller-7", "question"),
        ];
        let api = StubApi::new(true, server_view.clone());
        let mut chat = ChatController::new(api, seller_token());

        // Pre-existing local transcript must not be merged with the
        // refetched one.
        chat.transcript = vec![message(99, "seller-7", "stale local copy")];

        chat.set_input("  question  ");
        chat.send().await;

        assert_eq!(chat.api.sent(), vec!["question".to_string()]);
        assert_eq!(chat.input(), "");
        assert_eq!(chat.transcript(), server_view.as_slice());
        assert_eq!(chat.state(), SyncState::Idle);
    }

    #[tokio::test]
    async fn test_send_failure_keeps_input_for_resubmission() {
        let api = StubApi::new(false, Vec::new());
        let mut chat = ChatController::new(api, seller_token());

        chat.set_input("important message");
        chat.send().await;

        assert_eq!(chat.input(), "important message");
        assert!(chat.transcript().is_empty());
        assert_eq!(chat.state(), SyncState::Idle);
    }

    #[tokio::test]
    async fn test_refresh_replaces_transcript() {
        let api = StubApi::new(true, vec![message(3, "admin", "ping")]);
        let mut chat = ChatController::new(api, seller_token());

        chat.refresh().await;
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.transcript()[0].message, "ping");
    }

    #[test]
    fn test_alignment_against_subject_hint() {
        let api = StubApi::new(true, Vec::new());
        let chat = ChatController::new(api, seller_token());

        assert!(chat.is_mine(&message(1, "seller-7", "mine")));
        assert!(!chat.is_mine(&message(2, "admin", "theirs")));
    }

    #[test]
    fn test_malformed_token_renders_nothing_as_mine() {
        let api = StubApi::new(true, Vec::new());
        let chat = ChatController::new(api, SessionToken::new("garbage"));

        assert!(!chat.is_mine(&message(1, "seller-7", "was mine")));
        assert!(!chat.is_mine(&message(2, "admin", "theirs")));
    }
}
