//! Chat messages for the seller/admin conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::ChatMessageId;

/// One message in a two-party conversation.
///
/// The conversation is a totally ordered sequence owned by the server; the
/// client holds a read-only cached copy that is replaced wholesale after
/// every send. Timestamps are ISO-8601 on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: ChatMessageId,
    pub sender_id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Synthesize a message locally, before the server has assigned an ID.
    ///
    /// Local IDs are millisecond timestamps, which keeps them roughly
    /// monotonic alongside server-assigned ones.
    #[must_use]
    pub fn local(sender_id: impl Into<String>, message: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ChatMessageId::new(now.timestamp_millis()),
            sender_id: sender_id.into(),
            message: message.into(),
            timestamp: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let json = r#"{"id":17,"senderId":"42","message":"hello","timestamp":"2025-06-01T10:30:00Z"}"#;
        let msg: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sender_id, "42");
        assert_eq!(msg.id, ChatMessageId::new(17));

        let back = serde_json::to_string(&msg).unwrap();
        assert!(back.contains("\"senderId\":\"42\""));
    }

    #[test]
    fn test_local_message_id_tracks_timestamp() {
        let msg = ChatMessage::local("seller", "hi");
        assert_eq!(msg.id.as_i64(), msg.timestamp.timestamp_millis());
        assert_eq!(msg.sender_id, "seller");
    }
}
