//! Session token handling.
//!
//! The token is an opaque bearer credential persisted under the
//! `authToken` storage key; absence means unauthenticated. The only thing
//! the client ever reads out of it is [`SessionToken::subject_hint`], an
//! unverified peek used to align chat messages - never for authorization.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use secrecy::{ExposeSecret, SecretString};

use crate::storage::{AUTH_TOKEN_KEY, Storage, StorageError};

/// Claims checked for a subject identifier, in order. The remote service
/// issues ASP.NET-style JWTs, which may use either name.
const SUBJECT_CLAIMS: &[&str] = &["sub", "nameid"];

/// An opaque bearer credential.
///
/// Implements `Debug` manually to redact the token text.
#[derive(Clone)]
pub struct SessionToken(SecretString);

impl SessionToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(SecretString::from(raw.into()))
    }

    /// Read the persisted token, `None` when unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    pub fn from_storage(storage: &dyn Storage) -> Result<Option<Self>, StorageError> {
        Ok(storage.get(AUTH_TOKEN_KEY)?.map(Self::new))
    }

    /// The raw token text, for building `Authorization` headers.
    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Untrusted local hint at the token's subject identifier.
    ///
    /// Structurally decodes the JWT payload without any signature
    /// verification and returns the subject claim as text. This exists
    /// solely so the chat view can tell "my" messages from the
    /// counterpart's; it MUST NOT feed authorization decisions. Any
    /// malformed token yields `None`, which degrades alignment (nothing
    /// renders as mine) rather than failing the view.
    #[must_use]
    pub fn subject_hint(&self) -> Option<String> {
        decode_subject(self.expose())
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}

fn decode_subject(raw: &str) -> Option<String> {
    let mut parts = raw.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return None,
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;

    SUBJECT_CLAIMS
        .iter()
        .find_map(|claim| match claims.get(claim)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn jwt(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn test_subject_hint_from_sub_claim() {
        let token = SessionToken::new(jwt(r#"{"sub":"42"}"#));
        assert_eq!(token.subject_hint().as_deref(), Some("42"));
    }

    #[test]
    fn test_subject_hint_from_nameid_claim() {
        let token = SessionToken::new(jwt(r#"{"nameid":17,"role":"seller"}"#));
        assert_eq!(token.subject_hint().as_deref(), Some("17"));
    }

    #[test]
    fn test_subject_hint_prefers_sub() {
        let token = SessionToken::new(jwt(r#"{"sub":"a","nameid":"b"}"#));
        assert_eq!(token.subject_hint().as_deref(), Some("a"));
    }

    #[test]
    fn test_malformed_tokens_yield_none() {
        assert!(SessionToken::new("not-a-jwt").subject_hint().is_none());
        assert!(SessionToken::new("a.b").subject_hint().is_none());
        assert!(SessionToken::new("a.b.c.d").subject_hint().is_none());
        assert!(SessionToken::new("a.!!!.c").subject_hint().is_none());

        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode("plain text"));
        assert!(SessionToken::new(not_json).subject_hint().is_none());

        let no_subject = SessionToken::new(jwt(r#"{"role":"seller"}"#));
        assert!(no_subject.subject_hint().is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let token = SessionToken::new("secret-token-text");
        let debug = format!("{token:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret-token-text"));
    }

    #[test]
    fn test_from_storage() {
        let storage = MemoryStorage::default();
        assert!(SessionToken::from_storage(&storage).unwrap().is_none());

        storage.set(AUTH_TOKEN_KEY, "abc").unwrap();
        let token = SessionToken::from_storage(&storage).unwrap().unwrap();
        assert_eq!(token.expose(), "abc");
    }
}
