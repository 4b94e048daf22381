//! Raw WHOIS reply.

use std::borrow::Cow;

/// Bytes received from a WHOIS server, exactly as read from the socket.
///
/// WHOIS has no charset negotiation, so the payload is kept as bytes and
/// relayed untouched. [`WhoisReply::text`] gives a lossy UTF-8 view for
/// line scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisReply {
    bytes: Vec<u8>,
}

impl WhoisReply {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Text view of the reply; invalid UTF-8 sequences become U+FFFD.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for WhoisReply {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<String> for WhoisReply {
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}

impl From<&str> for WhoisReply {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec())
    }
}
