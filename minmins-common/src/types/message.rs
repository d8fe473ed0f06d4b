//! Companion message wire format.
//!
//! An inbox payload is a postcard-encoded list of `(key, value)` tuples.
//! Text and byte values borrow from the payload buffer. Decoding keeps the
//! first tuple of each key the face understands and skips everything else,
//! so a message may carry any number of unknown keys.

use core::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

use crate::types::ProtocolError;

/// Largest inbox payload the transport hands over.
pub const INBOX_SIZE: usize = 128;
/// Most tuples a message built here can carry.
pub const MAX_TUPLES: usize = 8;

/// Keys understood by the face.
pub mod message_keys {
    pub const BACKGROUND_COLOR: u32 = 0;
    pub const TEMPERATURE: u32 = 1;
    pub const CONDITIONS: u32 = 2;

    pub fn is_known(key: u32) -> bool {
        matches!(key, BACKGROUND_COLOR | TEMPERATURE | CONDITIONS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TupleValue<'a> {
    Int(i32),
    UInt(u32),
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> TupleValue<'a> {
    /// Integer view. Unsigned values are reinterpreted bit for bit.
    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            TupleValue::Int(v) => Some(v),
            TupleValue::UInt(v) => Some(v as i32),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            TupleValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuple<'a> {
    pub key: u32,
    #[serde(borrow)]
    pub value: TupleValue<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppMessage<'a> {
    tuples: heapless::Vec<Tuple<'a>, MAX_TUPLES>,
}

impl Serialize for AppMessage<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.tuples.as_slice().serialize(serializer)
    }
}

impl<'de: 'a, 'a> Deserialize<'de> for AppMessage<'a> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(KnownTuples(PhantomData))
    }
}

struct KnownTuples<'a>(PhantomData<AppMessage<'a>>);

impl<'de: 'a, 'a> Visitor<'de> for KnownTuples<'a> {
    type Value = AppMessage<'a>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of key/value tuples")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut message = AppMessage::new();
        while let Some(tuple) = seq.next_element::<Tuple<'a>>()? {
            if !message_keys::is_known(tuple.key) || message.find(tuple.key).is_some() {
                continue;
            }
            // one slot per known key
            message
                .tuples
                .push(tuple)
                .map_err(|_| <A::Error as de::Error>::custom("too many tuples"))?;
        }
        Ok(message)
    }
}

impl<'a> AppMessage<'a> {
    pub fn new() -> Self {
        Self {
            tuples: heapless::Vec::new(),
        }
    }

    /// Builder used by companions and tests.
    pub fn with(mut self, key: u32, value: TupleValue<'a>) -> Result<Self, ProtocolError> {
        self.tuples
            .push(Tuple { key, value })
            .map_err(|_| ProtocolError::Overflow)?;
        Ok(self)
    }

    /// Decode an inbox payload, keeping only the known keys.
    pub fn decode(bytes: &'a [u8]) -> Result<Self, ProtocolError> {
        postcard::from_bytes(bytes).map_err(|_| ProtocolError::Malformed)
    }

    pub fn encode<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ProtocolError> {
        postcard::to_slice(self, buf).map_err(|_| ProtocolError::Overflow)
    }

    /// First tuple carrying `key`.
    pub fn find(&self, key: u32) -> Option<&TupleValue<'a>> {
        self.tuples.iter().find(|t| t.key == key).map(|t| &t.value)
    }

    pub fn tuples(&self) -> &[Tuple<'a>] {
        &self.tuples
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }
}

/// Result codes reported by the message transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppMessageResult {
    Ok,
    SendTimeout,
    SendRejected,
    NotConnected,
    AppNotRunning,
    InvalidArgs,
    Busy,
    BufferOverflow,
    AlreadyReleased,
    OutOfMemory,
    Closed,
    InternalError,
}
