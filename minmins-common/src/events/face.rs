use crate::types::{AppMessage, AppMessageResult, DateTime, INBOX_SIZE, ProtocolError};

/// Raw inbox bytes as delivered by the transport.
pub type InboxPayload = heapless::Vec<u8, INBOX_SIZE>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceEvent {
    TimeEvent(TimeEvent),
    ConnectionEvent(ConnectionEvent),
    MessageEvent(MessageEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeEvent {
    /// Minute boundary, carrying the wall-clock sample taken by the host.
    MinuteTick(DateTime),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionEvent {
    Changed(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageEvent {
    InboxReceived(InboxPayload),
    InboxDropped(AppMessageResult),
    OutboxSent,
    OutboxFailed(AppMessageResult),
}

impl MessageEvent {
    /// Encode `message` into an `InboxReceived` event.
    pub fn received(message: &AppMessage<'_>) -> Result<Self, ProtocolError> {
        let mut buf = [0u8; INBOX_SIZE];
        let bytes = message.encode(&mut buf)?;
        let payload = InboxPayload::from_slice(bytes).map_err(|_| ProtocolError::Overflow)?;
        Ok(MessageEvent::InboxReceived(payload))
    }
}

impl FaceEvent {
    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            FaceEvent::TimeEvent(TimeEvent::MinuteTick(_)) => "MinuteTick",
            FaceEvent::ConnectionEvent(ConnectionEvent::Changed(_)) => "ConnectionChanged",
            FaceEvent::MessageEvent(MessageEvent::InboxReceived(_)) => "InboxReceived",
            FaceEvent::MessageEvent(MessageEvent::InboxDropped(_)) => "InboxDropped",
            FaceEvent::MessageEvent(MessageEvent::OutboxSent) => "OutboxSent",
            FaceEvent::MessageEvent(MessageEvent::OutboxFailed(_)) => "OutboxFailed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TupleValue, message_keys};

    #[test]
    fn test_received_event_carries_decodable_payload() {
        let msg = AppMessage::new()
            .with(message_keys::BACKGROUND_COLOR, TupleValue::Int(0xFF0000))
            .unwrap();
        let event = MessageEvent::received(&msg).unwrap();
        match event {
            MessageEvent::InboxReceived(payload) => {
                assert_eq!(AppMessage::decode(&payload).unwrap(), msg);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }
}
