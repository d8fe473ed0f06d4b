//! Line-based stand-in for the phone companion.
//!
//! ```text
//! bg=0xFF0000 temp=72 cond=Partly_Cloudy   send an inbox message
//! 7=hello                                  any numeric key, int or text
//! connect | disconnect                     toggle the link
//! tick                                     minute tick from the wall clock
//! dropped <reason> | sent | failed <reason>
//! ```
//!
//! Underscores in text values stand for spaces.

use minmins_common::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Connect,
    Disconnect,
    Tick,
    Inbox(InboxPayload),
    Dropped(AppMessageResult),
    Sent,
    Failed(AppMessageResult),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompanionError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("expected KEY=VALUE, got `{0}`")]
    BadField(String),
    #[error("unknown result code `{0}`")]
    UnknownResult(String),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

pub const USAGE: &str = "commands: bg=<color> temp=<int> cond=<text> | <key>=<value> | connect | disconnect | tick | dropped <reason> | sent | failed <reason> | help";

pub fn parse_line(line: &str) -> Result<Command, CompanionError> {
    let mut words = line.split_whitespace();
    let first = words.next().ok_or(CompanionError::Empty)?;

    match first {
        "connect" => Ok(Command::Connect),
        "disconnect" => Ok(Command::Disconnect),
        "tick" => Ok(Command::Tick),
        "sent" => Ok(Command::Sent),
        "help" | "?" => Ok(Command::Help),
        "dropped" => Ok(Command::Dropped(parse_result(words.next())?)),
        "failed" => Ok(Command::Failed(parse_result(words.next())?)),
        field if field.contains('=') => {
            let fields: Vec<&str> = line.split_whitespace().collect();
            parse_message(&fields).map(Command::Inbox)
        }
        other => Err(CompanionError::UnknownCommand(other.to_string())),
    }
}

/// Values parsed from `KEY=VALUE` fields before they are borrowed into a message.
enum FieldValue {
    Int(i32),
    Text(String),
}

fn parse_message(fields: &[&str]) -> Result<InboxPayload, CompanionError> {
    let mut parsed = Vec::with_capacity(fields.len());
    for field in fields {
        let (name, value) = field
            .split_once('=')
            .ok_or_else(|| CompanionError::BadField(field.to_string()))?;
        let key = match name {
            "bg" | "background" => message_keys::BACKGROUND_COLOR,
            "temp" | "temperature" => message_keys::TEMPERATURE,
            "cond" | "conditions" => message_keys::CONDITIONS,
            other => other
                .parse::<u32>()
                .map_err(|_| CompanionError::BadField(field.to_string()))?,
        };
        let value = match parse_int(value) {
            Some(v) if key != message_keys::CONDITIONS => FieldValue::Int(v),
            _ => FieldValue::Text(value.replace('_', " ")),
        };
        parsed.push((key, value));
    }

    let mut message = AppMessage::new();
    for (key, value) in &parsed {
        let value = match value {
            FieldValue::Int(v) => TupleValue::Int(*v),
            FieldValue::Text(s) => TupleValue::Text(s.as_str()),
        };
        message = message.with(*key, value)?;
    }

    match MessageEvent::received(&message)? {
        MessageEvent::InboxReceived(payload) => Ok(payload),
        _ => Err(ProtocolError::Malformed.into()),
    }
}

fn parse_int(raw: &str) -> Option<i32> {
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix('#')) {
        u32::from_str_radix(hex, 16).ok().map(|v| v as i32)
    } else {
        raw.parse::<i32>().ok()
    }
}

fn parse_result(word: Option<&str>) -> Result<AppMessageResult, CompanionError> {
    let word = word.unwrap_or("internal");
    let result = match word {
        "ok" => AppMessageResult::Ok,
        "timeout" => AppMessageResult::SendTimeout,
        "rejected" => AppMessageResult::SendRejected,
        "disconnected" => AppMessageResult::NotConnected,
        "not-running" => AppMessageResult::AppNotRunning,
        "invalid" => AppMessageResult::InvalidArgs,
        "busy" => AppMessageResult::Busy,
        "overflow" => AppMessageResult::BufferOverflow,
        "released" => AppMessageResult::AlreadyReleased,
        "oom" => AppMessageResult::OutOfMemory,
        "closed" => AppMessageResult::Closed,
        "internal" => AppMessageResult::InternalError,
        other => return Err(CompanionError::UnknownResult(other.to_string())),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(command: &Command) -> AppMessage<'_> {
        match command {
            Command::Inbox(payload) => AppMessage::decode(payload).unwrap(),
            other => panic!("not an inbox command: {:?}", other),
        }
    }

    #[test]
    fn test_weather_and_background() {
        let command = parse_line("bg=0xFF0000 temp=72 cond=Partly_Cloudy").unwrap();
        let message = decoded(&command);
        assert_eq!(
            message.find(message_keys::BACKGROUND_COLOR),
            Some(&TupleValue::Int(0xFF0000))
        );
        assert_eq!(
            message.find(message_keys::TEMPERATURE),
            Some(&TupleValue::Int(72))
        );
        assert_eq!(
            message.find(message_keys::CONDITIONS),
            Some(&TupleValue::Text("Partly Cloudy"))
        );
    }

    #[test]
    fn test_numeric_conditions_stay_text() {
        let command = parse_line("cond=42 9=hi").unwrap();
        let message = decoded(&command);
        assert_eq!(
            message.find(message_keys::CONDITIONS),
            Some(&TupleValue::Text("42"))
        );
        // sent, but the face does not know key 9
        assert_eq!(message.find(9), None);
        assert_eq!(message.tuples().len(), 1);
    }

    #[test]
    fn test_link_and_transport_commands() {
        assert_eq!(parse_line("connect"), Ok(Command::Connect));
        assert_eq!(parse_line("  disconnect "), Ok(Command::Disconnect));
        assert_eq!(parse_line("tick"), Ok(Command::Tick));
        assert_eq!(
            parse_line("dropped busy"),
            Ok(Command::Dropped(AppMessageResult::Busy))
        );
        assert_eq!(
            parse_line("failed"),
            Ok(Command::Failed(AppMessageResult::InternalError))
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_line("   "), Err(CompanionError::Empty));
        assert_eq!(
            parse_line("reboot"),
            Err(CompanionError::UnknownCommand("reboot".into()))
        );
        assert_eq!(
            parse_line("bg=1 nonsense"),
            Err(CompanionError::BadField("nonsense".into()))
        );
        assert_eq!(
            parse_line("colour=1"),
            Err(CompanionError::BadField("colour=1".into()))
        );
        assert_eq!(
            parse_line("failed gremlins"),
            Err(CompanionError::UnknownResult("gremlins".into()))
        );
        assert_eq!(
            parse_line("1=1 2=2 3=3 4=4 5=5 6=6 7=7 8=8 9=9"),
            Err(CompanionError::Protocol(ProtocolError::Overflow))
        );
    }
}
