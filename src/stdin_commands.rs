//! External command handling via stdin.
//!
//! Lets a host (or a test harness) drive a search session with JSONL
//! commands instead of native key events.
//!
//! # Protocol
//!
//! Commands are sent as JSON objects, one per line (JSONL format):
//!
//! ```json
//! {"type": "setFilter", "text": "kitchen"}
//! {"type": "simulateKey", "key": "down"}
//! {"type": "keyCode", "code": 36}
//! {"type": "confirm"}
//! {"type": "cancel", "requestId": "req-7"}
//! ```

use std::io::{BufRead, Write};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Result, SceneSearchError};
use crate::session::{Key, SceneSearchSession, SessionEvent, SessionOutcome};

/// External commands that can be sent via stdin
///
/// Every command accepts an optional `requestId` that is attached to the log
/// lines it produces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExternalCommand {
    /// Replace the search text
    SetFilter {
        text: String,
        #[serde(default, rename = "requestId")]
        request_id: Option<String>,
    },
    /// Simulate a key press by name ("up", "down", "enter", "escape", "backspace")
    SimulateKey {
        key: String,
        #[serde(default, rename = "requestId")]
        request_id: Option<String>,
    },
    /// Simulate a key press by macOS virtual key code
    KeyCode {
        code: u16,
        #[serde(default, rename = "requestId")]
        request_id: Option<String>,
    },
    /// Accept the highlighted scene
    Confirm {
        #[serde(default, rename = "requestId")]
        request_id: Option<String>,
    },
    /// Close without navigating
    Cancel {
        #[serde(default, rename = "requestId")]
        request_id: Option<String>,
    },
}

impl ExternalCommand {
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::SetFilter { request_id, .. }
            | Self::SimulateKey { request_id, .. }
            | Self::KeyCode { request_id, .. }
            | Self::Confirm { request_id }
            | Self::Cancel { request_id } => request_id.as_deref(),
        }
    }

    /// Apply this command to a session
    pub fn apply(self, session: &mut SceneSearchSession) -> Option<SessionOutcome> {
        debug!(request_id = ?self.request_id(), command = ?self, "Applying external command");
        match self {
            Self::SetFilter { text, .. } => session.handle(SessionEvent::TextChanged(text)),
            Self::SimulateKey { key, .. } => session.handle_key(Key::from_name(&key)),
            Self::KeyCode { code, .. } => session.handle_key(Key::from_mac_keycode(code)),
            Self::Confirm { .. } => session.handle(SessionEvent::Confirm),
            Self::Cancel { .. } => session.handle(SessionEvent::Cancel),
        }
    }
}

/// Parse one JSONL line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ExternalCommand>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|e| SceneSearchError::CommandParse(format!("{}: {}", e, trimmed)))
}

/// Feed JSONL commands from `input` into `session` until it finishes.
///
/// Writes the session snapshot as one JSON line before the first command and
/// after every command that leaves the session open. Malformed lines are
/// logged and skipped. Input that ends first cancels the session.
pub fn run_commands(
    mut session: SceneSearchSession,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<SessionOutcome> {
    writeln!(out, "{}", serde_json::to_string(&session.snapshot())?)?;

    for line in input.lines() {
        let command = match parse_command(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(
                    severity = ?e.severity(),
                    message = %e.user_message(),
                    "Skipping malformed command"
                );
                continue;
            }
        };

        if let Some(outcome) = command.apply(&mut session) {
            return Ok(outcome);
        }
        writeln!(out, "{}", serde_json::to_string(&session.snapshot())?)?;
    }

    warn!("Input ended before the search finished, cancelling");
    Ok(session
        .handle(SessionEvent::Cancel)
        .unwrap_or(SessionOutcome::Cancel))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::{LocationRef, SceneRecord};

    fn session() -> SceneSearchSession {
        SceneSearchSession::new(vec![
            SceneRecord::new("INT. KITCHEN", LocationRef::new(0)).with_scene_number("1"),
            SceneRecord::new("EXT. STREET", LocationRef::new(120)).with_scene_number("2"),
            SceneRecord::new("INT. KITCHEN - NIGHT", LocationRef::new(480)).with_scene_number("3"),
        ])
    }

    #[test]
    fn test_set_filter_deserialization() {
        let cmd = parse_command(r#"{"type": "setFilter", "text": "kitchen"}"#)
            .unwrap()
            .unwrap();
        match cmd {
            ExternalCommand::SetFilter { text, request_id } => {
                assert_eq!(text, "kitchen");
                assert!(request_id.is_none());
            }
            _ => panic!("Expected SetFilter command"),
        }
    }

    #[test]
    fn test_request_id_is_optional() {
        let cmd = parse_command(r#"{"type": "cancel", "requestId": "req-7"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(cmd.request_id(), Some("req-7"));

        let cmd = parse_command(r#"{"type": "confirm"}"#).unwrap().unwrap();
        assert_eq!(cmd.request_id(), None);
    }

    #[test]
    fn test_blank_line_is_skipped() {
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn test_unknown_command_is_error() {
        let err = parse_command(r#"{"type": "explode"}"#).unwrap_err();
        assert!(matches!(err, SceneSearchError::CommandParse(_)));
    }

    #[test]
    fn test_commands_drive_session_to_navigation() {
        let mut session = session();
        let lines = [
            r#"{"type": "setFilter", "text": "kitchen"}"#,
            r#"{"type": "simulateKey", "key": "down"}"#,
            r#"{"type": "keyCode", "code": 36}"#,
        ];

        let mut outcome = None;
        for line in lines {
            let cmd = parse_command(line).unwrap().unwrap();
            outcome = cmd.apply(&mut session);
        }

        assert_eq!(
            outcome,
            Some(SessionOutcome::Navigate {
                location: LocationRef::new(480)
            })
        );
    }

    fn snapshots(out: &[u8]) -> Vec<serde_json::Value> {
        std::str::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_run_commands_skips_malformed_line() {
        let input = "not json\n{\"type\": \"setFilter\", \"text\": \"street\"}\n";
        let mut out = Vec::new();

        run_commands(session(), input.as_bytes(), &mut out).unwrap();

        let lines = snapshots(&out);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["results"].as_array().unwrap().len(), 3);
        assert_eq!(lines[1]["query"], "street");
        assert_eq!(lines[1]["results"][0]["displayText"], "EXT. STREET");
    }

    #[test]
    fn test_run_commands_end_of_input_cancels() {
        let input = "{\"type\": \"simulateKey\", \"key\": \"down\"}\n\n";
        let mut out = Vec::new();

        let outcome = run_commands(session(), input.as_bytes(), &mut out).unwrap();

        assert_eq!(outcome, SessionOutcome::Cancel);
        let lines = snapshots(&out);
        assert_eq!(lines.last().unwrap()["cursor"], 1);
    }

    #[test]
    fn test_run_commands_stops_at_outcome() {
        let input = "{\"type\": \"setFilter\", \"text\": \"night\"}\n\
                     {\"type\": \"confirm\"}\n\
                     {\"type\": \"setFilter\", \"text\": \"street\"}\n";
        let mut out = Vec::new();

        let outcome = run_commands(session(), input.as_bytes(), &mut out).unwrap();

        assert_eq!(
            outcome,
            SessionOutcome::Navigate {
                location: LocationRef::new(480)
            }
        );
        assert_eq!(snapshots(&out).len(), 2);
    }

    #[test]
    fn test_escape_key_command_cancels() {
        let mut session = session();
        let cmd = parse_command(r#"{"type": "simulateKey", "key": "escape"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(cmd.apply(&mut session), Some(SessionOutcome::Cancel));
    }
}
