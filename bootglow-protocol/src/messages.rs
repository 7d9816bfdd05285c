//! Control commands
//!
//! Every frame is a command name, optionally followed by a single space
//! and an argument:
//! - `QUIT` - leave the splash (must be the whole frame)
//! - `PROGRESS <int>` - set the progress bar, negative values fill from the right
//! - `MSG <text>` - replace the status text; the rest of the frame is used verbatim

use crate::frame::Frame;

/// Command name for leaving the splash
pub const CMD_QUIT: &str = "QUIT";

/// Command name for progress updates
pub const CMD_PROGRESS: &str = "PROGRESS";

/// Command name for status messages
pub const CMD_MSG: &str = "MSG";

/// Errors from command parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Frame is not valid UTF-8
    InvalidUtf8,
    /// Frame holds no command name
    Empty,
    /// Command name not recognized
    Unknown,
    /// `PROGRESS` without a usable integer
    InvalidProgress,
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CommandError::InvalidUtf8 => f.write_str("frame is not valid UTF-8"),
            CommandError::Empty => f.write_str("empty frame"),
            CommandError::Unknown => f.write_str("unknown command"),
            CommandError::InvalidProgress => f.write_str("invalid progress value"),
        }
    }
}

/// A parsed control command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Terminate the splash
    Quit,
    /// Set the progress bar to a percentage (sign selects the fill side)
    SetProgress(i32),
    /// Show a status message
    SetMessage(&'a str),
}

impl<'a> Command<'a> {
    /// Parse a command from a complete frame
    pub fn from_frame(frame: &Frame<'a>) -> Result<Self, CommandError> {
        Self::parse(frame.as_bytes())
    }

    /// Parse a command from raw frame bytes
    pub fn parse(bytes: &'a [u8]) -> Result<Self, CommandError> {
        let text = core::str::from_utf8(bytes).map_err(|_| CommandError::InvalidUtf8)?;

        if text == CMD_QUIT {
            return Ok(Command::Quit);
        }

        // Leading separators are skipped, the first run of non-space bytes
        // is the command name, one separator is consumed after it
        let text = text.trim_start_matches(' ');
        if text.is_empty() {
            return Err(CommandError::Empty);
        }
        let (name, argument) = match text.find(' ') {
            Some(idx) => (&text[..idx], Some(&text[idx + 1..])),
            None => (text, None),
        };

        match name {
            CMD_PROGRESS => argument
                .and_then(parse_strict_i32)
                .map(Command::SetProgress)
                .ok_or(CommandError::InvalidProgress),
            CMD_MSG => Ok(Command::SetMessage(argument.unwrap_or(""))),
            _ => Err(CommandError::Unknown),
        }
    }

    /// Short name used in log output
    pub fn name(&self) -> &'static str {
        match self {
            Command::Quit => CMD_QUIT,
            Command::SetProgress(_) => CMD_PROGRESS,
            Command::SetMessage(_) => CMD_MSG,
        }
    }
}

/// Strict decimal integer parsing
///
/// Accepts optional leading whitespace and a sign, then digits only. Any
/// trailing byte, an empty number or a value outside `i32` is rejected.
pub fn parse_strict_i32(s: &str) -> Option<i32> {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: i64 = s.parse().ok()?;
    i32::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_quit() {
        assert_eq!(Command::parse(b"QUIT"), Ok(Command::Quit));
    }

    #[test]
    fn test_quit_must_be_whole_frame() {
        assert_eq!(Command::parse(b"QUIT now"), Err(CommandError::Unknown));
        assert_eq!(Command::parse(b" QUIT"), Err(CommandError::Unknown));
    }

    #[test]
    fn test_progress() {
        assert_eq!(Command::parse(b"PROGRESS 42"), Ok(Command::SetProgress(42)));
        assert_eq!(
            Command::parse(b"PROGRESS -30"),
            Ok(Command::SetProgress(-30))
        );
        assert_eq!(Command::parse(b"PROGRESS  +7"), Ok(Command::SetProgress(7)));
    }

    #[test]
    fn test_progress_rejects_garbage() {
        assert_eq!(
            Command::parse(b"PROGRESS"),
            Err(CommandError::InvalidProgress)
        );
        assert_eq!(
            Command::parse(b"PROGRESS 4x"),
            Err(CommandError::InvalidProgress)
        );
        assert_eq!(
            Command::parse(b"PROGRESS 42 "),
            Err(CommandError::InvalidProgress)
        );
        assert_eq!(
            Command::parse(b"PROGRESS 99999999999"),
            Err(CommandError::InvalidProgress)
        );
    }

    #[test]
    fn test_message_is_verbatim() {
        assert_eq!(
            Command::parse(b"MSG hello\nworld"),
            Ok(Command::SetMessage("hello\nworld"))
        );
        assert_eq!(
            Command::parse(b"MSG  two spaces"),
            Ok(Command::SetMessage(" two spaces"))
        );
        assert_eq!(Command::parse(b"MSG"), Ok(Command::SetMessage("")));
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(Command::parse(b"REBOOT"), Err(CommandError::Unknown));
        assert_eq!(Command::parse(b"msg lower"), Err(CommandError::Unknown));
        assert_eq!(Command::parse(b"   "), Err(CommandError::Empty));
        assert_eq!(Command::parse(&[0xff, 0xfe]), Err(CommandError::InvalidUtf8));
    }

    #[test]
    fn test_from_frame() {
        let mut acc = crate::frame::FrameAccumulator::new();
        let frames = acc.feed(b"MSG booting\0").unwrap().unwrap();
        let frame = frames.iter().next().unwrap();

        let cmd = Command::from_frame(&frame).unwrap();
        assert_eq!(cmd, Command::SetMessage("booting"));
        assert_eq!(cmd.name(), "MSG");
    }

    #[test]
    fn test_strict_parse_edges() {
        assert_eq!(parse_strict_i32("2147483647"), Some(i32::MAX));
        assert_eq!(parse_strict_i32("-2147483648"), Some(i32::MIN));
        assert_eq!(parse_strict_i32("2147483648"), None);
        assert_eq!(parse_strict_i32("\t 12"), Some(12));
        assert_eq!(parse_strict_i32("-"), None);
        assert_eq!(parse_strict_i32(""), None);
        assert_eq!(parse_strict_i32("+-1"), None);
    }

    proptest! {
        #[test]
        fn prop_strict_parse_matches_i32(value in any::<i32>()) {
            let mut buf = heapless::String::<16>::new();
            core::fmt::write(&mut buf, format_args!("{}", value)).unwrap();
            prop_assert_eq!(parse_strict_i32(&buf), Some(value));
        }

        #[test]
        fn prop_trailing_bytes_rejected(value in any::<i32>(), tail in "[a-z ]{1,4}") {
            let mut buf = heapless::String::<32>::new();
            core::fmt::write(&mut buf, format_args!("{}{}", value, tail)).unwrap();
            prop_assert_eq!(parse_strict_i32(&buf), None);
        }
    }
}
