//! Frame accumulation for the control channel.
//!
//! Framing rules:
//! - A frame ends with a NUL byte.
//! - A newline that is the last byte of a read also ends a frame (it is
//!   rewritten to NUL), so `echo "PROGRESS 10" > fifo` works.
//! - Bytes are collected until a read leaves the buffer ending in a
//!   terminator. The collected bytes are then split on NUL, which yields
//!   every frame that arrived in the meantime.
//! - The buffer holds at most [`CHANNEL_BUFFER_SIZE`] bytes. Anything past
//!   that before a terminator is dropped.

use heapless::Vec;

/// Size of the accumulation buffer in bytes
pub const CHANNEL_BUFFER_SIZE: usize = 2048;

/// Frame terminator
pub const FRAME_TERMINATOR: u8 = 0;

/// Line terminator, accepted as the last byte of a read
pub const LINE_TERMINATOR: u8 = b'\n';

/// Errors that can occur while accumulating frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// The buffer filled up before a terminator arrived
    Overflow {
        /// Bytes discarded by this feed
        dropped: usize,
    },
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::Overflow { dropped } => {
                write!(f, "frame buffer full, dropped {} bytes", dropped)
            }
        }
    }
}

/// One complete frame, terminator stripped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    payload: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Raw frame bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        self.payload
    }

    /// Number of payload bytes
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Check if the frame has no payload
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

/// A completed batch of frames, as handed out by [`FrameAccumulator::feed`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frames {
    buffer: Vec<u8, CHANNEL_BUFFER_SIZE>,
    truncated: bool,
}

impl Frames {
    /// Iterate over the non-empty frames in arrival order
    pub fn iter(&self) -> FrameIter<'_> {
        FrameIter {
            rest: &self.buffer,
        }
    }

    /// Whether bytes were dropped while this batch was collected
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Raw accumulated bytes, terminators included
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

impl<'a> IntoIterator for &'a Frames {
    type Item = Frame<'a>;
    type IntoIter = FrameIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the frames of a batch
#[derive(Debug, Clone)]
pub struct FrameIter<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for FrameIter<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.rest.is_empty() {
            let end = self
                .rest
                .iter()
                .position(|&b| b == FRAME_TERMINATOR)
                .unwrap_or(self.rest.len());
            let payload = &self.rest[..end];
            self.rest = self.rest.get(end + 1..).unwrap_or(&[]);

            if !payload.is_empty() {
                return Some(Frame { payload });
            }
        }
        None
    }
}

/// Collects channel bytes until a read completes one or more frames
#[derive(Debug, Clone, Default)]
pub struct FrameAccumulator {
    buffer: Vec<u8, CHANNEL_BUFFER_SIZE>,
    truncated: bool,
}

impl FrameAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            truncated: false,
        }
    }

    /// Discard any partial data
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.truncated = false;
    }

    /// Bytes currently waiting for a terminator
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed the bytes of one read
    ///
    /// Returns `Ok(Some(frames))` when the buffer now ends in a terminator,
    /// `Ok(None)` when more bytes are needed, or `Err` when bytes had to be
    /// dropped and no frame completed yet.
    pub fn feed(&mut self, bytes: &[u8]) -> Result<Option<Frames>, FrameError> {
        let room = CHANNEL_BUFFER_SIZE - self.buffer.len();
        let (kept, dropped) = bytes.split_at(bytes.len().min(room));

        // Cannot fail, `kept` is sized to the remaining room
        let _ = self.buffer.extend_from_slice(kept);

        if !dropped.is_empty() {
            self.truncated = true;
        }

        // A truncated frame still completes when its terminator shows up
        let last = dropped.last().or(kept.last()).copied();
        let complete = matches!(last, Some(FRAME_TERMINATOR) | Some(LINE_TERMINATOR));

        if complete {
            if let Some(end) = self.buffer.last_mut() {
                *end = FRAME_TERMINATOR;
            }
            let frames = Frames {
                buffer: core::mem::take(&mut self.buffer),
                truncated: self.truncated,
            };
            self.truncated = false;
            return Ok(Some(frames));
        }

        if !dropped.is_empty() {
            return Err(FrameError::Overflow {
                dropped: dropped.len(),
            });
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(frames: &Frames) -> Vec<&[u8], 8> {
        let mut out = Vec::new();
        for frame in frames {
            out.push(frame.as_bytes()).unwrap();
        }
        out
    }

    #[test]
    fn test_nul_terminated_frame() {
        let mut acc = FrameAccumulator::new();
        let frames = acc.feed(b"PROGRESS 42\0").unwrap().unwrap();

        assert_eq!(collect(&frames).as_slice(), &[b"PROGRESS 42".as_slice()]);
        assert_eq!(acc.pending(), 0);
    }

    #[test]
    fn test_trailing_newline_becomes_terminator() {
        let mut acc = FrameAccumulator::new();
        let frames = acc.feed(b"QUIT\n").unwrap().unwrap();

        assert_eq!(frames.as_bytes(), b"QUIT\0");
        assert_eq!(collect(&frames).as_slice(), &[b"QUIT".as_slice()]);
    }

    #[test]
    fn test_embedded_newline_is_kept() {
        let mut acc = FrameAccumulator::new();
        let frames = acc.feed(b"MSG hello\nworld\0").unwrap().unwrap();

        assert_eq!(
            collect(&frames).as_slice(),
            &[b"MSG hello\nworld".as_slice()]
        );
    }

    #[test]
    fn test_partial_reads_accumulate() {
        let mut acc = FrameAccumulator::new();

        assert_eq!(acc.feed(b"MSG hel").unwrap(), None);
        assert_eq!(acc.feed(b"lo").unwrap(), None);
        assert_eq!(acc.pending(), 9);

        let frames = acc.feed(b"\0").unwrap().unwrap();
        assert_eq!(collect(&frames).as_slice(), &[b"MSG hello".as_slice()]);
    }

    #[test]
    fn test_several_frames_in_one_read() {
        let mut acc = FrameAccumulator::new();
        let frames = acc.feed(b"PROGRESS 10\0\0MSG a\0QUIT\0").unwrap().unwrap();

        assert_eq!(
            collect(&frames).as_slice(),
            &[
                b"PROGRESS 10".as_slice(),
                b"MSG a".as_slice(),
                b"QUIT".as_slice()
            ]
        );
    }

    #[test]
    fn test_overflow_drops_excess() {
        let mut acc = FrameAccumulator::new();
        let big = [b'x'; CHANNEL_BUFFER_SIZE + 10];

        assert_eq!(acc.feed(&big), Err(FrameError::Overflow { dropped: 10 }));
        assert_eq!(acc.pending(), CHANNEL_BUFFER_SIZE);

        // Terminator arriving later still completes the (truncated) frame
        let frames = acc.feed(b"\0").unwrap().unwrap();
        assert!(frames.truncated());
        assert_eq!(frames.iter().next().unwrap().len(), CHANNEL_BUFFER_SIZE - 1);

        // Accumulator is usable again afterwards
        let frames = acc.feed(b"QUIT\0").unwrap().unwrap();
        assert!(!frames.truncated());
    }

    #[test]
    fn test_reset_discards_partial() {
        let mut acc = FrameAccumulator::new();
        acc.feed(b"MSG half").unwrap();
        acc.reset();

        let frames = acc.feed(b"QUIT\0").unwrap().unwrap();
        assert_eq!(collect(&frames).as_slice(), &[b"QUIT".as_slice()]);
    }
}
