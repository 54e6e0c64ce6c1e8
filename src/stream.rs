use std::{
    fmt,
    io::{Cursor, SeekFrom},
};

use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tracing::{debug, instrument, trace};

pub const DEFAULT_TEXT: &str = "Hallo Tobias Janssen";

/// What an in-memory stream knows about itself at a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamState {
    /// Offset the next read or write starts at.
    pub position: u64,
    /// Number of bytes written so far.
    pub length: usize,
    /// Bytes reserved by the backing buffer. Grows on its own when a write
    /// needs more room.
    pub capacity: usize,
}

impl StreamState {
    fn of(stream: &Cursor<Vec<u8>>) -> Self {
        StreamState {
            position: stream.position(),
            length: stream.get_ref().len(),
            capacity: stream.get_ref().capacity(),
        }
    }
}

impl fmt::Display for StreamState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position: {}, length: {}, capacity: {}",
            self.position, self.length, self.capacity
        )
    }
}

/// Everything observed while writing a text into a stream and reading it back.
#[derive(Debug)]
pub struct RoundTrip {
    pub before_write: StreamState,
    pub after_write: StreamState,
    pub before_read: StreamState,
    pub after_read: StreamState,
    /// May be less than the stream length if the stream ran dry early.
    pub bytes_read: usize,
    pub text: String,
}

/// Writes `text` into an in-memory stream, rewinds it and reads the same
/// number of bytes back.
#[instrument(skip(text), fields(len = text.len()))]
pub async fn round_trip(text: &str) -> crate::Result<RoundTrip> {
    let mut stream = Cursor::new(Vec::new());
    let before_write = StreamState::of(&stream);

    stream.write_all(text.as_bytes()).await?;
    stream.flush().await?;
    let after_write = StreamState::of(&stream);
    debug!(%after_write, "written");

    // Reading starts wherever the last write left off, so go back first.
    stream.seek(SeekFrom::Start(0)).await?;
    let before_read = StreamState::of(&stream);

    let length = before_read.length;
    let mut buf = BytesMut::with_capacity(length);
    while buf.len() < length {
        let n = stream.read_buf(&mut buf).await?;
        trace!(buf_len = buf.len(), read = n);
        if n == 0 {
            break;
        }
    }
    let after_read = StreamState::of(&stream);
    let bytes_read = buf.len();
    debug!(%after_read, bytes_read, "read");

    let text = String::from_utf8(buf.to_vec()).context("decode stream content as utf-8")?;

    Ok(RoundTrip {
        before_write,
        after_write,
        before_read,
        after_read,
        bytes_read,
        text,
    })
}
