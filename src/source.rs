//! Buffered byte source with one-byte push-back.

use std::io;
use std::io::Read;

const DEFAULT_BUF_SIZE: usize = 8 * 1024;

/// A buffered reader over a blocking byte source.
///
/// Offers the three operations the decoder needs: single-byte reads with
/// one byte of push-back, read-until-delimiter, and exact-length reads.
/// End of stream before a request is satisfied surfaces as
/// [`io::ErrorKind::UnexpectedEof`].
pub struct ByteSource<R> {
    inner: R,
    buf: Box<[u8]>,
    pos: usize,
    filled: usize,
}

impl<R: Read> ByteSource<R> {
    /// Wrap a source with the default buffer size.
    pub fn new(inner: R) -> Self {
        Self::with_capacity(DEFAULT_BUF_SIZE, inner)
    }

    /// Wrap a source with an explicit buffer capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        assert!(capacity > 0, "buffer capacity must be non-zero");
        ByteSource {
            inner,
            buf: vec![0; capacity].into_boxed_slice(),
            pos: 0,
            filled: 0,
        }
    }

    /// Refill the buffer if it is exhausted. Afterwards an empty
    /// `pos..filled` window means end of stream.
    fn fill(&mut self) -> io::Result<()> {
        if self.pos < self.filled {
            return Ok(());
        }
        self.pos = 0;
        self.filled = 0;
        loop {
            match self.inner.read(&mut self.buf) {
                Ok(n) => {
                    self.filled = n;
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Read the next byte.
    pub fn read_byte(&mut self) -> io::Result<u8> {
        self.fill()?;
        if self.pos == self.filled {
            return Err(eof("source closed"));
        }
        let b = self.buf[self.pos];
        self.pos += 1;
        Ok(b)
    }

    /// Push the byte returned by the last [`read_byte`](Self::read_byte)
    /// back so the next read sees it again. Valid only immediately after
    /// a successful `read_byte`; the byte is still in the buffer.
    ///
    /// # Panics
    ///
    /// Panics if no buffered byte precedes the read position.
    pub fn unread_byte(&mut self) {
        assert!(self.pos > 0, "no byte to unread");
        self.pos -= 1;
    }

    /// Read bytes up to and including `delim`.
    pub fn read_until(&mut self, delim: u8) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        loop {
            self.fill()?;
            if self.pos == self.filled {
                return Err(eof("source closed before delimiter"));
            }
            let window = &self.buf[self.pos..self.filled];
            match memchr::memchr(delim, window) {
                Some(i) => {
                    out.extend_from_slice(&window[..=i]);
                    self.pos += i + 1;
                    return Ok(out);
                }
                None => {
                    out.extend_from_slice(window);
                    self.pos = self.filled;
                }
            }
        }
    }

    /// Read exactly `n` bytes.
    pub fn read_exact(&mut self, n: usize) -> io::Result<Vec<u8>> {
        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            self.fill()?;
            if self.pos == self.filled {
                return Err(eof("source closed mid-block"));
            }
            let take = (n - out.len()).min(self.filled - self.pos);
            out.extend_from_slice(&self.buf[self.pos..self.pos + take]);
            self.pos += take;
        }
        Ok(out)
    }
}

fn eof(msg: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, msg)
}
