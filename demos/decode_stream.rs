use std::io;
use std::io::Read;

use resp_decode::Decoder;

/// Hands the wire bytes out a few at a time, the way a socket would.
struct ChunkedStream {
    data: &'static [u8],
    pos: usize,
    chunk: usize,
}

impl ChunkedStream {
    fn new(data: &'static [u8], chunk: usize) -> Self {
        ChunkedStream {
            data,
            pos: 0,
            chunk,
        }
    }
}

impl Read for ChunkedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.chunk.min(self.data.len() - self.pos).min(buf.len());
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

fn main() {
    println!("--- RESP stream decode example ---");

    // One connection's worth of traffic: a status line, an integer, a
    // typed SET command, and a legacy inline PING, fragmented into
    // 5-byte reads.
    let wire = b"+OK\r\n:1000\r\n*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\nPING\r\n";
    let mut decoder = Decoder::new(ChunkedStream::new(wire, 5));

    loop {
        match decoder.decode() {
            Ok(value) => println!("[decoder] {:?}", value),
            Err(e) => {
                // End of stream arrives as a read error; any real
                // protocol violation would land here too, and the
                // handle stays poisoned either way.
                println!("[decoder] stopped: {}", e);
                break;
            }
        }
    }
}
