use std::fmt;
use std::io::{self, Read, Write};

use crate::codec::Codec;
use crate::errors::DecodeError;

const CHUNK_SIZE: usize = 4096; // 4KB chunks

/// Error from a streaming call: either the underlying io or the codec.
#[derive(Debug)]
pub enum StreamError {
    Io(io::Error),
    Decode(DecodeError),
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Io(e) => write!(f, "io error: {}", e),
            StreamError::Decode(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Io(e) => Some(e),
            StreamError::Decode(e) => Some(e),
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        StreamError::Io(e)
    }
}

impl From<DecodeError> for StreamError {
    fn from(e: DecodeError) -> Self {
        StreamError::Decode(e)
    }
}

/// Streaming encoder for processing large inputs without holding them in
/// memory.
///
/// Reads in chunks, carries the sub-block remainder between chunks, and
/// emits the tail (and any padding) only at end of input. One call per
/// stream; no state survives between calls.
pub struct StreamingEncoder<'a, W: Write> {
    codec: &'a Codec,
    writer: W,
}

impl<'a, W: Write> StreamingEncoder<'a, W> {
    pub fn new(codec: &'a Codec, writer: W) -> Self {
        StreamingEncoder { codec, writer }
    }

    /// Encode everything from `reader`; returns the symbols written.
    pub fn encode<R: Read>(&mut self, reader: &mut R) -> io::Result<u64> {
        let block = self.codec.family().binary_block_size();
        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut pending: Vec<u8> = Vec::with_capacity(CHUNK_SIZE + block);
        let mut written = 0u64;

        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            pending.extend_from_slice(&buffer[..bytes_read]);

            // Only whole blocks go out mid-stream; a multiple of the
            // block size never triggers tail or padding output.
            let aligned = pending.len() - pending.len() % block;
            if aligned > 0 {
                let out = self.codec.encode(&pending[..aligned]);
                self.writer.write_all(out.as_bytes())?;
                written += out.len() as u64;
                pending.drain(..aligned);
            }
        }

        if !pending.is_empty() {
            let out = self.codec.encode(&pending);
            self.writer.write_all(out.as_bytes())?;
            written += out.len() as u64;
        }
        Ok(written)
    }
}

/// Streaming decoder writing decoded bytes to an `io::Write`.
///
/// The decode automaton validates trailing padding and final block
/// length, so the call reads the entire input before decoding; the
/// output side still streams through `writer`.
pub struct StreamingDecoder<'a, W: Write> {
    codec: &'a Codec,
    writer: W,
}

impl<'a, W: Write> StreamingDecoder<'a, W> {
    pub fn new(codec: &'a Codec, writer: W) -> Self {
        StreamingDecoder { codec, writer }
    }

    /// Decode everything from `reader`; returns the bytes written.
    pub fn decode<R: Read>(&mut self, reader: &mut R) -> Result<u64, StreamError> {
        let mut encoded = Vec::new();
        reader.read_to_end(&mut encoded)?;
        let decoded = self.codec.decode(&encoded)?;
        self.writer.write_all(&decoded)?;
        Ok(decoded.len() as u64)
    }
}
