//! Frame encoding: a frame header followed by its chunks in draw order.

use super::chunk::ChunkRecord;
use super::error::EncodeError;
use super::format::FrameHeader;

/// One animation step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub chunks: Vec<ChunkRecord>,
}

impl Frame {
    pub fn new(chunks: Vec<ChunkRecord>) -> Self {
        Self { chunks }
    }

    /// Append a chunk, returning the frame for chaining.
    pub fn with_chunk(mut self, chunk: ChunkRecord) -> Self {
        self.chunks.push(chunk);
        self
    }

    pub fn encode(&self, size_override: i32) -> Result<Vec<u8>, EncodeError> {
        encode_frame(&self.chunks, size_override)
    }
}

/// Encode a frame, applying `size_override` to every chunk.
///
/// The chunk count field is 16 bits wide. Longer chunk lists are still
/// encoded and the count wraps modulo 65536, which is one of the
/// malformations this writer exists to produce.
pub fn encode_frame(chunks: &[ChunkRecord], size_override: i32) -> Result<Vec<u8>, EncodeError> {
    let mut body = Vec::with_capacity(chunks.iter().map(ChunkRecord::encoded_len).sum());
    for chunk in chunks {
        body.extend_from_slice(&chunk.encode(size_override)?);
    }

    let len = body.len() + FrameHeader::SIZE;
    let frame_size = u32::try_from(len).map_err(|_| EncodeError::FrameTooLarge { len })?;

    if chunks.len() > usize::from(u16::MAX) {
        log::warn!(
            "frame has {} chunks, count field wraps to {}",
            chunks.len(),
            chunks.len() as u16
        );
    }

    let header = FrameHeader {
        frame_size,
        chunk_count: chunks.len() as u16,
    };

    log::debug!(
        "frame: {} chunks, {} bytes, size override {}",
        chunks.len(),
        frame_size,
        size_override
    );

    let mut out = Vec::with_capacity(len);
    header.write_to(&mut out)?;
    out.extend_from_slice(&body);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fli::format::ChunkType;

    fn read_i32(bytes: &[u8], at: usize) -> i32 {
        i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    }

    #[test]
    fn test_empty_frame() {
        let bytes = encode_frame(&[], 0).unwrap();
        assert_eq!(bytes.len(), FrameHeader::SIZE);
        assert_eq!(&bytes[0..4], &16u32.to_le_bytes());
        assert_eq!(&bytes[4..6], &[0xFA, 0xF1]);
        assert_eq!(&bytes[6..8], &[0, 0]);
    }

    #[test]
    fn test_frame_size_and_order() {
        let frame = Frame::default()
            .with_chunk(ChunkRecord::new(ChunkType::Black, vec![]))
            .with_chunk(ChunkRecord::new(ChunkType::Copy, vec![1, 2, 3, 4, 5, 6]));
        let bytes = frame.encode(0).unwrap();

        // 16 header + (6 + 4) + (6 + 6)
        assert_eq!(bytes.len(), 38);
        assert_eq!(read_i32(&bytes, 0), 38);
        assert_eq!(&bytes[6..8], &[2, 0]);

        // Chunks appear in insertion order
        assert_eq!(&bytes[20..22], &[13, 0]);
        assert_eq!(&bytes[30..32], &[16, 0]);
        assert_eq!(&bytes[32..38], &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_override_applies_to_every_chunk() {
        let chunks = vec![
            ChunkRecord::new(16u16, vec![1, 1]),
            ChunkRecord::new(16u16, vec![1, 1]),
        ];
        let bytes = encode_frame(&chunks, -100_000_000).unwrap();

        assert_eq!(&bytes[6..8], &[2, 0]);
        assert_eq!(read_i32(&bytes, 16), 10 - 100_000_000);
        assert_eq!(read_i32(&bytes, 26), 10 - 100_000_000);

        // Frame size reflects the real bytes, not the declared chunk sizes
        let declared_sum = read_i32(&bytes, 16) as i64 + read_i32(&bytes, 26) as i64;
        assert_eq!(read_i32(&bytes, 0), 36);
        assert_ne!(declared_sum + 16, 36);
    }

    #[test]
    fn test_chunk_count_wraps() {
        let chunks = vec![ChunkRecord::new(13u16, vec![]); 65537];
        let bytes = encode_frame(&chunks, 0).unwrap();
        assert_eq!(&bytes[6..8], &[1, 0]);
        assert_eq!(bytes.len(), 16 + 65537 * 10);
    }

    #[test]
    fn test_chunk_error_propagates() {
        let chunks = vec![ChunkRecord::new(16u16, vec![1, 1])];
        assert!(matches!(
            encode_frame(&chunks, i32::MAX),
            Err(EncodeError::DeclaredSizeOutOfRange { .. })
        ));
    }
}
