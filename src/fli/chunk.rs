//! Chunk encoding: the leaf level of an FLI file.

use super::error::EncodeError;
use super::format::{ChunkHeader, ChunkType, MIN_CHUNK_PAYLOAD};

/// One chunk inside a frame: a type tag and its opaque payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkRecord {
    pub type_tag: u16,
    pub payload: Vec<u8>,
}

impl ChunkRecord {
    pub fn new(type_tag: impl Into<u16>, payload: Vec<u8>) -> Self {
        Self {
            type_tag: type_tag.into(),
            payload,
        }
    }

    /// Size of this chunk on the wire, header and padding included.
    pub fn encoded_len(&self) -> usize {
        ChunkHeader::SIZE + padded_len(self.payload.len())
    }

    /// Encode this chunk with the given declared-size offset.
    pub fn encode(&self, size_override: i32) -> Result<Vec<u8>, EncodeError> {
        encode_chunk(self.type_tag, &self.payload, size_override)
    }
}

/// Payload length after padding: at least [`MIN_CHUNK_PAYLOAD`] and even.
pub fn padded_len(len: usize) -> usize {
    let mut n = len;
    while n < MIN_CHUNK_PAYLOAD || n % 2 == 1 {
        n += 1;
    }
    n
}

/// Append zero bytes until the payload meets the minimum and is even.
///
/// The original bytes are always a prefix of the result.
pub fn pad_payload(payload: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(padded_len(payload.len()));
    padded.extend_from_slice(payload);
    padded.resize(padded_len(payload.len()), 0);
    padded
}

/// Declared size for a chunk whose padded payload is `padded_len` bytes.
///
/// `size_override` is added as-is, so the result may be negative. It only
/// fails when the value cannot be stored in the signed 32-bit field.
pub fn declared_size(padded_len: usize, size_override: i32) -> Result<i32, EncodeError> {
    let len = padded_len
        .checked_add(ChunkHeader::SIZE)
        .and_then(|n| i64::try_from(n).ok())
        .ok_or(EncodeError::PayloadTooLarge { len: padded_len })?;
    let declared = len + i64::from(size_override);
    i32::try_from(declared).map_err(|_| EncodeError::DeclaredSizeOutOfRange { declared })
}

/// Human-readable name for a chunk tag, used in log output.
pub fn chunk_label(type_tag: u16) -> String {
    match ChunkType::from_u16(type_tag) {
        Some(t) => t.name().to_string(),
        None => format!("unknown({})", type_tag),
    }
}

/// Encode a single chunk: `declared_size (i32) | type_tag (u16) | payload`.
pub fn encode_chunk(
    type_tag: u16,
    payload: &[u8],
    size_override: i32,
) -> Result<Vec<u8>, EncodeError> {
    let padded = pad_payload(payload);
    let header = ChunkHeader {
        declared_size: declared_size(padded.len(), size_override)?,
        type_tag,
    };

    if header.declared_size < 0 {
        log::debug!(
            "{} chunk declares negative size {}",
            chunk_label(type_tag),
            header.declared_size
        );
    }

    let mut out = Vec::with_capacity(ChunkHeader::SIZE + padded.len());
    header.write_to(&mut out)?;
    out.extend_from_slice(&padded);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared(bytes: &[u8]) -> i32 {
        i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[test]
    fn test_padding_short_payload() {
        assert_eq!(pad_payload(&[1, 1]), vec![1, 1, 0, 0]);
        assert_eq!(pad_payload(&[]), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_padding_odd_payload() {
        // Short and odd: both conditions must hold after padding
        assert_eq!(pad_payload(&[7, 7, 7]), vec![7, 7, 7, 0]);
        assert_eq!(pad_payload(&[1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5, 0]);
        assert_eq!(pad_payload(&[1, 2, 3, 4, 5, 6]), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_encode_copy_chunk() {
        let bytes = encode_chunk(ChunkType::Copy.tag(), &[1, 1], 0).unwrap();
        assert_eq!(bytes, vec![10, 0, 0, 0, 16, 0, 1, 1, 0, 0]);
    }

    #[test]
    fn test_override_shifts_declared_size() {
        let bytes = encode_chunk(16, &[1, 1], -100_000_000).unwrap();
        assert_eq!(declared(&bytes), 10 - 100_000_000);
        // Payload is untouched by the override
        assert_eq!(&bytes[6..], &[1, 1, 0, 0]);

        let bytes = encode_chunk(16, &[1, 1], 5).unwrap();
        assert_eq!(declared(&bytes), 15);
    }

    #[test]
    fn test_override_out_of_range() {
        let err = encode_chunk(16, &[1, 1], i32::MAX).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::DeclaredSizeOutOfRange { declared } if declared == i64::from(i32::MAX) + 10
        ));

        // Still representable, just negative
        let bytes = encode_chunk(16, &[1, 1], i32::MIN).unwrap();
        assert_eq!(declared(&bytes), i32::MIN + 10);
    }

    #[test]
    fn test_chunk_label() {
        assert_eq!(chunk_label(16), "FLI_COPY");
        assert_eq!(chunk_label(ChunkType::Brun.tag()), "FLI_BRUN");
        assert_eq!(chunk_label(99), "unknown(99)");
    }

    #[test]
    fn test_record_encoded_len() {
        let record = ChunkRecord::new(ChunkType::Brun, vec![9u8; 7]);
        let bytes = record.encode(0).unwrap();
        assert_eq!(bytes.len(), record.encoded_len());
        assert_eq!(bytes.len(), 6 + 8);
    }
}
