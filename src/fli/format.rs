//! Binary layout definitions for FLI animation files.
//!
//! All integers are little-endian. The format is positional: every field
//! lives at a fixed offset inside its header, so the `SIZE` constants and
//! the write order below are part of the wire contract.

use std::io::{self, Write};

/// File header magic (`12 AF` on disk).
pub const FILE_MAGIC: u16 = 0xAF12;

/// Frame header magic (`FA F1` on disk).
pub const FRAME_MAGIC: u16 = 0xF1FA;

/// Smallest chunk a decoder will accept, header included.
pub const MIN_CHUNK_SIZE: usize = 10;

/// Smallest encoded chunk payload.
pub const MIN_CHUNK_PAYLOAD: usize = MIN_CHUNK_SIZE - ChunkHeader::SIZE;

/// Bits per pixel written into every file header.
pub const DEFAULT_COLOR_DEPTH: u16 = 8;

/// Header flags written into every file header.
pub const DEFAULT_FLAGS: u16 = 3;

/// Playback speed written into every file header.
pub const DEFAULT_SPEED: u32 = 40;

/// Chunk types understood by FLI/FLC decoders.
///
/// Any other `u16` can still be written as a raw tag; these are the ones a
/// decoder dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ChunkType {
    /// 256-level palette.
    Color256 = 4,
    /// Word-oriented delta (FLC).
    Ss2 = 7,
    /// 64-level palette.
    Color64 = 11,
    /// Byte-oriented line delta.
    Lc = 12,
    /// Clear the frame to color 0.
    Black = 13,
    /// Byte run-length compressed full frame.
    Brun = 15,
    /// Uncompressed full frame (`FLI_COPY`).
    Copy = 16,
    /// Postage stamp thumbnail.
    PostageStamp = 18,
}

impl ChunkType {
    /// Known chunk type for a wire tag, `None` for anything else.
    pub fn from_u16(v: u16) -> Option<Self> {
        match v {
            4 => Some(ChunkType::Color256),
            7 => Some(ChunkType::Ss2),
            11 => Some(ChunkType::Color64),
            12 => Some(ChunkType::Lc),
            13 => Some(ChunkType::Black),
            15 => Some(ChunkType::Brun),
            16 => Some(ChunkType::Copy),
            18 => Some(ChunkType::PostageStamp),
            _ => None,
        }
    }

    /// Wire tag for this chunk type.
    pub fn tag(self) -> u16 {
        self as u16
    }

    /// Conventional name used in FLI documentation.
    pub fn name(self) -> &'static str {
        match self {
            ChunkType::Color256 => "FLI_COLOR256",
            ChunkType::Ss2 => "FLI_SS2",
            ChunkType::Color64 => "FLI_COLOR",
            ChunkType::Lc => "FLI_LC",
            ChunkType::Black => "FLI_BLACK",
            ChunkType::Brun => "FLI_BRUN",
            ChunkType::Copy => "FLI_COPY",
            ChunkType::PostageStamp => "FLI_PSTAMP",
        }
    }
}

impl From<ChunkType> for u16 {
    fn from(t: ChunkType) -> Self {
        t.tag()
    }
}

/// File-level header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    /// Total file size, header included.
    pub file_size: u32,
    pub frame_count: u16,
    pub width: u16,
    pub height: u16,
    pub color_depth: u16,
    pub flags: u16,
    pub speed: u32,
}

impl FileHeader {
    /// Size of header in bytes.
    /// Size(4) + Magic(2) + Frames(2) + Width(2) + Height(2) + Depth(2) +
    /// Flags(2) + Speed(4) + Reserved(108) = 128
    pub const SIZE: usize = 128;

    const FIELDS_SIZE: usize = 20;

    /// Write header to output.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.file_size.to_le_bytes())?;
        w.write_all(&FILE_MAGIC.to_le_bytes())?;
        w.write_all(&self.frame_count.to_le_bytes())?;
        w.write_all(&self.width.to_le_bytes())?;
        w.write_all(&self.height.to_le_bytes())?;
        w.write_all(&self.color_depth.to_le_bytes())?;
        w.write_all(&self.flags.to_le_bytes())?;
        w.write_all(&self.speed.to_le_bytes())?;
        // Reserved bytes
        w.write_all(&[0u8; Self::SIZE - Self::FIELDS_SIZE])?;
        Ok(())
    }
}

/// Frame header preceding a frame's chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Total frame size, header included.
    pub frame_size: u32,
    pub chunk_count: u16,
}

impl FrameHeader {
    /// Size(4) + Magic(2) + Chunks(2) + Reserved(8) = 16
    pub const SIZE: usize = 16;

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.frame_size.to_le_bytes())?;
        w.write_all(&FRAME_MAGIC.to_le_bytes())?;
        w.write_all(&self.chunk_count.to_le_bytes())?;
        w.write_all(&[0u8; 8])?;
        Ok(())
    }
}

/// Chunk header preceding each chunk payload.
///
/// The size is signed on the wire so that negative lengths can be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub declared_size: i32,
    pub type_tag: u16,
}

impl ChunkHeader {
    /// Size(4) + Type(2) = 6
    pub const SIZE: usize = 6;

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.declared_size.to_le_bytes())?;
        w.write_all(&self.type_tag.to_le_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_header_layout() {
        let header = FileHeader {
            file_size: 154,
            frame_count: 1,
            width: 100,
            height: 50,
            color_depth: DEFAULT_COLOR_DEPTH,
            flags: DEFAULT_FLAGS,
            speed: DEFAULT_SPEED,
        };

        let mut buf = Vec::new();
        header.write_to(&mut buf).unwrap();
        assert_eq!(buf.len(), FileHeader::SIZE);

        assert_eq!(&buf[0..4], &154u32.to_le_bytes());
        assert_eq!(&buf[4..6], &[0x12, 0xAF]);
        assert_eq!(&buf[6..8], &[1, 0]);
        assert_eq!(&buf[8..10], &[100, 0]);
        assert_eq!(&buf[10..12], &[50, 0]);
        assert_eq!(&buf[12..14], &[8, 0]);
        assert_eq!(&buf[14..16], &[3, 0]);
        assert_eq!(&buf[16..20], &[40, 0, 0, 0]);
        assert!(buf[20..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_frame_header_layout() {
        let header = FrameHeader {
            frame_size: 0x0102_0304,
            chunk_count: 2,
        };

        let mut buf = Vec::new();
        header.write_to(&mut buf).unwrap();
        assert_eq!(buf.len(), FrameHeader::SIZE);
        assert_eq!(&buf[0..4], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&buf[4..6], &[0xFA, 0xF1]);
        assert_eq!(&buf[6..8], &[2, 0]);
        assert!(buf[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_chunk_header_negative_size() {
        let header = ChunkHeader {
            declared_size: -1,
            type_tag: ChunkType::Copy.tag(),
        };

        let mut buf = Vec::new();
        header.write_to(&mut buf).unwrap();
        assert_eq!(buf, vec![0xFF, 0xFF, 0xFF, 0xFF, 16, 0]);
    }

    #[test]
    fn test_chunk_type_tags() {
        for tag in 0..=u16::from(u8::MAX) {
            if let Some(t) = ChunkType::from_u16(tag) {
                assert_eq!(t.tag(), tag);
            }
        }
        assert_eq!(ChunkType::from_u16(16), Some(ChunkType::Copy));
        assert_eq!(ChunkType::Copy.name(), "FLI_COPY");
        assert_eq!(ChunkType::from_u16(5), None);
        assert_eq!(MIN_CHUNK_PAYLOAD, 4);
    }
}
