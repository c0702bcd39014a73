//! Container encoding: the 128-byte file header wrapping a single frame.

use std::io::Write;

use super::chunk::ChunkRecord;
use super::error::EncodeError;
use super::format::{DEFAULT_COLOR_DEPTH, DEFAULT_FLAGS, DEFAULT_SPEED, FileHeader};
use super::frame::Frame;

/// A complete single-frame FLI file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub width: u16,
    pub height: u16,
    pub color_depth: u16,
    pub flags: u16,
    pub speed: u32,
    pub frame: Frame,
}

impl Container {
    /// Container with the standard depth, flags and speed.
    pub fn new(width: u16, height: u16, frame: Frame) -> Self {
        Self {
            width,
            height,
            color_depth: DEFAULT_COLOR_DEPTH,
            flags: DEFAULT_FLAGS,
            speed: DEFAULT_SPEED,
            frame,
        }
    }

    /// Encode the whole file, threading `size_override` down to every chunk.
    pub fn encode(&self, size_override: i32) -> Result<Vec<u8>, EncodeError> {
        let frame_bytes = self.frame.encode(size_override)?;
        self.wrap_frame(&frame_bytes)
    }

    /// Encode and write the file to `w`.
    pub fn write_to<W: Write>(&self, w: &mut W, size_override: i32) -> Result<(), EncodeError> {
        w.write_all(&self.encode(size_override)?)?;
        Ok(())
    }

    /// Prefix an already encoded frame with this container's file header.
    fn wrap_frame(&self, frame_bytes: &[u8]) -> Result<Vec<u8>, EncodeError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(EncodeError::ZeroDimension { width, height });
        }

        let len = frame_bytes.len() + FileHeader::SIZE;
        let file_size = u32::try_from(len).map_err(|_| EncodeError::FileTooLarge { len })?;

        let header = FileHeader {
            file_size,
            frame_count: 1,
            width,
            height,
            color_depth: self.color_depth,
            flags: self.flags,
            speed: self.speed,
        };

        log::debug!("container: {}x{}, {} bytes", width, height, file_size);

        let mut out = Vec::with_capacity(len);
        header.write_to(&mut out)?;
        out.extend_from_slice(frame_bytes);
        Ok(out)
    }
}

/// Prefix an already encoded frame with the standard file header.
pub fn encode_container(width: u16, height: u16, frame_bytes: &[u8]) -> Result<Vec<u8>, EncodeError> {
    Container::new(width, height, Frame::default()).wrap_frame(frame_bytes)
}

/// Encode a single-frame image from its chunk list.
pub fn encode_image(
    width: u16,
    height: u16,
    chunks: &[ChunkRecord],
    size_override: i32,
) -> Result<Vec<u8>, EncodeError> {
    let frame_bytes = super::frame::encode_frame(chunks, size_override)?;
    encode_container(width, height, &frame_bytes)
}
