//! 1-bit Windows bitmap encoder.
//!
//! Output layout: 14 byte file header, 40 byte `BITMAPINFOHEADER`, a two entry
//! palette (black, white) and bottom-up pixel rows packed MSB first, each row
//! padded to a multiple of four bytes. All integers are little-endian.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::canvas::Canvas;

pub const FILE_HEADER_SIZE: usize = 14;
pub const INFO_HEADER_SIZE: usize = 40;
pub const PALETTE_SIZE: usize = 8;
pub const PIXEL_DATA_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE + PALETTE_SIZE;

const PALETTE: [u8; PALETTE_SIZE] = [0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x00];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BmpError {
    #[error("buffer too short for a bitmap header ({0} bytes)")]
    Truncated(usize),
    #[error("missing BM signature")]
    Signature,
}

/// Bytes per stored row: `ceil(width / 8)` rounded up to a multiple of four.
pub fn row_stride(width: u16) -> usize {
    let packed = usize::from(width).div_ceil(8);
    packed.div_ceil(4) * 4
}

pub fn encoded_len(width: u16, height: u16) -> usize {
    PIXEL_DATA_OFFSET + row_stride(width) * usize::from(height)
}

pub fn encode_1bit(canvas: &Canvas) -> Vec<u8> {
    let width = canvas.width();
    let height = canvas.height();
    let stride = row_stride(width);
    let image_size = stride * usize::from(height);
    let file_size = PIXEL_DATA_OFFSET + image_size;

    let mut out = Vec::with_capacity(file_size);

    // File header.
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&(PIXEL_DATA_OFFSET as u32).to_le_bytes());

    // Info header.
    out.extend_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
    out.extend_from_slice(&i32::from(width).to_le_bytes());
    out.extend_from_slice(&i32::from(height).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&(image_size as u32).to_le_bytes());
    out.extend_from_slice(&0i32.to_le_bytes());
    out.extend_from_slice(&0i32.to_le_bytes());
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&2u32.to_le_bytes());

    out.extend_from_slice(&PALETTE);

    let mut row_bytes = vec![0u8; stride];
    for y in (0..height).rev() {
        row_bytes.fill(0);
        if let Some(row) = canvas.row(y) {
            for (x, &pixel) in row.iter().enumerate() {
                if pixel {
                    row_bytes[x / 8] |= 0x80 >> (x % 8);
                }
            }
        }
        out.extend_from_slice(&row_bytes);
    }

    debug_assert_eq!(out.len(), file_size);
    out
}

/// Encodes the canvas and wraps the bitmap as standard base64 for transport.
pub fn encode_base64(canvas: &Canvas) -> String {
    STANDARD.encode(encode_1bit(canvas))
}

/// Header fields read back from an encoded bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpInfo {
    pub file_size: u32,
    pub data_offset: u32,
    pub width: i32,
    pub height: i32,
    pub bits_per_pixel: u16,
    pub image_size: u32,
    pub colors_used: u32,
}

impl BmpInfo {
    pub fn parse(bytes: &[u8]) -> Result<Self, BmpError> {
        if bytes.len() < FILE_HEADER_SIZE + INFO_HEADER_SIZE {
            return Err(BmpError::Truncated(bytes.len()));
        }
        if &bytes[0..2] != b"BM" {
            return Err(BmpError::Signature);
        }

        let word = |at: usize| [bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]];
        let u32_at = |at: usize| u32::from_le_bytes(word(at));
        let i32_at = |at: usize| i32::from_le_bytes(word(at));

        Ok(Self {
            file_size: u32_at(2),
            data_offset: u32_at(10),
            width: i32_at(18),
            height: i32_at(22),
            bits_per_pixel: u16::from_le_bytes([bytes[28], bytes[29]]),
            image_size: u32_at(34),
            colors_used: u32_at(46),
        })
    }
}
