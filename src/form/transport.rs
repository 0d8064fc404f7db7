//! Schema codec, transport side: a fixed 8-byte frame header around the
//! JSON-encoded schema, with optional gzip compression, plus a base64
//! wrapping for embedding frames in text (clipboards, URLs).
//!
//! Frame layout:
//!
//! | offset | size | field            |
//! |--------|------|------------------|
//! | 0      | 4    | magic `UGFS`     |
//! | 4      | 1    | version (1)      |
//! | 5      | 1    | compression flag |
//! | 6      | 2    | reserved, zero   |
//! | 8..    | rest | payload          |
//!
//! The byte layout is a compatibility contract; the magic number rejects
//! foreign payloads before any JSON parse or decompression is attempted.

use base64::{engine::general_purpose, Engine as _};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::{debug, warn};
use std::io::{Read, Write};

use crate::error::{FormError, FormResult};
use crate::form::core::Form;
use crate::form::types::schema::Schema;

/// Leading magic identifying a schema frame.
pub const SCHEMA_MAGIC: [u8; 4] = *b"UGFS";

/// Current frame format version.
pub const FRAME_VERSION: u8 = 1;

/// Fixed header size in bytes.
pub const FRAME_HEADER_LEN: usize = 8;

/// Payload compression selector carried in the frame header.
///
/// The flag is explicit rather than auto-detected to avoid ambiguity on
/// small payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFlag {
    /// Payload is raw UTF-8 JSON text
    None = 0,
    /// Payload is gzip-compressed JSON text
    Gzip = 1,
}

impl CompressionFlag {
    /// Decodes the flag byte, rejecting anything outside the recognized set.
    pub fn from_byte(byte: u8) -> FormResult<Self> {
        match byte {
            0 => Ok(Self::None),
            1 => Ok(Self::Gzip),
            other => Err(FormError::BadCompressionFlag(other)),
        }
    }

    /// Returns the flag's wire byte.
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

/// Parsed view of the fixed 8-byte frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub version: u8,
    pub compression: CompressionFlag,
}

impl FrameHeader {
    /// Encodes the header. Reserved bytes are written as zero.
    pub fn encode(&self) -> [u8; FRAME_HEADER_LEN] {
        let mut header = [0u8; FRAME_HEADER_LEN];
        header[0..4].copy_from_slice(&SCHEMA_MAGIC);
        header[4] = self.version;
        header[5] = self.compression.as_byte();
        header
    }

    /// Parses and checks the header from the start of a frame.
    ///
    /// Validation order: length, magic, compression flag. Reserved bytes
    /// are ignored and the version byte is recorded but not enforced;
    /// only one version exists.
    pub fn parse(bytes: &[u8]) -> FormResult<Self> {
        if bytes.len() < FRAME_HEADER_LEN {
            return Err(FormError::TruncatedFrame(bytes.len()));
        }
        if bytes[0..4] != SCHEMA_MAGIC {
            return Err(FormError::BadMagic);
        }
        let version = bytes[4];
        if version != FRAME_VERSION {
            warn!("schema frame version {} (expected {})", version, FRAME_VERSION);
        }
        let compression = CompressionFlag::from_byte(bytes[5])?;
        Ok(Self { version, compression })
    }
}

fn compress(payload: &[u8]) -> FormResult<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(payload)
        .map_err(|e| FormError::Transport(format!("compression write error: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| FormError::Transport(format!("compression finish error: {}", e)))
}

fn decompress(payload: &[u8]) -> FormResult<Vec<u8>> {
    let mut decoder = GzDecoder::new(payload);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| FormError::Transport(format!("decompression error: {}", e)))?;
    Ok(decompressed)
}

impl Form {
    /// Serializes the schema into a framed binary encoding, compressing
    /// the JSON payload when requested.
    pub fn dump_schema_bin(&self, compression: CompressionFlag) -> FormResult<Vec<u8>> {
        let schema = self.dump_schema()?;
        let json = serde_json::to_vec(&schema)?;
        let payload = match compression {
            CompressionFlag::None => json,
            CompressionFlag::Gzip => compress(&json)?,
        };

        let header = FrameHeader {
            version: FRAME_VERSION,
            compression,
        };
        let mut frame = Vec::with_capacity(FRAME_HEADER_LEN + payload.len());
        frame.extend_from_slice(&header.encode());
        frame.extend_from_slice(&payload);
        debug!(
            "encoded schema frame: {} payload bytes, compression {:?}",
            frame.len() - FRAME_HEADER_LEN,
            compression
        );
        Ok(frame)
    }

    /// Reconstructs a form from a framed binary encoding.
    pub fn load_schema_bin(bytes: &[u8]) -> FormResult<Form> {
        let header = FrameHeader::parse(bytes)?;
        let payload = &bytes[FRAME_HEADER_LEN..];
        let json = match header.compression {
            CompressionFlag::None => payload.to_vec(),
            CompressionFlag::Gzip => decompress(payload)?,
        };
        let schema: Schema = serde_json::from_slice(&json)?;
        Form::load_schema(&schema)
    }

    /// Serializes the schema into a text-safe base64 transport encoding
    /// over the binary frame.
    pub fn dump_schema_b64(&self, compression: CompressionFlag) -> FormResult<String> {
        let frame = self.dump_schema_bin(compression)?;
        Ok(general_purpose::STANDARD.encode(frame))
    }

    /// Reconstructs a form from the base64 transport encoding.
    pub fn load_schema_b64(encoded: &str) -> FormResult<Form> {
        let frame = general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|e| FormError::Transport(format!("base64 decode error: {}", e)))?;
        Form::load_schema_bin(&frame)
    }
}
