//! Disc image header parsing.
//!
//! GameCube and Wii disc images carry identity metadata at fixed offsets in
//! their first sectors. Raw ISO images place the disc header at the start of
//! the file; WBFS containers prepend a 0x200-byte container header, shifting
//! every field by that amount. No magic-number or checksum validation is
//! performed: any file with a recognized extension is read as-is, and a
//! short or malformed header degrades to empty strings and default values
//! rather than an error.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use serde::Serialize;

use crate::console::Region;
use crate::error::Result;

/// Parsed disc header fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscHeader {
    /// 6-character game identifier (game code + region + maker).
    pub title_id: String,
    /// Internal display name, up to 64 raw bytes.
    pub internal_name: String,
    pub region: Region,
    pub version: u8,
    /// 1-based disc number. Only meaningful for GameCube images.
    pub disc_number: u8,
}

impl DiscHeader {
    /// Header block size covering every field we read (name ends at 0x60).
    const BLOCK_SIZE: usize = 0x60;

    // Field offsets relative to the header base.
    const TITLE_ID_OFFSET: usize = 0x00;
    const TITLE_ID_LEN: usize = 6;
    const REGION_OFFSET: usize = 0x03;
    const DISC_NUMBER_OFFSET: usize = 0x06;
    const VERSION_OFFSET: usize = 0x07;
    const INTERNAL_NAME_OFFSET: usize = 0x20;
    const INTERNAL_NAME_LEN: usize = 64;

    /// Read every header field in one pass.
    ///
    /// Opening the file can fail (permissions, vanished mid-scan); anything
    /// after that is best-effort and never an error.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let block = read_at(path, header_base(path), Self::BLOCK_SIZE)?;

        Ok(Self {
            title_id: decode_ascii(field(&block, Self::TITLE_ID_OFFSET, Self::TITLE_ID_LEN)),
            internal_name: decode_name(field(
                &block,
                Self::INTERNAL_NAME_OFFSET,
                Self::INTERNAL_NAME_LEN,
            )),
            region: block
                .get(Self::REGION_OFFSET)
                .map(|&b| Region::from_byte(b))
                .unwrap_or_default(),
            version: byte_at(&block, Self::VERSION_OFFSET),
            disc_number: decode_disc_number(byte_at(&block, Self::DISC_NUMBER_OFFSET)),
        })
    }
}

/// WBFS containers store the disc header 0x200 bytes in; raw ISO images
/// start with it directly.
fn header_base(path: &Path) -> u64 {
    if has_extension(path, "iso") { 0x000 } else { 0x200 }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Read the 6-byte title ID.
pub fn read_title_id<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = read_at(
        path,
        header_base(path) + DiscHeader::TITLE_ID_OFFSET as u64,
        DiscHeader::TITLE_ID_LEN,
    )?;
    Ok(decode_ascii(&bytes))
}

/// Read the 64-byte internal name field.
pub fn read_internal_name<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = read_at(
        path,
        header_base(path) + DiscHeader::INTERNAL_NAME_OFFSET as u64,
        DiscHeader::INTERNAL_NAME_LEN,
    )?;
    Ok(decode_name(&bytes))
}

/// Read the region byte. Unmapped values resolve to [`Region::Unknown`].
pub fn read_region<P: AsRef<Path>>(path: P) -> Result<Region> {
    let path = path.as_ref();
    let bytes = read_at(path, header_base(path) + DiscHeader::REGION_OFFSET as u64, 1)?;
    Ok(bytes
        .first()
        .map(|&b| Region::from_byte(b))
        .unwrap_or_default())
}

/// Read the version byte as an unsigned 8-bit value.
pub fn read_version<P: AsRef<Path>>(path: P) -> Result<u8> {
    let path = path.as_ref();
    let bytes = read_at(path, header_base(path) + DiscHeader::VERSION_OFFSET as u64, 1)?;
    Ok(bytes.first().copied().unwrap_or(0))
}

/// Read the 1-based disc number. A short file or an unexpected byte yields
/// disc 1.
pub fn read_disc_number<P: AsRef<Path>>(path: P) -> Result<u8> {
    let path = path.as_ref();
    let bytes = read_at(
        path,
        header_base(path) + DiscHeader::DISC_NUMBER_OFFSET as u64,
        1,
    )?;
    Ok(decode_disc_number(bytes.first().copied().unwrap_or(0)))
}

/// The disc-number byte is 0-based on disc; anything other than 0x01 is
/// treated as the first disc.
fn decode_disc_number(byte: u8) -> u8 {
    if byte == 0x01 { 2 } else { 1 }
}

/// Open `path` read-only and read up to `len` bytes at `offset`.
///
/// A file shorter than `offset + len` yields whatever bytes exist past the
/// offset, down to an empty buffer. Only the open itself can fail.
fn read_at(path: &Path, offset: u64, len: usize) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(offset))?;

    let mut buffer = Vec::with_capacity(len);
    file.take(len as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Slice a field out of the header block, tolerating a truncated block.
fn field(block: &[u8], offset: usize, len: usize) -> &[u8] {
    let start = offset.min(block.len());
    let end = (offset + len).min(block.len());
    &block[start..end]
}

fn byte_at(block: &[u8], offset: usize) -> u8 {
    block.get(offset).copied().unwrap_or(0)
}

/// Decode bytes as ASCII, dropping undecodable bytes instead of failing.
fn decode_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect()
}

/// Internal names are NUL-padded and occasionally space-padded.
fn decode_name(bytes: &[u8]) -> String {
    decode_ascii(bytes)
        .trim_matches('\0')
        .trim()
        .to_string()
}
