//! Constants and decoding for the Java class file signature.
//!
//! Every class file starts with the four bytes `CA FE BA BE`. This crate holds
//! that knowledge without touching any I/O, so readers over files, buffers or
//! memory maps can share it.

/// Expected magic number at the start of a class file.
pub const MAGIC_NUMBER: u32 = 0xCAFE_BABE;

/// [`MAGIC_NUMBER`] as it appears on disk.
pub const MAGIC_BYTES: [u8; SIGNATURE_LEN] = MAGIC_NUMBER.to_be_bytes();

/// Number of leading bytes that make up the signature.
pub const SIGNATURE_LEN: usize = 4;

/// Decode the leading bytes of a class file. Class files are big-endian.
pub fn decode_signature(bytes: [u8; SIGNATURE_LEN]) -> u32 {
    u32::from_be_bytes(bytes)
}

pub fn valid_signature(magic: u32) -> bool {
    magic == MAGIC_NUMBER
}
