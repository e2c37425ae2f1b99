//! Verify that a file starts with the Java class file magic number.
//!
//! Only the first four bytes of the file are looked at. They are decoded as a
//! big-endian `u32` and compared with `0xCAFEBABE`; nothing else about the
//! class file is parsed.
pub use classmagic_format::{MAGIC_BYTES, MAGIC_NUMBER, SIGNATURE_LEN};

pub mod error;
pub mod reader;

pub use error::SignatureError;
pub use reader::{read_class_magic, read_magic_from, verify_class_magic};

#[cfg(doctest)]
doc_comment::doctest!("../README.md", readme);
