//! Reading the magic number from a class file.
use std::{fs::File, io::Read, path::Path};

use classmagic_format::{SIGNATURE_LEN, decode_signature, valid_signature};

use crate::error::SignatureError;

/// Read the first four bytes of the file at `path` as a big-endian `u32`.
///
/// The file is closed before returning, whether or not the read succeeded.
pub fn read_class_magic<P: AsRef<Path>>(path: P) -> Result<u32, SignatureError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SignatureError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("opened {path:?} to read class magic");
    read_magic_from(file, path)
}

/// Read the magic number from any reader. `path` is only used for error
/// messages.
///
/// A single `read` call is made. If it hands back fewer than four bytes the
/// input is treated as too small, even if more data would follow.
pub fn read_magic_from<R: Read>(mut reader: R, path: &Path) -> Result<u32, SignatureError> {
    let mut buf = [0u8; SIGNATURE_LEN];
    let n = reader
        .read(&mut buf)
        .map_err(|source| SignatureError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    log::trace!("read {n} signature bytes from {path:?}: {:02X?}", &buf[..n]);

    if n < SIGNATURE_LEN {
        return Err(SignatureError::TooSmall {
            path: path.to_path_buf(),
            len: n,
        });
    }
    Ok(decode_signature(buf))
}

/// Check whether the file at `path` starts with `0xCAFEBABE`.
///
/// A readable file with the wrong magic number is `Ok(false)`, not an error.
/// Errors from [`read_class_magic`] are passed through as is.
pub fn verify_class_magic<P: AsRef<Path>>(path: P) -> Result<bool, SignatureError> {
    let path = path.as_ref();
    let magic = read_class_magic(path)?;
    let valid = valid_signature(magic);
    if !valid {
        log::debug!("{path:?} has magic 0x{magic:X}, not a class file");
    }
    Ok(valid)
}
