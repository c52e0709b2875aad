use jsonseal_core::{JsonsealError, Result, Sha256Digest};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Read size used by [`sha256_file`].
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Compute SHA-256 of a file's contents, reading it in
/// [`DEFAULT_CHUNK_SIZE`] blocks.
pub fn sha256_file(path: &Path) -> Result<Sha256Digest> {
    sha256_file_chunked(path, DEFAULT_CHUNK_SIZE)
}

/// Compute SHA-256 of a file's contents with an explicit read size.
///
/// The digest does not depend on `chunk_size`; only peak memory does.
/// A size of zero is treated as one.
pub fn sha256_file_chunked(path: &Path, chunk_size: usize) -> Result<Sha256Digest> {
    let file = File::open(path).map_err(|e| JsonsealError::file_access(path, e))?;
    let digest =
        sha256_reader(file, chunk_size).map_err(|e| JsonsealError::file_access(path, e))?;

    tracing::debug!(path = %path.display(), %digest, "hashed file");
    Ok(digest)
}

/// Compute SHA-256 over everything `reader` yields until end-of-file.
pub fn sha256_reader<R: Read>(mut reader: R, chunk_size: usize) -> std::io::Result<Sha256Digest> {
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; chunk_size.max(1)];
    let mut total: u64 = 0;

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..n]);
        total += n as u64;
    }

    tracing::trace!(bytes = total, chunk_size = buffer.len(), "stream hashed");
    let bytes: [u8; 32] = hasher.finalize().into();
    Ok(Sha256Digest::from(bytes))
}

/// Compute SHA-256 of a byte slice.
pub fn sha256_bytes(data: &[u8]) -> Sha256Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let bytes: [u8; 32] = hasher.finalize().into();
    Sha256Digest::from(bytes)
}
