//! Streaming SHA-256 content hashing.

mod hash;

pub use hash::{DEFAULT_CHUNK_SIZE, sha256_bytes, sha256_file, sha256_file_chunked, sha256_reader};
