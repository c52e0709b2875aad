use crate::Cli;
use anyhow::{Context, Result};
use jsonseal_core::Sha256Digest;
use jsonseal_render::PrettyJsonWriter;
use std::path::Path;

pub fn run(cli: &Cli) -> Result<()> {
    if !cli.extra.is_empty() {
        tracing::debug!(count = cli.extra.len(), "ignoring extra arguments");
    }
    let digest = seal(&cli.file_name, &cli.content)?;
    println!("{digest}");
    Ok(())
}

/// Write `content` normalized to `path`, then hash what landed on disk.
fn seal(path: &Path, content: &str) -> Result<Sha256Digest> {
    let written = PrettyJsonWriter::new()
        .write_file(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = written, "normalized JSON written");

    let digest = jsonseal_digest::sha256_file(path)
        .with_context(|| format!("failed to hash {}", path.display()))?;
    tracing::info!(%digest, "digest computed");

    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn seal_hashes_bytes_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let digest = seal(&path, r#"{"a":1,"b":[1,2,3]}"#).unwrap();

        let on_disk = fs::read(&path).unwrap();
        assert_eq!(digest, jsonseal_digest::sha256_bytes(&on_disk));
        assert_eq!(
            digest.to_hex(),
            "8581d1e50068c0a901508574bad8c7103cc1595c457918d34247a514d41953d4"
        );
    }

    #[test]
    fn seal_digest_differs_from_raw_input_hash() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let input = r#"{"a":1}"#;

        let digest = seal(&path, input).unwrap();

        assert_ne!(digest, jsonseal_digest::sha256_bytes(input.as_bytes()));
    }

    #[test]
    fn seal_invalid_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let err = seal(&path, "{bad json").unwrap_err();

        assert!(format!("{err:#}").contains("parse error"), "{err:#}");
        assert!(err.to_string().contains("out.json"));
    }
}
