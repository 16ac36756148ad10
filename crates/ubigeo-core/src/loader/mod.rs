// crates/ubigeo-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (file lookup, decompression, binary snapshots)
//! and hands parsed tables to the [`ResourceStore`](crate::store::ResourceStore).

use crate::error::{Result, UbigeoError};
use crate::store::Resource;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "cache")]
mod cache;

/// Environment variable overriding the default data directory.
pub const DATA_DIR_ENV: &str = "UBIGEO_DATA_DIR";

/// Directory holding the bundled resource tables.
///
/// `$UBIGEO_DATA_DIR` wins when set; otherwise the `data/` directory next to
/// this crate's manifest is used, which works both from the workspace and
/// when the crate is a dependency (as long as `data/` ships with it).
pub fn default_data_dir() -> PathBuf {
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
    }
}

/// Finds the file backing `resource`: `<name>.json`, or `<name>.json.gz`
/// when the `compact` feature is on.
pub fn locate(dir: &Path, resource: Resource) -> Result<PathBuf> {
    let plain = dir.join(resource.file_name());
    if plain.is_file() {
        return Ok(plain);
    }

    #[cfg(feature = "compact")]
    {
        let gz = dir.join(format!("{}.gz", resource.file_name()));
        if gz.is_file() {
            return Ok(gz);
        }
    }

    Err(UbigeoError::Resource {
        name: resource.name(),
        path: plain,
    })
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the file
/// name ends in `.gz`.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|ext| ext == "gz") {
        use flate2::read::GzDecoder;
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}

/// Reads and parses one resource table from `dir`.
///
/// With the `cache` feature a bincode snapshot (`<file>.bin`) is preferred
/// while it is newer than its source, and refreshed after every JSON parse.
/// Snapshot failures never fail the load.
pub fn read_resource<T>(dir: &Path, resource: Resource) -> Result<T>
where
    T: DeserializeOwned + Serialize,
{
    let path = locate(dir, resource)?;

    #[cfg(feature = "cache")]
    let cache_path = cache::get_cache_path(&path);

    #[cfg(feature = "cache")]
    if cache::is_cache_fresh(&path, &cache_path) {
        match cache::read_cache::<T>(&cache_path) {
            Ok(table) => {
                tracing::debug!(resource = resource.name(), path = %cache_path.display(), "loaded binary snapshot");
                return Ok(table);
            }
            Err(e) => {
                tracing::debug!(resource = resource.name(), error = %e, "ignoring unreadable snapshot");
            }
        }
    }

    let reader = open_stream(&path)?;
    let table: T = serde_json::from_reader(reader)?;
    tracing::debug!(resource = resource.name(), path = %path.display(), "parsed JSON resource");

    #[cfg(feature = "cache")]
    if let Err(e) = cache::write_cache(&cache_path, &table) {
        tracing::debug!(resource = resource.name(), error = %e, "could not write binary snapshot");
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_resource_reports_expected_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = locate(dir.path(), Resource::Departamentos).unwrap_err();
        match err {
            UbigeoError::Resource { name, path } => {
                assert_eq!(name, "departamentos");
                assert!(path.ends_with("departamentos.json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reads_plain_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("macrorregiones.json"),
            r#"{"inei": {"Amazonas": "Oriente"}}"#,
        )
        .unwrap();

        let table: HashMap<String, HashMap<String, String>> =
            read_resource(dir.path(), Resource::Macrorregiones).unwrap();
        assert_eq!(table["inei"]["Amazonas"], "Oriente");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("otros.json"), "{not json").unwrap();

        let err = read_resource::<HashMap<String, String>>(dir.path(), Resource::Otros)
            .unwrap_err();
        assert!(matches!(err, UbigeoError::Json(_)));
    }

    #[cfg(feature = "compact")]
    #[test]
    fn reads_gzipped_json() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let file = File::create(dir.path().join("departamentos.json.gz")).unwrap();
        let mut enc = GzEncoder::new(file, Compression::default());
        enc.write_all(br#"{"inei": {"01": "Amazonas"}}"#).unwrap();
        enc.finish().unwrap();

        let table: HashMap<String, HashMap<String, String>> =
            read_resource(dir.path(), Resource::Departamentos).unwrap();
        assert_eq!(table["inei"]["01"], "Amazonas");
    }
}
