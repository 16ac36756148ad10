// crates/ubigeo-core/src/loader/cache.rs
#![cfg(feature = "cache")]

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const CACHE_SUFFIX: &str = "bin";

/// `departamentos.json` -> `departamentos.json.bin`
pub fn get_cache_path(json_path: &Path) -> PathBuf {
    let filename = json_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    json_path.with_file_name(format!("{filename}.{CACHE_SUFFIX}"))
}

/// A snapshot is fresh when it exists and is not older than its source.
pub fn is_cache_fresh(json_path: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    match fs::metadata(json_path).and_then(|m| m.modified()) {
        Ok(json_time) => json_time <= cache_time,
        Err(_) => false,
    }
}

pub fn read_cache<T: DeserializeOwned>(cache_path: &Path) -> Result<T> {
    let reader = BufReader::new(File::open(cache_path)?);
    Ok(bincode::deserialize_from(reader)?)
}

/// Writes ANY serializable table to disk.
pub fn write_cache<T: Serialize>(cache_path: &Path, table: &T) -> Result<()> {
    let file = File::create(cache_path)?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, table)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Level, MetadataTable};

    #[test]
    fn cache_path_appends_suffix() {
        let p = get_cache_path(Path::new("/data/otros.json"));
        assert_eq!(p, PathBuf::from("/data/otros.json.bin"));
    }

    #[test]
    fn snapshot_round_trips_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("otros.json");
        fs::write(&json, "{}").unwrap();

        let table: MetadataTable = serde_json::from_str(
            r#"{"distritos": {"LINCE": {"capital": "Lince", "superficie": "3.03", "altitud": 134}}}"#,
        )
        .unwrap();

        let cache = get_cache_path(&json);
        assert!(!is_cache_fresh(&json, &cache));
        write_cache(&cache, &table).unwrap();
        assert!(is_cache_fresh(&json, &cache));

        let back: MetadataTable = read_cache(&cache).unwrap();
        assert_eq!(back[&Level::Distritos]["LINCE"], table[&Level::Distritos]["LINCE"]);
    }
}
