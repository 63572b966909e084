//! High-score persistence: one integer in a JSON file under
//! ~/.recycle-rush/.
//!
//! Storage is best-effort: any load failure degrades to "no record" so
//! the game runs fine with storage disabled or the file corrupted.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const HIGHSCORE_FILE: &str = "highscore.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// Get the ~/.recycle-rush/ directory path, creating it if needed.
fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".recycle-rush");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Read a record from `path`, treating every failure as "no record".
pub fn load_from(path: &Path) -> u32 {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str::<HighScoreFile>(&json)
            .map(|f| f.high_score)
            .unwrap_or_default(),
        Err(_) => 0,
    }
}

/// Write `high_score` to `path` as pretty-printed JSON.
pub fn save_to(path: &Path, high_score: u32) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&HighScoreFile { high_score })
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}

/// Load the stored record, or 0 when storage is unavailable.
pub fn load() -> u32 {
    match data_dir() {
        Ok(dir) => load_from(&dir.join(HIGHSCORE_FILE)),
        Err(_) => 0,
    }
}

/// Persist a new record.
pub fn save(high_score: u32) -> io::Result<()> {
    save_to(&data_dir()?.join(HIGHSCORE_FILE), high_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn test_load_missing_returns_zero() {
        assert_eq!(load_from(&temp_path("rr_missing_highscore_12345.json")), 0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("rr_highscore_roundtrip.json");
        save_to(&path, 230).expect("save should succeed");
        assert_eq!(load_from(&path), 230);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_overwrite_keeps_latest() {
        let path = temp_path("rr_highscore_overwrite.json");
        save_to(&path, 100).expect("save should succeed");
        save_to(&path, 150).expect("save should succeed");
        assert_eq!(load_from(&path), 150);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_corrupt_file_returns_zero() {
        let path = temp_path("rr_highscore_corrupt.json");
        fs::write(&path, "not json at all {").expect("write should succeed");
        assert_eq!(load_from(&path), 0);
        fs::remove_file(path).ok();
    }
}
