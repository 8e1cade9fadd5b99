use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

fn append_json_line<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, value)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    file.write_all(b"\n")
}

fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

#[derive(Debug, Serialize)]
pub struct LookupLogEntry {
    pub name: String,
    pub found: bool,
    pub rgba8888: u32,
    pub timestamp_ms: u128,
}

pub fn log_lookup<P: AsRef<Path>>(
    log_dir: P,
    name: &str,
    found: bool,
    rgba8888: u32,
) -> io::Result<()> {
    let log_dir = log_dir.as_ref();
    fs::create_dir_all(log_dir)?;
    let entry = LookupLogEntry {
        name: name.to_string(),
        found,
        rgba8888,
        timestamp_ms: timestamp_ms(),
    };
    append_json_line(log_dir.join("lookups.jsonl"), &entry)
}

#[derive(Debug, Serialize)]
pub struct SyncLogEntry {
    pub operation: String,
    pub entries: usize,
    pub timestamp_ms: u128,
}

pub fn log_sync<P: AsRef<Path>>(log_dir: P, operation: &str, entries: usize) -> io::Result<()> {
    let log_dir = log_dir.as_ref();
    fs::create_dir_all(log_dir)?;
    let entry = SyncLogEntry {
        operation: operation.to_string(),
        entries,
        timestamp_ms: timestamp_ms(),
    };
    append_json_line(log_dir.join("sync.jsonl"), &entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn lookup_entries_land_in_the_configured_directory() {
        let dir = env::temp_dir().join(format!("palette_logs_{}", std::process::id()));
        log_lookup(&dir, "Ocean Blue", true, 0x4F42_B5FF).unwrap();

        let contents = fs::read_to_string(dir.join("lookups.jsonl")).unwrap();
        let line = contents.lines().last().unwrap();
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["name"], "Ocean Blue");
        assert_eq!(value["found"], true);
        assert_eq!(value["rgba8888"], 0x4F42_B5FFu32);

        fs::remove_dir_all(&dir).ok();
    }
}
