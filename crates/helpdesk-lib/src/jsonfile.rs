//! Whole-file JSON I/O for the tickets mapping.
//!
//! The file holds a single object whose keys are ticket IDs and whose values
//! are complete tickets, indented with four spaces. Key order in the file is
//! the store's insertion order.
//!
//! Next to it, `<file>.seq` holds the next ticket number so that IDs of
//! deleted tickets are not handed out again by a later process.

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::de::{self, MapAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::{HelpdeskError, Result};
use crate::model::Ticket;

const INDENT: &[u8] = b"    ";

/// Tickets in file order, read from the on-disk object.
struct TicketMap(Vec<Ticket>);

impl<'de> Deserialize<'de> for TicketMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(TicketMapVisitor)
    }
}

struct TicketMapVisitor;

impl<'de> Visitor<'de> for TicketMapVisitor {
    type Value = TicketMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping ticket IDs to tickets")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<TicketMap, A::Error> {
        let mut tickets: Vec<Ticket> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, ticket)) = access.next_entry::<String, Ticket>()? {
            if key != ticket.id {
                return Err(de::Error::custom(format!(
                    "key '{key}' does not match ticket id '{}'",
                    ticket.id
                )));
            }
            if tickets.iter().any(|t| t.id == key) {
                return Err(de::Error::custom(format!("duplicate ticket id '{key}'")));
            }
            tickets.push(ticket);
        }
        Ok(TicketMap(tickets))
    }
}

/// Borrowed view used for writing, so saving never clones the tickets.
struct TicketMapRef<'a>(&'a [Ticket]);

impl Serialize for TicketMapRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|t| (t.id.as_str(), t)))
    }
}

/// Load all tickets from `path`.
///
/// A missing file, or one holding only whitespace, is an empty store.
///
/// # Errors
///
/// Returns `StorageCorrupt` if the content is not a valid ticket mapping,
/// or `Io` if the file exists but cannot be read.
pub fn load(path: &Path) -> Result<Vec<Ticket>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "tickets file absent; starting empty");
            return Ok(Vec::new());
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Err(corrupt(path, "file is not valid UTF-8"));
        }
        Err(e) => return Err(HelpdeskError::Io(e)),
    };

    if contents.trim().is_empty() {
        debug!(path = %path.display(), "tickets file empty");
        return Ok(Vec::new());
    }

    let TicketMap(tickets) =
        serde_json::from_str(&contents).map_err(|e| corrupt(path, e.to_string()))?;
    debug!(path = %path.display(), count = tickets.len(), "loaded tickets");
    Ok(tickets)
}

/// Render tickets in the on-disk format.
///
/// # Errors
///
/// Returns `Json` if serialization fails.
pub fn to_bytes(tickets: &[Ticket]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    TicketMapRef(tickets).serialize(&mut serializer)?;
    Ok(buf)
}

/// Save all tickets to `path`, replacing its previous content.
///
/// Writes a sibling temp file, syncs it and renames it over `path`, so a
/// reader sees either the old file or the new one.
///
/// # Errors
///
/// Returns `StorageWriteFailed` on any I/O failure.
pub fn save(path: &Path, tickets: &[Ticket]) -> Result<()> {
    let bytes = to_bytes(tickets)?;
    write_atomic(path, &bytes).map_err(|source| HelpdeskError::StorageWriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = tickets.len(), bytes = bytes.len(), "saved tickets");
    Ok(())
}

/// Sidecar holding the next ticket number for the tickets file at `path`.
#[must_use]
pub fn sequence_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".seq");
    PathBuf::from(name)
}

/// Read the next ticket number saved alongside `path`.
///
/// Returns `None` when the sidecar is absent, as for files written before
/// the counter existed.
///
/// # Errors
///
/// Returns `StorageCorrupt` if the sidecar does not hold a decimal number,
/// or `Io` if it exists but cannot be read.
pub fn load_sequence(path: &Path) -> Result<Option<u64>> {
    let seq_path = sequence_path(path);
    let contents = match fs::read_to_string(&seq_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Err(corrupt(&seq_path, "file is not valid UTF-8"));
        }
        Err(e) => return Err(HelpdeskError::Io(e)),
    };

    let next = contents
        .trim()
        .parse::<u64>()
        .map_err(|e| corrupt(&seq_path, format!("invalid ticket counter: {e}")))?;
    debug!(path = %seq_path.display(), next, "loaded ticket counter");
    Ok(Some(next))
}

/// Save the next ticket number alongside `path`, atomically.
///
/// # Errors
///
/// Returns `StorageWriteFailed` on any I/O failure.
pub fn save_sequence(path: &Path, next: u64) -> Result<()> {
    let seq_path = sequence_path(path);
    write_atomic(&seq_path, format!("{next}\n").as_bytes())
        .map_err(|source| HelpdeskError::StorageWriteFailed { path: seq_path, source })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path)?;
    let result = write_and_rename(&tmp_path, path, bytes);
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_and_rename(tmp_path: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp_path)?;
    file.write_all(bytes)?;
    file.flush()?;
    file.sync_all()?;
    drop(file);

    fs::rename(tmp_path, path)
}

fn temp_path(path: &Path) -> std::io::Result<PathBuf> {
    let mut name: OsString = path
        .file_name()
        .ok_or_else(|| {
            std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("{} does not name a file", path.display()),
            )
        })?
        .to_os_string();
    name.push(".tmp");
    Ok(path.with_file_name(name))
}

fn corrupt(path: &Path, reason: impl Into<String>) -> HelpdeskError {
    HelpdeskError::StorageCorrupt {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, Status};
    use chrono::NaiveDate;

    fn ticket(id: &str, first: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: "Smith".to_string(),
            issue: "VPN drops".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            priority: Priority::Medium,
            status: Status::Open,
        }
    }

    #[test]
    fn test_roundtrip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");

        let tickets = vec![ticket("10", "Zed"), ticket("2", "Amy"), ticket("7", "Bo")];
        save(&path, &tickets).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, tickets);
    }

    #[test]
    fn test_file_layout() {
        let bytes = to_bytes(&[ticket("1", "Alice")]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("{\n    \"1\": {\n        \"id\": \"1\",\n"));
        assert!(text.contains("        \"date\": \"2026-10-19\",\n"));
        assert!(text.ends_with("    }\n}"));
    }

    #[test]
    fn test_empty_store_layout() {
        assert_eq!(to_bytes(&[]).unwrap(), b"{}");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_blank_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        fs::write(&path, "  \n").unwrap();
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_invalid_json_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        fs::write(&path, "{\"1\": {").unwrap();
        assert!(matches!(
            load(&path),
            Err(HelpdeskError::StorageCorrupt { .. })
        ));
    }

    #[test]
    fn test_load_wrong_shape_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        fs::write(&path, "[]").unwrap();
        assert!(matches!(
            load(&path),
            Err(HelpdeskError::StorageCorrupt { .. })
        ));
    }

    #[test]
    fn test_load_key_mismatch_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        let body = serde_json::to_string(&ticket("2", "Amy")).unwrap();
        fs::write(&path, format!("{{\"1\": {body}}}")).unwrap();

        let err = load(&path).unwrap_err();
        match err {
            HelpdeskError::StorageCorrupt { reason, .. } => {
                assert!(reason.contains("does not match"), "{reason}");
            }
            other => panic!("expected StorageCorrupt, got {other:?}"),
        }
    }

    #[test]
    fn test_load_duplicate_key_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        let body = serde_json::to_string(&ticket("1", "Amy")).unwrap();
        fs::write(&path, format!("{{\"1\": {body}, \"1\": {body}}}")).unwrap();
        assert!(matches!(
            load(&path),
            Err(HelpdeskError::StorageCorrupt { .. })
        ));
    }

    #[test]
    fn test_save_creates_parent_dirs_and_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("tickets.json");
        save(&path, &[ticket("1", "Alice")]).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("data").join("tickets.json.tmp").exists());
    }

    #[test]
    fn test_save_failure_is_write_failed() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();
        let path = blocker.join("tickets.json");

        let err = save(&path, &[ticket("1", "Alice")]).unwrap_err();
        assert!(matches!(err, HelpdeskError::StorageWriteFailed { .. }));
    }

    #[test]
    fn test_load_invalid_utf8_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        fs::write(&path, [0xff, 0xfe]).unwrap();

        match load(&path).unwrap_err() {
            HelpdeskError::StorageCorrupt { reason, .. } => {
                assert!(reason.contains("UTF-8"), "{reason}");
            }
            other => panic!("expected StorageCorrupt, got {other:?}"),
        }
    }

    #[test]
    fn test_sequence_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        assert_eq!(load_sequence(&path).unwrap(), None);

        save_sequence(&path, 42).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("tickets.json.seq")).unwrap(),
            "42\n"
        );
        assert_eq!(load_sequence(&path).unwrap(), Some(42));
    }

    #[test]
    fn test_load_bad_sequence_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        fs::write(sequence_path(&path), "seven").unwrap();
        assert!(matches!(
            load_sequence(&path),
            Err(HelpdeskError::StorageCorrupt { .. })
        ));
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        save(&path, &[ticket("1", "Alice"), ticket("2", "Bob")]).unwrap();
        save(&path, &[ticket("2", "Bob")]).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "2");
    }
}
