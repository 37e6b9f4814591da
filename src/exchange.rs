//! Export envelopes and import reconciliation.
//!
//! Exports wrap entries in a versioned envelope:
//!
//! ```text
//! { "version": 2, "exportedAt": "...", "entries": [Entry, ...] }
//! { "version": 2, "exportedAt": "...", "entry": Entry }
//! ```
//!
//! Imports accept either shape and merge the candidates into the store by id:
//! a known id replaces that entry in place, an unknown id is appended. A file
//! that fails to parse changes nothing.

use crate::constants::{
    DATE_FORMAT_ISO, EXPORT_ALL_PREFIX, EXPORT_FILE_EXTENSION, EXPORT_ONE_PREFIX, EXPORT_VERSION,
};
use crate::entry::{self, Entry};
use crate::errors::{AppError, AppResult, ImportError};
use crate::store::{EntryStore, StorageSlot};
use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Envelope for a full export.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportAll<'a> {
    pub version: u32,
    #[serde(with = "entry::iso_millis")]
    pub exported_at: DateTime<Utc>,
    pub entries: &'a [Entry],
}

/// Envelope for a single-entry export.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOne<'a> {
    pub version: u32,
    #[serde(with = "entry::iso_millis")]
    pub exported_at: DateTime<Utc>,
    pub entry: &'a Entry,
}

pub fn export_all(entries: &[Entry], now: DateTime<Utc>) -> ExportAll<'_> {
    ExportAll {
        version: EXPORT_VERSION,
        exported_at: now,
        entries,
    }
}

pub fn export_one(entry: &Entry, now: DateTime<Utc>) -> ExportOne<'_> {
    ExportOne {
        version: EXPORT_VERSION,
        exported_at: now,
        entry,
    }
}

/// `jotter-export-YYYY-MM-DD.json`, dated `now`.
pub fn export_all_file_name(now: DateTime<Utc>) -> String {
    format!(
        "{}{}{}",
        EXPORT_ALL_PREFIX,
        now.format(DATE_FORMAT_ISO),
        EXPORT_FILE_EXTENSION
    )
}

/// `jotter-entry-YYYY-MM-DD.json`, dated by the entry's creation.
pub fn export_one_file_name(entry: &Entry) -> String {
    format!(
        "{}{}{}",
        EXPORT_ONE_PREFIX,
        entry.created_date(),
        EXPORT_FILE_EXTENSION
    )
}

/// Writes `envelope` as pretty JSON to `dir/file_name` and returns the path.
///
/// # Errors
///
/// Returns `AppError::Io` if `dir` is not an existing directory or the write
/// fails, and `AppError::Serialization` if the envelope cannot be encoded.
pub fn write_envelope<T: Serialize>(dir: &Path, file_name: &str, envelope: &T) -> AppResult<PathBuf> {
    if !dir.is_dir() {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Export directory does not exist: {}", dir.display()),
        )));
    }

    let json = serde_json::to_string_pretty(envelope)?;
    let path = dir.join(file_name);
    fs::write(&path, json)?;
    info!("Wrote export to {:?}", path);
    Ok(path)
}

/// Outcome of a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportReport {
    /// Candidates read from the file.
    pub imported: usize,
    /// Candidates whose id was new.
    pub added: usize,
    /// Candidates that replaced an entry with the same id.
    pub replaced: usize,
}

impl ImportReport {
    /// User-facing summary, e.g. `Imported 1 entry` or `Imported 3 entries`.
    pub fn summary(&self) -> String {
        let noun = if self.imported == 1 { "entry" } else { "entries" };
        format!("Imported {} {}", self.imported, noun)
    }
}

/// Parses an import file into normalized candidate entries.
///
/// The payload must be a JSON object with either an `entries` array or an
/// `entry` object; `entries` wins if both are present. The `version` field is
/// not checked.
///
/// Each candidate is normalized: a missing id gets a fresh one, a missing
/// `createdAt` becomes `now`, a missing `updatedAt` becomes `createdAt`, and
/// non-string content becomes empty.
pub fn parse_import(raw: &str, now: DateTime<Utc>) -> Result<Vec<Entry>, ImportError> {
    let value: Value = serde_json::from_str(raw).map_err(ImportError::InvalidJson)?;
    let envelope = value.as_object().ok_or(ImportError::UnrecognizedShape)?;

    match envelope.get("version") {
        Some(version) if version.as_u64() != Some(u64::from(EXPORT_VERSION)) => {
            debug!("Importing envelope with version {}", version);
        }
        _ => {}
    }

    let records: Vec<&Value> = match (envelope.get("entries"), envelope.get("entry")) {
        (Some(Value::Array(items)), _) => items.iter().collect(),
        (_, Some(single @ Value::Object(_))) => vec![single],
        _ => return Err(ImportError::UnrecognizedShape),
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| match record {
            Value::Object(fields) => Ok(normalize_candidate(fields, now)),
            _ => Err(ImportError::InvalidEntry { index }),
        })
        .collect()
}

fn normalize_candidate(fields: &Map<String, Value>, now: DateTime<Utc>) -> Entry {
    let id = match fields.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => entry::generate_id(now),
    };

    let created_at = timestamp_field(fields, "createdAt").unwrap_or_else(|| now.trunc_subsecs(3));
    let updated_at = timestamp_field(fields, "updatedAt")
        .unwrap_or(created_at)
        .max(created_at);

    let content = match fields.get("content") {
        Some(Value::String(content)) => content.clone(),
        _ => String::new(),
    };

    Entry {
        id,
        created_at,
        updated_at,
        content,
    }
}

fn timestamp_field(fields: &Map<String, Value>, key: &str) -> Option<DateTime<Utc>> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .and_then(entry::parse_timestamp)
}

/// Overlays `candidates` onto `existing` by id, in order.
///
/// Existing entries keep their positions; a candidate with a known id replaces
/// that entry wholesale; new ids are appended in candidate order. When the
/// same id appears twice among the candidates, the later one wins.
pub fn merge_by_id(existing: &[Entry], candidates: Vec<Entry>) -> (Vec<Entry>, ImportReport) {
    let mut merged = existing.to_vec();
    let mut positions: HashMap<String, usize> = merged
        .iter()
        .enumerate()
        .map(|(index, entry)| (entry.id.clone(), index))
        .collect();

    let mut report = ImportReport {
        imported: candidates.len(),
        ..ImportReport::default()
    };

    for candidate in candidates {
        match positions.get(&candidate.id) {
            Some(&index) => {
                merged[index] = candidate;
                report.replaced += 1;
            }
            None => {
                positions.insert(candidate.id.clone(), merged.len());
                merged.push(candidate);
                report.added += 1;
            }
        }
    }

    (merged, report)
}

/// Parses `raw` and merges it into `store`, flushing once.
///
/// On any parse or shape error the store is not touched.
pub fn import_into<S: StorageSlot>(
    store: &mut EntryStore<S>,
    raw: &str,
    now: DateTime<Utc>,
) -> AppResult<ImportReport> {
    let candidates = parse_import(raw, now)?;
    let (merged, report) = merge_by_id(store.entries(), candidates);
    store.replace_all(merged)?;
    info!(
        "Imported {} entries ({} added, {} replaced)",
        report.imported, report.added, report.replaced
    );
    Ok(report)
}
