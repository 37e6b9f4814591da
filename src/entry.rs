//! The journal entry record and its identity and timestamp helpers.
//!
//! An entry is persisted as `{ id, createdAt, updatedAt, content }` with
//! timestamps in the `2024-01-15T14:30:00.000Z` form. Ids are opaque strings
//! made of the creation time in base 36 and a random suffix.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single journal entry.
///
/// `created_at` never changes after creation and is never later than
/// `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
    pub content: String,
}

impl Entry {
    /// Creates a new entry with a fresh id and both timestamps set to `now`,
    /// cut to millisecond precision.
    ///
    /// The content is stored as given; trimming is only used to decide
    /// whether a draft may be saved at all.
    pub fn new(content: impl Into<String>, now: DateTime<Utc>) -> Self {
        let now = now.trunc_subsecs(3);
        Entry {
            id: generate_id(now),
            created_at: now,
            updated_at: now,
            content: content.into(),
        }
    }

    /// Date portion of `created_at` (`YYYY-MM-DD`).
    pub fn created_date(&self) -> String {
        let stamp = format_timestamp(&self.created_at);
        match stamp.split_once('T') {
            Some((date, _)) => date.to_string(),
            None => stamp,
        }
    }
}

/// Generates an entry id from `now` plus a random suffix.
///
/// The millisecond timestamp keeps ids roughly ordered by creation; the
/// suffix keeps two ids created in the same millisecond apart.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use jotter::entry::generate_id;
///
/// let now = Utc::now();
/// let a = generate_id(now);
/// let b = generate_id(now);
/// assert_ne!(a, b);
/// assert!(a.contains('-'));
/// ```
pub fn generate_id(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().max(0) as u64;
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", to_base36(millis), &suffix[..8])
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Current time at millisecond precision, the precision entries are stored with.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Formats a timestamp as RFC 3339 UTC with millisecond precision.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses any RFC 3339 timestamp into UTC at millisecond precision.
/// Returns `None` when unparseable.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).trunc_subsecs(3))
}

/// Serde adapter keeping the on-disk timestamp shape stable.
pub(crate) mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_new_entry_sets_both_timestamps() {
        let now = fixed_now();
        let entry = Entry::new("  morning pages\n", now);

        assert_eq!(entry.created_at, now);
        assert_eq!(entry.updated_at, now);
        assert_eq!(entry.content, "  morning pages\n");
        assert!(!entry.id.is_empty());
    }

    #[test]
    fn test_generated_ids_do_not_collide_within_a_millisecond() {
        let now = fixed_now();
        let ids: HashSet<String> = (0..500).map(|_| generate_id(now)).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_id_prefix_encodes_timestamp() {
        let now = fixed_now();
        let id = generate_id(now);
        let (prefix, suffix) = id.split_once('-').unwrap();

        assert_eq!(
            u64::from_str_radix(prefix, 36).unwrap(),
            now.timestamp_millis() as u64
        );
        assert_eq!(suffix.len(), 8);
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn test_serializes_with_camel_case_and_millis() {
        let entry = Entry {
            id: "abc".to_string(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
            content: "hello".to_string(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["createdAt"], "2024-01-15T14:30:00.000Z");
        assert_eq!(json["updatedAt"], "2024-01-15T14:30:00.000Z");
        assert_eq!(json["content"], "hello");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_deserializes_offset_timestamps_as_utc() {
        let raw = r#"{"id":"x","createdAt":"2024-01-15T16:30:00+02:00","updatedAt":"2024-01-15T14:30:00Z","content":""}"#;
        let entry: Entry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.created_at, fixed_now());
        assert_eq!(entry.updated_at, fixed_now());
    }

    #[test]
    fn test_rejects_unparseable_timestamp() {
        let raw = r#"{"id":"x","createdAt":"yesterday","updatedAt":"2024-01-15T14:30:00Z","content":""}"#;
        assert!(serde_json::from_str::<Entry>(raw).is_err());
    }

    #[test]
    fn test_now_survives_serialization() {
        let entry = Entry::new("x", now());
        let json = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_wall_clock_entry_survives_serialization() {
        let entry = Entry::new("x", Utc::now());
        assert_eq!(entry.created_at.timestamp_subsec_nanos() % 1_000_000, 0);

        let json = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_created_date() {
        let entry = Entry::new("x", fixed_now());
        assert_eq!(entry.created_date(), "2024-01-15");
    }
}
