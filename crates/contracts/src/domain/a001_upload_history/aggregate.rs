use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Label for records without an employee name
pub const UNKNOWN_EMPLOYEE: &str = "Unknown";

/// One uploaded file as returned by `GET /api/history`.
///
/// The server joins `files`, `upload_sessions` and `users`; extra columns
/// (`user_id`, `user_role`, `manager_id`) are ignored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadHistoryRecord {
    /// Opaque id; the server sends a SERIAL integer, tests and fixtures use strings
    #[serde(deserialize_with = "deserialize_record_id")]
    pub id: String,
    /// Raw timestamp as sent by the server (HTTP-date or ISO 8601)
    pub session_date: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    /// Nullable columns; `null` reads as empty / zero
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_size: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub validation_status: String,
    #[serde(default)]
    pub validation_errors: Option<String>,
}

impl UploadHistoryRecord {
    /// Parsed `session_date`, `None` when the server sent something unreadable
    pub fn session_time(&self) -> Option<DateTime<Utc>> {
        parse_session_date(&self.session_date)
    }

    /// UTC calendar month of the session as `YYYY-MM`
    pub fn session_month(&self) -> Option<String> {
        self.session_time()
            .map(|dt| dt.format("%Y-%m").to_string())
    }

    /// Employee name for display; blank and missing names both read "Unknown"
    pub fn employee_display(&self) -> &str {
        match self.employee_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_EMPLOYEE,
        }
    }
}

/// Parse a session timestamp.
///
/// Accepts RFC 3339 (`2024-06-03T10:15:00Z`), RFC 2822 / HTTP-date
/// (`Mon, 03 Jun 2024 10:15:00 GMT`, what Flask's `jsonify` emits) and
/// offset-less ISO date-times, which are read as UTC.
pub fn parse_session_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_record_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Unsigned(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Unsigned(n) => n.to_string(),
    })
}
