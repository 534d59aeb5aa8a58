//! `.lab` backup codec.
//!
//! # Responsibility
//! - Wrap the stored aggregate in a versioned, checksummed envelope.
//! - Encode the envelope as base64 text and decode it back.
//!
//! # Invariants
//! - Export hashes the stored blob verbatim; import hashes and stores the
//!   compact re-serialization of the parsed `data`, keys in document order.
//! - A checksum mismatch never rejects a backup; it is only reported.
//! - Any decode or parse failure maps to `BackupError::InvalidFile`.

use crate::model::state::LifeAuditState;
use crate::repo::state_storage::StorageError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const BACKUP_FORMAT_VERSION: &str = "1.0";
pub const BACKUP_MIME_TYPE: &str = "application/octet-stream";
pub const BACKUP_EXTENSION: &str = "lab";
pub const INVALID_BACKUP_MESSAGE: &str = "Invalid backup file. Please select a valid .lab file.";

/// Error for backup export/import.
#[derive(Debug)]
pub enum BackupError {
    /// Nothing has been stored yet.
    NoData,
    /// Input is not a decodable backup; `stage` names the failing step
    /// (`base64`, `utf8`, `envelope` or `data`).
    InvalidFile { stage: &'static str },
    /// Stored blob is not valid JSON and cannot be embedded.
    CorruptStoredData(serde_json::Error),
    Storage(StorageError),
}

impl Display for BackupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoData => write!(f, "No data to export"),
            Self::InvalidFile { .. } => f.write_str(INVALID_BACKUP_MESSAGE),
            Self::CorruptStoredData(err) => write!(f, "stored data is not valid JSON: {err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BackupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CorruptStoredData(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::NoData | Self::InvalidFile { .. } => None,
        }
    }
}

impl From<StorageError> for BackupError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Export artifact handed to the caller for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFile {
    pub file_name: String,
    pub mime_type: &'static str,
    /// Base64 text of the JSON envelope.
    pub contents: String,
}

/// Result of a successful import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub state: LifeAuditState,
    pub version: String,
    pub exported_at: Option<String>,
    pub checksum_verified: bool,
}

/// Decoded backup plus the compact `data` text to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBackup {
    pub outcome: ImportOutcome,
    pub data: String,
}

/// Import progress as shown next to the import control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImportStatus {
    #[default]
    Idle,
    Success,
    Error(String),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeOut<'a> {
    version: &'a str,
    exported_at: String,
    data: &'a RawValue,
    checksum: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeIn {
    version: String,
    #[serde(default)]
    exported_at: Option<String>,
    data: Value,
    #[serde(default)]
    checksum: Option<String>,
}

/// 32-bit rolling hash (`h * 31 + unit`) over UTF-16 code units, absolute
/// value rendered in base 36.
pub fn checksum(text: &str) -> String {
    let hash = text.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    to_base36(i64::from(hash).unsigned_abs())
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

/// `life-audit-backup-YYYY-MM-DD.lab`
pub fn backup_file_name(date: NaiveDate) -> String {
    format!(
        "life-audit-backup-{}.{BACKUP_EXTENSION}",
        date.format("%Y-%m-%d")
    )
}

/// Wraps a stored blob into a `.lab` file.
///
/// # Errors
/// - `CorruptStoredData` when `stored` is not valid JSON.
pub fn encode_backup(stored: &str, now: DateTime<Utc>) -> Result<BackupFile, BackupError> {
    let data = RawValue::from_string(stored.to_string()).map_err(BackupError::CorruptStoredData)?;
    let envelope = EnvelopeOut {
        version: BACKUP_FORMAT_VERSION,
        exported_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        data: &data,
        checksum: checksum(stored),
    };
    let json = serde_json::to_string(&envelope).map_err(BackupError::CorruptStoredData)?;
    Ok(BackupFile {
        file_name: backup_file_name(now.date_naive()),
        mime_type: BACKUP_MIME_TYPE,
        contents: STANDARD.encode(json.as_bytes()),
    })
}

/// Decodes `.lab` text and validates the embedded aggregate.
///
/// # Errors
/// - `InvalidFile` on bad base64, non UTF-8 bytes, a malformed envelope or
///   `data` that is not a Life Audit aggregate.
pub fn decode_backup(text: &str) -> Result<DecodedBackup, BackupError> {
    let bytes = STANDARD
        .decode(text.trim())
        .map_err(|_| invalid("base64"))?;
    let json = String::from_utf8(bytes).map_err(|_| invalid("utf8"))?;
    let envelope: EnvelopeIn =
        serde_json::from_str(&json).map_err(|_| invalid("envelope"))?;

    let data = serde_json::to_string(&envelope.data).map_err(|_| invalid("data"))?;
    let mut state: LifeAuditState =
        serde_json::from_value(envelope.data).map_err(|_| invalid("data"))?;
    state.normalize();

    let checksum_verified = envelope.checksum.as_deref() == Some(checksum(&data).as_str());
    Ok(DecodedBackup {
        outcome: ImportOutcome {
            state,
            version: envelope.version,
            exported_at: envelope.exported_at,
            checksum_verified,
        },
        data,
    })
}

fn invalid(stage: &'static str) -> BackupError {
    BackupError::InvalidFile { stage }
}
