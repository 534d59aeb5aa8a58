//! Whole-aggregate persistence over a [`StateStorage`] port.
//!
//! # Responsibility
//! - Load, save and clear the Life Audit aggregate.
//! - Export the stored blob as a `.lab` file and import one back.
//!
//! # Invariants
//! - `load()` never fails: unreadable or corrupt data yields `None`.
//! - A failed import leaves the stored blob untouched.

use crate::model::state::LifeAuditState;
use crate::repo::backup::{decode_backup, encode_backup, BackupError, BackupFile, ImportOutcome};
use crate::repo::state_storage::{StateStorage, StorageResult};
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Deserialize;

pub struct PersistenceGateway<S: StateStorage> {
    storage: S,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LastSavedField {
    #[serde(default)]
    last_saved: Option<DateTime<Utc>>,
}

impl<S: StateStorage> PersistenceGateway<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads and parses the stored aggregate.
    ///
    /// Missing data, storage failures and JSON errors all return `None`;
    /// the latter two are logged.
    pub fn load(&self) -> Option<LifeAuditState> {
        let blob = match self.storage.read_blob() {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                info!("event=state_load module=repo status=ok found=false");
                return None;
            }
            Err(err) => {
                warn!(
                    "event=state_load module=repo status=error error_code=storage_read_failed error={}",
                    err
                );
                return None;
            }
        };

        match serde_json::from_str::<LifeAuditState>(&blob) {
            Ok(mut state) => {
                state.normalize();
                info!(
                    "event=state_load module=repo status=ok found=true bytes={}",
                    blob.len()
                );
                Some(state)
            }
            Err(err) => {
                warn!(
                    "event=state_load module=repo status=warn error_code=state_parse_failed line={} column={}",
                    err.line(),
                    err.column()
                );
                None
            }
        }
    }

    /// Stamps `last_saved = now` and overwrites the stored blob.
    pub fn save(&self, state: &mut LifeAuditState, now: DateTime<Utc>) -> StorageResult<()> {
        state.last_saved = Some(now);
        let blob = serde_json::to_string(state)?;
        self.storage.write_blob(&blob)
    }

    /// `lastSaved` of the stored blob; `None` when absent or unreadable.
    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        let blob = self.storage.read_blob().ok().flatten()?;
        serde_json::from_str::<LastSavedField>(&blob)
            .ok()
            .and_then(|field| field.last_saved)
    }

    pub fn clear(&self) -> StorageResult<()> {
        self.storage.clear()
    }

    /// Builds a `.lab` file from the stored blob.
    ///
    /// # Errors
    /// - `NoData` when nothing is stored.
    /// - `CorruptStoredData` when the stored blob is not JSON.
    /// - `Storage` when the backend read fails.
    pub fn export(&self, now: DateTime<Utc>) -> Result<BackupFile, BackupError> {
        let stored = self.storage.read_blob()?.ok_or(BackupError::NoData)?;
        let file = encode_backup(&stored, now)?;
        info!(
            "event=backup_export module=repo status=ok bytes={}",
            file.contents.len()
        );
        Ok(file)
    }

    /// Decodes `.lab` text and replaces the stored blob with its data.
    ///
    /// A checksum mismatch is logged and reported in the outcome; the import
    /// still proceeds.
    ///
    /// # Errors
    /// - `InvalidFile` for undecodable input; storage is left untouched.
    /// - `Storage` when the backend write fails.
    pub fn import(&self, text: &str) -> Result<ImportOutcome, BackupError> {
        let decoded = match decode_backup(text) {
            Ok(decoded) => decoded,
            Err(err) => {
                if let BackupError::InvalidFile { stage } = &err {
                    warn!(
                        "event=backup_import module=repo status=error error_code=invalid_file stage={}",
                        stage
                    );
                }
                return Err(err);
            }
        };

        if !decoded.outcome.checksum_verified {
            warn!(
                "event=backup_import module=repo status=warn error_code=checksum_mismatch version={}",
                decoded.outcome.version
            );
        }

        self.storage.write_blob(&decoded.data)?;
        info!(
            "event=backup_import module=repo status=ok checksum_verified={}",
            decoded.outcome.checksum_verified
        );
        Ok(decoded.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::PersistenceGateway;
    use crate::model::state::LifeAuditState;
    use crate::repo::backup::BackupError;
    use crate::repo::state_storage::MemoryStateStorage;
    use chrono::{TimeZone, Utc};

    #[test]
    fn corrupt_blob_loads_as_none() {
        let gateway = PersistenceGateway::new(MemoryStateStorage::with_blob("{not json"));
        assert!(gateway.load().is_none());
        assert!(gateway.last_saved().is_none());
    }

    #[test]
    fn save_stamps_last_saved() {
        let gateway = PersistenceGateway::new(MemoryStateStorage::new());
        let now = Utc.with_ymd_and_hms(2026, 5, 5, 10, 0, 0).unwrap();
        let mut state = LifeAuditState::seeded();

        gateway.save(&mut state, now).unwrap();
        assert_eq!(state.last_saved, Some(now));
        assert_eq!(gateway.last_saved(), Some(now));
        assert_eq!(gateway.load().unwrap(), state);
    }

    #[test]
    fn export_without_data_fails() {
        let gateway = PersistenceGateway::new(MemoryStateStorage::new());
        let now = Utc.with_ymd_and_hms(2026, 5, 5, 10, 0, 0).unwrap();
        assert!(matches!(gateway.export(now), Err(BackupError::NoData)));
    }

    #[test]
    fn invalid_import_keeps_stored_blob() {
        let gateway = PersistenceGateway::new(MemoryStateStorage::with_blob("{\"currentSection\":\"x\"}"));
        assert!(gateway.import("%%%").is_err());
        assert_eq!(
            gateway.storage().snapshot().as_deref(),
            Some("{\"currentSection\":\"x\"}")
        );
    }
}
