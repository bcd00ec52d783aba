// CLASSIFICATION: COMMUNITY
// Filename: gnb_registry.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! Canonical list of registered gNBs.
//!
//! The registry is hydrated once from its [`RecordStore`] and then written
//! through on every mutation. In-memory state is updated first; if the write
//! fails the change is kept and the caller gets [`RegistryError::Persist`].

use log::{debug, info, warn};
use thiserror::Error;

use super::ue_view::{self, RanUeEntry, RegistrySummary, XnUeEntry};
use crate::model::{Connection, GnbRecord};
use crate::storage::{KeyValueStore, RecordStore, StorageError};

/// Errors returned by [`GnbRegistry`] mutations.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry updated in memory but not persisted: {0}")]
    Persist(#[from] StorageError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Result of [`GnbRegistry::add`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOutcome {
    /// An existing row was overwritten rather than a new row appended.
    pub merged: bool,
    /// Other rows dropped because they collided with the merged record.
    pub evicted: Vec<GnbRecord>,
}

/// Registry of gNB records with write-through persistence.
#[derive(Debug)]
pub struct GnbRegistry<S> {
    records: Vec<GnbRecord>,
    storage: RecordStore<S>,
}

impl<S: KeyValueStore> GnbRegistry<S> {
    /// Hydrate the registry from storage.
    pub fn open(storage: RecordStore<S>) -> Self {
        let records = storage.load();
        info!("gNB registry loaded {} record(s) from {:?}", records.len(), storage.key());
        Self { records, storage }
    }

    /// Insert `candidate` or overwrite the row it duplicates.
    ///
    /// A row is a duplicate when its id equals the candidate's (non-empty) id
    /// or its stored connection equals `connection`. The first such row in
    /// registry order is replaced wholesale; any later row that still shares
    /// the id or the connection with the new record is evicted.
    pub fn add(&mut self, mut candidate: GnbRecord, connection: Connection) -> RegistryResult<AddOutcome> {
        candidate.connection = Some(connection.clone());
        let is_dup = |r: &GnbRecord| {
            (candidate.has_id() && r.gnb_id == candidate.gnb_id) || r.matches_connection(&connection)
        };

        let outcome = match self.records.iter().position(|r| is_dup(r)) {
            Some(idx) => {
                let mut evicted = Vec::new();
                let mut i = 0;
                self.records.retain(|r| {
                    let keep = i == idx || !is_dup(r);
                    if !keep {
                        evicted.push(r.clone());
                    }
                    i += 1;
                    keep
                });
                for r in &evicted {
                    warn!(
                        "gNB {:?} at {:?} evicted: collides with {:?} at {}",
                        r.gnb_id, r.connection, candidate.gnb_id, connection
                    );
                }
                // Evicted rows all sit after `idx`, so the target keeps its index.
                info!("gNB {:?} at {} merged into existing row", candidate.gnb_id, connection);
                self.records[idx] = candidate;
                AddOutcome { merged: true, evicted }
            }
            None => {
                info!("gNB {:?} at {} registered", candidate.gnb_id, connection);
                self.records.push(candidate);
                AddOutcome::default()
            }
        };

        self.persist()?;
        Ok(outcome)
    }

    /// Remove every record with `gnb_id`. Absent ids are a no-op.
    pub fn remove(&mut self, gnb_id: &str) -> RegistryResult<()> {
        let before = self.records.len();
        self.records.retain(|r| r.gnb_id != gnb_id);
        let removed = before - self.records.len();
        if removed == 0 {
            debug!("remove: no gNB {:?}", gnb_id);
        } else {
            info!("gNB {:?} removed", gnb_id);
        }
        self.persist()
    }

    /// Set the NR-DC flag on one RAN UE. Unknown gNB or IMSI is a no-op.
    pub fn update_ue_indicator(&mut self, gnb_id: &str, imsi: &str, indicator: bool) -> RegistryResult<()> {
        let ue = self
            .records
            .iter_mut()
            .find(|r| r.matches_id(gnb_id))
            .and_then(|r| r.ran_ue_mut(imsi));
        match ue {
            Some(ue) => {
                ue.nrdc_indicator = indicator;
                info!("UE {:?} on gNB {:?}: nrdcIndicator={}", imsi, gnb_id, indicator);
            }
            None => debug!("update_ue_indicator: no UE {:?} on gNB {:?}", imsi, gnb_id),
        }
        self.persist()
    }

    /// Records in insertion order.
    pub fn list(&self) -> &[GnbRecord] {
        &self.records
    }

    pub fn get(&self, gnb_id: &str) -> Option<&GnbRecord> {
        self.records.iter().find(|r| r.matches_id(gnb_id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ran_ues(&self) -> Vec<RanUeEntry> {
        ue_view::ran_ue_list(&self.records)
    }

    pub fn xn_ues(&self) -> Vec<XnUeEntry> {
        ue_view::xn_ue_list(&self.records)
    }

    pub fn summary(&self) -> RegistrySummary {
        ue_view::summarize(&self.records)
    }

    pub fn storage(&self) -> &RecordStore<S> {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut RecordStore<S> {
        &mut self.storage
    }

    fn persist(&mut self) -> RegistryResult<()> {
        self.storage.save(&self.records).map_err(|e| {
            warn!("persisting gNB registry failed: {}", e);
            RegistryError::from(e)
        })
    }
}
