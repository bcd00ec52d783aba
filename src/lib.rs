// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v1.1
// Date Modified: 2026-10-17
// Author: Lukas Bower

//! Client-side registry of gNB agents and their attached UEs.
//!
//! [`GnbRegistry`] owns the canonical gNB list, upserts on duplicate id or
//! address, and writes every mutation through to a [`KeyValueStore`]. The
//! cross-gNB UE lists are recomputed from the current list on each read.

/// gNB, UE and connection records
pub mod model;

/// Key-value persistence and the gNB list adapter
pub mod storage;

/// Registry store and derived UE views
pub mod registry;

/// Registration form and backend reply handling
pub mod registration;

/// File and environment configuration
pub mod config;

/// Operator CLI
pub mod cli;

pub use model::{Connection, GnbRecord, RanUe, Snssai, XnUe};
pub use registry::{AddOutcome, GnbRegistry, RanUeEntry, RegistryError, RegistrySummary, XnUeEntry};
pub use storage::{FileStore, KeyValueStore, MemoryStore, RecordStore, StorageError};
