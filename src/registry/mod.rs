// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! gNB registry and the UE views derived from it.

mod gnb_registry;
pub mod ue_view;

pub use gnb_registry::{AddOutcome, GnbRegistry, RegistryError, RegistryResult};
pub use ue_view::{RanUeEntry, RegistrySummary, XnUeEntry};
