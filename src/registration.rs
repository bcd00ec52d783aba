// CLASSIFICATION: COMMUNITY
// Filename: registration.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! Values crossing from the registration flow into the registry.
//!
//! The HTTP exchange with the console backend happens elsewhere. This module
//! validates the operator's form input, decodes the backend's reply and hands
//! an already-resolved record to [`GnbRegistry::add`]. A rejected or
//! malformed reply never touches the registry.

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Connection, GnbRecord};
use crate::registry::{AddOutcome, GnbRegistry, RegistryError};
use crate::storage::KeyValueStore;

/// Errors raised before or while handing a registration to the registry.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Invalid port number: {0:?}")]
    InvalidPort(String),
    #[error("malformed registration response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("registration rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;

/// Body of the register call: where the gNB can be reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub ip: String,
    pub port: u16,
}

impl RegistrationRequest {
    /// Build a request from raw form fields.
    pub fn from_form(ip: &str, port: &str) -> RegistrationResult<Self> {
        let ip = ip.trim();
        let port = port.trim();
        if ip.is_empty() || port.is_empty() {
            return Err(RegistrationError::MissingField);
        }
        let port = match port.parse::<u16>() {
            Ok(p) if p >= 1 => p,
            _ => return Err(RegistrationError::InvalidPort(port.to_string())),
        };
        Ok(Self { ip: ip.to_string(), port })
    }

    pub fn connection(&self) -> Connection {
        Connection::new(self.ip.clone(), self.port)
    }
}

/// Backend reply: a status message plus the gNB info on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gnb_info: Option<GnbRecord>,
}

impl RegistrationResponse {
    pub fn parse(body: &str) -> RegistrationResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn into_record(self) -> RegistrationResult<GnbRecord> {
        match self.gnb_info {
            Some(info) => Ok(info),
            None if self.message.is_empty() => {
                Err(RegistrationError::Rejected("Failed to add gNB".into()))
            }
            None => Err(RegistrationError::Rejected(self.message)),
        }
    }
}

/// Decode `body` and upsert the gNB it describes at `request`'s address.
pub fn register<S: KeyValueStore>(
    registry: &mut GnbRegistry<S>,
    request: &RegistrationRequest,
    body: &str,
) -> RegistrationResult<AddOutcome> {
    let record = RegistrationResponse::parse(body)
        .and_then(RegistrationResponse::into_record)
        .map_err(|e| {
            warn!("registration of {} failed: {}", request.connection(), e);
            e
        })?;
    Ok(registry.add(record, request.connection())?)
}

/// DC-status toggle sent by the console for one RAN UE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NrdcModifyRequest {
    pub gnb_id: String,
    pub imsi: String,
    pub nrdc_indicator: bool,
}

impl NrdcModifyRequest {
    pub fn apply<S: KeyValueStore>(&self, registry: &mut GnbRegistry<S>) -> Result<(), RegistryError> {
        registry.update_ue_indicator(&self.gnb_id, &self.imsi, self.nrdc_indicator)
    }
}
