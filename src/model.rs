// CLASSIFICATION: COMMUNITY
// Filename: model.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! Records tracked by the gNB registry.
//!
//! Field names on the wire are camelCase and match the console's persisted
//! snapshot. Optional structures (`snssai`, `connection`) are omitted when
//! absent; missing scalars and lists fall back to their defaults on load.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Network slice selector attached to a gNB.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snssai {
    #[serde(default)]
    pub sst: String,
    #[serde(default)]
    pub sd: String,
}

/// Admin-entered reachability info for a gNB.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub ip: String,
    pub port: u16,
}

impl Connection {
    pub fn new(ip: impl Into<String>, port: u16) -> Self {
        Self { ip: ip.into(), port }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}

/// UE attached through the RAN interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RanUe {
    #[serde(default)]
    pub imsi: String,
    #[serde(default)]
    pub nrdc_indicator: bool,
}

impl RanUe {
    pub fn new(imsi: impl Into<String>, nrdc_indicator: bool) -> Self {
        Self { imsi: imsi.into(), nrdc_indicator }
    }
}

/// UE visible through an Xn interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XnUe {
    #[serde(default)]
    pub imsi: String,
}

impl XnUe {
    pub fn new(imsi: impl Into<String>) -> Self {
        Self { imsi: imsi.into() }
    }
}

/// One registered base station.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GnbRecord {
    #[serde(default)]
    pub gnb_id: String,
    #[serde(default)]
    pub gnb_name: String,
    #[serde(default)]
    pub plmn_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snssai: Option<Snssai>,
    #[serde(default)]
    pub ran_ue_list: Vec<RanUe>,
    #[serde(default)]
    pub xn_ue_list: Vec<XnUe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<Connection>,
}

impl GnbRecord {
    pub fn new(gnb_id: impl Into<String>, gnb_name: impl Into<String>) -> Self {
        Self {
            gnb_id: gnb_id.into(),
            gnb_name: gnb_name.into(),
            ..Self::default()
        }
    }

    /// An empty id never matches another record.
    pub fn has_id(&self) -> bool {
        !self.gnb_id.is_empty()
    }

    pub fn matches_id(&self, gnb_id: &str) -> bool {
        self.has_id() && self.gnb_id == gnb_id
    }

    /// True when the stored connection equals `conn` on both ip and port.
    pub fn matches_connection(&self, conn: &Connection) -> bool {
        self.connection.as_ref() == Some(conn)
    }

    pub fn ran_ue_mut(&mut self, imsi: &str) -> Option<&mut RanUe> {
        self.ran_ue_list.iter_mut().find(|ue| ue.imsi == imsi)
    }
}
