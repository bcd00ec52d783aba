// CLASSIFICATION: COMMUNITY
// Filename: ue_view.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! Cross-gNB UE projections.
//!
//! Every function here is a pure read over a registry snapshot. Output order
//! is registry order, then each gNB's stored list order.

use serde::Serialize;

use crate::model::GnbRecord;

/// RAN UE tagged with its owning gNB.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RanUeEntry {
    pub imsi: String,
    pub nrdc_indicator: bool,
    pub gnb_id: String,
    pub gnb_name: String,
}

/// Xn UE tagged with its owning gNB.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XnUeEntry {
    pub imsi: String,
    pub gnb_id: String,
    pub gnb_name: String,
}

/// Dashboard totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySummary {
    pub gnb_count: usize,
    pub ran_ue_count: usize,
    pub xn_ue_count: usize,
}

pub fn ran_ue_list(records: &[GnbRecord]) -> Vec<RanUeEntry> {
    records
        .iter()
        .flat_map(|gnb| {
            gnb.ran_ue_list.iter().map(move |ue| RanUeEntry {
                imsi: ue.imsi.clone(),
                nrdc_indicator: ue.nrdc_indicator,
                gnb_id: gnb.gnb_id.clone(),
                gnb_name: gnb.gnb_name.clone(),
            })
        })
        .collect()
}

pub fn xn_ue_list(records: &[GnbRecord]) -> Vec<XnUeEntry> {
    records
        .iter()
        .flat_map(|gnb| {
            gnb.xn_ue_list.iter().map(move |ue| XnUeEntry {
                imsi: ue.imsi.clone(),
                gnb_id: gnb.gnb_id.clone(),
                gnb_name: gnb.gnb_name.clone(),
            })
        })
        .collect()
}

pub fn summarize(records: &[GnbRecord]) -> RegistrySummary {
    RegistrySummary {
        gnb_count: records.len(),
        ran_ue_count: records.iter().map(|g| g.ran_ue_list.len()).sum(),
        xn_ue_count: records.iter().map(|g| g.xn_ue_list.len()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RanUe, XnUe};

    fn gnb(id: &str, name: &str, ran: &[(&str, bool)], xn: &[&str]) -> GnbRecord {
        let mut rec = GnbRecord::new(id, name);
        rec.ran_ue_list = ran.iter().map(|(imsi, dc)| RanUe::new(*imsi, *dc)).collect();
        rec.xn_ue_list = xn.iter().map(|imsi| XnUe::new(*imsi)).collect();
        rec
    }

    #[test]
    fn flattens_in_registry_then_list_order() {
        let records = vec![
            gnb("g1", "one", &[("u1", false), ("u2", true)], &[]),
            gnb("g2", "two", &[("u3", false)], &[]),
        ];
        let view = ran_ue_list(&records);
        let got: Vec<_> = view
            .iter()
            .map(|e| (e.imsi.as_str(), e.gnb_id.as_str(), e.gnb_name.as_str()))
            .collect();
        assert_eq!(got, [("u1", "g1", "one"), ("u2", "g1", "one"), ("u3", "g2", "two")]);
        assert!(view[1].nrdc_indicator);
    }

    #[test]
    fn xn_view_tags_owner() {
        let records = vec![
            gnb("g1", "one", &[], &["x1"]),
            gnb("g2", "two", &[("u1", false)], &["x2", "x3"]),
        ];
        let view = xn_ue_list(&records);
        assert_eq!(view.len(), 3);
        assert_eq!(view[0], XnUeEntry { imsi: "x1".into(), gnb_id: "g1".into(), gnb_name: "one".into() });
        assert_eq!(view[2].gnb_id, "g2");
    }

    #[test]
    fn defaults_flow_through() {
        let records = vec![GnbRecord {
            ran_ue_list: vec![RanUe::default()],
            ..GnbRecord::default()
        }];
        assert_eq!(ran_ue_list(&records), vec![RanUeEntry::default()]);
    }

    #[test]
    fn summary_counts() {
        let records = vec![
            gnb("g1", "one", &[("u1", false), ("u2", true)], &["x1"]),
            gnb("g2", "two", &[], &[]),
        ];
        assert_eq!(
            summarize(&records),
            RegistrySummary { gnb_count: 2, ran_ue_count: 2, xn_ue_count: 1 }
        );
        assert_eq!(summarize(&[]), RegistrySummary::default());
    }
}
