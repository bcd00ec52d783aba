// CLASSIFICATION: COMMUNITY
// Filename: file_persistence.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

use std::fs;

use gnb_registry::{
    Connection, FileStore, GnbRecord, GnbRegistry, KeyValueStore, RanUe, RecordStore, Snssai, XnUe,
};
use tempfile::tempdir;

fn open(dir: &std::path::Path) -> GnbRegistry<FileStore> {
    GnbRegistry::open(RecordStore::new(FileStore::open(dir).unwrap()))
}

#[test]
fn registry_survives_reload() {
    let dir = tempdir().unwrap();
    let mut reg = open(dir.path());

    let mut g1 = GnbRecord::new("g1", "gnb-one");
    g1.plmn_id = "20893".into();
    g1.snssai = Some(Snssai { sst: "1".into(), sd: "010203".into() });
    g1.ran_ue_list = vec![RanUe::new("imsi-1", false)];
    g1.xn_ue_list = vec![XnUe::new("imsi-9")];
    reg.add(g1, Connection::new("10.0.0.1", 9000)).unwrap();
    reg.add(GnbRecord::new("g2", "gnb-two"), Connection::new("10.0.0.2", 9000)).unwrap();
    reg.update_ue_indicator("g1", "imsi-1", true).unwrap();
    let expected = reg.list().to_vec();
    drop(reg);

    let reg = open(dir.path());
    assert_eq!(reg.list(), expected.as_slice());
    assert!(reg.ran_ues()[0].nrdc_indicator);
    assert_eq!(reg.xn_ues()[0].gnb_name, "gnb-one");
}

#[test]
fn corrupt_snapshot_starts_empty() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("gnbList.json"), "[{\"gnbId\": ").unwrap();
    let mut reg = open(dir.path());
    assert!(reg.is_empty());

    reg.add(GnbRecord::new("g1", ""), Connection::new("10.0.0.1", 1)).unwrap();
    let raw = reg.storage().inner().get_item("gnbList").unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[0]["gnbId"], "g1");
    assert_eq!(parsed[0]["connection"]["port"], 1);
}

#[test]
fn legacy_snapshot_without_optional_fields_loads() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("gnbList.json"),
        r#"[{"gnbId":"g1","gnbName":"old","ranUeList":[{"imsi":"imsi-1"}]}]"#,
    )
    .unwrap();
    let mut reg = open(dir.path());
    assert_eq!(reg.len(), 1);
    assert!(reg.list()[0].connection.is_none());
    assert!(!reg.ran_ues()[0].nrdc_indicator);

    // A record without a stored connection can still be merged by id.
    let out = reg.add(GnbRecord::new("g1", "new"), Connection::new("10.0.0.1", 1)).unwrap();
    assert!(out.merged);
    assert_eq!(reg.list()[0].gnb_name, "new");
}

#[test]
fn persisted_json_omits_absent_options() {
    let dir = tempdir().unwrap();
    let mut reg = open(dir.path());
    reg.add(GnbRecord::new("g1", ""), Connection::new("10.0.0.1", 1)).unwrap();
    let raw = fs::read_to_string(dir.path().join("gnbList.json")).unwrap();
    assert!(!raw.contains("snssai"));
    assert!(!raw.contains("null"));
}
