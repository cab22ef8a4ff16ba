//! Facade-level behavior: OS handle, display name, opaque config, and the
//! serialized shape of the normalized records.

mod common;

use hostprobe::types::Metadata;
use hostprobe::{Backend, BackendConfig, LocalBackend};

#[test]
fn display_names_the_local_runner() {
    assert_eq!(common::backend().to_string(), "Local Command Runner");
    assert_eq!(LocalBackend::NAME, "local");
}

#[test]
fn host_family_matches_the_running_platform() {
    let api = common::backend();
    #[cfg(target_os = "linux")]
    {
        assert_eq!(api.os().family().as_str(), "linux");
        assert!(api.os().is_linux());
        assert!(api.os().is_unix());
    }
    #[cfg(target_os = "macos")]
    {
        assert_eq!(api.os().family().as_str(), "darwin");
        assert!(api.os().is_unix());
    }
    #[cfg(windows)]
    {
        assert_eq!(api.os().family().as_str(), "windows");
        assert!(api.os().is_windows());
    }
}

#[test]
fn config_is_carried_opaquely() {
    let cfg: BackendConfig = serde_json::from_value(serde_json::json!({
        "options": { "host": "example.com", "port": 22 }
    }))
    .expect("config");
    let api = LocalBackend::new(cfg);
    assert_eq!(api.config().options["host"], "example.com");
    assert_eq!(api.config().options["port"], 22);
}

#[test]
fn metadata_serializes_with_vocabulary_strings() {
    let record = Metadata {
        file_type: Some(hostprobe::types::FileType::CharacterDevice),
        mode: Some(0o644),
        ..Metadata::default()
    };
    let value = serde_json::to_value(&record).expect("serialize");
    assert_eq!(value["file_type"], "character_device");
    assert_eq!(value["mode"], 0o644);
    assert_eq!(value["owner"], serde_json::Value::Null);
}

#[test]
fn os_serializes_to_the_family_string() {
    let api = common::backend();
    let value = serde_json::to_value(api.os()).expect("serialize");
    assert_eq!(value["family"], api.os().family().as_str());
}
