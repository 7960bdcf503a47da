//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use tyre_labeler::batch;
use tyre_labeler::error::TyreLabelerError;
use tyre_labeler::inspect;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないマニフェスト
#[test]
fn test_load_missing_manifest() {
    let result = batch::load_manifest(Path::new("/nonexistent/manifest.json"));
    assert!(matches!(result.unwrap_err(), TyreLabelerError::FileNotFound(_)));
}

/// JSONとして壊れたマニフェスト
#[test]
fn test_load_broken_manifest() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("manifest.json");
    std::fs::write(&path, "[{ \"image\": ").unwrap();

    let err = batch::load_manifest(&path).unwrap_err();
    assert!(matches!(err, TyreLabelerError::InvalidManifest(_)));
    assert!(err.to_string().contains("マニフェスト"));
}

/// キーが欠けたラベルファイル
#[test]
fn test_inspect_labels_missing_keys() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("tyre_dataset_labels.json");
    std::fs::write(&path, r#"[{ "id": "tire_1", "size": "" }]"#).unwrap();

    let err = inspect::inspect_labels(&path).unwrap_err();
    assert!(matches!(err, TyreLabelerError::InvalidLabels(_)));
}

/// TyreLabelerErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        TyreLabelerError::Config("テスト設定エラー".to_string()),
        TyreLabelerError::FileNotFound("tyre.jpg".to_string()),
        TyreLabelerError::ImageLoad("読み込み失敗".to_string()),
        TyreLabelerError::InvalidManifest("不正".to_string()),
        TyreLabelerError::InvalidLabels("不正".to_string()),
        TyreLabelerError::Prompt("中断".to_string()),
        TyreLabelerError::NoPendingUpload,
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: TyreLabelerError = io_err.into();

    assert!(matches!(err, TyreLabelerError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = tyre_labeler_common::Error::MalformedDataUrl("missing comma".to_string());
    let err: TyreLabelerError = common_err.into();

    assert!(matches!(err, TyreLabelerError::Common(_)));
    assert_eq!(format!("{}", err), "Malformed data URL: missing comma");
}
