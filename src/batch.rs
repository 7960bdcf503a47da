//! マニフェストによる一括ラベリング
//!
//! 1セッションで N 枚を順に読み込み・保存する。保存のたびにラベルJSON（全件）が
//! 上書きされるので、最後に N 件入ったファイルが残る。
//!
//! ```json
//! [
//!   { "image": "photos/a.jpg", "size": "225/45R17", "treadDepth": "7.5",
//!     "brand": "Michelin", "condition": "good" }
//! ]
//! ```

use crate::controller::SessionController;
use crate::error::{Result, TyreLabelerError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tyre_labeler_common::{Clock, Condition, DownloadSink, LabelField, LabelRecord, SaveOutcome};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub image: PathBuf,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub tread_depth: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub condition: Condition,
}

/// マニフェストを読み込む。相対パスはマニフェストの場所を基準にする
pub fn load_manifest(path: &Path) -> Result<Vec<ManifestEntry>> {
    let content = std::fs::read_to_string(path)
        .map_err(|_| TyreLabelerError::FileNotFound(path.display().to_string()))?;
    let mut entries: Vec<ManifestEntry> = serde_json::from_str(&content)
        .map_err(|e| TyreLabelerError::InvalidManifest(format!("{}: {}", path.display(), e)))?;

    let base_dir = path.parent().unwrap_or(Path::new("."));
    for entry in &mut entries {
        if entry.image.is_relative() {
            entry.image = base_dir.join(&entry.image);
        }
    }

    Ok(entries)
}

/// 一括処理の結果
#[derive(Debug, Default)]
pub struct BatchReport {
    pub saved: Vec<LabelRecord>,
    pub failed: Vec<(PathBuf, String)>,
}

/// マニフェストの各エントリを 読み込み → 編集 → 保存 する
///
/// 読み込めない画像はスキップして続行する。保存（ダウンロード）の失敗は中断。
pub async fn run_batch<C: Clock, S: DownloadSink>(
    entries: &[ManifestEntry],
    controller: &mut SessionController<C, S>,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for (i, entry) in entries.iter().enumerate() {
        println!("[{}/{}] {}", i + 1, entries.len(), entry.image.display());

        if let Err(e) = controller.upload(entry.image.clone()).await {
            println!("  ✖ {}", e);
            report.failed.push((entry.image.clone(), e.to_string()));
            continue;
        }

        controller.edit(LabelField::Size, entry.size.as_str())?;
        controller.edit(LabelField::TreadDepth, entry.tread_depth.as_str())?;
        controller.edit(LabelField::Brand, entry.brand.as_str())?;
        controller.edit(LabelField::Condition, entry.condition.as_str())?;

        if let SaveOutcome::Saved { record, .. } = controller.save()? {
            println!("  ✔ {}", record.id);
            report.saved.push(record);
        }
    }

    info!(saved = report.saved.len(), failed = report.failed.len(), "batch finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_entry_defaults() {
        let entries: Vec<ManifestEntry> =
            serde_json::from_str(r#"[{ "image": "a.jpg" }, { "image": "b.jpg", "condition": "fair", "treadDepth": "3" }]"#)
                .unwrap();
        assert_eq!(entries[0].condition, Condition::Unset);
        assert_eq!(entries[0].brand, "");
        assert_eq!(entries[1].condition, Condition::Fair);
        assert_eq!(entries[1].tread_depth, "3");
    }

    #[test]
    fn test_manifest_rejects_unknown_condition() {
        let result: std::result::Result<Vec<ManifestEntry>, _> =
            serde_json::from_str(r#"[{ "image": "a.jpg", "condition": "excellent" }]"#);
        assert!(result.is_err());
    }
}
