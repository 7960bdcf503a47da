//! ダウンロード済みラベルファイルの確認
//!
//! `tyre_dataset_labels.json` を読み込み、件数・状態別件数・ID重複・
//! 同じフォルダに画像ファイルがあるかを調べる。

use crate::error::{Result, TyreLabelerError};
use std::collections::HashSet;
use std::path::Path;
use tyre_labeler_common::download::image_file_name;
use tyre_labeler_common::{labels_from_json, Condition, ConditionSummary, LabelRecord};

#[derive(Debug, Clone)]
pub struct InspectReport {
    pub labels: Vec<LabelRecord>,
    pub summary: ConditionSummary,
    pub duplicate_ids: Vec<String>,
    /// 見つからない画像ファイル名
    pub missing_images: Vec<String>,
}

impl InspectReport {
    pub fn count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_consistent(&self) -> bool {
        self.duplicate_ids.is_empty() && self.missing_images.is_empty()
    }
}

/// 重複しているID（最初の重複出現順）
pub fn find_duplicate_ids(labels: &[LabelRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    labels
        .iter()
        .filter(|l| !seen.insert(l.id.as_str()))
        .filter(|l| reported.insert(l.id.as_str()))
        .map(|l| l.id.clone())
        .collect()
}

pub fn inspect_labels(path: &Path) -> Result<InspectReport> {
    if !path.exists() {
        return Err(TyreLabelerError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let labels = labels_from_json(&content)
        .map_err(|e| TyreLabelerError::InvalidLabels(format!("{}: {}", path.display(), e)))?;

    let base_dir = path.parent().unwrap_or(Path::new("."));
    let missing_images = labels
        .iter()
        .map(|l| image_file_name(&l.id))
        .filter(|name| !base_dir.join(name).exists())
        .collect();

    Ok(InspectReport {
        summary: ConditionSummary::from_labels(&labels),
        duplicate_ids: find_duplicate_ids(&labels),
        missing_images,
        labels,
    })
}

pub fn print_report(path: &Path, report: &InspectReport) {
    println!("ラベルファイル: {}", path.display());
    println!("  件数: {}", report.count());
    for condition in Condition::ALL {
        let name = if condition.is_unset() { "(未選択)" } else { condition.as_str() };
        println!("  {:<8} {}", name, report.summary.count(condition));
    }

    if let (Some(first), Some(last)) = (report.labels.first(), report.labels.last()) {
        println!("  期間: {} 〜 {}", first.timestamp, last.timestamp);
    }

    if !report.duplicate_ids.is_empty() {
        println!("⚠ ID重複: {}", report.duplicate_ids.join(", "));
    }
    if !report.missing_images.is_empty() {
        println!("⚠ 画像ファイルが見つかりません: {}件", report.missing_images.len());
        for name in &report.missing_images {
            println!("    {}", name);
        }
    }
    if report.is_consistent() {
        println!("✔ 問題ありません");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> LabelRecord {
        LabelRecord { id: id.to_string(), ..Default::default() }
    }

    #[test]
    fn test_find_duplicate_ids() {
        let labels = vec![record("a"), record("b"), record("a"), record("a"), record("b")];
        assert_eq!(find_duplicate_ids(&labels), vec!["a".to_string(), "b".to_string()]);
        assert!(find_duplicate_ids(&[record("x"), record("y")]).is_empty());
    }

    #[test]
    fn test_inspect_missing_file() {
        let err = inspect_labels(Path::new("/nonexistent/tyre_dataset_labels.json")).unwrap_err();
        assert!(matches!(err, TyreLabelerError::FileNotFound(_)));
    }
}
