//! ラベル一覧のJSON入出力

use crate::error::Result;
use crate::types::{Condition, LabelRecord};
use serde::Serialize;

/// ラベル一覧を整形JSON（インデント2）に変換
pub fn labels_to_json(labels: &[LabelRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(labels)?)
}

/// ダウンロード済みのラベル一覧JSONを読み込む
///
/// 7つのキーが全て揃っていないレコードはエラー。
pub fn labels_from_json(json: &str) -> Result<Vec<LabelRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// 状態ごとの件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConditionSummary {
    pub unset: usize,
    pub new: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
}

impl ConditionSummary {
    pub fn from_labels(labels: &[LabelRecord]) -> Self {
        let mut summary = Self::default();
        for label in labels {
            *summary.slot(label.condition) += 1;
        }
        summary
    }

    pub fn count(&self, condition: Condition) -> usize {
        match condition {
            Condition::Unset => self.unset,
            Condition::New => self.new,
            Condition::Good => self.good,
            Condition::Fair => self.fair,
            Condition::Poor => self.poor,
        }
    }

    pub fn total(&self) -> usize {
        Condition::ALL.iter().map(|c| self.count(*c)).sum()
    }

    fn slot(&mut self, condition: Condition) -> &mut usize {
        match condition {
            Condition::Unset => &mut self.unset,
            Condition::New => &mut self.new,
            Condition::Good => &mut self.good,
            Condition::Fair => &mut self.fair,
            Condition::Poor => &mut self.poor,
        }
    }
}
