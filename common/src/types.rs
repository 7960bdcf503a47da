//! ラベルレコードの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Condition: タイヤ状態（固定選択肢）
//! - LabelField: フォームで編集できるフィールド
//! - LabelRecord: 1枚の写真に対するラベル

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// タイヤ状態
///
/// JSON上の値は `""`, `"new"`, `"good"`, `"fair"`, `"poor"` のいずれか。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// 未選択
    #[default]
    #[serde(rename = "")]
    Unset,
    New,
    Good,
    Fair,
    Poor,
}

impl Condition {
    /// セレクタの表示順
    pub const ALL: [Condition; 5] = [
        Condition::Unset,
        Condition::New,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    /// JSON/フォーム上の値
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Unset => "",
            Condition::New => "new",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }

    /// セレクタの表示テキスト
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Unset => "Select condition...",
            Condition::New => "New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Condition::Unset)
    }
}

impl FromStr for Condition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "unset" | "-" => Ok(Condition::Unset),
            "new" => Ok(Condition::New),
            "good" => Ok(Condition::Good),
            "fair" => Ok(Condition::Fair),
            "poor" => Ok(Condition::Poor),
            _ => Err(Error::InvalidCondition(s.to_string())),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// フォームで編集できるフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelField {
    Size,
    TreadDepth,
    Brand,
    Condition,
}

impl LabelField {
    /// フォームの表示順
    pub const ALL: [LabelField; 4] = [
        LabelField::Size,
        LabelField::TreadDepth,
        LabelField::Brand,
        LabelField::Condition,
    ];

    /// JSONキー
    pub fn key(&self) -> &'static str {
        match self {
            LabelField::Size => "size",
            LabelField::TreadDepth => "treadDepth",
            LabelField::Brand => "brand",
            LabelField::Condition => "condition",
        }
    }

    /// フォームのラベル
    pub fn prompt(&self) -> &'static str {
        match self {
            LabelField::Size => "Tyre Size",
            LabelField::TreadDepth => "Tread Depth (mm)",
            LabelField::Brand => "Brand",
            LabelField::Condition => "Condition",
        }
    }

    /// 入力例（条件セレクタには無し）
    pub fn placeholder(&self) -> &'static str {
        match self {
            LabelField::Size => "e.g., 225/45R17",
            LabelField::TreadDepth => "e.g., 7.5",
            LabelField::Brand => "e.g., Michelin",
            LabelField::Condition => "",
        }
    }
}

/// ラベルレコード
///
/// 編集中は `id`, `timestamp`, `image_path` が空のまま。
/// 保存時に確定したコピーだけがこれらを持つ。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelRecord {
    pub id: String,
    pub size: String,
    pub tread_depth: String,          // mm（自由入力）
    pub brand: String,
    pub condition: Condition,
    pub timestamp: String,            // ISO-8601
    pub image_path: String,           // images/<id>.jpg
}

impl LabelRecord {
    /// フィールドの現在値（フォーム表示用）
    pub fn field(&self, field: LabelField) -> &str {
        match field {
            LabelField::Size => &self.size,
            LabelField::TreadDepth => &self.tread_depth,
            LabelField::Brand => &self.brand,
            LabelField::Condition => self.condition.as_str(),
        }
    }

    /// 1フィールドだけ置き換える（検証なし、条件のみ選択肢チェック）
    pub fn set_field(&mut self, field: LabelField, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        match field {
            LabelField::Size => self.size = value,
            LabelField::TreadDepth => self.tread_depth = value,
            LabelField::Brand => self.brand = value,
            LabelField::Condition => self.condition = value.parse()?,
        }
        Ok(())
    }

    /// 保存時にだけ埋まるフィールドが入っているか
    pub fn has_transient_fields(&self) -> bool {
        !self.id.is_empty() || !self.timestamp.is_empty() || !self.image_path.is_empty()
    }

    /// 全フィールドが空か
    pub fn is_blank(&self) -> bool {
        !self.has_transient_fields()
            && self.size.is_empty()
            && self.tread_depth.is_empty()
            && self.brand.is_empty()
            && self.condition.is_unset()
    }
}
