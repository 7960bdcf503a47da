//! ラベリングセッション
//!
//! 1ページ分の状態（アップロード画像、編集中ラベル、保存済みラベル一覧）と
//! その操作。ブラウザ版とCLI版の両方がこの型にイベントを流す。
//!
//! 状態遷移: 空 → 画像読込済み → (フィールド編集)* → 保存（ダウンロード2件、空に戻る）

use crate::clock::{self, Clock};
use crate::data_url;
use crate::download::{Download, DownloadSink};
use crate::error::Result;
use crate::export::labels_to_json;
use crate::types::{LabelField, LabelRecord};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// セッションへの入力イベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// 画像の読み込み完了（データURL）
    ImageLoaded(String),
    /// フィールド編集
    FieldEdited(LabelField, String),
    /// 保存
    Save,
    /// フォームと画像を破棄
    Reset,
}

/// 保存結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// 画像が無いので何もしなかった
    Skipped,
    Saved {
        record: LabelRecord,
        image_file: String,
        labels_file: String,
    },
}

impl SaveOutcome {
    pub fn record(&self) -> Option<&LabelRecord> {
        match self {
            SaveOutcome::Saved { record, .. } => Some(record),
            SaveOutcome::Skipped => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LabelingSession {
    current_image: Option<String>,
    current_label: LabelRecord,
    saved_labels: Arc<[LabelRecord]>,
    last_issued_ms: Option<i64>,
}

impl Default for LabelingSession {
    fn default() -> Self {
        Self {
            current_image: None,
            current_label: LabelRecord::default(),
            saved_labels: Arc::from(Vec::new()),
            last_issued_ms: None,
        }
    }
}

impl LabelingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 画像読み込み完了。後から来た読み込みが勝つ
    pub fn load_image(&mut self, data_url: String) {
        if self.current_image.is_some() {
            debug!("replacing current image");
        }
        info!(bytes = data_url.len(), "image loaded");
        self.current_image = Some(data_url);
    }

    pub fn set_field(&mut self, field: LabelField, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        trace!(field = field.key(), %value, "field edited");
        self.current_label.set_field(field, value)
    }

    pub fn current_image(&self) -> Option<&str> {
        self.current_image.as_deref()
    }

    pub fn current_label(&self) -> &LabelRecord {
        &self.current_label
    }

    pub fn has_image(&self) -> bool {
        self.current_image.is_some()
    }

    /// 保存ボタンの有効/無効
    pub fn can_save(&self) -> bool {
        self.has_image()
    }

    /// 保存済みラベル一覧（保存のたびに新しい一覧に差し替わる）
    pub fn saved_labels(&self) -> Arc<[LabelRecord]> {
        Arc::clone(&self.saved_labels)
    }

    pub fn saved_count(&self) -> usize {
        self.saved_labels.len()
    }

    pub fn reset(&mut self) {
        self.current_label = LabelRecord::default();
        self.current_image = None;
    }

    /// 保存
    ///
    /// 画像とラベル一覧JSON（全件）をシンクに渡し、一覧に追加してフォームを戻す。
    /// 途中で失敗した場合は状態を一切変えない。
    pub fn save<C, S>(&mut self, clock: &C, sink: &mut S) -> Result<SaveOutcome>
    where
        C: Clock + ?Sized,
        S: DownloadSink + ?Sized,
    {
        let Some(image) = self.current_image.as_deref() else {
            debug!("save ignored: no image loaded");
            return Ok(SaveOutcome::Skipped);
        };

        let ms = clock::issue_millis(clock.now().timestamp_millis(), self.last_issued_ms);
        let id = clock::label_id(ms);

        let blob = data_url::to_blob(image)?;
        let image_download = Download::image(&id, blob);

        let record = LabelRecord {
            id: id.clone(),
            timestamp: clock::iso_timestamp(clock::from_millis(ms)),
            image_path: crate::download::image_path(&id),
            ..self.current_label.clone()
        };

        let mut next = self.saved_labels.to_vec();
        next.push(record.clone());
        let labels_download = Download::labels(labels_to_json(&next)?);

        sink.deliver(&image_download)?;
        sink.deliver(&labels_download)?;

        info!(
            id = %record.id,
            count = next.len(),
            image_bytes = image_download.bytes.len(),
            "labels saved"
        );

        self.saved_labels = next.into();
        self.last_issued_ms = Some(ms);
        self.reset();

        Ok(SaveOutcome::Saved {
            record,
            image_file: image_download.file_name,
            labels_file: labels_download.file_name,
        })
    }

    /// イベントを1つ処理する（保存以外は None）
    pub fn apply<C, S>(
        &mut self,
        event: SessionEvent,
        clock: &C,
        sink: &mut S,
    ) -> Result<Option<SaveOutcome>>
    where
        C: Clock + ?Sized,
        S: DownloadSink + ?Sized,
    {
        match event {
            SessionEvent::ImageLoaded(data_url) => self.load_image(data_url),
            SessionEvent::FieldEdited(field, value) => self.set_field(field, value)?,
            SessionEvent::Save => return self.save(clock, sink).map(Some),
            SessionEvent::Reset => self.reset(),
        }
        Ok(None)
    }
}
