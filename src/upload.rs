//! 画像アップロード（非同期読み込み）
//!
//! ファイルを別タスクで読み込み、完了をチャネルに流す（FileReader の onload 相当）。

use crate::error::{Result, TyreLabelerError};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use tyre_labeler_common::data_url;

/// 読み込み完了通知
#[derive(Debug)]
pub enum UploadMessage {
    Loaded { path: PathBuf, data_url: String },
    Failed { path: PathBuf, error: TyreLabelerError },
}

/// ファイルを読み込んでデータURLにする
pub async fn read_as_data_url(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => TyreLabelerError::FileNotFound(path.display().to_string()),
        _ => TyreLabelerError::ImageLoad(format!("{}: {}", path.display(), e)),
    })?;

    let mime = data_url::mime_for_image(path, &bytes);
    if !mime.starts_with("image/") {
        // ファイル選択の accept="image/*" と同じくヒント扱い
        warn!(path = %path.display(), mime, "file does not look like an image");
    }

    debug!(path = %path.display(), mime, bytes = bytes.len(), "file read");
    Ok(data_url::encode(mime, &bytes))
}

/// 読み込みタスクを起動する
pub fn spawn_read(path: PathBuf, tx: UnboundedSender<UploadMessage>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let message = match read_as_data_url(&path).await {
            Ok(data_url) => UploadMessage::Loaded { path, data_url },
            Err(error) => UploadMessage::Failed { path, error },
        };
        if tx.send(message).is_err() {
            debug!("upload finished after session closed");
        }
    })
}
