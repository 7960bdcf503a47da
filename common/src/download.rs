//! ダウンロード（保存時にユーザーへ渡すファイル）
//!
//! 実際の受け渡し方法（ブラウザのダウンロード、ディレクトリへの書き込み）は
//! `DownloadSink` の実装側に任せる。

use crate::data_url::Blob;
use crate::error::Result;

/// ラベル一覧JSONのファイル名（毎回同じ名前で全件を渡す）
pub const LABELS_FILE_NAME: &str = "tyre_dataset_labels.json";

pub const JSON_MIME: &str = "application/json";

/// 画像ダウンロードのファイル名
pub fn image_file_name(id: &str) -> String {
    format!("tyre_dataset_{}.jpg", id)
}

/// レコードに記録する画像の相対パス
pub fn image_path(id: &str) -> String {
    format!("images/{}.jpg", id)
}

/// ユーザーに渡す1ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Download {
    /// 画像ファイル（アップロード時のMIMEを維持）
    pub fn image(id: &str, blob: Blob) -> Self {
        Self {
            file_name: image_file_name(id),
            mime: blob.mime,
            bytes: blob.bytes,
        }
    }

    /// ラベル一覧JSON
    pub fn labels(json: String) -> Self {
        Self {
            file_name: LABELS_FILE_NAME.to_string(),
            mime: JSON_MIME.to_string(),
            bytes: json.into_bytes(),
        }
    }
}

/// ダウンロードの受け渡し先
pub trait DownloadSink {
    fn deliver(&mut self, download: &Download) -> Result<()>;
}

impl<S: DownloadSink + ?Sized> DownloadSink for &mut S {
    fn deliver(&mut self, download: &Download) -> Result<()> {
        (**self).deliver(download)
    }
}

/// メモリに溜めるだけのシンク
#[derive(Debug, Default)]
pub struct MemorySink {
    pub downloads: Vec<Download>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最後に渡されたラベルJSON
    pub fn last_labels(&self) -> Option<&Download> {
        self.downloads
            .iter()
            .rev()
            .find(|d| d.file_name == LABELS_FILE_NAME)
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.downloads.iter().map(|d| d.file_name.as_str()).collect()
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, download: &Download) -> Result<()> {
        self.downloads.push(download.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(image_file_name("tire_1700000000000"), "tyre_dataset_tire_1700000000000.jpg");
        assert_eq!(image_path("tire_1700000000000"), "images/tire_1700000000000.jpg");
    }

    #[test]
    fn test_image_download_keeps_mime() {
        let blob = Blob { mime: "image/png".into(), bytes: vec![1, 2, 3] };
        let download = Download::image("tire_5", blob);
        assert_eq!(download.file_name, "tyre_dataset_tire_5.jpg");
        assert_eq!(download.mime, "image/png");
        assert_eq!(download.bytes, vec![1, 2, 3]);
    }

    #[test]
    fn test_memory_sink_last_labels() {
        let mut sink = MemorySink::new();
        sink.deliver(&Download::labels("[]".into())).unwrap();
        sink.deliver(&Download::image("tire_1", Blob { mime: "image/jpeg".into(), bytes: vec![] }))
            .unwrap();
        sink.deliver(&Download::labels("[1]".into())).unwrap();

        assert_eq!(sink.downloads.len(), 3);
        assert_eq!(sink.last_labels().unwrap().bytes, b"[1]");
        assert_eq!(sink.file_names()[1], "tyre_dataset_tire_1.jpg");
    }
}
