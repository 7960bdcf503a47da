//! ディレクトリへのダウンロード
//!
//! ブラウザの「名前を付けて保存」の代わり。同名ファイルは上書きする。

use std::path::{Path, PathBuf};
use tracing::debug;
use tyre_labeler_common::{Download, DownloadSink};

#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 書き込んだファイル（書き込み順）
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, download: &Download) -> tyre_labeler_common::Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(&download.file_name);
        std::fs::write(&path, &download.bytes)?;

        debug!(
            path = %path.display(),
            mime = %download.mime,
            bytes = download.bytes.len(),
            "download written"
        );
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliver_creates_directory_and_overwrites() {
        let temp_dir = std::env::temp_dir().join("tyre-labeler-test-sink");
        std::fs::remove_dir_all(&temp_dir).ok();

        let mut sink = DirectorySink::new(temp_dir.join("nested"));
        sink.deliver(&Download::labels("[1]".into())).unwrap();
        sink.deliver(&Download::labels("[1,2]".into())).unwrap();

        let path = temp_dir.join("nested").join("tyre_dataset_labels.json");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1,2]");
        assert_eq!(sink.written().len(), 2);

        std::fs::remove_dir_all(&temp_dir).ok();
    }
}
