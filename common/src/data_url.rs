//! データURL変換
//!
//! アップロード画像はメモリ上で `data:<mime>;base64,<payload>` として保持し、
//! 保存時にバイナリへ戻してダウンロードする。

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// MIMEタイプ付きバイナリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Blob {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// データURLをBlobに変換
///
/// 形が合わない入力はエラー。呼び出し側（保存処理）はここで中断する。
pub fn to_blob(data_url: &str) -> Result<Blob> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| Error::MalformedDataUrl("missing `data:` prefix".into()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::MalformedDataUrl("missing `,` separator".into()))?;

    let (mime, params) = header
        .split_once(';')
        .ok_or_else(|| Error::MalformedDataUrl("missing `;base64` marker".into()))?;

    if !params.split(';').any(|p| p == "base64") {
        return Err(Error::MalformedDataUrl(format!(
            "payload is not base64 encoded: {header}"
        )));
    }

    let bytes = STANDARD.decode(payload.trim())?;

    Ok(Blob {
        mime: mime.to_string(),
        bytes,
    })
}

/// バイナリをデータURLにエンコード（FileReader.readAsDataURL相当）
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// 画像のMIMEタイプを判定
///
/// 先頭バイトで判定し、だめなら拡張子、それも無ければ octet-stream。
#[cfg(feature = "native")]
pub fn mime_for_image(path: &std::path::Path, bytes: &[u8]) -> &'static str {
    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type();
    }

    path.extension()
        .and_then(|ext| image::ImageFormat::from_extension(ext))
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream")
}
