use thiserror::Error;

#[derive(Error, Debug)]
pub enum TyreLabelerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("マニフェストが不正: {0}")]
    InvalidManifest(String),

    #[error("ラベルファイルが不正: {0}")]
    InvalidLabels(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("読み込み待ちの画像がありません")]
    NoPendingUpload,

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] tyre_labeler_common::Error),
}

pub type Result<T> = std::result::Result<T, TyreLabelerError>;
