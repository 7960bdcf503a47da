//! タイヤ写真ラベリングツール（CLI）
//!
//! ブラウザ版と同じ `LabelingSession` をターミナルから操作する。
//! ダウンロードは出力ディレクトリへの書き込みになる。

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod sink;
pub mod upload;
pub mod controller;
pub mod interactive;
pub mod batch;
pub mod inspect;
