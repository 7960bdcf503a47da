//! Tyre Labeler Common Library
//!
//! CLIとWeb(WASM)で共有される型とラベリングセッションの中核

pub mod types;
pub mod data_url;
pub mod download;
pub mod export;
pub mod clock;
pub mod session;
pub mod error;

pub use types::{Condition, LabelField, LabelRecord};
pub use data_url::Blob;
pub use download::{Download, DownloadSink, MemorySink, LABELS_FILE_NAME};
pub use export::{labels_from_json, labels_to_json, ConditionSummary};
pub use clock::Clock;
#[cfg(feature = "native")]
pub use clock::SystemClock;
pub use session::{LabelingSession, SaveOutcome, SessionEvent};
pub use error::{Error, Result};
