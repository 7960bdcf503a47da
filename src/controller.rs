//! セッションコントローラ
//!
//! `LabelingSession` を所有し、画像読み込みの完了通知を1本のキューから順に適用する。
//! 状態を書き換えるのはこの型だけ。

use crate::error::{Result, TyreLabelerError};
use crate::upload::{self, UploadMessage};
use std::path::PathBuf;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};
use tyre_labeler_common::{
    Clock, DownloadSink, LabelField, LabelingSession, SaveOutcome, SessionEvent,
};

pub struct SessionController<C, S> {
    session: LabelingSession,
    clock: C,
    sink: S,
    uploads_tx: UnboundedSender<UploadMessage>,
    uploads_rx: UnboundedReceiver<UploadMessage>,
    pending_uploads: usize,
}

impl<C: Clock, S: DownloadSink> SessionController<C, S> {
    pub fn new(clock: C, sink: S) -> Self {
        let (uploads_tx, uploads_rx) = mpsc::unbounded_channel();
        Self {
            session: LabelingSession::new(),
            clock,
            sink,
            uploads_tx,
            uploads_rx,
            pending_uploads: 0,
        }
    }

    pub fn session(&self) -> &LabelingSession {
        &self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn pending_uploads(&self) -> usize {
        self.pending_uploads
    }

    /// 画像の読み込みを開始（完了は `next_upload` で受け取る）
    pub fn begin_upload(&mut self, path: PathBuf) {
        info!(path = %path.display(), "upload started");
        self.pending_uploads += 1;
        upload::spawn_read(path, self.uploads_tx.clone());
    }

    /// 次の読み込み完了を待ってセッションに反映する
    ///
    /// リセット後に届いた古い読み込みもそのまま反映される。
    pub async fn next_upload(&mut self) -> Result<PathBuf> {
        if self.pending_uploads == 0 {
            return Err(TyreLabelerError::NoPendingUpload);
        }

        let message = self
            .uploads_rx
            .recv()
            .await
            .ok_or(TyreLabelerError::NoPendingUpload)?;
        self.pending_uploads -= 1;

        match message {
            UploadMessage::Loaded { path, data_url } => {
                self.dispatch(SessionEvent::ImageLoaded(data_url))?;
                Ok(path)
            }
            UploadMessage::Failed { path, error } => {
                warn!(path = %path.display(), %error, "upload failed");
                Err(error)
            }
        }
    }

    /// 画像の読み込みを開始して完了まで待つ
    pub async fn upload(&mut self, path: PathBuf) -> Result<PathBuf> {
        self.begin_upload(path);
        self.next_upload().await
    }

    pub fn edit(&mut self, field: LabelField, value: impl Into<String>) -> Result<()> {
        self.dispatch(SessionEvent::FieldEdited(field, value.into()))?;
        Ok(())
    }

    pub fn save(&mut self) -> Result<SaveOutcome> {
        Ok(self.session.save(&self.clock, &mut self.sink)?)
    }

    pub fn reset(&mut self) -> Result<()> {
        self.dispatch(SessionEvent::Reset)?;
        Ok(())
    }

    pub fn dispatch(&mut self, event: SessionEvent) -> Result<Option<SaveOutcome>> {
        Ok(self.session.apply(event, &self.clock, &mut self.sink)?)
    }

    pub fn into_parts(self) -> (LabelingSession, S) {
        (self.session, self.sink)
    }
}
