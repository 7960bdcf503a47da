//! メインアプリケーションコンポーネント
//!
//! ページの状態は `LabelingSession` 1つにまとめてシグナルで持つ。

use leptos::html::Input;
use leptos::prelude::*;
use crate::components::{
    header::Header,
    label_form::LabelForm,
    save_button::SaveButton,
    upload_area::UploadArea,
};
use crate::platform::{BrowserClock, BrowserSink};
use tyre_labeler_common::{LabelField, LabelingSession, SaveOutcome};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(LabelingSession::new());
    let file_input = NodeRef::<Input>::new();

    let image = Memo::new(move |_| session.with(|s| s.current_image().map(String::from)));
    let label = Memo::new(move |_| session.with(|s| s.current_label().clone()));
    let can_save = Memo::new(move |_| session.with(LabelingSession::can_save));
    let saved_count = Memo::new(move |_| session.with(LabelingSession::saved_count));

    // 画像読み込み完了
    let on_image_loaded = move |data_url: String| {
        session.update(|s| s.load_image(data_url));
    };

    // フィールド編集
    let on_edit = move |field: LabelField, value: String| {
        session.update(|s| {
            if let Err(e) = s.set_field(field, value) {
                gloo::console::error!(e.to_string());
            }
        });
    };

    // 保存: 画像とラベルJSONをダウンロードしてフォームを戻す
    let on_save = move |_| {
        let mut sink = BrowserSink;
        let result = session.try_update(|s| s.save(&BrowserClock, &mut sink));

        match result {
            Some(Ok(SaveOutcome::Saved { record, .. })) => {
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
                gloo::console::log!(format!("saved {}", record.id));
            }
            Some(Ok(SaveOutcome::Skipped)) | None => {}
            Some(Err(e)) => gloo::console::error!(format!("save failed: {}", e)),
        }
    };

    view! {
        <div class="container">
            <Header />

            <UploadArea
                image=image
                input_ref=file_input
                on_image_loaded=on_image_loaded
            />

            <LabelForm
                label=label
                on_edit=on_edit
            />

            <SaveButton
                can_save=can_save
                saved_count=saved_count
                on_save=on_save
            />
        </div>
    }
}
