//! アップロードエリアコンポーネント
//!
//! ファイルを1枚選ぶとデータURLとして読み込み、プレビューを表示する。

use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};

#[component]
pub fn UploadArea<F>(
    #[prop(into)] image: Signal<Option<String>>,
    input_ref: NodeRef<Input>,
    on_image_loaded: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            read_file(file, on_image_loaded.clone());
        }
    };

    view! {
        <div class="upload-area">
            <input
                type="file"
                accept="image/*"
                id="image-upload"
                node_ref=input_ref
                on:change=on_change
            />
            <label for="image-upload">
                <Show
                    when=move || image.with(Option::is_some)
                    fallback=|| view! {
                        <div class="upload-placeholder">
                            <span>"Click to upload image"</span>
                        </div>
                    }
                >
                    <img
                        class="preview"
                        alt="Uploaded tyre"
                        src=move || image.get().unwrap_or_default()
                    />
                </Show>
            </label>
        </div>
    }
}

fn read_file<F>(file: File, on_image_loaded: F)
where
    F: Fn(String) + 'static,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            gloo::console::error!(format!("FileReader unavailable: {:?}", e));
            return;
        }
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        match reader_clone.result().map(|r| r.as_string()) {
            Ok(Some(data_url)) => on_image_loaded(data_url),
            Ok(None) => gloo::console::error!("FileReader result is not a string"),
            Err(e) => gloo::console::error!(format!("FileReader failed: {:?}", e)),
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if let Err(e) = reader.read_as_data_url(&file) {
        gloo::console::error!(format!("read_as_data_url failed: {:?}", e));
    }
}
