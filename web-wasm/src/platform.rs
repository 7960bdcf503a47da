//! ブラウザ側の時計とダウンロード
//!
//! ダウンロードは Blob → オブジェクトURL → `<a download>` のクリックで行う。

use chrono::{DateTime, Utc};
use tyre_labeler_common::clock::{self, Clock};
use tyre_labeler_common::{Download, DownloadSink, Error, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// `Date.now()` を使う時計
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> DateTime<Utc> {
        clock::from_millis(js_sys::Date::now() as i64)
    }
}

/// ブラウザのダウンロードとして渡すシンク
#[derive(Debug, Default)]
pub struct BrowserSink;

impl DownloadSink for BrowserSink {
    fn deliver(&mut self, download: &Download) -> Result<()> {
        trigger_download(&download.bytes, &download.mime, &download.file_name)
            .map_err(|e| Error::Download(format!("{}: {:?}", download.file_name, e)))
    }
}

fn trigger_download(bytes: &[u8], mime: &str, file_name: &str) -> std::result::Result<(), JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);

    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Ok(())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_browser_clock_is_after_2020() {
        let now = BrowserClock.now();
        assert!(now.timestamp_millis() > 1_577_836_800_000);
    }

    #[wasm_bindgen_test]
    fn wasm_browser_sink_delivers_json() {
        let mut sink = BrowserSink;
        let result = sink.deliver(&Download::labels("[]".to_string()));
        assert!(result.is_ok());
    }
}
