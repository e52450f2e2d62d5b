//! 履歴書ファイルのダウンロード
//!
//! 非表示のリンクを一時的に作ってクリックさせる。失敗時の扱いはブラウザ任せ。

use shortlist_common::Endpoint;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAnchorElement;

pub fn trigger_download(endpoint: &Endpoint, name: &str) -> Result<(), JsValue> {
    let url = endpoint.download_url(name);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(name);
    link.set_attribute("style", "display: none")?;

    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;

    Ok(())
}
