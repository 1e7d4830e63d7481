//! ブラウザのクリップボード書き込み
//!
//! Clipboard API（`navigator.clipboard.writeText`）を使い、
//! 使えない場合は隠しtextareaを選択して `execCommand("copy")` で複製する。

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

/// 複製に使った手段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    ClipboardApi,
    Selection,
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("window が取得できません"))
}

/// `navigator.clipboard.writeText(text)` のPromise
///
/// 非セキュアコンテキストでは `navigator.clipboard` が未定義になる。
fn write_text_promise(text: &str) -> Result<js_sys::Promise, JsValue> {
    let navigator = window()?.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("Clipboard API が利用できません"));
    }
    let write_text: js_sys::Function =
        js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<js_sys::Promise>()
}

async fn write_with_clipboard_api(text: &str) -> Result<(), JsValue> {
    let promise = write_text_promise(text)?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// 隠しtextareaを選択して複製
fn write_with_selection(text: &str) -> Result<bool, JsValue> {
    let document = window()?
        .document()
        .ok_or_else(|| JsValue::from_str("document が取得できません"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("body が取得できません"))?;

    let textarea: HtmlTextAreaElement = document.create_element("textarea")?.dyn_into()?;
    textarea.set_value(text);
    textarea.set_attribute("readonly", "")?;
    let style = textarea.style();
    style.set_property("position", "fixed")?;
    style.set_property("left", "-9999px")?;
    style.set_property("top", "0")?;

    body.append_child(&textarea)?;
    textarea.select();
    let html_document: HtmlDocument = document.dyn_into()?;
    let copied = html_document.exec_command("copy");
    body.remove_child(&textarea)?;
    copied
}

/// 判定結果テキストを複製
///
/// `allow_fallback` が偽の場合、Clipboard API の失敗をそのまま返す。
/// 真の場合は選択＋copyコマンドで複製し、成功扱いにする。
pub async fn copy_text(text: String, allow_fallback: bool) -> Result<CopyMethod, String> {
    match write_with_clipboard_api(&text).await {
        Ok(()) => Ok(CopyMethod::ClipboardApi),
        Err(e) if allow_fallback => {
            gloo::console::warn!(format!("Clipboard API failed, using selection copy: {:?}", e));
            match write_with_selection(&text) {
                Ok(true) => {}
                Ok(false) => gloo::console::warn!("execCommand(\"copy\") returned false"),
                Err(e) => gloo::console::warn!(format!("selection copy failed: {:?}", e)),
            }
            Ok(CopyMethod::Selection)
        }
        Err(e) => Err(format!("{:?}", e)),
    }
}

/// ブロッキングな通知
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
