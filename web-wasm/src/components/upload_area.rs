//! アップロードエリアコンポーネント
//!
//! クリックでファイル選択、またはドラッグ&ドロップ。
//! PDFの絞り込みは受け取り側（FileSelection::accept）で行う。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, FileList};
use shortlist_common::PDF_MIME;
use crate::api::{collect_files, dropped_files, PickedFile};

#[component]
pub fn UploadArea<F>(on_files: F) -> impl IntoView
where
    F: Fn(Vec<PickedFile>) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let submit = move |picked: Vec<PickedFile>| {
        if !picked.is_empty() {
            on_files(picked);
        }
    };

    let handle_files = {
        let submit = submit.clone();
        move |files: FileList| submit(collect_files(&files))
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
        submit(dropped_files(&ev));
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_files = handle_files.clone();
        move |_| {
            if let Err(e) = open_file_picker(handle_files.clone()) {
                gloo::console::error!("failed to open file picker:", e);
            }
        }
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || is_dragover.get()
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📁"</div>
            <p>"Drag & drop resumes here, or click to browse"</p>
            <p class="text-muted">"Supported format: PDF"</p>
        </div>
    }
}

/// ファイル選択ダイアログを開く
///
/// 毎回新しい input を作るので、同じファイルを選び直しても change が発火する。
fn open_file_picker<H>(handle_files: H) -> Result<(), JsValue>
where
    H: Fn(FileList) + 'static,
{
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let input: web_sys::HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type("file");
    input.set_accept(PDF_MIME);
    input.set_multiple(true);

    let target = input.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(files) = target.files() {
            handle_files(files);
        }
    }) as Box<dyn FnMut(_)>);

    input.set_onchange(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
    input.click();
    Ok(())
}
