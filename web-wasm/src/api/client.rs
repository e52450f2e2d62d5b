//! 解析サーバ連携（fetch + FormData）

use shortlist_common::{AnalysisError, HttpReply, SelectedFile, Transport, FILES_FIELD};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, File, FileList, FormData, Request, RequestInit, Response};

/// ブラウザで選択されたファイル
#[derive(Clone, Debug)]
pub struct PickedFile {
    pub name: String,
    pub mime_type: String,
    pub file: File,
}

impl From<File> for PickedFile {
    fn from(file: File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            file,
        }
    }
}

impl SelectedFile for PickedFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

/// FileList を選択順のまま取り出す
pub fn collect_files(list: &FileList) -> Vec<PickedFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(PickedFile::from)
        .collect()
}

/// ドロップされたファイル。DataTransfer がなければ空
pub fn dropped_files(ev: &DragEvent) -> Vec<PickedFile> {
    ev.data_transfer()
        .and_then(|dt| dt.files())
        .map(|list| collect_files(&list))
        .unwrap_or_default()
}

/// JS例外をメッセージ文字列にする
fn js_error(value: JsValue) -> AnalysisError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    AnalysisError::Transport(message)
}

pub struct FetchTransport;

impl Transport for FetchTransport {
    type File = PickedFile;

    async fn submit(&self, url: &str, files: &[PickedFile]) -> Result<HttpReply, AnalysisError> {
        let form = FormData::new().map_err(js_error)?;
        for picked in files {
            form.append_with_blob_and_filename(FILES_FIELD, &picked.file, &picked.name)
                .map_err(js_error)?;
        }

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&form);

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

        let window = web_sys::window()
            .ok_or_else(|| AnalysisError::Transport("window is not available".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        // 失敗時も本文をメッセージに使うので常にテキストで読む
        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        Ok(HttpReply::new(resp.status(), text.as_string().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortlist_common::FileSelection;
    use wasm_bindgen_test::*;
    use web_sys::{DataTransfer, DragEventInit, FilePropertyBag};

    wasm_bindgen_test_configure!(run_in_browser);

    fn make_file(name: &str, mime: &str) -> File {
        let parts = js_sys::Array::of1(&JsValue::from_str("%PDF-1.4"));
        let options = FilePropertyBag::new();
        options.set_type(mime);
        File::new_with_str_sequence_and_options(&parts, name, &options).unwrap()
    }

    #[wasm_bindgen_test]
    fn picked_file_keeps_name_and_type() {
        let picked = PickedFile::from(make_file("Jane Doe.pdf", "application/pdf"));
        assert_eq!(picked.name, "Jane Doe.pdf");
        assert_eq!(picked.mime_type, "application/pdf");
    }

    #[wasm_bindgen_test]
    fn selection_drops_non_pdf_browser_files() {
        let mut selection = FileSelection::new();
        let count = selection.accept(vec![
            PickedFile::from(make_file("a.pdf", "application/pdf")),
            PickedFile::from(make_file("b.png", "image/png")),
        ]);
        assert_eq!(count, 1);
        assert_eq!(selection.names(), vec!["a.pdf"]);
    }

    fn drop_event(files: &[File]) -> DragEvent {
        let transfer = DataTransfer::new().unwrap();
        for file in files {
            transfer.items().add_with_file(file).unwrap();
        }
        let init = DragEventInit::new();
        init.set_data_transfer(Some(&transfer));
        DragEvent::new_with_event_init_dict("drop", &init).unwrap()
    }

    #[wasm_bindgen_test]
    fn dropped_files_keep_drop_order() {
        let ev = drop_event(&[
            make_file("b.pdf", "application/pdf"),
            make_file("photo.png", "image/png"),
            make_file("a.pdf", "application/pdf"),
        ]);
        let names: Vec<String> = dropped_files(&ev).into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["b.pdf", "photo.png", "a.pdf"]);
    }

    #[wasm_bindgen_test]
    fn drop_keeps_only_pdfs_in_selection() {
        let ev = drop_event(&[
            make_file("b.pdf", "application/pdf"),
            make_file("photo.png", "image/png"),
            make_file("a.pdf", "application/pdf"),
        ]);
        let mut selection = FileSelection::new();
        assert_eq!(selection.accept(dropped_files(&ev)), 2);
        assert_eq!(selection.names(), vec!["b.pdf", "a.pdf"]);
    }

    #[wasm_bindgen_test]
    fn drop_without_data_transfer_is_empty() {
        let ev = DragEvent::new("drop").unwrap();
        assert!(dropped_files(&ev).is_empty());
    }

    #[wasm_bindgen_test]
    fn js_error_uses_message() {
        let err = js_error(js_sys::Error::new("Failed to fetch").into());
        assert_eq!(err, AnalysisError::Transport("Failed to fetch".into()));
    }
}
