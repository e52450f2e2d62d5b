//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shortlist_common::{
    run_analysis, AnalyzeOutcome, BusyIndicator, Endpoint, FileSelection, ResultsView, Screen,
    ViewState,
};
use crate::api::{trigger_download, FetchTransport, PickedFile};
use crate::components::{
    analyze_button::AnalyzeButton,
    files_list::FilesList,
    header::Header,
    results_panel::ResultsPanel,
    upload_area::UploadArea,
    welcome::Welcome,
};
use crate::notify;

/// 実行中表示を ViewState.busy に反映する
struct SignalBusy(RwSignal<ViewState>);

impl BusyIndicator for SignalBusy {
    fn set_busy(&self, busy: bool) {
        self.0.update(|v| v.busy = busy);
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let endpoint = Endpoint::default();

    // アプリケーション状態
    let view_state = RwSignal::new(ViewState::new());
    let selection = StoredValue::new_local(FileSelection::<PickedFile>::new());
    let (file_names, set_file_names) = signal(Vec::<String>::new());
    let (job_role, set_job_role) = signal(String::new());
    let (results, set_results) = signal(None::<ResultsView>);

    let is_visible = move |screen: Screen| view_state.get().is_visible(screen);

    let show_welcome = move |_: ()| {
        view_state.update(|v| v.show_welcome());
    };

    let show_upload = move |_: ()| {
        selection.update_value(|s| view_state.update(|v| v.show_upload(s)));
        set_file_names.set(Vec::new());
    };

    // ファイル選択・ドロップ共通。PDFが1件もなければ何も変えない
    let on_files = move |files: Vec<PickedFile>| {
        let mut accepted = None;
        selection.update_value(|s| {
            if s.accept(files) > 0 {
                view_state.update(|v| v.on_selection_changed(s));
                accepted = Some(s.names());
            }
        });
        if let Some(names) = accepted {
            set_file_names.set(names);
        }
    };

    // 解析開始ハンドラ
    let on_analyze = {
        let endpoint = endpoint.clone();
        move |_: ()| {
            if !view_state.get_untracked().can_submit() {
                return;
            }
            let current = selection.get_value();
            let role = job_role.get_untracked();
            let endpoint = endpoint.clone();

            spawn_local(async move {
                let busy = SignalBusy(view_state);
                let outcome = run_analysis(&FetchTransport, &endpoint, &current, &role, &busy).await;

                match &outcome {
                    AnalyzeOutcome::Shortlisted(view) => {
                        gloo::console::log!("shortlisted candidates:", view.rows.len());
                        set_results.set(Some(view.clone()));
                    }
                    AnalyzeOutcome::Failed(error) => notify::analysis_failed(error),
                    AnalyzeOutcome::Skipped => {}
                }
                view_state.update(|v| outcome.apply(v));
            });
        }
    };

    // ダウンロードハンドラ
    let on_download = {
        let endpoint = endpoint.clone();
        move |name: String| {
            if let Err(e) = trigger_download(&endpoint, &name) {
                gloo::console::error!("download failed:", e);
            }
        }
    };

    view! {
        <div class="container">
            <Header />

            <section class="screen" class:hidden=move || !is_visible(Screen::Welcome)>
                <Welcome on_start=show_upload />
            </section>

            <section class="screen" class:hidden=move || !is_visible(Screen::Upload)>
                <div class="form-group">
                    <label for="job-role">"Job Role"</label>
                    <input
                        type="text"
                        id="job-role"
                        placeholder="e.g. Web Developer"
                        prop:value=move || job_role.get()
                        on:input=move |ev| {
                            set_job_role.set(event_target_value(&ev));
                        }
                    />
                </div>

                <UploadArea on_files=on_files />
                <FilesList file_names=file_names />
                <AnalyzeButton view_state=view_state.read_only() on_analyze=on_analyze />

                <button class="btn btn-tertiary" on:click=move |_| show_welcome(())>
                    "Back"
                </button>
            </section>

            <section class="screen" class:hidden=move || !is_visible(Screen::Results)>
                <ResultsPanel
                    results=results
                    on_download=on_download
                    on_back=show_upload
                />
            </section>
        </div>
    }
}
