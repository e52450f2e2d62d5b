//! 選択済みファイル一覧

use leptos::prelude::*;

#[component]
pub fn FilesList(file_names: ReadSignal<Vec<String>>) -> impl IntoView {
    view! {
        <div class="files-list">
            <For
                each=move || file_names.get().into_iter().enumerate()
                key=|(i, name)| (*i, name.clone())
                children=|(_, name)| {
                    view! {
                        <div class="file-item">
                            <span class="file-icon">"📄"</span>
                            <span>{name}</span>
                            <span class="check-icon">"✔"</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
