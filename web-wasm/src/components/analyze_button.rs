//! 解析開始ボタン

use leptos::prelude::*;
use shortlist_common::ViewState;

#[component]
pub fn AnalyzeButton<FA>(
    view_state: ReadSignal<ViewState>,
    on_analyze: FA,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone,
{
    let is_busy = move || view_state.get().busy;

    view! {
        <button
            class="btn btn-primary analyze-btn"
            class:hidden=move || !view_state.get().analyze_visible
            disabled=is_busy
            on:click={
                let on_analyze = on_analyze.clone();
                move |_| on_analyze(())
            }
        >
            <span class="spinner" class:hidden=move || !is_busy() />
            <span>
                {move || if is_busy() { "Analyzing..." } else { "Analyze All Resumes" }}
            </span>
        </button>
    }
}
