//! 解析結果（候補者一覧）コンポーネント

use leptos::prelude::*;
use shortlist_common::{CandidateRow, ResultsView};
use crate::components::score_bar::ScoreBar;

#[component]
pub fn ResultsPanel<FD, FB>(
    results: ReadSignal<Option<ResultsView>>,
    on_download: FD,
    on_back: FB,
) -> impl IntoView
where
    FD: Fn(String) + 'static + Clone + Send,
    FB: Fn(()) + 'static + Clone,
{
    let summary = move |f: fn(&ResultsView) -> String| {
        results.with(|r| r.as_ref().map(f).unwrap_or_default())
    };

    view! {
        <div class="results">
            <div class="results-summary">
                <p>"Job Role: "<strong>{move || summary(|r| r.job_role.clone())}</strong></p>
                <p>"Total Resumes: "<strong>{move || summary(|r| r.total_resumes.to_string())}</strong></p>
                <p>"Top Candidates: "<strong>{move || summary(|r| r.top_count.to_string())}</strong></p>
            </div>

            <div class="candidates-list">
                <For
                    each=move || results.get().map(|r| r.rows).unwrap_or_default()
                    key=|row| (row.rank, row.name.clone())
                    children=move |row| {
                        let on_download = on_download.clone();
                        view! { <CandidateCard row=row on_download=on_download /> }
                    }
                />
            </div>

            <button
                class="btn btn-secondary"
                on:click={
                    let on_back = on_back.clone();
                    move |_| on_back(())
                }
            >
                "Analyze New Resumes"
            </button>
        </div>
    }
}

#[component]
fn CandidateCard<FD>(row: CandidateRow, on_download: FD) -> impl IntoView
where
    FD: Fn(String) + 'static + Clone + Send,
{
    view! {
        <div class="candidate-card">
            <div class="candidate-rank">{row.rank_label()}</div>
            <div class="candidate-info">
                <h3>{row.name.clone()}</h3>
                <p><strong>"Predicted Role: "</strong>{row.predicted.clone()}</p>
                <p><strong>"Match Score: "</strong>{row.score_label()}</p>
                <ScoreBar width=row.bar_width() />
                // 確信度（row.confidence_percent）は現状表示しない
            </div>
            <button
                class="download-btn"
                on:click={
                    let name = row.name.clone();
                    move |_| on_download(name.clone())
                }
            >
                "⬇ Download"
            </button>
        </div>
    }
}
