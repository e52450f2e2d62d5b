//! マッチ度バー

use leptos::prelude::*;

#[component]
pub fn ScoreBar(width: String) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div class="progress-fill" style=format!("width: {}", width) />
        </div>
    }
}
