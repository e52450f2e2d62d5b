//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Resume Shortlist"</h1>
            <p class="text-muted">"AI-assisted candidate screening"</p>
        </header>
    }
}
