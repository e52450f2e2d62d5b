//! ようこそ画面

use leptos::prelude::*;

#[component]
pub fn Welcome<F>(on_start: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="welcome">
            <h2>"Find the right candidates faster"</h2>
            <p>"Upload PDF resumes, choose a job role, and get a ranked shortlist."</p>
            <button
                class="btn btn-primary"
                on:click=move |_| on_start(())
            >
                "Get Started"
            </button>
        </div>
    }
}
