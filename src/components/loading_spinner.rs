use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="spinner-container">
            <div class="spinner"></div>
        </div>
    }
}
