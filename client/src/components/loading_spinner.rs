//! Spinner shown while the measurement request is in flight.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-live="polite">
            <div class="spinner__ring">
                <div class="spinner__ping"></div>
                <div class="spinner__wheel"></div>
            </div>
            <p class="spinner__title">"Analyzing your images..."</p>
            <p class="spinner__subtitle">"This may take a few moments"</p>
        </div>
    }
}
