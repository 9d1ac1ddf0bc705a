//! Measure page: photo intake, request lifecycle, and results.
//!
//! SYSTEM CONTEXT
//! ==============
//! Acts as the page controller. It owns no state of its own; it reads and
//! writes the `RwSignal<MeasureState>` and `RwSignal<NoticeState>` contexts
//! provided by `app::App`, and switches between the upload card and the
//! results card.

use leptos::prelude::*;
use record::{SelectedImage, View};

use crate::components::image_intake::ImageIntake;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::measurement_results::MeasurementResults;
use crate::state::measure::{Begin, MISSING_IMAGES_NOTICE, MeasureState};
use crate::state::notice::NoticeState;

#[component]
pub fn MeasurePage() -> impl IntoView {
    let state = expect_context::<RwSignal<MeasureState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    // Memo so the upload card (and its widget previews) is not rebuilt on every state change.
    let showing_results = Memo::new(move |_| state.with(|s| s.result().is_some()));

    view! {
        <div class="measure-page">
            <header class="app-header">
                <div class="app-header__inner">
                    <div class="app-header__logo">"\u{1F4CF}"</div>
                    <div>
                        <h1 class="app-header__title">"Body Measure AI"</h1>
                        <p class="app-header__subtitle">"Pose-based estimation"</p>
                    </div>
                </div>
            </header>

            <main class="measure-main">
                <section class="hero">
                    <div class="hero__badge">"\u{2728} AI-Powered Analysis"</div>
                    <h2 class="hero__title">
                        "AI-Based Full Body Measurement Estimation"
                        <span class="hero__accent">" (Approximate)"</span>
                    </h2>
                    <p class="hero__lead">
                        "Upload three full-body images from different angles. Our AI will analyze your pose and estimate your body measurements in centimeters."
                    </p>
                </section>

                <div class="disclaimer">
                    <p>
                        <span class="disclaimer__label">"Disclaimer: "</span>
                        "Measurements are approximate and based on pose estimation from RGB images. Accuracy may vary with image quality."
                    </p>
                </div>

                <Show
                    when=move || !showing_results.get()
                    fallback=move || view! { <ResultsSection state=state/> }
                >
                    <UploadSection state=state notices=notices/>
                </Show>

                <p class="footer-note">
                    "This app is for demonstration and educational purposes only. Images are not stored."
                </p>
            </main>
        </div>
    }
}

#[component]
fn UploadSection(state: RwSignal<MeasureState>, notices: RwSignal<NoticeState>) -> impl IntoView {
    let loading = Memo::new(move |_| state.with(MeasureState::is_loading));
    let ready = Memo::new(move |_| state.with(MeasureState::all_selected));
    let error = Memo::new(move |_| state.with(|s| s.error().map(str::to_owned)));

    view! {
        <section class="card upload">
            <div class="card__intro">
                <h3 class="card__title">"Upload Your Images"</h3>
                <p class="card__lead">
                    "For best results, use well-lit, full-body photos where your entire body is visible. Wear fitted clothing for more accurate measurements."
                </p>
            </div>

            <div class="upload__grid">
                {View::ALL
                    .into_iter()
                    .map(|photo| {
                        view! {
                            <ImageIntake
                                view=photo
                                selected=selection_signal(state, photo)
                                on_select=selection_callback(state, photo)
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || loading.get()
                fallback=move || view! {
                    <div class="upload__actions">
                        <button
                            class="button button--hero"
                            type="button"
                            disabled=move || !ready.get()
                            on:click=move |_| measure(state, notices)
                        >
                            "\u{1F4CF} Measure Body"
                        </button>
                    </div>
                }
            >
                <LoadingSpinner/>
            </Show>

            {move || error.get().map(|message| view! {
                <div class="upload__error" role="alert">
                    <p class="upload__error-title">"Error"</p>
                    <p class="upload__error-text">{message}</p>
                </div>
            })}
        </section>
    }
}

#[component]
fn ResultsSection(state: RwSignal<MeasureState>) -> impl IntoView {
    let record = move || state.with(|s| s.result().cloned());

    view! {
        <section class="card results-card">
            <div class="results-card__header">
                <div>
                    <h3 class="card__title">"Your Measurements"</h3>
                    <p class="card__lead">"Estimated body measurements based on pose analysis"</p>
                </div>
                <button class="button button--outline" type="button" on:click=move |_| state.update(MeasureState::reset)>
                    "Measure Again"
                </button>
            </div>
            {move || record().map(|record| view! { <MeasurementResults record=record/> })}
        </section>
    }
}

fn selection_signal(state: RwSignal<MeasureState>, view: View) -> Signal<Option<SelectedImage>> {
    Signal::derive(move || state.with(|s| s.selection(view).cloned()))
}

fn selection_callback(state: RwSignal<MeasureState>, view: View) -> Callback<Option<SelectedImage>> {
    Callback::new(move |image: Option<SelectedImage>| state.update(|s| s.set_selection(view, image)))
}

/// Validate selections and send a single measurement request.
fn measure(state: RwSignal<MeasureState>, notices: RwSignal<NoticeState>) {
    match state.try_update(MeasureState::begin) {
        Some(Begin::Send(request)) => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::submit_measurement(&request).await;
                if let Err(e) = &outcome {
                    log::warn!("measurement failed: {e}");
                }
                if let Some(text) = state.try_update(|s| s.complete(outcome)) {
                    notices.update(|n| {
                        n.push(text);
                    });
                }
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = request;
            }
        }
        Some(Begin::Invalid(err)) => {
            #[cfg(feature = "hydrate")]
            log::debug!("measure skipped: {err}");
            #[cfg(not(feature = "hydrate"))]
            let _ = err;
            notices.update(|n| {
                n.push(MISSING_IMAGES_NOTICE);
            });
        }
        Some(Begin::InFlight) | None => {}
    }
}
