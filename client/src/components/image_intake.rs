//! Drag-and-drop / file-picker intake for one photo view.
//!
//! DESIGN
//! ======
//! The widget keeps its own drag highlight and preview in an
//! `RwSignal<IntakeState>` and reports selections through `on_select`. When
//! the parent clears its selection (reset), the widget drops its preview too.

use leptos::prelude::*;
use record::{SelectedImage, View};

use crate::state::intake::{DropZoneLook, IntakeState};

/// Single-image intake with preview and remove control.
#[component]
pub fn ImageIntake(
    view: View,
    selected: Signal<Option<SelectedImage>>,
    on_select: Callback<Option<SelectedImage>>,
) -> impl IntoView {
    let intake = RwSignal::new(IntakeState::default());

    Effect::new(move || {
        if selected.with(Option::is_none) {
            intake.update(IntakeState::clear);
        }
    });

    let look = move || intake.with(IntakeState::look);
    let preview = Memo::new(move |_| intake.with(|s| s.preview.clone()));
    let file_name = move || selected.with(|s| s.as_ref().map(|image| image.name.clone()).unwrap_or_default());

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        intake.update(IntakeState::drag_over);
    };
    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        intake.update(IntakeState::drag_leave);
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        intake.update(IntakeState::end_drag);
        #[cfg(feature = "hydrate")]
        {
            if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)) {
                offer_file(file, intake, on_select);
            }
        }
    };
    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                offer_file(file, intake, on_select);
            }
            // Allow picking the same file again after removal.
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };
    let on_remove = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let event = intake.try_update(IntakeState::remove);
        if let Some(event) = event {
            on_select.run(event.into_selection());
        }
    };

    let preview_alt = format!("{} preview", view.label());

    view! {
        <div class="intake">
            <div class="intake__header">
                <div class="intake__icon">{view.icon()}</div>
                <div>
                    <h3 class="intake__label">{view.label()}</h3>
                    <p class="intake__description">{view.description()}</p>
                </div>
            </div>

            <div
                class="intake__drop"
                class:intake__drop--dragging=move || look() == DropZoneLook::Dragging
                class:intake__drop--filled=move || look() == DropZoneLook::Filled
                on:dragenter=on_drag_over
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <input
                    class="intake__input"
                    type="file"
                    accept="image/*"
                    name=view.field_name()
                    on:change=on_change
                />
                {move || match preview.get() {
                    Some(src) => view! {
                        <div class="intake__preview">
                            <img class="intake__image" src=src alt=preview_alt.clone()/>
                            <button class="intake__remove" type="button" title="Remove image" on:click=on_remove>
                                "\u{00D7}"
                            </button>
                        </div>
                    }
                        .into_any(),
                    None => view! {
                        <div class="intake__empty">
                            <div class="intake__upload-icon">"\u{2B06}"</div>
                            <p class="intake__hint">"Drop your image here"</p>
                            <p class="intake__subhint">"or click to browse"</p>
                        </div>
                    }
                        .into_any(),
                }}
            </div>

            <Show when=move || selected.with(Option::is_some)>
                <p class="intake__filename">{file_name}</p>
            </Show>
        </div>
    }
}

/// Read an offered file, then let the intake state decide whether to show and report it.
#[cfg(feature = "hydrate")]
fn offer_file(file: web_sys::File, intake: RwSignal<IntakeState>, on_select: Callback<Option<SelectedImage>>) {
    leptos::task::spawn_local(async move {
        match crate::util::file::read_selected_image(&file).await {
            Ok(image) => match intake.try_update(|s| s.receive(image)).flatten() {
                Some(event) => on_select.run(event.into_selection()),
                None => log::debug!("ignoring {} ({:?}): not an image", file.name(), file.type_()),
            },
            Err(e) => log::warn!("failed to read {}: {e}", file.name()),
        }
    });
}
