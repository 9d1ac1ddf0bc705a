//! Results card body: warning banner, measurement grid, accuracy note.

#[cfg(all(test, feature = "ssr"))]
#[path = "measurement_results_test.rs"]
mod measurement_results_test;

use leptos::prelude::*;
use record::{MeasurementCard, MeasurementRecord};

/// Render a measurement record. Pure: reads the record, never mutates state.
#[component]
pub fn MeasurementResults(record: MeasurementRecord) -> impl IntoView {
    let warning = record.warning_text().map(str::to_owned);
    let note = record.accuracy_text().map(str::to_owned);
    let cards = record.cards();

    view! {
        <div class="results">
            {warning.map(|text| view! {
                <div class="results__warning" role="alert">
                    <span class="results__warning-icon">"\u{26A0}"</span>
                    <div>
                        <p class="results__warning-title">"Warning"</p>
                        <p class="results__warning-text">{text}</p>
                    </div>
                </div>
            })}

            <div class="results__grid">
                {cards
                    .into_iter()
                    .enumerate()
                    .map(|(index, card)| view! { <MeasurementTile card=card index=index/> })
                    .collect_view()}
            </div>

            {note.map(|text| view! {
                <div class="results__note">
                    <span class="results__note-icon">"\u{2139}"</span>
                    <p class="results__note-text">{text}</p>
                </div>
            })}
        </div>
    }
}

#[component]
fn MeasurementTile(card: MeasurementCard, index: usize) -> impl IntoView {
    let delay = format!("{}ms", index * 100);

    view! {
        <div class="measurement" data-key=card.key style:animation-delay=delay>
            <div class="measurement__heading">
                <span class="measurement__icon">{card.icon}</span>
                <span class="measurement__label">{card.label}</span>
            </div>
            <div class="measurement__reading">
                <span class="measurement__value">{card.value}</span>
                <span class="measurement__unit">{card.unit}</span>
            </div>
        </div>
    }
}
