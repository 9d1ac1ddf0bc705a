//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::pages::measure::MeasurePage;
use crate::state::{measure::MeasureState, notice::NoticeState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the controller and notice contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let measure = RwSignal::new(MeasureState::default());
    let notices = RwSignal::new(NoticeState::default());

    provide_context(measure);
    provide_context(notices);

    view! {
        <Stylesheet id="leptos" href="/pkg/body-measure.css"/>
        <Title text="Body Measure AI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=MeasurePage/>
            </Routes>
        </Router>
        <ToastStack/>
    }
}
