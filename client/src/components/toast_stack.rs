//! Toast stack rendering the notice queue.
//!
//! Each toast dismisses itself after `NOTICE_TIMEOUT_MS` in the browser and
//! can be closed early. During SSR the stack is always empty.

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeState, NoticeTone};

#[component]
pub fn ToastStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| view! { <Toast notice=notice notices=notices/> }
            />
        </div>
    }
}

#[component]
fn Toast(notice: Notice, notices: RwSignal<NoticeState>) -> impl IntoView {
    let id = notice.id;
    let destructive = notice.text.tone == NoticeTone::Destructive;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::notice::NOTICE_TIMEOUT_MS).await;
        notices.update(|n| {
            n.dismiss(id);
        });
    });

    view! {
        <div class="toast" class:toast--destructive=destructive role="status">
            <div class="toast__body">
                <p class="toast__title">{notice.text.title}</p>
                <p class="toast__description">{notice.text.description}</p>
            </div>
            <button
                class="toast__close"
                type="button"
                on:click=move |_| {
                    notices.update(|n| {
                        n.dismiss(id);
                    });
                }
            >
                "\u{00D7}"
            </button>
        </div>
    }
}
