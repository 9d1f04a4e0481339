//! Notification stack pinned to the corner of the viewport.

use leptos::prelude::*;

use crate::state::toast::{Notice, Toast, ToastKind, ToastState};

#[cfg(feature = "hydrate")]
const TOAST_TTL: std::time::Duration = std::time::Duration::from_secs(3);

/// Queue a notice; in the browser it dismisses itself after a few seconds.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    if let Some(id) = toasts.try_update(|t| t.push(notice)) {
        schedule_dismiss(toasts, id);
    }
}

#[cfg(feature = "hydrate")]
fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_TTL).await;
        toasts.update(|t| t.dismiss(id));
    });
}

#[cfg(not(feature = "hydrate"))]
fn schedule_dismiss(_toasts: RwSignal<ToastState>, _id: u64) {}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class="toast"
                            class:toast--success=toast.kind == ToastKind::Success
                            class:toast--error=toast.kind == ToastKind::Error
                        >
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "\u{2715}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
