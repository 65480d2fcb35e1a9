//! Toast host: renders the transient notice queue and owns auto-dismissal.
//!
//! DESIGN
//! ======
//! Callers only push onto `ToastState`; this host schedules one dismissal
//! timer per toast id. A high-water mark keeps re-runs of the scheduling
//! effect from double-arming timers for toasts already seen.

use leptos::prelude::*;

use crate::state::notify::{ToastKind, ToastState};

/// Overlay listing active toasts, newest at the bottom.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Ids at or below this mark already have a dismissal timer armed.
    let scheduled_through = RwSignal::new(0_u64);
    Effect::new(move || {
        let pending: Vec<u64> = toasts
            .get()
            .toasts()
            .iter()
            .map(|toast| toast.id)
            .filter(|id| *id > scheduled_through.get_untracked())
            .collect();
        let Some(newest) = pending.iter().max().copied() else {
            return;
        };
        scheduled_through.set(newest);
        for id in pending {
            schedule_dismiss(toasts, id);
        }
    });

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts()
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast_class(toast.kind) on:click=move |_| {
                                toasts.update(|state| state.dismiss(id));
                            }>
                                {toast.message.clone()}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    use crate::state::notify::TOAST_DURATION_MS;

    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
            TOAST_DURATION_MS,
        )))
        .await;
        toasts.update(|state| state.dismiss(id));
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_toasts: RwSignal<ToastState>, _id: u64) {}

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Info => "toast toast--info",
        ToastKind::Error => "toast toast--error",
    }
}
