//! Toast Component
//!
//! Bottom-right stack with one row per toast kind.

use leptos::*;

use crate::state::global::{GlobalState, ToastKind};

fn style(kind: ToastKind) -> (&'static str, &'static str) {
    match kind {
        ToastKind::Success => ("✓", "bg-emerald-700"),
        ToastKind::Error => ("✕", "bg-red-700"),
    }
}

/// Toast stack
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-6 right-4 z-50 flex flex-col gap-2" role="status">
            {ToastKind::ALL.into_iter().map(|kind| {
                let (icon, bg) = style(kind);
                move || state.message(kind).map(|message| view! {
                    <div class=format!("flex items-center gap-3 {} text-white px-4 py-3 rounded-lg shadow-lg", bg)>
                        <span class="text-lg">{icon}</span>
                        <span class="text-sm font-medium">{message}</span>
                    </div>
                })
            }).collect_view()}
        </div>
    }
}
