use leptos::prelude::*;

use crate::frontend::browser::reload_page;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum AlertVariant {
    #[default]
    Success,
    Error,
}

#[component]
pub fn Alert(
    #[prop(into)] message: String,
    #[prop(optional)] variant: AlertVariant,
) -> impl IntoView {
    let (icon, classes) = match variant {
        AlertVariant::Success => (
            "✓",
            "bg-emerald-500/10 border-emerald-500/30 text-emerald-400",
        ),
        AlertVariant::Error => ("✕", "bg-red-500/10 border-red-500/30 text-red-400"),
    };

    view! {
        <div class=format!("mb-6 p-4 rounded-lg border text-sm {}", classes) role="alert">
            <p class="flex items-center gap-2">
                <span>{icon}</span>
                <span>{message}</span>
            </p>
        </div>
    }
}

#[component]
pub fn SuccessAlert(#[prop(into)] message: String) -> impl IntoView {
    view! { <Alert message=message variant=AlertVariant::Success /> }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! { <Alert message=message variant=AlertVariant::Error /> }
}

/// Section-level failure with a full reload as the retry.
#[component]
pub fn ErrorPanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto text-center py-12">
            <p class="text-4xl mb-4">"⚠️"</p>
            <p class="text-red-400 mb-6">{message}</p>
            <button type="button" class="btn-primary" on:click=move |_| reload_page()>
                "Try Again"
            </button>
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="text-center py-12 text-slate-400">
            <p class="text-4xl mb-4">"📭"</p>
            <p>{message}</p>
        </div>
    }
}
