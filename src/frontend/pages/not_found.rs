use leptos::prelude::*;

use crate::frontend::Navigator;

#[component]
pub fn NotFound(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
) -> impl IntoView {
    let navigator = expect_context::<Navigator>();

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950">
            <div class="text-center">
                <h1 class="text-8xl md:text-9xl font-bold bg-gradient-to-r from-orange-400 to-amber-400 bg-clip-text text-transparent mb-4">
                    "404"
                </h1>
                <p class="text-2xl font-semibold text-white mb-2">{title}</p>
                <p class="text-slate-400 mb-8 max-w-md">{message}</p>
                <button type="button" class="btn-primary" on:click=move |_| navigator.home()>
                    "Back to Home"
                </button>
            </div>
        </div>
    }
}
