use leptos::prelude::*;

use crate::config::profile;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950">
            <div class="text-center">
                <div class="mb-8 mx-auto w-24 h-24 relative">
                    <div class="absolute inset-0 rounded-full bg-gradient-to-r from-orange-400 to-amber-400 opacity-20 animate-pulse"></div>
                    <div class="absolute inset-4 rounded-full bg-gradient-to-r from-orange-500 to-amber-500 opacity-60 animate-pulse"></div>
                    <div class="absolute inset-0 rounded-full border-4 border-orange-500/30 border-t-orange-500 animate-spin"></div>
                </div>
                <h2 class="text-2xl font-bold bg-gradient-to-r from-orange-400 to-amber-400 bg-clip-text text-transparent mb-2">
                    {profile::NAME}
                </h2>
                <p class="text-slate-400 font-mono text-sm">"Initializing portfolio..."</p>
            </div>
        </div>
    }
}
