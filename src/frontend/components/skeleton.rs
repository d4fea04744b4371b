use leptos::prelude::*;

/// Placeholder cards shown while a section loads.
#[component]
pub fn SkeletonGrid(count: usize) -> impl IntoView {
    view! {
        <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3" aria-busy="true">
            {(0..count)
                .map(|_| {
                    view! {
                        <div class="rounded-xl border border-slate-800 bg-slate-900/50 p-6 animate-pulse">
                            <div class="h-4 w-2/3 rounded bg-slate-700 mb-4"></div>
                            <div class="h-3 w-full rounded bg-slate-800 mb-2"></div>
                            <div class="h-3 w-5/6 rounded bg-slate-800 mb-2"></div>
                            <div class="h-3 w-1/2 rounded bg-slate-800"></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
