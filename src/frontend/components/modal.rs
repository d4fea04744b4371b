use leptos::prelude::*;

/// Overlay dialog; clicking the backdrop or the close button calls `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-[60] flex items-center justify-center bg-black/70 p-4"
            on:click=move |_| on_close.run(())
        >
            <div
                class="w-full max-w-4xl max-h-[90vh] overflow-y-auto rounded-2xl border border-slate-700 bg-slate-900 shadow-2xl"
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="sticky top-0 flex items-center justify-between border-b border-slate-800 bg-slate-900 px-6 py-4">
                    <h3 class="text-xl font-semibold text-white">{title}</h3>
                    <button
                        type="button"
                        class="text-slate-400 hover:text-white text-2xl"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                </div>
                <div class="p-6">{children()}</div>
            </div>
        </div>
    }
}
