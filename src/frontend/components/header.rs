use leptos::prelude::*;

use crate::config::profile;
use crate::frontend::Navigator;

/// In-page anchors shared by the header, footer and mobile bar.
pub const SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("projects", "Projects"),
    ("research", "Research"),
    ("certifications", "Certifications"),
    ("blog", "Blog"),
    ("contact", "Contact"),
];

/// Anchors only resolve on the portfolio page, so off-page links go home first.
pub fn section_href(id: &str) -> String {
    format!("/#{id}")
}

#[component]
pub fn Header() -> impl IntoView {
    let navigator = expect_context::<Navigator>();
    let menu_open = RwSignal::new(false);

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 backdrop-blur-md bg-slate-950/80 border-b border-slate-800">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <a
                    href="/"
                    class="flex items-center gap-3 group"
                    on:click=move |ev| {
                        ev.prevent_default();
                        navigator.home();
                    }
                >
                    <span class="text-xl font-bold bg-gradient-to-r from-orange-400 to-amber-400 bg-clip-text text-transparent">
                        {profile::NAME}
                    </span>
                </a>
                <div class="hidden md:flex items-center gap-6">
                    {SECTIONS
                        .iter()
                        .map(|(id, label)| {
                            view! {
                                <a href=section_href(id) class="text-slate-400 hover:text-white transition-colors">
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href="/admin"
                        class="btn-ghost text-sm px-4 py-2"
                        on:click=move |ev| {
                            ev.prevent_default();
                            navigator.admin();
                        }
                    >
                        "Admin"
                    </a>
                </div>
                <button
                    type="button"
                    class="md:hidden text-slate-300"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden border-t border-slate-800 px-6 py-4 flex flex-col gap-3">
                    {SECTIONS
                        .iter()
                        .map(|(id, label)| {
                            view! {
                                <a
                                    href=section_href(id)
                                    class="text-slate-300 hover:text-white"
                                    on:click=move |_| menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
