use leptos::prelude::*;

use super::header::section_href;

const ITEMS: &[(&str, &str, &str)] = &[
    ("hero", "🏠", "Home"),
    ("about", "👤", "About"),
    ("projects", "💼", "Work"),
    ("blog", "📝", "Blog"),
    ("contact", "✉️", "Contact"),
];

/// Bottom tab bar on small screens.
#[component]
pub fn MobileNav() -> impl IntoView {
    view! {
        <nav class="md:hidden fixed bottom-0 left-0 right-0 z-40 backdrop-blur-md bg-slate-950/90 border-t border-slate-800">
            <div class="flex justify-around py-2">
                {ITEMS
                    .iter()
                    .map(|(id, icon, label)| {
                        view! {
                            <a href=section_href(id) class="flex flex-col items-center text-xs text-slate-400 hover:text-orange-400">
                                <span class="text-lg">{*icon}</span>
                                <span>{*label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
