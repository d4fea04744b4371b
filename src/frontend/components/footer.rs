use chrono::{Datelike, Utc};
use leptos::prelude::*;

use super::header::{SECTIONS, section_href};
use crate::config::profile;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();
    let socials = [
        ("GitHub", profile::GITHUB_URL.to_string()),
        ("LinkedIn", profile::LINKEDIN_URL.to_string()),
        ("X", profile::X_URL.to_string()),
        ("Email", format!("mailto:{}", profile::EMAIL)),
    ];

    view! {
        <footer class="border-t border-slate-800 bg-slate-900/50 pb-20 md:pb-0">
            <div class="max-w-6xl mx-auto px-6 py-12 grid gap-8 md:grid-cols-3">
                <div>
                    <p class="text-2xl font-bold mb-2">{profile::NAME}</p>
                    <p class="text-slate-400 mb-2">{profile::ROLE}</p>
                    <p class="text-sm text-emerald-400">{profile::AVAILABILITY}</p>
                </div>
                <div>
                    <p class="font-semibold mb-3">"Quick Links"</p>
                    <ul class="space-y-2">
                        {SECTIONS
                            .iter()
                            .map(|(id, label)| {
                                view! {
                                    <li>
                                        <a href=section_href(id) class="text-slate-400 hover:text-white">{*label}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <p class="font-semibold mb-3">"Connect"</p>
                    <ul class="space-y-2">
                        {socials
                            .into_iter()
                            .map(|(label, href)| {
                                view! {
                                    <li>
                                        <a href=href target="_blank" rel="noopener noreferrer" class="text-slate-400 hover:text-white">
                                            {label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <p class="text-center text-xs text-slate-600 pb-8">
                {format!("© {year} {}. All rights reserved.", profile::NAME)}
            </p>
        </footer>
    }
}
