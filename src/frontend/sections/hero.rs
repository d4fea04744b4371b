use leptos::prelude::*;

use crate::config::profile;

#[component]
pub fn Hero() -> impl IntoView {
    let avatar = format!("https://github.com/{}.png", profile::GITHUB_USER);
    let socials = [
        ("GitHub", profile::GITHUB_URL.to_string()),
        ("LinkedIn", profile::LINKEDIN_URL.to_string()),
        ("X", profile::X_URL.to_string()),
        ("Email", format!("mailto:{}", profile::EMAIL)),
    ];

    view! {
        <section id="hero" class="relative min-h-screen flex items-center justify-center overflow-hidden pt-20">
            <div class="absolute inset-0 opacity-30 pointer-events-none">
                <div class="absolute top-1/4 left-1/4 w-64 h-64 bg-orange-500/20 rounded-full blur-3xl"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-amber-500/20 rounded-full blur-3xl"></div>
            </div>
            <div class="relative z-10 max-w-4xl mx-auto px-6 text-center">
                <img src=avatar alt=profile::NAME class="w-40 h-40 mx-auto mb-8 rounded-full object-cover ring-4 ring-orange-500/60"/>
                <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold mb-4">
                    <span class="bg-gradient-to-r from-orange-400 to-amber-400 bg-clip-text text-transparent">
                        {profile::NAME}
                    </span>
                </h1>
                <p class="text-xl sm:text-2xl text-slate-300 font-medium mb-6">{profile::ROLE}</p>
                <p class="text-lg text-slate-400 mb-8 max-w-3xl mx-auto leading-relaxed">{profile::TAGLINE}</p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                    <a href="#projects" class="btn-primary">"View My Work"</a>
                    <a href="#contact" class="btn-ghost">"Get In Touch"</a>
                </div>
                <div class="flex justify-center gap-6 mb-16">
                    {socials
                        .into_iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=label
                                    class="px-4 py-2 rounded-lg border border-slate-700 text-slate-300 hover:text-white hover:border-orange-500 transition-colors"
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <a href="#about" class="inline-block animate-bounce text-slate-500">"↓"</a>
            </div>
        </section>
    }
}
