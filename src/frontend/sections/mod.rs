//! Portfolio page sections, top to bottom

mod about;
mod blog;
mod certifications;
mod contact;
mod hero;
mod projects;
mod research;

pub use about::About;
pub use blog::Blog;
pub use certifications::Certifications;
pub use contact::Contact;
pub use hero::Hero;
pub use projects::Projects;
pub use research::Research;

use leptos::prelude::*;

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold mb-6 bg-gradient-to-r from-orange-400 to-amber-400 bg-clip-text text-transparent">
                {title}
            </h2>
            <p class="text-lg text-slate-400 max-w-3xl mx-auto">{subtitle}</p>
        </div>
    }
}

/// Emoji stand-ins for the icon names stored with skills.
fn skill_icon(name: &str) -> &'static str {
    match name {
        "Zap" => "⚡",
        "BookOpen" => "📖",
        "Lightbulb" => "💡",
        "Database" => "🗄️",
        "Cloud" => "☁️",
        "Smartphone" => "📱",
        "Award" => "🏅",
        "Users" => "👥",
        _ => "💻",
    }
}
