use leptos::prelude::*;

use crate::frontend::Backend;
use crate::frontend::components::{ErrorPanel, SkeletonGrid};
use crate::frontend::hooks::use_fetch;
use crate::fetch::FetchState;
use crate::store::content::{DashboardStats, dashboard_stats};

#[component]
pub fn Overview() -> impl IntoView {
    let backend = expect_context::<Backend>();
    let stats = use_fetch("Failed to load dashboard statistics.", move || {
        let store = backend.store();
        async move { dashboard_stats(&store).await }
    });

    move || {
        stats.state.with(|state| match state {
            FetchState::Loading => view! { <SkeletonGrid count=3/> }.into_any(),
            FetchState::Error(message) => view! { <ErrorPanel message=message.clone()/> }.into_any(),
            FetchState::Success(stats) => stat_cards(*stats).into_any(),
        })
    }
}

fn stat_cards(stats: DashboardStats) -> impl IntoView {
    let cards = [
        ("📝", "Blog Posts", stats.total_posts, format!("{} published", stats.published_posts)),
        ("🎓", "Certifications", stats.certifications, String::new()),
        ("🏆", "Achievements", stats.achievements, String::new()),
        ("⚡", "Skills", stats.skills, format!("{} featured", stats.featured_skills)),
    ];

    view! {
        <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
            {cards
                .into_iter()
                .map(|(icon, label, value, note)| {
                    view! {
                        <div class="rounded-xl border border-slate-800 bg-slate-900/50 p-6">
                            <p class="text-3xl mb-3">{icon}</p>
                            <p class="text-3xl font-bold">{value}</p>
                            <p class="text-slate-400">{label}</p>
                            <p class="text-sm text-orange-300 mt-1">{note}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
