use leptos::prelude::*;

use super::{SectionHeading, skill_icon};
use crate::frontend::Backend;
use crate::frontend::hooks::{fetch_view, use_fetch};
use crate::models::Skill;
use crate::store::content::list_featured_skills;

const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    ("🏅", "5+", "Research Publications"),
    ("💻", "20+", "Open Source Projects"),
    ("👥", "10+", "Collaboration Projects"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkillsView {
    Compact,
    Detailed,
}

#[component]
pub fn About() -> impl IntoView {
    let backend = expect_context::<Backend>();
    let skills = use_fetch("Failed to load skills. Please try again later.", move || {
        let store = backend.store();
        async move { list_featured_skills(&store).await }
    });
    let layout = RwSignal::new(SkillsView::Compact);

    view! {
        <section id="about" class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="About Me"
                    subtitle="Software engineer and researcher working where practical development meets academic inquiry."
                />
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div class="space-y-6">
                        <div class="rounded-xl border border-slate-800 bg-slate-900/50 p-8">
                            <h3 class="text-2xl font-bold mb-4">"My Journey"</h3>
                            <p class="text-slate-400 leading-relaxed mb-4">
                                "My work moves between web platforms, distributed systems and machine learning research, \
                                 with the same goal throughout: software that holds up in real use."
                            </p>
                            <p class="text-slate-400 leading-relaxed">
                                "I value open-source collaboration and steady learning, and spend my spare time \
                                 on new tools, papers and the developer community."
                            </p>
                        </div>
                        <div class="grid grid-cols-3 gap-4">
                            {HIGHLIGHTS
                                .iter()
                                .map(|(icon, value, title)| {
                                    view! {
                                        <div class="rounded-xl border border-slate-800 bg-slate-900/50 p-4 text-center">
                                            <p class="text-2xl mb-2">{*icon}</p>
                                            <p class="text-2xl font-bold text-orange-400">{*value}</p>
                                            <p class="text-sm text-slate-400">{*title}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <div class="flex items-center justify-between mb-6">
                            <h3 class="text-2xl font-bold">"Skills & Expertise"</h3>
                            <div class="flex gap-2">
                                <ViewToggle layout=layout value=SkillsView::Compact label="Compact"/>
                                <ViewToggle layout=layout value=SkillsView::Detailed label="Detailed"/>
                            </div>
                        </div>
                        {fetch_view(skills.state, 4, "No featured skills yet.", move |skills: &Vec<Skill>| {
                            let skills = skills.clone();
                            move || match layout.get() {
                                SkillsView::Compact => compact_skills(&skills).into_any(),
                                SkillsView::Detailed => detailed_skills(&skills).into_any(),
                            }
                        })}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ViewToggle(
    layout: RwSignal<SkillsView>,
    value: SkillsView,
    label: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || {
                if layout.get() == value {
                    "px-3 py-2 rounded-lg text-sm font-medium bg-orange-500 text-white"
                } else {
                    "px-3 py-2 rounded-lg text-sm font-medium text-slate-400 hover:bg-slate-800"
                }
            }
            on:click=move |_| layout.set(value)
        >
            {label}
        </button>
    }
}

fn compact_skills(skills: &[Skill]) -> impl IntoView + use<> {
    let cards = skills
        .iter()
        .map(|skill| {
            let width = format!("width: {}%", skill.proficiency_percent());
            view! {
                <div class="rounded-xl border border-slate-800 bg-slate-900/50 p-4">
                    <div class="flex items-center justify-between mb-2">
                        <span class="font-semibold">{format!("{} {}", skill_icon(&skill.icon), skill.name)}</span>
                        <span class="text-xs text-slate-400">{skill.proficiency_label()}</span>
                    </div>
                    <div class="h-2 rounded-full bg-slate-800">
                        <div class="h-2 rounded-full bg-gradient-to-r from-orange-500 to-amber-500" style=width></div>
                    </div>
                </div>
            }
        })
        .collect_view();
    view! { <div class="grid sm:grid-cols-2 gap-4">{cards}</div> }
}

fn detailed_skills(skills: &[Skill]) -> impl IntoView + use<> {
    let cards = skills
        .iter()
        .map(|skill| {
            let technologies = skill
                .technologies
                .iter()
                .map(|tech| {
                    view! {
                        <span class="px-3 py-1 text-sm rounded-full bg-orange-500/10 text-orange-300">
                            {tech.clone()}
                        </span>
                    }
                })
                .collect_view();
            view! {
                <div class="rounded-xl border border-slate-800 bg-slate-900/50 p-6">
                    <div class="flex items-center mb-4 gap-3">
                        <span class="text-2xl">{skill_icon(&skill.icon)}</span>
                        <div>
                            <h4 class="text-xl font-semibold">{skill.name.clone()}</h4>
                            <p class="text-sm text-slate-400">
                                {format!("{} · {} years", skill.proficiency_label(), skill.years_experience)}
                            </p>
                        </div>
                    </div>
                    <p class="text-slate-400 text-sm mb-4">{skill.description.clone()}</p>
                    <div class="flex flex-wrap gap-2">{technologies}</div>
                </div>
            }
        })
        .collect_view();
    view! { <div class="space-y-4">{cards}</div> }
}
