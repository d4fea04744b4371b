use leptos::prelude::*;
use leptos::task::spawn_local;

use super::SectionHeading;
use crate::config::{github_user, profile};
use crate::fetch::filter::{self, ALL};
use crate::frontend::components::{FilterBar, FilterOption, MarkdownView, Modal};
use crate::frontend::hooks::{fetch_view, use_fetch};
use crate::models::Project;
use crate::services::github::GithubClient;
use crate::services::markdown;

/// The project whose README is open; `readme` is `None` while it loads.
#[derive(Debug, Clone, PartialEq)]
struct ReadmeModal {
    project: Project,
    readme: Option<String>,
}

#[component]
pub fn Projects() -> impl IntoView {
    let projects = use_fetch("Failed to load projects from GitHub.", || {
        let client = GithubClient::new(github_user());
        async move { client.showcase_projects().await }
    });
    let language = RwSignal::new(ALL.to_string());
    let modal = RwSignal::new(None::<ReadmeModal>);

    view! {
        <section id="projects" class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="Featured Projects"
                    subtitle="Recent open-source work, pulled live from GitHub."
                />
                {fetch_view(projects.state, 6, "No projects found.", move |projects: &Vec<Project>| {
                    let options = filter::options(projects, |p| p.language.as_deref())
                        .into_iter()
                        .map(|value| {
                            let label = if value == ALL { "All".to_string() } else { value.clone() };
                            FilterOption::new(value, label)
                        })
                        .collect::<Vec<_>>();
                    let projects = projects.clone();
                    let grid = move || {
                        let selected = language.get();
                        filter::apply(&projects, &selected, |p, lang| p.language.as_deref() == Some(lang))
                            .into_iter()
                            .map(|project| project_card(project.clone(), modal))
                            .collect_view()
                    };
                    view! {
                        <FilterBar options=options selected=language/>
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{grid}</div>
                    }
                })}
                <div class="text-center mt-12">
                    <a href=profile::GITHUB_URL target="_blank" rel="noopener noreferrer" class="btn-ghost">
                        "View All on GitHub"
                    </a>
                </div>
            </div>
            {move || modal.get().map(|open| readme_modal(open, modal))}
        </section>
    }
}

fn open_readme(project: Project, modal: RwSignal<Option<ReadmeModal>>) {
    let id = project.id;
    modal.set(Some(ReadmeModal {
        project: project.clone(),
        readme: None,
    }));
    spawn_local(async move {
        let readme = GithubClient::new(&project.owner.login)
            .readme_or_fallback(&project)
            .await;
        // The reader may have closed this modal or opened another one.
        modal.update(|current| {
            if let Some(current) = current.as_mut().filter(|m| m.project.id == id) {
                current.readme = Some(readme);
            }
        });
    });
}

fn project_card(project: Project, modal: RwSignal<Option<ReadmeModal>>) -> impl IntoView {
    let preview = project.preview_image();
    let topics = project
        .topics
        .iter()
        .take(3)
        .map(|topic| {
            view! {
                <span class="px-2 py-1 text-xs rounded-full bg-amber-500/10 text-amber-300">
                    {topic.clone()}
                </span>
            }
        })
        .collect_view();
    let demo = project.demo_url().map(|href| {
        view! {
            <a href=href.to_string() target="_blank" rel="noopener noreferrer" class="px-4 py-2 rounded-lg bg-orange-500/10 text-orange-300 hover:bg-orange-500/20">
                "Live Demo"
            </a>
        }
    });
    let updated = project.updated_at.format("%b %Y").to_string();
    let description = project
        .description
        .clone()
        .unwrap_or_else(|| "No description available".to_string());

    view! {
        <article class="rounded-xl border border-slate-800 bg-slate-900/50 p-6 hover:border-orange-500/50 transition-colors">
            <button
                type="button"
                class="block w-full mb-4 overflow-hidden rounded-lg"
                aria-label="View README"
                on:click={
                    let project = project.clone();
                    move |_| open_readme(project.clone(), modal)
                }
            >
                <img src=preview alt=format!("{} preview", project.name) class="w-full h-48 object-cover hover:scale-105 transition-transform"/>
            </button>
            <div class="flex items-start justify-between mb-4">
                <h3 class="text-xl font-bold">{project.name.clone()}</h3>
                <span class="text-sm text-slate-400">
                    {format!("★ {}  ⑂ {}", project.stargazers_count, project.forks_count)}
                </span>
            </div>
            <p class="text-slate-400 mb-4 leading-relaxed">{description}</p>
            <div class="flex flex-wrap gap-2 mb-4">{topics}</div>
            <div class="flex items-center justify-between mb-4 text-sm text-slate-500">
                <span>{project.language.clone().unwrap_or_default()}</span>
                <span>{updated}</span>
            </div>
            <div class="flex gap-3">
                <a href=project.html_url.clone() target="_blank" rel="noopener noreferrer" class="px-4 py-2 rounded-lg bg-slate-800 text-slate-300 hover:bg-slate-700">
                    "Code"
                </a>
                {demo}
            </div>
        </article>
    }
}

fn readme_modal(open: ReadmeModal, modal: RwSignal<Option<ReadmeModal>>) -> impl IntoView {
    let title = format!("{} · README.md", open.project.name);
    let body = match open.readme {
        Some(readme) => {
            let html = markdown::render(&readme, Some(&open.project.html_url));
            view! { <MarkdownView html=html/> }.into_any()
        }
        None => view! {
            <div class="flex items-center justify-center gap-3 py-12 text-slate-400">
                <span class="w-6 h-6 border-2 border-orange-500/30 border-t-orange-500 rounded-full animate-spin"></span>
                "Loading README..."
            </div>
        }
        .into_any(),
    };

    view! {
        <Modal title=title on_close=Callback::new(move |_| modal.set(None))>
            {body}
        </Modal>
    }
}
