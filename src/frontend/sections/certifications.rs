use chrono::Utc;
use leptos::prelude::*;

use super::SectionHeading;
use crate::fetch::filter::{self, ALL};
use crate::frontend::Backend;
use crate::frontend::components::{EmptyState, FilterBar, FilterOption, Modal};
use crate::frontend::hooks::{fetch_view, use_fetch};
use crate::models::{Achievement, AchievementCategory, Certification, CertificationCategory};
use crate::store::content::list_credentials;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Certifications,
    Achievements,
}

#[component]
pub fn Certifications() -> impl IntoView {
    let backend = expect_context::<Backend>();
    let credentials = use_fetch("Failed to load data. Please try again later.", move || {
        let store = backend.store();
        async move { list_credentials(&store).await }
    });
    let tab = RwSignal::new(Tab::Certifications);
    let cert_filter = RwSignal::new(ALL.to_string());
    let achievement_filter = RwSignal::new(ALL.to_string());
    let selected = RwSignal::new(None::<Certification>);

    view! {
        <section id="certifications" class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="Certifications & Achievements"
                    subtitle="Professional credentials and recognition collected along the way."
                />
                <div class="flex justify-center gap-2 mb-8">
                    <TabButton tab=tab value=Tab::Certifications label="Certifications"/>
                    <TabButton tab=tab value=Tab::Achievements label="Achievements"/>
                </div>
                {fetch_view(
                    credentials.state,
                    6,
                    "No certifications or achievements yet.",
                    move |(certifications, achievements): &(Vec<Certification>, Vec<Achievement>)| {
                        let certifications = certifications.clone();
                        let achievements = achievements.clone();
                        move || match tab.get() {
                            Tab::Certifications => certification_list(&certifications, cert_filter, selected).into_any(),
                            Tab::Achievements => achievement_list(&achievements, achievement_filter).into_any(),
                        }
                    },
                )}
            </div>
            {move || selected.get().map(|cert| certificate_modal(cert, selected))}
        </section>
    }
}

#[component]
fn TabButton(tab: RwSignal<Tab>, value: Tab, label: &'static str) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || {
                if tab.get() == value {
                    "px-6 py-3 rounded-lg font-medium bg-orange-500 text-white"
                } else {
                    "px-6 py-3 rounded-lg font-medium text-slate-400 hover:bg-slate-800"
                }
            }
            on:click=move |_| tab.set(value)
        >
            {label}
        </button>
    }
}

fn category_options(
    all_label: &str,
    categories: &[(&'static str, &'static str)],
    counts: Vec<(String, usize)>,
) -> Vec<FilterOption> {
    counts
        .into_iter()
        .map(|(value, count)| {
            let label = if value == ALL {
                all_label.to_string()
            } else {
                categories
                    .iter()
                    .find(|(v, _)| *v == value)
                    .map(|(_, label)| label.to_string())
                    .unwrap_or_else(|| value.clone())
            };
            FilterOption::new(value, label).with_count(count)
        })
        .collect()
}

fn certification_list(
    certifications: &[Certification],
    selected_filter: RwSignal<String>,
    selected: RwSignal<Option<Certification>>,
) -> impl IntoView + use<> {
    let categories: Vec<(&'static str, &'static str)> = CertificationCategory::ALL
        .iter()
        .map(|c| (c.as_str(), c.label()))
        .collect();
    let values: Vec<&str> = std::iter::once(ALL)
        .chain(categories.iter().map(|(v, _)| *v))
        .collect();
    let counts = filter::counts(certifications, &values, |c, v| c.category == v);
    let options = category_options("All Certifications", &categories, counts);

    let certifications = certifications.to_vec();
    let cards = move || {
        let current = selected_filter.get();
        let visible = filter::apply(&certifications, &current, |c, v| c.category == v);
        if visible.is_empty() {
            return view! { <EmptyState message="No certifications in this category."/> }.into_any();
        }
        let today = Utc::now().date_naive();
        visible
            .into_iter()
            .map(|cert| {
                let cert = cert.clone();
                let expired = cert.is_expired(today);
                let title = cert.title.clone();
                let issuer = cert.issuer.clone();
                let issued = cert.issue_date.format("%B %Y").to_string();
                let image = cert.image_url.clone();
                view! {
                    <button
                        type="button"
                        class="text-left rounded-xl border border-slate-800 bg-slate-900/50 overflow-hidden hover:border-orange-500/50 transition-colors"
                        on:click=move |_| selected.set(Some(cert.clone()))
                    >
                        <img src=image alt=title.clone() class="w-full h-40 object-cover"/>
                        <div class="p-6">
                            <h3 class="text-lg font-semibold mb-1">{title}</h3>
                            <p class="text-sm text-orange-300 mb-2">{issuer}</p>
                            <p class="text-xs text-slate-500">
                                {issued}
                                {expired.then(|| view! { <span class="ml-2 text-red-400">"Expired"</span> })}
                            </p>
                        </div>
                    </button>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <FilterBar options=options selected=selected_filter/>
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>
    }
}

fn achievement_list(
    achievements: &[Achievement],
    selected_filter: RwSignal<String>,
) -> impl IntoView + use<> {
    let categories: Vec<(&'static str, &'static str)> = [
        (AchievementCategory::Award, "Awards"),
        (AchievementCategory::Recognition, "Recognition"),
        (AchievementCategory::Milestone, "Milestones"),
    ]
    .iter()
    .map(|(c, label)| (c.as_str(), *label))
    .collect();
    let values: Vec<&str> = std::iter::once(ALL)
        .chain(categories.iter().map(|(v, _)| *v))
        .collect();
    let counts = filter::counts(achievements, &values, |a, v| a.category == v);
    let options = category_options("All Achievements", &categories, counts);

    let achievements = achievements.to_vec();
    let cards = move || {
        let current = selected_filter.get();
        let visible = filter::apply(&achievements, &current, |a, v| a.category == v);
        if visible.is_empty() {
            return view! { <EmptyState message="No achievements in this category."/> }.into_any();
        }
        visible
            .into_iter()
            .map(|achievement| {
                view! {
                    <div class="rounded-xl border border-slate-800 bg-slate-900/50 p-6">
                        <div class="flex items-start gap-4">
                            <span class="text-4xl">{achievement.icon.clone()}</span>
                            <div>
                                <h3 class="text-lg font-semibold">{achievement.title.clone()}</h3>
                                <p class="text-sm text-orange-300 mb-2">{achievement.description.clone()}</p>
                                <p class="text-xs text-slate-500 mb-3">{achievement.date.format("%B %Y").to_string()}</p>
                                <p class="text-sm text-slate-400">{achievement.details.clone()}</p>
                            </div>
                        </div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <FilterBar options=options selected=selected_filter/>
        <div class="grid md:grid-cols-2 gap-6">{cards}</div>
    }
}

fn certificate_modal(
    cert: Certification,
    selected: RwSignal<Option<Certification>>,
) -> impl IntoView {
    let skills = cert
        .skills
        .iter()
        .map(|skill| {
            view! {
                <span class="px-3 py-1 text-sm rounded-full bg-orange-500/10 text-orange-300">
                    {skill.clone()}
                </span>
            }
        })
        .collect_view();
    let expiry = cert.expiry_date.map(|date| {
        view! {
            <div>
                <p class="text-xs text-slate-500">"Expires"</p>
                <p>{date.format("%B %-d, %Y").to_string()}</p>
            </div>
        }
    });

    view! {
        <Modal title=cert.title.clone() on_close=Callback::new(move |_| selected.set(None))>
            <img src=cert.image_url.clone() alt=cert.title.clone() class="w-full max-h-72 object-cover rounded-lg mb-6"/>
            <div class="grid sm:grid-cols-2 gap-4 mb-6">
                <div>
                    <p class="text-xs text-slate-500">"Issuer"</p>
                    <p>{cert.issuer.clone()}</p>
                </div>
                <div>
                    <p class="text-xs text-slate-500">"Issued"</p>
                    <p>{cert.issue_date.format("%B %-d, %Y").to_string()}</p>
                </div>
                {expiry}
                <div>
                    <p class="text-xs text-slate-500">"Credential ID"</p>
                    <p class="font-mono">{cert.credential_id.clone()}</p>
                </div>
            </div>
            <p class="text-slate-400 mb-6">{cert.description.clone()}</p>
            <div class="flex flex-wrap gap-2 mb-6">{skills}</div>
            <a href=cert.verification_url.clone() target="_blank" rel="noopener noreferrer" class="btn-primary">
                "Verify Certificate"
            </a>
        </Modal>
    }
}
