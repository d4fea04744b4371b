use leptos::prelude::*;

use super::SectionHeading;

struct Publication {
    title: &'static str,
    authors: &'static [&'static str],
    venue: &'static str,
    year: u16,
    kind: &'static str,
    summary: &'static str,
    link: &'static str,
    status: &'static str,
}

const SCHOLAR: &str = "https://scholar.google.com/citations?user=xfSa-0oAAAAJ&hl=en";

const PUBLICATIONS: &[Publication] = &[
    Publication {
        title: "Edge-Fog-Cloud Based Hierarchical Communication Network for Traffic Management System",
        authors: &[
            "Md. Jehad",
            "Md. Jobairul Hassan",
            "Yousuf Hossen",
            "Chondromollika Ahmed",
            "Shamim Akhter",
        ],
        venue: "Visual Sensing and Ubiquitous Computing",
        year: 2024,
        kind: "Book Chapter",
        summary: "A real-time hierarchical communication network for traffic management, splitting decisions across \
                  edge, fog and cloud layers and comparing it against an edge-cloud design for latency and security.",
        link: "https://www.researchgate.net/publication/390932306_Edge-Fog-Cloud_Based_Hierarchical_Communication_Network_for_Traffic_Management_System",
        status: "Published",
    },
    Publication {
        title: "Scalable Web Applications: A Performance Analysis",
        authors: &["Md. Jehadur Rahman Emran", "Research Collaborator"],
        venue: "Journal of Web Engineering",
        year: 2023,
        kind: "Journal Article",
        summary: "Performance optimisation techniques for modern web applications, with case studies and benchmarks.",
        link: SCHOLAR,
        status: "Published",
    },
    Publication {
        title: "Human-Computer Interaction in Educational Technology",
        authors: &["Md. Jehadur Rahman Emran", "Education Researcher"],
        venue: "International Journal of Educational Technology",
        year: 2023,
        kind: "Journal Article",
        summary: "Applying HCI principles to educational technology to improve digital learning experiences.",
        link: SCHOLAR,
        status: "Published",
    },
    Publication {
        title: "Blockchain Applications in Academic Research Management",
        authors: &["Md. Jehadur Rahman Emran", "Blockchain Researcher"],
        venue: "Future Generation Computer Systems",
        year: 2024,
        kind: "Journal Article",
        summary: "Blockchain for managing academic research data with transparency and immutability.",
        link: SCHOLAR,
        status: "Under Review",
    },
];

const AREAS: &[(&str, &str, &str)] = &[
    ("🤖", "Machine Learning", "ML models for software engineering and data analysis"),
    ("🌐", "Web Engineering", "Performance and scalability of web applications"),
    ("👥", "Human-Computer Interaction", "User experience design and interaction patterns"),
    ("📚", "Educational Technology", "Technology-enhanced learning and digital education"),
];

#[component]
pub fn Research() -> impl IntoView {
    view! {
        <section id="research" class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="Research & Publications"
                    subtitle="Academic work across distributed systems, web engineering and learning technology."
                />
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6 mb-16">
                    {AREAS
                        .iter()
                        .map(|(icon, title, description)| {
                            view! {
                                <div class="rounded-xl border border-slate-800 bg-slate-900/50 p-6 text-center">
                                    <p class="text-4xl mb-4">{*icon}</p>
                                    <h3 class="font-semibold mb-2">{*title}</h3>
                                    <p class="text-sm text-slate-400">{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="space-y-6">
                    {PUBLICATIONS.iter().map(publication_card).collect_view()}
                </div>
            </div>
        </section>
    }
}

fn publication_card(publication: &'static Publication) -> impl IntoView {
    let status_class = if publication.status == "Published" {
        "px-2 py-1 text-xs rounded-full bg-emerald-500/10 text-emerald-400"
    } else {
        "px-2 py-1 text-xs rounded-full bg-amber-500/10 text-amber-400"
    };

    view! {
        <article class="rounded-xl border border-slate-800 bg-slate-900/50 p-6">
            <div class="flex flex-wrap items-center gap-2 mb-3 text-sm text-slate-400">
                <span class="px-2 py-1 text-xs rounded-full bg-orange-500/10 text-orange-300">{publication.kind}</span>
                <span class=status_class>{publication.status}</span>
                <span>{publication.year}</span>
            </div>
            <h3 class="text-xl font-semibold mb-2">
                <a href=publication.link target="_blank" rel="noopener noreferrer" class="hover:text-orange-400">
                    {publication.title}
                </a>
            </h3>
            <p class="text-sm text-slate-500 mb-2">{publication.authors.join(", ")}</p>
            <p class="text-sm italic text-slate-400 mb-3">{publication.venue}</p>
            <p class="text-slate-400">{publication.summary}</p>
        </article>
    }
}
