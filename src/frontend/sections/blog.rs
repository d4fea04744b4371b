use leptos::prelude::*;

use super::SectionHeading;
use crate::fetch::filter::{self, ALL};
use crate::frontend::components::{EmptyState, FilterBar, FilterOption};
use crate::frontend::hooks::{fetch_view, use_fetch};
use crate::frontend::{Backend, Navigator};
use crate::models::BlogPost;
use crate::navigation::{ScrollHandoff, blog_card_id};
use crate::store::content::list_published_posts;

#[component]
pub fn Blog() -> impl IntoView {
    let backend = expect_context::<Backend>();
    let navigator = expect_context::<Navigator>();
    let posts = use_fetch("Failed to load blog posts. Please try again later.", move || {
        let store = backend.store();
        async move { list_published_posts(&store).await }
    });
    let tag = RwSignal::new(ALL.to_string());

    view! {
        <section id="blog" class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="Blog & Insights"
                    subtitle="Notes on software engineering, research and the tools in between."
                />
                {fetch_view(posts.state, 3, "No blog posts available", move |posts: &Vec<BlogPost>| {
                    let options = filter::options(posts, |p| p.tags.iter().map(String::as_str))
                        .into_iter()
                        .map(|value| {
                            let label = if value == ALL { "All Posts".to_string() } else { value.clone() };
                            FilterOption::new(value, label)
                        })
                        .collect::<Vec<_>>();
                    let posts = posts.clone();
                    let cards = move || {
                        let selected = tag.get();
                        let visible = filter::apply(&posts, &selected, |p, t| p.has_tag(t));
                        if visible.is_empty() {
                            return view! { <EmptyState message="No posts found for this tag"/> }.into_any();
                        }
                        visible
                            .into_iter()
                            .enumerate()
                            .map(|(index, post)| post_card(index, post, navigator))
                            .collect_view()
                            .into_any()
                    };
                    view! {
                        <FilterBar options=options selected=tag/>
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div>
                    }
                })}
            </div>
        </section>
    }
}

fn post_card(index: usize, post: &BlogPost, navigator: Navigator) -> impl IntoView + use<> {
    let slug = post.slug.clone();
    let tags = post
        .tags
        .iter()
        .map(|tag| {
            view! {
                <span class="px-2 py-1 text-xs rounded-full bg-orange-500/10 text-orange-300">
                    {tag.clone()}
                </span>
            }
        })
        .collect_view();

    view! {
        <article
            id=blog_card_id(index)
            class="cursor-pointer rounded-xl border border-slate-800 bg-slate-900/50 p-6 hover:border-orange-500/50 transition-colors"
            on:click=move |_| navigator.blog_post(&slug, Some(ScrollHandoff::blog_card(index)))
        >
            <div class="flex flex-wrap gap-2 mb-4">{tags}</div>
            <h3 class="text-xl font-bold mb-3">{post.title.clone()}</h3>
            <p class="text-slate-400 mb-4 leading-relaxed">{post.excerpt.clone()}</p>
            <div class="flex items-center justify-between text-sm text-slate-500 mb-4">
                <span>{post.display_date()}</span>
                <span>{format!("{} min read", post.read_time)}</span>
            </div>
            <span class="text-orange-400 font-medium">"Read More →"</span>
        </article>
    }
}
