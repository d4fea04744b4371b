use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::Title;

use super::NotFound;
use crate::fetch::FetchState;
use crate::frontend::browser::{copy_to_clipboard, current_url};
use crate::frontend::components::{ErrorPanel, Footer, Header, MarkdownView, MobileNav};
use crate::frontend::hooks::use_fetch;
use crate::frontend::{Backend, Navigator};
use crate::models::BlogPost;
use crate::services::markdown;
use crate::store::content::get_published_by_slug;

const SHARE_FEEDBACK: Duration = Duration::from_secs(2);

/// A single published post, addressed by its slug.
#[component]
pub fn BlogPostPage(slug: String) -> impl IntoView {
    let backend = expect_context::<Backend>();
    let navigator = expect_context::<Navigator>();
    let post = use_fetch("Failed to load blog post. Please try again later.", move || {
        let store = backend.store();
        let slug = slug.clone();
        async move { get_published_by_slug(&store, &slug).await }
    });

    let body = move || {
        post.state.with(|state| match state {
            FetchState::Loading => view! {
                <div class="flex items-center justify-center min-h-[60vh]">
                    <span class="w-10 h-10 border-4 border-orange-500/30 border-t-orange-500 rounded-full animate-spin"></span>
                </div>
            }
            .into_any(),
            FetchState::Error(message) => view! {
                <div class="pt-32 px-6"><ErrorPanel message=message.clone()/></div>
            }
            .into_any(),
            FetchState::Success(None) => view! {
                <NotFound
                    title="Post not found"
                    message="The blog post you're looking for doesn't exist or hasn't been published yet."
                />
            }
            .into_any(),
            FetchState::Success(Some(post)) => article(post, navigator).into_any(),
        })
    };

    view! {
        <div class="min-h-screen bg-slate-950 text-white">
            <Header/>
            {body}
            <Footer/>
            <MobileNav/>
        </div>
    }
}

fn article(post: &BlogPost, navigator: Navigator) -> impl IntoView + use<> {
    let copied = RwSignal::new(false);
    let share = move |_| {
        copy_to_clipboard(&current_url());
        copied.set(true);
        set_timeout(move || copied.set(false), SHARE_FEEDBACK);
    };
    let tags = post
        .tags
        .iter()
        .map(|tag| {
            view! {
                <span class="px-3 py-1 text-sm rounded-full bg-orange-500/10 text-orange-300">
                    {tag.clone()}
                </span>
            }
        })
        .collect_view();
    let html = markdown::render(&post.content, None);

    view! {
        <Title text=post.title.clone()/>
        <article class="max-w-3xl mx-auto pt-32 pb-24 px-6">
            <button
                type="button"
                class="mb-8 text-slate-400 hover:text-orange-400 transition-colors"
                on:click=move |_| navigator.home()
            >
                "← Back to Home"
            </button>
            <div class="flex flex-wrap gap-2 mb-6">{tags}</div>
            <h1 class="text-4xl md:text-5xl font-bold mb-6">{post.title.clone()}</h1>
            <div class="flex flex-wrap items-center gap-6 mb-8 text-slate-400">
                <span>{post.display_date()}</span>
                <span>{format!("{} min read", post.read_time)}</span>
                <button type="button" class="hover:text-orange-400 transition-colors" on:click=share>
                    {move || if copied.get() { "Link copied!" } else { "Share" }}
                </button>
            </div>
            <p class="text-xl text-slate-300 mb-12 leading-relaxed">{post.excerpt.clone()}</p>
            <MarkdownView html=html/>
        </article>
    }
}
