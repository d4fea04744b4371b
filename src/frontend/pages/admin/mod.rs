//! Admin area: session gate, login form and the content dashboard

mod login;
mod manager;
mod overview;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::frontend::components::{Button, ButtonVariant};
use crate::frontend::{Backend, Navigator};
use crate::gate::{GateState, SessionGate, check_session};
use crate::models::{Achievement, BlogPost, Certification, Skill};
use crate::services::auth::AuthProvider;
use login::LoginForm;
use manager::{manager_panel, publish_toggle};
use overview::Overview;

#[component]
pub fn AdminPage() -> impl IntoView {
    let backend = expect_context::<Backend>();
    let auth = backend.auth();
    let gate = RwSignal::new(SessionGate::new());
    let email = RwSignal::new(String::new());

    let subscription = auth.subscribe(move |event| {
        gate.try_update(|g| g.on_event(event));
        email.try_set(event.session().map(|s| s.email().to_string()).unwrap_or_default());
    });
    on_cleanup(move || subscription.unsubscribe());

    spawn_local({
        let auth = auth.clone();
        async move {
            let has_session = check_session(&auth).await;
            let settled = gate.try_update(|g| g.resolve_check(has_session)).unwrap_or(false);
            if settled {
                let current = auth.hub().session().map(|s| s.email().to_string());
                email.try_set(current.unwrap_or_default());
            }
        }
    });

    move || match gate.with(SessionGate::state) {
        GateState::Checking => view! {
            <div class="min-h-screen flex items-center justify-center bg-slate-950">
                <span class="w-12 h-12 border-4 border-orange-500/30 border-t-orange-500 rounded-full animate-spin"></span>
            </div>
        }
        .into_any(),
        GateState::Unauthenticated => view! { <LoginForm/> }.into_any(),
        GateState::Authenticated => view! { <Dashboard email=email/> }.into_any(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Blog,
    Certifications,
    Achievements,
    Skills,
}

impl Tab {
    const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Blog,
        Tab::Certifications,
        Tab::Achievements,
        Tab::Skills,
    ];

    fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Blog => "Blog Posts",
            Tab::Certifications => "Certifications",
            Tab::Achievements => "Achievements",
            Tab::Skills => "Skills",
        }
    }
}

#[component]
fn Dashboard(email: RwSignal<String>) -> impl IntoView {
    let backend = expect_context::<Backend>();
    let navigator = expect_context::<Navigator>();
    let tab = RwSignal::new(Tab::Overview);

    let signing_out = RwSignal::new(false);
    let sign_out = move |_| {
        signing_out.set(true);
        let auth = backend.auth();
        spawn_local(async move {
            if let Err(e) = auth.sign_out().await {
                crate::log_err!("sign out", e);
            }
            signing_out.try_set(false);
        });
    };

    let tabs = Tab::ALL
        .into_iter()
        .map(|value| {
            view! {
                <button
                    type="button"
                    class=move || {
                        if tab.get() == value {
                            "px-4 py-3 border-b-2 border-orange-500 text-orange-400 font-medium"
                        } else {
                            "px-4 py-3 border-b-2 border-transparent text-slate-400 hover:text-white"
                        }
                    }
                    on:click=move |_| tab.set(value)
                >
                    {value.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-slate-950 text-white">
            <nav class="border-b border-slate-800 bg-slate-900/80">
                <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                    <div>
                        <h1 class="text-xl font-bold">"Admin Dashboard"</h1>
                        <p class="text-sm text-slate-400">{move || email.get()}</p>
                    </div>
                    <div class="flex items-center gap-3">
                        <button type="button" class="btn-ghost" on:click=move |_| navigator.home()>
                            "← Back to Site"
                        </button>
                        <Button
                            variant=ButtonVariant::Danger
                            loading=signing_out
                            loading_text="Signing out..."
                            button_type="button"
                            on:click=sign_out
                        >
                            "Sign Out"
                        </Button>
                    </div>
                </div>
                <div class="max-w-7xl mx-auto px-6 flex gap-2 overflow-x-auto">{tabs}</div>
            </nav>
            <main class="max-w-7xl mx-auto px-6 py-8">
                {move || match tab.get() {
                    Tab::Overview => view! { <Overview/> }.into_any(),
                    Tab::Blog => manager_panel::<BlogPost>(Some(publish_toggle::<BlogPost>)).into_any(),
                    Tab::Certifications => manager_panel::<Certification>(None).into_any(),
                    Tab::Achievements => manager_panel::<Achievement>(None).into_any(),
                    Tab::Skills => manager_panel::<Skill>(None).into_any(),
                }}
            </main>
        </div>
    }
}
