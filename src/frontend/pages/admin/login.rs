use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::frontend::components::{Button, EmailInput, ErrorAlert, PasswordInput};
use crate::frontend::{Backend, Navigator};
use crate::services::auth::AuthProvider;

/// Email/password sign-in. Success is observed by the gate through the
/// session hub, so this form only reports failures.
#[component]
pub fn LoginForm() -> impl IntoView {
    let backend = expect_context::<Backend>();
    let navigator = expect_context::<Navigator>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        error.set(None);
        let auth = backend.auth();
        let (email, password) = (email.get_untracked(), password.get_untracked());
        spawn_local(async move {
            if let Err(e) = auth.sign_in(email.trim(), &password).await {
                tracing::warn!(error = %e, "sign-in failed");
                error.try_set(Some(e.to_string()));
            }
            loading.try_set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950">
            <div class="w-full max-w-md rounded-2xl border border-slate-800 bg-slate-900/80 p-8 shadow-2xl">
                <h1 class="text-3xl font-bold text-white text-center mb-2">"Admin Login"</h1>
                <p class="text-slate-400 text-center mb-8">"Sign in to manage your portfolio content"</p>
                {move || error.get().map(|message| view! { <ErrorAlert message=message/> })}
                <form class="space-y-6" on:submit=on_submit>
                    <EmailInput label="Email" value=email/>
                    <PasswordInput label="Password" value=password/>
                    <Button loading=loading loading_text="Signing in...">
                        "Sign In"
                    </Button>
                </form>
                <button
                    type="button"
                    class="block mx-auto mt-6 text-sm text-slate-400 hover:text-orange-400"
                    on:click=move |_| navigator.home()
                >
                    "← Back to home"
                </button>
            </div>
        </div>
    }
}
