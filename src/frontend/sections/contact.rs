use leptos::prelude::*;

use super::SectionHeading;
use crate::common::FormFeedback;
use crate::config::profile;
use crate::frontend::components::{
    Button, EmailInput, ErrorAlert, SuccessAlert, TextArea, TextInput,
};
use crate::services::contact::{
    ContactForm, ContactMessage, ContactPhase, RESET_DELAY, SEND_DELAY,
};

#[component]
pub fn Contact() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let form = RwSignal::new(ContactForm::default());
    let feedback = RwSignal::new(FormFeedback::default());
    let field_error = move |field: &'static str| {
        Signal::derive(move || feedback.with(|f| f.for_field(field).map(str::to_string)))
    };

    let clear_fields = move || {
        for field in [name, email, subject, message] {
            field.set(String::new());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = Ok(false);
        form.update(|form| {
            form.message = ContactMessage {
                name: name.get_untracked(),
                email: email.get_untracked(),
                subject: subject.get_untracked(),
                message: message.get_untracked(),
            };
            started = form.submit();
        });
        match started {
            Ok(true) => {
                feedback.set(FormFeedback::default());
                set_timeout(
                    move || {
                        form.update(ContactForm::delivered);
                        set_timeout(
                            move || {
                                form.update(ContactForm::reset);
                                clear_fields();
                            },
                            RESET_DELAY,
                        );
                    },
                    SEND_DELAY,
                );
            }
            Ok(false) => {}
            Err(e) => feedback.set(FormFeedback::from_error(&e)),
        }
    };

    let sending = Signal::derive(move || form.with(|f| f.phase() == ContactPhase::Sending));
    let sent = move || form.with(|f| f.phase() == ContactPhase::Sent);

    view! {
        <section id="contact" class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="Have a project, a research idea or just want to say hello? My inbox is open."
                />
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <div class="rounded-xl border border-slate-800 bg-slate-900/50 p-6">
                            <p class="text-sm text-slate-500">"Email"</p>
                            <a href=format!("mailto:{}", profile::EMAIL) class="text-lg text-orange-400">
                                {profile::EMAIL}
                            </a>
                        </div>
                        <div class="rounded-xl border border-slate-800 bg-slate-900/50 p-6">
                            <p class="text-sm text-slate-500">"Availability"</p>
                            <p class="text-lg text-emerald-400">{profile::AVAILABILITY}</p>
                        </div>
                    </div>
                    <form class="space-y-4 rounded-xl border border-slate-800 bg-slate-900/50 p-8" on:submit=on_submit>
                        <Show when=sent>
                            <SuccessAlert message="Thank you for your message! I'll get back to you soon."/>
                        </Show>
                        {move || {
                            feedback
                                .with(|f| f.panel().map(str::to_string))
                                .map(|message| view! { <ErrorAlert message=message/> })
                        }}
                        <div class="grid sm:grid-cols-2 gap-4">
                            <TextInput
                                label="Name"
                                name="name"
                                placeholder="Your name"
                                input_type="text"
                                required=true
                                value=name
                                error=field_error("name")
                            />
                            <EmailInput label="Email" value=email error=field_error("email")/>
                        </div>
                        <TextInput
                            label="Subject"
                            name="subject"
                            placeholder="What is this about?"
                            input_type="text"
                            required=true
                            value=subject
                            error=field_error("subject")
                        />
                        <TextArea
                            label="Message"
                            name="message"
                            placeholder="Tell me about your project..."
                            rows=6
                            required=true
                            value=message
                            error=field_error("message")
                        />
                        <Button loading=sending loading_text="Sending...">
                            "Send Message"
                        </Button>
                    </form>
                </div>
            </div>
        </section>
    }
}
