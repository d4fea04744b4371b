use std::time::Duration;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::frontend::browser::copy_to_clipboard;

const COPIED_FOR: Duration = Duration::from_secs(2);

/// Renders pre-sanitised HTML from the markdown service and handles the
/// copy buttons of its code blocks.
#[component]
pub fn MarkdownView(#[prop(into)] html: String) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        let Some(button) = ev
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(".copy-button").ok().flatten())
        else {
            return;
        };
        if let Some(code) = button.get_attribute("data-code") {
            copy_to_clipboard(&code);
            button.set_text_content(Some("Copied!"));
            set_timeout(move || button.set_text_content(Some("Copy")), COPIED_FOR);
        }
    };

    view! {
        <div class="markdown-body prose prose-invert max-w-none" inner_html=html on:click=on_click></div>
    }
}
